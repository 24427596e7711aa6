//! Semantic action IDs for About click targets.

pub const START_ASSESSMENT: u16 = 1;
