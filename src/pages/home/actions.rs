//! Semantic action IDs for Home click targets.

pub const GET_STARTED: u16 = 1;
pub const LEARN_MORE: u16 = 2;
pub const START_JOURNEY: u16 = 3;
