//! Semantic action IDs for Assessment click targets.

pub const NEXT: u16 = 1;
pub const PREVIOUS: u16 = 2;
pub const OPTION_BASE: u16 = 10; // +index 0..3
