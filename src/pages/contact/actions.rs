//! Semantic action IDs for Contact click targets.

pub const SUBMIT: u16 = 1;
pub const CLEAR_CATEGORY: u16 = 2;
pub const FIELD_BASE: u16 = 10; // +ContactField index
pub const CATEGORY_BASE: u16 = 20; // +ContactCategory index
