//! Semantic action IDs for Login click targets.

pub const SUBMIT: u16 = 1;
pub const TOGGLE_REVEAL: u16 = 2;
pub const TOGGLE_REMEMBER: u16 = 3;
pub const GO_SIGNUP: u16 = 4;
pub const FIELD_BASE: u16 = 10; // +LoginField index
