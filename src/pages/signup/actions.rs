//! Semantic action IDs for Signup click targets.

pub const SUBMIT: u16 = 1;
pub const TOGGLE_REVEAL: u16 = 2;
pub const TOGGLE_REVEAL_CONFIRM: u16 = 3;
pub const TOGGLE_TERMS: u16 = 4;
pub const GO_LOGIN: u16 = 5;
pub const FIELD_BASE: u16 = 10; // +SignupField index
