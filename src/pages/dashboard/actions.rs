//! Semantic action IDs for Dashboard click targets.

pub const FOCUS_SEARCH: u16 = 1;
pub const GO_LEARNING: u16 = 2;
pub const RETAKE_ASSESSMENT: u16 = 3;
pub const INDUSTRY_BASE: u16 = 10; // +0 = All, +1.. = INDUSTRIES
pub const QUICK_PICK_BASE: u16 = 20; // +quick pick index
