//! Semantic action IDs for Learning click targets.

pub const FOCUS_SEARCH: u16 = 1;
pub const CLEAR_FILTERS: u16 = 2;
pub const CYCLE_CATEGORY: u16 = 3;
pub const CYCLE_DIFFICULTY: u16 = 4;
pub const GO_ASSESSMENT: u16 = 5;
pub const CATEGORY_BASE: u16 = 10; // +0 = All, +1.. = CATEGORIES
pub const DIFFICULTY_BASE: u16 = 20; // +0 = All, +1.. = ALL_DIFFICULTIES
pub const BOOKMARK_BASE: u16 = 100; // +course index in the catalog
