//! Semantic action IDs for Profile click targets.

pub const NEXT: u16 = 1;
/// "Previous section", or back to signup from the first one.
pub const PREVIOUS: u16 = 2;
pub const FIELD_BASE: u16 = 10; // +text field index
pub const EDUCATION_BASE: u16 = 20; // +EducationLevel index
pub const SKILL_BASE: u16 = 30; // +SkillLevel index
pub const INTEREST_BASE: u16 = 40; // +INTERESTS index
