//! Profile draft split over three sections.

use crate::flow::selection::Selection;
use crate::flow::steps::StepNavigator;
use crate::forms::{FocusRing, TextField, Validation};

pub const INTERESTS: [&str; 17] = [
    "Technology",
    "Design",
    "Business",
    "Arts",
    "Healthcare",
    "Education",
    "Finance",
    "Marketing",
    "Engineering",
    "Science",
    "Writing",
    "Management",
    "Data Analysis",
    "Customer Service",
    "Sales",
    "Research",
    "Social Work",
];

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 70;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Phd,
    Other,
}

pub const EDUCATION_LEVELS: [EducationLevel; 6] = [
    EducationLevel::HighSchool,
    EducationLevel::Associate,
    EducationLevel::Bachelor,
    EducationLevel::Master,
    EducationLevel::Phd,
    EducationLevel::Other,
];

impl EducationLevel {
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associate => "Associate Degree",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
            EducationLevel::Phd => "PhD",
            EducationLevel::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

pub const SKILL_LEVELS: [SkillLevel; 3] = [
    SkillLevel::Beginner,
    SkillLevel::Intermediate,
    SkillLevel::Advanced,
];

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Just starting out or changing careers",
            SkillLevel::Intermediate => "Some experience in chosen field",
            SkillLevel::Advanced => "Experienced professional",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Basics,
    Interests,
    Experience,
}

pub const SECTIONS: [Section; 3] = [Section::Basics, Section::Interests, Section::Experience];

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Basics => "Basics",
            Section::Interests => "Interests",
            Section::Experience => "Experience",
        }
    }
}

/// Everything that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Age,
    Role,
    Education,
    Interests,
    SkillLevel,
}

impl ProfileField {
    pub fn section(self) -> Section {
        match self {
            ProfileField::Age | ProfileField::Role | ProfileField::Education => Section::Basics,
            ProfileField::Interests => Section::Interests,
            ProfileField::SkillLevel => Section::Experience,
        }
    }
}

/// The focusable text inputs, all on the Basics section.
pub static TEXT_FIELDS: [ProfileField; 2] = [ProfileField::Age, ProfileField::Role];

/// A validated profile, ready to hand to the assessment.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
    pub age: Option<u8>,
    pub education: EducationLevel,
    pub current_role: Option<String>,
    pub interests: Vec<String>,
    pub skill_level: SkillLevel,
}

pub struct ProfileState {
    pub steps: StepNavigator,
    pub age: TextField,
    pub role: TextField,
    pub education: Option<EducationLevel>,
    pub interests: Selection<&'static str>,
    /// Keyboard cursor in the interests list.
    pub cursor: usize,
    pub skill_level: Option<SkillLevel>,
    pub focus: FocusRing<ProfileField>,
    pub errors: Validation<ProfileField>,
}

impl ProfileState {
    pub fn new(min_interests: usize) -> Self {
        Self {
            steps: StepNavigator::new(SECTIONS.len()),
            age: TextField::new(3),
            role: TextField::new(60),
            education: None,
            interests: Selection::new(min_interests),
            cursor: 0,
            skill_level: None,
            focus: FocusRing::new(&TEXT_FIELDS),
            errors: Validation::new(),
        }
    }

    pub fn section(&self) -> Section {
        SECTIONS[self.steps.current()]
    }

    pub fn field_mut(&mut self, field: ProfileField) -> Option<&mut TextField> {
        match field {
            ProfileField::Age => Some(&mut self.age),
            ProfileField::Role => Some(&mut self.role),
            _ => None,
        }
    }

    pub fn section_has_errors(&self, section: Section) -> bool {
        [
            ProfileField::Age,
            ProfileField::Role,
            ProfileField::Education,
            ProfileField::Interests,
            ProfileField::SkillLevel,
        ]
        .into_iter()
        .any(|f| f.section() == section && self.errors.for_field(f).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_start_at_basics() {
        let s = ProfileState::new(3);
        assert_eq!(s.section(), Section::Basics);
        assert_eq!(s.steps.total(), 3);
    }

    #[test]
    fn interest_labels_are_unique() {
        for (i, a) in INTERESTS.iter().enumerate() {
            assert!(!INTERESTS[i + 1..].contains(a), "duplicate interest {}", a);
        }
    }
}
