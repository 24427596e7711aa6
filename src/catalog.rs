//! Bundled career and course fixtures.
//!
//! Both datasets are compiled in and parsed once at startup. A malformed or
//! inconsistent fixture aborts startup with a [`FixtureError`] naming the
//! file and record, rather than rendering a half-empty site.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::FixtureError;

pub const CAREERS_FILE: &str = "careers.json";
pub const COURSES_FILE: &str = "courses.json";

const BUNDLED_CAREERS: &str = include_str!("../assets/careers.json");
const BUNDLED_COURSES: &str = include_str!("../assets/courses.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: u32,
    pub title: String,
    pub industry: String,
    /// Match percentage shown on the card (0..=100).
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub description: String,
    pub average_salary: String,
    pub education: String,
    pub growth_rate: String,
    pub required_skills: Vec<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

pub const ALL_DIFFICULTIES: [Difficulty; 3] = [
    Difficulty::Beginner,
    Difficulty::Intermediate,
    Difficulty::Advanced,
];

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub provider: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub rating: f32,
    pub price: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// All read-only reference data the pages draw from.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub careers: Vec<Career>,
    pub courses: Vec<Course>,
}

impl Catalog {
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(BUNDLED_CAREERS, BUNDLED_COURSES)
    }

    pub fn from_json(careers: &str, courses: &str) -> Result<Self, FixtureError> {
        let careers = parse_careers(careers)?;
        let courses = parse_courses(courses)?;
        Ok(Self { careers, courses })
    }
}

pub fn parse_careers(text: &str) -> Result<Vec<Career>, FixtureError> {
    let careers: Vec<Career> = serde_json::from_str(text).map_err(|source| {
        FixtureError::Malformed {
            file: CAREERS_FILE,
            source,
        }
    })?;
    check_ids(CAREERS_FILE, careers.iter().map(|c| c.id))?;

    for c in &careers {
        require_text(CAREERS_FILE, c.id, "title", &c.title)?;
        require_text(CAREERS_FILE, c.id, "industry", &c.industry)?;
        if c.match_percent > 100 {
            return Err(FixtureError::OutOfRange {
                file: CAREERS_FILE,
                id: c.id,
                field: "match",
                value: c.match_percent as f64,
                min: 0.0,
                max: 100.0,
            });
        }
    }
    Ok(careers)
}

pub fn parse_courses(text: &str) -> Result<Vec<Course>, FixtureError> {
    let courses: Vec<Course> = serde_json::from_str(text).map_err(|source| {
        FixtureError::Malformed {
            file: COURSES_FILE,
            source,
        }
    })?;
    check_ids(COURSES_FILE, courses.iter().map(|c| c.id))?;

    for c in &courses {
        require_text(COURSES_FILE, c.id, "title", &c.title)?;
        require_text(COURSES_FILE, c.id, "category", &c.category)?;
        if !(0.0..=5.0).contains(&c.rating) {
            return Err(FixtureError::OutOfRange {
                file: COURSES_FILE,
                id: c.id,
                field: "rating",
                value: c.rating as f64,
                min: 0.0,
                max: 5.0,
            });
        }
    }
    Ok(courses)
}

fn check_ids(file: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { file, id });
        }
    }
    if seen.is_empty() {
        return Err(FixtureError::Empty { file });
    }
    Ok(())
}

fn require_text(
    file: &'static str,
    id: u32,
    field: &'static str,
    value: &str,
) -> Result<(), FixtureError> {
    if value.trim().is_empty() {
        Err(FixtureError::EmptyField { file, id, field })
    } else {
        Ok(())
    }
}

// ── Dashboard summaries ───────────────────────────────────────────────

impl Catalog {
    /// Highest match percentage across all careers.
    pub fn best_match(&self) -> Option<&Career> {
        self.careers.iter().max_by_key(|c| c.match_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_CAREER: &str = r#"[{
        "id": 1, "title": "Data Scientist", "industry": "Technology", "match": 95,
        "description": "d", "averageSalary": "$1", "education": "BSc",
        "growthRate": "36%", "requiredSkills": ["Python"]
    }]"#;

    const ONE_COURSE: &str = r#"[{
        "id": 1, "title": "Python", "provider": "Coursera", "category": "Technology",
        "difficulty": "Beginner", "duration": "6 weeks", "rating": 4.7,
        "price": "Free", "topics": ["Python"]
    }]"#;

    #[test]
    fn bundled_fixtures_load() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.careers.len(), 5);
        assert_eq!(catalog.courses.len(), 12);
        assert_eq!(catalog.best_match().unwrap().match_percent, 95);
    }

    #[test]
    fn career_fields_are_camel_case() {
        let careers = parse_careers(ONE_CAREER).unwrap();
        assert_eq!(careers[0].average_salary, "$1");
        assert_eq!(careers[0].growth_rate, "36%");
        assert_eq!(careers[0].required_skills, vec!["Python".to_string()]);
    }

    #[test]
    fn course_description_is_optional() {
        let courses = parse_courses(ONE_COURSE).unwrap();
        assert_eq!(courses[0].difficulty, Difficulty::Beginner);
        assert!(courses[0].description.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let text = format!(
            "[{}, {}]",
            ONE_COURSE.trim_start_matches('[').trim_end_matches(']'),
            ONE_COURSE.trim_start_matches('[').trim_end_matches(']'),
        );
        assert!(matches!(
            parse_courses(&text),
            Err(FixtureError::DuplicateId { id: 1, .. })
        ));
    }

    #[test]
    fn empty_fixture_rejected() {
        assert!(matches!(
            parse_careers("[]"),
            Err(FixtureError::Empty { file: CAREERS_FILE })
        ));
    }

    #[test]
    fn match_over_100_rejected() {
        let text = ONE_CAREER.replace("\"match\": 95", "\"match\": 120");
        assert!(matches!(
            parse_careers(&text),
            Err(FixtureError::OutOfRange { field: "match", .. })
        ));
    }

    #[test]
    fn rating_over_5_rejected() {
        let text = ONE_COURSE.replace("4.7", "5.5");
        assert!(matches!(
            parse_courses(&text),
            Err(FixtureError::OutOfRange { field: "rating", .. })
        ));
    }

    #[test]
    fn blank_title_rejected() {
        let text = ONE_COURSE.replace("\"title\": \"Python\"", "\"title\": \"  \"");
        assert!(matches!(
            parse_courses(&text),
            Err(FixtureError::EmptyField { field: "title", .. })
        ));
    }

    #[test]
    fn unknown_difficulty_is_malformed() {
        let text = ONE_COURSE.replace("Beginner", "Expert");
        assert!(matches!(
            parse_courses(&text),
            Err(FixtureError::Malformed { file: COURSES_FILE, .. })
        ));
    }
}
