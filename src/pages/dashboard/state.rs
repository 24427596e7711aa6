//! Dashboard state: career search and the static sidebar content.

use crate::catalog::{Career, Catalog};
use crate::flow::filter::{career_industry, Facet, FilterView, MatchMode};
use crate::forms::SearchBox;

pub const INDUSTRIES: [&str; 4] = ["Technology", "Design", "Business", "Healthcare"];

pub const QUICK_PICKS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

pub struct SkillGoal {
    pub name: &'static str,
    pub progress: u8,
    pub priority: Priority,
}

pub const RECOMMENDED_SKILLS: [SkillGoal; 5] = [
    SkillGoal {
        name: "Python Programming",
        progress: 75,
        priority: Priority::High,
    },
    SkillGoal {
        name: "Data Analysis",
        progress: 60,
        priority: Priority::High,
    },
    SkillGoal {
        name: "Machine Learning",
        progress: 40,
        priority: Priority::Medium,
    },
    SkillGoal {
        name: "SQL",
        progress: 80,
        priority: Priority::Medium,
    },
    SkillGoal {
        name: "Statistics",
        progress: 35,
        priority: Priority::High,
    },
];

/// Headline numbers, derived from the fixtures once on mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub best_match: u8,
    pub career_count: usize,
    pub course_count: usize,
    /// Salary range of the best-matching career.
    pub best_salary: String,
}

impl Stats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let best = catalog.best_match();
        Self {
            best_match: best.map(|c| c.match_percent).unwrap_or(0),
            career_count: catalog.careers.len(),
            course_count: catalog.courses.len(),
            best_salary: best.map(|c| c.average_salary.clone()).unwrap_or_default(),
        }
    }
}

pub struct DashboardState {
    pub search: SearchBox,
    pub industry: Facet<Career>,
    pub view: FilterView,
    pub stats: Stats,
}

impl DashboardState {
    pub fn new(catalog: &Catalog, debounce_ticks: u32) -> Self {
        Self {
            search: SearchBox::new(40, debounce_ticks),
            industry: Facet::new(career_industry, MatchMode::Contains),
            view: FilterView::NotComputed,
            stats: Stats::from_catalog(catalog),
        }
    }

    /// 0 for "All", otherwise 1 + index into [`INDUSTRIES`].
    pub fn industry_choice(&self) -> usize {
        self.industry
            .selected
            .as_deref()
            .and_then(|s| INDUSTRIES.iter().position(|i| *i == s))
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}
