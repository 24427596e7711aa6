//! Learning hub state: course search, facets and bookmarks.

use crate::catalog::{Course, ALL_DIFFICULTIES};
use crate::flow::bookmarks::Bookmarks;
use crate::flow::filter::{course_category, course_difficulty, Facet, FilterView, MatchMode};
use crate::forms::SearchBox;

pub const CATEGORIES: [&str; 5] = ["Technology", "Design", "Analytics", "Business", "Security"];

/// Topics listed on a card before collapsing into "+N more".
pub const TOPICS_SHOWN: usize = 3;

pub struct LearningState {
    pub search: SearchBox,
    pub category: Facet<Course>,
    pub difficulty: Facet<Course>,
    pub view: FilterView,
    pub bookmarks: Bookmarks,
}

impl LearningState {
    pub fn new(debounce_ticks: u32) -> Self {
        Self {
            search: SearchBox::new(40, debounce_ticks),
            category: Facet::new(course_category, MatchMode::Equals),
            difficulty: Facet::new(course_difficulty, MatchMode::Equals),
            view: FilterView::NotComputed,
            bookmarks: Bookmarks::new(),
        }
    }

    /// 0 for "All", otherwise 1 + index into [`CATEGORIES`].
    pub fn category_choice(&self) -> usize {
        choice_of(&self.category, &CATEGORIES)
    }

    /// 0 for "All", otherwise 1 + index into [`ALL_DIFFICULTIES`].
    pub fn difficulty_choice(&self) -> usize {
        let labels = ALL_DIFFICULTIES.map(|d| d.label());
        choice_of(&self.difficulty, &labels)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.text().is_blank() || !self.category.is_all() || !self.difficulty.is_all()
    }
}

fn choice_of<R>(facet: &Facet<R>, values: &[&str]) -> usize {
    facet
        .selected
        .as_deref()
        .and_then(|s| values.iter().position(|v| *v == s))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// First topics of a course and how many were left out.
pub fn topic_preview(course: &Course) -> (&[String], usize) {
    let shown = course.topics.len().min(TOPICS_SHOWN);
    (&course.topics[..shown], course.topics.len() - shown)
}
