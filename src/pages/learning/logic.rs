//! Learning hub filtering, facet selection and bookmarks.

use crate::catalog::{Catalog, ALL_DIFFICULTIES};
use crate::flow::filter::{filter_indices, FilterView};

use super::state::{LearningState, CATEGORIES};

pub fn refresh(state: &mut LearningState, catalog: &Catalog) {
    let hits = filter_indices(
        &catalog.courses,
        state.search.applied(),
        &[&state.category, &state.difficulty],
    );
    state.view = FilterView::Computed(hits);
}

/// `choice` 0 is "All"; anything past the list is ignored.
pub fn select_category(state: &mut LearningState, catalog: &Catalog, choice: usize) -> bool {
    let value = match choice {
        0 => None,
        n => match CATEGORIES.get(n - 1) {
            Some(v) => Some(*v),
            None => return false,
        },
    };
    state.category.select(value);
    refresh(state, catalog);
    true
}

pub fn select_difficulty(state: &mut LearningState, catalog: &Catalog, choice: usize) -> bool {
    let value = match choice {
        0 => None,
        n => match ALL_DIFFICULTIES.get(n - 1) {
            Some(d) => Some(d.label()),
            None => return false,
        },
    };
    state.difficulty.select(value);
    refresh(state, catalog);
    true
}

pub fn cycle_category(state: &mut LearningState, catalog: &Catalog) {
    let next = (state.category_choice() + 1) % (CATEGORIES.len() + 1);
    select_category(state, catalog, next);
}

pub fn cycle_difficulty(state: &mut LearningState, catalog: &Catalog) {
    let next = (state.difficulty_choice() + 1) % (ALL_DIFFICULTIES.len() + 1);
    select_difficulty(state, catalog, next);
}

/// Reset the query, any pending keystrokes and both facets.
pub fn clear_filters(state: &mut LearningState, catalog: &Catalog) {
    state.search.clear();
    state.category.select(None);
    state.difficulty.select(None);
    refresh(state, catalog);
    log::debug!("learning filters cleared");
}

/// Bookmark the course at `index` in the catalog. Returns false for an
/// unknown index.
pub fn toggle_bookmark(state: &mut LearningState, catalog: &Catalog, index: usize) -> bool {
    let Some(course) = catalog.courses.get(index) else {
        return false;
    };
    let saved = state.bookmarks.toggle(course.id);
    log::debug!(
        "course {} {} ({} saved)",
        course.id,
        if saved { "bookmarked" } else { "unbookmarked" },
        state.bookmarks.len()
    );
    true
}

pub fn tick(state: &mut LearningState, catalog: &Catalog, delta_ticks: u32) {
    if let Some(query) = state.search.tick(delta_ticks) {
        log::debug!("course search applied: {:?}", query);
        refresh(state, catalog);
    }
}
