//! Dashboard filtering.

use crate::catalog::Catalog;
use crate::flow::filter::{filter_indices, FilterView};

use super::state::{DashboardState, INDUSTRIES};

pub fn refresh(state: &mut DashboardState, catalog: &Catalog) {
    let hits = filter_indices(&catalog.careers, state.search.applied(), &[&state.industry]);
    state.view = FilterView::Computed(hits);
}

/// `choice` 0 is "All"; anything past the list is ignored.
pub fn select_industry(state: &mut DashboardState, catalog: &Catalog, choice: usize) -> bool {
    let value = match choice {
        0 => None,
        n => match INDUSTRIES.get(n - 1) {
            Some(v) => Some(*v),
            None => return false,
        },
    };
    state.industry.select(value);
    refresh(state, catalog);
    true
}

/// Advance the search debounce, refiltering when a query is released.
pub fn tick(state: &mut DashboardState, catalog: &Catalog, delta_ticks: u32) {
    if let Some(query) = state.search.tick(delta_ticks) {
        log::debug!("career search applied: {:?}", query);
        refresh(state, catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    fn setup() -> (DashboardState, Catalog) {
        let catalog = Catalog::bundled().expect("bundled fixtures");
        let mut state = DashboardState::new(&catalog, 6);
        refresh(&mut state, &catalog);
        (state, catalog)
    }

    #[test]
    fn everything_shows_initially() {
        let (state, catalog) = setup();
        assert_eq!(state.view.len(), catalog.careers.len());
    }

    #[test]
    fn industry_applies_immediately() {
        let (mut state, catalog) = setup();
        assert!(select_industry(&mut state, &catalog, 2));
        assert_eq!(state.industry_choice(), 2);
        assert!(state
            .view
            .indices()
            .iter()
            .all(|&i| catalog.careers[i].industry.contains("Design")));
        assert!(!select_industry(&mut state, &catalog, 9));
        assert!(select_industry(&mut state, &catalog, 0));
        assert_eq!(state.view.len(), catalog.careers.len());
    }

    #[test]
    fn typing_waits_for_quiet_window() {
        let (mut state, catalog) = setup();
        for c in "zzzz".chars() {
            state.search.handle_edit(&InputEvent::Key(c));
        }
        // The frame the last key landed in does not count.
        tick(&mut state, &catalog, 1);
        tick(&mut state, &catalog, 5);
        assert_eq!(state.view.len(), catalog.careers.len());
        tick(&mut state, &catalog, 1);
        assert!(state.view.is_empty_result());
    }
}
