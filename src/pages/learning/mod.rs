//! Learning hub: searchable course catalogue with category and difficulty
//! filters and in-memory bookmarks.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::{Catalog, ALL_DIFFICULTIES};
use crate::input::{ClickState, InputEvent};
use crate::pages::{handle_scroll, Page, PageContext, PageResponse, Route};
use crate::widgets::ScrollState;

use actions::*;
use state::{LearningState, CATEGORIES};

pub struct LearningPage {
    pub state: LearningState,
    pub scroll: ScrollState,
    catalog: Rc<Catalog>,
}

impl LearningPage {
    pub fn new(ctx: &PageContext) -> Self {
        let mut state = LearningState::new(ctx.settings.debounce_ticks);
        logic::refresh(&mut state, &ctx.catalog);
        Self {
            state,
            scroll: ScrollState::new(),
            catalog: Rc::clone(&ctx.catalog),
        }
    }

    /// Bookmark the `n`th course currently listed (0-based).
    fn bookmark_listed(&mut self, n: usize) -> PageResponse {
        match self.state.view.indices().get(n).copied() {
            Some(index) => logic::toggle_bookmark(&mut self.state, &self.catalog, index).into(),
            None => PageResponse::Ignored,
        }
    }

    fn filters_changed(&mut self, changed: bool) -> PageResponse {
        if changed {
            self.scroll.reset();
        }
        changed.into()
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        let catalog = Rc::clone(&self.catalog);
        match action_id {
            FOCUS_SEARCH => {
                self.state.search.focus();
                PageResponse::Consumed
            }
            CLEAR_FILTERS => {
                logic::clear_filters(&mut self.state, &catalog);
                self.filters_changed(true)
            }
            CYCLE_CATEGORY => {
                logic::cycle_category(&mut self.state, &catalog);
                self.filters_changed(true)
            }
            CYCLE_DIFFICULTY => {
                logic::cycle_difficulty(&mut self.state, &catalog);
                self.filters_changed(true)
            }
            GO_ASSESSMENT => PageResponse::Navigate(Route::Assessment),
            id if (CATEGORY_BASE..=CATEGORY_BASE + CATEGORIES.len() as u16).contains(&id) => {
                let changed =
                    logic::select_category(&mut self.state, &catalog, (id - CATEGORY_BASE) as usize);
                self.filters_changed(changed)
            }
            id if (DIFFICULTY_BASE..=DIFFICULTY_BASE + ALL_DIFFICULTIES.len() as u16)
                .contains(&id) =>
            {
                let changed = logic::select_difficulty(
                    &mut self.state,
                    &catalog,
                    (id - DIFFICULTY_BASE) as usize,
                );
                self.filters_changed(changed)
            }
            id if id >= BOOKMARK_BASE => {
                logic::toggle_bookmark(&mut self.state, &catalog, (id - BOOKMARK_BASE) as usize)
                    .into()
            }
            _ => PageResponse::Ignored,
        }
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        match key {
            '/' => self.handle_click(FOCUS_SEARCH),
            'c' => self.handle_click(CLEAR_FILTERS),
            'g' => self.handle_click(CYCLE_CATEGORY),
            'd' => self.handle_click(CYCLE_DIFFICULTY),
            'a' => self.handle_click(GO_ASSESSMENT),
            '1'..='9' => self.bookmark_listed(key as usize - '1' as usize),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for LearningPage {
    fn route(&self) -> Route {
        Route::Learning
    }

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse {
        if let InputEvent::Click(id) = event {
            return self.handle_click(*id);
        }
        if self.state.search.is_focused() {
            match event {
                InputEvent::Esc | InputEvent::Enter | InputEvent::Tab => {
                    self.state.search.blur();
                    return PageResponse::Consumed;
                }
                _ if self.state.search.handle_edit(event) => {
                    self.scroll.reset();
                    return PageResponse::Consumed;
                }
                _ => {}
            }
        }
        if handle_scroll(&mut self.scroll, event) {
            return PageResponse::Consumed;
        }
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Tab => self.handle_click(FOCUS_SEARCH),
            _ => PageResponse::Ignored,
        }
    }

    fn tick(&mut self, delta_ticks: u32) -> Option<Route> {
        logic::tick(&mut self.state, &self.catalog, delta_ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }

    fn captures_text(&self) -> bool {
        self.state.search.is_focused()
    }
}
