//! Career dashboard: headline stats, a searchable and filterable list of
//! career matches, recommended skills and a few course picks.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::Catalog;
use crate::input::{ClickState, InputEvent};
use crate::pages::{handle_scroll, Page, PageContext, PageResponse, Route};
use crate::widgets::ScrollState;

use actions::*;
use state::{DashboardState, INDUSTRIES, QUICK_PICKS};

pub struct DashboardPage {
    pub state: DashboardState,
    pub scroll: ScrollState,
    catalog: Rc<Catalog>,
}

impl DashboardPage {
    pub fn new(ctx: &PageContext) -> Self {
        let mut state = DashboardState::new(&ctx.catalog, ctx.settings.debounce_ticks);
        logic::refresh(&mut state, &ctx.catalog);
        Self {
            state,
            scroll: ScrollState::new(),
            catalog: Rc::clone(&ctx.catalog),
        }
    }

    fn select_industry(&mut self, choice: usize) -> PageResponse {
        let changed = logic::select_industry(&mut self.state, &self.catalog, choice);
        if changed {
            self.scroll.reset();
        }
        changed.into()
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        match action_id {
            FOCUS_SEARCH => {
                self.state.search.focus();
                PageResponse::Consumed
            }
            GO_LEARNING => PageResponse::Navigate(Route::Learning),
            RETAKE_ASSESSMENT => PageResponse::Navigate(Route::Assessment),
            id if (INDUSTRY_BASE..=INDUSTRY_BASE + INDUSTRIES.len() as u16).contains(&id) => {
                self.select_industry((id - INDUSTRY_BASE) as usize)
            }
            id if (QUICK_PICK_BASE..QUICK_PICK_BASE + QUICK_PICKS as u16).contains(&id) => {
                PageResponse::Navigate(Route::Learning)
            }
            _ => PageResponse::Ignored,
        }
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        match key {
            '/' => self.handle_click(FOCUS_SEARCH),
            '0'..='9' => self.select_industry(key as usize - '0' as usize),
            'l' => self.handle_click(GO_LEARNING),
            'a' => self.handle_click(RETAKE_ASSESSMENT),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for DashboardPage {
    fn route(&self) -> Route {
        Route::Dashboard
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
