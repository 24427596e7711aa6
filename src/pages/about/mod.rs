//! Mission and process description.

pub mod actions;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::{handle_scroll, Page, PageResponse, Route};
use crate::widgets::ScrollState;

use actions::START_ASSESSMENT;

pub struct AboutPage {
    pub scroll: ScrollState,
}

impl AboutPage {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }
}

impl Page for AboutPage {
    fn route(&self) -> Route {
        Route::About
    }

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse {
        if handle_scroll(&mut self.scroll, event) {
            return PageResponse::Consumed;
        }
        match event {
            InputEvent::Key('a') | InputEvent::Enter | InputEvent::Click(START_ASSESSMENT) => {
                PageResponse::Navigate(Route::Assessment)
            }
            _ => PageResponse::Ignored,
        }
    }

    fn tick(&mut self, _delta_ticks: u32) -> Option<Route> {
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}
