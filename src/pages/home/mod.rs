//! Landing page: hero, feature cards, stats and calls to action.

pub mod actions;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::{handle_scroll, Page, PageResponse, Route};
use crate::widgets::ScrollState;

use actions::*;

pub struct HomePage {
    pub scroll: ScrollState,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        match action_id {
            GET_STARTED | START_JOURNEY => PageResponse::Navigate(Route::Signup),
            LEARN_MORE => PageResponse::Navigate(Route::About),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for HomePage {
    fn route(&self) -> Route {
        Route::Home
    }

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse {
        if handle_scroll(&mut self.scroll, event) {
            return PageResponse::Consumed;
        }
        match event {
            InputEvent::Key('g') | InputEvent::Enter => self.handle_click(GET_STARTED),
            InputEvent::Key('l') => self.handle_click(LEARN_MORE),
            InputEvent::Click(id) => self.handle_click(*id),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_started_goes_to_signup() {
        let mut page = HomePage::new();
        assert_eq!(
            page.handle_input(&InputEvent::Key('g')),
            PageResponse::Navigate(Route::Signup)
        );
        assert_eq!(
            page.handle_input(&InputEvent::Click(START_JOURNEY)),
            PageResponse::Navigate(Route::Signup)
        );
    }

    #[test]
    fn learn_more_goes_to_about() {
        let mut page = HomePage::new();
        assert_eq!(
            page.handle_input(&InputEvent::Click(LEARN_MORE)),
            PageResponse::Navigate(Route::About)
        );
    }

    #[test]
    fn unknown_input_is_ignored() {
        let mut page = HomePage::new();
        assert_eq!(page.handle_input(&InputEvent::Key('z')), PageResponse::Ignored);
        assert_eq!(page.handle_input(&InputEvent::Esc), PageResponse::Ignored);
        assert_eq!(page.tick(100), None);
    }

    #[test]
    fn scroll_keys_are_consumed() {
        let mut page = HomePage::new();
        page.scroll.fit(40, 10);
        assert_eq!(page.handle_input(&InputEvent::Down), PageResponse::Consumed);
        assert_eq!(page.handle_input(&InputEvent::Key('j')), PageResponse::Consumed);
        assert_eq!(page.scroll.offset(), 2);
        assert_eq!(page.handle_input(&InputEvent::Up), PageResponse::Consumed);
        assert_eq!(page.scroll.offset(), 1);
    }
}
