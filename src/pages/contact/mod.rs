//! Contact page: message form with an optional category, plus contact
//! details. Nothing is sent anywhere; an accepted message is logged and the
//! draft is cleared.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::forms::apply_edit;
use crate::input::{ClickState, InputEvent};
use crate::pages::{handle_scroll, Page, PageResponse, Route};
use crate::widgets::ScrollState;

use actions::*;
use state::{ContactState, CATEGORIES, FIELD_ORDER};

pub struct ContactPage {
    pub state: ContactState,
    pub scroll: ScrollState,
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            state: ContactState::new(),
            scroll: ScrollState::new(),
        }
    }

    fn submit(&mut self) -> PageResponse {
        logic::submit(&mut self.state);
        PageResponse::Consumed
    }

    fn choose_category(&mut self, index: usize) -> PageResponse {
        match CATEGORIES.get(index) {
            Some(c) => {
                self.state.category = Some(*c);
                PageResponse::Consumed
            }
            None => PageResponse::Ignored,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        match action_id {
            SUBMIT => self.submit(),
            CLEAR_CATEGORY => {
                self.state.category = None;
                PageResponse::Consumed
            }
            id if (FIELD_BASE..FIELD_BASE + FIELD_ORDER.len() as u16).contains(&id) => {
                self.state.focus.focus(FIELD_ORDER[(id - FIELD_BASE) as usize]);
                PageResponse::Consumed
            }
            id if (CATEGORY_BASE..CATEGORY_BASE + CATEGORIES.len() as u16).contains(&id) => {
                self.choose_category((id - CATEGORY_BASE) as usize)
            }
            _ => PageResponse::Ignored,
        }
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        match key {
            '1'..='6' => self.choose_category(key as usize - '1' as usize),
            '0' => self.handle_click(CLEAR_CATEGORY),
            's' => self.submit(),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for ContactPage {
    fn route(&self) -> Route {
        Route::Contact
    }

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse {
        if self.state.focus.handle_nav(event) {
            return PageResponse::Consumed;
        }
        if let InputEvent::Click(id) = event {
            return self.handle_click(*id);
        }
        if let Some(field) = self.state.focus.focused() {
            if *event == InputEvent::Enter {
                return self.submit();
            }
            if apply_edit(self.state.field_mut(field), event) {
                self.state.notice = None;
                return PageResponse::Consumed;
            }
        }
        if handle_scroll(&mut self.scroll, event) {
            return PageResponse::Consumed;
        }
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Enter => self.submit(),
            _ => PageResponse::Ignored,
        }
    }

    fn tick(&mut self, _delta_ticks: u32) -> Option<Route> {
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }

    fn captures_text(&self) -> bool {
        self.state.focus.focused().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::{ContactCategory, ContactField, THANK_YOU};

    fn type_text(page: &mut ContactPage, text: &str) {
        for c in text.chars() {
            page.handle_input(&InputEvent::Key(c));
        }
    }

    fn fill(page: &mut ContactPage) {
        page.handle_input(&InputEvent::Tab);
        type_text(page, "Ada");
        page.handle_input(&InputEvent::Tab);
        type_text(page, "ada@example.com");
        page.handle_input(&InputEvent::Tab);
        type_text(page, "Hello");
        page.handle_input(&InputEvent::Tab);
        type_text(page, "Just saying hi");
    }

    #[test]
    fn digits_pick_category_when_unfocused() {
        let mut page = ContactPage::new();
        assert_eq!(page.handle_input(&InputEvent::Key('3')), PageResponse::Consumed);
        assert_eq!(page.state.category, Some(ContactCategory::CareerAdvice));
        assert_eq!(page.handle_input(&InputEvent::Key('7')), PageResponse::Ignored);
        page.handle_input(&InputEvent::Click(CATEGORY_BASE + 5));
        assert_eq!(page.state.category, Some(ContactCategory::Feedback));
        page.handle_input(&InputEvent::Key('0'));
        assert_eq!(page.state.category, None);
    }

    #[test]
    fn focused_field_takes_shortcut_letters() {
        let mut page = ContactPage::new();
        page.handle_input(&InputEvent::Click(FIELD_BASE + 2));
        assert!(page.captures_text());
        type_text(&mut page, "s3");
        assert_eq!(page.state.subject.value(), "s3");
        assert_eq!(page.state.category, None);
        page.handle_input(&InputEvent::Backspace);
        assert_eq!(page.state.subject.value(), "s");
        page.handle_input(&InputEvent::Esc);
        assert!(!page.captures_text());
    }

    #[test]
    fn esc_without_focus_is_left_for_the_shell() {
        let mut page = ContactPage::new();
        assert_eq!(page.handle_input(&InputEvent::Esc), PageResponse::Ignored);
    }

    #[test]
    fn empty_submit_shows_errors() {
        let mut page = ContactPage::new();
        page.handle_input(&InputEvent::Click(SUBMIT));
        assert_eq!(page.state.errors.len(), 4);
        assert_eq!(page.state.focus.focused(), Some(ContactField::Name));
    }

    #[test]
    fn filled_form_sends_and_resets() {
        let mut page = ContactPage::new();
        fill(&mut page);
        assert_eq!(page.state.focus.focused(), Some(ContactField::Message));
        assert_eq!(page.handle_input(&InputEvent::Enter), PageResponse::Consumed);
        assert_eq!(page.state.notice, Some(THANK_YOU));
        assert!(page.state.name.value().is_empty());
        assert!(!page.captures_text());

        // Typing again dismisses the notice.
        page.handle_input(&InputEvent::Tab);
        type_text(&mut page, "B");
        assert!(page.state.notice.is_none());
    }
}
