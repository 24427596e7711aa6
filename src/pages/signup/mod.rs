//! Signup page. A valid submit starts a simulated account creation that
//! continues to the profile page once it resolves.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::auth::AuthGateway;
use crate::forms::apply_edit;
use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, PageContext, PageResponse, Route};

use actions::*;
use state::{SignupState, FIELD_ORDER};

pub struct SignupPage {
    pub state: SignupState,
    auth: Rc<dyn AuthGateway>,
}

impl SignupPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            state: SignupState::new(),
            auth: Rc::clone(&ctx.auth),
        }
    }

    fn submit(&mut self) -> PageResponse {
        logic::submit(&mut self.state, self.auth.as_ref());
        PageResponse::Consumed
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        let s = &mut self.state;
        match action_id {
            SUBMIT => return self.submit(),
            TOGGLE_REVEAL => s.reveal_password = !s.reveal_password,
            TOGGLE_REVEAL_CONFIRM => s.reveal_confirm = !s.reveal_confirm,
            TOGGLE_TERMS => s.accepted_terms = !s.accepted_terms,
            GO_LOGIN => return PageResponse::Navigate(Route::Login),
            id if (FIELD_BASE..FIELD_BASE + FIELD_ORDER.len() as u16).contains(&id) => {
                s.focus.focus(FIELD_ORDER[(id - FIELD_BASE) as usize]);
            }
            _ => return PageResponse::Ignored,
        }
        PageResponse::Consumed
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        match key {
            's' => self.submit(),
            'v' => self.handle_click(TOGGLE_REVEAL),
            'b' => self.handle_click(TOGGLE_REVEAL_CONFIRM),
            't' => self.handle_click(TOGGLE_TERMS),
            'l' => self.handle_click(GO_LOGIN),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for SignupPage {
    fn route(&self) -> Route {
        Route::Signup
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
            if let Some(text) = self.state.field_mut(field) {
                if apply_edit(text, event) {
                    return PageResponse::Consumed;
                }
            }
        }
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Enter => self.submit(),
            _ => PageResponse::Ignored,
        }
    }

    fn tick(&mut self, delta_ticks: u32) -> Option<Route> {
        logic::poll(&mut self.state, delta_ticks)
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn captures_text(&self) -> bool {
        self.state.focus.focused().is_some()
    }
}
