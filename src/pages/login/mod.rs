//! Login page.
//!
//! A valid submit starts a simulated sign-in that resolves after the
//! configured delay and redirects to the dashboard. Leaving the page first
//! drops the request and with it the redirect.

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
use state::{LoginState, FIELD_ORDER};

pub struct LoginPage {
    pub state: LoginState,
    auth: Rc<dyn AuthGateway>,
}

impl LoginPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            state: LoginState::new(),
            auth: Rc::clone(&ctx.auth),
        }
    }

    fn submit(&mut self) -> PageResponse {
        logic::submit(&mut self.state, self.auth.as_ref());
        PageResponse::Consumed
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        match action_id {
            SUBMIT => self.submit(),
            TOGGLE_REVEAL => {
                self.state.reveal_password = !self.state.reveal_password;
                PageResponse::Consumed
            }
            TOGGLE_REMEMBER => {
                self.state.remember_me = !self.state.remember_me;
                PageResponse::Consumed
            }
            GO_SIGNUP => PageResponse::Navigate(Route::Signup),
            id if (FIELD_BASE..FIELD_BASE + FIELD_ORDER.len() as u16).contains(&id) => {
                self.state.focus.focus(FIELD_ORDER[(id - FIELD_BASE) as usize]);
                PageResponse::Consumed
            }
            _ => PageResponse::Ignored,
        }
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        match key {
            's' => self.submit(),
            'v' => self.handle_click(TOGGLE_REVEAL),
            'r' => self.handle_click(TOGGLE_REMEMBER),
            'u' => self.handle_click(GO_SIGNUP),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for LoginPage {
    fn route(&self) -> Route {
        Route::Login
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
                return PageResponse::Consumed;
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
