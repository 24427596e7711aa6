//! Login rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, centered_column, checkbox, heading, muted, panel, panel_borders, push_input,
    render_wrapped, ClickableList,
};

use super::actions::*;
use super::state::{LoginField, LoginState};

pub fn render(state: &LoginState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let card = centered_column(area, 64);

    let focused = state.focus.focused();
    let mut cl = ClickableList::new();
    cl.push(heading("  Welcome Back", Color::Cyan));
    cl.push(muted("  Sign in to continue your career journey"));
    cl.push(Line::from(""));

    push_input(
        &mut cl,
        "Email",
        state.email.display(true),
        "you@example.com",
        focused == Some(LoginField::Email),
        state.errors.for_field(LoginField::Email),
        FIELD_BASE,
    );
    push_input(
        &mut cl,
        "Password",
        state.password.display(state.reveal_password),
        "••••••••",
        focused == Some(LoginField::Password),
        state.errors.for_field(LoginField::Password),
        FIELD_BASE + 1,
    );
    cl.push(Line::from(""));

    let reveal = if state.reveal_password {
        "Hide password"
    } else {
        "Show password"
    };
    cl.push_clickable(action_line("v", reveal, true), TOGGLE_REVEAL);
    cl.push_clickable(
        action_line("r", format!("{} Remember me", checkbox(state.remember_me)), true),
        TOGGLE_REMEMBER,
    );
    cl.push(Line::from(""));

    if let Some(err) = &state.auth_error {
        cl.push(Line::from(Span::styled(
            format!("  ⚠ {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    cl.push_clickable(
        action_line("s", state.submit_label(), !state.is_busy()),
        SUBMIT,
    );
    cl.push(Line::from(""));
    cl.push_clickable(
        action_line("u", "Don't have an account? Sign up", true),
        GO_SIGNUP,
    );

    let block = panel(" Sign In ", Color::Cyan, panel_borders(is_narrow));
    render_wrapped(f, card, cl, block, &mut click_state.borrow_mut());
}
