//! Signup rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, centered_column, checkbox, error_line, heading, muted, panel, panel_borders,
    push_input, render_wrapped, ClickableList,
};

use super::actions::*;
use super::state::{SignupField, SignupState, FIELD_ORDER};

pub fn render(state: &SignupState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let card = centered_column(area, 64);
    let focused = state.focus.focused();

    let mut cl = ClickableList::new();
    cl.push(heading("  Create Your Account", Color::Cyan));
    cl.push(muted("  Start your personalized career journey today"));
    cl.push(Line::from(""));

    for (i, field) in FIELD_ORDER.iter().enumerate() {
        let shown = state
            .field(*field)
            .map(|t| t.display(state.is_revealed(*field)))
            .unwrap_or_default();
        push_input(
            &mut cl,
            field.label(),
            shown,
            field.placeholder(),
            focused == Some(*field),
            state.errors.for_field(*field),
            FIELD_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));

    let show = |on: bool, what: &str| format!("{} {}", if on { "Hide" } else { "Show" }, what);
    cl.push_clickable(
        action_line("v", show(state.reveal_password, "password"), true),
        TOGGLE_REVEAL,
    );
    cl.push_clickable(
        action_line("b", show(state.reveal_confirm, "confirmation"), true),
        TOGGLE_REVEAL_CONFIRM,
    );
    cl.push_clickable(
        action_line(
            "t",
            format!(
                "{} I agree to the Terms of Service and Privacy Policy",
                checkbox(state.accepted_terms)
            ),
            true,
        ),
        TOGGLE_TERMS,
    );
    if let Some(e) = state.errors.for_field(SignupField::Terms) {
        cl.push(error_line(e));
    }
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
    cl.push_clickable(action_line("l", "Already have an account? Sign in", true), GO_LOGIN);

    let block = panel(" Sign Up ", Color::Cyan, panel_borders(is_narrow));
    render_wrapped(f, card, cl, block, &mut click_state.borrow_mut());
}
