//! Contact rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, heading, key_span, muted, panel, panel_borders, push_input, radio,
    render_scrolling, ClickableList,
};

use super::actions::*;
use super::state::{ContactCategory, CATEGORIES, FIELD_ORDER};
use super::ContactPage;

const CONTACT_INFO: [(&str, &str); 4] = [
    ("Email", "hello@careercompass.ai"),
    ("Phone", "+1 (555) 123-4567"),
    ("Office", "San Francisco, CA"),
    ("Response Time", "Within 24 hours"),
];

const COMMON_QUESTIONS: [&str; 4] = [
    "How accurate are the career matches?",
    "Can I retake the assessment?",
    "How often is the data updated?",
    "Is my personal information secure?",
];

pub fn render(page: &ContactPage, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = panel_borders(is_narrow);
    let mut cs = click_state.borrow_mut();

    let mut cl = ClickableList::new();
    cl.push(heading("  Get in Touch", Color::Cyan));
    cl.push(muted(
        "  Have questions about your career journey? We're here to help you succeed.",
    ));
    cl.push(Line::from(""));
    form_lines(page, &mut cl);

    if is_narrow {
        cl.push(Line::from(""));
        info_lines(&mut cl);
        let block = panel("", Color::Cyan, borders);
        render_scrolling(f, area, cl, block, &page.scroll, &mut cs);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(area);

    let block = panel(" Send Us a Message ", Color::Cyan, borders);
    render_scrolling(f, cols[0], cl, block, &page.scroll, &mut cs);

    let mut info = ClickableList::new();
    info_lines(&mut info);
    let block = panel(" Contact Information ", Color::Yellow, borders);
    f.render_widget(
        Paragraph::new(info.into_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn form_lines(page: &ContactPage, cl: &mut ClickableList) {
    let state = &page.state;
    let focused = state.focus.focused();

    if let Some(notice) = state.notice {
        cl.push(Line::from(Span::styled(
            format!("  ✓ {}", notice),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        cl.push(Line::from(""));
    }

    for (i, field) in FIELD_ORDER.iter().enumerate() {
        push_input(
            cl,
            field.label(),
            state.field(*field).display(true),
            field.placeholder(),
            focused == Some(*field),
            state.errors.for_field(*field),
            FIELD_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));

    cl.push(muted("   Category (optional)"));
    for (i, category) in CATEGORIES.iter().enumerate() {
        cl.push_clickable(category_line(i, *category, state.category), CATEGORY_BASE + i as u16);
    }
    cl.push_clickable(
        action_line("0", "No category", state.category.is_some()),
        CLEAR_CATEGORY,
    );
    cl.push(Line::from(""));
    cl.push_clickable(action_line("s", "Send Message", true), SUBMIT);
    cl.push(muted("   Tab: next field   Esc: leave field   Enter: send"));
}

fn category_line(
    index: usize,
    category: ContactCategory,
    chosen: Option<ContactCategory>,
) -> Line<'static> {
    let is_chosen = chosen == Some(category);
    let style = if is_chosen {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let key = (b'1' + index as u8) as char;
    Line::from(vec![
        key_span(&key.to_string()),
        Span::styled(format!("{} {}", radio(is_chosen), category.label()), style),
    ])
}

fn info_lines(cl: &mut ClickableList) {
    for (label, value) in CONTACT_INFO {
        cl.push(heading(format!("  {}", label), Color::White));
        cl.push(muted(format!("    {}", value)));
    }
    cl.push(Line::from(""));
    cl.push(heading("  Quick Help", Color::Yellow));
    for q in COMMON_QUESTIONS {
        cl.push(muted(format!("  • {}", q)));
    }
}
