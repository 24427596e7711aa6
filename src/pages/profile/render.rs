//! Profile rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, checkbox, error_line, heading, key_span, muted, panel, panel_borders,
    push_input, radio, render_scrolling, ClickableList,
};

use super::actions::*;
use super::state::{
    ProfileField, ProfileState, Section, EDUCATION_LEVELS, INTERESTS, SECTIONS, SKILL_LEVELS,
    TEXT_FIELDS,
};
use super::ProfilePage;

pub fn render(page: &ProfilePage, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let state = &page.state;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + section tabs
            Constraint::Min(6),    // Section body
            Constraint::Length(4), // Navigation
        ])
        .split(area);

    render_header(state, f, chunks[0]);

    let mut cl = ClickableList::new();
    match state.section() {
        Section::Basics => basics_lines(state, &mut cl),
        Section::Interests => interests_lines(state, &mut cl),
        Section::Experience => experience_lines(state, &mut cl),
    }
    let title = format!(" {} ", state.section().title());
    let block = panel(&title, Color::Yellow, panel_borders(is_narrow));
    let mut cs = click_state.borrow_mut();
    render_scrolling(f, chunks[1], cl, block, &page.scroll, &mut cs);

    let mut nav = ClickableList::new();
    let back = if state.steps.is_first() {
        "← Back"
    } else {
        "← Previous"
    };
    let next = if state.steps.is_last() {
        "Save Profile & Continue"
    } else {
        "Next →"
    };
    nav.push_clickable(action_line("p", back, true), PREVIOUS);
    // Dimmed while the final submit would be rejected for too few interests.
    let can_continue = !state.steps.is_last() || state.interests.can_submit();
    nav.push_clickable(action_line("n", next, can_continue), NEXT);
    nav.register_targets(chunks[2], &mut cs, 1, 1, 0, 0);
    let block = panel("", Color::DarkGray, panel_borders(is_narrow));
    f.render_widget(Paragraph::new(nav.into_lines()).block(block), chunks[2]);
}

fn render_header(state: &ProfileState, f: &mut Frame, area: Rect) {
    let mut tabs: Vec<Span> = vec![Span::raw(" ")];
    for (i, section) in SECTIONS.iter().enumerate() {
        let style = if i == state.steps.current() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if state.section_has_errors(*section) {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mark = if state.section_has_errors(*section) {
            " ⚠"
        } else {
            ""
        };
        tabs.push(Span::styled(
            format!(" {}. {}{} ", i + 1, section.title(), mark),
            style,
        ));
        tabs.push(Span::raw(" "));
    }
    let lines = vec![
        Line::from(Span::styled(
            " Tell Us About Yourself",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(tabs),
    ];
    f.render_widget(
        Paragraph::new(lines).block(panel("", Color::Cyan, Borders::TOP)),
        area,
    );
}

fn basics_lines(state: &ProfileState, cl: &mut ClickableList) {
    let focused = state.focus.focused();
    cl.push(muted(
        "  Help us understand your background and preferences to provide better recommendations",
    ));
    cl.push(Line::from(""));
    let placeholders = [
        "Enter your age",
        "e.g., Student, Software Developer, Career Changer",
    ];
    let labels = ["Age", "Role"];
    for (i, field) in TEXT_FIELDS.iter().enumerate() {
        let text = if *field == ProfileField::Age {
            &state.age
        } else {
            &state.role
        };
        push_input(
            cl,
            labels[i],
            text.display(true),
            placeholders[i],
            focused == Some(*field),
            state.errors.for_field(*field),
            FIELD_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
    cl.push(heading("  Education Level", Color::White));
    for (i, level) in EDUCATION_LEVELS.iter().enumerate() {
        let chosen = state.education == Some(*level);
        cl.push_clickable(
            option_line(i, format!("{} {}", radio(chosen), level.label()), chosen),
            EDUCATION_BASE + i as u16,
        );
    }
    if let Some(e) = state.errors.for_field(ProfileField::Education) {
        cl.push(error_line(e));
    }
}

fn interests_lines(state: &ProfileState, cl: &mut ClickableList) {
    let sel = &state.interests;
    cl.push(muted(format!(
        "  Select all areas that interest you (choose at least {})",
        sel.min()
    )));
    cl.push(muted("  ↑/↓ move   Space toggles"));
    cl.push(Line::from(""));
    for (i, interest) in INTERESTS.iter().enumerate() {
        let picked = sel.contains(interest);
        let pointer = if i == state.cursor { "▸" } else { " " };
        let style = if picked {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!("  {} ", pointer), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{} {}", checkbox(picked), interest), style),
            ]),
            INTEREST_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
    if !sel.is_empty() {
        cl.push(heading("  Selected Interests:", Color::White));
        cl.push(Line::from(Span::styled(
            format!("  {}", sel.items().join(" · ")),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(e) = state.errors.for_field(ProfileField::Interests) {
        cl.push(error_line(e));
    } else if !sel.can_submit() {
        cl.push(muted(format!("  Pick {} more to continue", sel.missing())));
    }
}

fn experience_lines(state: &ProfileState, cl: &mut ClickableList) {
    cl.push(heading("  Overall Experience Level", Color::White));
    cl.push(Line::from(""));
    for (i, level) in SKILL_LEVELS.iter().enumerate() {
        let chosen = state.skill_level == Some(*level);
        cl.push_clickable(
            option_line(i, format!("{} {}", radio(chosen), level.label()), chosen),
            SKILL_BASE + i as u16,
        );
        cl.push(muted(format!("        {}", level.description())));
    }
    if let Some(e) = state.errors.for_field(ProfileField::SkillLevel) {
        cl.push(error_line(e));
    }
    if !state.errors.is_ok() {
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            "  Some sections need attention; see the ⚠ tabs above.",
            Style::default().fg(Color::Red),
        )));
    }
}

fn option_line(index: usize, text: String, chosen: bool) -> Line<'static> {
    let style = if chosen {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let key = (b'1' + index as u8) as char;
    Line::from(vec![key_span(&key.to_string()), Span::styled(text, style)])
}
