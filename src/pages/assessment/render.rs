//! Assessment rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, panel, panel_borders, progress_bar, radio, render_wrapped, ClickableList,
};

use super::actions::*;
use super::state::{AssessmentState, DotStatus};

pub fn render(
    state: &AssessmentState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = panel_borders(is_narrow);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Progress
            Constraint::Min(8),    // Question
            Constraint::Length(4), // Navigation
        ])
        .split(area);

    render_progress(state, f, chunks[0], is_narrow);
    render_question(state, f, chunks[1], click_state, is_narrow);
    render_nav(state, f, chunks[2], click_state, borders);
}

fn render_progress(state: &AssessmentState, f: &mut Frame, area: Rect, is_narrow: bool) {
    let steps = &state.steps;
    let bar_width = area.width.saturating_sub(12).min(50) as usize;
    let dots: Vec<Span> = (0..steps.total())
        .map(|i| match state.dot(i) {
            DotStatus::Done => Span::styled("● ", Style::default().fg(Color::Green)),
            DotStatus::Current => Span::styled(
                "● ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            DotStatus::Upcoming => Span::styled("○ ", Style::default().fg(Color::DarkGray)),
        })
        .collect();

    let title = if is_narrow {
        " Assessment "
    } else {
        " Career Assessment "
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" Question {} of {}", steps.current() + 1, steps.total()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {:.0}% complete", steps.progress_percent()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", progress_bar(steps.progress_percent(), bar_width)),
            Style::default().fg(Color::Cyan),
        )),
        Line::from([vec![Span::raw(" ")], dots].concat()),
    ];
    let block = panel(title, Color::Cyan, Borders::TOP);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_question(
    state: &AssessmentState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    is_narrow: bool,
) {
    let q = state.question();
    let selected = state.selected();
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        format!(" {}", q.prompt),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));
    for (i, option) in q.options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let key = (b'1' + i as u8) as char;
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" [{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{} {}", radio(is_selected), option), style),
            ]),
            OPTION_BASE + i as u16,
        );
    }
    if let Some(notice) = state.notice {
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            format!(" ⚠ {}", notice),
            Style::default().fg(Color::Red),
        )));
    }

    let block = panel(
        if is_narrow { "" } else { " Question " },
        Color::Yellow,
        panel_borders(is_narrow),
    );
    render_wrapped(f, area, cl, block, &mut click_state.borrow_mut());
}

fn render_nav(
    state: &AssessmentState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    borders: Borders,
) {
    let steps = &state.steps;
    let answered = state.selected().is_some();
    let next_label = if steps.is_last() {
        "Complete Assessment"
    } else {
        "Next →"
    };

    let mut cl = ClickableList::new();
    cl.push_clickable(action_line("p", "← Previous", !steps.is_first()), PREVIOUS);
    cl.push_clickable(action_line("n", next_label, answered), NEXT);
    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0, 0);

    let block = panel("", Color::DarkGray, borders);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

