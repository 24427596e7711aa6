//! Dashboard rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Borders;
use ratzilla::ratatui::Frame;

use crate::catalog::Career;
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, heading, input_line, key_span, muted, panel, panel_borders, progress_bar, radio,
    render_scrolling, render_wrapped, ClickableList,
};

use super::actions::*;
use super::state::{Priority, INDUSTRIES, QUICK_PICKS, RECOMMENDED_SKILLS};
use super::DashboardPage;

pub fn render(page: &DashboardPage, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = panel_borders(is_narrow);
    let mut cs = click_state.borrow_mut();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(if is_narrow { 6 } else { 5 }), Constraint::Min(8)])
        .split(area);

    let mut header = ClickableList::new();
    header_lines(page, &mut header, is_narrow);
    render_wrapped(f, chunks[0], header, panel("", Color::Cyan, Borders::TOP), &mut cs);

    let mut main = ClickableList::new();
    search_lines(page, &mut main);
    career_lines(page, &mut main);

    if is_narrow {
        main.push(Line::from(""));
        sidebar_lines(page, &mut main);
        render_scrolling(f, chunks[1], main, panel("", Color::Cyan, borders), &page.scroll, &mut cs);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(chunks[1]);
    render_scrolling(
        f,
        cols[0],
        main,
        panel(" Career Matches ", Color::Cyan, borders),
        &page.scroll,
        &mut cs,
    );
    let mut side = ClickableList::new();
    sidebar_lines(page, &mut side);
    render_wrapped(f, cols[1], side, panel(" Next Steps ", Color::Yellow, borders), &mut cs);
}

fn header_lines(page: &DashboardPage, cl: &mut ClickableList, is_narrow: bool) {
    let stats = &page.state.stats;
    cl.push(Line::from(vec![
        Span::styled(
            " Your Career Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Personalized recommendations based on your assessment",
            Style::default().fg(Color::Gray),
        ),
    ]));
    let figures = [
        (format!("{}%", stats.best_match), "Best Career Match"),
        (stats.career_count.to_string(), "Career Options"),
        (stats.course_count.to_string(), "Recommended Courses"),
        (stats.best_salary.clone(), "Top Salary Range"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (value, label) in figures {
        spans.push(Span::styled(
            value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}   ", label),
            Style::default().fg(Color::Gray),
        ));
    }
    cl.push(Line::from(spans));
    if !is_narrow {
        cl.push_clickable(action_line("a", "Retake Assessment", true), RETAKE_ASSESSMENT);
    }
}

fn search_lines(page: &DashboardPage, cl: &mut ClickableList) {
    let search = &page.state.search;
    cl.push_clickable(
        Line::from(
            [
                vec![key_span("/")],
                input_line(
                    "Search",
                    search.text().value().to_string(),
                    "Search careers or industries...",
                    search.is_focused(),
                )
                .spans,
            ]
            .concat(),
        ),
        FOCUS_SEARCH,
    );
    let choice = page.state.industry_choice();
    let names = std::iter::once("All Industries").chain(INDUSTRIES);
    for (i, name) in names.enumerate() {
        let chosen = i == choice;
        let style = if chosen {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(vec![
                key_span(&i.to_string()),
                Span::styled(format!("{} {}", radio(chosen), name), style),
            ]),
            INDUSTRY_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
}

fn career_lines(page: &DashboardPage, cl: &mut ClickableList) {
    let view = &page.state.view;
    if view.is_empty_result() {
        cl.push(muted("  No careers match your search."));
        return;
    }
    let settling = if page.state.search.is_settling() {
        " (updating...)"
    } else {
        ""
    };
    cl.push(muted(format!("  {} matches{}", view.len(), settling)));
    cl.push(Line::from(""));
    for &i in view.indices() {
        if let Some(career) = page.catalog.careers.get(i) {
            career_card(career, cl);
        }
    }
}

fn career_card(career: &Career, cl: &mut ClickableList) {
    cl.push(Line::from(vec![
        Span::styled(
            format!("  {}", career.title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}% match", career.match_percent),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(muted(format!(
        "  {} · {} growth",
        career.industry, career.growth_rate
    )));
    cl.push(Line::from(format!("  {}", career.description)));
    cl.push(muted(format!("  Average Salary: {}", career.average_salary)));
    cl.push(muted(format!("  Education Required: {}", career.education)));
    cl.push(Line::from(Span::styled(
        format!("  Key Skills: {}", career.required_skills.join(", ")),
        Style::default().fg(Color::Cyan),
    )));
    cl.push(Line::from(""));
}

fn sidebar_lines(page: &DashboardPage, cl: &mut ClickableList) {
    cl.push(heading("  Recommended Skills", Color::Yellow));
    cl.push(muted("  Focus on these skills to reach your career goals"));
    for skill in &RECOMMENDED_SKILLS {
        let priority_style = match skill.priority {
            Priority::High => Style::default().fg(Color::Red),
            Priority::Medium => Style::default().fg(Color::Gray),
        };
        cl.push(Line::from(vec![
            Span::styled(format!("  {} ", skill.name), Style::default().fg(Color::White)),
            Span::styled(skill.priority.label(), priority_style),
        ]));
        cl.push(Line::from(Span::styled(
            format!(
                "  {} {}%",
                progress_bar(skill.progress as f64, 16),
                skill.progress
            ),
            Style::default().fg(Color::Cyan),
        )));
    }
    cl.push(Line::from(""));
    cl.push(heading("  Quick Picks", Color::Yellow));
    cl.push(muted("  Courses that match your career goals"));
    for (i, course) in page.catalog.courses.iter().take(QUICK_PICKS).enumerate() {
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!("  ▸ {}", course.title), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {} · {}", course.provider, course.duration),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            QUICK_PICK_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
    cl.push_clickable(action_line("l", "Explore Learning Hub →", true), GO_LEARNING);
    cl.push_clickable(action_line("a", "Retake Assessment", true), RETAKE_ASSESSMENT);
}
