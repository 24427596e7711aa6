//! Learning hub rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::catalog::{Course, ALL_DIFFICULTIES};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, heading, input_line, key_span, muted, panel, panel_borders, radio,
    render_scrolling, ClickableList,
};

use super::actions::*;
use super::state::{topic_preview, CATEGORIES};
use super::LearningPage;

pub fn render(page: &LearningPage, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let state = &page.state;
    let mut cl = ClickableList::new();

    cl.push(heading("  Learning Hub", Color::Cyan));
    cl.push(muted(
        "  Discover courses and resources to build the skills you need for your dream career",
    ));
    cl.push(Line::from(""));

    let search = &state.search;
    cl.push_clickable(
        Line::from(
            [
                vec![key_span("/")],
                input_line(
                    "Search",
                    search.text().value().to_string(),
                    "Search courses, topics, or providers...",
                    search.is_focused(),
                )
                .spans,
            ]
            .concat(),
        ),
        FOCUS_SEARCH,
    );

    let categories: Vec<&str> = std::iter::once("All Categories").chain(CATEGORIES).collect();
    let difficulties: Vec<&str> = std::iter::once("All Levels")
        .chain(ALL_DIFFICULTIES.iter().map(|d| d.label()))
        .collect();
    cl.push_clickable(
        facet_line("g", "Category", &categories, state.category_choice()),
        CYCLE_CATEGORY,
    );
    if !is_narrow {
        push_options(&mut cl, &categories, state.category_choice(), CATEGORY_BASE);
    }
    cl.push_clickable(
        facet_line("d", "Level", &difficulties, state.difficulty_choice()),
        CYCLE_DIFFICULTY,
    );
    if !is_narrow {
        push_options(&mut cl, &difficulties, state.difficulty_choice(), DIFFICULTY_BASE);
    }
    cl.push(muted(format!(
        "   {} bookmarked · 1-9 bookmarks a listed course",
        state.bookmarks.len()
    )));
    cl.push(Line::from(""));

    if state.view.is_empty_result() {
        cl.push(muted("  No courses found matching your criteria"));
        cl.push_clickable(action_line("c", "Clear Filters", true), CLEAR_FILTERS);
    } else {
        if state.has_active_filters() {
            cl.push_clickable(
                action_line("c", format!("Clear Filters ({} shown)", state.view.len()), true),
                CLEAR_FILTERS,
            );
            cl.push(Line::from(""));
        }
        for (n, &index) in state.view.indices().iter().enumerate() {
            if let Some(course) = page.catalog.courses.get(index) {
                course_card(page, course, n, index, &mut cl);
            }
        }
    }

    cl.push(Line::from(""));
    cl.push(heading("  Need a Structured Learning Path?", Color::Green));
    cl.push(muted(
        "  Get a personalized learning roadmap based on your career goals and current skills",
    ));
    cl.push_clickable(action_line("a", "Take the Assessment →", true), GO_ASSESSMENT);

    let block = panel(" Learning ", Color::Cyan, panel_borders(is_narrow));
    let mut cs = click_state.borrow_mut();
    render_scrolling(f, area, cl, block, &page.scroll, &mut cs);
}

fn facet_line(key: &str, label: &str, options: &[&str], chosen: usize) -> Line<'static> {
    Line::from(vec![
        key_span(key),
        Span::styled(format!("{:<9}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("◂ {} ▸", options.get(chosen).copied().unwrap_or("")),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// One clickable row per option, indented under its facet line.
fn push_options(cl: &mut ClickableList, options: &[&str], chosen: usize, base: u16) {
    for (i, option) in options.iter().enumerate() {
        let style = if i == chosen {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        cl.push_clickable(
            Line::from(Span::styled(format!("        {} {}", radio(i == chosen), option), style)),
            base + i as u16,
        );
    }
}

fn course_card(
    page: &LearningPage,
    course: &Course,
    position: usize,
    index: usize,
    cl: &mut ClickableList,
) {
    let saved = page.state.bookmarks.contains(course.id);
    let (marker, marker_style) = if saved {
        ("★ Saved", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("☆ Save", Style::default().fg(Color::DarkGray))
    };
    let key = if position < 9 {
        key_span(&(position + 1).to_string())
    } else {
        Span::raw("     ")
    };
    cl.push_clickable(
        Line::from(vec![
            key,
            Span::styled(
                course.title.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(marker, marker_style),
        ]),
        BOOKMARK_BASE + index as u16,
    );
    cl.push(muted(format!(
        "     {} · {} · {} · {}",
        course.provider,
        course.category,
        course.difficulty.label(),
        course.duration
    )));
    cl.push(Line::from(vec![
        Span::styled(
            format!("     ★ {:.1}", course.rating),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("   {}", course.price), Style::default().fg(Color::Green)),
    ]));
    if !course.description.is_empty() {
        cl.push(Line::from(format!("     {}", course.description)));
    }
    let (topics, more) = topic_preview(course);
    let mut topic_text = topics.join(" · ");
    if more > 0 {
        topic_text.push_str(&format!("  +{} more", more));
    }
    cl.push(Line::from(Span::styled(
        format!("     {}", topic_text),
        Style::default().fg(Color::Cyan),
    )));
    cl.push(Line::from(""));
}
