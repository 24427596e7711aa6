//! Home rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, heading, muted, panel, panel_borders, render_scrolling, ClickableList,
};

use super::actions::*;
use super::HomePage;

struct Card {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Card; 3] = [
    Card {
        title: "Personalized Recommendations",
        body: "AI analyzes your skills, interests, and goals to suggest perfect career matches tailored to your unique profile.",
    },
    Card {
        title: "Career Roadmaps",
        body: "Step-by-step guidance with skills to develop, courses to take, and milestones to achieve your dream career.",
    },
    Card {
        title: "Learning Resources",
        body: "Curated courses, certifications, and educational content from top institutions to accelerate your growth.",
    },
];

const STATS: [(&str, &str); 4] = [
    ("50K+", "Users Guided"),
    ("500+", "Career Paths"),
    ("95%", "Success Rate"),
    ("24/7", "AI Support"),
];

const STEPS: [Card; 3] = [
    Card {
        title: "Tell Us About You",
        body: "Share your interests, skills, education, and career goals through our comprehensive assessment.",
    },
    Card {
        title: "AI Analysis",
        body: "Our advanced AI algorithms analyze your profile against thousands of career paths and market trends.",
    },
    Card {
        title: "Get Your Roadmap",
        body: "Receive personalized recommendations with actionable steps to achieve your career objectives.",
    },
];

pub fn render(page: &HomePage, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    cl.push(heading("  Guiding Aspirations, Shaping Futures", Color::Cyan));
    cl.push(muted(
        "  Discover your perfect career path with AI-powered insights, personalized recommendations, and expert guidance tailored just for you.",
    ));
    cl.push(Line::from(""));
    cl.push_clickable(action_line("g", "Get Started Free →", true), GET_STARTED);
    cl.push_clickable(action_line("l", "Learn More", true), LEARN_MORE);
    cl.push(Line::from(""));

    for card in &FEATURES {
        cl.push(heading(format!("  ◆ {}", card.title), Color::Yellow));
        cl.push(muted(format!("    {}", card.body)));
    }
    cl.push(Line::from(""));

    let stat_spans: Vec<Span> = STATS
        .iter()
        .flat_map(|(value, label)| {
            [
                Span::styled(
                    format!("  {} ", value),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(label.to_string(), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();
    if is_narrow {
        for pair in stat_spans.chunks(2) {
            cl.push(Line::from(pair.to_vec()));
        }
    } else {
        cl.push(Line::from(stat_spans));
    }
    cl.push(Line::from(""));

    cl.push(heading("  How CareerCompass Works", Color::Cyan));
    cl.push(muted("  Three simple steps to discover your ideal career path"));
    for (i, step) in STEPS.iter().enumerate() {
        cl.push(heading(format!("  {}. {}", i + 1, step.title), Color::White));
        cl.push(muted(format!("     {}", step.body)));
    }
    cl.push(Line::from(""));

    cl.push(heading("  Ready to Shape Your Future?", Color::Green));
    cl.push(muted(
        "  Join thousands of professionals who have discovered their perfect career path with CareerCompass.",
    ));
    cl.push_clickable(action_line("g", "Start Your Journey Today →", true), START_JOURNEY);

    let block = panel(" CareerCompass ", Color::Cyan, panel_borders(is_narrow));
    let mut cs = click_state.borrow_mut();
    render_scrolling(f, area, cl, block, &page.scroll, &mut cs);
}
