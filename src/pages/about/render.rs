//! About rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Color;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{
    action_line, heading, muted, panel, panel_borders, render_scrolling, ClickableList,
};

use super::actions::START_ASSESSMENT;
use super::AboutPage;

const CHALLENGE: [&str; 2] = [
    "In today's rapidly evolving job market, millions of students and professionals struggle to identify career paths that align with their unique strengths, interests, and aspirations.",
    "Traditional career counseling is often generic, outdated, or inaccessible, leaving people to navigate complex career decisions without proper guidance.",
];

const SOLUTION: [&str; 2] = [
    "CareerCompass leverages AI-powered analytics to provide hyper-personalized career recommendations based on your unique profile, market trends, and future opportunities.",
    "We make career guidance accessible, data-driven, and continuously updated to reflect the dynamic nature of modern industries.",
];

const PROCESS: [(&str, [&str; 4]); 3] = [
    (
        "Tell Us About You",
        [
            "Personal interests and passions",
            "Current skills and expertise",
            "Educational background",
            "Career goals and preferences",
        ],
    ),
    (
        "AI Analysis",
        [
            "Market trend analysis",
            "Skill-career compatibility",
            "Growth opportunity assessment",
            "Salary potential evaluation",
        ],
    ),
    (
        "Get Your Roadmap",
        [
            "Ranked career matches",
            "Skill gap analysis",
            "Learning path recommendations",
            "Industry insights",
        ],
    ),
];

pub fn render(page: &AboutPage, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let mut cl = ClickableList::new();

    cl.push(Line::from(""));
    cl.push(heading("  Revolutionizing Career Discovery", Color::Cyan));
    cl.push(muted(
        "  CareerCompass combines cutting-edge AI technology with personalized guidance to help you navigate your professional journey with confidence.",
    ));
    cl.push(Line::from(""));

    cl.push(heading("  The Challenge", Color::Yellow));
    for p in CHALLENGE {
        cl.push(muted(format!("  {}", p)));
    }
    cl.push(Line::from(""));
    cl.push(heading("  Our Solution", Color::Yellow));
    for p in SOLUTION {
        cl.push(muted(format!("  {}", p)));
    }
    cl.push(Line::from(""));

    cl.push(heading("  How CareerCompass Works", Color::Cyan));
    for (i, (title, bullets)) in PROCESS.iter().enumerate() {
        cl.push(heading(format!("  Step {}: {}", i + 1, title), Color::White));
        for b in bullets {
            cl.push(muted(format!("    • {}", b)));
        }
    }
    cl.push(Line::from(""));

    cl.push(heading("  Our Mission", Color::Green));
    cl.push(muted("  Empowering every individual to find their ideal career path."));
    cl.push(muted(
        "  We believe that everyone deserves access to personalized career guidance. By combining AI technology with human expertise, anyone, anywhere can discover and pursue their dream career.",
    ));
    cl.push(Line::from(""));
    cl.push(heading("  Ready to Discover Your Path?", Color::Green));
    cl.push_clickable(action_line("a", "Start Your Assessment →", true), START_ASSESSMENT);

    let block = panel(" About CareerCompass ", Color::Cyan, panel_borders(is_narrow));
    let mut cs = click_state.borrow_mut();
    render_scrolling(f, area, cl, block, &page.scroll, &mut cs);
}
