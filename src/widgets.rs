//! Reusable clickable UI components and small drawing helpers.
//!
//! Each component encapsulates both rendering and click target registration,
//! so visual output and interactive behaviour stay co-located.
//!
//! # Components
//!
//! - [`NavBar`]: horizontal route links with the active one highlighted.
//! - [`ClickableList`]: vertical list with per-line click targets.
//! - [`ScrollState`]: vertical scroll offset clamped to what was last drawn.

use std::cell::Cell;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::forms::FieldError;
use crate::input::ClickState;

// ── NavBar ─────────────────────────────────────────────────────

/// One row of links separated by `separator`. Click targets follow the
/// rendered label widths, so labels may differ in length.
///
/// ```ignore
/// NavBar::new(" │ ")
///     .item("Home", true, NAV_HOME)
///     .item("About", false, NAV_ABOUT)
///     .render(f, area, &mut cs);
/// ```
pub struct NavBar<'a> {
    items: Vec<(String, bool, u16)>,
    separator: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            items: Vec::new(),
            separator,
        }
    }

    pub fn item(mut self, label: impl Into<String>, active: bool, action_id: u16) -> Self {
        self.items.push((label.into(), active, action_id));
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, active, action_id)) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, nav_style(*active)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
        cs.register_link_targets(area, &widths, sep_width);
    }
}

fn nav_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Annotate lines as clickable while building them, then call
/// [`register_targets`](ClickableList::register_targets) once to register
/// every target at the row its line actually lands on.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Filters"));
/// cl.push_clickable(Line::from(" [c] Clear filters"), CLEAR_FILTERS);
/// cl.register_targets(area, &mut cs, 1, 1, 0, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
#[derive(Default)]
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line. The target moves with the line if lines are
    /// inserted before it.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders.
    /// * `scroll`: vertical scroll in visual rows.
    /// * `inner_width`: content width when the paragraph wraps, `0` when it
    ///   does not (one logical line = one row).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let mut starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            let h = if inner_width == 0 {
                1
            } else {
                line_height(line, inner_width)
            };
            starts.push(cumulative);
            heights.push(h);
            cumulative = cumulative.saturating_add(h);
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            let (Some(&vstart), Some(&vheight)) = (starts.get(li), heights.get(li)) else {
                continue;
            };
            // Every visual row of a wrapped line is clickable.
            for r in 0..vheight {
                let vr = vstart + r;
                if vr < scroll {
                    continue;
                }
                let row = content_y + (vr - scroll);
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}

fn line_height(line: &Line, width: u16) -> u16 {
    let h = Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(width);
    (h as u16).max(1)
}

/// Rows `lines` occupy when wrapped to `width`. Used to clamp scrolling.
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return lines.len() as u16;
    }
    lines.iter().map(|l| line_height(l, width)).sum()
}

/// Largest useful scroll offset for content of `content_rows` in a
/// viewport of `viewport_rows`.
pub fn max_scroll(content_rows: u16, viewport_rows: u16) -> u16 {
    content_rows.saturating_sub(viewport_rows)
}

// ── ScrollState ──────────────────────────────────────────────

/// Scroll offset for a page body. The upper bound is only known while
/// rendering, so render records it through [`ScrollState::fit`] and input
/// handling clamps against the last recorded value.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: Cell<u16>,
    max: Cell<u16>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn offset(&self) -> u16 {
        self.offset.get()
    }

    pub fn up(&mut self, rows: u16) -> bool {
        let old = self.offset.get();
        self.offset.set(old.saturating_sub(rows));
        old != self.offset.get()
    }

    pub fn down(&mut self, rows: u16) -> bool {
        let old = self.offset.get();
        self.offset.set(old.saturating_add(rows).min(self.max.get()));
        old != self.offset.get()
    }

    pub fn reset(&mut self) {
        self.offset.set(0);
    }

    /// Record the content and viewport size from a render pass and return
    /// the clamped offset to draw with.
    pub fn fit(&self, content_rows: u16, viewport_rows: u16) -> u16 {
        let max = max_scroll(content_rows, viewport_rows);
        self.max.set(max);
        let offset = self.offset.get().min(max);
        self.offset.set(offset);
        offset
    }
}

/// Draw `cl` inside `block` as a wrapped, scrollable paragraph and register
/// its click targets at the rows they land on after scrolling.
pub fn render_scrolling(
    f: &mut Frame,
    area: Rect,
    cl: ClickableList,
    block: Block,
    scroll: &ScrollState,
    cs: &mut ClickState,
) {
    let inner = block.inner(area);
    let content_rows = wrapped_height(cl.lines(), inner.width);
    let offset = scroll.fit(content_rows, inner.height);
    let top = inner.y.saturating_sub(area.y);
    let bottom = (area.y + area.height).saturating_sub(inner.y + inner.height);
    cl.register_targets(area, cs, top, bottom, offset, inner.width);

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(widget, area);
}

/// Like [`render_scrolling`] for content that is not scrolled.
pub fn render_wrapped(f: &mut Frame, area: Rect, cl: ClickableList, block: Block, cs: &mut ClickState) {
    let inner = block.inner(area);
    let top = inner.y.saturating_sub(area.y);
    let bottom = (area.y + area.height).saturating_sub(inner.y + inner.height);
    cl.register_targets(area, cs, top, bottom, 0, inner.width);
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

// ── Drawing helpers ────────────────────────────────────────────

/// A column at most `max_width` wide, centred in `area`. Narrow screens
/// get the whole width.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let x = area.x + (area.width - max_width) / 2;
    Rect::new(x, area.y, max_width, area.height)
}

/// `borders` is usually `Borders::ALL`, or top/bottom only on narrow screens.
pub fn panel<'a>(title: &'a str, color: Color, borders: Borders) -> Block<'a> {
    Block::default()
        .borders(borders)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

pub fn panel_borders(is_narrow: bool) -> Borders {
    if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

/// `" [k] "` in the key-hint colour.
pub fn key_span(key: &str) -> Span<'static> {
    Span::styled(
        format!(" [{}] ", key),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// A hint line such as `" [n] Next"`. `enabled == false` dims it.
pub fn action_line(key: &str, label: impl Into<String>, enabled: bool) -> Line<'static> {
    let label_style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![key_span(key), Span::styled(label.into(), label_style)])
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[✓]"
    } else {
        "[ ]"
    }
}

pub fn radio(selected: bool) -> &'static str {
    if selected {
        "(●)"
    } else {
        "( )"
    }
}

/// A text bar such as `██████░░░░`, `percent` in 0..=100.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// An input row: label, current text and a cursor when focused.
pub fn input_line(label: &str, shown: String, placeholder: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { " ▸ " } else { "   " };
    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<10}", label), label_style),
    ];
    if shown.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            shown,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// A clickable input row followed by its inline error, if any.
pub fn push_input(
    cl: &mut ClickableList,
    label: &str,
    shown: String,
    placeholder: &str,
    focused: bool,
    error: Option<&FieldError>,
    action_id: u16,
) {
    cl.push_clickable(input_line(label, shown, placeholder, focused), action_id);
    if let Some(e) = error {
        cl.push(error_line(e));
    }
}

pub fn error_line(error: &FieldError) -> Line<'static> {
    Line::from(Span::styled(
        format!("     ⚠ {}", error),
        Style::default().fg(Color::Red),
    ))
}

pub fn heading(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

pub fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::Gray)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_lines_land_on_their_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("Filters"));
        cl.push_clickable(Line::from("All"), 10);
        cl.push_clickable(Line::from("Technology"), 11);
        cl.push(Line::from(""));

        // Borders::ALL: one row above and below the content.
        let area = Rect::new(0, 5, 40, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(3, 6), None);
        assert_eq!(cs.hit_test(3, 7), Some(10));
        assert_eq!(cs.hit_test(3, 8), Some(11));
        assert_eq!(cs.hit_test(3, 9), None);
    }

    #[test]
    fn scrolled_out_lines_register_nothing() {
        let mut cl = ClickableList::new();
        for i in 0..4 {
            cl.push_clickable(Line::from(format!("course {}", i)), 100 + i);
        }
        let area = Rect::new(0, 10, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 1, 2, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(1, 10), Some(102));
        assert_eq!(cs.hit_test(1, 11), Some(103));
    }

    #[test]
    fn targets_clipped_by_bottom_border() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("row {}", i)), 50 + i);
        }
        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(1, 3), Some(52));
        assert_eq!(cs.hit_test(1, 4), None);
    }

    #[test]
    fn wrapped_line_pushes_later_targets_down() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890"));
        cl.push_clickable(Line::from("bookmark"), 7);

        let area = Rect::new(0, 0, 10, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(1, 0), None);
        assert_eq!(cs.hit_test(1, 1), None);
        assert_eq!(cs.hit_test(1, 2), Some(7));
    }

    #[test]
    fn wrapped_clickable_line_covers_every_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 42);
        let area = Rect::new(0, 0, 10, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(1, 0), Some(42));
        assert_eq!(cs.hit_test(1, 2), Some(42));
        assert_eq!(cs.hit_test(1, 3), None);
    }

    #[test]
    fn wrapped_height_counts_visual_rows() {
        let lines = vec![
            Line::from("12345678901234567890"),
            Line::from("short"),
            Line::from(""),
        ];
        assert_eq!(wrapped_height(&lines, 10), 4);
        assert_eq!(wrapped_height(&lines, 0), 3);
    }

    #[test]
    fn scroll_limit() {
        assert_eq!(max_scroll(30, 10), 20);
        assert_eq!(max_scroll(5, 10), 0);
    }

    #[test]
    fn scroll_state_clamps_to_last_fit() {
        let mut s = ScrollState::new();
        assert!(!s.down(1));
        assert_eq!(s.fit(25, 10), 0);
        assert!(s.down(10));
        assert!(s.down(10));
        assert_eq!(s.offset(), 15);
        assert!(!s.down(1));
        // Viewport grew: the offset shrinks to fit.
        assert_eq!(s.fit(25, 20), 5);
        assert!(s.up(10));
        assert_eq!(s.offset(), 0);
        assert!(!s.up(1));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(100.0, 4), "████");
        assert_eq!(progress_bar(250.0, 4), "████");
    }

    #[test]
    fn centered_column_clamps_width() {
        assert_eq!(centered_column(Rect::new(0, 2, 100, 20), 60), Rect::new(20, 2, 60, 20));
        assert_eq!(centered_column(Rect::new(0, 2, 40, 20), 60), Rect::new(0, 2, 40, 20));
    }

    #[test]
    fn toggles_render_state() {
        assert_eq!(checkbox(true), "[✓]");
        assert_eq!(checkbox(false), "[ ]");
        assert_eq!(radio(true), "(●)");
    }
}
