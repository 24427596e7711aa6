//! Shared input handling: event types, click targets and pixel-to-cell
//! conversion.
//!
//! Pages never see raw browser events. `main.rs` normalizes keyboard and
//! mouse input into [`InputEvent`]s, resolving clicks through the
//! [`ClickState`] filled in by the last render.

use ratzilla::ratatui::layout::Rect;

/// Keyboard and pointer input after normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A printable character.
    Key(char),
    Backspace,
    Enter,
    /// Cycle focus to the next form field.
    Tab,
    Esc,
    Up,
    Down,
    /// A tap on a registered target. Pages define their own ids below
    /// [`crate::app::NAV_BASE`]; the shell owns the rest.
    Click(u16),
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cells.
    pub rect: Rect,
    pub action_id: u16,
}

/// Click targets registered by the current frame, plus the grid size needed
/// to map pixels back to cells. Rebuilt from scratch on every draw.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Make one row of `area` clickable across its full width. Rows outside
    /// `area` are dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        let inside = (area.y..area.y.saturating_add(area.height)).contains(&row);
        if inside {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Split a row of links into adjacent targets.
    ///
    /// `links` holds `(label_width, action_id)` in display order, with each
    /// label separated by `separator_width` columns. Every link owns its
    /// label and the nearer half of each neighbouring separator; the first
    /// and last links stretch to the edges of `area`, so the row has no
    /// dead columns.
    pub fn register_link_targets(&mut self, area: Rect, links: &[(u16, u16)], separator_width: u16) {
        if links.is_empty() || area.width == 0 {
            return;
        }

        // Label extents relative to area.x.
        let mut spans: Vec<(u16, u16)> = Vec::with_capacity(links.len());
        let mut x: u16 = 0;
        for &(width, _) in links {
            spans.push((x, x + width));
            x += width + separator_width;
        }

        let mut left = 0;
        for (i, &(_, action_id)) in links.iter().enumerate() {
            let right = match spans.get(i + 1) {
                Some(&(next_start, _)) => {
                    let end = spans[i].1;
                    end + next_start.saturating_sub(end) / 2
                }
                None => area.width,
            };
            let width = right.min(area.width).saturating_sub(left);
            if width > 0 {
                self.add_click_target(
                    Rect::new(area.x + left, area.y, width, area.height),
                    action_id,
                );
            }
            left = right;
        }
    }

    /// Action at a cell. Targets registered later are drawn on top, so they
    /// win where regions overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets
            .iter()
            .rev()
            .find(|t| {
                let r = t.rect;
                (r.x..r.x.saturating_add(r.width)).contains(&col)
                    && (r.y..r.y.saturating_add(r.height)).contains(&row)
            })
            .map(|t| t.action_id)
    }
}

/// Below this many columns the navbar collapses into a menu and pages
/// stack their columns.
pub const NARROW_WIDTH: u16 = 60;

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Map a pixel offset along one axis of the grid container to a cell index.
///
/// `offset` is measured from the container's leading edge, `extent` is the
/// container's size on that axis and `cells` the number of cells across it.
/// `None` when the point falls outside the grid or the grid is not laid out
/// yet.
pub fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_rows_and_columns() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 4, 10, 1), 1);
        cs.add_click_target(Rect::new(10, 4, 10, 1), 2);
        cs.add_click_target(Rect::new(0, 6, 40, 3), 3);

        assert_eq!(cs.hit_test(9, 4), Some(1));
        assert_eq!(cs.hit_test(10, 4), Some(2));
        assert_eq!(cs.hit_test(20, 4), None);
        assert_eq!(cs.hit_test(5, 5), None);
        assert_eq!(cs.hit_test(5, 8), Some(3));
        assert_eq!(cs.hit_test(5, 9), None);
    }

    #[test]
    fn later_target_wins_on_overlap() {
        let mut cs = ClickState::new();
        // Page body row, then a dropdown menu entry drawn over it.
        cs.add_click_target(Rect::new(0, 3, 60, 1), 1);
        cs.add_click_target(Rect::new(40, 3, 20, 1), 900);

        assert_eq!(cs.hit_test(45, 3), Some(900));
        assert_eq!(cs.hit_test(10, 3), Some(1));
    }

    #[test]
    fn clearing_forgets_the_last_frame() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 2, 80, 1), 4);
        cs.clear_targets();
        assert!(cs.targets.is_empty());
        assert_eq!(cs.hit_test(0, 2), None);
    }

    #[test]
    fn row_target_outside_area_is_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 1);
        cs.add_row_target(area, 15, 2);
        cs.add_row_target(area, 12, 3);
        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(6, 12), Some(3));
    }

    #[test]
    fn narrow_below_threshold() {
        assert!(is_narrow_layout(40));
        assert!(is_narrow_layout(NARROW_WIDTH - 1));
        assert!(!is_narrow_layout(NARROW_WIDTH));
    }

    // ── pixel conversion ────────────────────────────────────────

    #[test]
    fn pixels_map_to_cells() {
        // 30 rows over 450px: 15px per row.
        assert_eq!(pixel_to_cell(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_to_cell(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_to_cell(449.0, 450.0, 30), Some(29));
        assert_eq!(pixel_to_cell(450.0, 450.0, 30), None);
    }

    #[test]
    fn pixels_outside_or_unlaid_grid_map_to_nothing() {
        assert_eq!(pixel_to_cell(-1.0, 800.0, 80), None);
        assert_eq!(pixel_to_cell(10.0, 0.0, 80), None);
        assert_eq!(pixel_to_cell(10.0, 800.0, 0), None);
    }

    #[test]
    fn tap_resolves_to_registered_action() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;
        cs.add_click_target(Rect::new(0, 11, 80, 1), 7);

        let row = pixel_to_cell(11.0 * 15.0 + 7.0, 450.0, cs.terminal_rows);
        let col = pixel_to_cell(333.0, 800.0, cs.terminal_cols);
        assert_eq!(row.zip(col).and_then(|(r, c)| cs.hit_test(c, r)), Some(7));
    }

    // ── register_link_targets ───────────────────────────────────

    #[test]
    fn links_split_separators() {
        // " Home " (6) │ " About " (7) │ " Contact " (9), separator width 1
        let mut cs = ClickState::new();
        cs.register_link_targets(Rect::new(0, 0, 60, 1), &[(6, 1), (7, 2), (9, 3)], 1);
        assert_eq!(cs.targets.len(), 3);

        assert_eq!(cs.hit_test(0, 0), Some(1));
        assert_eq!(cs.hit_test(5, 0), Some(1));
        // The one-column separator at 6 goes to the link on its right.
        assert_eq!(cs.hit_test(6, 0), Some(2));
        assert_eq!(cs.hit_test(13, 0), Some(2));
        assert_eq!(cs.hit_test(14, 0), Some(3));
        // The last link reaches the right edge.
        assert_eq!(cs.hit_test(59, 0), Some(3));
    }

    #[test]
    fn wide_separator_is_shared() {
        let mut cs = ClickState::new();
        // Labels at 0..6 and 10..16 with a 4-column gap.
        cs.register_link_targets(Rect::new(0, 0, 30, 1), &[(6, 1), (6, 2)], 4);
        assert_eq!(cs.hit_test(7, 0), Some(1));
        assert_eq!(cs.hit_test(8, 0), Some(2));
    }

    #[test]
    fn links_respect_area_offset() {
        let mut cs = ClickState::new();
        cs.register_link_targets(Rect::new(5, 3, 30, 2), &[(6, 1), (6, 2)], 1);
        assert_eq!(cs.hit_test(5, 3), Some(1));
        assert_eq!(cs.hit_test(5, 4), Some(1));
        assert_eq!(cs.hit_test(4, 3), None);
        assert_eq!(cs.hit_test(34, 3), Some(2));
        assert_eq!(cs.hit_test(35, 3), None);
    }

    #[test]
    fn no_links_no_targets() {
        let mut cs = ClickState::new();
        cs.register_link_targets(Rect::new(0, 0, 80, 1), &[], 3);
        assert!(cs.targets.is_empty());
    }
}
