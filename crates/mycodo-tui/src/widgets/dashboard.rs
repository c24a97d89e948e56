//! Dashboard page: heading plus a 12-column responsive panel grid
//!
//! Each panel declares a span per breakpoint. A breakpoint without its own
//! span inherits the next smaller one, so a panel with only `xs` and `lg`
//! spans stays full width at medium sizes.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Widget,
};

use mycodo_app::{DashboardPanels, PanelSlotId};

use super::Panel;
use crate::theme::styles;

/// Columns in the grid
pub const GRID_COLUMNS: u8 = 12;

/// Content widths at which the breakpoints start
pub const MD_MIN_WIDTH: u16 = 80;
pub const LG_MIN_WIDTH: u16 = 120;

/// Heading row plus a blank row
const HEADING_HEIGHT: u16 = 2;

/// Panel row height bounds
const MIN_ROW_HEIGHT: u16 = 4;
const MAX_ROW_HEIGHT: u16 = 10;

/// Width class of the content container
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Md,
    Lg,
}

impl Breakpoint {
    pub fn for_width(width: u16) -> Self {
        if width >= LG_MIN_WIDTH {
            Breakpoint::Lg
        } else if width >= MD_MIN_WIDTH {
            Breakpoint::Md
        } else {
            Breakpoint::Xs
        }
    }
}

/// Columns a panel covers at each breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    pub xs: u8,
    pub md: Option<u8>,
    pub lg: Option<u8>,
}

impl GridSpan {
    pub const fn new(xs: u8, md: Option<u8>, lg: Option<u8>) -> Self {
        Self { xs, md, lg }
    }

    /// Span at `breakpoint`, inheriting from smaller breakpoints
    pub fn at(&self, breakpoint: Breakpoint) -> u8 {
        let md = self.md.unwrap_or(self.xs);
        let span = match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Md => md,
            Breakpoint::Lg => self.lg.unwrap_or(md),
        };
        span.clamp(1, GRID_COLUMNS)
    }
}

/// Grid span of each dashboard slot
pub fn span_for(slot: PanelSlotId) -> GridSpan {
    match slot {
        PanelSlotId::SensorReadings | PanelSlotId::Controls => {
            GridSpan::new(12, Some(6), Some(4))
        }
        PanelSlotId::SystemStatus => GridSpan::new(12, None, Some(4)),
    }
}

/// Group slots into rows at `breakpoint`; a panel that would overflow the
/// 12 columns starts a new row.
pub fn grid_rows(breakpoint: Breakpoint) -> Vec<Vec<(PanelSlotId, u8)>> {
    let mut rows: Vec<Vec<(PanelSlotId, u8)>> = Vec::new();
    let mut used = 0u8;

    for slot in PanelSlotId::ALL {
        let span = span_for(slot).at(breakpoint);
        match rows.last_mut() {
            Some(row) if used + span <= GRID_COLUMNS => row.push((slot, span)),
            _ => {
                rows.push(vec![(slot, span)]);
                used = 0;
            }
        }
        used += span;
    }
    rows
}

/// Horizontal cells for one row; columns map to `width * col / 12`
fn row_cells(area: Rect, row: &[(PanelSlotId, u8)]) -> Vec<(PanelSlotId, Rect)> {
    let column_x = |col: u8| area.x + (u32::from(area.width) * u32::from(col) / 12) as u16;

    let mut cells = Vec::with_capacity(row.len());
    let mut col = 0u8;
    for &(slot, span) in row {
        let x = column_x(col);
        let end = column_x(col + span);
        cells.push((
            slot,
            Rect {
                x,
                width: end - x,
                ..area
            },
        ));
        col += span;
    }
    cells
}

pub struct Dashboard<'a> {
    panels: &'a DashboardPanels,
}

impl<'a> Dashboard<'a> {
    pub fn new(panels: &'a DashboardPanels) -> Self {
        Self { panels }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let [heading_area, grid_area] =
            Layout::vertical([Constraint::Length(HEADING_HEIGHT), Constraint::Min(0)])
                .areas(area);
        Line::styled("Dashboard", styles::heading()).render(heading_area, buf);

        let rows = grid_rows(Breakpoint::for_width(area.width));
        let row_height =
            (grid_area.height / rows.len() as u16).clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT);
        let row_areas = Layout::vertical(rows.iter().map(|_| Constraint::Length(row_height)))
            .split(grid_area);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            if row_area.height == 0 {
                continue;
            }
            for (slot, cell) in row_cells(*row_area, row) {
                Panel::new(self.panels.get(slot)).render(cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mycodo_app::PanelContent;

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::for_width(40), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(79), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(80), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(119), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(120), Breakpoint::Lg);
    }

    #[test]
    fn test_spans_inherit_smaller_breakpoints() {
        let status = span_for(PanelSlotId::SystemStatus);
        assert_eq!(status.at(Breakpoint::Xs), 12);
        assert_eq!(status.at(Breakpoint::Md), 12);
        assert_eq!(status.at(Breakpoint::Lg), 4);

        let readings = span_for(PanelSlotId::SensorReadings);
        assert_eq!(readings.at(Breakpoint::Md), 6);
        assert_eq!(readings.at(Breakpoint::Lg), 4);
    }

    #[test]
    fn test_rows_small_stack_all() {
        let rows = grid_rows(Breakpoint::Xs);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 1 && r[0].1 == 12));
    }

    #[test]
    fn test_rows_medium_pair_then_full() {
        let rows = grid_rows(Breakpoint::Md);
        assert_eq!(
            rows,
            vec![
                vec![(PanelSlotId::SensorReadings, 6), (PanelSlotId::Controls, 6)],
                vec![(PanelSlotId::SystemStatus, 12)],
            ]
        );
    }

    #[test]
    fn test_rows_large_single_row() {
        let rows = grid_rows(Breakpoint::Lg);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_row_cells_tile_the_width() {
        let area = Rect::new(5, 0, 100, 8);
        let cells = row_cells(
            area,
            &[(PanelSlotId::SensorReadings, 6), (PanelSlotId::Controls, 6)],
        );
        assert_eq!(cells[0].1.x, 5);
        assert_eq!(cells[0].1.width, 50);
        assert_eq!(cells[1].1.x, 55);
        assert_eq!(cells[1].1.width, 50);
    }

    #[test]
    fn test_heading_and_titles_in_order() {
        let panels = DashboardPanels::new();
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(Dashboard::new(&panels), term.area());

        assert!(term.line_contains(0, "Dashboard"));
        let titles = term.find_line("Sensor Readings").unwrap();
        assert!(term.line_contains(titles, "Controls"));
        assert!(term.line_contains(titles, "System Status"));

        let content = term.content();
        let a = content.find("Sensor Readings").unwrap();
        let b = content.find("Controls").unwrap();
        let c = content.find("System Status").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_medium_width_wraps_status_panel() {
        let panels = DashboardPanels::new();
        let mut term = TestTerminal::with_size(80, 22);
        term.render_widget(Dashboard::new(&panels), term.area());

        let first = term.find_line("Sensor Readings").unwrap();
        assert!(term.line_contains(first, "Controls"));
        let status = term.find_line("System Status").unwrap();
        assert!(status > first);
    }

    #[test]
    fn test_panel_content_renders_inside_grid() {
        let mut panels = DashboardPanels::new();
        panels.set(PanelSlotId::Controls, PanelContent::text(["Relay 1: off"]));
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(Dashboard::new(&panels), term.area());
        assert!(term.buffer_contains("Relay 1: off"));
    }
}
