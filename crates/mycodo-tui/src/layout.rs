//! Screen layout: persistent navbar on top, content below
//!
//! The navbar always gets its rows first; the content region takes what is
//! left, so a short terminal squeezes content to zero height but never hides
//! the chrome.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Navbar height: top border + link row + bottom border
pub const NAVBAR_HEIGHT: u16 = 3;

/// Blank rows above and below the content container
pub const CONTENT_MARGIN: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Persistent navigation bar
    pub navbar: Rect,

    /// Everything below the navbar
    pub content: Rect,
}

/// Split the screen into navbar and content region
pub fn create(area: Rect) -> ScreenAreas {
    let navbar_height = NAVBAR_HEIGHT.min(area.height);
    let chunks =
        Layout::vertical([Constraint::Length(navbar_height), Constraint::Min(0)]).split(area);

    ScreenAreas {
        navbar: chunks[0],
        content: chunks[1],
    }
}

/// Centered container inside the content region, at most `max_width`
/// columns wide, with a row of margin above and below.
pub fn content_container(content: Rect, max_width: u16) -> Rect {
    let row = content.inner(Margin::new(0, CONTENT_MARGIN));
    let width = row.width.min(max_width);
    Rect {
        x: row.x + (row.width - width) / 2,
        width,
        ..row
    }
}
