//! Fallback page for unmatched paths (when enabled in config)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct NotFound<'a> {
    path: &'a str,
}

impl<'a> NotFound<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

impl Widget for NotFound<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled("Not Found", styles::heading()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("No page is registered for ", styles::text_secondary()),
                Span::styled(self.path, styles::accent_bold()),
            ]),
            Line::styled("Press [ to go back", styles::text_muted()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
