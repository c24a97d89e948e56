//! Settings page: read-only view of the running configuration

use std::path::PathBuf;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mycodo_app::{Chrome, RouteTable};

use crate::theme::styles;

pub struct SettingsPage<'a> {
    chrome: &'a Chrome,
    routes: &'a RouteTable,
    config_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
}

impl<'a> SettingsPage<'a> {
    pub fn new(chrome: &'a Chrome, routes: &'a RouteTable) -> Self {
        Self {
            chrome,
            routes,
            config_path: None,
            log_path: None,
        }
    }

    /// File the settings were loaded from; `None` means built-in defaults
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn log_path(mut self, path: PathBuf) -> Self {
        self.log_path = Some(path);
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("Settings", styles::heading()),
            Line::raw(""),
            field("Brand", self.chrome.brand().to_string()),
            field(
                "Config file",
                self.config_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in defaults)".to_string()),
            ),
            field(
                "Log file",
                self.log_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Line::raw(""),
            Line::styled("Routes", styles::accent_bold()),
        ];

        for route in self.routes.routes() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", route.path), styles::text_primary()),
                Span::styled(route.page.title(), styles::text_secondary()),
            ]));
        }
        let fallback = self
            .routes
            .fallback()
            .map(|page| page.title())
            .unwrap_or("(empty page)");
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", "*"), styles::text_muted()),
            Span::styled(fallback, styles::text_muted()),
        ]));

        lines.push(Line::raw(""));
        lines.push(Line::styled("Navigation", styles::accent_bold()));
        for (i, item) in self.chrome.nav_items().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}] ", i + 1), styles::keybinding()),
                Span::styled(format!("{:<12}", item.label), styles::text_primary()),
                Span::styled(item.path.clone(), styles::text_secondary()),
            ]));
        }

        lines
    }
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<13}", format!("{name}:")), styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

impl Widget for SettingsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mycodo_core::{default_nav_items, Page};

    #[test]
    fn test_lists_routes_and_nav_items() {
        let chrome = Chrome::new("Mycodo", default_nav_items());
        let mut routes = RouteTable::with_defaults();
        routes.register("/settings", Page::Settings);

        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(SettingsPage::new(&chrome, &routes), term.area());

        assert!(term.line_contains(0, "Settings"));
        assert!(term.buffer_contains("Brand:"));
        assert!(term.buffer_contains("(built-in defaults)"));
        assert!(term.buffer_contains("/settings"));
        assert!(term.buffer_contains("(empty page)"));
        assert!(term.buffer_contains("[2] Settings"));
    }

    #[test]
    fn test_shows_config_and_log_paths() {
        let chrome = Chrome::new("Mycodo", Vec::new());
        let routes = RouteTable::with_defaults().with_fallback(Page::NotFound);

        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(
            SettingsPage::new(&chrome, &routes)
                .config_path(Some(PathBuf::from("/etc/mycodo/config.toml")))
                .log_path(PathBuf::from("/var/log/mycodo.log")),
            term.area(),
        );

        assert!(term.buffer_contains("/etc/mycodo/config.toml"));
        assert!(term.buffer_contains("/var/log/mycodo.log"));
        assert!(term.buffer_contains("Not Found"));
    }
}
