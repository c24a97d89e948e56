//! Persistent navigation bar
//!
//! Brand on the left, then one link per navigation item in supplied order,
//! each prefixed with its activation digit. Key hints are right-aligned when
//! they fit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use mycodo_app::Chrome;
use mycodo_core::NavigationItem;

use crate::theme::styles;

/// Gap between brand and links, and between links
const GAP: &str = "  ";

/// One activatable link
#[derive(Debug, Clone)]
pub struct NavbarLink<'a> {
    key: usize,
    item: &'a NavigationItem,
    focused: bool,
    active: bool,
}

impl<'a> NavbarLink<'a> {
    /// `key` is the 1-based digit that activates the link
    pub fn new(key: usize, item: &'a NavigationItem) -> Self {
        Self {
            key,
            item,
            focused: false,
            active: false,
        }
    }

    /// Draw the keyboard cursor on this link
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the link as the current route.
    ///
    /// The navbar never sets this; every link renders the same on every page.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn spans(&self) -> Vec<Span<'a>> {
        if self.focused {
            let style = styles::focused_selected();
            return vec![
                Span::styled(format!("[{}]", self.key), style),
                Span::styled(format!(" {}", self.item.label), style),
            ];
        }

        let label_style = if self.active {
            styles::accent_bold().add_modifier(Modifier::UNDERLINED)
        } else {
            styles::text_primary()
        };
        vec![
            Span::styled("[", styles::text_muted()),
            Span::styled(self.key.to_string(), styles::keybinding()),
            Span::styled("]", styles::text_muted()),
            Span::styled(format!(" {}", self.item.label), label_style),
        ]
    }
}

/// Top bar rendering the chrome
pub struct Navbar<'a> {
    chrome: &'a Chrome,
    focus: Option<usize>,
}

impl<'a> Navbar<'a> {
    pub fn new(chrome: &'a Chrome) -> Self {
        Self {
            chrome,
            focus: None,
        }
    }

    /// Index of the link under the keyboard cursor
    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }

    fn links(&self) -> impl Iterator<Item = NavbarLink<'a>> + '_ {
        self.chrome
            .nav_items()
            .iter()
            .enumerate()
            .map(move |(i, item)| NavbarLink::new(i + 1, item).focused(self.focus == Some(i)))
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.chrome.brand().to_string(), styles::accent_bold()),
        ];
        for link in self.links() {
            spans.push(Span::raw(GAP));
            spans.extend(link.spans());
        }
        Line::from(spans)
    }
}

fn hints_line() -> Line<'static> {
    let key = styles::keybinding();
    let muted = styles::text_muted();
    Line::from(vec![
        Span::styled("[", key),
        Span::styled(" back  ", muted),
        Span::styled("]", key),
        Span::styled(" fwd  ", muted),
        Span::styled("r", key),
        Span::styled(" reload  ", muted),
        Span::styled("q", key),
        Span::styled(" quit ", muted),
    ])
}

/// Rendered width in columns, saturating at `u16::MAX`
fn column_width(line: &Line) -> u16 {
    u16::try_from(line.width()).unwrap_or(u16::MAX)
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let title_width = column_width(&title);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let hints = hints_line();
        let hints_width = column_width(&hints);
        let needed = title_width
            .saturating_add(column_width(&Line::raw(GAP)))
            .saturating_add(hints_width);
        if needed <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mycodo_core::default_nav_items;

    fn chrome() -> Chrome {
        Chrome::new("Mycodo", default_nav_items())
    }

    #[test]
    fn test_renders_brand_and_links_in_order() {
        let chrome = chrome();
        let mut term = TestTerminal::new();
        term.render_widget(Navbar::new(&chrome), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "Mycodo"));
        assert!(term.line_contains(1, "[1] Dashboard"));
        assert!(term.line_contains(1, "[2] Settings"));

        let content = term.content();
        let brand = content.find("Mycodo").unwrap();
        let dashboard = content.find("Dashboard").unwrap();
        let settings = content.find("Settings").unwrap();
        assert!(brand < dashboard && dashboard < settings);
    }

    #[test]
    fn test_hints_shown_when_wide() {
        let chrome = chrome();
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(Navbar::new(&chrome), term.area());
        assert!(term.line_contains(1, "q quit"));
    }

    #[test]
    fn test_hints_dropped_when_narrow() {
        let chrome = chrome();
        let mut term = TestTerminal::compact();
        term.render_widget(Navbar::new(&chrome), Rect::new(0, 0, 40, 3));
        assert!(term.line_contains(1, "Mycodo"));
        assert!(!term.buffer_contains("quit"));
    }

    #[test]
    fn test_column_width_saturates() {
        let huge = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(column_width(&Line::raw(huge)), u16::MAX);
        assert_eq!(column_width(&Line::raw("[1] Dashboard")), 13);
    }

    #[test]
    fn test_oversized_brand_renders_without_hints() {
        let chrome = Chrome::new("M".repeat(65_500), default_nav_items());
        let mut term = TestTerminal::new();
        term.render_widget(Navbar::new(&chrome), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "MMMM"));
        assert!(!term.buffer_contains("quit"));
    }

    #[test]
    fn test_no_links_renders_brand_only() {
        let chrome = Chrome::new("Greenhouse", Vec::new());
        let mut term = TestTerminal::new();
        term.render_widget(Navbar::new(&chrome), Rect::new(0, 0, 80, 3));
        assert!(term.line_contains(1, "Greenhouse"));
        assert!(!term.buffer_contains("[1]"));
    }

    #[test]
    fn test_focused_link_uses_cursor_style() {
        let chrome = chrome();
        let mut term = TestTerminal::new();
        term.render_widget(Navbar::new(&chrome).focus(Some(1)), Rect::new(0, 0, 80, 3));

        let x = (0..80)
            .find(|&cx| term.cell_at(cx, 1) == Some("[") && term.cell_at(cx + 1, 1) == Some("2"))
            .unwrap();
        assert_eq!(term.buffer()[(x, 1)].style().bg, styles::focused_selected().bg);
    }

    #[test]
    fn test_links_identical_without_focus() {
        let chrome = chrome();
        let item = &chrome.nav_items()[0];
        let a = NavbarLink::new(1, item).spans();
        let b = NavbarLink::new(1, item).active(false).spans();
        assert_eq!(a, b);
    }

    #[test]
    fn test_active_hook_changes_label_style() {
        let chrome = chrome();
        let item = &chrome.nav_items()[0];
        let plain = NavbarLink::new(1, item).spans();
        let active = NavbarLink::new(1, item).active(true).spans();
        assert_ne!(plain[3].style, active[3].style);
    }
}
