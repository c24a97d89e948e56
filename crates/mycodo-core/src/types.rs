//! Navigation domain types shared by the app and TUI layers

use serde::{Deserialize, Serialize};

/// Path of the default route
pub const ROOT_PATH: &str = "/";

/// Path the stock navigation bar links to for settings
pub const SETTINGS_PATH: &str = "/settings";

/// A labeled destination surfaced in the chrome.
///
/// The path is expected to match a registered route, but nothing enforces
/// it: a link to an unregistered path leads to an empty content region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationItem {
    /// Text shown in the navigation bar
    pub label: String,
    /// Path passed to the navigator when the link is activated
    pub path: String,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// The stock navigation items, in display order.
pub fn default_nav_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("Dashboard", ROOT_PATH),
        NavigationItem::new("Settings", SETTINGS_PATH),
    ]
}

/// Page a route resolves to.
///
/// The TUI layer maps each variant to a widget; adding a page means adding a
/// variant here and a render arm there, the router itself is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Three-panel overview (Sensor Readings, Controls, System Status)
    Dashboard,
    /// Shell configuration summary
    Settings,
    /// Catch-all page, only used when the route table has a fallback
    NotFound,
}

impl Page {
    /// Heading rendered at the top of the page
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Settings => "Settings",
            Page::NotFound => "Not Found",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
