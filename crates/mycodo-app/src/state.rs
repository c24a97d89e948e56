//! Application state (Model in TEA pattern)

use std::sync::Arc;

use tokio::sync::watch;

use mycodo_core::prelude::*;
use mycodo_core::{Page, SETTINGS_PATH};

use crate::chrome::Chrome;
use crate::config::Settings;
use crate::navigation::{Location, Navigator};
use crate::panel::DashboardPanels;
use crate::router::RouteTable;

/// What the content region currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegion {
    /// Path the content was resolved for
    pub path: String,
    /// `None` renders an empty region (unmatched path)
    pub page: Option<Page>,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded settings
    pub settings: Settings,

    /// Route table consulted on every navigation
    pub routes: RouteTable,

    /// The single navigation state
    pub navigator: Navigator,

    /// Content of the three dashboard slots
    pub panels: DashboardPanels,

    /// Keyboard cursor over the navigation links
    pub nav_focus: Option<usize>,

    chrome: Arc<Chrome>,
    location_rx: watch::Receiver<Location>,
    content: ContentRegion,
    content_resolutions: u64,
    quitting: bool,
}

impl AppState {
    /// Mount the shell with built-in defaults
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Mount the shell: build the chrome, the route table and the navigator,
    /// then resolve the initial content.
    pub fn with_settings(settings: Settings) -> Self {
        let chrome = Arc::new(Chrome::new(
            settings.ui.brand.clone(),
            settings.nav.clone(),
        ));

        let mut routes = RouteTable::with_defaults();
        if settings.routes.settings_page {
            routes.register(SETTINGS_PATH, Page::Settings);
        }
        if settings.routes.not_found_page {
            routes = routes.with_fallback(Page::NotFound);
        }

        let navigator = Navigator::new(settings.ui.initial_path.clone());
        let location_rx = navigator.subscribe();

        let initial_path = navigator.current().to_string();
        let content = ContentRegion {
            page: routes.resolve(&initial_path),
            path: initial_path,
        };
        info!(
            "Mounted at {} ({} routes, {} nav links)",
            content.path,
            routes.len(),
            chrome.link_count()
        );

        Self {
            settings,
            routes,
            navigator,
            panels: DashboardPanels::new(),
            nav_focus: None,
            chrome,
            location_rx,
            content,
            content_resolutions: 1,
            quitting: false,
        }
    }

    /// The persistent chrome; the same `Arc` for the lifetime of the state
    pub fn chrome(&self) -> &Arc<Chrome> {
        &self.chrome
    }

    /// What the content region shows now
    pub fn content(&self) -> &ContentRegion {
        &self.content
    }

    /// How many times content has been resolved, including the mount
    pub fn content_resolutions(&self) -> u64 {
        self.content_resolutions
    }

    /// Re-derive the content region if the navigator published a new
    /// location since the last call. Returns whether the content changed.
    pub fn sync_content(&mut self) -> bool {
        if !self.location_rx.has_changed().unwrap_or(false) {
            return false;
        }

        let path = self.location_rx.borrow_and_update().path.clone();
        self.resolve_content(path);
        true
    }

    /// Add a route at runtime.
    ///
    /// When it covers the current path, the content region is re-resolved so
    /// the new page shows without another navigation.
    pub fn register_route(&mut self, path: impl Into<String>, page: Page) {
        let path = path.into();
        let affects_current = path == self.content.path;
        self.routes.register(path, page);
        if affects_current {
            self.resolve_content(self.content.path.clone());
        }
    }

    fn resolve_content(&mut self, path: String) {
        let page = self.routes.resolve(&path);
        match page {
            Some(page) => debug!("Content for {} -> {}", path, page),
            None => debug!("Content for {} -> empty", path),
        }
        self.content = ContentRegion { path, page };
        self.content_resolutions += 1;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
