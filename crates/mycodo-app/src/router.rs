//! Route table: path → page resolution
//!
//! Resolution is an exact string lookup. There is no pattern or parameter
//! matching, and a miss is not an error: the content region simply renders
//! nothing unless a fallback page has been configured.

use mycodo_core::prelude::*;
use mycodo_core::{Page, ROOT_PATH};

/// Association between a path and the page rendered for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub page: Page,
}

impl Route {
    pub fn new(path: impl Into<String>, page: Page) -> Self {
        Self {
            path: path.into(),
            page,
        }
    }
}

/// Ordered set of routes with unique paths
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Option<Page>,
}

impl RouteTable {
    /// Empty table: every path resolves to nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock table: `"/"` → Dashboard
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register(ROOT_PATH, Page::Dashboard);
        table
    }

    /// Page used for paths with no exact match
    pub fn with_fallback(mut self, page: Page) -> Self {
        self.fallback = Some(page);
        self
    }

    /// Append a route.
    ///
    /// Registering a path that already exists replaces its page in place, so
    /// at most one route ever matches a path.
    pub fn register(&mut self, path: impl Into<String>, page: Page) {
        let path = path.into();
        if let Some(existing) = self.routes.iter_mut().find(|r| r.path == path) {
            debug!("Route {} re-registered: {} -> {}", path, existing.page, page);
            existing.page = page;
        } else {
            debug!("Route {} registered -> {}", path, page);
            self.routes.push(Route::new(path, page));
        }
    }

    /// Page for `path`, or the fallback, or `None`
    pub fn resolve(&self, path: &str) -> Option<Page> {
        match self.routes.iter().find(|r| r.path == path) {
            Some(route) => Some(route.page),
            None => {
                debug!("No route for {:?}", path);
                self.fallback
            }
        }
    }

    /// Whether `path` has its own route (the fallback does not count)
    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|r| r.path == path)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn fallback(&self) -> Option<Page> {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
