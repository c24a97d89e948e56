//! Configuration types for the dashboard shell
//!
//! Defines:
//! - `Settings` - Top-level settings (`config.toml`)
//! - `UiSettings` - Chrome and layout options
//! - `RouteSettings` - Optional routes registered at mount

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use mycodo_core::{default_nav_items, NavigationItem, ROOT_PATH};

/// Application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub routes: RouteSettings,

    /// Navigation bar entries, in display order
    #[serde(default = "default_nav_items")]
    pub nav: Vec<NavigationItem>,

    /// File the settings were read from (`None` for built-in defaults)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            routes: RouteSettings::default(),
            nav: default_nav_items(),
            source: None,
        }
    }
}

/// Chrome and layout options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Brand label at the left of the navigation bar
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Path the navigator starts at
    #[serde(default = "default_initial_path")]
    pub initial_path: String,

    /// Widest the content container grows, in columns
    #[serde(default = "default_max_content_width")]
    pub max_content_width: u16,

    /// Terminal event poll timeout, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            initial_path: default_initial_path(),
            max_content_width: default_max_content_width(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_brand() -> String {
    "Mycodo".to_string()
}

fn default_initial_path() -> String {
    ROOT_PATH.to_string()
}

fn default_max_content_width() -> u16 {
    120
}

fn default_tick_rate_ms() -> u64 {
    50
}

/// Optional routes registered at mount
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteSettings {
    /// Register `/settings` → Settings page
    #[serde(default)]
    pub settings_page: bool,

    /// Resolve unmatched paths to a "Not Found" page instead of nothing
    #[serde(default)]
    pub not_found_page: bool,
}
