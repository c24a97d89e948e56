//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use mycodo_core::prelude::*;

const CONFIG_DIR_NAME: &str = "mycodo-dash";
const CONFIG_FILENAME: &str = "config.toml";

/// Navigation items beyond this cannot be reached with a digit key
pub const MAX_NAV_ITEMS: usize = 9;

/// Narrowest usable content container
const MIN_CONTENT_WIDTH: u16 = 20;

const DEFAULT_CONFIG: &str = r#"# Mycodo dashboard configuration

[ui]
brand = "Mycodo"
initial_path = "/"
max_content_width = 120   # columns
tick_rate_ms = 50

[routes]
settings_page = false     # register /settings
not_found_page = false    # show "Not Found" for unknown paths

[[nav]]
label = "Dashboard"
path = "/"

[[nav]]
label = "Settings"
path = "/settings"
"#;

/// Default location: `<config dir>/mycodo-dash/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILENAME)
}

/// Load settings, falling back to defaults on any problem.
///
/// A missing file is normal (first run). A file that cannot be read, parsed
/// or validated is logged and ignored.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_from(config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring config {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from a file that must exist and be valid
pub fn load_settings_from(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)?;
    let mut settings: Settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", config_path.display(), e)))?;
    validate_settings(&settings)?;

    settings.source = Some(config_path.to_path_buf());
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Check values serde cannot express
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if !settings.ui.initial_path.starts_with('/') {
        return Err(Error::config_invalid(format!(
            "ui.initial_path must start with '/', got {:?}",
            settings.ui.initial_path
        )));
    }

    if settings.ui.max_content_width < MIN_CONTENT_WIDTH {
        return Err(Error::config_invalid(format!(
            "ui.max_content_width must be at least {}, got {}",
            MIN_CONTENT_WIDTH, settings.ui.max_content_width
        )));
    }

    if settings.ui.tick_rate_ms == 0 {
        return Err(Error::config_invalid("ui.tick_rate_ms must be positive"));
    }

    if settings.nav.len() > MAX_NAV_ITEMS {
        return Err(Error::config_invalid(format!(
            "at most {} nav entries are supported, got {}",
            MAX_NAV_ITEMS,
            settings.nav.len()
        )));
    }

    for item in &settings.nav {
        if item.label.trim().is_empty() {
            return Err(Error::config_invalid(format!(
                "nav entry for {:?} has an empty label",
                item.path
            )));
        }
        if !item.path.starts_with('/') {
            return Err(Error::config_invalid(format!(
                "nav path must start with '/', got {:?}",
                item.path
            )));
        }
    }

    Ok(())
}

/// Write the commented default config if none exists.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
