//! Configuration file parsing for the dashboard shell
//!
//! Settings live in `<config dir>/mycodo-dash/config.toml`, or in the file
//! passed with `--config`.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, validate_settings,
    MAX_NAV_ITEMS,
};
pub use types::*;
