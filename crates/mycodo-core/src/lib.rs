//! # mycodo-core - Core Domain Types
//!
//! Foundation crate for the Mycodo dashboard shell. Provides navigation
//! domain types, gauge color stops, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Navigation Types (`types`)
//! - [`NavigationItem`] - A labeled link (label, path) shown in the chrome
//! - [`Page`] - Page a route resolves to (Dashboard, Settings, NotFound)
//! - [`default_nav_items()`] - The stock navigation bar entries
//!
//! ### Gauges (`gauge`)
//! - [`GaugeSpec`] - Value, range and colored bands for a gauge panel body
//! - [`ColorStop`] - One colored band
//! - [`parse_range_colors()`], [`format_range_colors()`], [`reformat_stops()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mycodo_core::prelude::*;
//! ```

pub mod error;
pub mod gauge;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use gauge::{
    default_stops, format_range_colors, is_hex_color, parse_range_colors, reformat_stops,
    ColorStop, GaugeSpec, DEFAULT_RANGE_COLORS,
};
pub use types::{default_nav_items, NavigationItem, Page, ROOT_PATH, SETTINGS_PATH};
