//! mycodo-tui - Terminal UI for the Mycodo dashboard shell
//!
//! Renders the state owned by `mycodo-app` with ratatui: the persistent
//! navbar, the centered content container and the page widgets. Also owns
//! terminal setup, event polling and the main loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
