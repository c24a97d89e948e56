//! # mycodo-app - Application State and Navigation
//!
//! Engine crate for the Mycodo dashboard shell. Owns the TEA model:
//! state, messages and the `update` function, plus the route table, the
//! navigator and the panel feed. Has no terminal dependencies; rendering
//! lives in `mycodo-tui`.
//!
//! ## Public API
//!
//! - [`AppState`] - Complete application state (Model)
//! - [`Message`] - All application events
//! - [`handler::update()`] - State transitions
//! - [`process::process_message()`] - `update` plus follow-up messages
//! - [`RouteTable`] - Path to page resolution with optional fallback
//! - [`Navigator`] - History stack that publishes [`Location`] changes
//! - [`PanelFeed`] - Handle collaborators use to fill dashboard slots
//! - [`config`] - Settings loading from `config.toml`

pub mod chrome;
pub mod config;
pub mod demo;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod panel;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;

pub use chrome::Chrome;
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{Location, Navigator};
pub use panel::{DashboardPanels, PanelBody, PanelContent, PanelFeed, PanelSlot, PanelSlotId, Reading};
pub use router::{Route, RouteTable};
pub use state::{AppState, ContentRegion};
