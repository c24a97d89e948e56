//! Custom widget components

mod dashboard;
mod navbar;
mod not_found;
mod panel;
mod settings_page;

pub use dashboard::{grid_rows, span_for, Breakpoint, Dashboard, GridSpan};
pub use navbar::{Navbar, NavbarLink};
pub use not_found::NotFound;
pub use panel::Panel;
pub use settings_page::SettingsPage;
