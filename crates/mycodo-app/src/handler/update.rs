//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use mycodo_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
///
/// Navigation messages only move the navigator; the content region follows
/// through the navigator's subscription, drained once at the end.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = match message {
        Message::Quit => {
            info!("Quit requested");
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => {
            state.navigator.navigate(path);
            UpdateResult::none()
        }

        Message::Back => {
            state.navigator.back();
            UpdateResult::none()
        }

        Message::Forward => {
            state.navigator.forward();
            UpdateResult::none()
        }

        Message::Reload => {
            state.navigator.reload();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navbar Messages
        // ─────────────────────────────────────────────────────────
        Message::ActivateNavItem(index) => activate_link(state, index),

        Message::FocusNextLink => {
            let count = state.chrome().link_count();
            if count > 0 {
                state.nav_focus = Some(match state.nav_focus {
                    Some(i) => (i + 1) % count,
                    None => 0,
                });
            }
            UpdateResult::none()
        }

        Message::FocusPrevLink => {
            let count = state.chrome().link_count();
            if count > 0 {
                state.nav_focus = Some(match state.nav_focus {
                    Some(0) | None => count - 1,
                    Some(i) => i - 1,
                });
            }
            UpdateResult::none()
        }

        Message::ActivateFocusedLink => match state.nav_focus {
            Some(index) => activate_link(state, index),
            None => UpdateResult::none(),
        },

        Message::ClearLinkFocus => {
            state.nav_focus = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::PanelUpdate { slot, content } => {
            state.panels.set(slot, content);
            UpdateResult::none()
        }
    };

    state.sync_content();
    result
}

/// A link activation becomes exactly one navigation to the link's path
fn activate_link(state: &AppState, index: usize) -> UpdateResult {
    match state.chrome().nav_item(index) {
        Some(item) => {
            debug!("Link {} ({}) activated", index, item.label);
            UpdateResult::message(Message::Navigate {
                path: item.path.clone(),
            })
        }
        None => {
            warn!("No navigation link at index {}", index);
            UpdateResult::none()
        }
    }
}
