//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::panel::{PanelContent, PanelSlotId};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (key, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Push `path` onto the history and show it
    Navigate { path: String },
    /// Previous history entry
    Back,
    /// Next history entry
    Forward,
    /// Re-resolve the current path
    Reload,

    // ─────────────────────────────────────────────────────────
    // Navbar Messages
    // ─────────────────────────────────────────────────────────
    /// Activate the nth navigation link (0-based)
    ActivateNavItem(usize),
    /// Move the keyboard cursor to the next link
    FocusNextLink,
    /// Move the keyboard cursor to the previous link
    FocusPrevLink,
    /// Activate the link under the keyboard cursor
    ActivateFocusedLink,
    /// Drop the keyboard cursor
    ClearLinkFocus,

    // ─────────────────────────────────────────────────────────
    // Panel Messages
    // ─────────────────────────────────────────────────────────
    /// New content for a dashboard slot from an external collaborator
    PanelUpdate {
        slot: PanelSlotId,
        content: PanelContent,
    },
}
