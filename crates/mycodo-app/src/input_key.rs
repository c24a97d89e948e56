//! Abstract input key event, independent of terminal library.
//!
//! The app crate decides what a key means (navigate, go back, quit) without
//! depending on crossterm. The TUI layer converts terminal events into
//! `InputKey` at its boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // History traversal
    /// Alt+Left, browser-style "back"
    AltLeft,
    /// Alt+Right, browser-style "forward"
    AltRight,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,

    // Function keys
    /// Function key (F1-F12)
    F(u8),
}
