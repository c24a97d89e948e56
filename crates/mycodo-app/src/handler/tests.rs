//! Tests for the update function and key mapping

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::panel::{PanelContent, PanelSlotId};
use crate::process::process_message;
use crate::state::AppState;
use mycodo_core::Page;

fn test_state() -> AppState {
    let mut settings = Settings::default();
    settings.routes.settings_page = true;
    AppState::with_settings(settings)
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_quits() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_esc_clears_focus_before_quitting() {
    let mut state = test_state();
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));

    state.nav_focus = Some(0);
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::ClearLinkFocus));
}

#[test]
fn test_digit_keys_map_to_links() {
    let state = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::ActivateNavItem(0))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('2')),
        Some(Message::ActivateNavItem(1))
    );
    // Only two links
    assert_eq!(handle_key(&state, InputKey::Char('3')), None);
}

#[test]
fn test_enter_without_focus_is_ignored() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Enter), None);
}

#[test]
fn test_history_keys() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Char('[')), Some(Message::Back));
    assert_eq!(handle_key(&state, InputKey::AltLeft), Some(Message::Back));
    assert_eq!(handle_key(&state, InputKey::Char(']')), Some(Message::Forward));
    assert_eq!(handle_key(&state, InputKey::AltRight), Some(Message::Forward));
    assert_eq!(handle_key(&state, InputKey::Char('r')), Some(Message::Reload));
    assert_eq!(handle_key(&state, InputKey::F(5)), Some(Message::Reload));
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_activate_nav_item_yields_one_navigate() {
    let mut state = test_state();
    let result = update(&mut state, Message::ActivateNavItem(1));
    assert_eq!(
        result.message,
        Some(Message::Navigate {
            path: "/settings".into()
        })
    );
    // Location does not move until the follow-up is processed
    assert_eq!(state.navigator.current(), "/");
}

#[test]
fn test_activate_out_of_range_is_noop() {
    let mut state = test_state();
    let result = update(&mut state, Message::ActivateNavItem(7));
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_navigate_updates_content_once() {
    let mut state = test_state();
    let before = state.content_resolutions();

    update(
        &mut state,
        Message::Navigate {
            path: "/settings".into(),
        },
    );

    assert_eq!(state.content().page, Some(Page::Settings));
    assert_eq!(state.content_resolutions(), before + 1);
}

#[test]
fn test_navigate_to_unknown_path_empties_content() {
    let mut state = test_state();
    update(
        &mut state,
        Message::Navigate {
            path: "/nowhere".into(),
        },
    );
    assert_eq!(state.content().path, "/nowhere");
    assert_eq!(state.content().page, None);
}

#[test]
fn test_back_and_forward_restore_content() {
    let mut state = test_state();
    process_message(&mut state, Message::ActivateNavItem(1));

    update(&mut state, Message::Back);
    assert_eq!(state.content().page, Some(Page::Dashboard));

    update(&mut state, Message::Forward);
    assert_eq!(state.content().page, Some(Page::Settings));
}

#[test]
fn test_back_at_start_does_not_resolve() {
    let mut state = test_state();
    let before = state.content_resolutions();
    update(&mut state, Message::Back);
    assert_eq!(state.content_resolutions(), before);
}

#[test]
fn test_reload_resolves_again() {
    let mut state = test_state();
    let before = state.content_resolutions();
    update(&mut state, Message::Reload);
    assert_eq!(state.content_resolutions(), before + 1);
    assert_eq!(state.navigator.history_len(), 1);
}

#[test]
fn test_chrome_survives_navigation() {
    let mut state = test_state();
    let chrome = std::sync::Arc::clone(state.chrome());

    process_message(&mut state, Message::ActivateNavItem(1));
    process_message(&mut state, Message::ActivateNavItem(0));

    assert!(std::sync::Arc::ptr_eq(&chrome, state.chrome()));
}

// ─────────────────────────────────────────────────────────
// Link focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_focus_cycles_forward() {
    let mut state = test_state();
    update(&mut state, Message::FocusNextLink);
    assert_eq!(state.nav_focus, Some(0));
    update(&mut state, Message::FocusNextLink);
    assert_eq!(state.nav_focus, Some(1));
    update(&mut state, Message::FocusNextLink);
    assert_eq!(state.nav_focus, Some(0));
}

#[test]
fn test_focus_cycles_backward() {
    let mut state = test_state();
    update(&mut state, Message::FocusPrevLink);
    assert_eq!(state.nav_focus, Some(1));
    update(&mut state, Message::FocusPrevLink);
    assert_eq!(state.nav_focus, Some(0));
}

#[test]
fn test_focus_with_no_links_stays_none() {
    let mut settings = Settings::default();
    settings.nav.clear();
    let mut state = AppState::with_settings(settings);
    update(&mut state, Message::FocusNextLink);
    assert_eq!(state.nav_focus, None);
}

#[test]
fn test_activate_focused_link_navigates_and_keeps_focus() {
    let mut state = test_state();
    state.nav_focus = Some(1);

    process_message(&mut state, Message::ActivateFocusedLink);

    assert_eq!(state.navigator.current(), "/settings");
    assert_eq!(state.nav_focus, Some(1));
}

#[test]
fn test_clear_link_focus() {
    let mut state = test_state();
    state.nav_focus = Some(0);
    update(&mut state, Message::ClearLinkFocus);
    assert_eq!(state.nav_focus, None);
}

// ─────────────────────────────────────────────────────────
// Panels and lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_panel_update_sets_slot() {
    let mut state = test_state();
    update(
        &mut state,
        Message::PanelUpdate {
            slot: PanelSlotId::Controls,
            content: PanelContent::Loading,
        },
    );
    assert_eq!(
        state.panels.get(PanelSlotId::Controls).content,
        PanelContent::Loading
    );
    // Panel traffic never touches navigation
    assert_eq!(state.content_resolutions(), 1);
}

#[test]
fn test_quit_message() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_tick_is_noop() {
    let mut state = test_state();
    assert_eq!(update(&mut state, Message::Tick), UpdateResult::none());
}
