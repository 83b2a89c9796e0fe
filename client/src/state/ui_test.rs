use super::*;

// =============================================================
// RenderMode
// =============================================================

#[test]
fn embedded_context_selects_widget() {
    assert_eq!(RenderMode::from_embedded(true), RenderMode::Widget);
    assert!(RenderMode::Widget.is_embedded());
}

#[test]
fn top_level_context_selects_portal() {
    assert_eq!(RenderMode::from_embedded(false), RenderMode::Portal);
    assert!(!RenderMode::Portal.is_embedded());
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_unresolved_and_closed() {
    let state = UiState::default();
    assert_eq!(state.mode, None);
    assert!(!state.popup_open);
}

#[test]
fn toggle_popup_flips_visibility() {
    let mut state = UiState::default();
    state.toggle_popup();
    assert!(state.popup_open);
    state.toggle_popup();
    assert!(!state.popup_open);
}

#[test]
fn containment_classifies_page_clicks() {
    assert_eq!(PopupClick::from_containment(true), PopupClick::Inside);
    assert_eq!(PopupClick::from_containment(false), PopupClick::Outside);
}

#[test]
fn outside_click_closes_open_popup() {
    let mut state = UiState::default();
    state.handle_click(PopupClick::Launcher);
    assert!(state.popup_open);
    state.handle_click(PopupClick::Outside);
    assert!(!state.popup_open);
}

#[test]
fn inside_click_keeps_popup_open() {
    let mut state = UiState::default();
    state.handle_click(PopupClick::Launcher);
    state.handle_click(PopupClick::Inside);
    assert!(state.popup_open);
}

#[test]
fn launcher_click_toggles_and_outside_click_on_closed_popup_is_a_no_op() {
    let mut state = UiState::default();
    state.handle_click(PopupClick::Outside);
    assert!(!state.popup_open);
    state.handle_click(PopupClick::Launcher);
    state.handle_click(PopupClick::Launcher);
    assert!(!state.popup_open);
}

#[test]
fn close_popup_is_idempotent() {
    let mut state = UiState { popup_open: true, ..Default::default() };
    state.close_popup();
    state.close_popup();
    assert!(!state.popup_open);
}
