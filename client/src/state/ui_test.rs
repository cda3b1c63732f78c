use super::*;

#[test]
fn default_is_light_with_closed_nav() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.mobile_nav_open);
}

#[test]
fn with_dark_mode_preserves_closed_nav() {
    let state = UiState::with_dark_mode(true);
    assert!(state.dark_mode);
    assert!(!state.mobile_nav_open);
}
