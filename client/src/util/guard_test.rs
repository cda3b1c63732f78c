use super::*;
use models::Identity;

#[test]
fn loading_state_does_not_redirect() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!needs_sign_in(&state));
}

#[test]
fn resolved_without_identity_redirects() {
    let mut state = AuthState::default();
    state.clear_identity();
    assert!(needs_sign_in(&state));
}

#[test]
fn resolved_with_identity_does_not_redirect() {
    let mut state = AuthState::default();
    state.set_identity(Identity { id: "u1".to_owned(), ..Identity::default() });
    assert!(!needs_sign_in(&state));
}
