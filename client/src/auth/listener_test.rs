use std::sync::atomic::AtomicBool;

use models::{AuthEvent, Session};

use super::*;

fn identity(id: &str) -> Identity {
    Identity { id: id.to_owned(), ..Identity::default() }
}

fn session_for(id: &str) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in: Some(3600),
        identity: identity(id),
    }
}

fn change(event: AuthEvent, session: Option<Session>) -> AuthChange {
    AuthChange { event, session }
}

// =============================================================================
// Initial fetch resolution
// =============================================================================

#[test]
fn initial_fetch_with_identity_populates_store() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();

    assert!(deliver_initial_fetch(&alive, &mut state, Some(identity("u1"))));
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u1"));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn initial_fetch_with_no_identity_clears_loading() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();

    assert!(deliver_initial_fetch(&alive, &mut state, None));
    assert!(state.identity.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================================
// Unmount guard: a resolution arriving after cleanup must not touch the store
// =============================================================================

#[test]
fn late_initial_fetch_after_unmount_is_discarded() {
    let alive = AtomicBool::new(false);
    let mut state = AuthState::default();
    let before = state.clone();

    assert!(!deliver_initial_fetch(&alive, &mut state, Some(identity("u1"))));
    assert_eq!(state, before, "store mutated after unmount");
}

#[test]
fn late_auth_event_after_unmount_is_discarded() {
    let alive = AtomicBool::new(false);
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));
    let before = state.clone();

    assert!(!deliver_auth_change(&alive, &mut state, &change(AuthEvent::SignedOut, None)));
    assert_eq!(state, before, "store mutated after unmount");
}

// =============================================================================
// Event mirroring
// =============================================================================

#[test]
fn event_with_session_sets_identity() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();

    assert!(deliver_auth_change(
        &alive,
        &mut state,
        &change(AuthEvent::SignedIn, Some(session_for("u2")))
    ));
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u2"));
    assert!(state.is_authenticated());
}

#[test]
fn event_without_session_is_unauthenticated_regardless_of_prior_state() {
    let alive = AtomicBool::new(true);

    let mut fresh = AuthState::default();
    assert!(deliver_auth_change(&alive, &mut fresh, &change(AuthEvent::SignedOut, None)));
    assert!(!fresh.is_authenticated());

    let mut signed_in = AuthState::default();
    signed_in.set_identity(identity("u1"));
    assert!(deliver_auth_change(&alive, &mut signed_in, &change(AuthEvent::SignedOut, None)));
    assert!(!signed_in.is_authenticated());
    assert!(signed_in.identity.is_none());
}

#[test]
fn token_refresh_event_replaces_identity() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));

    assert!(deliver_auth_change(
        &alive,
        &mut state,
        &change(AuthEvent::TokenRefreshed, Some(session_for("u1")))
    ));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================================
// Fetch/event race: last write wins
// =============================================================================

#[test]
fn late_initial_fetch_overwrites_earlier_event() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();

    // An event lands before the initial fetch resolves...
    deliver_auth_change(&alive, &mut state, &change(AuthEvent::SignedIn, Some(session_for("u2"))));
    // ...then the fetch resolves with the provider's answer.
    deliver_initial_fetch(&alive, &mut state, Some(identity("u1")));

    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u1"));
}
