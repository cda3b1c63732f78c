use super::*;

fn identity(id: &str) -> Identity {
    Identity { id: id.to_owned(), ..Identity::default() }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.identity.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Mutator semantics
// =============================================================

#[test]
fn set_identity_marks_authenticated_and_resolved() {
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u1"));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn clear_identity_marks_unauthenticated_and_resolved() {
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));
    state.clear_identity();
    assert!(state.identity.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn set_loading_does_not_touch_identity() {
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));
    state.set_loading(true);
    assert!(state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u1"));
}

#[test]
fn set_identity_replaces_previous_identity() {
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));
    state.set_identity(identity("u2"));
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u2"));
}

// =============================================================
// Invariant: authenticated == identity.is_some() after any
// sequence of mutator calls.
// =============================================================

#[test]
fn authenticated_tracks_identity_for_all_mutator_sequences() {
    let ops: [&dyn Fn(&mut AuthState); 4] = [
        &|s| s.set_identity(identity("a")),
        &|s| s.clear_identity(),
        &|s| s.set_loading(true),
        &|s| s.set_loading(false),
    ];

    // Exhaustive length-3 sequences over the mutator set.
    for first in &ops {
        for second in &ops {
            for third in &ops {
                let mut state = AuthState::default();
                first(&mut state);
                second(&mut state);
                third(&mut state);
                assert_eq!(
                    state.is_authenticated(),
                    state.identity.is_some(),
                    "authenticated flag diverged from identity presence"
                );
            }
        }
    }
}

#[test]
fn present_identity_implies_not_loading() {
    let mut state = AuthState::default();
    state.set_identity(identity("u1"));
    assert!(!state.loading);

    state.clear_identity();
    state.set_identity(identity("u2"));
    assert!(!state.loading);
}
