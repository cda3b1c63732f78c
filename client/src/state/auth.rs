//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". Written only by the auth
//! listener (and sign-in/sign-out flows); read by route guards and every
//! identity-aware component. Held in an `RwSignal` provided via context so
//! tests can substitute a fresh instance per case.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use models::Identity;

/// Authentication state tracking the current identity and loading status.
///
/// `authenticated` is derived state kept in sync by the mutators: after any
/// mutator call it equals `identity.is_some()`. `loading` starts `true` and
/// drops to `false` on the first resolution (identity or not); a present
/// identity always implies `loading == false`.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
    pub authenticated: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { identity: None, loading: true, authenticated: false }
    }
}

impl AuthState {
    /// Replace the current identity. Marks the state authenticated and
    /// resolved. Pure assignment, no error conditions.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
        self.authenticated = true;
        self.loading = false;
    }

    /// Drop the current identity and mark the state resolved.
    pub fn clear_identity(&mut self) {
        self.identity = None;
        self.authenticated = false;
        self.loading = false;
    }

    /// Set the loading flag without touching the identity.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
