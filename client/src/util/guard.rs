//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route applies identical unauthenticated redirect
//! behavior; screens treat "loading" as a valid third state and redirect
//! only once auth has resolved.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a resolved auth state requires a redirect to the sign-in screen.
#[must_use]
pub fn needs_sign_in(state: &AuthState) -> bool {
    !state.loading && state.identity.is_none()
}

/// Redirect to `/auth` whenever auth has resolved with no identity present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if needs_sign_in(&auth.get()) {
            navigate("/auth", NavigateOptions::default());
        }
    });
}
