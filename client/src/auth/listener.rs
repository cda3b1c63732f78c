//! Auth synchronization listener.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges the provider's event-driven session lifecycle into the
//! synchronous session store. Mounted exactly once at the application root;
//! a duplicate mount would double-subscribe.
//!
//! CONCURRENCY
//! ===========
//! The initial fetch and the event subscription race; both funnel through
//! the store's last-assignment-wins mutators, so whichever resolves later
//! determines the state. Pending work is never aborted: an alive flag is
//! flipped on cleanup and late resolutions are silently discarded.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use models::{AuthChange, Identity};

use crate::state::auth::AuthState;

/// Mirror the provider's session lifecycle into the session store.
///
/// Renders nothing. On mount: marks the store loading, performs the one-shot
/// identity fetch, and subscribes to the provider's auth-change stream. On
/// cleanup: unsubscribes and discards any still-pending resolution.
#[component]
pub fn AuthListener() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;

        use crate::auth::provider::ProviderHandle;

        let auth = expect_context::<RwSignal<AuthState>>();
        let provider = expect_context::<ProviderHandle>();
        let alive = Arc::new(AtomicBool::new(true));

        // Initial one-shot identity fetch.
        auth.update(|state| state.set_loading(true));
        let fetch_alive = alive.clone();
        let fetch = provider.get_user();
        leptos::task::spawn_local(async move {
            let identity = fetch.await;
            auth.try_update(|state| deliver_initial_fetch(&fetch_alive, state, identity));
        });

        // Mirror every provider event into the store.
        let event_alive = alive.clone();
        let subscription = provider.subscribe(Box::new(move |change| {
            log::debug!("auth event: {:?}", change.event);
            auth.try_update(|state| deliver_auth_change(&event_alive, state, change));
        }));

        let cleanup_provider = provider.clone();
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            cleanup_provider.unsubscribe(subscription);
        });
    }
}

/// Apply the initial fetch result, unless the listener already unmounted.
///
/// Returns whether the store was mutated.
pub fn deliver_initial_fetch(alive: &AtomicBool, state: &mut AuthState, identity: Option<Identity>) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    match identity {
        Some(identity) => state.set_identity(identity),
        // Clears the loading flag even when nobody is signed in.
        None => state.clear_identity(),
    }
    true
}

/// Apply one auth-change emission, unless the listener already unmounted.
///
/// Returns whether the store was mutated.
pub fn deliver_auth_change(alive: &AtomicBool, state: &mut AuthState, change: &AuthChange) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    match &change.session {
        Some(session) => state.set_identity(session.identity.clone()),
        None => state.clear_identity(),
    }
    true
}
