//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. It holds the session verifier behind a trait object so tests
//! substitute a scripted double, plus the cookie-security flag computed at
//! startup.

use std::sync::Arc;

use crate::provider::SessionVerifier;

/// Shared application state. Clone is required by Axum; inner fields are
/// Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn SessionVerifier>,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: Arc<dyn SessionVerifier>, cookie_secure: bool) -> Self {
        Self { verifier, cookie_secure }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use models::{Identity, Session};

    use super::*;
    use crate::provider::ProviderError;

    /// Scripted [`SessionVerifier`]: a fixed set of valid access tokens and
    /// an optional refresh result, with call counters.
    pub struct MockVerifier {
        pub valid_tokens: Vec<String>,
        pub refresh_session: Option<Session>,
        pub get_user_calls: AtomicUsize,
        pub refresh_calls: AtomicUsize,
    }

    impl MockVerifier {
        #[must_use]
        pub fn new(valid_tokens: &[&str], refresh_session: Option<Session>) -> Self {
            Self {
                valid_tokens: valid_tokens.iter().map(|t| (*t).to_owned()).collect(),
                refresh_session,
                get_user_calls: AtomicUsize::new(0),
                refresh_calls: AtomicUsize::new(0),
            }
        }

        /// Session fixture for the given user id.
        #[must_use]
        pub fn session_for(id: &str) -> Session {
            Session {
                access_token: "fresh-at".to_owned(),
                refresh_token: "fresh-rt".to_owned(),
                expires_in: Some(3600),
                identity: Identity { id: id.to_owned(), ..Identity::default() },
            }
        }
    }

    #[async_trait]
    impl SessionVerifier for MockVerifier {
        async fn get_user(&self, access_token: &str) -> Result<Identity, ProviderError> {
            self.get_user_calls.fetch_add(1, Ordering::Relaxed);
            if self.valid_tokens.iter().any(|t| t == access_token) {
                Ok(Identity { id: "u1".to_owned(), ..Identity::default() })
            } else {
                Err(ProviderError::Rejected("invalid token".to_owned()))
            }
        }

        async fn refresh(&self, _refresh_token: &str) -> Result<Session, ProviderError> {
            self.refresh_calls.fetch_add(1, Ordering::Relaxed);
            self.refresh_session
                .clone()
                .ok_or_else(|| ProviderError::Rejected("refresh rejected".to_owned()))
        }
    }
}
