//! Narrow interface over the external auth provider.
//!
//! DESIGN
//! ======
//! Exactly the methods this application consumes, nothing more, so the
//! concrete vendor client stays swappable and mockable without touching
//! call sites. Async methods return local boxed futures: all provider work
//! runs on the browser main thread via `spawn_local`.
//!
//! ERROR HANDLING
//! ==============
//! Fallible methods resolve to `Result<_, String>` where the error string is
//! already user-displayable: provider-reported messages verbatim, transport
//! failures collapsed to [`UNEXPECTED_ERROR`].

use std::ops::Deref;
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use models::{AuthChange, Identity, Session};

/// Generic message shown when a call fails without a provider-reported cause.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Callback invoked for every emission on the provider's auth-change stream.
pub type AuthCallback = Box<dyn Fn(&AuthChange) + Send + Sync>;

/// Handle returned by [`AuthProvider::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// OAuth providers offered on the auth screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }

    /// Extra authorize-URL query parameters required by the provider.
    /// Google needs offline access + consent to issue a refresh token.
    #[must_use]
    pub fn extra_query(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Google => &[("access_type", "offline"), ("prompt", "consent")],
            Self::Github => &[],
        }
    }
}

/// The auth-provider contract consumed by this application.
pub trait AuthProvider: Send + Sync {
    /// One-shot query for the current identity. Resolves to `None` when no
    /// valid session exists or the provider cannot be reached, so callers never
    /// see a transport error from this path.
    fn get_user(&self) -> LocalBoxFuture<'static, Option<Identity>>;

    /// Resolve the current session, consuming OAuth redirect tokens from the
    /// URL when present.
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Session>, String>>;

    /// Subscribe to the auth-change event stream.
    fn subscribe(&self, callback: AuthCallback) -> SubscriptionId;

    /// Remove a subscription previously returned by [`Self::subscribe`].
    fn unsubscribe(&self, id: SubscriptionId);

    fn sign_in_with_password(&self, email: String, password: String) -> LocalBoxFuture<'static, Result<Session, String>>;

    /// Create an account. Resolves to `Ok(None)` when the provider requires
    /// email confirmation before a session is issued.
    fn sign_up(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> LocalBoxFuture<'static, Result<Option<Session>, String>>;

    /// Kick off an OAuth redirect. Navigates the window away on success.
    fn sign_in_with_oauth(&self, provider: OAuthProvider, redirect_to: String) -> Result<(), String>;

    fn reset_password_for_email(&self, email: String, redirect_to: String)
    -> LocalBoxFuture<'static, Result<(), String>>;

    fn update_user_password(&self, password: String) -> LocalBoxFuture<'static, Result<(), String>>;

    /// Adopt a token pair (from a password-reset link) as the active session.
    fn set_session(&self, access_token: String, refresh_token: String)
    -> LocalBoxFuture<'static, Result<Session, String>>;

    fn sign_out(&self) -> LocalBoxFuture<'static, ()>;
}

/// Cloneable context handle wrapping the active provider implementation.
#[derive(Clone)]
pub struct ProviderHandle(pub Arc<dyn AuthProvider>);

impl Deref for ProviderHandle {
    type Target = dyn AuthProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
