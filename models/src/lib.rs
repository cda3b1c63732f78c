//! Shared identity and session DTOs for the client/server boundary.
//!
//! This crate owns the shapes exchanged with the external auth provider
//! (Supabase GoTrue). Both `server` and `client` deserialize provider
//! responses into these types. Neither side ever constructs an identity
//! from scratch; the provider is the single source of truth.


use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An authenticated identity as reported by the auth provider.
///
/// Opaque beyond the fields the UI actually reads: everything else lives in
/// the free-form metadata maps and is passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned unique identifier.
    pub id: String,
    /// Primary email, if the provider knows one.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form user metadata (display name, avatar URL, ...).
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    /// Provider-managed metadata (OAuth provider name, ...).
    #[serde(default)]
    pub app_metadata: Map<String, Value>,
}

impl Identity {
    /// Human-readable display name.
    ///
    /// Prefers `full_name` / `name` from user metadata, then the local part
    /// of the email, then a generic fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        for key in ["full_name", "name"] {
            if let Some(name) = self.user_metadata.get(key).and_then(Value::as_str) {
                let trimmed = name.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_owned();
                }
            }
        }
        if let Some(email) = &self.email {
            if let Some(local) = email.split('@').next() {
                if !local.is_empty() {
                    return local.to_owned();
                }
            }
        }
        "User".to_owned()
    }

    /// Up to two uppercase initials for avatar fallbacks.
    #[must_use]
    pub fn initials(&self) -> String {
        let name = self.display_name();
        let mut initials: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            initials.push('U');
        }
        initials.to_uppercase()
    }

    /// Avatar image URL from user metadata, if present.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.user_metadata
            .get("avatar_url")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    }

    /// Name of the OAuth provider that created this identity, if any.
    #[must_use]
    pub fn oauth_provider(&self) -> Option<String> {
        self.app_metadata
            .get("provider")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    }
}

/// A provider session: token pair plus the identity it belongs to.
///
/// The `user` field name matches the provider's wire format so sessions
/// round-trip losslessly through serde.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived bearer token.
    pub access_token: String,
    /// Long-lived token used to mint a new access token.
    pub refresh_token: String,
    /// Access-token lifetime in seconds, when reported.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// The identity this session authenticates.
    #[serde(rename = "user")]
    pub identity: Identity,
}

/// Auth lifecycle events emitted on the provider's change stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

/// One emission on the provider's auth-change stream.
///
/// Listeners branch only on session presence; the event name is carried for
/// logging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

/// Error body shapes the provider returns across its endpoints.
///
/// GoTrue is inconsistent here (`msg`, `message`, `error_description`), so
/// all three are tried before falling back to a generic message.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ProviderErrorBody {
    /// Best-effort human-readable message from a provider error payload.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Parse a provider error response body into a displayable message.
#[must_use]
pub fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(ProviderErrorBody::into_message)
}
