//! GoTrue session verification and refresh.
//!
//! ARCHITECTURE
//! ============
//! The auth provider owns every credential and session; this module only
//! asks it two questions on behalf of the middleware: "is this access token
//! still good?" and "mint me a fresh session from this refresh token." The
//! [`SessionVerifier`] trait keeps the vendor API swappable and mockable.

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;

use async_trait::async_trait;
use models::{Identity, Session, provider_error_message};

/// Auth provider project coordinates loaded from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub url: String,
    pub anon_key: String,
}

impl ProviderConfig {
    /// Load from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    /// Returns `None` if either is missing or empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok().filter(|v| !v.trim().is_empty())?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())?;
        Some(Self { url: url.trim_end_matches('/').to_owned(), anon_key })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider rejected the token (expired, revoked, malformed).
    #[error("session rejected: {0}")]
    Rejected(String),
    /// The provider could not be reached.
    #[error("provider request failed: {0}")]
    Transport(String),
    /// The provider answered with a body this client does not understand.
    #[error("unexpected provider response: {0}")]
    Malformed(String),
}

/// The two provider operations the route-protection middleware needs.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Validate an access token, returning the identity it belongs to.
    async fn get_user(&self, access_token: &str) -> Result<Identity, ProviderError>;

    /// Exchange a refresh token for a new session.
    async fn refresh(&self, refresh_token: &str) -> Result<Session, ProviderError>;
}

/// Concrete [`SessionVerifier`] speaking the GoTrue REST API.
pub struct GoTrueClient {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl GoTrueClient {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    fn rejection_from(status: reqwest::StatusCode, body: &str) -> ProviderError {
        let message = provider_error_message(body).unwrap_or_else(|| status.to_string());
        ProviderError::Rejected(message)
    }
}

#[async_trait]
impl SessionVerifier for GoTrueClient {
    async fn get_user(&self, access_token: &str) -> Result<Identity, ProviderError> {
        let url = format!("{}/auth/v1/user", self.config.url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::rejection_from(status, &body));
        }
        response
            .json::<Identity>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, ProviderError> {
        let url = format!("{}/auth/v1/token?grant_type=refresh_token", self.config.url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::rejection_from(status, &body));
        }
        response
            .json::<Session>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}
