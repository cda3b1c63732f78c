//! GoTrue REST client implementing [`AuthProvider`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! provider project URL injected by the server shell, with the session
//! persisted to `localStorage` plus cookies so the server middleware can
//! refresh it. Server-side (SSR): stubs, since auth state only exists in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider-reported error bodies surface verbatim; transport failures
//! collapse to [`UNEXPECTED_ERROR`]. `get_user` maps every failure to
//! `None` so the auth listener's null branch always runs and the loading
//! flag cannot stick.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::LocalBoxFuture;
#[cfg(feature = "hydrate")]
use models::AuthEvent;
use models::{AuthChange, Identity, Session};

#[cfg(feature = "hydrate")]
use super::provider::UNEXPECTED_ERROR;
use super::provider::{AuthCallback, AuthProvider, OAuthProvider, ProviderHandle, SubscriptionId};

/// `localStorage` key holding the serialized session.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ragsaas_session";

/// Cookie names the server middleware reads for session refresh.
pub const ACCESS_COOKIE: &str = "sb-access-token";
pub const REFRESH_COOKIE: &str = "sb-refresh-token";

/// Window globals injected by the SSR shell.
pub const URL_GLOBAL: &str = "__SUPABASE_URL__";
pub const ANON_KEY_GLOBAL: &str = "__SUPABASE_ANON_KEY__";

/// Provider project coordinates.
#[derive(Clone, Debug)]
pub struct Settings {
    pub url: String,
    pub anon_key: String,
}

impl Settings {
    /// Read the injected globals. `None` outside a configured browser page.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let read = |key: &str| {
                js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(key))
                    .ok()
                    .and_then(|v| v.as_string())
                    .filter(|v| !v.is_empty())
            };
            Some(Self { url: read(URL_GLOBAL)?, anon_key: read(ANON_KEY_GLOBAL)? })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Concrete [`AuthProvider`] backed by the GoTrue REST API.
pub struct GoTrueProvider {
    settings: Option<Settings>,
    session: Arc<Mutex<Option<Session>>>,
    subscribers: Arc<Mutex<Vec<(SubscriptionId, AuthCallback)>>>,
    next_subscription: AtomicU64,
}

impl GoTrueProvider {
    /// Construct from the browser environment (SSR gets a stub provider).
    #[must_use]
    pub fn detect() -> Self {
        Self {
            settings: Settings::from_window(),
            session: Arc::new(Mutex::new(None)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Context handle for the detected provider.
    #[must_use]
    pub fn handle() -> ProviderHandle {
        ProviderHandle(Arc::new(Self::detect()))
    }

    #[cfg(feature = "hydrate")]
    fn emit(subscribers: &Mutex<Vec<(SubscriptionId, AuthCallback)>>, change: &AuthChange) {
        let subscribers = subscribers.lock().expect("subscriber list poisoned");
        for (_, callback) in subscribers.iter() {
            callback(change);
        }
    }

    /// Current session: in-memory first, then the persisted copy.
    #[cfg(feature = "hydrate")]
    fn load_session(&self) -> Option<Session> {
        if let Some(session) = self.session.lock().expect("session poisoned").clone() {
            return Some(session);
        }
        let stored = read_stored_session();
        if let Some(session) = &stored {
            *self.session.lock().expect("session poisoned") = Some(session.clone());
        }
        stored
    }

    #[cfg(feature = "hydrate")]
    fn forget(&self) {
        *self.session.lock().expect("session poisoned") = None;
        clear_persisted_session();
    }
}

impl AuthProvider for GoTrueProvider {
    fn get_user(&self) -> LocalBoxFuture<'static, Option<Identity>> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            let current = self.load_session();
            let session = self.session.clone();
            let subscribers = self.subscribers.clone();
            Box::pin(async move {
                let settings = settings?;
                let existing = current?;
                match fetch_identity(&settings, &existing.access_token).await {
                    Ok(identity) => {
                        let mut refreshed = existing;
                        refreshed.identity = identity.clone();
                        *session.lock().expect("session poisoned") = Some(refreshed.clone());
                        persist_session(&refreshed);
                        Some(identity)
                    }
                    Err(_) => {
                        // Stale access token: one refresh attempt, then give up.
                        match refresh_grant(&settings, &existing.refresh_token).await {
                            Ok(renewed) => {
                                let identity = renewed.identity.clone();
                                *session.lock().expect("session poisoned") = Some(renewed.clone());
                                persist_session(&renewed);
                                Self::emit(
                                    &subscribers,
                                    &AuthChange { event: AuthEvent::TokenRefreshed, session: Some(renewed) },
                                );
                                Some(identity)
                            }
                            Err(_) => {
                                *session.lock().expect("session poisoned") = None;
                                clear_persisted_session();
                                None
                            }
                        }
                    }
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Box::pin(async { None })
        }
    }

    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Session>, String>> {
        #[cfg(feature = "hydrate")]
        {
            if let Some((access_token, refresh_token)) = tokens_from_url_fragment() {
                let adopt = self.set_session(access_token, refresh_token);
                return Box::pin(async move { adopt.await.map(Some) });
            }
            let current = self.load_session();
            Box::pin(async move { Ok(current) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Box::pin(async { Ok(None) })
        }
    }

    fn subscribe(&self, callback: AuthCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .push((id, callback));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .retain(|(existing, _)| *existing != id);
    }

    fn sign_in_with_password(&self, email: String, password: String) -> LocalBoxFuture<'static, Result<Session, String>> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            let session = self.session.clone();
            let subscribers = self.subscribers.clone();
            Box::pin(async move {
                let settings = settings.ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
                let url = format!("{}/auth/v1/token?grant_type=password", settings.url);
                let payload = serde_json::json!({ "email": email, "password": password });
                let signed_in = post_for_session(&settings, &url, &payload).await?;
                *session.lock().expect("session poisoned") = Some(signed_in.clone());
                persist_session(&signed_in);
                Self::emit(
                    &subscribers,
                    &AuthChange { event: AuthEvent::SignedIn, session: Some(signed_in.clone()) },
                );
                Ok(signed_in)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Box::pin(async { Err("not available on server".to_owned()) })
        }
    }

    fn sign_up(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> LocalBoxFuture<'static, Result<Option<Session>, String>> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            let session = self.session.clone();
            let subscribers = self.subscribers.clone();
            Box::pin(async move {
                let settings = settings.ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
                let url = format!("{}/auth/v1/signup", settings.url);
                let payload = serde_json::json!({
                    "email": email,
                    "password": password,
                    "data": { "full_name": full_name }
                });
                let body = post_for_body(&settings, &url, &payload).await?;
                // With email confirmation enabled the response carries a bare
                // user record and no token pair.
                match serde_json::from_str::<Session>(&body) {
                    Ok(signed_up) => {
                        *session.lock().expect("session poisoned") = Some(signed_up.clone());
                        persist_session(&signed_up);
                        Self::emit(
                            &subscribers,
                            &AuthChange { event: AuthEvent::SignedIn, session: Some(signed_up.clone()) },
                        );
                        Ok(Some(signed_up))
                    }
                    Err(_) => Ok(None),
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, full_name);
            Box::pin(async { Err("not available on server".to_owned()) })
        }
    }

    fn sign_in_with_oauth(&self, provider: OAuthProvider, redirect_to: String) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.as_ref().ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
            let mut url = format!(
                "{}/auth/v1/authorize?provider={}&redirect_to={}",
                settings.url,
                provider.as_str(),
                js_sys::encode_uri_component(&redirect_to)
            );
            for (key, value) in provider.extra_query() {
                url.push('&');
                url.push_str(key);
                url.push('=');
                url.push_str(value);
            }
            let window = web_sys::window().ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
            window
                .location()
                .set_href(&url)
                .map_err(|_| UNEXPECTED_ERROR.to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (provider, redirect_to);
            Err("not available on server".to_owned())
        }
    }

    fn reset_password_for_email(
        &self,
        email: String,
        redirect_to: String,
    ) -> LocalBoxFuture<'static, Result<(), String>> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            Box::pin(async move {
                let settings = settings.ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
                let url = format!(
                    "{}/auth/v1/recover?redirect_to={}",
                    settings.url,
                    js_sys::encode_uri_component(&redirect_to)
                );
                let payload = serde_json::json!({ "email": email });
                post_for_body(&settings, &url, &payload).await.map(|_| ())
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, redirect_to);
            Box::pin(async { Err("not available on server".to_owned()) })
        }
    }

    fn update_user_password(&self, password: String) -> LocalBoxFuture<'static, Result<(), String>> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            let current = self.load_session();
            let session = self.session.clone();
            let subscribers = self.subscribers.clone();
            Box::pin(async move {
                let settings = settings.ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
                let Some(existing) = current else {
                    return Err("Auth session missing!".to_owned());
                };
                let url = format!("{}/auth/v1/user", settings.url);
                let payload = serde_json::json!({ "password": password });
                let response = gloo_net::http::Request::put(&url)
                    .header("apikey", &settings.anon_key)
                    .header("Authorization", &format!("Bearer {}", existing.access_token))
                    .json(&payload)
                    .map_err(|_| UNEXPECTED_ERROR.to_owned())?
                    .send()
                    .await
                    .map_err(|_| UNEXPECTED_ERROR.to_owned())?;
                if !response.ok() {
                    return Err(error_message_from(response).await);
                }
                let identity: Identity = response.json().await.map_err(|_| UNEXPECTED_ERROR.to_owned())?;
                let mut updated = existing;
                updated.identity = identity;
                *session.lock().expect("session poisoned") = Some(updated.clone());
                persist_session(&updated);
                Self::emit(
                    &subscribers,
                    &AuthChange { event: AuthEvent::UserUpdated, session: Some(updated) },
                );
                Ok(())
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = password;
            Box::pin(async { Err("not available on server".to_owned()) })
        }
    }

    fn set_session(
        &self,
        access_token: String,
        refresh_token: String,
    ) -> LocalBoxFuture<'static, Result<Session, String>> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            let session = self.session.clone();
            let subscribers = self.subscribers.clone();
            Box::pin(async move {
                let settings = settings.ok_or_else(|| UNEXPECTED_ERROR.to_owned())?;
                let adopted = match fetch_identity(&settings, &access_token).await {
                    Ok(identity) => Session { access_token, refresh_token, expires_in: None, identity },
                    // The link's access token may have expired in transit;
                    // the refresh token is the durable half of the pair.
                    Err(_) => refresh_grant(&settings, &refresh_token).await?,
                };
                *session.lock().expect("session poisoned") = Some(adopted.clone());
                persist_session(&adopted);
                Self::emit(
                    &subscribers,
                    &AuthChange { event: AuthEvent::SignedIn, session: Some(adopted.clone()) },
                );
                Ok(adopted)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access_token, refresh_token);
            Box::pin(async { Err("not available on server".to_owned()) })
        }
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, ()> {
        #[cfg(feature = "hydrate")]
        {
            let settings = self.settings.clone();
            let current = self.load_session();
            self.forget();
            let subscribers = self.subscribers.clone();
            Box::pin(async move {
                if let (Some(settings), Some(existing)) = (settings, current) {
                    let url = format!("{}/auth/v1/logout", settings.url);
                    let _ = gloo_net::http::Request::post(&url)
                        .header("apikey", &settings.anon_key)
                        .header("Authorization", &format!("Bearer {}", existing.access_token))
                        .send()
                        .await;
                }
                Self::emit(&subscribers, &AuthChange { event: AuthEvent::SignedOut, session: None });
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Box::pin(async {})
        }
    }
}

// =============================================================================
// REST helpers (browser only)
// =============================================================================

#[cfg(feature = "hydrate")]
async fn error_message_from(response: gloo_net::http::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    models::provider_error_message(&body).unwrap_or_else(|| UNEXPECTED_ERROR.to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_for_body(settings: &Settings, url: &str, payload: &serde_json::Value) -> Result<String, String> {
    let response = gloo_net::http::Request::post(url)
        .header("apikey", &settings.anon_key)
        .json(payload)
        .map_err(|_| UNEXPECTED_ERROR.to_owned())?
        .send()
        .await
        .map_err(|_| UNEXPECTED_ERROR.to_owned())?;
    if !response.ok() {
        return Err(error_message_from(response).await);
    }
    response.text().await.map_err(|_| UNEXPECTED_ERROR.to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_for_session(settings: &Settings, url: &str, payload: &serde_json::Value) -> Result<Session, String> {
    let body = post_for_body(settings, url, payload).await?;
    serde_json::from_str(&body).map_err(|_| UNEXPECTED_ERROR.to_owned())
}

#[cfg(feature = "hydrate")]
async fn fetch_identity(settings: &Settings, access_token: &str) -> Result<Identity, String> {
    let url = format!("{}/auth/v1/user", settings.url);
    let response = gloo_net::http::Request::get(&url)
        .header("apikey", &settings.anon_key)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|_| UNEXPECTED_ERROR.to_owned())?;
    if !response.ok() {
        return Err(error_message_from(response).await);
    }
    response.json().await.map_err(|_| UNEXPECTED_ERROR.to_owned())
}

#[cfg(feature = "hydrate")]
async fn refresh_grant(settings: &Settings, refresh_token: &str) -> Result<Session, String> {
    let url = format!("{}/auth/v1/token?grant_type=refresh_token", settings.url);
    let payload = serde_json::json!({ "refresh_token": refresh_token });
    post_for_session(settings, &url, &payload).await
}

/// Extract `access_token`/`refresh_token` from the OAuth redirect fragment.
#[cfg(feature = "hydrate")]
fn tokens_from_url_fragment() -> Option<(String, String)> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let fragment = hash.strip_prefix('#')?;
    let params = web_sys::UrlSearchParams::new_with_str(fragment).ok()?;
    let access_token = params.get("access_token").filter(|t| !t.is_empty())?;
    let refresh_token = params.get("refresh_token").filter(|t| !t.is_empty())?;
    Some((access_token, refresh_token))
}

// =============================================================================
// Session persistence (localStorage + middleware-readable cookies)
// =============================================================================

#[cfg(feature = "hydrate")]
fn persist_session(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(serialized) = serde_json::to_string(session) {
                let _ = storage.set_item(STORAGE_KEY, &serialized);
            }
        }
    }
    write_cookie(ACCESS_COOKIE, &session.access_token, 60 * 60 * 24 * 7);
    write_cookie(REFRESH_COOKIE, &session.refresh_token, 60 * 60 * 24 * 30);
}

#[cfg(feature = "hydrate")]
fn read_stored_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let serialized = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&serialized).ok()
}

#[cfg(feature = "hydrate")]
fn clear_persisted_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    write_cookie(ACCESS_COOKIE, "", 0);
    write_cookie(REFRESH_COOKIE, "", 0);
}

#[cfg(feature = "hydrate")]
fn write_cookie(name: &str, value: &str, max_age_secs: u32) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(html_document) = document.dyn_into::<web_sys::HtmlDocument>() else {
        return;
    };
    let cookie = format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax");
    let _ = html_document.set_cookie(&cookie);
}

