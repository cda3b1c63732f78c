//! Route-protection middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request whose path falls under a protected prefix has its session
//! cookies validated against the auth provider before the page renders. A
//! stale access token gets one refresh attempt; a failed refresh means "not
//! authenticated" for that request and redirects to the sign-in screen.
//! All other paths bypass this entirely.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod tests;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use models::Session;
use time::Duration;

use crate::provider::SessionVerifier;
use crate::state::AppState;

/// Path prefixes that require a valid session.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard"];

/// Cookie names shared with the browser client.
pub const ACCESS_COOKIE: &str = "sb-access-token";
pub const REFRESH_COOKIE: &str = "sb-refresh-token";

/// Where unauthenticated requests are sent.
pub const SIGN_IN_ROUTE: &str = "/auth";

const ACCESS_MAX_AGE: Duration = Duration::days(7);
const REFRESH_MAX_AGE: Duration = Duration::days(30);

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Whether session cookies should carry the `Secure` attribute.
/// `COOKIE_SECURE` overrides; otherwise inferred from `PUBLIC_ORIGIN`.
#[must_use]
pub fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }
    std::env::var("PUBLIC_ORIGIN")
        .map(|origin| origin.starts_with("https://"))
        .unwrap_or(false)
}

/// Whether a request path falls under a protected prefix.
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
}

/// How a protected request's session resolved.
#[derive(Debug, PartialEq)]
pub(crate) enum SessionOutcome {
    /// The access token is still good; pass the request through untouched.
    Valid,
    /// The provider minted a new session; cookies must be rewritten.
    Refreshed(Session),
    /// No usable session; redirect to sign-in.
    Unauthenticated,
}

/// Resolve the cookie pair against the provider. One refresh attempt, no
/// retries.
pub(crate) async fn resolve_session(
    verifier: &dyn SessionVerifier,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> SessionOutcome {
    if let Some(token) = access_token.filter(|t| !t.is_empty()) {
        if verifier.get_user(token).await.is_ok() {
            return SessionOutcome::Valid;
        }
    }

    let Some(refresh) = refresh_token.filter(|t| !t.is_empty()) else {
        return SessionOutcome::Unauthenticated;
    };
    match verifier.refresh(refresh).await {
        Ok(session) => SessionOutcome::Refreshed(session),
        Err(error) => {
            tracing::debug!(%error, "session refresh failed");
            SessionOutcome::Unauthenticated
        }
    }
}

// Not HttpOnly: the browser client owns these cookies and must be able to
// clear them on sign-out.
pub(crate) fn session_cookie(name: &'static str, value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

pub(crate) fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    session_cookie(name, String::new(), Duration::ZERO, secure)
}

/// Axum middleware: refresh/validate the session for protected paths.
pub async fn refresh_session(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    if !is_protected_path(request.uri().path()) {
        return next.run(request).await;
    }

    let access_token = jar.get(ACCESS_COOKIE).map(Cookie::value);
    let refresh_token = jar.get(REFRESH_COOKIE).map(Cookie::value);

    match resolve_session(state.verifier.as_ref(), access_token, refresh_token).await {
        SessionOutcome::Valid => next.run(request).await,
        SessionOutcome::Refreshed(session) => {
            let secure = state.cookie_secure;
            let cookies = CookieJar::new()
                .add(session_cookie(ACCESS_COOKIE, session.access_token, ACCESS_MAX_AGE, secure))
                .add(session_cookie(REFRESH_COOKIE, session.refresh_token, REFRESH_MAX_AGE, secure));
            let response = next.run(request).await;
            (cookies, response).into_response()
        }
        SessionOutcome::Unauthenticated => {
            let secure = state.cookie_secure;
            let cookies = CookieJar::new()
                .add(expired_cookie(ACCESS_COOKIE, secure))
                .add(expired_cookie(REFRESH_COOKIE, secure));
            (cookies, Redirect::temporary(SIGN_IN_ROUTE)).into_response()
        }
    }
}
