use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::auth::mock::MockProvider;

fn form(email: &str, password: &str, confirm: &str, full_name: &str) -> AuthForm {
    AuthForm {
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        full_name: full_name.to_owned(),
    }
}

// =============================================================================
// Field validation (display order, first failure wins)
// =============================================================================

#[test]
fn validate_requires_email() {
    assert_eq!(
        validate_form(AuthMode::SignIn, &form("", "secret", "", "")),
        Err("Email is required")
    );
}

#[test]
fn validate_requires_plausible_email() {
    assert_eq!(
        validate_form(AuthMode::SignIn, &form("nope", "secret", "", "")),
        Err("Please enter a valid email address")
    );
}

#[test]
fn validate_requires_password_outside_forgot_mode() {
    assert_eq!(
        validate_form(AuthMode::SignIn, &form("a@b.com", "", "", "")),
        Err("Password is required")
    );
    assert_eq!(validate_form(AuthMode::Forgot, &form("a@b.com", "", "", "")), Ok(()));
}

#[test]
fn validate_sign_up_requires_full_name() {
    assert_eq!(
        validate_form(AuthMode::SignUp, &form("a@b.com", "secret1", "secret1", "")),
        Err("Full name is required")
    );
}

#[test]
fn validate_sign_up_requires_password_length() {
    assert_eq!(
        validate_form(AuthMode::SignUp, &form("a@b.com", "12345", "12345", "Jane")),
        Err("Password must be at least 6 characters")
    );
}

#[test]
fn validate_sign_up_requires_matching_passwords() {
    assert_eq!(
        validate_form(AuthMode::SignUp, &form("a@b.com", "secret1", "secret2", "Jane")),
        Err("Passwords do not match")
    );
}

#[test]
fn validate_accepts_well_formed_sign_up() {
    assert_eq!(
        validate_form(AuthMode::SignUp, &form("a@b.com", "secret1", "secret1", "Jane")),
        Ok(())
    );
}

// =============================================================================
// Submission flows against the mock provider
// =============================================================================

#[test]
fn password_mismatch_blocks_submission_without_calling_provider() {
    let mock = Arc::new(MockProvider::new());
    let handle = ProviderHandle(mock.clone());
    let mut sessions = Vec::new();

    let outcome = block_on(submit_auth_form(
        &handle,
        AuthMode::SignUp,
        &form("a@b.com", "secret1", "secret2", "Jane"),
        "https://app.test",
        |session| sessions.push(session),
    ));

    assert_eq!(outcome, Err("Passwords do not match".to_owned()));
    assert!(sessions.is_empty());
    assert!(mock.calls().is_empty(), "provider must not be called on validation failure");
}

#[test]
fn sign_in_success_populates_store_and_redirects_to_dashboard() {
    let mock = Arc::new(MockProvider::new());
    *mock.sign_in_result.lock().unwrap() = Ok(MockProvider::session_for("u1"));
    let handle = ProviderHandle(mock.clone());

    let mut state = crate::state::auth::AuthState::default();
    let outcome = block_on(submit_auth_form(
        &handle,
        AuthMode::SignIn,
        &form("a@b.com", "secret", "", ""),
        "https://app.test",
        |session| state.set_identity(session.identity),
    ));

    assert_eq!(outcome, Ok(AuthOutcome::Redirect("/dashboard")));
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u1"));
    assert!(state.is_authenticated());
    assert_eq!(mock.calls(), vec!["sign_in_with_password"]);
}

#[test]
fn sign_in_failure_surfaces_provider_message_verbatim() {
    let mock = Arc::new(MockProvider::new());
    *mock.sign_in_result.lock().unwrap() = Err("Invalid login credentials".to_owned());
    let handle = ProviderHandle(mock.clone());

    let mut state = crate::state::auth::AuthState::default();
    let outcome = block_on(submit_auth_form(
        &handle,
        AuthMode::SignIn,
        &form("a@b.com", "wrong", "", ""),
        "https://app.test",
        |session| state.set_identity(session.identity),
    ));

    assert_eq!(outcome, Err("Invalid login credentials".to_owned()));
    assert!(!state.is_authenticated());
    assert!(state.identity.is_none());
}

#[test]
fn sign_up_without_session_reports_confirmation_message() {
    let mock = Arc::new(MockProvider::new());
    *mock.sign_up_result.lock().unwrap() = Ok(None);
    let handle = ProviderHandle(mock.clone());

    let outcome = block_on(submit_auth_form(
        &handle,
        AuthMode::SignUp,
        &form("a@b.com", "secret1", "secret1", "Jane"),
        "https://app.test",
        |_| {},
    ));

    assert_eq!(outcome, Ok(AuthOutcome::Message(CONFIRMATION_SENT)));
    assert_eq!(mock.calls(), vec!["sign_up"]);
}

#[test]
fn sign_up_with_immediate_session_redirects() {
    let mock = Arc::new(MockProvider::new());
    *mock.sign_up_result.lock().unwrap() = Ok(Some(MockProvider::session_for("u9")));
    let handle = ProviderHandle(mock.clone());

    let mut seen = None;
    let outcome = block_on(submit_auth_form(
        &handle,
        AuthMode::SignUp,
        &form("a@b.com", "secret1", "secret1", "Jane"),
        "https://app.test",
        |session| seen = Some(session.identity.id.clone()),
    ));

    assert_eq!(outcome, Ok(AuthOutcome::Redirect("/dashboard")));
    assert_eq!(seen.as_deref(), Some("u9"));
}

#[test]
fn forgot_mode_requests_reset_email() {
    let mock = Arc::new(MockProvider::new());
    let handle = ProviderHandle(mock.clone());

    let outcome = block_on(submit_auth_form(
        &handle,
        AuthMode::Forgot,
        &form("a@b.com", "", "", ""),
        "https://app.test",
        |_| {},
    ));

    assert_eq!(outcome, Ok(AuthOutcome::Message(RESET_EMAIL_SENT)));
    assert_eq!(mock.calls(), vec!["reset_password_for_email"]);
}
