use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::auth::mock::MockProvider;

// =============================================================================
// Token extraction from the reset link
// =============================================================================

#[test]
fn both_tokens_present_is_valid() {
    let tokens = extract_reset_tokens(Some("at".to_owned()), Some("rt".to_owned()));
    assert_eq!(tokens, Ok(("at".to_owned(), "rt".to_owned())));
}

#[test]
fn missing_either_token_is_invalid() {
    assert_eq!(extract_reset_tokens(None, Some("rt".to_owned())), Err(INVALID_LINK));
    assert_eq!(extract_reset_tokens(Some("at".to_owned()), None), Err(INVALID_LINK));
    assert_eq!(extract_reset_tokens(None, None), Err(INVALID_LINK));
}

#[test]
fn empty_tokens_are_treated_as_missing() {
    assert_eq!(
        extract_reset_tokens(Some(String::new()), Some("rt".to_owned())),
        Err(INVALID_LINK)
    );
}

// =============================================================================
// Password validation
// =============================================================================

#[test]
fn password_required() {
    assert_eq!(validate_passwords("", ""), Err("Password is required"));
}

#[test]
fn password_minimum_length() {
    assert_eq!(validate_passwords("12345", "12345"), Err("Password must be at least 6 characters"));
}

#[test]
fn passwords_must_match() {
    assert_eq!(validate_passwords("secret1", "secret2"), Err("Passwords do not match"));
}

#[test]
fn matching_passwords_pass() {
    assert_eq!(validate_passwords("secret1", "secret1"), Ok(()));
}

// =============================================================================
// Submission flow
// =============================================================================

#[test]
fn invalid_link_never_calls_the_provider() {
    let mock = Arc::new(MockProvider::new());
    let handle = ProviderHandle(mock.clone());

    let outcome = block_on(submit_password_update(&handle, false, "secret1", "secret1"));

    assert_eq!(outcome, Err(INVALID_LINK.to_owned()));
    assert!(mock.calls().is_empty(), "update_user_password must not run for an invalid link");
}

#[test]
fn invalid_fields_never_call_the_provider() {
    let mock = Arc::new(MockProvider::new());
    let handle = ProviderHandle(mock.clone());

    let outcome = block_on(submit_password_update(&handle, true, "secret1", "different"));

    assert_eq!(outcome, Err("Passwords do not match".to_owned()));
    assert!(mock.calls().is_empty());
}

#[test]
fn valid_submission_updates_the_password() {
    let mock = Arc::new(MockProvider::new());
    let handle = ProviderHandle(mock.clone());

    let outcome = block_on(submit_password_update(&handle, true, "secret1", "secret1"));

    assert_eq!(outcome, Ok(()));
    assert_eq!(mock.calls(), vec!["update_user_password"]);
}

#[test]
fn provider_rejection_surfaces_verbatim() {
    let mock = Arc::new(MockProvider::new());
    *mock.update_password_result.lock().unwrap() =
        Err("New password should be different from the old password.".to_owned());
    let handle = ProviderHandle(mock.clone());

    let outcome = block_on(submit_password_update(&handle, true, "secret1", "secret1"));

    assert_eq!(outcome, Err("New password should be different from the old password.".to_owned()));
}
