use super::*;
use crate::state::test_helpers::MockVerifier;

// =============================================================================
// Path matcher
// =============================================================================

#[test]
fn protected_prefix_matches_itself_and_subpaths() {
    assert!(is_protected_path("/dashboard"));
    assert!(is_protected_path("/dashboard/settings"));
    assert!(is_protected_path("/dashboard/chatbots/cb_1/preview"));
}

#[test]
fn unprotected_paths_bypass() {
    assert!(!is_protected_path("/"));
    assert!(!is_protected_path("/auth"));
    assert!(!is_protected_path("/auth/callback"));
    assert!(!is_protected_path("/healthz"));
    assert!(!is_protected_path("/pkg/ragsaas.js"));
}

#[test]
fn prefix_match_requires_a_path_boundary() {
    assert!(!is_protected_path("/dashboards"));
    assert!(!is_protected_path("/dashboard-admin"));
}

// =============================================================================
// env_bool: unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_MW_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_MW_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_is_none() {
    let key = "__TEST_MW_EB_INVALID_17__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_MW_EB_SURELY_UNSET_42__"), None);
}

// =============================================================================
// Session resolution against a scripted verifier
// =============================================================================

#[tokio::test]
async fn valid_access_token_passes_through() {
    let verifier = MockVerifier::new(&["good-at"], None);
    let outcome = resolve_session(&verifier, Some("good-at"), Some("rt")).await;
    assert_eq!(outcome, SessionOutcome::Valid);
    assert_eq!(verifier.refresh_calls.load(std::sync::atomic::Ordering::Relaxed), 0);
}

#[tokio::test]
async fn stale_access_token_refreshes_once() {
    let verifier = MockVerifier::new(&[], Some(MockVerifier::session_for("u1")));
    let outcome = resolve_session(&verifier, Some("stale-at"), Some("rt")).await;
    match outcome {
        SessionOutcome::Refreshed(session) => {
            assert_eq!(session.identity.id, "u1");
            assert_eq!(session.access_token, "fresh-at");
        }
        other => panic!("expected refresh, got {other:?}"),
    }
    assert_eq!(verifier.refresh_calls.load(std::sync::atomic::Ordering::Relaxed), 1);
}

#[tokio::test]
async fn missing_access_token_still_refreshes() {
    let verifier = MockVerifier::new(&[], Some(MockVerifier::session_for("u1")));
    let outcome = resolve_session(&verifier, None, Some("rt")).await;
    assert!(matches!(outcome, SessionOutcome::Refreshed(_)));
    assert_eq!(verifier.get_user_calls.load(std::sync::atomic::Ordering::Relaxed), 0);
}

#[tokio::test]
async fn failed_refresh_is_unauthenticated_with_no_retry() {
    let verifier = MockVerifier::new(&[], None);
    let outcome = resolve_session(&verifier, Some("stale-at"), Some("rt")).await;
    assert_eq!(outcome, SessionOutcome::Unauthenticated);
    assert_eq!(verifier.refresh_calls.load(std::sync::atomic::Ordering::Relaxed), 1);
}

#[tokio::test]
async fn missing_both_tokens_is_unauthenticated_without_provider_calls() {
    let verifier = MockVerifier::new(&["good-at"], Some(MockVerifier::session_for("u1")));
    let outcome = resolve_session(&verifier, None, None).await;
    assert_eq!(outcome, SessionOutcome::Unauthenticated);
    assert_eq!(verifier.get_user_calls.load(std::sync::atomic::Ordering::Relaxed), 0);
    assert_eq!(verifier.refresh_calls.load(std::sync::atomic::Ordering::Relaxed), 0);
}

#[tokio::test]
async fn empty_cookie_values_are_treated_as_missing() {
    let verifier = MockVerifier::new(&[], None);
    let outcome = resolve_session(&verifier, Some(""), Some("")).await;
    assert_eq!(outcome, SessionOutcome::Unauthenticated);
    assert_eq!(verifier.get_user_calls.load(std::sync::atomic::Ordering::Relaxed), 0);
    assert_eq!(verifier.refresh_calls.load(std::sync::atomic::Ordering::Relaxed), 0);
}

// =============================================================================
// Cookie construction
// =============================================================================

#[test]
fn session_cookie_carries_expected_attributes() {
    let cookie = session_cookie(ACCESS_COOKIE, "token".to_owned(), ACCESS_MAX_AGE, true);
    assert_eq!(cookie.name(), ACCESS_COOKIE);
    assert_eq!(cookie.value(), "token");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.max_age(), Some(ACCESS_MAX_AGE));
}

#[test]
fn expired_cookie_zeroes_value_and_age() {
    let cookie = expired_cookie(REFRESH_COOKIE, false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
