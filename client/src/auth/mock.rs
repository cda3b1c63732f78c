//! Recording [`AuthProvider`] double for tests.
//!
//! Every call appends its method name to `calls`, so tests can assert both
//! what was invoked and, just as important, what was not.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::LocalBoxFuture;
use models::{AuthChange, Identity, Session};

use super::provider::{AuthCallback, AuthProvider, OAuthProvider, SubscriptionId};

pub struct MockProvider {
    pub user: Mutex<Option<Identity>>,
    pub session_result: Mutex<Result<Option<Session>, String>>,
    pub sign_in_result: Mutex<Result<Session, String>>,
    pub sign_up_result: Mutex<Result<Option<Session>, String>>,
    pub reset_result: Mutex<Result<(), String>>,
    pub update_password_result: Mutex<Result<(), String>>,
    pub set_session_result: Mutex<Result<Session, String>>,
    calls: Mutex<Vec<String>>,
    subscribers: Mutex<Vec<(SubscriptionId, AuthCallback)>>,
    next_subscription: AtomicU64,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            user: Mutex::new(None),
            session_result: Mutex::new(Ok(None)),
            sign_in_result: Mutex::new(Err("mock not configured".to_owned())),
            sign_up_result: Mutex::new(Ok(None)),
            reset_result: Mutex::new(Ok(())),
            update_password_result: Mutex::new(Ok(())),
            set_session_result: Mutex::new(Err("mock not configured".to_owned())),
            calls: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }
}

impl MockProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session fixture for the given user id.
    #[must_use]
    pub fn session_for(id: &str) -> Session {
        Session {
            access_token: "at".to_owned(),
            refresh_token: "rt".to_owned(),
            expires_in: Some(3600),
            identity: Identity { id: id.to_owned(), ..Identity::default() },
        }
    }

    /// Method names recorded so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls poisoned").clone()
    }

    /// Push an auth-change emission to every subscriber.
    pub fn emit(&self, change: &AuthChange) {
        let subscribers = self.subscribers.lock().expect("subscribers poisoned");
        for (_, callback) in subscribers.iter() {
            callback(change);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().expect("subscribers poisoned").len()
    }

    fn record(&self, method: &str) {
        self.calls.lock().expect("calls poisoned").push(method.to_owned());
    }
}

impl AuthProvider for MockProvider {
    fn get_user(&self) -> LocalBoxFuture<'static, Option<Identity>> {
        self.record("get_user");
        let user = self.user.lock().expect("user poisoned").clone();
        Box::pin(async move { user })
    }

    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Session>, String>> {
        self.record("get_session");
        let result = self.session_result.lock().expect("session_result poisoned").clone();
        Box::pin(async move { result })
    }

    fn subscribe(&self, callback: AuthCallback) -> SubscriptionId {
        self.record("subscribe");
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("subscribers poisoned")
            .push((id, callback));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.record("unsubscribe");
        self.subscribers
            .lock()
            .expect("subscribers poisoned")
            .retain(|(existing, _)| *existing != id);
    }

    fn sign_in_with_password(&self, _email: String, _password: String) -> LocalBoxFuture<'static, Result<Session, String>> {
        self.record("sign_in_with_password");
        let result = self.sign_in_result.lock().expect("sign_in_result poisoned").clone();
        Box::pin(async move { result })
    }

    fn sign_up(
        &self,
        _email: String,
        _password: String,
        _full_name: String,
    ) -> LocalBoxFuture<'static, Result<Option<Session>, String>> {
        self.record("sign_up");
        let result = self.sign_up_result.lock().expect("sign_up_result poisoned").clone();
        Box::pin(async move { result })
    }

    fn sign_in_with_oauth(&self, _provider: OAuthProvider, _redirect_to: String) -> Result<(), String> {
        self.record("sign_in_with_oauth");
        Ok(())
    }

    fn reset_password_for_email(
        &self,
        _email: String,
        _redirect_to: String,
    ) -> LocalBoxFuture<'static, Result<(), String>> {
        self.record("reset_password_for_email");
        let result = self.reset_result.lock().expect("reset_result poisoned").clone();
        Box::pin(async move { result })
    }

    fn update_user_password(&self, _password: String) -> LocalBoxFuture<'static, Result<(), String>> {
        self.record("update_user_password");
        let result = self
            .update_password_result
            .lock()
            .expect("update_password_result poisoned")
            .clone();
        Box::pin(async move { result })
    }

    fn set_session(
        &self,
        _access_token: String,
        _refresh_token: String,
    ) -> LocalBoxFuture<'static, Result<Session, String>> {
        self.record("set_session");
        let result = self.set_session_result.lock().expect("set_session_result poisoned").clone();
        Box::pin(async move { result })
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, ()> {
        self.record("sign_out");
        Box::pin(async {})
    }
}
