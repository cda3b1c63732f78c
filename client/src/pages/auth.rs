//! Sign-in / sign-up / forgot-password screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! All credential flows run through the auth provider; this page validates
//! locally, surfaces provider errors verbatim in a form banner, and
//! redirects to the dashboard once a session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use models::Session;

use crate::auth::provider::{OAuthProvider, ProviderHandle};
use crate::state::auth::AuthState;

/// Where successful sign-ins land.
pub const DASHBOARD_REDIRECT: &str = "/dashboard";

pub const CONFIRMATION_SENT: &str = "Check your email for the confirmation link!";
pub const RESET_EMAIL_SENT: &str = "Password reset email sent! Check your inbox.";

/// Which of the three flows the form is currently in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
    Forgot,
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

/// Validate the form for the given mode. Checks run in display order; the
/// first failure is the one shown.
pub fn validate_form(mode: AuthMode, form: &AuthForm) -> Result<(), &'static str> {
    if form.email.is_empty() {
        return Err("Email is required");
    }
    if !form.email.contains('@') {
        return Err("Please enter a valid email address");
    }
    if mode != AuthMode::Forgot && form.password.is_empty() {
        return Err("Password is required");
    }
    if mode == AuthMode::SignUp {
        if form.full_name.is_empty() {
            return Err("Full name is required");
        }
        if form.password.len() < 6 {
            return Err("Password must be at least 6 characters");
        }
        if form.password != form.confirm_password {
            return Err("Passwords do not match");
        }
    }
    Ok(())
}

/// Successful submission results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Redirect(&'static str),
    Message(&'static str),
}

/// Run one submission end to end: local validation, the provider call for
/// the active mode, and (when a session is issued) the store update via
/// `on_session`. Validation failures never reach the provider.
pub async fn submit_auth_form<F>(
    provider: &ProviderHandle,
    mode: AuthMode,
    form: &AuthForm,
    origin: &str,
    mut on_session: F,
) -> Result<AuthOutcome, String>
where
    F: FnMut(Session),
{
    validate_form(mode, form).map_err(ToOwned::to_owned)?;

    match mode {
        AuthMode::SignIn => {
            let session = provider
                .sign_in_with_password(form.email.clone(), form.password.clone())
                .await?;
            on_session(session);
            Ok(AuthOutcome::Redirect(DASHBOARD_REDIRECT))
        }
        AuthMode::SignUp => {
            let signed_up = provider
                .sign_up(form.email.clone(), form.password.clone(), form.full_name.clone())
                .await?;
            match signed_up {
                Some(session) => {
                    on_session(session);
                    Ok(AuthOutcome::Redirect(DASHBOARD_REDIRECT))
                }
                None => Ok(AuthOutcome::Message(CONFIRMATION_SENT)),
            }
        }
        AuthMode::Forgot => {
            provider
                .reset_password_for_email(form.email.clone(), format!("{origin}/auth/reset-password"))
                .await?;
            Ok(AuthOutcome::Message(RESET_EMAIL_SENT))
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let provider = expect_context::<ProviderHandle>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(query.get_untracked().get("error"));
    let success = RwSignal::new(None::<&'static str>);

    // Already signed in? Go straight to the dashboard.
    #[cfg(feature = "hydrate")]
    {
        let check_provider = provider.clone();
        let navigate_authed = navigate.clone();
        Effect::new(move || {
            let session_check = check_provider.get_session();
            let navigate_authed = navigate_authed.clone();
            leptos::task::spawn_local(async move {
                if let Ok(Some(_)) = session_check.await {
                    navigate_authed(
                        DASHBOARD_REDIRECT,
                        leptos_router::NavigateOptions { replace: true, ..Default::default() },
                    );
                }
            });
        });
    }

    let reset_banners = move || {
        error.set(None);
        success.set(None);
    };

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        email.set(String::new());
        password.set(String::new());
        confirm_password.set(String::new());
        full_name.set(String::new());
        reset_banners();
    };

    let submit_provider = provider.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        reset_banners();

        let form = AuthForm {
            email: email.get().trim().to_owned(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            full_name: full_name.get().trim().to_owned(),
        };
        let active_mode = mode.get();
        let origin = crate::util::browser::origin();
        let flow_provider = submit_provider.clone();
        let flow_navigate = submit_navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = submit_auth_form(&flow_provider, active_mode, &form, &origin, |session| {
                auth.update(|state| state.set_identity(session.identity.clone()));
            })
            .await;
            match outcome {
                Ok(AuthOutcome::Redirect(target)) => flow_navigate(target, leptos_router::NavigateOptions::default()),
                Ok(AuthOutcome::Message(message)) => success.set(Some(message)),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, active_mode, origin, flow_provider, flow_navigate, auth);
            busy.set(false);
        }
    };

    let oauth_provider = provider.clone();
    let on_oauth = Callback::new(move |which: OAuthProvider| {
        reset_banners();
        let redirect_to = format!("{}/auth/callback", crate::util::browser::origin());
        if let Err(message) = oauth_provider.sign_in_with_oauth(which, redirect_to) {
            error.set(Some(message));
        }
    });

    let title = move || match mode.get() {
        AuthMode::SignIn => "Welcome Back",
        AuthMode::SignUp => "Create Account",
        AuthMode::Forgot => "Reset Password",
    };
    let subtitle = move || match mode.get() {
        AuthMode::SignIn => "Sign in to access your AI chatbots",
        AuthMode::SignUp => "Start creating AI chatbots from your documents",
        AuthMode::Forgot => "Enter your email to reset your password",
    };
    let submit_label = move || match (mode.get(), busy.get()) {
        (AuthMode::SignIn, false) => "Sign In",
        (AuthMode::SignIn, true) => "Signing in...",
        (AuthMode::SignUp, false) => "Create Account",
        (AuthMode::SignUp, true) => "Creating account...",
        (AuthMode::Forgot, false) => "Send Reset Email",
        (AuthMode::Forgot, true) => "Sending email...",
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__inner">
                <a class="auth-page__back" href="/">
                    "← Back to home"
                </a>

                <div class="card auth-card">
                    <div class="auth-card__header">
                        <span class="logo-mark logo-mark--large">"R"</span>
                        <h1 class="auth-card__title">{title}</h1>
                        <p class="auth-card__subtitle">{subtitle}</p>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get().is_some()>
                        <p class="banner banner--success">{move || success.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="auth-card__oauth">
                        <button class="btn btn--oauth" disabled=move || busy.get() on:click=move |_| on_oauth.run(OAuthProvider::Google)>
                            "Continue with Google"
                        </button>
                        <button class="btn btn--oauth btn--oauth-dark" disabled=move || busy.get() on:click=move |_| on_oauth.run(OAuthProvider::Github)>
                            "Continue with GitHub"
                        </button>
                    </div>

                    <div class="auth-card__divider">
                        <span>"Or continue with email"</span>
                    </div>

                    <form class="auth-form" on:submit=on_submit>
                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <label class="field">
                                "Full Name"
                                <input
                                    class="field__input"
                                    type="text"
                                    placeholder="Enter your full name"
                                    prop:value=move || full_name.get()
                                    on:input=move |ev| {
                                        full_name.set(event_target_value(&ev));
                                        reset_banners();
                                    }
                                    disabled=move || busy.get()
                                />
                            </label>
                        </Show>

                        <label class="field">
                            "Email"
                            <input
                                class="field__input"
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    reset_banners();
                                }
                                disabled=move || busy.get()
                            />
                        </label>

                        <Show when=move || mode.get() != AuthMode::Forgot>
                            <label class="field">
                                "Password"
                                <div class="field__password">
                                    <input
                                        class="field__input"
                                        type=move || if show_password.get() { "text" } else { "password" }
                                        placeholder="Enter your password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| {
                                            password.set(event_target_value(&ev));
                                            reset_banners();
                                        }
                                        disabled=move || busy.get()
                                    />
                                    <button
                                        class="field__password-toggle"
                                        type="button"
                                        on:click=move |_| show_password.update(|show| *show = !*show)
                                        disabled=move || busy.get()
                                    >
                                        {move || if show_password.get() { "Hide" } else { "Show" }}
                                    </button>
                                </div>
                            </label>
                        </Show>

                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <label class="field">
                                "Confirm Password"
                                <input
                                    class="field__input"
                                    type="password"
                                    placeholder="Confirm your password"
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| {
                                        confirm_password.set(event_target_value(&ev));
                                        reset_banners();
                                    }
                                    disabled=move || busy.get()
                                />
                            </label>
                        </Show>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {submit_label}
                        </button>
                    </form>

                    <div class="auth-card__footer">
                        <Show when=move || mode.get() == AuthMode::SignIn>
                            <button class="auth-card__link" on:click=move |_| switch_mode(AuthMode::Forgot) disabled=move || busy.get()>
                                "Forgot your password?"
                            </button>
                            <p>
                                "Don't have an account? "
                                <button class="auth-card__link" on:click=move |_| switch_mode(AuthMode::SignUp) disabled=move || busy.get()>
                                    "Sign up"
                                </button>
                            </p>
                        </Show>
                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <p>
                                "Already have an account? "
                                <button class="auth-card__link" on:click=move |_| switch_mode(AuthMode::SignIn) disabled=move || busy.get()>
                                    "Sign in"
                                </button>
                            </p>
                        </Show>
                        <Show when=move || mode.get() == AuthMode::Forgot>
                            <p>
                                "Remember your password? "
                                <button class="auth-card__link" on:click=move |_| switch_mode(AuthMode::SignIn) disabled=move || busy.get()>
                                    "Sign in"
                                </button>
                            </p>
                        </Show>
                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <p class="auth-card__terms">
                                "By creating an account, you agree to our Terms of Service and Privacy Policy"
                            </p>
                        </Show>
                    </div>
                </div>

                <div class="auth-page__notes">
                    <p>"Start with a 14-day free trial"</p>
                    <p>"No credit card required"</p>
                </div>
            </div>
        </div>
    }
}
