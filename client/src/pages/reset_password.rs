//! Set-new-password screen, reached from the reset-link email.
//!
//! The link carries `access_token`/`refresh_token` query parameters; those
//! establish a session before the password update. A link without both
//! tokens is rejected locally; the provider is never contacted for it.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::auth::provider::ProviderHandle;

pub const INVALID_LINK: &str = "Invalid reset link. Please request a new password reset.";

/// Pull the token pair out of the reset-link query parameters.
pub fn extract_reset_tokens(
    access_token: Option<String>,
    refresh_token: Option<String>,
) -> Result<(String, String), &'static str> {
    let access_token = access_token.filter(|t| !t.is_empty());
    let refresh_token = refresh_token.filter(|t| !t.is_empty());
    match (access_token, refresh_token) {
        (Some(access), Some(refresh)) => Ok((access, refresh)),
        _ => Err(INVALID_LINK),
    }
}

/// Validate the new-password fields in display order.
pub fn validate_passwords(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Run one password-update submission. A form reached through an invalid
/// link fails here without any provider call.
pub async fn submit_password_update(
    provider: &ProviderHandle,
    link_valid: bool,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if !link_valid {
        return Err(INVALID_LINK.to_owned());
    }
    validate_passwords(password, confirm).map_err(ToOwned::to_owned)?;
    provider.update_user_password(password.to_owned()).await
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let provider = expect_context::<ProviderHandle>();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);

    let params = query.get_untracked();
    let tokens = extract_reset_tokens(params.get("access_token"), params.get("refresh_token"));
    let link_valid = tokens.is_ok();

    // Adopt the link's token pair as the active session before any update.
    match tokens {
        Ok((access, refresh)) => {
            #[cfg(feature = "hydrate")]
            {
                let adopt = provider.set_session(access, refresh);
                leptos::task::spawn_local(async move {
                    if let Err(message) = adopt.await {
                        error.set(Some(message));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (access, refresh);
            }
        }
        Err(message) => error.set(Some(message.to_owned())),
    }

    // StoredValue keeps the submit handler Copy for use inside `Show`.
    let submit_provider = StoredValue::new(provider.clone());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        let flow_provider = submit_provider.get_value();
        let password_value = password.get();
        let confirm_value = confirm_password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match submit_password_update(&flow_provider, link_valid, &password_value, &confirm_value).await {
                Ok(()) => {
                    success.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    crate::util::browser::set_location("/dashboard");
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (flow_provider, password_value, confirm_value, link_valid);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__inner">
                <a class="auth-page__back" href="/auth">
                    "← Back to sign in"
                </a>

                <Show
                    when=move || success.get()
                    fallback=move || {
                        view! {
                            <div class="card auth-card">
                                <div class="auth-card__header">
                                    <span class="logo-mark logo-mark--large">"R"</span>
                                    <h1 class="auth-card__title">"Set New Password"</h1>
                                    <p class="auth-card__subtitle">"Enter your new password below"</p>
                                </div>

                                <Show when=move || error.get().is_some()>
                                    <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
                                </Show>

                                <form class="auth-form" on:submit=on_submit>
                                    <label class="field">
                                        "New Password"
                                        <div class="field__password">
                                            <input
                                                class="field__input"
                                                type=move || if show_password.get() { "text" } else { "password" }
                                                placeholder="Enter your new password"
                                                prop:value=move || password.get()
                                                on:input=move |ev| {
                                                    password.set(event_target_value(&ev));
                                                    error.set(None);
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
                                    <label class="field">
                                        "Confirm Password"
                                        <input
                                            class="field__input"
                                            type="password"
                                            placeholder="Confirm your new password"
                                            prop:value=move || confirm_password.get()
                                            on:input=move |ev| {
                                                confirm_password.set(event_target_value(&ev));
                                                error.set(None);
                                            }
                                            disabled=move || busy.get()
                                        />
                                    </label>
                                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                                        {move || if busy.get() { "Updating..." } else { "Update Password" }}
                                    </button>
                                </form>
                            </div>
                        }
                    }
                >
                    <div class="card auth-card auth-card--success">
                        <h2 class="auth-card__title">"Password Updated!"</h2>
                        <p class="auth-card__subtitle">
                            "Your password has been successfully updated. Redirecting to dashboard..."
                        </p>
                        <div class="spinner"></div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
