//! OAuth callback landing screen.
//!
//! The provider redirects here after an OAuth hop with tokens in the URL
//! fragment. Resolving the session consumes them; the user then lands on
//! the dashboard, or back on `/auth` (with the error echoed in the query)
//! when the hand-off failed.

use leptos::prelude::*;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::auth::provider::ProviderHandle;

        let provider = expect_context::<ProviderHandle>();
        let navigate = use_navigate();
        Effect::new(move || {
            let resolve = provider.get_session();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let replace = NavigateOptions { replace: true, ..NavigateOptions::default() };
                match resolve.await {
                    Ok(Some(_)) => navigate("/dashboard", replace),
                    Ok(None) => navigate("/auth", replace),
                    Err(message) => {
                        error.set(Some(message.clone()));
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        let encoded = String::from(js_sys::encode_uri_component(&message));
                        navigate(&format!("/auth?error={encoded}"), replace);
                    }
                }
            });
        });
    }

    view! {
        <div class="callback-page">
            <Show
                when=move || error.get().is_some()
                fallback=|| {
                    view! {
                        <div class="callback-page__panel">
                            <div class="spinner"></div>
                            <h2>"Completing sign in..."</h2>
                            <p class="callback-page__hint">"Please wait while we set up your account"</p>
                        </div>
                    }
                }
            >
                <div class="callback-page__panel callback-page__panel--error">
                    <h2>"Authentication Error"</h2>
                    <p>{move || error.get().unwrap_or_default()}</p>
                    <p class="callback-page__hint">"Redirecting you back..."</p>
                </div>
            </Show>
        </div>
    }
}
