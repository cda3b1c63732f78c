//! Account settings screen with tabbed sections.
//!
//! Profile, API key, appearance, and notification values are local form
//! state only; Save flashes a confirmation without persisting.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_shell::DashboardShell;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::guard::install_unauth_redirect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Account,
    ApiKeys,
    Appearance,
    Notifications,
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let tab = RwSignal::new(SettingsTab::default());
    let saved = RwSignal::new(false);

    let initial_name = auth
        .get_untracked()
        .identity
        .as_ref()
        .map_or_else(String::new, models::Identity::display_name);
    let initial_email = auth
        .get_untracked()
        .identity
        .and_then(|i| i.email)
        .unwrap_or_default();

    let name = RwSignal::new(initial_name);
    let email = RwSignal::new(initial_email);
    let api_key = RwSignal::new("ai-xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx".to_owned());
    let show_api_key = RwSignal::new(false);
    let email_notifications = RwSignal::new(true);
    let marketing_emails = RwSignal::new(false);

    // Identity resolves after first render; refill untouched fields once.
    Effect::new(move || {
        if let Some(identity) = auth.get().identity {
            if name.get_untracked().is_empty() {
                name.set(identity.display_name());
            }
            if email.get_untracked().is_empty() {
                email.set(identity.email.unwrap_or_default());
            }
        }
    });

    let on_save = move |_| {
        saved.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            saved.set(false);
        });
    };

    let tab_button = move |label: &'static str, target: SettingsTab| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--current=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <DashboardShell>
            <div class="page-header">
                <div>
                    <h1>"Settings"</h1>
                    <p class="page-header__subtitle">"Manage your account settings and preferences"</p>
                </div>
            </div>

            <div class="tabs">
                {tab_button("Account", SettingsTab::Account)}
                {tab_button("API Keys", SettingsTab::ApiKeys)}
                {tab_button("Appearance", SettingsTab::Appearance)}
                {tab_button("Notifications", SettingsTab::Notifications)}
            </div>

            <Show when=move || saved.get()>
                <p class="banner banner--success">"Settings saved."</p>
            </Show>

            <Show when=move || tab.get() == SettingsTab::Account>
                <div class="tab-panel">
                    <h2>"Profile"</h2>
                    <label class="field">
                        "Name"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Email"
                        <input
                            class="field__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <p class="field__hint">
                        "Password changes go through the reset flow on the sign-in screen."
                    </p>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save Changes"
                    </button>
                </div>
            </Show>

            <Show when=move || tab.get() == SettingsTab::ApiKeys>
                <div class="tab-panel">
                    <h2>"Gemini API Key"</h2>
                    <p class="field__hint">"Used to answer questions against your documents."</p>
                    <div class="field__password">
                        <input
                            class="field__input"
                            type=move || if show_api_key.get() { "text" } else { "password" }
                            prop:value=move || api_key.get()
                            on:input=move |ev| api_key.set(event_target_value(&ev))
                        />
                        <button
                            class="field__password-toggle"
                            type="button"
                            on:click=move |_| show_api_key.update(|show| *show = !*show)
                        >
                            {move || if show_api_key.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save Key"
                    </button>
                </div>
            </Show>

            <Show when=move || tab.get() == SettingsTab::Appearance>
                <div class="tab-panel">
                    <h2>"Theme"</h2>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || ui.get().dark_mode
                            on:change=move |_| {
                                let next = dark_mode::toggle(ui.get().dark_mode);
                                ui.update(|u| u.dark_mode = next);
                            }
                        />
                        "Dark mode"
                    </label>
                </div>
            </Show>

            <Show when=move || tab.get() == SettingsTab::Notifications>
                <div class="tab-panel">
                    <h2>"Notifications"</h2>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || email_notifications.get()
                            on:change=move |_| email_notifications.update(|v| *v = !*v)
                        />
                        "Email notifications about chatbot activity"
                    </label>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || marketing_emails.get()
                            on:change=move |_| marketing_emails.update(|v| *v = !*v)
                        />
                        "Product updates and marketing emails"
                    </label>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save Preferences"
                    </button>
                </div>
            </Show>
        </DashboardShell>
    }
}
