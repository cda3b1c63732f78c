//! Chatbot detail screen: documents, analytics, and settings tabs.
//!
//! Everything shown here is fixture data; the upload button and save
//! actions simulate their flows without persisting anything.

#[cfg(test)]
#[path = "chatbot_detail_test.rs"]
mod chatbot_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::create_chatbot_form::MODELS;
use crate::components::dashboard_shell::DashboardShell;
use crate::components::document_card::DocumentCard;
use crate::data::mock;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DetailTab {
    #[default]
    Documents,
    Analytics,
    Settings,
}

/// Bar height for the queries-over-time chart, as a percentage of the
/// series maximum.
pub fn bar_height_percent(value: u32, series: &[u32]) -> u32 {
    let max = series.iter().copied().max().unwrap_or(0);
    if max == 0 { 0 } else { value * 100 / max }
}

#[component]
pub fn ChatbotDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    install_unauth_redirect(auth, navigate.clone());

    let chatbot = move || mock::chatbot_by_id(&params.get().get("id").unwrap_or_default());

    let tab = RwSignal::new(DetailTab::default());
    let uploading = RwSignal::new(false);
    let copied = RwSignal::new(false);
    let saved = RwSignal::new(false);

    // Settings form, prefilled from the fixture.
    let name = RwSignal::new(chatbot().name.to_owned());
    let description = RwSignal::new(chatbot().description.to_owned());
    let model = RwSignal::new("gemini-pro".to_owned());
    let temperature = RwSignal::new("0.7".to_owned());
    let max_tokens = RwSignal::new("1024".to_owned());
    let active = RwSignal::new(chatbot().active);

    let on_upload = move |_| {
        if uploading.get() {
            return;
        }
        uploading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Simulated processing delay; nothing is stored.
            gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
            uploading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        uploading.set(false);
    };

    let on_copy_embed = move |_| {
        crate::util::browser::copy_to_clipboard(mock::EMBED_CODE);
        copied.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            copied.set(false);
        });
    };

    let on_save = move |_| {
        saved.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            saved.set(false);
        });
    };

    let preview_navigate = navigate.clone();
    let on_preview = move |_| {
        let id = chatbot().id;
        preview_navigate(&format!("/dashboard/chatbots/{id}/preview"), NavigateOptions::default());
    };

    let processed_count = mock::DOCUMENTS.iter().filter(|d| d.processed).count();

    view! {
        <DashboardShell>
            <a class="page-back" href="/dashboard">
                "← Back to chatbots"
            </a>

            <div class="page-header">
                <div>
                    <h1>
                        {move || chatbot().name}
                        <span class="badge" class:badge--muted=move || !chatbot().active>
                            {move || if chatbot().active { "Active" } else { "Inactive" }}
                        </span>
                    </h1>
                    <p class="page-header__subtitle">{move || chatbot().description}</p>
                </div>
                <button class="btn" on:click=on_preview>
                    "Preview Chatbot"
                </button>
            </div>

            <div class="stat-grid">
                <div class="card stat-card">
                    <p class="stat-card__label">"Total Queries"</p>
                    <p class="stat-card__value">{move || chatbot().queries}</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-card__label">"Documents"</p>
                    <p class="stat-card__value">{move || chatbot().documents}</p>
                    <p class="stat-card__hint">{processed_count} " processed"</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-card__label">"Response Rate"</p>
                    <p class="stat-card__value">{mock::ANALYTICS.response_rate} "%"</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-card__label">"Last Updated"</p>
                    <p class="stat-card__value stat-card__value--small">{move || chatbot().last_updated}</p>
                </div>
            </div>

            <div class="tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--current=move || tab.get() == DetailTab::Documents
                    on:click=move |_| tab.set(DetailTab::Documents)
                >
                    "Documents"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--current=move || tab.get() == DetailTab::Analytics
                    on:click=move |_| tab.set(DetailTab::Analytics)
                >
                    "Analytics"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--current=move || tab.get() == DetailTab::Settings
                    on:click=move |_| tab.set(DetailTab::Settings)
                >
                    "Settings"
                </button>
            </div>

            <Show when=move || tab.get() == DetailTab::Documents>
                <div class="tab-panel">
                    <div class="tab-panel__header">
                        <h2>"Documents"</h2>
                        <button class="btn btn--primary" on:click=on_upload disabled=move || uploading.get()>
                            {move || if uploading.get() { "Uploading..." } else { "Upload Document" }}
                        </button>
                    </div>
                    <div class="document-list">
                        {mock::DOCUMENTS
                            .iter()
                            .map(|d| {
                                view! {
                                    <DocumentCard
                                        name=d.name
                                        size=d.size
                                        pages=d.pages
                                        uploaded_at=d.uploaded_at
                                        processed=d.processed
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>

            <Show when=move || tab.get() == DetailTab::Analytics>
                <div class="tab-panel">
                    <h2>"Queries over time"</h2>
                    <div class="bar-chart">
                        {mock::ANALYTICS
                            .queries_over_time
                            .iter()
                            .map(|value| {
                                let height = bar_height_percent(*value, mock::ANALYTICS.queries_over_time);
                                view! {
                                    <div
                                        class="bar-chart__bar"
                                        style:height=format!("{height}%")
                                        title=value.to_string()
                                    ></div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <h2>"Top queries"</h2>
                    <ul class="top-queries">
                        {mock::ANALYTICS
                            .top_queries
                            .iter()
                            .map(|(query, count)| {
                                view! {
                                    <li class="top-queries__row">
                                        <span>{*query}</span>
                                        <span class="top-queries__count">{*count}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>

                    <p class="tab-panel__footnote">
                        "Average response time: " {mock::ANALYTICS.average_response_time}
                    </p>
                </div>
            </Show>

            <Show when=move || tab.get() == DetailTab::Settings>
                <div class="tab-panel">
                    <h2>"Chatbot Settings"</h2>
                    <Show when=move || saved.get()>
                        <p class="banner banner--success">"Settings saved."</p>
                    </Show>
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
                        "Description"
                        <textarea
                            class="field__input"
                            rows="2"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="field">
                        "Model"
                        <select class="field__input" on:change=move |ev| model.set(event_target_value(&ev))>
                            {MODELS
                                .iter()
                                .map(|(value, label)| {
                                    let value = *value;
                                    view! {
                                        <option value=value selected=move || model.get() == value>
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            "Temperature"
                            <input
                                class="field__input"
                                type="number"
                                min="0"
                                max="1"
                                step="0.1"
                                prop:value=move || temperature.get()
                                on:input=move |ev| temperature.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Max Tokens"
                            <input
                                class="field__input"
                                type="number"
                                min="1"
                                prop:value=move || max_tokens.get()
                                on:input=move |ev| max_tokens.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |_| active.update(|a| *a = !*a)
                        />
                        "Chatbot active"
                    </label>

                    <h3>"Embed code"</h3>
                    <pre class="embed-code">{mock::EMBED_CODE}</pre>
                    <div class="tab-panel__actions">
                        <button class="btn" on:click=on_copy_embed>
                            {move || if copied.get() { "Copied!" } else { "Copy Embed Code" }}
                        </button>
                        <button class="btn btn--primary" on:click=on_save>
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </Show>
        </DashboardShell>
    }
}
