//! Dashboard page listing chatbots with stats, search, and create dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Chatbot records are rendering
//! fixtures; creation closes the dialog and navigates without persisting
//! anything.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chatbot_card::ChatbotCard;
use crate::components::create_chatbot_form::{ChatbotDraft, CreateChatbotForm};
use crate::components::dashboard_shell::DashboardShell;
use crate::data::mock::{self, Chatbot};
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

/// Case-insensitive filter over name and description.
pub fn filter_chatbots(query: &str) -> Vec<&'static Chatbot> {
    let needle = query.trim().to_lowercase();
    mock::CHATBOTS
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let total_chatbots = mock::CHATBOTS.len();
    let active_chatbots = mock::CHATBOTS.iter().filter(|c| c.active).count();
    let total_documents: u32 = mock::CHATBOTS.iter().map(|c| c.documents).sum();
    let total_queries: u32 = mock::CHATBOTS.iter().map(|c| c.queries).sum();

    let open_navigate = navigate.clone();
    let on_open = Callback::new(move |id: &'static str| {
        open_navigate(&format!("/dashboard/chatbots/{id}"), NavigateOptions::default());
    });

    let create_navigate = navigate.clone();
    let on_create = Callback::new(move |draft: ChatbotDraft| {
        log_created(&draft);
        show_create.set(false);
        // No persistence behind the dialog: land on the first fixture.
        create_navigate("/dashboard/chatbots/cb_1", NavigateOptions::default());
    });

    view! {
        <DashboardShell>
            <Show
                when=move || !auth.get().loading
                fallback=move || view! { <p class="page-loading">"Loading..."</p> }
            >
                <div class="page-header">
                    <div>
                        <h1>"Chatbots"</h1>
                        <p class="page-header__subtitle">"Create and manage your AI chatbots"</p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Create Chatbot"
                    </button>
                </div>

                <div class="stat-grid">
                    <div class="card stat-card">
                        <p class="stat-card__label">"Total Chatbots"</p>
                        <p class="stat-card__value">{total_chatbots}</p>
                    </div>
                    <div class="card stat-card">
                        <p class="stat-card__label">"Active Chatbots"</p>
                        <p class="stat-card__value">{active_chatbots}</p>
                    </div>
                    <div class="card stat-card">
                        <p class="stat-card__label">"Total Documents"</p>
                        <p class="stat-card__value">{total_documents}</p>
                    </div>
                    <div class="card stat-card">
                        <p class="stat-card__label">"Total Queries"</p>
                        <p class="stat-card__value">{total_queries}</p>
                    </div>
                </div>

                <input
                    class="field__input dashboard-search"
                    type="search"
                    placeholder="Search chatbots..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <div class="card-grid">
                    {move || {
                        let matches = filter_chatbots(&search.get());
                        if matches.is_empty() {
                            view! { <p class="card-grid__empty">"No chatbots match your search."</p> }.into_any()
                        } else {
                            matches
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <ChatbotCard
                                            id=c.id
                                            name=c.name
                                            description=c.description
                                            documents=c.documents
                                            queries=c.queries
                                            last_updated=c.last_updated
                                            active=c.active
                                            on_open=on_open
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>

                <Show when=move || show_create.get()>
                    <div class="dialog-backdrop" on:click=move |_| show_create.set(false)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Create New Chatbot"</h2>
                            <p class="dialog__description">
                                "Create a new AI chatbot trained on your documents. You can add documents after creating the chatbot."
                            </p>
                            <CreateChatbotForm on_submit=on_create/>
                        </div>
                    </div>
                </Show>
            </Show>
        </DashboardShell>
    }
}

fn log_created(draft: &ChatbotDraft) {
    #[cfg(feature = "hydrate")]
    log::info!("creating chatbot {:?} ({})", draft.name, draft.model);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
    }
}
