//! Card representing one chatbot on the dashboard grid.

use leptos::prelude::*;

#[component]
pub fn ChatbotCard(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    documents: u32,
    queries: u32,
    last_updated: &'static str,
    active: bool,
    on_open: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="card chatbot-card" on:click=move |_| on_open.run(id)>
            <div class="chatbot-card__header">
                <h3 class="chatbot-card__name">{name}</h3>
                <span class="badge" class:badge--muted=!active>
                    {if active { "Active" } else { "Inactive" }}
                </span>
            </div>
            <p class="chatbot-card__description">{description}</p>
            <div class="chatbot-card__stats">
                <span>{documents} " documents"</span>
                <span>{queries} " queries"</span>
            </div>
            <p class="chatbot-card__updated">"Updated " {last_updated}</p>
        </div>
    }
}
