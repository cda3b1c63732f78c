//! Card representing one uploaded document on the chatbot detail screen.

use leptos::prelude::*;

#[component]
pub fn DocumentCard(
    name: &'static str,
    size: &'static str,
    pages: u32,
    uploaded_at: &'static str,
    processed: bool,
) -> impl IntoView {
    view! {
        <div class="card document-card">
            <div class="document-card__body">
                <h4 class="document-card__name">{name}</h4>
                <p class="document-card__meta">{size} " · " {pages} " pages · uploaded " {uploaded_at}</p>
            </div>
            <span class="badge" class:badge--pending=!processed>
                {if processed { "Processed" } else { "Processing…" }}
            </span>
        </div>
    }
}
