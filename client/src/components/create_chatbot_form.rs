//! Create-chatbot dialog form.
//!
//! Creation is cosmetic (the dashboard renders fixtures) but the form
//! still validates and reports a draft so the dialog flow behaves like the
//! real thing.

#[cfg(test)]
#[path = "create_chatbot_form_test.rs"]
mod create_chatbot_form_test;

use leptos::prelude::*;

/// Models offered in the create dialog.
pub const MODELS: &[(&str, &str)] = &[
    ("gemini-pro", "Gemini Pro"),
    ("gemini-pro-vision", "Gemini Pro Vision"),
    ("gemini-ultra", "Gemini Ultra"),
];

/// Values collected by the create-chatbot form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatbotDraft {
    pub name: String,
    pub description: String,
    pub model: String,
}

/// Validate and normalize the draft before submission.
pub fn validate_draft(name: &str, description: &str, model: &str) -> Result<ChatbotDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    Ok(ChatbotDraft {
        name: name.to_owned(),
        description: description.trim().to_owned(),
        model: model.to_owned(),
    })
}

#[component]
pub fn CreateChatbotForm(on_submit: Callback<ChatbotDraft>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let model = RwSignal::new("gemini-pro".to_owned());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_draft(&name.get(), &description.get(), &model.get()) {
            Ok(draft) => {
                error.set(None);
                on_submit.run(draft);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="chatbot-form" on:submit=submit>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <label class="field">
                "Name"
                <input
                    class="field__input"
                    type="text"
                    placeholder="My Awesome Chatbot"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Description"
                <textarea
                    class="field__input"
                    rows="3"
                    placeholder="This chatbot helps users with..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                "Model"
                <select
                    class="field__input"
                    on:change=move |ev| model.set(event_target_value(&ev))
                >
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
                <span class="field__hint">"Select the AI model that will power your chatbot"</span>
            </label>
            <div class="dialog__actions">
                <button class="btn btn--primary" type="submit">
                    "Create Chatbot"
                </button>
            </div>
        </form>
    }
}
