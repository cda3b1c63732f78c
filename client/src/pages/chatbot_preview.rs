//! Chatbot preview: a canned conversation demonstrating the widget.
//!
//! Replies are simulated with a short delay and cycle through fixture
//! responses; no model is consulted.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::dashboard_shell::DashboardShell;
use crate::data::mock;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatMessage {
    role: Role,
    content: String,
}

#[component]
pub fn ChatbotPreviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    install_unauth_redirect(auth, navigate.clone());

    let chatbot = move || mock::chatbot_by_id(&params.get().get("id").unwrap_or_default());

    let messages = RwSignal::new(vec![ChatMessage {
        role: Role::Assistant,
        content: mock::PREVIEW_GREETING.to_owned(),
    }]);
    let input = RwSignal::new(String::new());
    let typing = RwSignal::new(false);
    let replies = RwSignal::new(0usize);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get().trim().to_owned();
        if text.is_empty() || typing.get() {
            return;
        }
        messages.update(|m| m.push(ChatMessage { role: Role::User, content: text }));
        input.set(String::new());
        typing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(1200)).await;
            let index = replies.get_untracked();
            replies.set(index + 1);
            messages.update(|m| {
                m.push(ChatMessage {
                    role: Role::Assistant,
                    content: mock::preview_response(index).to_owned(),
                });
            });
            typing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = replies;
            typing.set(false);
        }
    };

    view! {
        <DashboardShell>
            <a class="page-back" href=move || format!("/dashboard/chatbots/{}", chatbot().id)>
                "← Back to chatbot"
            </a>

            <div class="page-header">
                <div>
                    <h1>"Preview: " {move || chatbot().name}</h1>
                    <p class="page-header__subtitle">"Test how your chatbot responds before embedding it"</p>
                </div>
            </div>

            <div class="card chat">
                <div class="chat__messages">
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|message| {
                                let from_user = message.role == Role::User;
                                view! {
                                    <div class="chat__message" class:chat__message--user=from_user>
                                        <p>{message.content}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || typing.get()>
                        <div class="chat__message chat__typing">
                            <span>"·"</span>
                            <span>"·"</span>
                            <span>"·"</span>
                        </div>
                    </Show>
                </div>

                <form class="chat__composer" on:submit=on_submit>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Ask a question..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        disabled=move || typing.get()
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || typing.get()>
                        "Send"
                    </button>
                </form>
            </div>
        </DashboardShell>
    }
}
