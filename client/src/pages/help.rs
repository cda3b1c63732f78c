//! Help screen: FAQ accordion, guides, and support contact.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_shell::DashboardShell;
use crate::data::mock;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn HelpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let open_faq = RwSignal::new(None::<usize>);

    view! {
        <DashboardShell>
            <div class="page-header">
                <div>
                    <h1>"Help & Support"</h1>
                    <p class="page-header__subtitle">"Answers, guides, and a human when you need one"</p>
                </div>
            </div>

            <h2>"Frequently asked questions"</h2>
            <div class="accordion">
                {mock::HELP_FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, faq)| {
                        view! {
                            <div class="accordion__item">
                                <button
                                    class="accordion__question"
                                    on:click=move |_| {
                                        open_faq.update(|open| {
                                            *open = if *open == Some(index) { None } else { Some(index) };
                                        });
                                    }
                                >
                                    {faq.question}
                                    <span class="accordion__chevron">
                                        {move || if open_faq.get() == Some(index) { "−" } else { "+" }}
                                    </span>
                                </button>
                                <Show when=move || open_faq.get() == Some(index)>
                                    <p class="accordion__answer">{faq.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <h2>"Guides"</h2>
            <div class="card-grid">
                {mock::GUIDES
                    .iter()
                    .map(|guide| {
                        view! {
                            <div class="card guide-card">
                                <span class="badge">{guide.tag}</span>
                                <h3>{guide.title}</h3>
                                <p>{guide.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="card support-card">
                <h3>"Still stuck?"</h3>
                <p>"Our support team replies within one business day."</p>
                <a class="btn btn--primary" href="mailto:support@ragsaas.com">
                    "Contact Support"
                </a>
            </div>
        </DashboardShell>
    }
}
