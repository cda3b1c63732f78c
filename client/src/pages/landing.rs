//! Marketing landing page.
//!
//! Pure visual composition over fixture copy: hero, features,
//! how-it-works, demo conversation, pricing, testimonials, FAQ.

use leptos::prelude::*;

use crate::data::mock;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Rotating hero taglines.
const TAGLINES: &[&str] = &[
    "customer support that never sleeps",
    "an expert on your documentation",
    "answers grounded in your content",
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <LandingNav/>
            <HeroSection/>
            <FeatureSection/>
            <HowItWorksSection/>
            <DemoSection/>
            <PricingSection/>
            <TestimonialSection/>
            <FaqSection/>
            <footer class="landing-footer">
                <p>"© 2025 RAG SaaS. All rights reserved."</p>
            </footer>
        </div>
    }
}

#[component]
fn LandingNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="landing-nav">
            <a class="landing-nav__logo" href="/">
                <span class="logo-mark">"R"</span>
                "RAG SaaS"
            </a>
            <nav class="landing-nav__links">
                <a href="#features">"Features"</a>
                <a href="#how-it-works">"How it works"</a>
                <a href="#pricing">"Pricing"</a>
                <a href="#faq">"FAQ"</a>
            </nav>
            <div class="landing-nav__actions">
                <button
                    class="btn landing-nav__dark-toggle"
                    on:click=move |_| {
                        let next = dark_mode::toggle(ui.get().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn" href="/auth">
                                "Sign In"
                            </a>
                            <a class="btn btn--primary" href="/auth">
                                "Get Started"
                            </a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let tagline_index = RwSignal::new(0usize);

    // Rotate the tagline while the page is mounted.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(2800)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                tagline_index.update(|i| *i = (*i + 1) % TAGLINES.len());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="hero">
            <span class="badge hero__badge">"Powered by Gemini AI"</span>
            <h1 class="hero__title">
                "Turn your documents into "
                <span class="hero__gradient">"smart AI chatbots"</span>
            </h1>
            <p class="hero__tagline">
                "Give your visitors " {move || TAGLINES[tagline_index.get() % TAGLINES.len()]} "."
            </p>
            <p class="hero__subtitle">
                "Upload PDFs, TXTs, or Markdown, then ask questions and get context-aware answers — no pipeline to build, no infrastructure to run."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary btn--large" href="/auth">
                    "Start Free Trial"
                </a>
                <a class="btn btn--large" href="#demo">
                    "See It In Action"
                </a>
            </div>
            <p class="hero__note">"14-day free trial · No credit card required"</p>

            <div class="logo-strip">
                <span class="logo-strip__label">"Answering questions for teams at"</span>
                {["Fieldlight", "Brickroad Labs", "Northbeam", "Hexwave", "Loomworks"]
                    .iter()
                    .map(|name| view! { <span class="logo-strip__name">{*name}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureSection() -> impl IntoView {
    view! {
        <section class="section" id="features">
            <h2 class="section__title">"Everything you need to ship a document chatbot"</h2>
            <div class="card-grid card-grid--three">
                {mock::FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature-card">
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="section section--alt" id="how-it-works">
            <h2 class="section__title">"How it works"</h2>
            <div class="steps">
                {mock::HOW_IT_WORKS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <div class="steps__step">
                                <span class="steps__number">{index + 1}</span>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn DemoSection() -> impl IntoView {
    view! {
        <section class="section" id="demo">
            <h2 class="section__title">"Ask anything your documents can answer"</h2>
            <div class="card chat chat--demo">
                <div class="chat__messages">
                    <div class="chat__message chat__message--user">
                        <p>"What are the system requirements?"</p>
                    </div>
                    <div class="chat__message">
                        <p>
                            "The product supports Windows 10/11, macOS 10.15+, and Ubuntu 20.04+. You'll need at least 4GB RAM and 10GB of free disk space."
                        </p>
                    </div>
                    <div class="chat__message chat__message--user">
                        <p>"Is there a mobile app?"</p>
                    </div>
                    <div class="chat__message">
                        <p>"Yes — section 7.1 of the user guide covers installing the iOS and Android apps."</p>
                    </div>
                </div>
                <div class="chat__composer chat__composer--disabled">
                    <input class="field__input" type="text" placeholder="Ask a question..." disabled/>
                    <a class="btn btn--primary" href="/auth">
                        "Try it free"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    let annual = RwSignal::new(true);

    view! {
        <section class="section section--alt" id="pricing">
            <h2 class="section__title">"Simple, transparent pricing"</h2>
            <div class="pricing-toggle">
                <button class="tabs__tab" class:tabs__tab--current=move || !annual.get() on:click=move |_| annual.set(false)>
                    "Monthly"
                </button>
                <button class="tabs__tab" class:tabs__tab--current=move || annual.get() on:click=move |_| annual.set(true)>
                    "Annual (save 20%)"
                </button>
            </div>
            <div class="card-grid card-grid--four">
                {mock::PRICING_TIERS
                    .iter()
                    .map(|tier| {
                        view! {
                            <div class="card pricing-card" class:pricing-card--highlighted=tier.highlighted>
                                <h3>{tier.name}</h3>
                                <p class="pricing-card__price">
                                    {move || if annual.get() { tier.annual_price } else { tier.monthly_price }}
                                    <Show when=move || tier.monthly_price != "Custom">
                                        <span class="pricing-card__period">"/month"</span>
                                    </Show>
                                </p>
                                <p class="pricing-card__description">{tier.description}</p>
                                <ul class="pricing-card__features">
                                    {tier
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a class="btn" class:btn--primary=tier.highlighted href="/auth">
                                    {if tier.monthly_price == "Custom" { "Contact Sales" } else { "Get Started" }}
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialSection() -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section__title">"Teams already answering with their own docs"</h2>
            <div class="card-grid card-grid--three">
                {mock::TESTIMONIALS
                    .iter()
                    .map(|(quote, name, role)| {
                        view! {
                            <div class="card testimonial-card">
                                <p class="testimonial-card__quote">"“" {*quote} "”"</p>
                                <p class="testimonial-card__name">{*name}</p>
                                <p class="testimonial-card__role">{*role}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section class="section section--alt" id="faq">
            <h2 class="section__title">"Frequently asked questions"</h2>
            <div class="accordion">
                {mock::LANDING_FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, faq)| {
                        view! {
                            <div class="accordion__item">
                                <button
                                    class="accordion__question"
                                    on:click=move |_| {
                                        open.update(|current| {
                                            *current = if *current == Some(index) { None } else { Some(index) };
                                        });
                                    }
                                >
                                    {faq.question}
                                    <span class="accordion__chevron">
                                        {move || if open.get() == Some(index) { "−" } else { "+" }}
                                    </span>
                                </button>
                                <Show when=move || open.get() == Some(index)>
                                    <p class="accordion__answer">{faq.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
