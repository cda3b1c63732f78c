//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::gotrue::GoTrueProvider;
use crate::auth::listener::AuthListener;
use crate::pages::auth::AuthPage;
use crate::pages::auth_callback::AuthCallbackPage;
use crate::pages::chatbot_detail::ChatbotDetailPage;
use crate::pages::chatbot_preview::ChatbotPreviewPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::help::HelpPage;
use crate::pages::landing::LandingPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::settings::SettingsPage;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Inline script exposing the auth provider's project coordinates to the
/// browser. Rendered by the server only; the values come from its
/// environment.
fn provider_env_script() -> String {
    #[cfg(feature = "ssr")]
    {
        use crate::auth::gotrue::{ANON_KEY_GLOBAL, URL_GLOBAL};

        let url = std::env::var("SUPABASE_URL").unwrap_or_default();
        let anon_key = std::env::var("SUPABASE_ANON_KEY").unwrap_or_default();
        format!(
            "window.{URL_GLOBAL} = {}; window.{ANON_KEY_GLOBAL} = {};",
            serde_json::to_string(&url).unwrap_or_default(),
            serde_json::to_string(&anon_key).unwrap_or_default(),
        )
    }
    #[cfg(not(feature = "ssr"))]
    {
        String::new()
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=provider_env_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, UI state, and auth provider contexts, mounts
/// the auth listener once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(GoTrueProvider::handle());

    // Apply the persisted theme once the browser is in charge.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ragsaas.css"/>
        <Title text="RAG SaaS - Turn Your Documents into Smart AI Chatbots"/>
        <Meta
            name="description"
            content="Upload PDFs, TXTs, or Markdown, then ask questions and get context-aware answers powered by Gemini AI."
        />

        <AuthListener/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("reset-password")) view=ResetPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("settings")) view=SettingsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("help")) view=HelpPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("chatbots"), ParamSegment("id"))
                    view=ChatbotDetailPage
                />
                <Route
                    path=(
                        StaticSegment("dashboard"),
                        StaticSegment("chatbots"),
                        ParamSegment("id"),
                        StaticSegment("preview"),
                    )
                    view=ChatbotPreviewPage
                />
            </Routes>
        </Router>
    }
}
