//! Authenticated layout chrome: sidebar navigation, top bar, user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every `/dashboard` screen. Reads the session store for the user
//! menu and owns the sign-out flow (provider sign-out, store clear, hard
//! navigation back to the landing page).

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::provider::ProviderHandle;
use crate::components::mobile_nav::MobileNav;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Navigation entries shared by the sidebar and the mobile drawer.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Settings", "/dashboard/settings"),
    ("Help", "/dashboard/help"),
];

#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    // StoredValue keeps the menu handlers Copy for use inside `Show`.
    let provider = StoredValue::new(expect_context::<ProviderHandle>());
    let location = use_location();

    let menu_open = RwSignal::new(false);

    let pathname = location.pathname;
    let current_path = move || pathname.get();
    let display_name = move || {
        auth.get()
            .identity
            .map_or_else(|| "User".to_owned(), |i| i.display_name())
    };
    let initials = move || auth.get().identity.map_or_else(|| "U".to_owned(), |i| i.initials());
    let email = move || auth.get().identity.and_then(|i| i.email).unwrap_or_default();

    let on_sign_out = move |_| {
        menu_open.set(false);
        let sign_out = provider.get_value().sign_out();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            sign_out.await;
            auth.update(AuthState::clear_identity);
            crate::util::browser::set_location("/");
        });
        #[cfg(not(feature = "hydrate"))]
        drop(sign_out);
    };

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <a class="shell__logo" href="/dashboard">
                    <span class="logo-mark">"R"</span>
                    "RAG SaaS"
                </a>
                <nav class="shell__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            let href = *href;
                            view! {
                                <a
                                    class="shell__nav-link"
                                    class:shell__nav-link--current=move || current_path() == href
                                    href=href
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>

            <div class="shell__main">
                <header class="shell__topbar">
                    <button
                        class="btn shell__menu-toggle"
                        on:click=move |_| ui.update(|u| u.mobile_nav_open = !u.mobile_nav_open)
                        title="Menu"
                    >
                        "☰"
                    </button>

                    <span class="shell__spacer"></span>

                    <button
                        class="btn shell__dark-toggle"
                        on:click=move |_| {
                            let next = dark_mode::toggle(ui.get().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>

                    <div class="shell__user">
                        <button class="shell__avatar" on:click=move |_| menu_open.update(|open| *open = !*open)>
                            {initials}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="shell__user-menu">
                                <p class="shell__user-name">{display_name}</p>
                                <p class="shell__user-email">{email}</p>
                                <div class="shell__user-divider"></div>
                                <button class="shell__user-item" on:click=on_sign_out>
                                    "Sign out"
                                </button>
                            </div>
                        </Show>
                    </div>
                </header>

                <MobileNav/>

                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
