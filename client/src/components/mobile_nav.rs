//! Slide-over navigation drawer for small screens.

use leptos::prelude::*;

use crate::components::dashboard_shell::NAV_ITEMS;
use crate::state::ui::UiState;

#[component]
pub fn MobileNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move |_| ui.update(|u| u.mobile_nav_open = false);

    view! {
        <Show when=move || ui.get().mobile_nav_open>
            <div class="mobile-nav" on:click=close>
                <nav class="mobile-nav__panel" on:click=move |ev| ev.stop_propagation()>
                    <button class="btn mobile-nav__close" on:click=close>
                        "✕"
                    </button>
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a class="mobile-nav__link" href=*href on:click=close>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </div>
        </Show>
    }
}
