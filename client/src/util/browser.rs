//! Small browser helpers with SSR-safe fallbacks.

/// Current page origin (`https://host`), or empty outside a browser.
#[must_use]
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Hard-navigate the window, bypassing the client router.
pub fn set_location(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Copy text to the system clipboard (best effort).
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
