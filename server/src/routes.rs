//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health endpoint, Leptos SSR rendering, and static assets under
//! a single Axum router, with the session-refresh middleware layered over
//! everything (it bypasses itself for non-protected paths).

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::refresh_session;
use crate::state::AppState;

/// Full application router: Leptos SSR + `/pkg` assets + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(axum::middleware::from_fn_with_state(state, refresh_session))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
