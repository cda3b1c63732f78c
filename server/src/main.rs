#![recursion_limit = "256"]

mod middleware;
mod provider;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = provider::ProviderConfig::from_env().expect("SUPABASE_URL and SUPABASE_ANON_KEY required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let verifier = Arc::new(provider::GoTrueClient::new(config));
    let state = state::AppState::new(verifier, middleware::cookie_secure());

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ragsaas listening");
    axum::serve(listener, app).await.expect("server failed");
}
