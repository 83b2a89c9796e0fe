mod config;
mod rate_limit;
mod routes;
mod state;
mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use upstream::ChatUpstream;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    // Proxy is optional: `/api/chat` answers 503 until it is configured.
    let upstream: Option<Arc<dyn ChatUpstream>> = match config::UpstreamConfig::from_env() {
        Ok(cfg) => match upstream::AnythingLlmClient::new(cfg) {
            Ok(client) => {
                tracing::info!(base_url = client.base_url(), "chat proxy enabled");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat proxy client failed to build; proxy disabled");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "chat proxy not configured; proxy disabled");
            None
        }
    };

    let state = state::AppState::new(upstream, rate_limit::RateLimiter::new());

    let app = routes::app(state).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "dcr-server listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
