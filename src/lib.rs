//! Medinova chat relay: wraps a user's message in the Medinova prompt,
//! forwards it to Gemini and returns the generated reply.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use config::Config;
use state::AppState;

/// Upper bound on how often idle conversations are swept.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Serve the relay until Ctrl-C.
pub async fn run(config: Config) -> std::io::Result<()> {
    let state = Arc::new(AppState::from_config(&config));

    let sweep_every = config.conversation_ttl.clamp(Duration::from_secs(1), MAX_SWEEP_INTERVAL);
    let sweeper = state.tracker.spawn_sweeper(sweep_every);

    let app = routes::create_router(&config.static_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
