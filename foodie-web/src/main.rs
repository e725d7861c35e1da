use std::net::SocketAddr;

use anyhow::Context;
use foodie_web::{AppState, Config, build_app, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        backend = %config.backend.api_base(),
        "Foodie web starting..."
    );

    // 2. State and router
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let state = AppState::new(config).context("failed to build backend client")?;
    let app = build_app(state);

    // 3. Serve until ctrl-c
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            }
            tracing::info!("Shutting down...");
        })
        .await
        .context("server error")?;

    Ok(())
}
