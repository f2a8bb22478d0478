use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use users_api::config::{AppEnv, Env, ServerConfig};
use users_api::modules::user::InMemoryUserService;
use users_api::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env(&Env::real())?;
    init_tracing(config.env);

    tracing::info!(env = %config.env, "Starting users-api");

    let state = AppState::new(Arc::new(InMemoryUserService::new()));
    let app = server::app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(env: AppEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("users_api=debug,tower_http=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match env {
        AppEnv::Development => builder.pretty().init(),
        AppEnv::Production => builder.compact().init(),
    }
}
