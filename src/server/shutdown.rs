//! Graceful shutdown signal handling.

use tokio::signal;

/// Create a future that completes when a shutdown signal is received.
///
/// Listens for SIGINT (Ctrl+C) and, on unix, SIGTERM. Handed to
/// `axum::serve(...).with_graceful_shutdown` so in-flight requests drain
/// before the process exits.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}
