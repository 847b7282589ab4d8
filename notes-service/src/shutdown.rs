/// Signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Interrupt,
    Terminate,
}

/// Resolves once the process is asked to stop, so `axum::serve` can drain
/// in-flight requests.
///
/// A signal handler that cannot be installed is logged and never fires; the
/// other one still works.
pub async fn shutdown_signal() {
    let reason = wait_for_signal().await;
    tracing::info!(?reason, "Stopping notes-service, draining in-flight requests");
}

async fn wait_for_signal() -> ShutdownReason {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => ShutdownReason::Interrupt,
        () = terminate => ShutdownReason::Terminate,
    }
}
