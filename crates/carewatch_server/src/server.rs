//! Server lifecycle.

use crate::{create_router, AppState, CarewatchConfig};
use carewatch_error::{CarewatchResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;

/// Run the service until interrupted.
///
/// # Errors
///
/// Returns an error if the upload directory cannot be created, the address
/// cannot be bound, or the server loop fails.
#[tracing::instrument(skip(config), fields(bind = %config.server.bind))]
pub async fn serve(config: CarewatchConfig) -> CarewatchResult<()> {
    let state = AppState::from_config(&config)?;
    let router = create_router(state);

    let listener = TcpListener::bind(&config.server.bind).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind(format!(
            "{}: {}",
            config.server.bind, e
        )))
    })?;
    let address = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| config.server.bind.clone());

    tracing::info!(
        address = %address,
        upload_dir = %config.storage.upload_dir.display(),
        speech_program = %config.speech.program.display(),
        "Carewatch listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    tracing::info!("Carewatch stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
