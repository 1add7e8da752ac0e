use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use svcmsg_infrastructure::config::ServerConfig;
use svcmsg_infrastructure::logging::{get_log_dir, init_logger};

use crate::presentation::{build_router, AppState};

pub async fn start_server() -> Result<()> {
    let config = ServerConfig::load().context("Invalid server configuration")?;

    if let Err(e) = init_logger(config.log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    if let Some(dir) = get_log_dir() {
        info!("Writing JSON logs to {}", dir.display());
    }

    info!("Initializing state...");
    let state = AppState::from_server_config(&config)?;
    let app = build_router(state);

    let address = config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
