//! HTTP server lifecycle.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api::{AppState, create_router};
use crate::error::{Result, ServerError};

/// The dockapi HTTP server.
pub struct ApiServer {
    state: AppState,
    addr: SocketAddr,
}

impl ApiServer {
    /// Creates a server listening on all interfaces at the configured port.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
        Self { state, addr }
    }

    /// Address the server binds to.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// In-flight requests are allowed to finish before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the accept loop
    /// fails.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr,
                source,
            })?;

        tracing::info!(addr = %self.addr, "starting dockapi");

        let app = create_router(self.state).into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                let _ = signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("received shutdown signal");
}
