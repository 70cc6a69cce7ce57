//! Service lifecycle: bind, serve, and graceful shutdown.
//!
//! A [`Server`] owns its listener and router. Nothing is started until
//! [`Server::bind`] is called, and serving stops once the shutdown future
//! passed to [`Server::serve_with_shutdown`] resolves.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;

pub struct Server {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl Server {
    /// Resolve the configured address, build the router and bind the listener.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for an unparseable host and `AppError::Bind`
    /// if the socket cannot be bound.
    pub async fn bind(config: Config) -> AppResult<Self> {
        let addr = config.bind_address()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| AppError::Bind { addr, source })?;

        let router = routes::build_router();

        tracing::info!(address = %local_addr, "Listener bound");
        Ok(Self {
            listener,
            router,
            local_addr,
        })
    }

    /// Address the listener is actually bound to (resolves port 0).
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until SIGINT or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Serve` on an I/O failure of the accept loop.
    pub async fn serve(self) -> AppResult<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Serve` on an I/O failure of the accept loop.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(address = %self.local_addr, "Starting server");
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(AppError::Serve)?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
