//! # HTTP Service
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | /employees | GET | list all |
//! | /employees | POST | create |
//! | /employees/{id} | GET | view one |
//! | /employees/search_by_key/search | GET | search by firstName, lastName, email, role |
//! | /employees/{id} | PATCH | partial update |
//! | /employees/{id} | DELETE | delete |
//! | /health | GET | liveness |
//!
//! Store calls do synchronous file I/O, so they run on tokio's blocking pool.
//! Nothing serializes them against each other.

pub mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api::RosterApi;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::fs::CsvStore;
use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    api: Arc<RosterApi<CsvStore>>,
}

impl AppState {
    pub fn new(store: CsvStore) -> Self {
        Self {
            api: Arc::new(RosterApi::new(store)),
        }
    }

    /// Run one API call on the blocking pool, logging failures in the
    /// caller's span.
    async fn call<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&RosterApi<CsvStore>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let outcome = tokio::task::spawn_blocking(move || f(&api))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Store task failed");
                AppError::Internal(e.to_string())
            })?;

        outcome.map_err(|e| {
            match &e {
                RosterError::NotFound(_) => tracing::warn!(error = %e, "Employee not found"),
                _ => tracing::error!(error = %e, "Store operation failed"),
            }
            AppError::from(e)
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/employees", get(handlers::list).post(handlers::create))
        .route("/employees/search_by_key/search", get(handlers::search))
        .route(
            "/employees/{id}",
            get(handlers::get_by_id)
                .patch(handlers::update)
                .delete(handlers::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &RosterConfig) -> Result<()> {
    let state = AppState::new(CsvStore::new(&config.data_file));
    let app = router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        data_file = %config.data_file.display(),
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
