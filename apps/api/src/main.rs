//! HRDesk API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod auth;
mod dto;
mod error;
mod handlers;
mod middleware;
mod route_access;
mod state;

use hrdesk_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StorageBackend, init_tracing};
use crate::api_services::{
    HrRepositorySet, build_app_state, build_memory_session_layer, build_postgres_session_layer,
    connect_and_migrate,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let address = config.socket_address()?;

    let app = match &config.storage {
        StorageBackend::Postgres { database_url } => {
            let pool = connect_and_migrate(database_url).await?;

            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            let session_layer =
                build_postgres_session_layer(pool.clone(), config.cookie_secure).await?;
            let app_state = build_app_state(HrRepositorySet::postgres(&pool), &config);
            api_router::build_router(app_state)?.layer(session_layer)
        }
        StorageBackend::Memory => {
            info!("using in-memory storage; data is lost on shutdown");
            let session_layer = build_memory_session_layer(config.cookie_secure);
            let app_state = build_app_state(HrRepositorySet::in_memory(), &config);
            api_router::build_router(app_state)?.layer(session_layer)
        }
    };

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "hrdesk-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
