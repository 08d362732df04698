//! API Library
//!
//! The backend HTTP process. Configuration is validated before anything
//! else happens; a process with an invalid environment never binds a port.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::{AppConfig, ServerConfig};
use notification_service_lib::{Database, NotificationManager, NotificationStore};

use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with an already validated configuration.
pub async fn run_server(
    config: AppConfig,
    server: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Connect to MongoDB
    let db = Database::connect(&config.mongodb_uri).await?;

    // Create repository and service
    let repo = Arc::new(NotificationStore::new(&db));
    let notifications = Arc::new(NotificationManager::new(repo));

    // Create app state
    let state = AppState::new(notifications, Arc::new(db));

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = server.addr().parse()?;
    info!("API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
