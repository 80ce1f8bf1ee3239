// File: services/tripholiday_backend/src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tripholiday_backend::{build_router, AppState};
use tripholiday_common::logging;
use tripholiday_config::{load_config, redacted};
use tripholiday_db::DbClientFactory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Arc::new(load_config()?);
    info!("Loaded configuration: {}", redacted(&config));

    let repositories = DbClientFactory::new().repositories(&config).await?;
    let state = AppState::new(config.clone(), repositories)?;
    let app = build_router(&state);

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);
    info!("API: http://{}/api", addr);
    info!("API docs: http://{}/api/docs", addr);
    if config.server.admin_dir.is_some() {
        info!("Admin panel: http://{}/admin", addr);
    }

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
