//! Factory for creating database clients

use crate::client::DbClient;
use crate::error::DbError;
use crate::repository::Repositories;
use std::sync::Arc;
use tracing::debug;
use tripholiday_config::AppConfig;

/// Factory for creating database clients and the repository set on top of them.
#[derive(Debug, Clone, Default)]
pub struct DbClientFactory;

impl DbClientFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create a new database client from an application configuration.
    pub async fn from_app_config(&self, config: &Arc<AppConfig>) -> Result<DbClient, DbError> {
        debug!("Creating database client from application configuration");
        DbClient::new(config).await
    }

    /// Create a new database client from a database URL
    pub async fn from_url(&self, db_url: &str) -> Result<DbClient, DbError> {
        debug!("Creating database client from URL");
        DbClient::from_url(db_url).await
    }

    /// Connect and return the SQL repositories with their schemas in place.
    pub async fn repositories(&self, config: &Arc<AppConfig>) -> Result<Repositories, DbError> {
        let client = self.from_app_config(config).await?;
        let repositories = Repositories::sql(client);
        repositories.init_schema().await?;
        Ok(repositories)
    }
}
