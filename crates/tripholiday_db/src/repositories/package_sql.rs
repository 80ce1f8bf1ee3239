//! SQL implementation of the package repository

use crate::error::{map_unique_violation, DbError};
use crate::repositories::package::{GroupCount, PackageFilter, PackageRepository, PackageStats};
use crate::repository::{decode_document, flag, format_timestamp, placeholders};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, info};
use tripholiday_common::models::Package;
use tripholiday_common::services::BoxFuture;

const ACTIVE_ORDER: &str = "ORDER BY popular DESC, price ASC";

/// SQL implementation of the package repository
#[derive(Debug, Clone)]
pub struct SqlPackageRepository {
    db_client: DbClient,
}

impl SqlPackageRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    async fn fetch_documents<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::Any, sqlx::any::AnyArguments<'q>>,
    ) -> Result<Vec<Package>, DbError> {
        let rows = query.fetch_all(self.db_client.pool()).await?;
        rows.iter().map(decode_document).collect()
    }

    async fn count(&self, sql: &str) -> Result<i64, DbError> {
        let row = sqlx::query(sql).fetch_one(self.db_client.pool()).await?;
        Ok(row.try_get::<i64, _>("count")?)
    }

    async fn group_count(&self, column: &str) -> Result<Vec<GroupCount>, DbError> {
        let sql = format!(
            "SELECT {column} AS group_key, COUNT(*) AS count FROM packages GROUP BY {column} ORDER BY {column}"
        );
        let rows = sqlx::query(&sql).fetch_all(self.db_client.pool()).await?;
        rows.iter()
            .map(|row| -> Result<GroupCount, DbError> {
                Ok(GroupCount {
                    key: row.try_get("group_key")?,
                    count: row.try_get("count")?,
                })
            })
            .collect()
    }
}

impl PackageRepository for SqlPackageRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing package schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS packages (
                    id TEXT PRIMARY KEY,
                    package_type TEXT NOT NULL,
                    destination TEXT NOT NULL,
                    travel TEXT NOT NULL,
                    price REAL NOT NULL,
                    popular INTEGER NOT NULL DEFAULT 0,
                    active INTEGER NOT NULL DEFAULT 1,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    document TEXT NOT NULL
                )
            "#;
            self.db_client.execute(query).await?;
            self.db_client
                .execute("CREATE INDEX IF NOT EXISTS idx_packages_listing ON packages (active, popular, price)")
                .await?;

            info!("Package schema initialized successfully");
            Ok(())
        })
    }

    fn insert<'a>(&'a self, package: &'a Package) -> BoxFuture<'a, (), DbError> {
        Box::pin(async move {
            debug!("Inserting package: {}", package.id);
            let document = serde_json::to_string(package)?;

            sqlx::query(
                r#"
                INSERT INTO packages
                    (id, package_type, destination, travel, price, popular, active, created_at, updated_at, document)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(package.id.as_str())
            .bind(package.package_type.as_str())
            .bind(package.destination.as_str())
            .bind(package.travel.as_str())
            .bind(package.price)
            .bind(flag(package.popular))
            .bind(flag(package.active))
            .bind(format_timestamp(&package.created_at))
            .bind(format_timestamp(&package.updated_at))
            .bind(document)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Package with this ID already exists"))?;
            Ok(())
        })
    }

    fn update<'a>(&'a self, package: &'a Package) -> BoxFuture<'a, bool, DbError> {
        Box::pin(async move {
            debug!("Updating package: {}", package.id);
            let document = serde_json::to_string(package)?;

            let result = sqlx::query(
                r#"
                UPDATE packages
                SET package_type = $1, destination = $2, travel = $3, price = $4,
                    popular = $5, active = $6, updated_at = $7, document = $8
                WHERE id = $9
                "#,
            )
            .bind(package.package_type.as_str())
            .bind(package.destination.as_str())
            .bind(package.travel.as_str())
            .bind(package.price)
            .bind(flag(package.popular))
            .bind(flag(package.active))
            .bind(format_timestamp(&package.updated_at))
            .bind(document)
            .bind(package.id.as_str())
            .execute(self.db_client.pool())
            .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<Package>, DbError> {
        Box::pin(async move {
            let row = sqlx::query("SELECT document FROM packages WHERE id = $1")
                .bind(id)
                .fetch_optional(self.db_client.pool())
                .await?;
            row.as_ref().map(decode_document).transpose()
        })
    }

    fn list_active(&self) -> BoxFuture<'_, Vec<Package>, DbError> {
        Box::pin(async move {
            let sql = format!("SELECT document FROM packages WHERE active = 1 {ACTIVE_ORDER}");
            self.fetch_documents(sqlx::query(&sql)).await
        })
    }

    fn list_active_by(&self, filter: PackageFilter) -> BoxFuture<'_, Vec<Package>, DbError> {
        Box::pin(async move {
            let sql = format!(
                "SELECT document FROM packages WHERE active = 1 AND {} = $1 {ACTIVE_ORDER}",
                filter.column()
            );
            self.fetch_documents(sqlx::query(&sql).bind(filter.value())).await
        })
    }

    fn list_active_by_ids<'a>(&'a self, ids: &'a [String]) -> BoxFuture<'a, Vec<Package>, DbError> {
        Box::pin(async move {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            let sql = format!(
                "SELECT document FROM packages WHERE active = 1 AND id IN ({}) {ACTIVE_ORDER}",
                placeholders(1, ids.len())
            );
            let mut query = sqlx::query(&sql);
            for id in ids {
                query = query.bind(id.as_str());
            }
            self.fetch_documents(query).await
        })
    }

    fn list_all(&self) -> BoxFuture<'_, Vec<Package>, DbError> {
        Box::pin(async move {
            self.fetch_documents(sqlx::query(
                "SELECT document FROM packages ORDER BY created_at DESC",
            ))
            .await
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, bool, DbError> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM packages WHERE id = $1")
                .bind(id)
                .execute(self.db_client.pool())
                .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn delete_all(&self) -> BoxFuture<'_, u64, DbError> {
        Box::pin(async move { self.db_client.execute("DELETE FROM packages").await })
    }

    fn stats(&self) -> BoxFuture<'_, PackageStats, DbError> {
        Box::pin(async move {
            Ok(PackageStats {
                total: self.count("SELECT COUNT(*) AS count FROM packages").await?,
                active: self
                    .count("SELECT COUNT(*) AS count FROM packages WHERE active = 1")
                    .await?,
                popular: self
                    .count("SELECT COUNT(*) AS count FROM packages WHERE popular = 1")
                    .await?,
                by_type: self.group_count("package_type").await?,
                by_destination: self.group_count("destination").await?,
            })
        })
    }
}
