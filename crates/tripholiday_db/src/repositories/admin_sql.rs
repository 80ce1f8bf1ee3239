//! SQL implementation of the admin repository

use crate::error::{map_unique_violation, DbError};
use crate::repositories::admin::AdminRepository;
use crate::repository::{flag, format_timestamp, parse_timestamp};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, info};
use tripholiday_common::models::Admin;
use tripholiday_common::services::BoxFuture;

const ADMIN_COLUMNS: &str =
    "id, username, email, password_hash, name, role, active, created_at, updated_at";

/// SQL implementation of the admin repository
#[derive(Debug, Clone)]
pub struct SqlAdminRepository {
    db_client: DbClient,
}

impl SqlAdminRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn admin_from_row(row: &AnyRow) -> Result<Admin, DbError> {
    let role: String = row.try_get("role")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;
    Ok(Admin {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        name: row.try_get("name")?,
        role: role
            .parse()
            .map_err(|e| DbError::DecodeError(format!("admin role: {}", e)))?,
        active: row.try_get::<i64, _>("active")? != 0,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

impl AdminRepository for SqlAdminRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing admin schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS admins (
                    id TEXT PRIMARY KEY,
                    username TEXT NOT NULL UNIQUE,
                    email TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    active INTEGER NOT NULL DEFAULT 1,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
            "#;
            self.db_client.execute(query).await?;

            info!("Admin schema initialized successfully");
            Ok(())
        })
    }

    fn insert<'a>(&'a self, admin: &'a Admin) -> BoxFuture<'a, (), DbError> {
        Box::pin(async move {
            debug!("Inserting admin: {}", admin.username);
            let query = format!(
                "INSERT INTO admins ({ADMIN_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
            );
            sqlx::query(&query)
                .bind(admin.id.as_str())
                .bind(admin.username.as_str())
                .bind(admin.email.as_str())
                .bind(admin.password_hash.as_str())
                .bind(admin.name.as_str())
                .bind(admin.role.as_str())
                .bind(flag(admin.active))
                .bind(format_timestamp(&admin.created_at))
                .bind(format_timestamp(&admin.updated_at))
                .execute(self.db_client.pool())
                .await
                .map_err(|e| map_unique_violation(e, "Admin with this username or email already exists"))?;
            Ok(())
        })
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<Admin>, DbError> {
        Box::pin(async move {
            let query = format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE id = $1");
            let row = sqlx::query(&query)
                .bind(id)
                .fetch_optional(self.db_client.pool())
                .await?;
            row.as_ref().map(admin_from_row).transpose()
        })
    }

    fn find_by_username<'a>(&'a self, username: &'a str) -> BoxFuture<'a, Option<Admin>, DbError> {
        Box::pin(async move {
            let query = format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE username = $1");
            let row = sqlx::query(&query)
                .bind(username)
                .fetch_optional(self.db_client.pool())
                .await?;
            row.as_ref().map(admin_from_row).transpose()
        })
    }

    fn delete_all(&self) -> BoxFuture<'_, u64, DbError> {
        Box::pin(async move { self.db_client.execute("DELETE FROM admins").await })
    }
}
