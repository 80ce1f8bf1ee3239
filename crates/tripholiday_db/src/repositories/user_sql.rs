//! SQL implementation of the user repository

use crate::error::{map_unique_violation, DbError};
use crate::repositories::user::UserRepository;
use crate::repository::{flag, format_timestamp, parse_timestamp};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, info};
use tripholiday_common::models::User;
use tripholiday_common::services::BoxFuture;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, phone, address, favorites, active, created_at, updated_at";

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db_client: DbClient,
}

impl SqlUserRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn user_from_row(row: &AnyRow) -> Result<User, DbError> {
    let favorites: String = row.try_get("favorites")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        favorites: serde_json::from_str(&favorites)?,
        active: row.try_get::<i64, _>("active")? != 0,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

impl UserRepository for SqlUserRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing user schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS users (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    phone TEXT,
                    address TEXT,
                    favorites TEXT NOT NULL DEFAULT '[]',
                    active INTEGER NOT NULL DEFAULT 1,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
            "#;
            self.db_client.execute(query).await?;

            info!("User schema initialized successfully");
            Ok(())
        })
    }

    fn insert<'a>(&'a self, user: &'a User) -> BoxFuture<'a, (), DbError> {
        Box::pin(async move {
            debug!("Inserting user: {}", user.email);
            let favorites = serde_json::to_string(&user.favorites)?;
            let query = format!(
                "INSERT INTO users ({USER_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
            );
            sqlx::query(&query)
                .bind(user.id.as_str())
                .bind(user.name.as_str())
                .bind(user.email.as_str())
                .bind(user.password_hash.as_str())
                .bind(user.phone.clone())
                .bind(user.address.clone())
                .bind(favorites)
                .bind(flag(user.active))
                .bind(format_timestamp(&user.created_at))
                .bind(format_timestamp(&user.updated_at))
                .execute(self.db_client.pool())
                .await
                .map_err(|e| map_unique_violation(e, "User already exists with this email"))?;
            Ok(())
        })
    }

    fn update<'a>(&'a self, user: &'a User) -> BoxFuture<'a, bool, DbError> {
        Box::pin(async move {
            debug!("Updating user: {}", user.id);
            let favorites = serde_json::to_string(&user.favorites)?;
            let result = sqlx::query(
                r#"
                UPDATE users
                SET name = $1, password_hash = $2, phone = $3, address = $4,
                    favorites = $5, active = $6, updated_at = $7
                WHERE id = $8
                "#,
            )
            .bind(user.name.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.phone.clone())
            .bind(user.address.clone())
            .bind(favorites)
            .bind(flag(user.active))
            .bind(format_timestamp(&user.updated_at))
            .bind(user.id.as_str())
            .execute(self.db_client.pool())
            .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<User>, DbError> {
        Box::pin(async move {
            let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
            let row = sqlx::query(&query)
                .bind(id)
                .fetch_optional(self.db_client.pool())
                .await?;
            row.as_ref().map(user_from_row).transpose()
        })
    }

    fn find_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Option<User>, DbError> {
        Box::pin(async move {
            let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
            let row = sqlx::query(&query)
                .bind(email)
                .fetch_optional(self.db_client.pool())
                .await?;
            row.as_ref().map(user_from_row).transpose()
        })
    }
}
