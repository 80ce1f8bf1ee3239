//! Shared pieces of the repositories
//!
//! Nested documents (packages, bookings) are stored as JSON text next to the
//! scalar columns used for filtering and ordering. Timestamps are RFC 3339
//! text with a fixed precision so that they sort lexically.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use std::sync::Arc;

use crate::client::DbClient;
use crate::error::DbError;
use crate::repositories::{
    AdminRepository, BookingRepository, PackageRepository, SqlAdminRepository,
    SqlBookingRepository, SqlPackageRepository, SqlUserRepository, UserRepository,
};

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::DecodeError(format!("bad timestamp `{}`: {}", raw, e)))
}

/// Decodes the `document` column of a row.
pub(crate) fn decode_document<T: serde::de::DeserializeOwned>(row: &AnyRow) -> Result<T, DbError> {
    let raw: String = row.try_get("document")?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn flag(value: bool) -> i64 {
    i64::from(value)
}

/// `$start, $start+1, ...` placeholders for an `IN (...)` list.
pub(crate) fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every repository the backend needs, behind trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub packages: Arc<dyn PackageRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub admins: Arc<dyn AdminRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// SQL repositories sharing one pool.
    pub fn sql(db_client: DbClient) -> Self {
        Self {
            packages: Arc::new(SqlPackageRepository::new(db_client.clone())),
            bookings: Arc::new(SqlBookingRepository::new(db_client.clone())),
            admins: Arc::new(SqlAdminRepository::new(db_client.clone())),
            users: Arc::new(SqlUserRepository::new(db_client)),
        }
    }

    /// Creates all tables that do not exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        self.packages.init_schema().await?;
        self.bookings.init_schema().await?;
        self.admins.init_schema().await?;
        self.users.init_schema().await?;
        Ok(())
    }
}
