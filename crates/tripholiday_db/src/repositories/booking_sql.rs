//! SQL implementation of the booking repository

use crate::error::{map_unique_violation, DbError};
use crate::repositories::booking::BookingRepository;
use crate::repository::{decode_document, format_timestamp};
use crate::DbClient;
use tracing::{debug, info};
use tripholiday_common::models::Booking;
use tripholiday_common::services::BoxFuture;

/// SQL implementation of the booking repository
#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    db_client: DbClient,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl BookingRepository for SqlBookingRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing booking schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS bookings (
                    id TEXT PRIMARY KEY,
                    user_id TEXT,
                    guest_email TEXT NOT NULL,
                    booking_status TEXT NOT NULL,
                    payment_status TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    document TEXT NOT NULL
                )
            "#;
            self.db_client.execute(query).await?;
            self.db_client
                .execute("CREATE INDEX IF NOT EXISTS idx_bookings_email ON bookings (guest_email, created_at)")
                .await?;

            info!("Booking schema initialized successfully");
            Ok(())
        })
    }

    fn insert<'a>(&'a self, booking: &'a Booking) -> BoxFuture<'a, (), DbError> {
        Box::pin(async move {
            debug!("Inserting booking: {}", booking.id);
            let document = serde_json::to_string(booking)?;

            sqlx::query(
                r#"
                INSERT INTO bookings
                    (id, user_id, guest_email, booking_status, payment_status, created_at, updated_at, document)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(booking.id.as_str())
            .bind(booking.user_id.clone())
            .bind(booking.guest_details.email.as_str())
            .bind(booking.booking_status.as_str())
            .bind(booking.payment.status.as_str())
            .bind(format_timestamp(&booking.created_at))
            .bind(format_timestamp(&booking.updated_at))
            .bind(document)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| map_unique_violation(e, "Booking already exists"))?;
            Ok(())
        })
    }

    fn update<'a>(&'a self, booking: &'a Booking) -> BoxFuture<'a, bool, DbError> {
        Box::pin(async move {
            debug!("Updating booking: {}", booking.id);
            let document = serde_json::to_string(booking)?;

            let result = sqlx::query(
                r#"
                UPDATE bookings
                SET user_id = $1, guest_email = $2, booking_status = $3, payment_status = $4,
                    updated_at = $5, document = $6
                WHERE id = $7
                "#,
            )
            .bind(booking.user_id.clone())
            .bind(booking.guest_details.email.as_str())
            .bind(booking.booking_status.as_str())
            .bind(booking.payment.status.as_str())
            .bind(format_timestamp(&booking.updated_at))
            .bind(document)
            .bind(booking.id.as_str())
            .execute(self.db_client.pool())
            .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<Booking>, DbError> {
        Box::pin(async move {
            let row = sqlx::query("SELECT document FROM bookings WHERE id = $1")
                .bind(id)
                .fetch_optional(self.db_client.pool())
                .await?;
            row.as_ref().map(decode_document).transpose()
        })
    }

    fn find_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Vec<Booking>, DbError> {
        Box::pin(async move {
            let rows = sqlx::query(
                "SELECT document FROM bookings WHERE guest_email = $1 ORDER BY created_at DESC",
            )
            .bind(email)
            .fetch_all(self.db_client.pool())
            .await?;
            rows.iter().map(decode_document).collect()
        })
    }
}
