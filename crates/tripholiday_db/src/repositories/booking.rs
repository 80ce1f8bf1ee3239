//! Repository for bookings

use crate::error::DbError;
use tripholiday_common::models::Booking;
use tripholiday_common::services::BoxFuture;

pub trait BookingRepository: Send + Sync {
    /// Creates the `bookings` table if it doesn't exist.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    fn insert<'a>(&'a self, booking: &'a Booking) -> BoxFuture<'a, (), DbError>;

    /// Replaces a stored booking. Returns `false` if the id is unknown.
    fn update<'a>(&'a self, booking: &'a Booking) -> BoxFuture<'a, bool, DbError>;

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<Booking>, DbError>;

    /// Bookings made with this guest email, newest first.
    fn find_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Vec<Booking>, DbError>;
}
