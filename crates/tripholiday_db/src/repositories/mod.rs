//! Repository modules for database access
//!
//! Each entity has a trait (object safe, so handlers can hold
//! `Arc<dyn ...>`) and an SQL implementation.

pub mod admin;
pub mod admin_sql;
pub mod booking;
pub mod booking_sql;
pub mod package;
pub mod package_sql;
pub mod user;
pub mod user_sql;

pub use admin::AdminRepository;
pub use admin_sql::SqlAdminRepository;
pub use booking::BookingRepository;
pub use booking_sql::SqlBookingRepository;
pub use package::{GroupCount, PackageFilter, PackageRepository, PackageStats};
pub use package_sql::SqlPackageRepository;
pub use user::UserRepository;
pub use user_sql::SqlUserRepository;
