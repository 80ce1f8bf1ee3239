//! Database integration for the Trip Holiday backend
//!
//! A database client over `sqlx::Any` (SQLite by default) and the
//! repositories for packages, bookings, admins and users.
//!
//! # Example
//!
//! ```rust,no_run
//! use tripholiday_config::AppConfig;
//! use tripholiday_db::DbClientFactory;
//! use std::sync::Arc;
//!
//! async fn setup_db(config: Arc<AppConfig>) -> Result<(), Box<dyn std::error::Error>> {
//!     let repositories = DbClientFactory::new().repositories(&config).await?;
//!     let packages = repositories.packages.list_active().await?;
//!     println!("{} packages on sale", packages.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

// Re-export the client, factory, and repository bundle for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::Repositories;

pub use repositories::{
    AdminRepository, BookingRepository, GroupCount, PackageFilter, PackageRepository,
    PackageStats, SqlAdminRepository, SqlBookingRepository, SqlPackageRepository,
    SqlUserRepository, UserRepository,
};
