// --- File: crates/tripholiday_catalog/src/lib.rs ---
//! The travel package catalog: the public listing the storefront renders and
//! the package management routes behind the admin panel.

pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;


// Re-export for main backend
pub use logic::CatalogState;
pub use routes::{admin_routes, routes};
