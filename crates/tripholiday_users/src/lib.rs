// --- File: crates/tripholiday_users/src/lib.rs ---
//! Account routes for signed-in storefront customers: profile, password and
//! favorite packages.

pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;

#[cfg(test)]
mod logic_test;

pub use logic::UsersState;
pub use routes::routes;
