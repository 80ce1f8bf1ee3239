//! Repository for admin panel accounts

use crate::error::DbError;
use tripholiday_common::models::Admin;
use tripholiday_common::services::BoxFuture;

pub trait AdminRepository: Send + Sync {
    /// Creates the `admins` table if it doesn't exist.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Inserts an admin. A taken username or email is [`DbError::Duplicate`].
    fn insert<'a>(&'a self, admin: &'a Admin) -> BoxFuture<'a, (), DbError>;

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<Admin>, DbError>;

    /// Usernames are stored lowercased; `username` is matched as given.
    fn find_by_username<'a>(&'a self, username: &'a str) -> BoxFuture<'a, Option<Admin>, DbError>;

    /// Removes every admin, returning how many were removed.
    fn delete_all(&self) -> BoxFuture<'_, u64, DbError>;
}
