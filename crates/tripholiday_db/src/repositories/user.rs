//! Repository for storefront customer accounts

use crate::error::DbError;
use tripholiday_common::models::User;
use tripholiday_common::services::BoxFuture;

pub trait UserRepository: Send + Sync {
    /// Creates the `users` table if it doesn't exist.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Inserts a user. A taken email is [`DbError::Duplicate`].
    fn insert<'a>(&'a self, user: &'a User) -> BoxFuture<'a, (), DbError>;

    /// Saves profile fields, password hash, favorites and `active`.
    /// Returns `false` if the id is unknown.
    fn update<'a>(&'a self, user: &'a User) -> BoxFuture<'a, bool, DbError>;

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<User>, DbError>;

    /// Emails are stored lowercased; `email` is matched as given.
    fn find_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Option<User>, DbError>;
}
