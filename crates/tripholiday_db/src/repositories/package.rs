//! Repository for travel packages

use crate::error::DbError;
use tripholiday_common::models::{Destination, Package, PackageType, TravelStyle};
use tripholiday_common::services::BoxFuture;

/// A single-column filter over the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFilter {
    Type(PackageType),
    Destination(Destination),
    Travel(TravelStyle),
}

impl PackageFilter {
    pub(crate) fn column(&self) -> &'static str {
        match self {
            PackageFilter::Type(_) => "package_type",
            PackageFilter::Destination(_) => "destination",
            PackageFilter::Travel(_) => "travel",
        }
    }

    pub(crate) fn value(&self) -> &'static str {
        match self {
            PackageFilter::Type(v) => v.as_str(),
            PackageFilter::Destination(v) => v.as_str(),
            PackageFilter::Travel(v) => v.as_str(),
        }
    }
}

/// Number of packages sharing a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: i64,
}

/// Catalog counters for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageStats {
    pub total: i64,
    pub active: i64,
    pub popular: i64,
    pub by_type: Vec<GroupCount>,
    pub by_destination: Vec<GroupCount>,
}

pub trait PackageRepository: Send + Sync {
    /// Creates the `packages` table if it doesn't exist.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Inserts a package. A taken id is [`DbError::Duplicate`].
    fn insert<'a>(&'a self, package: &'a Package) -> BoxFuture<'a, (), DbError>;

    /// Replaces a stored package. Returns `false` if the id is unknown.
    fn update<'a>(&'a self, package: &'a Package) -> BoxFuture<'a, bool, DbError>;

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Option<Package>, DbError>;

    /// Active packages, popular first, then cheapest first.
    fn list_active(&self) -> BoxFuture<'_, Vec<Package>, DbError>;

    /// Active packages matching `filter`, in [`PackageRepository::list_active`] order.
    fn list_active_by(&self, filter: PackageFilter) -> BoxFuture<'_, Vec<Package>, DbError>;

    /// Active packages among `ids`, in [`PackageRepository::list_active`] order.
    fn list_active_by_ids<'a>(&'a self, ids: &'a [String]) -> BoxFuture<'a, Vec<Package>, DbError>;

    /// Every package, newest first.
    fn list_all(&self) -> BoxFuture<'_, Vec<Package>, DbError>;

    /// Returns `false` if the id is unknown.
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, bool, DbError>;

    /// Removes every package, returning how many were removed.
    fn delete_all(&self) -> BoxFuture<'_, u64, DbError>;

    fn stats(&self) -> BoxFuture<'_, PackageStats, DbError>;
}
