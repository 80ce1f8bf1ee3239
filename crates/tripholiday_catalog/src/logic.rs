// --- File: crates/tripholiday_catalog/src/logic.rs ---
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tripholiday_common::models::{Destination, Itinerary, Package, PackageSummary, PackageType, TravelStyle};
use tripholiday_common::{validation_error, TripError};
use tripholiday_db::{GroupCount, PackageFilter, PackageRepository, PackageStats};

/// State shared by the public and admin catalog handlers.
#[derive(Clone)]
pub struct CatalogState {
    pub packages: Arc<dyn PackageRepository>,
}

// --- Public listing ---

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageListResponse {
    pub success: bool,
    pub count: usize,
    pub packages: Vec<PackageSummary>,
    /// Itineraries keyed by package id.
    pub itineraries: BTreeMap<String, Itinerary>,
}

impl From<Vec<Package>> for PackageListResponse {
    fn from(packages: Vec<Package>) -> Self {
        let summaries: Vec<PackageSummary> = packages.iter().map(PackageSummary::from).collect();
        Self {
            success: true,
            count: summaries.len(),
            packages: summaries,
            itineraries: packages
                .into_iter()
                .map(|p| (p.id, p.itinerary))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageDetailResponse {
    pub success: bool,
    pub package: PackageSummary,
    pub itinerary: Itinerary,
}

/// Full packages, used by the filter endpoint and the admin listing.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackagesResponse {
    pub success: bool,
    pub count: usize,
    pub packages: Vec<Package>,
}

impl From<Vec<Package>> for PackagesResponse {
    fn from(packages: Vec<Package>) -> Self {
        Self {
            success: true,
            count: packages.len(),
            packages,
        }
    }
}

/// Turns the `:filterType/:value` path pair into a repository filter.
///
/// An unknown filter type is a validation error. An unknown value matches
/// nothing, so it yields `Ok(None)`.
pub fn parse_filter(filter_type: &str, value: &str) -> Result<Option<PackageFilter>, TripError> {
    let filter = match filter_type {
        "type" => value.parse::<PackageType>().ok().map(PackageFilter::Type),
        "destination" => value.parse::<Destination>().ok().map(PackageFilter::Destination),
        "travel" => value.parse::<TravelStyle>().ok().map(PackageFilter::Travel),
        _ => return Err(validation_error("Invalid filter type")),
    };
    Ok(filter)
}

// --- Admin ---

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub package: Package,
}

impl PackageResponse {
    pub fn new(package: Package) -> Self {
        Self {
            success: true,
            message: None,
            package,
        }
    }

    pub fn with_message(package: Package, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            package,
        }
    }
}

/// One `$group` bucket as the admin dashboard expects it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatGroup {
    #[serde(rename = "_id")]
    pub id: String,
    pub count: i64,
}

impl From<GroupCount> for StatGroup {
    fn from(group: GroupCount) -> Self {
        Self {
            id: group.key,
            count: group.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CatalogStats {
    pub total_packages: i64,
    pub active_packages: i64,
    pub inactive_packages: i64,
    pub popular_packages: i64,
    pub packages_by_type: Vec<StatGroup>,
    pub packages_by_destination: Vec<StatGroup>,
}

impl From<PackageStats> for CatalogStats {
    fn from(stats: PackageStats) -> Self {
        Self {
            total_packages: stats.total,
            active_packages: stats.active,
            inactive_packages: stats.total - stats.active,
            popular_packages: stats.popular,
            packages_by_type: stats.by_type.into_iter().map(StatGroup::from).collect(),
            packages_by_destination: stats
                .by_destination
                .into_iter()
                .map(StatGroup::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatsResponse {
    pub success: bool,
    pub stats: CatalogStats,
}

pub fn toggle_message(active: bool) -> &'static str {
    if active {
        "Package activated successfully"
    } else {
        "Package deactivated successfully"
    }
}
