// --- File: crates/tripholiday_catalog/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    CatalogStats, PackageDetailResponse, PackageListResponse, PackageResponse, PackagesResponse,
    StatGroup, StatsResponse,
};
use tripholiday_common::models::{
    Destination, Itinerary, ItineraryDay, Package, PackageInput, PackageSummary, PackageType,
    PackageUpdate, TravelStyle,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_packages_handler,
        crate::handlers::get_package_handler,
        crate::handlers::filter_packages_handler,
        crate::handlers::admin_list_packages_handler,
        crate::handlers::admin_get_package_handler,
        crate::handlers::create_package_handler,
        crate::handlers::update_package_handler,
        crate::handlers::delete_package_handler,
        crate::handlers::toggle_package_handler,
        crate::handlers::stats_handler
    ),
    components(
        schemas(
            Package, PackageSummary, PackageInput, PackageUpdate, Itinerary, ItineraryDay,
            PackageType, Destination, TravelStyle,
            PackageListResponse, PackageDetailResponse, PackagesResponse, PackageResponse,
            StatsResponse, CatalogStats, StatGroup,
            tripholiday_common::ApiMessage
        )
    ),
    modifiers(&tripholiday_auth::doc::BearerAuth),
    tags(
        (name = "Catalog", description = "Public travel package catalog"),
        (name = "Catalog Admin", description = "Package management for the admin panel")
    )
)]
pub struct CatalogApiDoc;
