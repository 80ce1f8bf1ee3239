// --- File: crates/tripholiday_common/src/models/package.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{validation_error, TripError};

string_enum! {
    /// Price tier of a package.
    PackageType, "package type" {
        Luxury => "luxury",
        Premium => "premium",
        Budget => "budget",
    }
}

string_enum! {
    Destination, "destination" {
        India => "india",
        International => "international",
        Pilgrimage => "pilgrimage",
    }
}

string_enum! {
    /// Who the package is aimed at.
    TravelStyle, "travel style" {
        Family => "family",
        Couple => "couple",
        Solo => "solo",
        Group => "group",
        Buddy => "buddy",
    }
}

pub const DEFAULT_POPULAR_BADGE: &str = "Most Popular";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Itinerary {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
}

/// A sellable travel package as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Package {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub duration: u32,
    pub duration_text: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub destination: Destination,
    pub travel: TravelStyle,
    pub popular: bool,
    pub popular_badge: String,
    pub tags: Vec<String>,
    pub itinerary: Itinerary,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The card view used by the public listing: no itinerary, no timestamps.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub duration: u32,
    pub duration_text: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub destination: Destination,
    pub travel: TravelStyle,
    pub popular: bool,
    pub popular_badge: String,
    pub tags: Vec<String>,
    pub active: bool,
}

impl From<&Package> for PackageSummary {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id.clone(),
            title: package.title.clone(),
            description: package.description.clone(),
            image: package.image.clone(),
            price: package.price,
            duration: package.duration,
            duration_text: package.duration_text.clone(),
            package_type: package.package_type,
            destination: package.destination,
            travel: package.travel,
            popular: package.popular,
            popular_badge: package.popular_badge.clone(),
            tags: package.tags.clone(),
            active: package.active,
        }
    }
}

/// Body of `POST /api/admin/packages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageInput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub duration: u32,
    #[serde(default)]
    pub duration_text: Option<String>,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub destination: Destination,
    pub travel: TravelStyle,
    #[serde(default)]
    pub popular: Option<bool>,
    #[serde(default)]
    pub popular_badge: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub itinerary: Itinerary,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Body of `PUT /api/admin/packages/{id}`. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<u32>,
    pub duration_text: Option<String>,
    #[serde(rename = "type")]
    pub package_type: Option<PackageType>,
    pub destination: Option<Destination>,
    pub travel: Option<TravelStyle>,
    pub popular: Option<bool>,
    pub popular_badge: Option<String>,
    pub tags: Option<Vec<String>>,
    pub itinerary: Option<Itinerary>,
    pub active: Option<bool>,
}

/// `"5 Days / 4 Nights"`
pub fn default_duration_text(duration: u32) -> String {
    format!("{} Days / {} Nights", duration, duration.saturating_sub(1))
}

/// Package ids are URL slugs: lowercase ascii letters, digits, `-` and `_`.
pub fn normalize_package_id(raw: &str) -> Result<String, TripError> {
    let id = raw.trim().to_lowercase();
    if id.is_empty() {
        return Err(validation_error("Package id is required"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(validation_error(format!(
            "Package id `{}` may only contain letters, digits, '-' and '_'",
            id
        )));
    }
    Ok(id)
}

impl Package {
    /// Builds a new package from admin input, applying defaults.
    pub fn from_input(input: PackageInput, now: DateTime<Utc>) -> Result<Self, TripError> {
        let duration_text = crate::models::non_blank(input.duration_text)
            .unwrap_or_else(|| default_duration_text(input.duration));
        let package = Package {
            id: normalize_package_id(&input.id)?,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            image: input.image.trim().to_string(),
            price: input.price,
            duration: input.duration,
            duration_text,
            package_type: input.package_type,
            destination: input.destination,
            travel: input.travel,
            popular: input.popular.unwrap_or(false),
            popular_badge: crate::models::non_blank(input.popular_badge)
                .unwrap_or_else(|| DEFAULT_POPULAR_BADGE.to_string()),
            tags: clean_tags(input.tags),
            itinerary: input.itinerary,
            active: input.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        package.validate()?;
        Ok(package)
    }

    /// Applies a partial update and re-validates. The id never changes.
    pub fn apply_update(&mut self, update: PackageUpdate, now: DateTime<Utc>) -> Result<(), TripError> {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(image) = update.image {
            self.image = image.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(duration_text) = update.duration_text {
            self.duration_text = duration_text.trim().to_string();
        }
        if let Some(package_type) = update.package_type {
            self.package_type = package_type;
        }
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
        if let Some(travel) = update.travel {
            self.travel = travel;
        }
        if let Some(popular) = update.popular {
            self.popular = popular;
        }
        if let Some(popular_badge) = update.popular_badge {
            self.popular_badge = popular_badge.trim().to_string();
        }
        if let Some(tags) = update.tags {
            self.tags = clean_tags(tags);
        }
        if let Some(itinerary) = update.itinerary {
            self.itinerary = itinerary;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        self.updated_at = now;
        self.validate()
    }

    pub fn validate(&self) -> Result<(), TripError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("image", &self.image),
        ] {
            if value.trim().is_empty() {
                return Err(validation_error(format!("Package {} is required", field)));
            }
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(validation_error("Package price must be a number of at least 0"));
        }
        if self.duration < 1 {
            return Err(validation_error("Package duration must be at least 1 day"));
        }
        if self.itinerary.title.trim().is_empty() || self.itinerary.subtitle.trim().is_empty() {
            return Err(validation_error("Itinerary title and subtitle are required"));
        }
        if let Some(day) = self
            .itinerary
            .days
            .iter()
            .find(|d| d.title.trim().is_empty() || d.description.trim().is_empty())
        {
            return Err(validation_error(format!(
                "Itinerary day {} needs a title and a description",
                day.day
            )));
        }
        Ok(())
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
