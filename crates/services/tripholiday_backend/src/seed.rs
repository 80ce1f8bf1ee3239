// --- File: crates/services/tripholiday_backend/src/seed.rs ---
//! Resets the catalog to the sample packages and recreates the default admin.
use chrono::{DateTime, Utc};
use tracing::info;
use tripholiday_auth::hash_password;
use tripholiday_common::models::{Admin, AdminRole, Package, PackageInput};
use tripholiday_common::TripError;
use tripholiday_config::AdminSeedConfig;
use tripholiday_db::Repositories;
use uuid::Uuid;

const SAMPLE_PACKAGES: &str = include_str!("../seed/packages.json");

/// What [`seed_database`] wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSummary {
    pub packages_removed: u64,
    pub admins_removed: u64,
    pub package_ids: Vec<String>,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_role: AdminRole,
}

/// The bundled sample packages, validated like admin input.
pub fn sample_packages(now: DateTime<Utc>) -> Result<Vec<Package>, TripError> {
    let inputs: Vec<PackageInput> = serde_json::from_str(SAMPLE_PACKAGES)?;
    inputs
        .into_iter()
        .map(|input| Package::from_input(input, now))
        .collect()
}

/// The superadmin described by `seed`, with a freshly hashed password.
pub fn default_admin(seed: &AdminSeedConfig, now: DateTime<Utc>) -> Result<Admin, TripError> {
    Ok(Admin {
        id: Uuid::new_v4().simple().to_string(),
        username: seed.username.trim().to_lowercase(),
        email: seed.email.trim().to_lowercase(),
        password_hash: hash_password(&seed.password)?,
        name: seed.name.trim().to_string(),
        role: AdminRole::Superadmin,
        active: true,
        created_at: now,
        updated_at: now,
    })
}

/// Creates missing tables, wipes packages and admins, then inserts the
/// sample packages and the default admin.
pub async fn seed_database(
    repositories: &Repositories,
    seed: &AdminSeedConfig,
) -> Result<SeedSummary, TripError> {
    let now = Utc::now();
    // Parse and hash before deleting anything.
    let packages = sample_packages(now)?;
    let admin = default_admin(seed, now)?;

    repositories.init_schema().await?;

    let packages_removed = repositories.packages.delete_all().await?;
    info!("Cleared {} packages", packages_removed);
    let admins_removed = repositories.admins.delete_all().await?;
    info!("Cleared {} admins", admins_removed);

    for package in &packages {
        repositories.packages.insert(package).await?;
    }
    info!("Inserted {} packages", packages.len());

    repositories.admins.insert(&admin).await?;
    info!(username = %admin.username, role = %admin.role, "Created default admin");

    Ok(SeedSummary {
        packages_removed,
        admins_removed,
        package_ids: packages.into_iter().map(|p| p.id).collect(),
        admin_username: admin.username,
        admin_email: admin.email,
        admin_role: admin.role,
    })
}
