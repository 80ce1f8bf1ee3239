// File: services/tripholiday_backend/src/bin/tripholiday-seed.rs
use std::sync::Arc;
use tripholiday_backend::seed::seed_database;
use tripholiday_common::logging;
use tripholiday_config::load_config;
use tripholiday_db::{DbClient, Repositories};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Arc::new(load_config()?);
    let repositories = Repositories::sql(DbClient::new(&config).await?);

    println!("\nSeeding database...\n");
    let summary = seed_database(&repositories, &config.admin_seed).await?;

    println!(
        "Removed {} packages and {} admins",
        summary.packages_removed, summary.admins_removed
    );
    println!("Inserted packages: {}", summary.package_ids.join(", "));
    println!("Admin created:");
    println!("   Username: {}", summary.admin_username);
    println!("   Email: {}", summary.admin_email);
    println!("   Password: {}", config.admin_seed.password);
    println!("   Role: {}\n", summary.admin_role);

    println!("Summary:");
    println!("   - {} packages", summary.package_ids.len());
    println!("   - 1 admin user");
    println!(
        "\nStart the server with: cargo run --bin tripholiday-backend\nAdmin panel: http://localhost:{}/admin\n",
        config.server.port
    );
    Ok(())
}
