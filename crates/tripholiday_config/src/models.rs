// --- File: crates/tripholiday_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under `/admin` (the admin panel front end).
    #[serde(default)]
    pub admin_dir: Option<String>,
    /// Directory served under `/uploads`.
    #[serde(default)]
    pub uploads_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            admin_dir: None,
            uploads_dir: None,
        }
    }
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite://data/tripholiday.db, loaded via TRIPHOLIDAY__DATABASE__URL
    #[serde(default)]
    pub max_connections: Option<u32>,
}

// --- JWT Config ---
// The signing secret is normally injected from JWT_SECRET via "secret_from_env".
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime such as "7d", "12h", "30m" or "45s".
    #[serde(default = "default_jwt_expiry")]
    pub expires_in: String,
}

fn default_jwt_expiry() -> String {
    "7d".to_string()
}

// --- CORS Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// "*" or a comma separated list of allowed origins.
    #[serde(default = "default_cors_origin")]
    pub origin: String,
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: default_cors_origin(),
        }
    }
}

// --- Razorpay Config ---
// key_secret is loaded via RAZORPAY_KEY_SECRET when marked "secret_from_env".
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_razorpay_api")]
    pub api_base_url: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_razorpay_api() -> String {
    "https://api.razorpay.com/v1".to_string()
}

// --- SMTP Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub user: String,
    pub pass: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Falls back to `user` when not set.
    #[serde(default)]
    pub from_address: Option<String>,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "Trip Holiday".to_string()
}

// --- Twilio Config ---
// Holds the SMS sender settings. auth_token is loaded via TWILIO_AUTH_TOKEN.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub phone_number: String,
    #[serde(default = "default_twilio_api")]
    pub api_base_url: String,
}

fn default_twilio_api() -> String {
    "https://api.twilio.com/2010-04-01".to_string()
}

// --- Company Config ---
// Contact details printed in customer emails and SMS.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompanyConfig {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default = "default_support_phone")]
    pub support_phone: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
    #[serde(default = "default_postal_address")]
    pub postal_address: String,
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

fn default_company_name() -> String {
    "Trip Holiday".to_string()
}

fn default_support_phone() -> String {
    "7042252130".to_string()
}

fn default_support_email() -> String {
    "Info@tripholiday.in".to_string()
}

fn default_postal_address() -> String {
    "IT Park, Industrial Area Phase 8B, Sector 74, Mohali - Punjab, 160055".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            support_phone: default_support_phone(),
            support_email: default_support_email(),
            postal_address: default_postal_address(),
            public_base_url: default_public_base_url(),
        }
    }
}

// --- Admin Seed Config ---
// Used by the seeding binary only.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdminSeedConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    #[serde(default = "default_admin_email")]
    pub email: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
    #[serde(default = "default_admin_name")]
    pub name: String,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_email() -> String {
    "admin@tripholiday.com".to_string()
}

fn default_admin_password() -> String {
    "Admin@123".to_string()
}

fn default_admin_name() -> String {
    "Admin User".to_string()
}

impl Default for AdminSeedConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            email: default_admin_email(),
            password: default_admin_password(),
            name: default_admin_name(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_razorpay: bool,
    #[serde(default)]
    pub use_email: bool,
    #[serde(default)]
    pub use_sms: bool,

    // --- Sections ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub jwt: Option<JwtConfig>,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub razorpay: Option<RazorpayConfig>,
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
    #[serde(default)]
    pub twilio: Option<TwilioConfig>,
    #[serde(default)]
    pub company: CompanyConfig,
    #[serde(default)]
    pub admin_seed: AdminSeedConfig,
}
