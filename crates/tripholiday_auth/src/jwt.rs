// --- File: crates/tripholiday_auth/src/jwt.rs ---
//! HS256 session tokens shared by admins and storefront users.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tripholiday_config::env_vars::SECRET_MARKER;
use tripholiday_config::JwtConfig;

use crate::error::AuthError;

/// Role claim carried by storefront user tokens. Admin tokens carry the admin's role.
pub const USER_ROLE: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub id: String,
    pub username: String,
    pub role: String,
    pub exp: i64,
}

/// Signing and verification keys plus the token lifetime.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Builds keys from the `jwt` section. An unparsable `expires_in` is an error.
    pub fn from_config(config: &JwtConfig) -> Result<Self, AuthError> {
        if config.secret.is_empty() {
            return Err(AuthError::Config("jwt.secret is empty".to_string()));
        }
        if config.secret == SECRET_MARKER {
            return Err(AuthError::Config(
                "jwt.secret was not resolved, set JWT_SECRET".to_string(),
            ));
        }
        let ttl = parse_expiry(&config.expires_in)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AuthError::Config(format!("invalid jwt.expires_in `{}`", config.expires_in))
            })?;
        Ok(Self::new(&config.secret, ttl))
    }

    pub fn issue(&self, id: &str, username: &str, role: &str) -> Result<String, AuthError> {
        let claims = Claims {
            id: id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: Utc::now()
                .checked_add_signed(self.ttl)
                .ok_or_else(|| AuthError::Config("token lifetime is out of range".to_string()))?
                .timestamp(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Decodes and checks signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

/// Parses lifetimes such as `7d`, `12h`, `30m`, `45s` or a bare number of seconds.
pub fn parse_expiry(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);
    let amount: i64 = digits.parse().ok()?;
    // Out-of-range lifetimes come back as `None`.
    match unit.trim() {
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        "w" => Duration::try_weeks(amount),
        _ => None,
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
