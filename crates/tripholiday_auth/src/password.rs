// --- File: crates/tripholiday_auth/src/password.rs ---
//! Argon2id password hashes in PHC string form.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AuthError;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// [`hash_password`] on the blocking pool, for use inside request handlers.
pub async fn hash_password_async(plain: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}

/// `false` for a wrong password and for a hash that cannot be parsed.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is unreadable: {}", e);
            false
        }
    }
}

/// [`verify_password`] on the blocking pool, for use inside request handlers.
pub async fn verify_password_async(plain: String, stored_hash: String) -> bool {
    match tokio::task::spawn_blocking(move || verify_password(&plain, &stored_hash)).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Password check did not finish: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Admin@123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Admin@123", &hash));
        assert!(!verify_password("admin@123", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let hash = hash_password_async("Admin@123".to_string()).await.unwrap();
        assert!(verify_password_async("Admin@123".to_string(), hash.clone()).await);
        assert!(!verify_password_async("wrong".to_string(), hash).await);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
