#[cfg(test)]
mod tests {
    use crate::logic::*;
    use chrono::{Duration, Utc};
    use tripholiday_common::models::{User, MAX_FAVORITES};
    use tripholiday_common::HttpStatusCode;

    fn user() -> User {
        let created = Utc::now() - Duration::days(3);
        User {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password_hash: "$argon2id$placeholder".into(),
            phone: Some("9876543210".into()),
            address: None,
            favorites: vec!["dubai".into()],
            active: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_profile_update_rules() {
        let mut user = user();
        let now = Utc::now();
        apply_profile_update(
            &mut user,
            ProfileUpdate {
                name: Some("   ".into()),
                phone: Some(" 9000000000 ".into()),
                address: Some("12 MG Road, Pune".into()),
            },
            now,
        );
        assert_eq!(user.name, "Asha");
        assert_eq!(user.phone.as_deref(), Some("9000000000"));
        assert_eq!(user.address.as_deref(), Some("12 MG Road, Pune"));
        assert_eq!(user.updated_at, now);

        apply_profile_update(
            &mut user,
            ProfileUpdate {
                name: Some(" Asha Rao ".into()),
                phone: Some("".into()),
                address: None,
            },
            now,
        );
        assert_eq!(user.name, "Asha Rao");
        assert_eq!(user.phone, None);
        assert_eq!(user.address.as_deref(), Some("12 MG Road, Pune"));
    }

    #[test]
    fn test_add_favorite_rejects_duplicates() {
        let mut user = user();
        add_favorite(&mut user, "goa").unwrap();
        assert_eq!(user.favorites, vec!["dubai", "goa"]);

        let err = add_favorite(&mut user, "dubai").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Package is already in favorites");
    }

    #[test]
    fn test_add_favorite_enforces_limit() {
        let mut user = user();
        user.favorites = (0..MAX_FAVORITES).map(|i| format!("pkg-{}", i)).collect();
        let err = add_favorite(&mut user, "one-more").unwrap_err();
        assert_eq!(
            err.to_string(),
            "You have reached the maximum number of favorites (50)"
        );
        assert_eq!(user.favorites.len(), MAX_FAVORITES);
    }

    #[test]
    fn test_remove_favorite_is_idempotent() {
        let mut user = user();
        remove_favorite(&mut user, "dubai");
        remove_favorite(&mut user, "dubai");
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn test_password_change_body_is_camel_case() {
        let change: PasswordChange = serde_json::from_value(serde_json::json!({
            "currentPassword": "old-secret",
            "newPassword": "new-secret"
        }))
        .unwrap();
        assert_eq!(change.current_password.as_deref(), Some("old-secret"));
        assert_eq!(change.new_password.as_deref(), Some("new-secret"));
    }
}
