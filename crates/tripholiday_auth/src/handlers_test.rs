#[cfg(test)]
mod tests {
    use crate::error::AuthError;
    use crate::handlers::looks_like_email;
    use tripholiday_common::{HttpStatusCode, TripError};
    use tripholiday_db::DbError;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("asha@example.com"));
        assert!(looks_like_email("a.b+trip@mail.co.in"));
        assert!(!looks_like_email("asha"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("asha@localhost"));
        assert!(!looks_like_email("asha@example."));
        assert!(!looks_like_email("as ha@example.com"));
    }

    #[test]
    fn test_auth_errors_map_to_status_codes() {
        let cases: Vec<(AuthError, u16)> = vec![
            (AuthError::BadRequest("Please provide username and password".into()), 400),
            (AuthError::InvalidCredentials, 401),
            (AuthError::Unauthorized("No token provided".into()), 401),
            (AuthError::Deactivated, 403),
            (AuthError::RoleNotAllowed("admin".into()), 403),
            (AuthError::Config("jwt.secret is empty".into()), 500),
            (AuthError::PasswordHash("salt".into()), 500),
            (AuthError::Db(DbError::Duplicate("taken".into())), 409),
        ];
        for (err, status) in cases {
            let label = err.to_string();
            assert_eq!(TripError::from(err).status_code(), status, "{}", label);
        }
    }

    #[test]
    fn test_role_message() {
        let err = TripError::from(AuthError::RoleNotAllowed("admin".into()));
        assert_eq!(
            err.public_message(),
            "Role admin is not authorized to access this route"
        );
    }
}
