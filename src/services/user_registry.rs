use crate::errors::{ApiError, AppResult};
use crate::models::{Role, UserInfo, UserRecord};

// Fixed user registry, seeded at startup. There are no create, update or
// delete operations on users.
pub struct UserRegistry {
    users: Vec<UserRecord>,
}

impl UserRegistry {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    // The accounts the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            UserRecord {
                username: "user".into(),
                password: "password".into(),
                role: Role::User,
            },
            UserRecord {
                username: "admin".into(),
                password: "admin".into(),
                role: Role::Admin,
            },
        ])
    }

    // Exact, case-sensitive match on both fields. Plaintext comparison is
    // the documented baseline; hashing at rest with a constant-time compare
    // is the production alternative.
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<UserInfo> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(UserInfo::from)
            .ok_or(ApiError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_accounts_authenticate() {
        let registry = UserRegistry::seeded();

        let user = registry.authenticate("user", "password").unwrap();
        assert_eq!(user.username, "user");
        assert_eq!(user.role, Role::User);

        let admin = registry.authenticate("admin", "admin").unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let registry = UserRegistry::seeded();
        assert!(matches!(
            registry.authenticate("user", "wrong"),
            Err(ApiError::InvalidCredentials)
        ));
    }

    #[test]
    fn unknown_username_is_invalid_credentials() {
        let registry = UserRegistry::seeded();
        assert!(matches!(
            registry.authenticate("nobody", "password"),
            Err(ApiError::InvalidCredentials)
        ));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let registry = UserRegistry::seeded();
        assert!(registry.authenticate("User", "password").is_err());
        assert!(registry.authenticate("user", "Password").is_err());
    }
}
