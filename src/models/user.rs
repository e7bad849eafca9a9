use serde::{Deserialize, Serialize};

// Closed role set so a typo can never silently grant or deny access.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

// Registry record. The password is compared in plaintext in this design;
// the struct is deliberately not serializable so it cannot leak into a
// response body.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub role: Role,
}

// Public projection of a user. Also the caller identity decoded from a
// verified session credential.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
}

impl From<&UserRecord> for UserInfo {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            role: record.role,
        }
    }
}
