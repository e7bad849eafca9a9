use crate::errors::{ApiError, AppResult};
use crate::models::{Role, UserInfo};

// Minimum authorization an operation demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    None,
    Authenticated,
    Admin,
}

// Stateless capability check, invoked before any mutation. Authentication
// is always checked before role, so an anonymous call to an admin-only
// operation reports NotAuthenticated rather than AdminRequired.
pub fn require(level: AccessLevel, caller: Option<&UserInfo>) -> AppResult<()> {
    match level {
        AccessLevel::None => Ok(()),
        AccessLevel::Authenticated => match caller {
            Some(_) => Ok(()),
            None => Err(ApiError::NotAuthenticated),
        },
        AccessLevel::Admin => {
            let caller = caller.ok_or(ApiError::NotAuthenticated)?;
            if caller.role == Role::Admin {
                Ok(())
            } else {
                Err(ApiError::AdminRequired)
            }
        }
    }
}
