mod auth;

pub use auth::{attach_identity, Caller};
