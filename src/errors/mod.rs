// Defines the operation-level error taxonomy and a result type alias
// using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Admin role required")]
    AdminRequired,

    #[error("Task not found: {0}")]
    NotFound(String),

    // The #[from] attribute converts a signing failure into an ApiError
    // using the From trait. Verification failures never reach here; they
    // degrade to an anonymous caller instead.
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, ApiError>;
