use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Resource not found")]
    NotFound,

    #[error("Not enough {food} in pantry")]
    InsufficientStock { food: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session expired")]
    SessionExpired,

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{0}")]
    Invalid(String),
}
