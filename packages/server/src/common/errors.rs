use thiserror::Error;

/// Failure taxonomy shared by every operation the API exposes.
///
/// The HTTP layer maps each variant onto a status code; see
/// `server::error` for the response shape.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing fields, or a business-rule violation (400)
    #[error("{0}")]
    InvalidInput(String),

    /// Rejected signup/login attempt (400, reported as `message`)
    #[error("{0}")]
    Credentials(String),

    /// Missing or invalid bearer token (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Unknown identifier or route (404)
    #[error("{0}")]
    NotFound(String),

    /// Store or connection failure (500)
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        Self::Credentials(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
