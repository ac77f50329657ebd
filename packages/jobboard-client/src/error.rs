use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No stored session; the caller has to sign up or log in first
    #[error("You need to log in first")]
    Unauthenticated,

    /// The server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the job board: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from the job board: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Session storage failed: {0}")]
    Session(#[from] std::io::Error),
}

impl ClientError {
    /// Whether the server rejected the bearer token
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthenticated | ClientError::Api { status: 401, .. }
        )
    }
}
