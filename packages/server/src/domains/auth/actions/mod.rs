//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers. They
//! validate input, talk to the stores through `ServerDeps`, and return
//! `AppError` variants the route layer turns into responses.

mod login;
mod signup;

use serde::{Deserialize, Serialize};

pub use login::{login, LoginInput};
pub use signup::{signup, SignupInput};

/// Successful signup/login: the session the client keeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub email: String,
    pub token: String,
}
