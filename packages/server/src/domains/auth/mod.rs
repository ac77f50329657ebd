//! Auth domain - email/password accounts and bearer tokens
//!
//! Responsibilities:
//! - Signup and login against the user store
//! - bcrypt password hashing
//! - JWT issue and verification

pub mod actions;
pub mod jwt;
pub mod models;
pub mod password;

pub use actions::AuthResponse;
pub use jwt::{Claims, JwtService};
