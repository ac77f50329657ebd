// Password hashing and validation

use anyhow::{Context, Result};
use bcrypt::{hash, verify};

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (bcrypt has a 72-byte limit)
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Hash a password with bcrypt on the blocking thread pool.
pub async fn hash_password(password: &str, cost: u32) -> Result<String> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash(password, cost))
        .await
        .context("Password hashing task failed")?
        .context("Failed to hash password")
}

/// Check a password against a bcrypt hash on the blocking thread pool.
///
/// `Ok(false)` on mismatch; `Err` only when the hash itself is unusable.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || verify(password, &hash))
        .await
        .context("Password verification task failed")?
        .context("Failed to verify password")
}

/// Length rules for new passwords. Returns the user-facing reason on failure.
pub fn validate_password(password: &str) -> std::result::Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        ));
    }

    Ok(())
}
