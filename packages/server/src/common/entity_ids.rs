//! Typed ID definitions for all domain entities.

pub use super::id::Id;

/// Marker type for job postings.
pub struct Job;

/// Marker type for user accounts.
pub struct User;

/// Typed ID for job postings.
pub type JobId = Id<Job>;

/// Typed ID for user accounts.
pub type UserId = Id<User>;
