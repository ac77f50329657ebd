//! Jobs domain - job postings and their company details
//!
//! Responsibilities:
//! - Validated creation with a unique company contact email
//! - Listing (optionally newest-first and capped), lookup by id
//! - Partial update and delete by id

pub mod actions;
pub mod data;
pub mod models;

pub use models::{Company, Job};
