// Job Board - API Core
//
// This crate provides the backend API for publishing and managing job postings.
// Domains own their models and actions; the server layer maps them onto HTTP.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
