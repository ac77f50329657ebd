// Business domains
pub mod auth;
pub mod jobs;
