//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PostgresJobStore, PostgresUserStore, ServerDeps};
pub use test_dependencies::{InMemoryJobStore, InMemoryUserStore, TestDependencies};
pub use traits::*;
