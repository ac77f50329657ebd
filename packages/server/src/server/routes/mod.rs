// HTTP routes
pub mod fallback;
pub mod health;
pub mod jobs;
pub mod users;

pub use fallback::*;
pub use health::*;
pub use jobs::*;
pub use users::*;
