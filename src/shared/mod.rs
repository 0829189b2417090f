// Shared kernel used by every catalog module

pub mod application; // Request-scoped patterns (pagination, cancellation)
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod http; // HTTP transport helpers
pub mod utils; // Logging

pub use application::{PageRequest, QueryContext};
pub use config::AppConfig;
pub use errors::{AppError, AppResult, EntityKind, ErrorKind};
