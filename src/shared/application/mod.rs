/// Shared application layer patterns
///
/// Request-scoped concerns used by every catalog module.
pub mod context;
pub mod pagination;

pub use context::QueryContext;
pub use pagination::*;
