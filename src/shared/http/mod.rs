pub mod cors;
pub mod params;
pub mod response;

pub use cors::cors_layer;
pub use params::{request_context, ListParams, SearchParams};
pub use response::{ApiError, ApiResult};
