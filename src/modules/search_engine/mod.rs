//! Search engine access: the opaque client capability, its HTTP
//! implementation, query construction and response decoding.

pub mod client;
pub mod documents;
pub mod http_client;
pub mod query_builder;
pub mod search_policy;

#[cfg(test)]
pub mod testing;

pub use client::{EngineError, EngineRequest, EngineResult, Index, SearchEngineClient};
pub use http_client::ElasticClient;
pub use query_builder::FilmworkProjection;
