use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::shared::errors::{AppError, EntityKind};

/// Indices served by the search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    Movies,
    Genres,
    Persons,
}

impl Index {
    pub fn as_str(&self) -> &'static str {
        match self {
            Index::Movies => "movies",
            Index::Genres => "genres",
            Index::Persons => "persons",
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request against an index
#[derive(Debug, Clone, PartialEq)]
pub enum EngineRequest {
    /// Direct document lookup by identifier
    Get { id: String },
    /// Query DSL search
    Search { body: Value },
}

impl EngineRequest {
    pub fn get(id: impl Into<String>) -> Self {
        EngineRequest::Get { id: id.into() }
    }

    pub fn search(body: Value) -> Self {
        EngineRequest::Search { body }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            EngineRequest::Get { .. } => "get",
            EngineRequest::Search { .. } => "search",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("document not found")]
    NotFound,

    #[error("engine failure [{status:?}]: {body}")]
    Failure { status: Option<u16>, body: String },
}

impl EngineError {
    /// Translate into the catalog taxonomy for a lookup of `entity`/`id`
    pub fn into_app_error(self, entity: EntityKind, id: &str) -> AppError {
        match self {
            EngineError::NotFound => AppError::not_found(entity, id),
            EngineError::Failure { status, body } => AppError::engine(status, body),
        }
    }
}

impl From<EngineError> for AppError {
    /// Outside of identity lookups a missing resource is an engine failure
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotFound => AppError::engine(Some(404), "index or document not found"),
            EngineError::Failure { status, body } => AppError::engine(status, body),
        }
    }
}

pub type EngineResult = Result<Value, EngineError>;

/// Opaque request/response capability of the search engine
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    async fn execute(&self, index: Index, request: EngineRequest) -> EngineResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;

    #[test]
    fn test_index_names() {
        assert_eq!(Index::Movies.as_str(), "movies");
        assert_eq!(Index::Genres.to_string(), "genres");
        assert_eq!(Index::Persons.as_str(), "persons");
    }

    #[test]
    fn test_error_translation() {
        let err = EngineError::NotFound.into_app_error(EntityKind::Filmwork, "f1");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err: AppError = EngineError::NotFound.into();
        assert_eq!(err.kind(), ErrorKind::Engine);

        let err = EngineError::Failure {
            status: Some(500),
            body: "oops".into(),
        }
        .into_app_error(EntityKind::Person, "p1");
        assert!(matches!(err, AppError::Engine { status: Some(500), .. }));
    }
}
