use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Entity kinds served by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Genre,
    Filmwork,
    Person,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Genre => "genre",
            EntityKind::Filmwork => "filmwork",
            EntityKind::Person => "person",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root classification of an error, stable across context wrapping.
/// The transport layer maps this to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Engine,
    Validation,
    Decode,
    Cancelled,
    TimedOut,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} with ID '{id}' not found")]
    NotFound { entity: EntityKind, id: String },

    #[error("search engine error [{}]: {body}", status.map_or_else(|| "no response".to_string(), |s| s.to_string()))]
    Engine { status: Option<u16>, body: String },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("response parsing error: {0}")]
    Decode(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("operation timed out after {0:?}")]
    TimedOut(Duration),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn engine(status: Option<u16>, body: impl Into<String>) -> Self {
        AppError::Engine {
            status,
            body: body.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wrap the error with an operation-specific context tag
    pub fn context(self, context: impl Into<String>) -> Self {
        AppError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Kind of the innermost error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Engine { .. } => ErrorKind::Engine,
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::Cancelled => ErrorKind::Cancelled,
            AppError::TimedOut(_) => ErrorKind::TimedOut,
            AppError::Context { source, .. } => source.kind(),
        }
    }

    /// Innermost error with all context layers stripped
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Cancellation and deadline expiry must never be swallowed by partial-result paths
    pub fn is_interruption(&self) -> bool {
        matches!(self.kind(), ErrorKind::Cancelled | ErrorKind::TimedOut)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Extension for attaching operation context to results
pub trait ResultExt<T> {
    fn context(self, context: &str) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn context(self, context: &str) -> AppResult<T> {
        self.map_err(|e| e.context(context))
    }
}
