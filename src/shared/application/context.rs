//! Per-request execution context
//!
//! Carries the caller's cancellation signal and an optional deadline through
//! every repository call. Engine requests are raced against both.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    token: CancellationToken,
    deadline: Option<(Instant, Duration)>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context driven by an existing cancellation token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Fail every operation still running after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some((Instant::now() + timeout, timeout));
        self
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Guard that cancels the context when dropped
    pub fn drop_guard(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    /// Run `fut` unless the context is cancelled or its deadline passes first
    pub async fn run<T, F>(&self, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        match self.deadline {
            Some((deadline, timeout)) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(AppError::Cancelled),
                    _ = tokio::time::sleep_until(deadline) => Err(AppError::TimedOut(timeout)),
                    result = fut => result,
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(AppError::Cancelled),
                    result = fut => result,
                }
            }
        }
    }
}
