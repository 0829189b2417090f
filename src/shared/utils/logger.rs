use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("movies_api_lib", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log search engine calls
    pub fn engine_call(index: &str, operation: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => debug!(
                "Engine: {} {} {} in {}ms",
                operation, index, status, duration
            ),
            None => debug!("Engine: Starting {} on {}", operation, index),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, index: Option<&str>, results: Option<usize>) {
        match (index, results) {
            (Some(i), Some(r)) => info!("Search: '{}' on {} returned {} results", query, i, r),
            (Some(i), None) => debug!("Search: Starting '{}' on {}", query, i),
            (None, Some(r)) => info!("Search: '{}' returned {} results", query, r),
            (None, None) => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log hits dropped from a bulk listing
    pub fn partial_result(operation: &str, kept: usize, skipped: usize) {
        if skipped > 0 {
            warn!(
                "{}: dropped {} of {} hits after per-hit failures",
                operation,
                skipped,
                kept + skipped
            );
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish(self) -> u64 {
        let duration = self.elapsed_ms();
        debug!("Performance: {} took {}ms", self.operation, duration);
        duration
    }
}
