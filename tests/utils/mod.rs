#![allow(dead_code)]

pub mod engine;
pub mod factories;

use std::sync::Arc;
use std::time::Duration;

use movies_api_lib::AppState;

pub use engine::InMemoryEngine;

/// Application state over an in-memory engine
pub fn app_state(engine: Arc<InMemoryEngine>) -> AppState {
    AppState::new(engine, 4, Duration::from_secs(5))
}
