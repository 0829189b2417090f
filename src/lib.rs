pub mod modules;
pub mod shared;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use modules::{
    filmwork::{EsFilmworkRepository, FilmworkService},
    genre::{EsGenreRepository, GenreService},
    person::{EsPersonRepository, PersonService},
    search_engine::{ElasticClient, SearchEngineClient},
};
use shared::{config::CorsSettings, http::cors_layer, utils::init_logger, AppConfig};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub genres: GenreService,
    pub filmworks: FilmworkService,
    pub persons: PersonService,
    pub request_timeout: Duration,
}

impl AppState {
    /// Wire repositories and services over one engine client
    pub fn new(
        engine: Arc<dyn SearchEngineClient>,
        aggregation_concurrency: usize,
        request_timeout: Duration,
    ) -> Self {
        Self {
            genres: GenreService::new(Arc::new(EsGenreRepository::new(engine.clone()))),
            filmworks: FilmworkService::new(Arc::new(EsFilmworkRepository::new(engine.clone()))),
            persons: PersonService::new(Arc::new(
                EsPersonRepository::new(engine).with_concurrency(aggregation_concurrency),
            )),
            request_timeout,
        }
    }
}

async fn healthz() -> Json<Value> {
    Json(json!({ "message": "ok" }))
}

pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(modules::genre::handlers::routes())
        .merge(modules::filmwork::handlers::routes())
        .merge(modules::person::handlers::routes())
        .layer(cors_layer(cors))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env()?;
    log::info!("Starting movies API in '{}' environment", config.app.env);

    let client = ElasticClient::from_settings(&config.elastic);
    match client.info().await {
        Ok(banner) => log::info!(
            "Connected to search engine at {}: {}",
            client.base_url(),
            banner["version"]["number"].as_str().unwrap_or("unknown version")
        ),
        Err(e) => log::warn!(
            "Search engine at {} is not reachable yet: {}",
            client.base_url(),
            e
        ),
    }

    let state = AppState::new(
        Arc::new(client),
        config.catalog.aggregation_concurrency,
        config.http.request_timeout,
    );
    let app = build_router(state, &config.http.cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http.port)).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
