use std::sync::Arc;

use async_trait::async_trait;

use super::domain::Genre;
use super::mapper::GenreMapper;
use super::models::GenreDocument;
use crate::modules::search_engine::{
    documents::{decode_document, decode_hits},
    query_builder::{build_fuzzy_search, build_get_all},
    search_policy::GENRE_SEARCH_FIELDS,
    EngineRequest, Index, SearchEngineClient,
};
use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::{AppError, AppResult, EntityKind};
use crate::shared::utils::logger::LogContext;

/// Read access to the `genres` index
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<Genre>;

    async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<Genre>>;

    async fn search(&self, ctx: &QueryContext, query: &str, limit: usize) -> AppResult<Vec<Genre>>;
}

pub struct EsGenreRepository {
    engine: Arc<dyn SearchEngineClient>,
}

impl EsGenreRepository {
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self { engine }
    }

    async fn search_with(&self, ctx: &QueryContext, body: serde_json::Value) -> AppResult<Vec<Genre>> {
        let response = ctx
            .run(async {
                self.engine
                    .execute(Index::Genres, EngineRequest::search(body))
                    .await
                    .map_err(AppError::from)
            })
            .await?;

        let docs: Vec<GenreDocument> = decode_hits(response)?;
        Ok(docs.into_iter().map(GenreMapper::to_genre).collect())
    }
}

#[async_trait]
impl GenreRepository for EsGenreRepository {
    async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<Genre> {
        let response = ctx
            .run(async {
                self.engine
                    .execute(Index::Genres, EngineRequest::get(id))
                    .await
                    .map_err(|e| e.into_app_error(EntityKind::Genre, id))
            })
            .await?;

        let doc: GenreDocument = decode_document(response)?;
        Ok(GenreMapper::to_genre(doc))
    }

    async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<Genre>> {
        self.search_with(ctx, build_get_all(page.offset(), page.limit()))
            .await
    }

    async fn search(&self, ctx: &QueryContext, query: &str, limit: usize) -> AppResult<Vec<Genre>> {
        LogContext::search_operation(query, Some(Index::Genres.as_str()), None);
        let genres = self
            .search_with(ctx, build_fuzzy_search(query, GENRE_SEARCH_FIELDS, limit))
            .await?;
        LogContext::search_operation(query, Some(Index::Genres.as_str()), Some(genres.len()));
        Ok(genres)
    }
}
