use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::domain::{FilmworkDetail, FilmworkSummary};
use super::mapper::FilmworkMapper;
use super::models::{FilmworkDocument, FilmworkSummaryDocument};
use crate::modules::search_engine::{
    documents::{decode_document, decode_hits},
    query_builder::{build_fuzzy_search, build_get_all},
    search_policy::FILMWORK_SEARCH_FIELDS,
    EngineRequest, Index, SearchEngineClient,
};
use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::{AppError, AppResult, EntityKind};
use crate::shared::utils::logger::LogContext;

/// Read access to the `movies` index
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmworkRepository: Send + Sync {
    async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<FilmworkDetail>;

    async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<FilmworkSummary>>;

    async fn search(
        &self,
        ctx: &QueryContext,
        query: &str,
        limit: usize,
    ) -> AppResult<Vec<FilmworkSummary>>;
}

pub struct EsFilmworkRepository {
    engine: Arc<dyn SearchEngineClient>,
}

impl EsFilmworkRepository {
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self { engine }
    }

    async fn search_with(&self, ctx: &QueryContext, body: Value) -> AppResult<Vec<FilmworkSummary>> {
        let response = ctx
            .run(async {
                self.engine
                    .execute(Index::Movies, EngineRequest::search(body))
                    .await
                    .map_err(AppError::from)
            })
            .await?;

        let docs: Vec<FilmworkSummaryDocument> = decode_hits(response)?;
        Ok(docs.into_iter().map(FilmworkMapper::to_summary).collect())
    }
}

#[async_trait]
impl FilmworkRepository for EsFilmworkRepository {
    async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<FilmworkDetail> {
        let response = ctx
            .run(async {
                self.engine
                    .execute(Index::Movies, EngineRequest::get(id))
                    .await
                    .map_err(|e| e.into_app_error(EntityKind::Filmwork, id))
            })
            .await?;

        let doc: FilmworkDocument = decode_document(response)?;
        Ok(FilmworkMapper::to_detail(doc))
    }

    async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<FilmworkSummary>> {
        self.search_with(ctx, build_get_all(page.offset(), page.limit()))
            .await
    }

    async fn search(
        &self,
        ctx: &QueryContext,
        query: &str,
        limit: usize,
    ) -> AppResult<Vec<FilmworkSummary>> {
        LogContext::search_operation(query, Some(Index::Movies.as_str()), None);
        let films = self
            .search_with(ctx, build_fuzzy_search(query, FILMWORK_SEARCH_FIELDS, limit))
            .await?;
        LogContext::search_operation(query, Some(Index::Movies.as_str()), Some(films.len()));
        Ok(films)
    }
}
