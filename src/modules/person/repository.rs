use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::debug;
use serde_json::Value;

use super::aggregation::derive_credits;
use super::domain::{Person, PersonCredits};
use super::mapper::PersonMapper;
use super::models::{CreditedFilmworkDocument, PersonDocument};
use crate::modules::filmwork::domain::FilmworkSummary;
use crate::modules::filmwork::mapper::FilmworkMapper;
use crate::modules::filmwork::models::FilmworkSummaryDocument;
use crate::modules::search_engine::{
    documents::{decode_document, decode_hits, decode_hits_lenient},
    query_builder::{build_get_all, build_person_filmworks_query, build_person_search},
    search_policy::DEFAULT_PERSON_SEARCH_LIMIT,
    EngineRequest, FilmworkProjection, Index, SearchEngineClient,
};
use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::{AppError, AppResult, EntityKind};
use crate::shared::utils::logger::LogContext;

pub const DEFAULT_AGGREGATION_CONCURRENCY: usize = 8;

/// Read access to persons, with roles and filmographies recovered from `movies`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<Person>;

    async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<Person>>;

    async fn search(&self, ctx: &QueryContext, query: &str, limit: usize) -> AppResult<Vec<Person>>;

    /// Filmworks crediting the person, best rated first
    async fn filmworks(&self, ctx: &QueryContext, person_id: &str) -> AppResult<Vec<FilmworkSummary>>;

    async fn roles_and_filmwork_ids(
        &self,
        ctx: &QueryContext,
        person_id: &str,
    ) -> AppResult<PersonCredits>;
}

pub struct EsPersonRepository {
    engine: Arc<dyn SearchEngineClient>,
    concurrency: usize,
}

impl EsPersonRepository {
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            engine,
            concurrency: DEFAULT_AGGREGATION_CONCURRENCY,
        }
    }

    /// Cap on credit queries in flight while listing persons
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    async fn search_index(&self, ctx: &QueryContext, index: Index, body: Value) -> AppResult<Value> {
        ctx.run(async {
            self.engine
                .execute(index, EngineRequest::search(body))
                .await
                .map_err(AppError::from)
        })
        .await
    }

    async fn credits(&self, ctx: &QueryContext, person_id: &str) -> AppResult<PersonCredits> {
        let body = build_person_filmworks_query(person_id, FilmworkProjection::Credits);
        let response = self.search_index(ctx, Index::Movies, body).await?;
        let docs: Vec<CreditedFilmworkDocument> = decode_hits(response)?;
        Ok(derive_credits(person_id, docs))
    }

    /// Attach credits to every person hit.
    ///
    /// Hits that fail to decode or aggregate are dropped; cancellation and
    /// deadline expiry fail the whole listing.
    async fn with_credits(
        &self,
        ctx: &QueryContext,
        operation: &str,
        response: Value,
    ) -> AppResult<Vec<Person>> {
        let hits: Vec<AppResult<PersonDocument>> = decode_hits_lenient(response)?;
        let total = hits.len();

        let results: Vec<AppResult<Person>> = stream::iter(hits)
            .map(|hit| async move {
                let doc = hit?;
                let credits = self.credits(ctx, &doc.id).await?;
                Ok::<_, AppError>(PersonMapper::to_person(doc, credits))
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut persons = Vec::with_capacity(total);
        for result in results {
            match result {
                Ok(person) => persons.push(person),
                Err(e) if e.is_interruption() => return Err(e),
                Err(e) => debug!("{}: skipping person hit: {}", operation, e),
            }
        }

        LogContext::partial_result(operation, persons.len(), total - persons.len());
        Ok(persons)
    }
}

#[async_trait]
impl PersonRepository for EsPersonRepository {
    async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<Person> {
        let response = ctx
            .run(async {
                self.engine
                    .execute(Index::Persons, EngineRequest::get(id))
                    .await
                    .map_err(|e| e.into_app_error(EntityKind::Person, id))
            })
            .await?;

        let doc: PersonDocument = decode_document(response)?;
        let credits = self.credits(ctx, id).await?;
        Ok(PersonMapper::to_person(doc, credits))
    }

    async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<Person>> {
        let response = self
            .search_index(ctx, Index::Persons, build_get_all(page.offset(), page.limit()))
            .await?;
        self.with_credits(ctx, "list persons", response).await
    }

    async fn search(&self, ctx: &QueryContext, query: &str, limit: usize) -> AppResult<Vec<Person>> {
        let limit = if limit == 0 {
            DEFAULT_PERSON_SEARCH_LIMIT
        } else {
            limit
        };

        LogContext::search_operation(query, Some(Index::Persons.as_str()), None);
        let response = self
            .search_index(ctx, Index::Persons, build_person_search(query, limit))
            .await?;
        let persons = self.with_credits(ctx, "search persons", response).await?;
        LogContext::search_operation(query, Some(Index::Persons.as_str()), Some(persons.len()));
        Ok(persons)
    }

    async fn filmworks(&self, ctx: &QueryContext, person_id: &str) -> AppResult<Vec<FilmworkSummary>> {
        let body = build_person_filmworks_query(person_id, FilmworkProjection::RatedSummary);
        let response = self.search_index(ctx, Index::Movies, body).await?;
        let docs: Vec<FilmworkSummaryDocument> = decode_hits(response)?;
        Ok(docs.into_iter().map(FilmworkMapper::to_summary).collect())
    }

    async fn roles_and_filmwork_ids(
        &self,
        ctx: &QueryContext,
        person_id: &str,
    ) -> AppResult<PersonCredits> {
        self.credits(ctx, person_id).await
    }
}
