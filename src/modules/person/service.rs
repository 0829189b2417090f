use std::sync::Arc;

use super::domain::Person;
use super::repository::PersonRepository;
use crate::modules::filmwork::domain::FilmworkSummary;
use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::{AppResult, ResultExt};

#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<Person> {
        self.repo
            .get_by_id(ctx, id)
            .await
            .context("failed to get person")
    }

    pub async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<Person>> {
        self.repo
            .get_all(ctx, page)
            .await
            .context("failed to get persons")
    }

    pub async fn search(&self, ctx: &QueryContext, query: &str, limit: usize) -> AppResult<Vec<Person>> {
        self.repo
            .search(ctx, query, limit)
            .await
            .context("failed to search persons")
    }

    pub async fn get_filmworks(
        &self,
        ctx: &QueryContext,
        person_id: &str,
    ) -> AppResult<Vec<FilmworkSummary>> {
        self.repo
            .filmworks(ctx, person_id)
            .await
            .context("failed to get person filmworks")
    }
}
