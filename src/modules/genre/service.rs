use std::sync::Arc;

use super::domain::Genre;
use super::repository::GenreRepository;
use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::{AppResult, ResultExt};

/// Entry point used by the transport layer for genre queries
#[derive(Clone)]
pub struct GenreService {
    repo: Arc<dyn GenreRepository>,
}

impl GenreService {
    pub fn new(repo: Arc<dyn GenreRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<Genre> {
        self.repo
            .get_by_id(ctx, id)
            .await
            .context("failed to get genre")
    }

    pub async fn get_all(&self, ctx: &QueryContext, page: PageRequest) -> AppResult<Vec<Genre>> {
        self.repo
            .get_all(ctx, page)
            .await
            .context("failed to get genres")
    }

    pub async fn search(&self, ctx: &QueryContext, query: &str, limit: usize) -> AppResult<Vec<Genre>> {
        self.repo
            .search(ctx, query, limit)
            .await
            .context("failed to search genres")
    }
}
