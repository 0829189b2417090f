use std::sync::Arc;

use super::domain::{FilmworkDetail, FilmworkSummary};
use super::repository::FilmworkRepository;
use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::{AppResult, ResultExt};

#[derive(Clone)]
pub struct FilmworkService {
    repo: Arc<dyn FilmworkRepository>,
}

impl FilmworkService {
    pub fn new(repo: Arc<dyn FilmworkRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_by_id(&self, ctx: &QueryContext, id: &str) -> AppResult<FilmworkDetail> {
        self.repo
            .get_by_id(ctx, id)
            .await
            .context("failed to get filmwork")
    }

    pub async fn get_all(
        &self,
        ctx: &QueryContext,
        page: PageRequest,
    ) -> AppResult<Vec<FilmworkSummary>> {
        self.repo
            .get_all(ctx, page)
            .await
            .context("failed to get filmworks")
    }

    pub async fn search(
        &self,
        ctx: &QueryContext,
        query: &str,
        limit: usize,
    ) -> AppResult<Vec<FilmworkSummary>> {
        self.repo
            .search(ctx, query, limit)
            .await
            .context("failed to search filmworks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::filmwork::repository::MockFilmworkRepository;
    use crate::shared::errors::{AppError, ErrorKind};

    #[tokio::test]
    async fn test_search_wraps_error() {
        let mut repo = MockFilmworkRepository::new();
        repo.expect_search()
            .withf(|_, q, limit| q == "star" && *limit == 1000)
            .returning(|_, _, _| Err(AppError::engine(None, "connection refused")));

        let service = FilmworkService::new(Arc::new(repo));
        let err = service
            .search(&QueryContext::new(), "star", 1000)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Engine);
        assert!(err.to_string().starts_with("failed to search filmworks: "));
    }

    #[tokio::test]
    async fn test_get_by_id_and_get_all_contexts() {
        let mut repo = MockFilmworkRepository::new();
        repo.expect_get_by_id()
            .returning(|_, _| Err(AppError::Cancelled));
        repo.expect_get_all().returning(|_, _| Ok(vec![]));

        let service = FilmworkService::new(Arc::new(repo));
        let ctx = QueryContext::new();

        let err = service.get_by_id(&ctx, "f1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(err.to_string().starts_with("failed to get filmwork: "));

        assert!(service
            .get_all(&ctx, PageRequest::default())
            .await
            .unwrap()
            .is_empty());
    }
}
