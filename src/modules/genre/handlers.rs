use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::domain::Genre;
use crate::modules::search_engine::search_policy::SEARCH_LIMIT;
use crate::shared::http::{request_context, ApiResult, ListParams, SearchParams};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/genres/search", get(search_genres))
        .route("/genres/{id}", get(get_genre))
}

async fn get_genre(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Genre> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.genres.get_by_id(&ctx, &id).await?))
}

async fn list_genres(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Genre>> {
    let page = params.page_request()?;
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.genres.get_all(&ctx, page).await?))
}

async fn search_genres(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<Genre>> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(
        state
            .genres
            .search(&ctx, params.text(), SEARCH_LIMIT)
            .await?,
    ))
}
