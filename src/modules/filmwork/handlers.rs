use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::domain::{FilmworkDetail, FilmworkSummary};
use crate::modules::search_engine::search_policy::SEARCH_LIMIT;
use crate::shared::http::{request_context, ApiResult, ListParams, SearchParams};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/filmworks", get(list_filmworks))
        .route("/filmworks/search", get(search_filmworks))
        .route("/filmworks/{id}", get(get_filmwork))
}

async fn get_filmwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<FilmworkDetail> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.filmworks.get_by_id(&ctx, &id).await?))
}

async fn list_filmworks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<FilmworkSummary>> {
    let page = params.page_request()?;
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.filmworks.get_all(&ctx, page).await?))
}

async fn search_filmworks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<FilmworkSummary>> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(
        state
            .filmworks
            .search(&ctx, params.text(), SEARCH_LIMIT)
            .await?,
    ))
}
