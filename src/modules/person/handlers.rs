use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::domain::Person;
use crate::modules::filmwork::domain::FilmworkSummary;
use crate::modules::search_engine::search_policy::SEARCH_LIMIT;
use crate::shared::http::{request_context, ApiResult, ListParams, SearchParams};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/persons", get(list_persons))
        .route("/persons/search", get(search_persons))
        .route("/persons/{id}", get(get_person))
        .route("/persons/{id}/filmworks", get(get_person_filmworks))
}

async fn get_person(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Person> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.persons.get_by_id(&ctx, &id).await?))
}

async fn get_person_filmworks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<FilmworkSummary>> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.persons.get_filmworks(&ctx, &id).await?))
}

async fn list_persons(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Person>> {
    let page = params.page_request()?;
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(state.persons.get_all(&ctx, page).await?))
}

async fn search_persons(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<Person>> {
    let (ctx, _guard) = request_context(state.request_timeout);
    Ok(Json(
        state
            .persons
            .search(&ctx, params.text(), SEARCH_LIMIT)
            .await?,
    ))
}
