use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{ItemId, JsonBody},
    models::{Created, Director, NameFields},
};

const ENTITY: &str = "director";

/// Carries the new id on 201 responses, next to `Location`.
const ID_HEADER: HeaderName = HeaderName::from_static("id");

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/directors", get(list).post(create))
        .route("/directors/", get(list).post(create))
        .route("/directors/{id}", get(show).put(update).delete(remove))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Director>>> {
    let directors = state.directors.list().await?;
    if directors.is_empty() {
        return Err(AppError::NoMatches { entity: "directors" });
    }
    Ok(Json(directors.into_iter().map(Director::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<NameFields>,
) -> AppResult<impl IntoResponse> {
    let director = state.directors.create(fields).await?;
    info!(director_id = director.id, "director created");

    Ok((
        StatusCode::CREATED,
        [
            (header::LOCATION, format!("/directors/{}", director.id)),
            (ID_HEADER, director.id.to_string()),
        ],
        Json(Created { id: director.id }),
    ))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<Director>> {
    let director = state.directors.get(id).await?.ok_or(AppError::NotFound { entity: ENTITY, id })?;
    Ok(Json(director.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(fields): JsonBody<NameFields>,
) -> AppResult<Json<Director>> {
    let director =
        state.directors.update(id, fields).await?.ok_or(AppError::NotFound { entity: ENTITY, id })?;
    info!(director_id = id, "director updated");
    Ok(Json(director.into()))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    if !state.directors.delete(id).await? {
        return Err(AppError::NotFound { entity: ENTITY, id });
    }
    info!(director_id = id, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
