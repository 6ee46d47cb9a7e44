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
    models::{Created, Genre, NameFields},
};

const ENTITY: &str = "genre";

/// Carries the new id on 201 responses, next to `Location`.
const ID_HEADER: HeaderName = HeaderName::from_static("id");

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/genres", get(list).post(create))
        .route("/genres/", get(list).post(create))
        .route("/genres/{id}", get(show).put(update).delete(remove))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.genres.list().await?;
    if genres.is_empty() {
        return Err(AppError::NoMatches { entity: "genres" });
    }
    Ok(Json(genres.into_iter().map(Genre::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<NameFields>,
) -> AppResult<impl IntoResponse> {
    let genre = state.genres.create(fields).await?;
    info!(genre_id = genre.id, "genre created");

    Ok((
        StatusCode::CREATED,
        [
            (header::LOCATION, format!("/genres/{}", genre.id)),
            (ID_HEADER, genre.id.to_string()),
        ],
        Json(Created { id: genre.id }),
    ))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<Genre>> {
    let genre = state.genres.get(id).await?.ok_or(AppError::NotFound { entity: ENTITY, id })?;
    Ok(Json(genre.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(fields): JsonBody<NameFields>,
) -> AppResult<Json<Genre>> {
    let genre =
        state.genres.update(id, fields).await?.ok_or(AppError::NotFound { entity: ENTITY, id })?;
    info!(genre_id = id, "genre updated");
    Ok(Json(genre.into()))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    if !state.genres.delete(id).await? {
        return Err(AppError::NotFound { entity: ENTITY, id });
    }
    info!(genre_id = id, "genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
