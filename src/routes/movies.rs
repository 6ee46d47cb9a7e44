use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderName, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{ItemId, JsonBody},
    models::{Created, Movie, MovieFields, MovieQuery},
};

const ENTITY: &str = "movie";

/// Carries the new id on 201 responses, next to `Location`.
const ID_HEADER: HeaderName = HeaderName::from_static("movie_id");

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list).post(create))
        .route("/movies/", get(list).post(create))
        .route("/movies/{id}", get(show).put(update).delete(remove))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MovieQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    // An id filter that is not a number cannot match any row.
    let Some(filter) = query.filter() else {
        return Err(AppError::NoMatches { entity: "movies" });
    };
    let movies = state.movies.list(filter).await?;
    if movies.is_empty() {
        return Err(AppError::NoMatches { entity: "movies" });
    }
    Ok(Json(movies.into_iter().map(Movie::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<MovieFields>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movies.create(fields).await?;
    info!(movie_id = movie.id, "movie created");

    Ok((
        StatusCode::CREATED,
        [
            (header::LOCATION, format!("/movies/{}", movie.id)),
            (ID_HEADER, movie.id.to_string()),
        ],
        Json(Created { id: movie.id }),
    ))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.get(id).await?.ok_or(AppError::NotFound { entity: ENTITY, id })?;
    Ok(Json(movie.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(fields): JsonBody<MovieFields>,
) -> AppResult<Json<Movie>> {
    let movie =
        state.movies.update(id, fields).await?.ok_or(AppError::NotFound { entity: ENTITY, id })?;
    info!(movie_id = id, "movie updated");
    Ok(Json(movie.into()))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    if !state.movies.delete(id).await? {
        return Err(AppError::NotFound { entity: ENTITY, id });
    }
    info!(movie_id = id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
