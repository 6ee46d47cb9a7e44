pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod models;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::repository::{DirectorRepository, GenreRepository, MovieRepository};

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieRepository,
    pub directors: DirectorRepository,
    pub genres: GenreRepository,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            movies: MovieRepository::new(db.clone()),
            directors: DirectorRepository::new(db.clone()),
            genres: GenreRepository::new(db),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::movies::router())
        .merge(routes::directors::router())
        .merge(routes::genres::router())
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
