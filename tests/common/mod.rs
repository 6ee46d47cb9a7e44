#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use moviedb::{AppState, app, db};

/// Router over a fresh in-memory database with the schema applied.
///
/// The pool is capped at a single connection so every request sees the same
/// in-memory database.
pub async fn build_test_app() -> Router {
    let db = db::connect_and_migrate("sqlite::memory:", 1).await.unwrap();
    app(Arc::new(AppState::new(db)))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        },
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// POSTs `body` to a collection endpoint and returns the generated id.
pub async fn create(app: &Router, collection: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, collection, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

pub fn movie_body(
    title: &str,
    director_id: Option<i64>,
    genre_id: Option<i64>,
) -> serde_json::Value {
    let slug = title.to_lowercase().replace(' ', "-");
    serde_json::json!({
        "title": title,
        "description": format!("{title} description"),
        "trailer": format!("https://trailers.example.com/{slug}"),
        "year": 2001,
        "rating": 7.5,
        "genre_id": genre_id,
        "director_id": director_id,
    })
}
