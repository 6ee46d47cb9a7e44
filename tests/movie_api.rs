//! HTTP-level tests for the `/movies` resource, driven through the router
//! with `tower::ServiceExt` against an in-memory database.

mod common;

use axum::http::{StatusCode, header::LOCATION};
use common::{body_json, body_text, create, delete, get, movie_body, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn create_then_get_returns_same_fields_with_id() {
    let app = common::build_test_app().await;
    let director = create(&app, "/directors/", json!({"name": "Wong Kar-wai"})).await;
    let genre = create(&app, "/genres/", json!({"name": "Romance"})).await;

    let body = movie_body("In the Mood for Love", Some(director), Some(genre));
    let response = post_json(&app, "/movies/", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    let id_header = response.headers()["movie_id"].to_str().unwrap().to_string();
    let id = body_json(response).await["id"].as_i64().unwrap();
    assert_eq!(location, format!("/movies/{id}"));
    assert_eq!(id_header, id.to_string());

    let response = get(&app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = body;
    expected["id"] = json!(id);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn get_unknown_movie_is_404() {
    let app = common::build_test_app().await;
    let response = get(&app, "/movies/4242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "movie 4242 not found");
}

#[tokio::test]
async fn list_filters_by_director_and_genre() {
    let app = common::build_test_app().await;
    let director = create(&app, "/directors/", json!({"name": "Jean-Pierre Melville"})).await;
    let crime = create(&app, "/genres/", json!({"name": "Crime"})).await;
    let war = create(&app, "/genres/", json!({"name": "War"})).await;

    let a = movie_body("Le Samourai", Some(director), Some(crime));
    let a = create(&app, "/movies/", a).await;
    let b = movie_body("Army of Shadows", Some(director), Some(war));
    let b = create(&app, "/movies/", b).await;

    let response = get(&app, &format!("/movies/?director_id={director}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ids: Vec<i64> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);

    let response = get(&app, &format!("/movies/?director_id={director}&genre_id={crime}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], a);
    assert_eq!(arr[0]["title"], "Le Samourai");

    let response = get(&app, "/movies/?director_id=99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_without_filters_returns_everything() {
    let app = common::build_test_app().await;
    create(&app, "/movies/", movie_body("Stalker", None, None)).await;
    create(&app, "/movies/", movie_body("Solaris", None, None)).await;

    let response = get(&app, "/movies").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    // An empty filter value counts as no filter.
    let response = get(&app, "/movies/?director_id=&genre_id=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_movie_table_lists_as_404() {
    let app = common::build_test_app().await;
    let response = get(&app, "/movies/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "no movies found");
}

#[tokio::test]
async fn non_numeric_filter_matches_nothing() {
    let app = common::build_test_app().await;
    create(&app, "/movies/", movie_body("Chinatown", None, None)).await;

    let response = get(&app, "/movies/?genre_id=noir").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "no movies found");

    let response = get(&app, "/movies/?director_id=99999999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_or_oversized_id_is_404() {
    let app = common::build_test_app().await;
    for uri in ["/movies/abc", "/movies/99999999999"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let app = common::build_test_app().await;
    let director = create(&app, "/directors/", json!({"name": "Agnes Varda"})).await;
    let id = create(&app, "/movies/", movie_body("Cleo from 5 to 7", Some(director), None)).await;

    let replacement = json!({
        "title": "Vagabond",
        "description": "A drifter in winter.",
        "trailer": "https://trailers.example.com/vagabond",
        "year": 1985,
        "rating": 7.8,
        "genre_id": null,
        "director_id": null,
    });
    let response = put_json(&app, &format!("/movies/{id}"), replacement.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &format!("/movies/{id}")).await;
    let mut expected = replacement;
    expected["id"] = json!(id);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn update_missing_field_leaves_movie_unchanged() {
    let app = common::build_test_app().await;
    let original = movie_body("Ran", None, None);
    let id = create(&app, "/movies/", original.clone()).await;

    let mut partial = movie_body("Kagemusha", None, None);
    partial.as_object_mut().unwrap().remove("rating");
    let response = put_json(&app, &format!("/movies/{id}"), partial).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "missing field: rating");

    let response = get(&app, &format!("/movies/{id}")).await;
    let mut expected = original;
    expected["id"] = json!(id);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn wrong_type_is_not_reported_as_missing_field() {
    let app = common::build_test_app().await;
    let original = movie_body("Alphaville", None, None);
    let id = create(&app, "/movies/", original.clone()).await;

    let mut body = movie_body("Alphaville", None, None);
    body["year"] = json!("missing field `title`");
    let response = put_json(&app, &format!("/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let text = body_text(response).await;
    assert!(text.starts_with("invalid request body"), "{text}");

    let response = get(&app, &format!("/movies/{id}")).await;
    let mut expected = original;
    expected["id"] = json!(id);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn update_unknown_movie_is_404() {
    let app = common::build_test_app().await;
    let response = put_json(&app, "/movies/77", movie_body("Nothing", None, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_missing_field_is_rejected() {
    let app = common::build_test_app().await;
    let mut body = movie_body("Playtime", None, None);
    body.as_object_mut().unwrap().remove("genre_id");

    let response = post_json(&app, "/movies/", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "missing field: genre_id");

    let response = get(&app, "/movies/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_unknown_field_is_rejected() {
    let app = common::build_test_app().await;
    let mut body = movie_body("Mon Oncle", None, None);
    body["id"] = json!(12);

    let response = post_json(&app, "/movies/", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_dangling_director_is_storage_error() {
    let app = common::build_test_app().await;
    let response = post_json(&app, "/movies/", movie_body("Orphan", Some(999), None)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "internal server error");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = common::build_test_app().await;
    let id = create(&app, "/movies/", movie_body("Persona", None, None)).await;

    let response = delete(&app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(common::body_bytes(response).await.is_empty());

    let response = get(&app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_director_clears_movie_reference() {
    let app = common::build_test_app().await;
    let director = create(&app, "/directors/", json!({"name": "Chris Marker"})).await;
    let id = create(&app, "/movies/", movie_body("La Jetee", Some(director), None)).await;

    let response = delete(&app, &format!("/directors/{director}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["director_id"], serde_json::Value::Null);
}
