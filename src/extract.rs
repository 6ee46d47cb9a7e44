use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Json<T>` with rejections mapped onto [`AppError`], so a missing key
/// surfaces as [`AppError::MissingField`] rather than axum's 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(classify(rejection)),
        }
    }
}

/// The `{id}` path segment. Anything that is not an `i32` names no item,
/// so it is a 404 instead of axum's 400.
#[derive(Clone, Copy, Debug)]
pub struct ItemId(pub i32);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::PageNotFound)?;
        Ok(Self(id))
    }
}

fn classify(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    let field = match rejection {
        JsonRejection::JsonDataError(_) => missing_field(&text).map(str::to_string),
        _ => None,
    };
    match field {
        Some(field) => AppError::MissingField(field),
        None => AppError::InvalidBody(text),
    }
}

// axum renders data errors as "<context>: <serde error>", where the serde
// error carries a "<path>: " prefix unless it is about the top-level object.
fn missing_field(message: &str) -> Option<&str> {
    let (_, detail) = message.split_once(": ")?;
    let rest = detail.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}
