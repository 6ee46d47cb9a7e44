use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A path that does not name an item, e.g. `/movies/abc`.
    #[error("page not found")]
    PageNotFound,

    /// A list query that matched nothing. Rendered as 404, same as a missing id.
    #[error("no {entity} found")]
    NoMatches { entity: &'static str },

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::PageNotFound | AppError::NoMatches { .. } => {
                StatusCode::NOT_FOUND
            },
            AppError::MissingField(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                "internal server error".to_string()
            },
            other => other.to_string(),
        };
        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
