use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest,
    NotFound(&'static str),
    Database(sqlx::Error),
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    msg: String,
}

impl ErrorBody {
    pub fn new(msg: &str) -> ErrorBody {
        ErrorBody {
            msg: msg.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        Self::Database(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl ApiError {
    pub fn to_json_response(&self) -> JsonResponse<ErrorBody> {
        let (status_code, json) = match self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, ErrorBody::new("Bad request")),
            ApiError::NotFound(entity) => (StatusCode::NOT_FOUND, ErrorBody::new(entity)),
            ApiError::Database(e) => {
                // Logged server-side only; callers get a generic message.
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal Server Error"),
                )
            }
        };
        (status_code, Json(json))
    }
}
