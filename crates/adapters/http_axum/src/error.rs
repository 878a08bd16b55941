//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use synergia_domain::error::{NotFoundError, SynergiaError};

/// JSON error body returned by every endpoint.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// A use-case failed.
    Domain(SynergiaError),
    /// The request body was not the JSON the endpoint expects.
    Body(JsonRejection),
}

impl From<SynergiaError> for ApiError {
    fn from(err: SynergiaError) -> Self {
        Self::Domain(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(SynergiaError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(SynergiaError::NotFound(err)) => {
                tracing::debug!(entity = err.entity, id = %err.id, "lookup matched nothing");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(SynergiaError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Body(rejection) => {
                tracing::debug!(%rejection, "rejected request body");
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
