//! Server error types with HTTP status code mapping

use crate::routes::Envelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rucities_core::GeoError;
use thiserror::Error;

/// Server error type that wraps core errors and provides HTTP status mapping
#[derive(Error, Debug)]
pub enum ServerError {
    /// Core query or load error
    #[error("{0}")]
    Geo(#[from] GeoError),

    /// Missing or malformed query parameter
    #[error("{0}")]
    BadRequest(String),
}

impl ServerError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 - Not Found
            ServerError::Geo(GeoError::NotFound(_)) => StatusCode::NOT_FOUND,

            // 400 - Bad Request (client errors)
            ServerError::Geo(GeoError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 500 - anything that escaped from the loader
            ServerError::Geo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ServerError::BadRequest(msg.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(Envelope::failed(self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
