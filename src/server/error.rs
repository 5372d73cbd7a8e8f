//! Conversion of request errors into plain-text responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::ScribeError;

impl IntoResponse for ScribeError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!("Rejected request: {}", self);
            return (StatusCode::BAD_REQUEST, self.to_string()).into_response();
        }

        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", self)).into_response()
    }
}
