use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error body returned by every handler: `{"error": "..."}`.
pub struct ApiError(pub nr_core::Error);

impl From<nr_core::Error> for ApiError {
    fn from(error: nr_core::Error) -> Self {
        Self(error)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        use nr_core::Error::*;
        match &self.0 {
            EmptyTopic | InvalidUrl(_) => StatusCode::BAD_REQUEST,
            NoArticles => StatusCode::UNPROCESSABLE_ENTITY,
            Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            Publish(_) | Http(_) | Transient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
