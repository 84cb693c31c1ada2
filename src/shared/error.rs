use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Helper to create a JSON error response with a standard `{ "error": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

/// Error type shared by both services.
///
/// Every variant maps to one status code and renders as `{ "error": message }`
/// at the handler boundary; request handlers never panic on a failed
/// operation, they return one of these.
pub enum ApiError {
    /// Missing or malformed required field; user-correctable.
    BadRequest(String),
    /// No such product, cart, or cart line.
    NotFound(String),
    /// Requested quantity exceeds the inventory's available stock.
    ///
    /// Carries the available amount so the client can retry with less.
    InsufficientStock { requested: i64, available: i64 },
    /// Reserved for future concurrent-modification detection.
    Conflict(String),
    /// The inter-service call transport-failed or timed out.
    ///
    /// Never folded into `NotFound`: an unreachable product service does not
    /// mean the product doesn't exist.
    UpstreamUnavailable(String),
    /// Store failure or other unexpected internal error.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InsufficientStock { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::UpstreamUnavailable(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::InsufficientStock {
                requested,
                available,
            } => format!(
                "Quantity of {requested} requested but quantity in inventory is {available}"
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.message())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ApiError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            ApiError::InsufficientStock { .. } => {
                write!(f, "Insufficient Stock: {}", self.message())
            }
            ApiError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            ApiError::UpstreamUnavailable(msg) => write!(f, "Upstream Unavailable: {msg}"),
            ApiError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
