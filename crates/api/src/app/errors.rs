use axum::http::StatusCode;
use axum::response::IntoResponse;

use rewards_core::DomainError;
use rewards_receipts::ScoreError;

use crate::app::dto::MessageResponse;

/// Body could not be bound to the receipt shape.
pub const RECEIPT_BIND_FAILED: &str = "Failed to bind the request's JSON to type: Receipt.";

pub const POINTS_NOT_FOUND: &str = "Points not found for that id.";

pub fn score_error_to_response(err: ScoreError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.to_string())
}

/// Malformed ids are reported exactly like unknown ones.
pub fn lookup_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidId(_) | DomainError::NotFound => {
            json_error(StatusCode::NOT_FOUND, POINTS_NOT_FOUND)
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}
