use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use rewards_receipts::Receipt;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/process", post(process_receipt))
        .route("/:id/points", get(get_points))
}

pub async fn process_receipt(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Receipt>, JsonRejection>,
) -> axum::response::Response {
    let Json(receipt) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "receipt body rejected");
            return errors::json_error(StatusCode::BAD_REQUEST, errors::RECEIPT_BIND_FAILED);
        }
    };

    match services.process_receipt(&receipt) {
        Ok(id) => (StatusCode::CREATED, Json(dto::ProcessReceiptResponse { id })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, retailer = %receipt.retailer, "receipt rejected");
            errors::score_error_to_response(e)
        }
    }
}

pub async fn get_points(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.points(&id) {
        Ok(points) => (StatusCode::OK, Json(dto::PointsResponse { points })).into_response(),
        Err(e) => {
            tracing::debug!(%id, error = %e, "points lookup missed");
            errors::lookup_error_to_response(e)
        }
    }
}
