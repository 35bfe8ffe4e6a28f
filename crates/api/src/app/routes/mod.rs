use axum::Router;

pub mod receipts;
pub mod system;

/// Router for the receipt endpoints.
pub fn router() -> Router {
    Router::new().nest("/receipts", receipts::router())
}
