//! Product maintenance handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::models::ForceDeleteRequest;
use crate::services::{product::ForceDeleteOutcome, ProductService};
use crate::AppState;

/// Force-delete a product by stock code.
///
/// Operational escape hatch: hard delete with the backend's elevated
/// role, falling back to retiring the stock code when references block
/// the delete.
pub async fn force_delete_product(
    State(state): State<AppState>,
    Json(request): Json<ForceDeleteRequest>,
) -> Response {
    let stock_code = request.stock_code.trim();
    if stock_code.is_empty() {
        return AppError::Validation("stockCode is required".to_string()).into_response();
    }

    let service = ProductService::new(state.db.clone());
    match service.force_delete(stock_code).await {
        Ok(ForceDeleteOutcome::Deleted) => (
            StatusCode::OK,
            Json(json!({ "success": true, "action": "deleted" })),
        )
            .into_response(),
        Ok(ForceDeleteOutcome::Renamed(renamed)) => (
            StatusCode::OK,
            Json(json!({ "success": true, "action": "renamed", "stockCode": renamed })),
        )
            .into_response(),
        Ok(ForceDeleteOutcome::NotFound) => {
            AppError::NotFound("Product".to_string()).into_response()
        }
        Err(error) => error.into_response(),
    }
}
