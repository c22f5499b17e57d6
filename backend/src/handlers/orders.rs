//! Inbound order polling handlers
//!
//! Consumed by the external invoicing system. Both handlers sit behind
//! the poll-auth middleware; the resolved tenant arrives as a request
//! extension.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::error::AppError;
use crate::middleware::PollTenant;
use crate::models::{OrderPollRequest, OrderStatusEntry, OrderStatusResponse, OrdersResponse};
use crate::services::SalesService;
use crate::AppState;

/// Release the tenant's sales as orders.
///
/// The body is optional; an absent or empty body means no filters.
pub async fn poll_orders(
    State(state): State<AppState>,
    Extension(tenant): Extension<PollTenant>,
    body: Option<Json<OrderPollRequest>>,
) -> Response {
    let filter = body.map(|Json(body)| body).unwrap_or_default();
    let service = SalesService::new(state.db.clone());

    match service.list_orders(&tenant.company_code, &filter).await {
        Ok(orders) => {
            tracing::debug!(
                "released {} orders for tenant {}",
                orders.len(),
                tenant.company_code
            );
            (StatusCode::OK, Json(OrdersResponse::ok(orders))).into_response()
        }
        Err(error) => poll_failure(error),
    }
}

/// Static order-status lookup.
///
/// The POS has no status pipeline; every order reports the single
/// approved status the provider expects to see.
pub async fn order_status(Extension(_tenant): Extension<PollTenant>) -> Json<OrderStatusResponse> {
    Json(OrderStatusResponse {
        order_status: vec![OrderStatusEntry {
            id: 1,
            value: "Onaylandı".to_string(),
        }],
    })
}

/// Map a service error onto the poll envelope.
fn poll_failure(error: AppError) -> Response {
    tracing::error!("order poll failed: {:?}", error);
    (
        error.status(),
        Json(OrdersResponse::error(error.client_message())),
    )
        .into_response()
}
