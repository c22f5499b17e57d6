//! Inbound poll authentication middleware
//!
//! The external invoicing system authenticates with an opaque `token`
//! header (no `Bearer` prefix). The middleware resolves the token to a
//! tenant and scopes everything downstream by that tenant's company
//! code. Rejections use the poll envelope: an empty order list plus an
//! error message.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppError;
use crate::models::OrdersResponse;
use crate::services::TenantService;
use crate::AppState;

/// Header carrying the poll token.
pub const TOKEN_HEADER: &str = "token";

/// Tenant resolved from the poll token, available to handlers as a
/// request extension.
#[derive(Clone, Debug)]
pub struct PollTenant {
    pub company_code: String,
}

/// Middleware validating the `token` header against the stored tenant
/// secrets.
pub async fn poll_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        return poll_rejection(AppError::Unauthorized("Missing token header".into()));
    }

    let service = TenantService::new(state.db.clone());
    match service.authenticate(token).await {
        Ok(Some(company_code)) => {
            request.extensions_mut().insert(PollTenant { company_code });
            next.run(request).await
        }
        Ok(None) => poll_rejection(AppError::Unauthorized("Invalid token".into())),
        Err(error) => {
            tracing::error!("tenant secret lookup failed: {:?}", error);
            poll_rejection(error)
        }
    }
}

/// Map an error onto the poll envelope: empty order list plus message.
fn poll_rejection(error: AppError) -> Response {
    (
        error.status(),
        Json(OrdersResponse::error(error.client_message())),
    )
        .into_response()
}
