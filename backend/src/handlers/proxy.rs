//! Outbound proxy handler
//!
//! The front end cannot call the e-invoice API directly (CORS, credential
//! headers), so it posts the target endpoint, payload, and its own
//! credentials here. Missing fields are rejected locally; everything else
//! is relayed and the upstream response returned verbatim.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::external::birfatura::ProxyCredentials;
use crate::models::ProxyRequest;
use crate::AppState;

/// Forward a front-end request to the BirFatura API.
pub async fn birfatura_proxy(
    State(state): State<AppState>,
    Json(request): Json<ProxyRequest>,
) -> Response {
    if let Err(errors) = request.validate() {
        return rejection(describe_validation_errors(&errors));
    }
    if request.payload.is_null() {
        return rejection("payload is required".to_string());
    }

    let credentials = ProxyCredentials {
        api_key: request.api_key,
        secret_key: request.secret_key,
        integration_key: request.integration_key,
    };

    let outcome = state
        .birfatura
        .forward(&request.endpoint, &request.payload, &credentials)
        .await;

    (outcome.status, Json(outcome.body)).into_response()
}

/// Local rejection in the external system's own error envelope, so the
/// front end handles both uniformly.
fn rejection(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "Success": false,
            "Message": message,
            "StatusCode": 400,
        })),
    )
        .into_response()
}

fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
