//! API models for the POS Invoice Bridge backend
//!
//! Re-exports the shared domain models and adds the request/response
//! shapes of the HTTP surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

pub use shared::models::*;

/// Poll request body sent by the external invoicing system.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPollRequest {
    /// Window start in `DD.MM.YYYY HH:mm:ss`; malformed values disable
    /// the filter rather than failing the request.
    #[serde(default, rename = "startDateTime")]
    pub start_date_time: Option<String>,

    /// Window end, same format and semantics as the start.
    #[serde(default, rename = "endDateTime")]
    pub end_date_time: Option<String>,

    /// Optional exact-match filter on the sale code.
    #[serde(default, rename = "OrderCode")]
    pub order_code: Option<String>,
}

/// Poll response envelope. `error` appears only on failure; the order
/// list is always present, empty on any error.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    #[serde(rename = "Orders")]
    pub orders: Vec<ExternalOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrdersResponse {
    pub fn ok(orders: Vec<ExternalOrder>) -> Self {
        Self {
            orders,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            orders: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Static order-status list returned to the polling system.
#[derive(Debug, Serialize)]
pub struct OrderStatusResponse {
    #[serde(rename = "OrderStatus")]
    pub order_status: Vec<OrderStatusEntry>,
}

#[derive(Debug, Serialize)]
pub struct OrderStatusEntry {
    #[serde(rename = "Id")]
    pub id: i32,

    #[serde(rename = "Value")]
    pub value: String,
}

/// Proxy request from this system's own front end. Every field is
/// required; a missing one is rejected locally without a network call.
#[derive(Debug, Deserialize, Validate)]
pub struct ProxyRequest {
    #[validate(length(min = 1, message = "endpoint is required"))]
    pub endpoint: String,

    #[serde(default)]
    pub payload: Value,

    #[serde(rename = "apiKey")]
    #[validate(length(min = 1, message = "apiKey is required"))]
    pub api_key: String,

    #[serde(rename = "secretKey")]
    #[validate(length(min = 1, message = "secretKey is required"))]
    pub secret_key: String,

    #[serde(rename = "integrationKey")]
    #[validate(length(min = 1, message = "integrationKey is required"))]
    pub integration_key: String,
}

/// Force-delete maintenance request.
#[derive(Debug, Deserialize)]
pub struct ForceDeleteRequest {
    #[serde(rename = "stockCode")]
    pub stock_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proxy_request_rejects_missing_credentials() {
        let request: ProxyRequest = serde_json::from_value(json!({
            "endpoint": "SendInvoice",
            "payload": { "OrderId": 1 },
            "apiKey": "",
            "secretKey": "s",
            "integrationKey": "i",
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_proxy_request_accepts_complete_input() {
        let request: ProxyRequest = serde_json::from_value(json!({
            "endpoint": "SendInvoice",
            "payload": { "OrderId": 1 },
            "apiKey": "a",
            "secretKey": "s",
            "integrationKey": "i",
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(!request.payload.is_null());
    }

    #[test]
    fn test_poll_request_field_names() {
        let request: OrderPollRequest = serde_json::from_value(json!({
            "startDateTime": "18.01.2026 09:00:00",
            "endDateTime": "18.01.2026 10:00:00",
            "OrderCode": "SLS-1",
        }))
        .unwrap();

        assert_eq!(request.start_date_time.as_deref(), Some("18.01.2026 09:00:00"));
        assert_eq!(request.order_code.as_deref(), Some("SLS-1"));
    }

    #[test]
    fn test_orders_envelope_shape() {
        let ok = serde_json::to_value(OrdersResponse::ok(Vec::new())).unwrap();
        assert_eq!(ok, json!({ "Orders": [] }));

        let failed = serde_json::to_value(OrdersResponse::error("Invalid token")).unwrap();
        assert_eq!(failed, json!({ "Orders": [], "error": "Invalid token" }));
    }
}
