//! BirFatura e-invoice API client
//!
//! A single-shot relay: one POST per forwarded request, tenant
//! credentials attached as headers, no retries. The two failure shapes
//! the front end depends on are kept distinct: an upstream rejection is
//! relayed verbatim with its own status code, while a transport failure
//! (DNS, refused connection, timeout) synthesizes a 500 with a generic
//! connectivity message.

use axum::http::StatusCode;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::BirFaturaConfig;

/// Credentials a tenant supplies per forwarded request.
#[derive(Debug, Clone)]
pub struct ProxyCredentials {
    pub api_key: String,
    pub secret_key: String,
    pub integration_key: String,
}

/// Result of a forwarded call: the status and body handed back to the
/// front end unchanged.
#[derive(Debug, Clone)]
pub struct ForwardOutcome {
    pub status: StatusCode,
    pub body: Value,
}

/// BirFatura API client
#[derive(Clone)]
pub struct BirFaturaClient {
    client: Client,
    base_url: String,
}

impl BirFaturaClient {
    /// Create a new client with the configured base URL and timeout.
    pub fn new(config: &BirFaturaConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Result<Self, reqwest::Error> {
        Self::new(&BirFaturaConfig {
            base_url,
            timeout_secs: 30,
        })
    }

    /// Forward one request to the external API.
    pub async fn forward(
        &self,
        endpoint: &str,
        payload: &Value,
        credentials: &ProxyCredentials,
    ) -> ForwardOutcome {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));

        let result = self
            .client
            .post(&url)
            .header("apiKey", &credentials.api_key)
            .header("secretKey", &credentials.secret_key)
            .header("integrationKey", &credentials.integration_key)
            .json(payload)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = StatusCode::from_u16(response.status().as_u16())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                let body = response.text().await.unwrap_or_default();

                // Relay the upstream body verbatim; non-JSON responses get
                // wrapped so the client always sees the same envelope shape.
                let body = serde_json::from_str(&body).unwrap_or_else(|_| {
                    json!({
                        "Success": status.is_success(),
                        "Message": body,
                        "StatusCode": status.as_u16(),
                    })
                });

                ForwardOutcome { status, body }
            }
            Err(error) => {
                tracing::error!("BirFatura request to {} failed: {}", url, error);
                ForwardOutcome {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({
                        "Success": false,
                        "Message": "Could not reach the e-invoice provider",
                        "StatusCode": 500,
                    }),
                }
            }
        }
    }
}
