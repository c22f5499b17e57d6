//! Liveness handler
//!
//! Reports the bridge's two collaborators: whether the POS database
//! answers a trivial query, and which e-invoice endpoint the proxy is
//! configured against. No outbound call is made on a health probe.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub birfatura_base_url: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "reachable",
        Err(_) => "unreachable",
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
        birfatura_base_url: state.config.birfatura.base_url.clone(),
    })
}
