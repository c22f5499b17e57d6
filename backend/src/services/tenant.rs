//! Tenant secret storage and inbound token resolution
//!
//! The polling system authenticates with an opaque `token` header. Each
//! tenant has one stored secret; the presented token is matched against
//! the stored values, which makes token uniqueness across tenants a hard
//! requirement. `store_secret` enforces that at write time.

use sha2::{Digest, Sha256};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Tenant secret service
#[derive(Clone)]
pub struct TenantService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct TenantSecretRow {
    company_code: String,
    secret_token: String,
}

impl TenantService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Resolve a presented poll token to its tenant's company code.
    ///
    /// Stored values may carry literal wrapping quotes left over from
    /// JSON-encoded storage; those are stripped before comparison.
    /// Comparison runs on SHA-256 digests so it does not leak match
    /// length through timing.
    pub async fn authenticate(&self, presented_token: &str) -> AppResult<Option<String>> {
        let presented_token = presented_token.trim();
        if presented_token.is_empty() {
            return Ok(None);
        }

        let rows: Vec<TenantSecretRow> =
            sqlx::query_as("SELECT company_code, secret_token FROM tenant_secrets")
                .fetch_all(&self.db)
                .await?;

        let presented = digest(presented_token);
        Ok(rows
            .into_iter()
            .find(|row| digest(strip_quotes(&row.secret_token)) == presented)
            .map(|row| row.company_code))
    }

    /// Store or replace a tenant's secret.
    ///
    /// Rejects a token already held by another tenant: inbound requests
    /// are attributed by token value alone.
    pub async fn store_secret(&self, company_code: &str, secret_token: &str) -> AppResult<()> {
        let secret_token = secret_token.trim();
        if secret_token.is_empty() {
            return Err(AppError::Validation("secret token must not be empty".into()));
        }

        let holder: Option<String> = sqlx::query_scalar(
            "SELECT company_code FROM tenant_secrets \
             WHERE secret_token = $1 AND company_code <> $2",
        )
        .bind(secret_token)
        .bind(company_code)
        .fetch_optional(&self.db)
        .await?;

        if holder.is_some() {
            return Err(AppError::Validation(
                "secret token is already in use by another tenant".into(),
            ));
        }

        sqlx::query(
            "INSERT INTO tenant_secrets (company_code, secret_token) VALUES ($1, $2) \
             ON CONFLICT (company_code) DO UPDATE SET secret_token = EXCLUDED.secret_token",
        )
        .bind(company_code)
        .bind(secret_token)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

/// Strip one pair of literal wrapping quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
