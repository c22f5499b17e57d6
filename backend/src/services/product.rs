//! Product maintenance operations
//!
//! The force-delete path runs with the backend's elevated database role.
//! When a product is referenced by sales history the hard delete fails on
//! the foreign key; the record is then retired by renaming its stock code
//! instead.

use chrono::Utc;
use sqlx::PgPool;

use crate::error::AppResult;

/// Product maintenance service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Outcome of a force-delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForceDeleteOutcome {
    Deleted,
    /// Deletion was blocked by a referential constraint; the stock code
    /// was renamed to this value instead.
    Renamed(String),
    NotFound,
}

impl ProductService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Hard-delete a product by stock code, falling back to a rename when
    /// the delete is blocked by a foreign key.
    pub async fn force_delete(&self, stock_code: &str) -> AppResult<ForceDeleteOutcome> {
        let result = sqlx::query("DELETE FROM products WHERE stock_code = $1")
            .bind(stock_code)
            .execute(&self.db)
            .await;

        match result {
            Ok(done) if done.rows_affected() > 0 => Ok(ForceDeleteOutcome::Deleted),
            Ok(_) => Ok(ForceDeleteOutcome::NotFound),
            Err(error) if is_fk_violation(&error) => {
                let renamed = retired_stock_code(stock_code);
                tracing::warn!(
                    "force delete of {} blocked by references, renaming to {}",
                    stock_code,
                    renamed
                );

                sqlx::query("UPDATE products SET stock_code = $2 WHERE stock_code = $1")
                    .bind(stock_code)
                    .bind(&renamed)
                    .execute(&self.db)
                    .await?;

                Ok(ForceDeleteOutcome::Renamed(renamed))
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// Postgres foreign_key_violation
fn is_fk_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23503")
    )
}

fn retired_stock_code(stock_code: &str) -> String {
    format!("{}_deleted_{}", stock_code, Utc::now().timestamp_millis())
}
