//! Sale lookup and external-order listing
//!
//! Reads a tenant's sales and runs each through the shared translator.
//! Soft-deleted sales never leave this service, and every query is scoped
//! by the company code resolved during authentication.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use shared::{timefmt, translate, ExternalOrder, SaleRecord};

use crate::error::AppResult;
use crate::models::OrderPollRequest;

/// Sales service producing the poll response order list
#[derive(Clone)]
pub struct SalesService {
    db: PgPool,
}

/// One row of the `sales` table, as stored by the POS checkout flow.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i64,
    sale_code: String,
    customer_name: Option<String>,
    customer: Option<String>,
    tax_number: Option<String>,
    items: Option<Value>,
    date: Option<String>,
    created_at: DateTime<Utc>,
}

impl SaleRow {
    fn into_record(self) -> SaleRecord {
        SaleRecord {
            id: self.id,
            sale_code: self.sale_code,
            customer_name: self.customer_name,
            customer: self.customer,
            tax_number: self.tax_number,
            items: self.items.unwrap_or(Value::Null),
            date: self.date,
            created_at: self.created_at,
        }
    }
}

impl SalesService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List a tenant's sales as external orders.
    ///
    /// The date window comes from the request's external-format strings;
    /// a malformed bound drops that side of the filter. The sale time is
    /// the POS-written `date` string, so the window is applied after the
    /// rows are fetched.
    pub async fn list_orders(
        &self,
        company_code: &str,
        filter: &OrderPollRequest,
    ) -> AppResult<Vec<ExternalOrder>> {
        let order_code = filter
            .order_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());

        let rows: Vec<SaleRow> = match order_code {
            Some(code) => {
                sqlx::query_as(
                    "SELECT id, sale_code, customer_name, customer, tax_number, items, date, created_at \
                     FROM sales \
                     WHERE company_code = $1 AND is_deleted = FALSE AND sale_code = $2 \
                     ORDER BY created_at DESC",
                )
                .bind(company_code)
                .bind(code)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT id, sale_code, customer_name, customer, tax_number, items, date, created_at \
                     FROM sales \
                     WHERE company_code = $1 AND is_deleted = FALSE \
                     ORDER BY created_at DESC",
                )
                .bind(company_code)
                .fetch_all(&self.db)
                .await?
            }
        };

        let start = filter.start_date_time.as_deref().and_then(timefmt::parse);
        let end = filter.end_date_time.as_deref().and_then(timefmt::parse);

        let orders = rows
            .into_iter()
            .map(SaleRow::into_record)
            .filter(|sale| within_window(sale.sale_time(), start, end))
            .map(|sale| translate(&sale))
            .collect();

        Ok(orders)
    }
}

/// Inclusive date-window check; an absent bound never filters.
fn within_window(
    sale_time: NaiveDateTime,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> bool {
    start.map_or(true, |s| sale_time >= s) && end.map_or(true, |e| sale_time <= e)
}
