//! Sale line items as stored by the POS
//!
//! Items live in a JSON column that historically held either a native
//! array or a doubly-encoded JSON string, and field types in the wild are
//! loose: quantities and prices arrive as numbers or numeric strings.
//! Decoding is therefore lenient per field, with the documented defaults,
//! while the column-level decode surfaces an explicit error that the
//! translation layer collapses to an empty line list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Failure to decode the raw `items` column.
#[derive(Debug, Error)]
pub enum ItemDecodeError {
    #[error("items payload is not an array")]
    NotAnArray,

    #[error("invalid items JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// One line item of a sale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub stock_code: String,

    #[serde(default)]
    pub quantity: Option<Value>,

    #[serde(default)]
    pub final_price: Option<Value>,

    #[serde(default)]
    pub price: Option<Value>,
}

impl SaleItem {
    pub fn new(
        name: impl Into<String>,
        stock_code: impl Into<String>,
        quantity: Decimal,
        final_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            stock_code: stock_code.into(),
            quantity: serde_json::to_value(quantity).ok(),
            final_price: serde_json::to_value(final_price).ok(),
            price: None,
        }
    }

    /// Quantity of the line, defaulting to 1 when absent or malformed.
    pub fn quantity(&self) -> Decimal {
        self.quantity
            .as_ref()
            .and_then(coerce_decimal)
            .unwrap_or(Decimal::ONE)
    }

    /// Tax-inclusive unit price: `final_price` preferred, `price` as
    /// fallback, 0 when neither decodes.
    pub fn unit_price(&self) -> Decimal {
        self.final_price
            .as_ref()
            .and_then(coerce_decimal)
            .or_else(|| self.price.as_ref().and_then(coerce_decimal))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Decode the raw `items` column into typed line items.
///
/// Accepts a native JSON array or a JSON-encoded string; `null` decodes
/// to an empty list.
pub fn decode_items(raw: &Value) -> Result<Vec<SaleItem>, ItemDecodeError> {
    match raw {
        Value::Array(_) => Ok(serde_json::from_value(raw.clone())?),
        Value::String(encoded) => Ok(serde_json::from_str(encoded)?),
        Value::Null => Ok(Vec::new()),
        _ => Err(ItemDecodeError::NotAnArray),
    }
}

/// Coerce a loose JSON value into a decimal the way the POS front end
/// would: numbers pass through, numeric strings parse, everything else is
/// treated as absent.
fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
