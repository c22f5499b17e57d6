//! Shared domain logic for the POS Invoice Bridge
//!
//! This crate holds the pure sale-to-external-order translation core: tax
//! identity classification, VAT back-calculation, the external date format,
//! and the order schema itself. No I/O lives here; the backend feeds it
//! sale rows and ships the translated output.

pub mod models;
pub mod money;
pub mod tax;
pub mod timefmt;
pub mod translate;

pub use models::*;
pub use money::{round_total, split_tax, TaxSplit, VAT_RATE_PERCENT};
pub use tax::TaxIdentity;
pub use translate::{translate, SaleRecord};
