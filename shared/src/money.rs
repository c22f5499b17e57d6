//! VAT back-calculation for tax-inclusive POS prices
//!
//! The POS stores tax-inclusive prices; the external invoicing API wants
//! both the inclusive and exclusive unit prices at 4 decimals and order
//! totals at 2. Rounding happens only at the final step so that totals
//! computed from unrounded line values do not drift.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// VAT rate applied to every line. Product-specific rates are not
/// supported; the POS prices everything at this single rate.
pub const VAT_RATE_PERCENT: Decimal = dec!(20);

/// A tax-inclusive unit price split into the externally required pair of
/// 4-decimal unit prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSplit {
    pub inclusive: Decimal,
    pub exclusive: Decimal,
}

/// Split a tax-inclusive unit price at the given VAT rate.
///
/// `exclusive = inclusive / (1 + rate / 100)`, each side rounded to 4
/// decimals independently.
pub fn split_tax(unit_price_inclusive: Decimal, vat_rate_percent: Decimal) -> TaxSplit {
    let divisor = Decimal::ONE + vat_rate_percent / Decimal::ONE_HUNDRED;
    let exclusive = unit_price_inclusive / divisor;

    TaxSplit {
        inclusive: round_line(unit_price_inclusive),
        exclusive: round_line(exclusive),
    }
}

/// Line-item precision: 4 decimals, ties away from zero.
pub fn round_line(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

/// Order-total precision: 2 decimals, ties away from zero.
pub fn round_total(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
