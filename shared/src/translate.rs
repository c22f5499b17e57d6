//! Sale-to-external-order translation
//!
//! The single authoritative mapping from a POS sale row to the invoicing
//! system's order schema, shared by the inbound poll path and any future
//! outbound push path. A malformed line item or date never aborts the
//! sale; every field degrades to its documented default and the order is
//! still emitted.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::{
    decode_items, ExternalOrder, ExternalOrderLine, CURRENCY, PAYMENT_TYPE, PLACEHOLDER_ADDRESS,
    PLACEHOLDER_CITY, PLACEHOLDER_TOWN, SHIP_COMPANY,
};
use crate::money::{self, VAT_RATE_PERCENT};
use crate::tax::{TaxIdentity, GUEST_CUSTOMER};
use crate::timefmt;

/// Translator-facing view of one sale row.
///
/// The backend builds this from its database row type; keeping the shape
/// here keeps the translation testable without a database.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    /// Internal numeric row id, the fallback order id.
    pub id: i64,
    pub sale_code: String,
    pub customer_name: Option<String>,
    pub customer: Option<String>,
    pub tax_number: Option<String>,
    /// Raw `items` column: native array, JSON-encoded string, or null.
    pub items: Value,
    /// POS-written sale time in the external `DD.MM.YYYY HH:mm:ss` format.
    pub date: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SaleRecord {
    /// The authoritative sale time: the POS-written `date` string when it
    /// parses, the row's `created_at` otherwise.
    pub fn sale_time(&self) -> NaiveDateTime {
        self.date
            .as_deref()
            .and_then(timefmt::parse)
            .unwrap_or_else(|| self.created_at.naive_utc())
    }
}

/// Translate one sale into the external order schema.
pub fn translate(sale: &SaleRecord) -> ExternalOrder {
    let customer_name = sale
        .customer_name
        .as_deref()
        .or(sale.customer.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(GUEST_CUSTOMER)
        .to_string();

    let identity = TaxIdentity::classify(sale.tax_number.as_deref().unwrap_or(""), &customer_name);

    // Undecodable items collapse to an empty line list, not a failure.
    let items = decode_items(&sale.items).unwrap_or_default();

    let mut total_inclusive = Decimal::ZERO;
    let mut total_exclusive = Decimal::ZERO;
    let mut order_details = Vec::with_capacity(items.len());

    for item in &items {
        let quantity = item.quantity();
        let unit_price = item.unit_price();

        // Totals accumulate unrounded values; rounding only at the end.
        total_inclusive += unit_price * quantity;
        total_exclusive +=
            unit_price / (Decimal::ONE + VAT_RATE_PERCENT / Decimal::ONE_HUNDRED) * quantity;

        let split = money::split_tax(unit_price, VAT_RATE_PERCENT);
        order_details.push(ExternalOrderLine {
            product_name: item.name.clone(),
            product_code: item.stock_code.clone(),
            product_quantity: quantity,
            vat_rate: VAT_RATE_PERCENT,
            product_unit_price_tax_including: split.inclusive,
            product_unit_price_tax_excluding: split.exclusive,
        });
    }

    let order_date = timefmt::format(sale.sale_time());
    let shipping_tax_number = identity.shipping_tax_number().to_string();

    ExternalOrder {
        order_id: derive_order_id(&sale.sale_code, sale.id),
        order_code: sale.sale_code.clone(),
        order_date,
        customer_name: customer_name.clone(),
        billing_address: PLACEHOLDER_ADDRESS.to_string(),
        billing_city: PLACEHOLDER_CITY.to_string(),
        billing_town: PLACEHOLDER_TOWN.to_string(),
        tax_no: identity.tax_no,
        ssn_tc_no: identity.ssn_tc_no,
        shipping_name: customer_name,
        shipping_address: PLACEHOLDER_ADDRESS.to_string(),
        shipping_city: PLACEHOLDER_CITY.to_string(),
        shipping_town: PLACEHOLDER_TOWN.to_string(),
        shipping_tax_number,
        ship_company: SHIP_COMPANY.to_string(),
        payment_type: PAYMENT_TYPE.to_string(),
        currency: CURRENCY.to_string(),
        currency_rate: Decimal::ONE,
        total_paid_tax_including: money::round_total(total_inclusive),
        total_paid_tax_excluding: money::round_total(total_exclusive),
        order_details,
    }
}

/// Derive a numeric order id from the sale code.
///
/// Best effort: the leading digits of the first 18 characters after the
/// first `-` (18 so the value fits in an i64), so tenant codes with a
/// trailing suffix still yield their timestamp id. Codes without a
/// numeric prefix fall back to the internal row id, and a missing row
/// id degrades to 0.
fn derive_order_id(sale_code: &str, row_id: i64) -> i64 {
    sale_code
        .split_once('-')
        .map(|(_, rest)| {
            rest.chars()
                .take(18)
                .take_while(char::is_ascii_digit)
                .collect::<String>()
        })
        .filter(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse::<i64>().ok())
        .unwrap_or_else(|| row_id.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::FALLBACK_SSN;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sale(items: Value) -> SaleRecord {
        SaleRecord {
            id: 42,
            sale_code: "SLS-1700000000000".to_string(),
            customer_name: Some("Misafir Müşteri".to_string()),
            customer: None,
            tax_number: Some(String::new()),
            items,
            date: Some("18.01.2026 10:00:00".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_guest_sale_translation() {
        let record = sale(json!([
            { "name": "Ekmek", "stock_code": "EKM1", "quantity": 2, "final_price": 6.0 }
        ]));

        let order = translate(&record);

        assert_eq!(order.order_id, 1700000000000);
        assert_eq!(order.order_date, "18.01.2026 10:00:00");
        assert_eq!(order.ssn_tc_no, FALLBACK_SSN);
        assert_eq!(order.tax_no, "");
        assert_eq!(order.order_details.len(), 1);

        let line = &order.order_details[0];
        assert_eq!(line.product_quantity, dec!(2));
        assert_eq!(line.product_unit_price_tax_including, dec!(6.0));
        assert_eq!(line.product_unit_price_tax_excluding, dec!(5.0));
        assert_eq!(order.total_paid_tax_including, dec!(12.0));
        assert_eq!(order.total_paid_tax_excluding, dec!(10.0));
    }

    #[test]
    fn test_malformed_items_translate_to_empty_order() {
        let record = sale(json!("{not valid json"));

        let order = translate(&record);

        assert!(order.order_details.is_empty());
        assert_eq!(order.total_paid_tax_including, Decimal::ZERO);
    }

    #[test]
    fn test_customer_field_fallback_chain() {
        let mut record = sale(Value::Null);
        record.customer_name = None;
        record.customer = Some("Örnek Ltd. Şti.".to_string());
        assert_eq!(translate(&record).customer_name, "Örnek Ltd. Şti.");

        record.customer = None;
        assert_eq!(translate(&record).customer_name, GUEST_CUSTOMER);
    }

    #[test]
    fn test_unparseable_date_falls_back_to_created_at() {
        let mut record = sale(Value::Null);
        record.date = Some("yesterday".to_string());

        let order = translate(&record);
        assert_eq!(order.order_date, timefmt::format(record.created_at.naive_utc()));
    }

    #[test]
    fn test_order_id_falls_back_to_row_id() {
        assert_eq!(derive_order_id("SLS-1700000000000", 42), 1700000000000);
        assert_eq!(derive_order_id("no-digits-here", 42), 42);
        assert_eq!(derive_order_id("plaincode", 42), 42);
        assert_eq!(derive_order_id("neg", -1), 0);
    }

    #[test]
    fn test_order_id_ignores_suffix_after_digits() {
        assert_eq!(derive_order_id("SLS-1700000000000-A", 42), 1700000000000);
        assert_eq!(derive_order_id("SLS-1700000000000X7", 42), 1700000000000);
    }

    #[test]
    fn test_order_id_takes_at_most_18_characters() {
        let code = format!("SLS-{}", "9".repeat(30));
        assert_eq!(derive_order_id(&code, 0), "9".repeat(18).parse::<i64>().unwrap());
    }

    #[test]
    fn test_corporate_tax_number_sets_tax_no_only() {
        let mut record = sale(Value::Null);
        record.customer_name = Some("Örnek Ltd. Şti.".to_string());
        record.tax_number = Some("1234567890".to_string());

        let order = translate(&record);
        assert_eq!(order.tax_no, "1234567890");
        assert_eq!(order.ssn_tc_no, "");
        assert_eq!(order.shipping_tax_number, "1234567890");
    }
}
