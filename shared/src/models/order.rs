//! The external invoicing system's order schema
//!
//! Field names and the static placeholder values are part of the
//! BirFatura contract. The placeholders stand in for data the POS does
//! not collect (street addresses, shipping carrier); changing them breaks
//! ingestion on the provider side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_ADDRESS: &str = "Belirtilmemiş";
pub const PLACEHOLDER_CITY: &str = "İstanbul";
pub const PLACEHOLDER_TOWN: &str = "Merkez";
pub const SHIP_COMPANY: &str = "Kargo";
pub const PAYMENT_TYPE: &str = "Kredi Kartı";
pub const CURRENCY: &str = "TRY";

/// One sale, shaped the way the invoicing system polls for it.
///
/// Ephemeral: constructed fresh on every poll, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalOrder {
    pub order_id: i64,
    pub order_code: String,
    pub order_date: String,
    pub customer_name: String,
    pub billing_address: String,
    pub billing_city: String,
    pub billing_town: String,
    pub tax_no: String,
    #[serde(rename = "SSNTCNo")]
    pub ssn_tc_no: String,
    pub shipping_name: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_town: String,
    pub shipping_tax_number: String,
    pub ship_company: String,
    pub payment_type: String,
    pub currency: String,
    pub currency_rate: Decimal,
    pub total_paid_tax_including: Decimal,
    pub total_paid_tax_excluding: Decimal,
    pub order_details: Vec<ExternalOrderLine>,
}

/// One line of an external order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalOrderLine {
    pub product_name: String,
    pub product_code: String,
    pub product_quantity: Decimal,
    pub vat_rate: Decimal,
    pub product_unit_price_tax_including: Decimal,
    pub product_unit_price_tax_excluding: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wire_field_names() {
        let order = ExternalOrder {
            order_id: 1700000000000,
            order_code: "SLS-1700000000000".to_string(),
            order_date: "18.01.2026 10:00:00".to_string(),
            customer_name: "Misafir Müşteri".to_string(),
            billing_address: PLACEHOLDER_ADDRESS.to_string(),
            billing_city: PLACEHOLDER_CITY.to_string(),
            billing_town: PLACEHOLDER_TOWN.to_string(),
            tax_no: String::new(),
            ssn_tc_no: "11111111111".to_string(),
            shipping_name: "Misafir Müşteri".to_string(),
            shipping_address: PLACEHOLDER_ADDRESS.to_string(),
            shipping_city: PLACEHOLDER_CITY.to_string(),
            shipping_town: PLACEHOLDER_TOWN.to_string(),
            shipping_tax_number: "11111111111".to_string(),
            ship_company: SHIP_COMPANY.to_string(),
            payment_type: PAYMENT_TYPE.to_string(),
            currency: CURRENCY.to_string(),
            currency_rate: Decimal::ONE,
            total_paid_tax_including: dec!(12.0),
            total_paid_tax_excluding: dec!(10.0),
            order_details: vec![ExternalOrderLine {
                product_name: "Ekmek".to_string(),
                product_code: "EKM1".to_string(),
                product_quantity: dec!(2),
                vat_rate: dec!(20),
                product_unit_price_tax_including: dec!(6.0),
                product_unit_price_tax_excluding: dec!(5.0),
            }],
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["OrderId"], 1700000000000i64);
        assert_eq!(value["SSNTCNo"], "11111111111");
        assert_eq!(value["TaxNo"], "");
        assert_eq!(value["PaymentType"], "Kredi Kartı");
        assert_eq!(value["Currency"], "TRY");

        let line = &value["OrderDetails"][0];
        assert_eq!(line["ProductQuantity"], 2.0);
        assert_eq!(line["ProductUnitPriceTaxIncluding"], 6.0);
        assert_eq!(line["ProductUnitPriceTaxExcluding"], 5.0);
        assert_eq!(line["VatRate"], 20.0);
    }
}
