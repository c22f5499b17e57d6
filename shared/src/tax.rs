//! Tax identifier classification
//!
//! Turkish tax identities come in two shapes: an 11-digit personal ID
//! (TC kimlik no) and a shorter corporate tax number (vergi no). The
//! external invoicing API requires exactly one of its two identity fields
//! to be filled per order.

use serde::{Deserialize, Serialize};

/// Customer label used for anonymous walk-in sales.
pub const GUEST_CUSTOMER: &str = "Misafir Müşteri";

/// Customer label used for aggregated wholesale sales.
pub const WHOLESALE_CUSTOMER: &str = "Toptan Satış";

/// Anonymous personal ID accepted by the invoicing system for sales
/// without a real tax identity.
pub const FALLBACK_SSN: &str = "11111111111";

/// Classified tax identity of a sale's buyer.
///
/// At most one of the two fields is non-empty; both stay empty only when
/// the raw input was empty and the sale was not a recognized guest sale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdentity {
    pub tax_no: String,
    pub ssn_tc_no: String,
}

impl TaxIdentity {
    /// Classify a raw tax identifier string.
    ///
    /// Exactly 11 digits is treated as a personal ID, any other non-empty
    /// value as a corporate tax number. Empty input stays empty unless the
    /// customer is one of the guest sentinels, which map to the anonymous
    /// fallback identity.
    ///
    /// Non-11-digit personal IDs from other jurisdictions would be
    /// misclassified as corporate numbers; the source system is
    /// single-country so this is accepted.
    pub fn classify(raw_tax_number: &str, customer_name: &str) -> Self {
        let value = raw_tax_number.trim();

        // Character count, not byte length: identifiers are expected to
        // be digits, but a multi-byte character must not skew the check.
        if value.chars().count() == 11 {
            return Self {
                tax_no: String::new(),
                ssn_tc_no: value.to_string(),
            };
        }

        if !value.is_empty() {
            return Self {
                tax_no: value.to_string(),
                ssn_tc_no: String::new(),
            };
        }

        if customer_name == GUEST_CUSTOMER || customer_name == WHOLESALE_CUSTOMER {
            return Self {
                tax_no: String::new(),
                ssn_tc_no: FALLBACK_SSN.to_string(),
            };
        }

        Self::default()
    }

    /// Identity used on the shipping side of the order: the corporate
    /// number when present, otherwise the personal one.
    pub fn shipping_tax_number(&self) -> &str {
        if !self.tax_no.is_empty() {
            &self.tax_no
        } else {
            &self.ssn_tc_no
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_id_classification() {
        let identity = TaxIdentity::classify("12345678901", "Ayşe Yılmaz");
        assert_eq!(identity.ssn_tc_no, "12345678901");
        assert_eq!(identity.tax_no, "");
    }

    #[test]
    fn test_corporate_number_classification() {
        let identity = TaxIdentity::classify("1234567890", "Örnek Ltd. Şti.");
        assert_eq!(identity.tax_no, "1234567890");
        assert_eq!(identity.ssn_tc_no, "");
    }

    #[test]
    fn test_whitespace_is_stripped_before_classification() {
        let identity = TaxIdentity::classify("  12345678901  ", "Ayşe Yılmaz");
        assert_eq!(identity.ssn_tc_no, "12345678901");
    }

    #[test]
    fn test_eleven_characters_counted_not_bytes() {
        // 11 characters, 22 bytes
        let identity = TaxIdentity::classify("ÇÇÇÇÇÇÇÇÇÇÇ", "Ayşe Yılmaz");
        assert_eq!(identity.ssn_tc_no, "ÇÇÇÇÇÇÇÇÇÇÇ");
        assert_eq!(identity.tax_no, "");
    }

    #[test]
    fn test_guest_sale_gets_fallback_identity() {
        let identity = TaxIdentity::classify("", GUEST_CUSTOMER);
        assert_eq!(identity.ssn_tc_no, FALLBACK_SSN);
        assert_eq!(identity.tax_no, "");

        let identity = TaxIdentity::classify("", WHOLESALE_CUSTOMER);
        assert_eq!(identity.ssn_tc_no, FALLBACK_SSN);
    }

    #[test]
    fn test_empty_input_for_named_customer_stays_empty() {
        let identity = TaxIdentity::classify("", "Ayşe Yılmaz");
        assert_eq!(identity.tax_no, "");
        assert_eq!(identity.ssn_tc_no, "");
    }

    #[test]
    fn test_shipping_tax_number_prefers_corporate() {
        let corporate = TaxIdentity::classify("1234567890", "Örnek Ltd. Şti.");
        assert_eq!(corporate.shipping_tax_number(), "1234567890");

        let personal = TaxIdentity::classify("12345678901", "Ayşe Yılmaz");
        assert_eq!(personal.shipping_tax_number(), "12345678901");
    }
}
