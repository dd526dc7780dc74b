//! Sale record types.
//!
//! Sales live in a flat JSON array file, not the relational store. The
//! on-disk field names (`producto`, `cantidad`, `precio`) are the file
//! format contract and must not change.

use serde::{Deserialize, Serialize};

/// A single sale, as stored in the ledger file.
///
/// The product name is free text - it is not a foreign key into the
/// catalog. Records carry no identifier and are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Product name (free text).
    #[serde(rename = "producto")]
    pub product: String,
    /// Units sold.
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    /// Unit price at time of sale.
    #[serde(rename = "precio")]
    pub unit_price: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_field_names_are_spanish() {
        let record = SaleRecord {
            product: "Cono".to_string(),
            quantity: 2,
            unit_price: 2.5,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["producto"], "Cono");
        assert_eq!(json["cantidad"], 2);
        assert!((json["precio"].as_f64().unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_from_file_format() {
        let record: SaleRecord =
            serde_json::from_str(r#"{"producto": "Paleta", "cantidad": 1, "precio": 1.75}"#)
                .unwrap();
        assert_eq!(record.product, "Paleta");
        assert_eq!(record.quantity, 1);
    }
}
