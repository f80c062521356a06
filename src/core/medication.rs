use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::types::Category;

/// Reasons a single catalog entry is rejected at load time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Medication name is empty")]
    EmptyName,

    #[error("Invalid price '{0}': expected a non-negative number")]
    InvalidPrice(String),
}

/// A single medication in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMedication")]
pub struct MedicationRecord {
    /// Brand or generic name, the lookup key
    pub name: String,

    /// Therapeutic category
    pub category: Category,

    /// Active ingredient, shared by interchangeable medications
    pub active_ingredient: String,

    /// Unit price, always finite and non-negative
    pub price: f64,

    /// Any further fields in the source, in source order
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl MedicationRecord {
    pub fn new(
        name: impl Into<String>,
        active_ingredient: impl Into<String>,
        category: Category,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            active_ingredient: active_ingredient.into(),
            price,
            extra: Map::new(),
        }
    }

    /// Attach an extra free-form field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Case-insensitive name comparison
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Price as it may appear in a source file: a number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

/// Wire shape of a record before validation
#[derive(Deserialize)]
struct RawMedication {
    name: String,
    category: String,
    #[serde(alias = "activeIngredient")]
    active_ingredient: String,
    price: RawPrice,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawMedication> for MedicationRecord {
    type Error = RecordError;

    fn try_from(raw: RawMedication) -> Result<Self, Self::Error> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let price = match raw.price {
            RawPrice::Number(n) => {
                validate_price(n).ok_or_else(|| RecordError::InvalidPrice(n.to_string()))?
            }
            RawPrice::Text(text) => {
                coerce_price(&text).ok_or_else(|| RecordError::InvalidPrice(text.clone()))?
            }
        };

        Ok(Self {
            name: name.to_string(),
            category: Category::from_label(&raw.category),
            active_ingredient: raw.active_ingredient.trim().to_string(),
            price,
            extra: raw.extra,
        })
    }
}

/// Parse a price from text, accepting only finite non-negative numbers
#[must_use]
pub fn coerce_price(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().and_then(validate_price)
}

fn validate_price(price: f64) -> Option<f64> {
    (price.is_finite() && price >= 0.0).then_some(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_string_price() {
        let record: MedicationRecord = serde_json::from_value(json!({
            "name": "Panadol",
            "category": "Pain reliever",
            "active_ingredient": "Paracetamol",
            "price": "2.5"
        }))
        .unwrap();

        assert_eq!(record.name, "Panadol");
        assert_eq!(record.category, Category::PainReliever);
        assert_eq!(record.active_ingredient, "Paracetamol");
        assert!((record.price - 2.5).abs() < f64::EPSILON);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_deserialize_camel_case_ingredient() {
        let record: MedicationRecord = serde_json::from_value(json!({
            "name": "Glucophage",
            "category": "Antidiabetic",
            "activeIngredient": "Metformin",
            "price": 12
        }))
        .unwrap();

        assert_eq!(record.active_ingredient, "Metformin");
        assert!((record.price - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_keeps_extra_fields_in_order() {
        let record: MedicationRecord = serde_json::from_value(json!({
            "name": "Augmentin",
            "side_effects": ["Nausea", "Rash"],
            "category": "Antibiotic",
            "active_ingredient": "Amoxicillin",
            "price": 5.5,
            "manufacturer": "GSK"
        }))
        .unwrap();

        let keys: Vec<&String> = record.extra.keys().collect();
        assert_eq!(keys, vec!["side_effects", "manufacturer"]);
    }

    #[test]
    fn test_deserialize_rejects_bad_price() {
        let result: Result<MedicationRecord, _> = serde_json::from_value(json!({
            "name": "Broken",
            "category": "Antibiotic",
            "active_ingredient": "X",
            "price": "cheap"
        }));
        assert!(result.is_err());

        let negative: Result<MedicationRecord, _> = serde_json::from_value(json!({
            "name": "Broken",
            "category": "Antibiotic",
            "active_ingredient": "X",
            "price": -1.0
        }));
        assert!(negative.is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let result: Result<MedicationRecord, _> = serde_json::from_value(json!({
            "name": "NoIngredient",
            "category": "Antibiotic",
            "price": 1.0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_blank_name() {
        let result: Result<MedicationRecord, _> = serde_json::from_value(json!({
            "name": "   ",
            "category": "Antibiotic",
            "active_ingredient": "X",
            "price": 1.0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_snake_case_and_flattens_extra() {
        let record = MedicationRecord::new("Klavox", "Amoxicillin", Category::Antibiotic, 5.8)
            .with_field("form", json!("tablet"));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["name"], "Klavox");
        assert_eq!(value["category"], "Antibiotic");
        assert_eq!(value["active_ingredient"], "Amoxicillin");
        assert_eq!(value["price"], 5.8);
        assert_eq!(value["form"], "tablet");
    }

    #[test]
    fn test_has_name_ignores_case() {
        let record = MedicationRecord::new("Panadol", "Paracetamol", Category::PainReliever, 2.5);
        assert!(record.has_name("PANADOL"));
        assert!(record.has_name("panadol"));
        assert!(!record.has_name("panado"));
    }

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price(" 3.40 "), Some(3.4));
        assert_eq!(coerce_price("0"), Some(0.0));
        assert_eq!(coerce_price("-2"), None);
        assert_eq!(coerce_price("NaN"), None);
        assert_eq!(coerce_price("inf"), None);
        assert_eq!(coerce_price(""), None);
    }
}
