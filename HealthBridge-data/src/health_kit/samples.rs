use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata key marking a sample as entered by the user
pub const METADATA_WAS_USER_ENTERED: &str = "HKMetadataKeyWasUserEntered";

/// A HealthKit object type, identified by its `HK...TypeIdentifier` string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "identifier", rename_all = "camelCase")]
pub enum SampleType {
    Quantity(String),
    Category(String),
    Correlation(String),
}

impl SampleType {
    /// Quantity type from an identifier
    pub fn quantity(identifier: &str) -> Self {
        SampleType::Quantity(identifier.to_string())
    }

    /// Category type from an identifier
    pub fn category(identifier: &str) -> Self {
        SampleType::Category(identifier.to_string())
    }

    /// Correlation type from an identifier
    pub fn correlation(identifier: &str) -> Self {
        SampleType::Correlation(identifier.to_string())
    }

    /// The raw identifier string
    pub fn identifier(&self) -> &str {
        match self {
            SampleType::Quantity(id) | SampleType::Category(id) | SampleType::Correlation(id) => id,
        }
    }
}

impl std::fmt::Display for SampleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A quantity sample, e.g. a height of 1.75 m
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySample {
    /// `HKQuantityTypeIdentifier...`
    pub quantity_type: String,

    /// HealthKit unit string ("m", "kg", "count/min", ...)
    pub unit: String,

    /// Amount in `unit`
    pub quantity: f64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    /// Sample metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl QuantitySample {
    /// Create a quantity sample covering `[start_date, end_date]`
    pub fn new(
        quantity_type: &str,
        unit: &str,
        quantity: f64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            quantity_type: quantity_type.to_string(),
            unit: unit.to_string(),
            quantity,
            start_date,
            end_date,
            metadata: BTreeMap::new(),
        }
    }

    /// Mark the sample as entered by the user
    pub fn user_entered(mut self) -> Self {
        self.metadata
            .insert(METADATA_WAS_USER_ENTERED.to_string(), serde_json::Value::Bool(true));
        self
    }
}

/// A category sample, e.g. a symptom with a severity code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySample {
    /// `HKCategoryTypeIdentifier...`
    pub category_type: String,

    /// Category value code
    pub value: i64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// A correlation grouping several quantity samples, e.g. blood pressure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationSample {
    /// `HKCorrelationTypeIdentifier...`
    pub correlation_type: String,

    /// The correlated samples
    pub objects: Vec<QuantitySample>,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl CorrelationSample {
    /// Find the correlated sample of the given quantity type
    pub fn object(&self, quantity_type: &str) -> Option<&QuantitySample> {
        self.objects.iter().find(|sample| sample.quantity_type == quantity_type)
    }
}

/// Any HealthKit sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sampleKind", rename_all = "camelCase")]
pub enum HealthKitSample {
    Quantity(QuantitySample),
    Category(CategorySample),
    Correlation(CorrelationSample),
}

impl HealthKitSample {
    /// The sample type this sample belongs to
    pub fn sample_type(&self) -> SampleType {
        match self {
            HealthKitSample::Quantity(s) => SampleType::Quantity(s.quantity_type.clone()),
            HealthKitSample::Category(s) => SampleType::Category(s.category_type.clone()),
            HealthKitSample::Correlation(s) => SampleType::Correlation(s.correlation_type.clone()),
        }
    }

    /// `[start_date, end_date]` of the sample
    pub fn span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            HealthKitSample::Quantity(s) => (s.start_date, s.end_date),
            HealthKitSample::Category(s) => (s.start_date, s.end_date),
            HealthKitSample::Correlation(s) => (s.start_date, s.end_date),
        }
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.span().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_kit::identifiers;

    #[test]
    fn test_user_entered_metadata() {
        let now = Utc::now();
        let sample = QuantitySample::new(identifiers::HEIGHT, "m", 1.75, now, now).user_entered();

        assert_eq!(sample.metadata.get(METADATA_WAS_USER_ENTERED), Some(&serde_json::Value::Bool(true)));
        let json = serde_json::to_value(HealthKitSample::Quantity(sample)).unwrap();
        assert_eq!(json["sampleKind"], "quantity");
        assert_eq!(json["quantityType"], identifiers::HEIGHT);
        assert_eq!(json["unit"], "m");
    }

    #[test]
    fn test_correlation_lookup() {
        let now = Utc::now();
        let correlation = CorrelationSample {
            correlation_type: identifiers::BLOOD_PRESSURE.to_string(),
            objects: vec![
                QuantitySample::new(identifiers::BLOOD_PRESSURE_SYSTOLIC, "mmHg", 120.0, now, now),
                QuantitySample::new(identifiers::BLOOD_PRESSURE_DIASTOLIC, "mmHg", 80.0, now, now),
            ],
            start_date: now,
            end_date: now,
            metadata: BTreeMap::new(),
        };

        assert_eq!(correlation.object(identifiers::BLOOD_PRESSURE_DIASTOLIC).map(|s| s.quantity), Some(80.0));
        assert!(correlation.object(identifiers::HEART_RATE).is_none());
    }

    #[test]
    fn test_sample_type_tagging() {
        let json = serde_json::to_value(SampleType::category(identifiers::HEADACHE)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "category", "identifier": identifiers::HEADACHE }));
    }
}
