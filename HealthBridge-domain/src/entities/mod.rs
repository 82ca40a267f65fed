// Normalized values exchanged with the UI
pub mod composite;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::FieldDescriptor;
use composite::{encode_blood_pressure, encode_cervical_mucus, encode_interval, format_number};

/// The value of one observation, in the field's canonical unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Scalar measurement or enumerated code
    Number(f64),

    /// Blood pressure pair in mmHg
    BloodPressure { systolic: f64, diastolic: f64 },

    /// Cervical mucus appearance and sensation codes
    CervicalMucus { appearance: i64, sensation: i64 },

    /// A time interval, e.g. a menstruation period
    Interval { start: DateTime<Utc>, end: DateTime<Utc> },
}

impl RawValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text form, the inverse of input parsing
    pub fn encode(&self, decimals: Option<u32>) -> String {
        match self {
            RawValue::Number(value) => format_number(*value, decimals),
            RawValue::BloodPressure { systolic, diastolic } => encode_blood_pressure(*systolic, *diastolic),
            RawValue::CervicalMucus { appearance, sensation } => encode_cervical_mucus(*appearance, *sensation),
            RawValue::Interval { start, end } => encode_interval(start, end),
        }
    }
}

/// One observation of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedValue {
    pub field_id: String,

    pub raw_value: RawValue,

    /// Canonical unit label
    pub unit: String,

    /// Observation or creation time
    pub timestamp: DateTime<Utc>,

    #[serde(skip)]
    decimal_places: Option<u32>,
}

impl NormalizedValue {
    pub fn new(descriptor: &FieldDescriptor, raw_value: RawValue, timestamp: DateTime<Utc>) -> Self {
        Self {
            field_id: descriptor.id.to_string(),
            raw_value,
            unit: descriptor.unit.to_string(),
            timestamp,
            decimal_places: descriptor.decimal_places,
        }
    }

    /// The value as the UI shows it, e.g. `"175"` or `"120/80"`
    pub fn display(&self) -> String {
        self.raw_value.encode(self.decimal_places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, FieldKind};

    #[test]
    fn test_display_rounds_to_decimal_places() {
        let height = FieldDescriptor::new("height", "Height", "cm", Category::Body, 16).decimals(0);
        let value = NormalizedValue::new(&height, RawValue::Number(175.00000000000003), Utc::now());
        assert_eq!(value.display(), "175");
        assert_eq!(value.unit, "cm");
    }

    #[test]
    fn test_display_composites() {
        let bp = FieldDescriptor::new("bloodPressure", "Blood Pressure", "mmHg", Category::Vitals, 5)
            .kind(FieldKind::BloodPressure);
        let value = NormalizedValue::new(
            &bp,
            RawValue::BloodPressure { systolic: 120.0, diastolic: 80.0 },
            Utc::now(),
        );
        assert_eq!(value.display(), "120/80");
    }

    #[test]
    fn test_raw_value_json_shapes() {
        assert_eq!(serde_json::to_value(RawValue::Number(70.5)).unwrap(), serde_json::json!(70.5));
        assert_eq!(
            serde_json::to_value(RawValue::CervicalMucus { appearance: 3, sensation: 1 }).unwrap(),
            serde_json::json!({ "appearance": 3, "sensation": 1 })
        );

        let parsed: RawValue = serde_json::from_value(serde_json::json!({ "systolic": 120.0, "diastolic": 80.0 })).unwrap();
        assert_eq!(parsed, RawValue::BloodPressure { systolic: 120.0, diastolic: 80.0 });
    }
}
