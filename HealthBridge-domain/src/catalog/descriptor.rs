use serde::Serialize;

use super::category::Category;

/// Shape of the value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "allowed", rename_all = "camelCase")]
pub enum FieldKind {
    /// A single number
    Numeric,
    /// An integer code from a fixed set
    Enumerated(&'static [i64]),
    /// A `systolic/diastolic` pair
    BloodPressure,
    /// An `appearance,sensation` code pair
    CervicalMucus,
    /// A `start/end` time interval
    Interval,
}

/// Display and validation metadata of one health metric
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Stable key, unique within a registry
    pub id: &'static str,

    /// Display label
    pub title: &'static str,

    /// Display unit; also the canonical unit of the field's values
    pub unit: &'static str,

    pub category: Category,

    /// Whether the field can be fetched
    pub readable: bool,

    /// Whether the field can be saved
    pub writable: bool,

    /// Sort key within the category
    pub display_order: u32,

    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    /// Decimal places shown in the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,

    /// Shape of the value
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// A readable, read-only numeric field
    pub fn new(
        id: &'static str,
        title: &'static str,
        unit: &'static str,
        category: Category,
        display_order: u32,
    ) -> Self {
        Self {
            id,
            title,
            unit,
            category,
            readable: true,
            writable: false,
            display_order,
            min_value: None,
            max_value: None,
            decimal_places: None,
            kind: FieldKind::Numeric,
        }
    }

    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    /// Set both inclusive bounds
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Set only the inclusive lower bound
    pub fn at_least(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn decimals(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let descriptor = FieldDescriptor::new("height", "Height", "cm", Category::Body, 6);
        assert!(descriptor.readable);
        assert!(!descriptor.writable);
        assert_eq!(descriptor.kind, FieldKind::Numeric);
        assert_eq!(descriptor.min_value, None);

        let descriptor = descriptor.writable().range(50.0, 250.0).decimals(0);
        assert!(descriptor.writable);
        assert_eq!((descriptor.min_value, descriptor.max_value), (Some(50.0), Some(250.0)));
        assert_eq!(descriptor.decimal_places, Some(0));
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing_bounds() {
        let descriptor = FieldDescriptor::new("menstruationFlow", "Menstruation Flow", "", Category::Cycle, 19)
            .writable()
            .kind(FieldKind::Enumerated(&[0, 1, 2, 3]));

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["displayOrder"], 19);
        assert_eq!(json["kind"]["type"], "enumerated");
        assert_eq!(json["kind"]["allowed"], serde_json::json!([0, 1, 2, 3]));
        assert!(json.get("minValue").is_none());
    }
}
