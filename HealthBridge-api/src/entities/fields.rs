use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use health_bridge_domain::{FieldDescriptor, FieldKind};

/// A health metric as shown in the UI
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    /// Stable field key, e.g. "height"
    pub id: String,

    /// Display label
    pub title: String,

    /// Canonical unit; empty for unitless fields
    pub unit: String,

    /// Category key, e.g. "body"
    pub category: String,

    pub readable: bool,
    pub writable: bool,

    /// Sort key within the category
    pub display_order: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,

    /// numeric, enumerated, bloodPressure, cervicalMucus or interval
    pub kind: String,

    /// Allowed codes of an enumerated field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<i64>>,
}

impl From<&FieldDescriptor> for FieldResponse {
    fn from(descriptor: &FieldDescriptor) -> Self {
        let (kind, allowed_values) = match descriptor.kind {
            FieldKind::Numeric => ("numeric", None),
            FieldKind::Enumerated(codes) => ("enumerated", Some(codes.to_vec())),
            FieldKind::BloodPressure => ("bloodPressure", None),
            FieldKind::CervicalMucus => ("cervicalMucus", None),
            FieldKind::Interval => ("interval", None),
        };

        Self {
            id: descriptor.id.to_string(),
            title: descriptor.title.to_string(),
            unit: descriptor.unit.to_string(),
            category: descriptor.category.as_str().to_string(),
            readable: descriptor.readable,
            writable: descriptor.writable,
            display_order: descriptor.display_order,
            min_value: descriptor.min_value,
            max_value: descriptor.max_value,
            decimal_places: descriptor.decimal_places,
            kind: kind.to_string(),
            allowed_values,
        }
    }
}

/// Query parameters for listing fields
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct FieldQueryParams {
    /// Only fields of this category, e.g. "vitals"
    pub category: Option<String>,
}
