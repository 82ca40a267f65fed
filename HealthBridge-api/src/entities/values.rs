use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use health_bridge_domain::NormalizedValue;

/// The current value of a field
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueResponse {
    pub field_id: String,

    /// Display form, e.g. "175" or "120/80"; absent when there is no data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Structured value in the canonical unit
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub raw: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// When the value was observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ValueResponse {
    pub fn new(field_id: &str, value: Option<&NormalizedValue>) -> Self {
        match value {
            Some(value) => Self {
                field_id: field_id.to_string(),
                value: Some(value.display()),
                raw: serde_json::to_value(&value.raw_value).ok(),
                unit: Some(value.unit.clone()),
                timestamp: Some(value.timestamp),
            },
            None => Self {
                field_id: field_id.to_string(),
                value: None,
                raw: None,
                unit: None,
                timestamp: None,
            },
        }
    }
}

/// Values of several fields, in catalog order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValuesResponse {
    pub platform: String,
    pub values: Vec<ValueResponse>,
}

/// Query parameters for fetching several values
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ValuesQueryParams {
    /// Comma-separated field ids; every readable field when omitted
    pub ids: Option<String>,
}

impl ValuesQueryParams {
    pub fn field_ids(&self) -> Option<Vec<&str>> {
        self.ids.as_deref().map(|ids| {
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .collect()
        })
    }
}

/// Request to save a value as the user typed it
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct SaveValueRequest {
    /// e.g. "175", "120/80", "5,2" or "2024-05-01/2024-05-05"
    #[validate(length(min = 1, max = 64, message = "Value must be between 1 and 64 characters"))]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_split_and_trimmed() {
        let params = ValuesQueryParams { ids: Some("height, weight,,steps".to_string()) };
        assert_eq!(params.field_ids(), Some(vec!["height", "weight", "steps"]));
        assert_eq!(ValuesQueryParams { ids: None }.field_ids(), None);
    }

    #[test]
    fn test_empty_value_fails_validation() {
        assert!(SaveValueRequest { value: String::new() }.validate().is_err());
        assert!(SaveValueRequest { value: "175".to_string() }.validate().is_ok());
    }
}
