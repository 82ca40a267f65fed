use serde::{Deserialize, Serialize};
use thiserror::Error;

use health_bridge_data::StoreError;

use crate::platform::Platform;

/// Which side of a range a value fell off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Lower,
    Upper,
}

/// Why user input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum ValidationReason {
    /// Input is not a finite number
    NotANumber,
    /// Input is outside the inclusive range
    OutOfRange { bound: Bound },
    /// Input is not one of the allowed codes
    InvalidEnum,
    /// Blood pressure with systolic <= diastolic
    SystolicNotAboveDiastolic,
    /// Composite input does not follow its encoding
    MalformedComposite,
    /// Interval whose end precedes its start
    InvalidInterval,
}

impl ValidationReason {
    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationReason::NotANumber => "not-a-number",
            ValidationReason::OutOfRange { .. } => "out-of-range",
            ValidationReason::InvalidEnum => "invalid-enum",
            ValidationReason::SystolicNotAboveDiastolic => "systolic-not-above-diastolic",
            ValidationReason::MalformedComposite => "malformed-composite",
            ValidationReason::InvalidInterval => "invalid-interval",
        }
    }
}

/// Rejected user input
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Machine-readable reason
    pub reason: ValidationReason,

    /// Message shown to the user
    pub message: String,
}

impl ValidationError {
    pub fn new(reason: ValidationReason, message: impl Into<String>) -> Self {
        Self { reason, message: message.into() }
    }

    pub fn not_a_number(raw: &str) -> Self {
        Self::new(ValidationReason::NotANumber, format!("'{}' is not a number", raw.trim()))
    }

    pub fn out_of_range(bound: Bound, min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Value must be between {} and {}", min, max),
            (Some(min), None) => format!("Value must be at least {}", min),
            (None, Some(max)) => format!("Value must be at most {}", max),
            (None, None) => "Value is out of range".to_string(),
        };
        Self::new(ValidationReason::OutOfRange { bound }, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ValidationReason::MalformedComposite, message)
    }

    /// Short message for the UI
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

/// Errors surfaced by the normalization layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthError {
    /// The field id is not in the registry
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// No conversion is registered for the field, or units do not match
    #[error("Unsupported unit for {field_id}: {detail}")]
    UnsupportedUnit { field_id: String, detail: String },

    /// The user's input was rejected
    #[error("Invalid value for {field_id}: {source}")]
    Validation { field_id: String, source: ValidationError },

    /// The health store is missing, outdated or access was denied
    #[error("Health platform unavailable: {0}")]
    PlatformUnavailable(String),

    /// A native store call failed for one field
    #[error("Native call failed for {field_id}: {message}")]
    NativeCall { field_id: String, message: String },

    /// The field cannot be written
    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    /// The platform has no way to write the field
    #[error("Saving {field_id} is not supported on {platform}")]
    NotSupported { field_id: String, platform: Platform },

    /// Permissions were requested before initialization finished
    #[error("Health platform is not initialized")]
    NotInitialized,
}

impl HealthError {
    /// Wrap a store failure for one field
    pub fn from_store(field_id: &str, error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(_) | StoreError::ProviderUpdateRequired | StoreError::PermissionDenied(_) => {
                HealthError::PlatformUnavailable(error.to_string())
            }
            other => HealthError::NativeCall {
                field_id: field_id.to_string(),
                message: other.to_string(),
            },
        }
    }

    pub fn validation(field_id: &str, source: ValidationError) -> Self {
        HealthError::Validation { field_id: field_id.to_string(), source }
    }

    pub fn unsupported_unit(field_id: &str, detail: impl Into<String>) -> Self {
        HealthError::UnsupportedUnit {
            field_id: field_id.to_string(),
            detail: detail.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            HealthError::UnknownField(_) => "unknown-field",
            HealthError::UnsupportedUnit { .. } => "unsupported-unit",
            HealthError::Validation { .. } => "validation",
            HealthError::PlatformUnavailable(_) => "platform-unavailable",
            HealthError::NativeCall { .. } => "native-call",
            HealthError::ReadOnlyField(_) => "read-only-field",
            HealthError::NotSupported { .. } => "not-supported",
            HealthError::NotInitialized => "not-initialized",
        }
    }

    /// Short message for the UI
    pub fn user_message(&self) -> String {
        match self {
            HealthError::Validation { source, .. } => source.user_message().to_string(),
            HealthError::PlatformUnavailable(_) => {
                "Health data is not available. Check that access is granted and the health app is up to date."
                    .to_string()
            }
            HealthError::NativeCall { .. } => "The health store could not complete the request.".to_string(),
            HealthError::ReadOnlyField(_) => "This item cannot be edited.".to_string(),
            HealthError::NotSupported { .. } => "Saving this item is not supported on this device.".to_string(),
            HealthError::NotInitialized => "Health data access has not been set up yet.".to_string(),
            HealthError::UnknownField(_) | HealthError::UnsupportedUnit { .. } => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_platform_or_native() {
        let unavailable = HealthError::from_store("height", StoreError::ProviderUpdateRequired);
        assert!(matches!(unavailable, HealthError::PlatformUnavailable(_)));

        let denied = HealthError::from_store("height", StoreError::PermissionDenied("Height".to_string()));
        assert!(matches!(denied, HealthError::PlatformUnavailable(_)));

        let native = HealthError::from_store("height", StoreError::Native("binder died".to_string()));
        assert_eq!(
            native,
            HealthError::NativeCall {
                field_id: "height".to_string(),
                message: "Native call failed: binder died".to_string(),
            }
        );
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(ValidationReason::NotANumber.code(), "not-a-number");
        assert_eq!(ValidationReason::OutOfRange { bound: Bound::Upper }.code(), "out-of-range");
        assert_eq!(ValidationReason::InvalidEnum.code(), "invalid-enum");
    }

    #[test]
    fn test_reason_serializes_with_bound() {
        let json = serde_json::to_value(ValidationReason::OutOfRange { bound: Bound::Lower }).unwrap();
        assert_eq!(json, serde_json::json!({ "reason": "out-of-range", "bound": "lower" }));
    }

    #[test]
    fn test_user_message_for_validation_is_the_validation_message() {
        let err = HealthError::validation(
            "bodyTemperature",
            ValidationError::out_of_range(Bound::Upper, Some(35.0), Some(42.0)),
        );
        assert_eq!(err.user_message(), "Value must be between 35 and 42");
        assert_eq!(err.code(), "validation");
    }
}
