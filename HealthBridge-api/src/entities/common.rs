use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use health_bridge_domain::HealthError;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a bad request error response
    pub fn bad_request(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "bad-request".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a response for a gateway error
    pub fn from_health_error(error: &HealthError) -> Self {
        let details = match error {
            HealthError::Validation { source, .. } => serde_json::to_value(source.reason).ok(),
            HealthError::UnknownField(id) | HealthError::ReadOnlyField(id) => Some(serde_json::json!({ "fieldId": id })),
            HealthError::NotSupported { field_id, platform } => {
                Some(serde_json::json!({ "fieldId": field_id, "platform": platform }))
            }
            _ => None,
        };

        Self {
            error: error.code().to_string(),
            message: error.user_message(),
            details,
        }
    }
}

/// A gateway error on its way to the client
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub HealthError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            HealthError::UnknownField(_) => StatusCode::NOT_FOUND,
            HealthError::Validation { .. } | HealthError::ReadOnlyField(_) => StatusCode::BAD_REQUEST,
            HealthError::UnsupportedUnit { .. } | HealthError::NotSupported { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            HealthError::NotInitialized => StatusCode::CONFLICT,
            HealthError::PlatformUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HealthError::NativeCall { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::from_health_error(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_bridge_domain::error::{Bound, ValidationError};
    use health_bridge_domain::Platform;

    #[test]
    fn test_status_codes() {
        let status = |e: HealthError| ApiError(e).status();

        assert_eq!(status(HealthError::UnknownField("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(status(HealthError::ReadOnlyField("steps".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(HealthError::NotSupported { field_id: "x".into(), platform: Platform::Ios }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status(HealthError::PlatformUnavailable("gone".into())), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status(HealthError::NativeCall { field_id: "x".into(), message: "boom".into() }),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_details_carry_the_reason() {
        let error = HealthError::validation(
            "bodyTemperature",
            ValidationError::out_of_range(Bound::Upper, Some(35.0), Some(42.0)),
        );
        let body = ErrorResponse::from_health_error(&error);

        assert_eq!(body.error, "validation");
        assert_eq!(body.message, "Value must be between 35 and 42");
        assert_eq!(body.details, Some(serde_json::json!({ "reason": "out-of-range", "bound": "upper" })));
    }
}
