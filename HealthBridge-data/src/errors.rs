use std::sync::PoisonError;
use thiserror::Error;

/// Error type for platform store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The health SDK is not installed or not supported on this device
    #[error("Health store unavailable: {0}")]
    Unavailable(String),

    /// The Health Connect provider must be updated before use
    #[error("Health store provider update required")]
    ProviderUpdateRequired,

    /// The user has not granted access to the requested data
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The native call raised an error
    #[error("Native call failed: {0}")]
    Native(String),

    /// A record could not be encoded or decoded
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(error: PoisonError<T>) -> Self {
        StoreError::Lock(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Malformed(error.to_string())
    }
}

impl From<String> for StoreError {
    fn from(error: String) -> Self {
        // Native bridges report permission problems as plain messages
        if error.contains("permission") || error.contains("not authorized") {
            StoreError::PermissionDenied(error)
        } else {
            StoreError::Native(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion_detects_permission_errors() {
        let err: StoreError = "SecurityException: permission missing for Height".to_string().into();
        assert!(matches!(err, StoreError::PermissionDenied(_)));

        let err: StoreError = "RemoteException: binder died".to_string().into();
        assert!(matches!(err, StoreError::Native(_)));
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Malformed(_)));
    }
}
