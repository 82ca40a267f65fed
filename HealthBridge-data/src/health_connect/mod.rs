//! Google Health Connect boundary
//!
//! The host application implements [`HealthConnectStore`] over its native
//! module; [`InMemoryHealthConnectStore`] stands in for it on desktop and in tests.

mod in_memory;
mod records;

pub use in_memory::InMemoryHealthConnectStore;
pub use records::{
    CadenceSample, HealthConnectRecord, HeartRateSample, PowerSample, Quantity, RecordType, SpeedSample,
    StepsCadenceSample,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::time_range::TimeRangeFilter;

/// Availability status reported by `getSdkStatus()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SdkStatus {
    /// Health Connect is not installed or not supported
    SdkUnavailable,
    /// Health Connect is installed but must be updated
    SdkUnavailableProviderUpdateRequired,
    /// Health Connect can be used
    SdkAvailable,
}

impl SdkStatus {
    /// Map the integer code returned by the native module
    pub fn from_code(code: i32) -> Result<Self, StoreError> {
        match code {
            1 => Ok(SdkStatus::SdkUnavailable),
            2 => Ok(SdkStatus::SdkUnavailableProviderUpdateRequired),
            3 => Ok(SdkStatus::SdkAvailable),
            other => Err(StoreError::Malformed(format!("Unknown SDK status code: {}", other))),
        }
    }

    /// Integer code used by the native module
    pub fn code(&self) -> i32 {
        match self {
            SdkStatus::SdkUnavailable => 1,
            SdkStatus::SdkUnavailableProviderUpdateRequired => 2,
            SdkStatus::SdkAvailable => 3,
        }
    }
}

/// Access kind of a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Read,
    Write,
}

/// A Health Connect permission, e.g. `{"accessType": "read", "recordType": "Steps"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub access_type: AccessType,
    pub record_type: RecordType,
}

impl Permission {
    /// Read permission for a record type
    pub fn read(record_type: RecordType) -> Self {
        Self { access_type: AccessType::Read, record_type }
    }

    /// Write permission for a record type
    pub fn write(record_type: RecordType) -> Self {
        Self { access_type: AccessType::Write, record_type }
    }
}

/// Operations exposed by the Health Connect native module
#[async_trait]
pub trait HealthConnectStore: Send + Sync {
    /// Report whether the SDK can be used on this device
    async fn sdk_status(&self) -> Result<SdkStatus, StoreError>;

    /// Initialize the client; returns whether initialization succeeded
    async fn initialize(&self) -> Result<bool, StoreError>;

    /// Ask the user for permissions; returns the permissions that were granted
    async fn request_permission(&self, permissions: &[Permission]) -> Result<Vec<Permission>, StoreError>;

    /// Read the records of one type overlapping the filter, oldest first
    async fn read_records(
        &self,
        record_type: RecordType,
        filter: &TimeRangeFilter,
    ) -> Result<Vec<HealthConnectRecord>, StoreError>;

    /// Insert records; returns the ids assigned by the store
    async fn insert_records(&self, records: Vec<HealthConnectRecord>) -> Result<Vec<String>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_status_codes() {
        assert_eq!(SdkStatus::from_code(1).unwrap(), SdkStatus::SdkUnavailable);
        assert_eq!(SdkStatus::from_code(2).unwrap(), SdkStatus::SdkUnavailableProviderUpdateRequired);
        assert_eq!(SdkStatus::from_code(3).unwrap(), SdkStatus::SdkAvailable);
        assert!(SdkStatus::from_code(7).is_err());
        assert_eq!(SdkStatus::SdkAvailable.code(), 3);
    }

    #[test]
    fn test_permission_wire_shape() {
        let value = serde_json::to_value(Permission::write(RecordType::Height)).unwrap();
        assert_eq!(value, serde_json::json!({ "accessType": "write", "recordType": "Height" }));
    }
}
