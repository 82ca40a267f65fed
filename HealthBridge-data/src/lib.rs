// HealthBridge Data
// This crate models the platform health stores the domain layer talks to:
// the native record shapes, the store interfaces and in-memory stores.

// Errors reported by platform stores
pub mod errors;

// Time range filters shared by both platforms
pub mod time_range;

// Apple HealthKit samples and store interface
pub mod health_kit;

// Google Health Connect records and store interface
pub mod health_connect;

// Re-export commonly used types
pub use errors::StoreError;
pub use time_range::TimeRangeFilter;
pub use health_kit::{
    CategorySample, CorrelationSample, HealthKitSample, HealthKitStore, InMemoryHealthKitStore, QuantitySample,
    SampleType,
};
pub use health_connect::{
    AccessType, HealthConnectRecord, HealthConnectStore, InMemoryHealthConnectStore, Permission, Quantity,
    RecordType, SdkStatus,
};
