//! Apple HealthKit boundary
//!
//! The host application implements [`HealthKitStore`] over its HealthKit
//! bridge; [`InMemoryHealthKitStore`] stands in for it off-device.

pub mod identifiers;
mod in_memory;
mod samples;

pub use in_memory::InMemoryHealthKitStore;
pub use samples::{
    CategorySample, CorrelationSample, HealthKitSample, QuantitySample, SampleType, METADATA_WAS_USER_ENTERED,
};

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::time_range::TimeRangeFilter;

/// Operations exposed by the HealthKit bridge
#[async_trait]
pub trait HealthKitStore: Send + Sync {
    /// Whether HealthKit is available on this device
    async fn is_health_data_available(&self) -> Result<bool, StoreError>;

    /// Request read and write authorization; returns whether the request succeeded
    async fn request_authorization(&self, read: &[SampleType], write: &[SampleType]) -> Result<bool, StoreError>;

    /// Query samples of one type overlapping the filter, oldest first
    async fn query_samples(
        &self,
        sample_type: &SampleType,
        filter: &TimeRangeFilter,
    ) -> Result<Vec<HealthKitSample>, StoreError>;

    /// Save samples; returns the UUIDs assigned by the store
    async fn save_samples(&self, samples: Vec<HealthKitSample>) -> Result<Vec<String>, StoreError>;
}
