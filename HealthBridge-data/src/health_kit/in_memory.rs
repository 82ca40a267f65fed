use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{HealthKitSample, HealthKitStore, SampleType};
use crate::errors::StoreError;
use crate::time_range::TimeRangeFilter;

/// In-memory HealthKit store
#[derive(Debug, Clone)]
pub struct InMemoryHealthKitStore {
    /// Stored samples keyed by UUID
    samples: Arc<Mutex<HashMap<String, HealthKitSample>>>,

    /// Whether `is_health_data_available` reports true
    available: bool,

    /// Whether authorization requests fail
    deny_authorization: bool,

    /// Sample types whose queries fail
    failing_queries: Arc<HashSet<SampleType>>,

    /// Number of `save_samples` calls
    save_calls: Arc<AtomicUsize>,

    /// Number of `is_health_data_available` calls
    availability_checks: Arc<AtomicUsize>,
}

impl Default for InMemoryHealthKitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHealthKitStore {
    /// Create an empty, available store
    pub fn new() -> Self {
        Self {
            samples: Arc::new(Mutex::new(HashMap::new())),
            available: true,
            deny_authorization: false,
            failing_queries: Arc::new(HashSet::new()),
            save_calls: Arc::new(AtomicUsize::new(0)),
            availability_checks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Report HealthKit as unavailable
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Decline authorization requests
    pub fn deny_authorization(mut self) -> Self {
        self.deny_authorization = true;
        self
    }

    /// Make queries of the given type fail
    pub fn failing_queries_for(mut self, sample_type: SampleType) -> Self {
        let mut failing = (*self.failing_queries).clone();
        failing.insert(sample_type);
        self.failing_queries = Arc::new(failing);
        self
    }

    /// Seed the store with samples
    pub fn with_samples(self, samples: Vec<HealthKitSample>) -> Self {
        if let Ok(mut store) = self.samples.lock() {
            for sample in samples {
                store.insert(Uuid::new_v4().to_string(), sample);
            }
        }
        self
    }

    /// Number of times `save_samples` was called
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Number of times availability was checked
    pub fn availability_checks(&self) -> usize {
        self.availability_checks.load(Ordering::SeqCst)
    }

    /// All stored samples of a type, oldest first
    pub fn samples_of(&self, sample_type: &SampleType) -> Result<Vec<HealthKitSample>, StoreError> {
        let store = self.samples.lock()?;
        let mut samples: Vec<HealthKitSample> = store
            .values()
            .filter(|sample| &sample.sample_type() == sample_type)
            .cloned()
            .collect();
        samples.sort_by_key(|sample| sample.end_date());
        Ok(samples)
    }
}

#[async_trait]
impl HealthKitStore for InMemoryHealthKitStore {
    async fn is_health_data_available(&self) -> Result<bool, StoreError> {
        self.availability_checks.fetch_add(1, Ordering::SeqCst);
        Ok(self.available)
    }

    async fn request_authorization(&self, read: &[SampleType], write: &[SampleType]) -> Result<bool, StoreError> {
        debug!("Authorization requested for {} read / {} write type(s)", read.len(), write.len());
        Ok(!self.deny_authorization)
    }

    async fn query_samples(
        &self,
        sample_type: &SampleType,
        filter: &TimeRangeFilter,
    ) -> Result<Vec<HealthKitSample>, StoreError> {
        if self.failing_queries.contains(sample_type) {
            return Err(StoreError::Native(format!("Query failed for {}", sample_type)));
        }

        let samples = self
            .samples_of(sample_type)?
            .into_iter()
            .filter(|sample| {
                let (start, end) = sample.span();
                filter.overlaps(start, end)
            })
            .collect::<Vec<_>>();

        debug!("Queried {} {} sample(s)", samples.len(), sample_type);
        Ok(samples)
    }

    async fn save_samples(&self, samples: Vec<HealthKitSample>) -> Result<Vec<String>, StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        let mut store = self.samples.lock()?;
        let ids = samples
            .into_iter()
            .map(|sample| {
                let id = Uuid::new_v4().to_string();
                store.insert(id.clone(), sample);
                id
            })
            .collect();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_kit::{identifiers, CategorySample, QuantitySample};
    use chrono::{Duration, Utc};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_save_then_query_by_type() {
        let store = InMemoryHealthKitStore::new();
        let now = Utc::now();

        store
            .save_samples(vec![
                HealthKitSample::Quantity(QuantitySample::new(identifiers::HEIGHT, "m", 1.75, now, now)),
                HealthKitSample::Quantity(QuantitySample::new(identifiers::BODY_MASS, "kg", 70.0, now, now)),
            ])
            .await
            .unwrap();

        let filter = TimeRangeFilter::Before { end_time: now };
        let heights = store
            .query_samples(&SampleType::quantity(identifiers::HEIGHT), &filter)
            .await
            .unwrap();
        assert_eq!(heights.len(), 1);
        assert_eq!(store.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_category_and_quantity_types_are_distinct() {
        let now = Utc::now();
        let store = InMemoryHealthKitStore::new().with_samples(vec![HealthKitSample::Category(CategorySample {
            category_type: identifiers::HEADACHE.to_string(),
            value: 3,
            start_date: now - Duration::minutes(10),
            end_date: now,
            metadata: BTreeMap::new(),
        })]);

        let filter = TimeRangeFilter::After { start_time: now - Duration::hours(1) };
        let as_category = store
            .query_samples(&SampleType::category(identifiers::HEADACHE), &filter)
            .await
            .unwrap();
        let as_quantity = store
            .query_samples(&SampleType::quantity(identifiers::HEADACHE), &filter)
            .await
            .unwrap();

        assert_eq!(as_category.len(), 1);
        assert!(as_quantity.is_empty());
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = InMemoryHealthKitStore::new()
            .unavailable()
            .deny_authorization()
            .failing_queries_for(SampleType::quantity(identifiers::STEP_COUNT));

        assert!(!store.is_health_data_available().await.unwrap());
        assert_eq!(store.availability_checks(), 1);
        assert!(!store.request_authorization(&[], &[]).await.unwrap());

        let filter = TimeRangeFilter::After { start_time: Utc::now() };
        let result = store
            .query_samples(&SampleType::quantity(identifiers::STEP_COUNT), &filter)
            .await;
        assert!(matches!(result, Err(StoreError::Native(_))));
    }
}
