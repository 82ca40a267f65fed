use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{HealthConnectRecord, HealthConnectStore, Permission, RecordType, SdkStatus};
use crate::errors::StoreError;
use crate::time_range::TimeRangeFilter;

/// In-memory Health Connect store
///
/// Keeps inserted records per type and can be configured to misbehave the way
/// a real device does (missing SDK, denied permissions, failing reads).
#[derive(Debug, Clone)]
pub struct InMemoryHealthConnectStore {
    /// Stored records keyed by id
    records: Arc<Mutex<HashMap<String, HealthConnectRecord>>>,

    /// Status reported by `sdk_status`
    status: SdkStatus,

    /// Whether permission requests are denied
    deny_permissions: bool,

    /// Record types whose reads fail
    failing_reads: Arc<HashSet<RecordType>>,

    /// Number of `initialize` calls
    initialize_calls: Arc<AtomicUsize>,

    /// Number of `insert_records` calls
    insert_calls: Arc<AtomicUsize>,

    /// Number of `read_records` calls
    read_calls: Arc<AtomicUsize>,
}

impl Default for InMemoryHealthConnectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHealthConnectStore {
    /// Create an empty, available store
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            status: SdkStatus::SdkAvailable,
            deny_permissions: false,
            failing_reads: Arc::new(HashSet::new()),
            initialize_calls: Arc::new(AtomicUsize::new(0)),
            insert_calls: Arc::new(AtomicUsize::new(0)),
            read_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Report the given SDK status
    pub fn with_status(mut self, status: SdkStatus) -> Self {
        self.status = status;
        self
    }

    /// Grant no permissions on request
    pub fn deny_permissions(mut self) -> Self {
        self.deny_permissions = true;
        self
    }

    /// Make reads of the given record type fail
    pub fn failing_reads_for(mut self, record_type: RecordType) -> Self {
        let mut failing = (*self.failing_reads).clone();
        failing.insert(record_type);
        self.failing_reads = Arc::new(failing);
        self
    }

    /// Seed the store with records
    pub fn with_records(self, records: Vec<HealthConnectRecord>) -> Self {
        if let Ok(mut store) = self.records.lock() {
            for record in records {
                store.insert(Uuid::new_v4().to_string(), record);
            }
        }
        self
    }

    /// Number of times `initialize` was called
    pub fn initialize_calls(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }

    /// Number of times `insert_records` was called
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Number of times `read_records` was called
    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    /// All stored records of a type, oldest first
    pub fn records_of(&self, record_type: RecordType) -> Result<Vec<HealthConnectRecord>, StoreError> {
        let store = self.records.lock()?;
        let mut records: Vec<HealthConnectRecord> = store
            .values()
            .filter(|record| record.record_type() == record_type)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.observed_at());
        Ok(records)
    }
}

#[async_trait]
impl HealthConnectStore for InMemoryHealthConnectStore {
    async fn sdk_status(&self) -> Result<SdkStatus, StoreError> {
        Ok(self.status)
    }

    async fn initialize(&self) -> Result<bool, StoreError> {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status == SdkStatus::SdkAvailable)
    }

    async fn request_permission(&self, permissions: &[Permission]) -> Result<Vec<Permission>, StoreError> {
        if self.deny_permissions {
            debug!("Denying {} permission(s)", permissions.len());
            return Ok(Vec::new());
        }
        Ok(permissions.to_vec())
    }

    async fn read_records(
        &self,
        record_type: RecordType,
        filter: &TimeRangeFilter,
    ) -> Result<Vec<HealthConnectRecord>, StoreError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_reads.contains(&record_type) {
            return Err(StoreError::Native(format!("Failed to read {} records", record_type)));
        }

        let records = self
            .records_of(record_type)?
            .into_iter()
            .filter(|record| {
                let (start, end) = record.span();
                filter.overlaps(start, end)
            })
            .collect::<Vec<_>>();

        debug!("Read {} {} record(s)", records.len(), record_type);
        Ok(records)
    }

    async fn insert_records(&self, records: Vec<HealthConnectRecord>) -> Result<Vec<String>, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let mut store = self.records.lock()?;
        let ids = records
            .into_iter()
            .map(|record| {
                let id = Uuid::new_v4().to_string();
                store.insert(id.clone(), record);
                id
            })
            .collect();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_connect::Quantity;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_insert_then_read_in_time_order() {
        let store = InMemoryHealthConnectStore::new();
        let now = Utc::now();

        store
            .insert_records(vec![
                HealthConnectRecord::Height { height: Quantity::new(1.80, "meters"), time: now },
                HealthConnectRecord::Height {
                    height: Quantity::new(1.75, "meters"),
                    time: now - Duration::days(30),
                },
            ])
            .await
            .unwrap();

        let filter = TimeRangeFilter::Before { end_time: now };
        let records = store.read_records(RecordType::Height, &filter).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.last().map(|r| r.observed_at()), Some(now));
        assert_eq!(store.insert_calls(), 1);
    }

    #[tokio::test]
    async fn test_read_filters_by_type_and_window() {
        let now = Utc::now();
        let store = InMemoryHealthConnectStore::new().with_records(vec![
            HealthConnectRecord::Steps {
                count: 500,
                start_time: now - Duration::days(2),
                end_time: now - Duration::days(2) + Duration::hours(1),
            },
            HealthConnectRecord::Steps {
                count: 300,
                start_time: now - Duration::hours(1),
                end_time: now,
            },
            HealthConnectRecord::Weight { weight: Quantity::new(70.0, "kilograms"), time: now },
        ]);

        let filter = TimeRangeFilter::between(now - Duration::hours(3), now);
        let records = store.read_records(RecordType::Steps, &filter).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = InMemoryHealthConnectStore::new()
            .deny_permissions()
            .failing_reads_for(RecordType::HeartRate)
            .with_status(SdkStatus::SdkUnavailable);

        assert_eq!(store.sdk_status().await.unwrap(), SdkStatus::SdkUnavailable);
        assert!(!store.initialize().await.unwrap());
        assert!(store
            .request_permission(&[Permission::read(RecordType::Steps)])
            .await
            .unwrap()
            .is_empty());

        let filter = TimeRangeFilter::After { start_time: Utc::now() };
        assert!(store.read_records(RecordType::HeartRate, &filter).await.is_err());
        assert!(store.read_records(RecordType::Steps, &filter).await.is_ok());
    }
}
