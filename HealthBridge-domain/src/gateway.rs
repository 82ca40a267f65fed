//! Platform gateway
//!
//! The single entry point for callers. It picks the backend once, initializes
//! it lazily with single-flight semantics and then forwards to the record
//! mapper.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{Category, FieldDescriptor, FieldRegistry};
use crate::config::GatewayConfig;
use crate::entities::NormalizedValue;
use crate::error::HealthError;
use crate::mapper::{Backend, HealthBackend, PlatformStores, RecordMapper};
use crate::platform::Platform;

/// Initialization state of the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
pub enum InitState {
    Uninitialized,
    Initializing,
    Ready,
    Failed(String),
}

type InitFuture = Shared<BoxFuture<'static, Result<(), HealthError>>>;

struct InitSlot {
    state: InitState,
    generation: u64,
    in_flight: Option<(u64, InitFuture)>,
}

/// Uniform async access to the platform health store
pub struct PlatformGateway {
    mapper: Arc<RecordMapper>,
    init: Mutex<InitSlot>,
}

impl PlatformGateway {
    /// Select the backend for the configured platform
    pub fn new(config: &GatewayConfig, stores: &PlatformStores) -> Result<Self, HealthError> {
        let platform = config.platform();
        let backend = Backend::select(platform, stores)?;
        let mapper = RecordMapper::new(FieldRegistry::for_platform(platform), backend)
            .with_concurrency(config.fetch_concurrency);
        info!("Health gateway using {}", platform.store_name());
        Ok(Self::from_mapper(mapper))
    }

    pub fn from_mapper(mapper: RecordMapper) -> Self {
        Self {
            mapper: Arc::new(mapper),
            init: Mutex::new(InitSlot {
                state: InitState::Uninitialized,
                generation: 0,
                in_flight: None,
            }),
        }
    }

    fn slot(&self) -> MutexGuard<'_, InitSlot> {
        self.init.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> InitState {
        self.slot().state.clone()
    }

    pub fn platform(&self) -> Platform {
        self.mapper.platform()
    }

    pub fn registry(&self) -> &FieldRegistry {
        self.mapper.registry()
    }

    /// Initialize the backend once
    ///
    /// Concurrent callers share the same attempt. A failed attempt is
    /// forgotten so the next call tries again.
    pub async fn initialize(&self) -> Result<(), HealthError> {
        let (generation, attempt) = {
            let mut slot = self.slot();
            if slot.state == InitState::Ready {
                return Ok(());
            }
            match &slot.in_flight {
                Some((generation, attempt)) => (*generation, attempt.clone()),
                None => {
                    slot.generation += 1;
                    slot.state = InitState::Initializing;
                    info!("Initializing {} (attempt {})", self.platform().store_name(), slot.generation);

                    let mapper = Arc::clone(&self.mapper);
                    let attempt = async move { mapper.backend().initialize().await }.boxed().shared();
                    slot.in_flight = Some((slot.generation, attempt.clone()));
                    (slot.generation, attempt)
                }
            }
        };

        let result = attempt.await;

        let mut slot = self.slot();
        if matches!(slot.in_flight, Some((current, _)) if current == generation) {
            slot.in_flight = None;
            slot.state = match &result {
                Ok(()) => {
                    info!("{} ready", self.platform().store_name());
                    InitState::Ready
                }
                Err(e) => {
                    warn!("{} failed to initialize: {}", self.platform().store_name(), e);
                    InitState::Failed(e.to_string())
                }
            };
        }
        result
    }

    /// Ask for access to every catalog field
    ///
    /// Returns `false` when the user declines.
    pub async fn request_permissions(&self) -> Result<bool, HealthError> {
        if self.state() != InitState::Ready {
            return Err(HealthError::NotInitialized);
        }
        self.mapper.backend().request_permissions(self.mapper.registry()).await
    }

    pub async fn fetch_field(&self, field_id: &str) -> Result<Option<NormalizedValue>, HealthError> {
        self.mapper.registry().describe(field_id)?;
        self.initialize().await?;
        self.mapper.fetch_field(field_id).await
    }

    pub async fn fetch_all(&self, field_ids: &[&str]) -> Result<IndexMap<String, Option<NormalizedValue>>, HealthError> {
        self.initialize().await?;
        Ok(self.mapper.fetch_all(field_ids).await)
    }

    /// Values of every readable field
    pub async fn fetch_everything(&self) -> Result<IndexMap<String, Option<NormalizedValue>>, HealthError> {
        self.initialize().await?;
        Ok(self.mapper.fetch_everything().await)
    }

    pub async fn save_field(&self, field_id: &str, raw: &str) -> Result<NormalizedValue, HealthError> {
        self.mapper.registry().describe(field_id)?;
        self.initialize().await?;
        self.mapper.save_field(field_id, raw).await
    }

    pub fn list_fields(&self, category: Option<Category>) -> Vec<&FieldDescriptor> {
        self.mapper.registry().list_fields(category)
    }

    pub fn list_writable(&self) -> Vec<&FieldDescriptor> {
        self.mapper.registry().list_writable()
    }

    pub fn describe(&self, field_id: &str) -> Result<&FieldDescriptor, HealthError> {
        self.mapper.registry().describe(field_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Once;

    use async_trait::async_trait;
    use mockall::mock;
    use tokio::sync::Notify;

    use health_bridge_data::{
        HealthConnectRecord, HealthConnectStore, InMemoryHealthConnectStore, Permission, RecordType, SdkStatus,
        StoreError, TimeRangeFilter,
    };

    static TRACING: Once = Once::new();

    fn init_tracing() {
        TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        });
    }

    mock! {
        pub Connect {}

        #[async_trait]
        impl HealthConnectStore for Connect {
            async fn sdk_status(&self) -> Result<SdkStatus, StoreError>;
            async fn initialize(&self) -> Result<bool, StoreError>;
            async fn request_permission(&self, permissions: &[Permission]) -> Result<Vec<Permission>, StoreError>;
            async fn read_records(
                &self,
                record_type: RecordType,
                filter: &TimeRangeFilter,
            ) -> Result<Vec<HealthConnectRecord>, StoreError>;
            async fn insert_records(&self, records: Vec<HealthConnectRecord>) -> Result<Vec<String>, StoreError>;
        }
    }

    /// Holds `initialize` until the test opens the gate
    struct GatedStore {
        inner: InMemoryHealthConnectStore,
        gate: Arc<Notify>,
        initialize_calls: AtomicUsize,
    }

    #[async_trait]
    impl HealthConnectStore for GatedStore {
        async fn sdk_status(&self) -> Result<SdkStatus, StoreError> {
            self.inner.sdk_status().await
        }

        async fn initialize(&self) -> Result<bool, StoreError> {
            self.initialize_calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            self.inner.initialize().await
        }

        async fn request_permission(&self, permissions: &[Permission]) -> Result<Vec<Permission>, StoreError> {
            self.inner.request_permission(permissions).await
        }

        async fn read_records(
            &self,
            record_type: RecordType,
            filter: &TimeRangeFilter,
        ) -> Result<Vec<HealthConnectRecord>, StoreError> {
            self.inner.read_records(record_type, filter).await
        }

        async fn insert_records(&self, records: Vec<HealthConnectRecord>) -> Result<Vec<String>, StoreError> {
            self.inner.insert_records(records).await
        }
    }

    fn android() -> GatewayConfig {
        GatewayConfig::default().with_platform(Platform::Android)
    }

    fn gateway(store: Arc<dyn HealthConnectStore>) -> PlatformGateway {
        init_tracing();
        PlatformGateway::new(&android(), &PlatformStores::health_connect(store)).unwrap()
    }

    #[tokio::test]
    async fn test_concurrent_initialize_runs_once() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(GatedStore {
            inner: InMemoryHealthConnectStore::new(),
            gate: Arc::clone(&gate),
            initialize_calls: AtomicUsize::new(0),
        });
        let gateway = gateway(store.clone());

        let open = async {
            tokio::task::yield_now().await;
            assert_eq!(gateway.state(), InitState::Initializing);
            gate.notify_one();
        };
        let (a, b, c, _) = tokio::join!(gateway.initialize(), gateway.initialize(), gateway.initialize(), open);

        assert_eq!((a, b, c), (Ok(()), Ok(()), Ok(())));
        assert_eq!(store.initialize_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.state(), InitState::Ready);

        gateway.initialize().await.unwrap();
        assert_eq!(store.initialize_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_initialize_is_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);

        let mut store = MockConnect::new();
        store.expect_sdk_status().times(2).returning(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(SdkStatus::SdkUnavailableProviderUpdateRequired)
            } else {
                Ok(SdkStatus::SdkAvailable)
            }
        });
        store.expect_initialize().times(1).returning(|| Ok(true));

        let gateway = gateway(Arc::new(store));

        let first = gateway.initialize().await;
        assert!(matches!(first, Err(HealthError::PlatformUnavailable(_))));
        assert!(matches!(gateway.state(), InitState::Failed(_)));

        gateway.initialize().await.unwrap();
        assert_eq!(gateway.state(), InitState::Ready);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_permissions_require_initialization() {
        let mut store = MockConnect::new();
        store.expect_sdk_status().returning(|| Ok(SdkStatus::SdkAvailable));
        store.expect_initialize().returning(|| Ok(true));
        store
            .expect_request_permission()
            .times(1)
            .returning(|requested| Ok(requested.to_vec()));

        let gateway = gateway(Arc::new(store));
        assert_eq!(gateway.request_permissions().await, Err(HealthError::NotInitialized));

        gateway.initialize().await.unwrap();
        assert_eq!(gateway.request_permissions().await, Ok(true));
    }

    #[tokio::test]
    async fn test_declined_permissions_return_false() {
        let store = InMemoryHealthConnectStore::new().deny_permissions();
        let gateway = gateway(Arc::new(store));

        gateway.initialize().await.unwrap();
        assert_eq!(gateway.request_permissions().await, Ok(false));
    }

    #[tokio::test]
    async fn test_save_and_fetch_initialize_lazily() {
        let store = InMemoryHealthConnectStore::new();
        let gateway = gateway(Arc::new(store.clone()));

        let saved = gateway.save_field("height", "175").await.unwrap();
        assert_eq!(saved.display(), "175");
        assert_eq!(gateway.state(), InitState::Ready);
        assert_eq!(store.initialize_calls(), 1);

        let records = store.records_of(RecordType::Height).unwrap();
        let HealthConnectRecord::Height { height, .. } = &records[0] else {
            panic!("expected a height record");
        };
        assert_eq!(height.value, 1.75);
        assert_eq!(height.unit, "meters");

        let fetched = gateway.fetch_field("height").await.unwrap().unwrap();
        assert_eq!(fetched.display(), "175");
    }

    #[tokio::test]
    async fn test_rejected_input_does_not_touch_the_store() {
        let mut store = MockConnect::new();
        store.expect_sdk_status().returning(|| Ok(SdkStatus::SdkAvailable));
        store.expect_initialize().returning(|| Ok(true));
        store.expect_insert_records().never();

        let gateway = gateway(Arc::new(store));
        assert!(matches!(
            gateway.save_field("bodyTemperature", "50").await,
            Err(HealthError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_survives_one_failing_field() {
        let store = InMemoryHealthConnectStore::new().failing_reads_for(RecordType::Steps);
        let gateway = gateway(Arc::new(store));

        gateway.save_field("weight", "70.5").await.unwrap();
        let values = gateway.fetch_all(&["steps", "weight"]).await.unwrap();

        assert_eq!(values["steps"], None);
        assert_eq!(values["weight"].as_ref().map(|v| v.display()), Some("70.5".to_string()));
    }

    #[tokio::test]
    async fn test_unavailable_platform_fails_fetch() {
        let store = InMemoryHealthConnectStore::new().with_status(SdkStatus::SdkUnavailable);
        let gateway = gateway(Arc::new(store));

        assert!(matches!(
            gateway.fetch_field("height").await,
            Err(HealthError::PlatformUnavailable(_))
        ));
        assert_eq!(gateway.fetch_field("nope").await, Err(HealthError::UnknownField("nope".to_string())));
    }

    #[test]
    fn test_missing_store_is_rejected() {
        let config = GatewayConfig::default().with_platform(Platform::Ios);
        assert!(matches!(
            PlatformGateway::new(&config, &PlatformStores::default()),
            Err(HealthError::PlatformUnavailable(_))
        ));
    }
}
