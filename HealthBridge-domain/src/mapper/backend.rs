use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use health_bridge_data::{HealthConnectStore, HealthKitStore};

use super::health_connect::HealthConnectBackend;
use super::health_kit::HealthKitBackend;
use crate::catalog::{FieldDescriptor, FieldRegistry};
use crate::entities::{NormalizedValue, RawValue};
use crate::error::HealthError;
use crate::platform::Platform;

/// Per-platform record mapping over a native store
#[async_trait]
pub trait HealthBackend: Send + Sync {
    fn platform(&self) -> Platform;

    /// Check availability and set up the native client
    async fn initialize(&self) -> Result<(), HealthError>;

    /// Ask for read access to every readable field and write access to every writable one
    async fn request_permissions(&self, registry: &FieldRegistry) -> Result<bool, HealthError>;

    /// Read the current value of one field
    async fn fetch(&self, descriptor: &FieldDescriptor, now: DateTime<Utc>) -> Result<Option<NormalizedValue>, HealthError>;

    /// Write one validated value
    async fn save(&self, descriptor: &FieldDescriptor, value: &RawValue, now: DateTime<Utc>) -> Result<NormalizedValue, HealthError>;
}

/// Native stores provided by the host application
#[derive(Clone, Default)]
pub struct PlatformStores {
    pub health_kit: Option<Arc<dyn HealthKitStore>>,
    pub health_connect: Option<Arc<dyn HealthConnectStore>>,
}

impl PlatformStores {
    pub fn health_kit(store: Arc<dyn HealthKitStore>) -> Self {
        Self { health_kit: Some(store), health_connect: None }
    }

    pub fn health_connect(store: Arc<dyn HealthConnectStore>) -> Self {
        Self { health_kit: None, health_connect: Some(store) }
    }
}

/// The backend chosen for the running platform
pub enum Backend {
    HealthKit(HealthKitBackend),
    HealthConnect(HealthConnectBackend),
}

impl Backend {
    /// Pick the backend for `platform` from the available stores
    pub fn select(platform: Platform, stores: &PlatformStores) -> Result<Self, HealthError> {
        match platform {
            Platform::Ios => stores
                .health_kit
                .clone()
                .map(|store| Backend::HealthKit(HealthKitBackend::new(store)))
                .ok_or_else(|| HealthError::PlatformUnavailable("No HealthKit store is configured".to_string())),
            Platform::Android => stores
                .health_connect
                .clone()
                .map(|store| Backend::HealthConnect(HealthConnectBackend::new(store)))
                .ok_or_else(|| HealthError::PlatformUnavailable("No Health Connect store is configured".to_string())),
        }
    }

    fn inner(&self) -> &dyn HealthBackend {
        match self {
            Backend::HealthKit(backend) => backend,
            Backend::HealthConnect(backend) => backend,
        }
    }
}

#[async_trait]
impl HealthBackend for Backend {
    fn platform(&self) -> Platform {
        self.inner().platform()
    }

    async fn initialize(&self) -> Result<(), HealthError> {
        self.inner().initialize().await
    }

    async fn request_permissions(&self, registry: &FieldRegistry) -> Result<bool, HealthError> {
        self.inner().request_permissions(registry).await
    }

    async fn fetch(&self, descriptor: &FieldDescriptor, now: DateTime<Utc>) -> Result<Option<NormalizedValue>, HealthError> {
        self.inner().fetch(descriptor, now).await
    }

    async fn save(&self, descriptor: &FieldDescriptor, value: &RawValue, now: DateTime<Utc>) -> Result<NormalizedValue, HealthError> {
        self.inner().save(descriptor, value, now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_bridge_data::{InMemoryHealthConnectStore, InMemoryHealthKitStore};

    #[test]
    fn test_select_requires_a_store_for_the_platform() {
        let stores = PlatformStores::health_connect(Arc::new(InMemoryHealthConnectStore::new()));

        let backend = Backend::select(Platform::Android, &stores).unwrap();
        assert_eq!(backend.platform(), Platform::Android);
        assert!(matches!(
            Backend::select(Platform::Ios, &stores),
            Err(HealthError::PlatformUnavailable(_))
        ));
    }

    #[test]
    fn test_select_health_kit() {
        let stores = PlatformStores::health_kit(Arc::new(InMemoryHealthKitStore::new()));
        assert!(matches!(Backend::select(Platform::Ios, &stores), Ok(Backend::HealthKit(_))));
    }
}
