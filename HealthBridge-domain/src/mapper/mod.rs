// Time windows for native queries
pub mod window;

// Parsing user input per field kind
pub mod input;

// Field handlers and handler tables
pub mod handler;

// The backend trait and platform selection
pub mod backend;

// Health Connect record mapping
pub mod health_connect;

// HealthKit sample mapping
pub mod health_kit;

pub use backend::{Backend, HealthBackend, PlatformStores};
pub use window::TimeWindow;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use tracing::{debug, error, warn};

use crate::catalog::FieldRegistry;
use crate::entities::NormalizedValue;
use crate::error::HealthError;
use crate::platform::Platform;

/// Fetch concurrency used when none is configured
pub const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// Reads and writes canonical field values through a platform backend
pub struct RecordMapper {
    registry: FieldRegistry,
    backend: Backend,
    concurrency: usize,
}

impl RecordMapper {
    pub fn new(registry: FieldRegistry, backend: Backend) -> Self {
        Self {
            registry,
            backend,
            concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Limit how many fields are fetched at once
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn platform(&self) -> Platform {
        self.backend.platform()
    }

    /// Current value of one field
    ///
    /// Only an unknown id is an error; anything else that goes wrong is logged
    /// and reported as no data.
    pub async fn fetch_field(&self, field_id: &str) -> Result<Option<NormalizedValue>, HealthError> {
        let descriptor = self.registry.describe(field_id)?;
        if !descriptor.readable {
            debug!("{} is not readable", field_id);
            return Ok(None);
        }

        match self.backend.fetch(descriptor, Utc::now()).await {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Failed to fetch {}: {}", field_id, e);
                Ok(None)
            }
        }
    }

    /// Current values of several fields, fetched concurrently
    ///
    /// The map follows registry order; unknown ids come last with no value.
    pub async fn fetch_all(&self, field_ids: &[&str]) -> IndexMap<String, Option<NormalizedValue>> {
        let mut results: IndexMap<String, Option<NormalizedValue>> = self
            .registry
            .iter()
            .filter(|descriptor| field_ids.contains(&descriptor.id))
            .map(|descriptor| (descriptor.id.to_string(), None))
            .collect();
        for id in field_ids {
            if !results.contains_key(*id) {
                warn!("Ignoring unknown field {}", id);
                results.insert(id.to_string(), None);
            }
        }

        // Each known id is fetched once, however often it was requested
        let known: Vec<&'static str> = results
            .keys()
            .filter_map(|id| self.registry.describe(id).ok())
            .map(|descriptor| descriptor.id)
            .collect();
        let fetches: Vec<futures::future::BoxFuture<'_, (&'static str, Option<NormalizedValue>)>> = known
            .into_iter()
            .map(|id: &'static str| -> futures::future::BoxFuture<'_, (&'static str, Option<NormalizedValue>)> {
                Box::pin(async move { (id, self.fetch_field(id).await.unwrap_or(None)) })
            })
            .collect();
        let fetched: Vec<(&'static str, Option<NormalizedValue>)> = stream::iter(fetches)
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        for (id, value) in fetched {
            if let Some(slot) = results.get_mut(id) {
                *slot = value;
            }
        }
        results
    }

    /// Current values of every readable field
    pub async fn fetch_everything(&self) -> IndexMap<String, Option<NormalizedValue>> {
        let ids: Vec<&str> = self.registry.iter().filter(|d| d.readable).map(|d| d.id).collect();
        self.fetch_all(&ids).await
    }

    /// Validate `raw` and write it to the native store
    ///
    /// The store is only called once the input has passed validation.
    pub async fn save_field(&self, field_id: &str, raw: &str) -> Result<NormalizedValue, HealthError> {
        let descriptor = self.registry.describe(field_id)?;
        if !descriptor.writable {
            return Err(HealthError::ReadOnlyField(field_id.to_string()));
        }

        let value = input::parse_input(descriptor, raw).map_err(|e| HealthError::validation(field_id, e))?;

        self.backend.save(descriptor, &value, Utc::now()).await.map_err(|e| {
            error!("Failed to save {}: {}", field_id, e);
            e
        })
    }
}
