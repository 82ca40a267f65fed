//! Field handlers and the per-platform handler table
//!
//! A handler is plain data: the native record source it queries, the time
//! window, the native unit, and pure `read` / `write` functions. The backends
//! own the store calls; handlers only translate.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::warn;

use super::window::TimeWindow;
use crate::catalog::FieldRegistry;
use crate::entities::RawValue;
use crate::error::{HealthError, ValidationError};
use crate::platform::Platform;
use crate::units::{Unit, UnitConverter};

/// A value read from native records, with the instant it was observed
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: RawValue,
    pub observed_at: DateTime<Utc>,
}

impl Reading {
    pub fn new(value: RawValue, observed_at: DateTime<Utc>) -> Self {
        Self { value, observed_at }
    }

    pub fn number(value: f64, observed_at: DateTime<Utc>) -> Self {
        Self::new(RawValue::Number(value), observed_at)
    }
}

/// What a read or write function gets to work with
pub struct MapContext<'a, S> {
    pub field_id: &'static str,
    pub source: &'a S,
    pub converter: &'a UnitConverter,
    pub now: DateTime<Utc>,
}

impl<'a, S> MapContext<'a, S> {
    /// Convert a value reported with a platform unit string
    pub fn to_canonical(&self, value: f64, platform_unit: &str) -> Result<f64, HealthError> {
        self.converter.to_canonical(self.field_id, value, platform_unit)
    }

    /// Convert a value already expressed in the handler's native unit
    pub fn native_to_canonical(&self, value: f64) -> Result<f64, HealthError> {
        self.converter.native_to_canonical(self.field_id, value)
    }

    pub fn from_canonical(&self, value: f64) -> Result<(f64, Unit), HealthError> {
        self.converter.from_canonical(self.field_id, value)
    }

    /// The numeric payload of a validated value
    pub fn number(&self, value: &RawValue) -> Result<f64, HealthError> {
        value.as_number().ok_or_else(|| {
            HealthError::validation(self.field_id, ValidationError::malformed("Expected a single number"))
        })
    }
}

pub type ReadFn<R, S> = fn(&[R], &MapContext<'_, S>) -> Result<Option<Reading>, HealthError>;
pub type WriteFn<R, S> = fn(&RawValue, &MapContext<'_, S>) -> Result<Vec<R>, HealthError>;

/// How one field maps onto native records `R` queried from source `S`
pub struct FieldHandler<R, S> {
    pub field_id: &'static str,
    pub source: S,
    pub window: TimeWindow,
    pub native_unit: Option<Unit>,
    pub read: ReadFn<R, S>,
    pub write: Option<WriteFn<R, S>>,
}

impl<R, S> FieldHandler<R, S> {
    pub fn new(field_id: &'static str, source: S, window: TimeWindow, read: ReadFn<R, S>) -> Self {
        Self {
            field_id,
            source,
            window,
            native_unit: None,
            read,
            write: None,
        }
    }

    pub fn native(mut self, unit: Unit) -> Self {
        self.native_unit = Some(unit);
        self
    }

    pub fn write(mut self, write: WriteFn<R, S>) -> Self {
        self.write = Some(write);
        self
    }
}

/// Result of looking a field up in a handler table
pub enum Lookup<'a, R, S> {
    Handler(&'a FieldHandler<R, S>),
    /// Documented as not implemented on this platform
    KnownAbsent,
    /// In the registry but without any mapping
    Unmapped,
}

/// All handlers of one platform, keyed by field id
pub struct HandlerTable<R, S> {
    platform: Platform,
    handlers: HashMap<&'static str, FieldHandler<R, S>>,
    absent: HashSet<&'static str>,
    converter: UnitConverter,
}

impl<R, S> HandlerTable<R, S> {
    /// Build the table and register each handler's unit conversion
    ///
    /// The canonical unit comes from the registry descriptor.
    pub fn new(
        platform: Platform,
        registry: &FieldRegistry,
        handlers: Vec<FieldHandler<R, S>>,
        absent: &[&'static str],
    ) -> Self {
        let mut converter = UnitConverter::new(platform);

        for handler in &handlers {
            let Some(native) = handler.native_unit else {
                continue;
            };
            let canonical = registry
                .describe(handler.field_id)
                .ok()
                .and_then(|descriptor| Unit::parse(descriptor.unit));
            match canonical {
                Some(canonical) => {
                    if let Err(e) = converter.register(handler.field_id, canonical, native) {
                        warn!("No conversion for {} on {}: {}", handler.field_id, platform, e);
                    }
                }
                None => warn!("No canonical unit for {} on {}", handler.field_id, platform),
            }
        }

        Self {
            platform,
            handlers: handlers.into_iter().map(|h| (h.field_id, h)).collect(),
            absent: absent.iter().copied().collect(),
            converter,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    pub fn lookup(&self, field_id: &str) -> Lookup<'_, R, S> {
        if let Some(handler) = self.handlers.get(field_id) {
            Lookup::Handler(handler)
        } else if self.absent.contains(field_id) {
            Lookup::KnownAbsent
        } else {
            Lookup::Unmapped
        }
    }

    pub fn handlers(&self) -> impl Iterator<Item = &FieldHandler<R, S>> {
        self.handlers.values()
    }

    pub fn context<'a>(&'a self, handler: &'a FieldHandler<R, S>, now: DateTime<Utc>) -> MapContext<'a, S> {
        MapContext {
            field_id: handler.field_id,
            source: &handler.source,
            converter: &self.converter,
            now,
        }
    }

    pub fn is_known_absent(&self, field_id: &str) -> bool {
        self.absent.contains(field_id)
    }
}

/// Most recent element by observation time
pub fn latest_by<T, F>(items: &[T], observed_at: F) -> Option<&T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.iter().max_by_key(|item| observed_at(*item))
}

/// Sum of the values picked from each item, with the latest observation time
///
/// `None` when nothing in the window carries a value.
pub fn sum_by<T, F, G>(items: &[T], pick: F, observed_at: G) -> Option<(f64, DateTime<Utc>)>
where
    F: Fn(&T) -> Option<f64>,
    G: Fn(&T) -> DateTime<Utc>,
{
    items
        .iter()
        .filter_map(|item| pick(item).map(|value| (value, observed_at(item))))
        .fold(None, |acc, (value, at)| match acc {
            None => Some((value, at)),
            Some((total, latest)) => Some((total + value, latest.max(at))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn read_none(_: &[f64], _: &MapContext<'_, ()>) -> Result<Option<Reading>, HealthError> {
        Ok(None)
    }

    #[test]
    fn test_table_registers_conversions_from_descriptor_units() {
        let registry = FieldRegistry::for_platform(Platform::Android);
        let table = HandlerTable::new(
            Platform::Android,
            &registry,
            vec![FieldHandler::new("height", (), TimeWindow::AllTime, read_none).native(Unit::Meter)],
            &["writeExerciseRoute"],
        );

        assert_eq!(table.converter().canonical_unit("height"), Some(Unit::Centimeter));
        assert!(matches!(table.lookup("height"), Lookup::Handler(_)));
        assert!(matches!(table.lookup("writeExerciseRoute"), Lookup::KnownAbsent));
        assert!(matches!(table.lookup("steps"), Lookup::Unmapped));
    }

    #[test]
    fn test_incompatible_native_unit_is_skipped() {
        let registry = FieldRegistry::for_platform(Platform::Android);
        let table = HandlerTable::new(
            Platform::Android,
            &registry,
            vec![FieldHandler::new("height", (), TimeWindow::AllTime, read_none).native(Unit::Kilogram)],
            &[],
        );
        assert_eq!(table.converter().canonical_unit("height"), None);
    }

    #[test]
    fn test_sum_and_latest() {
        let now = Utc::now();
        let items = vec![(3.0, now - Duration::hours(2)), (4.0, now), (5.0, now - Duration::hours(1))];

        assert_eq!(latest_by(&items, |i| i.1), Some(&(4.0, now)));
        assert_eq!(sum_by(&items, |i| Some(i.0), |i| i.1), Some((12.0, now)));

        let empty: Vec<(f64, DateTime<Utc>)> = Vec::new();
        assert_eq!(sum_by(&empty, |i| Some(i.0), |i| i.1), None);
    }
}
