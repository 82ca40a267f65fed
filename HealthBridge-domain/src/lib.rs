// HealthBridge Domain
// This crate normalizes health data across Apple HealthKit and Google Health Connect

// Mobile platform selection
pub mod platform;

// Error taxonomy
pub mod error;

// Field catalog and per-platform registries
pub mod catalog;

// Canonical values and composite encodings
pub mod entities;

// Units and conversions
pub mod units;

// Input validation
pub mod validation;

// Mapping between canonical fields and native records
pub mod mapper;

// Gateway configuration
pub mod config;

// The public entry point
pub mod gateway;

// Re-export commonly used types
pub use catalog::{Category, FieldDescriptor, FieldKind, FieldRegistry};
pub use config::{ConfigError, GatewayConfig};
pub use entities::{NormalizedValue, RawValue};
pub use error::{HealthError, ValidationError, ValidationReason};
pub use gateway::{InitState, PlatformGateway};
pub use mapper::{PlatformStores, RecordMapper};
pub use platform::Platform;
pub use units::{Unit, UnitConverter};

// Re-export the store boundary for hosts wiring in native stores
pub use health_bridge_data as data;
