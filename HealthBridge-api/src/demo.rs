//! In-memory stores for running the server off-device
//!
//! With `HEALTH_SEED_DEMO_DATA` set the stores start with a handful of
//! recent records so every endpoint has something to show.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use health_bridge_data::health_connect::HeartRateSample;
use health_bridge_data::health_kit::identifiers as hk;
use health_bridge_data::{
    HealthConnectRecord, HealthKitSample, InMemoryHealthConnectStore, InMemoryHealthKitStore, Quantity,
    QuantitySample,
};
use health_bridge_domain::PlatformStores;

/// In-memory stores for both platforms
pub fn in_memory_stores(seed: bool) -> PlatformStores {
    let now = Utc::now();
    let mut health_kit = InMemoryHealthKitStore::new();
    let mut health_connect = InMemoryHealthConnectStore::new();

    if seed {
        let samples = health_kit_samples(now);
        let records = health_connect_records(now);
        info!(
            "Seeding demo data: {} HealthKit sample(s), {} Health Connect record(s)",
            samples.len(),
            records.len()
        );
        health_kit = health_kit.with_samples(samples);
        health_connect = health_connect.with_records(records);
    }

    PlatformStores {
        health_kit: Some(Arc::new(health_kit)),
        health_connect: Some(Arc::new(health_connect)),
    }
}

fn health_kit_samples(now: DateTime<Utc>) -> Vec<HealthKitSample> {
    let earlier = now - Duration::minutes(30);
    let quantity = |identifier: &str, unit: &str, value: f64| {
        HealthKitSample::Quantity(QuantitySample::new(identifier, unit, value, earlier, earlier))
    };

    vec![
        quantity(hk::HEIGHT, "m", 1.78),
        quantity(hk::BODY_MASS, "kg", 74.2),
        quantity(hk::STEP_COUNT, "count", 4250.0),
        quantity(hk::HEART_RATE, "count/min", 68.0),
        quantity(hk::OXYGEN_SATURATION, "%", 0.98),
        quantity(hk::DIETARY_WATER, "mL", 750.0),
    ]
}

fn health_connect_records(now: DateTime<Utc>) -> Vec<HealthConnectRecord> {
    let earlier = now - Duration::minutes(30);

    vec![
        HealthConnectRecord::Height {
            height: Quantity::new(1.78, "meters"),
            time: earlier,
        },
        HealthConnectRecord::Weight {
            weight: Quantity::new(74.2, "kilograms"),
            time: earlier,
        },
        HealthConnectRecord::Steps {
            count: 4250,
            start_time: earlier - Duration::minutes(60),
            end_time: earlier,
        },
        HealthConnectRecord::HeartRate {
            samples: vec![HeartRateSample { time: earlier, beats_per_minute: 68.0 }],
            start_time: earlier,
            end_time: earlier,
        },
        HealthConnectRecord::BloodPressure {
            systolic: Quantity::new(118.0, "millimetersOfMercury"),
            diastolic: Quantity::new(76.0, "millimetersOfMercury"),
            body_position: 0,
            measurement_location: 0,
            time: earlier,
        },
    ]
}
