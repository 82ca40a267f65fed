use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health Connect record types supported by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    ActiveCaloriesBurned,
    BasalBodyTemperature,
    BasalMetabolicRate,
    BloodGlucose,
    BloodPressure,
    BodyFat,
    BodyTemperature,
    BoneMass,
    CervicalMucus,
    CyclingPedalingCadence,
    Distance,
    ElevationGained,
    ExerciseSession,
    ExerciseRoute,
    FloorsClimbed,
    HeartRate,
    Height,
    Hydration,
    LeanBodyMass,
    MenstruationFlow,
    MenstruationPeriod,
    Nutrition,
    OvulationTest,
    OxygenSaturation,
    Power,
    RespiratoryRate,
    RestingHeartRate,
    SexualActivity,
    SleepSession,
    Speed,
    StepsCadence,
    Steps,
    TotalCaloriesBurned,
    Vo2Max,
    Weight,
    WheelchairPushes,
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same spelling the native module uses for `recordType`
        write!(f, "{:?}", self)
    }
}

/// A measured amount with its unit, e.g. `{"value": 1.75, "unit": "meters"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Numeric amount
    pub value: f64,

    /// Health Connect unit name ("meters", "kilograms", "kilocalories", ...)
    pub unit: String,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self { value, unit: unit.into() }
    }
}

/// One sample of a heart rate series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateSample {
    pub time: DateTime<Utc>,
    pub beats_per_minute: f64,
}

/// One sample of a cycling cadence series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadenceSample {
    pub time: DateTime<Utc>,
    pub revolutions_per_minute: f64,
}

/// One sample of a power series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSample {
    pub time: DateTime<Utc>,
    pub power: Quantity,
}

/// One sample of a speed series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedSample {
    pub time: DateTime<Utc>,
    pub speed: Quantity,
}

/// One sample of a steps cadence series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsCadenceSample {
    pub time: DateTime<Utc>,
    pub rate: f64,
}

/// A Health Connect record as exchanged with the native module
///
/// Instantaneous records carry a single `time`; interval records carry a
/// `startTime`/`endTime` window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "recordType", rename_all_fields = "camelCase")]
pub enum HealthConnectRecord {
    ActiveCaloriesBurned {
        energy: Quantity,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    BasalBodyTemperature {
        temperature: Quantity,
        measurement_location: i32,
        time: DateTime<Utc>,
    },
    BasalMetabolicRate {
        basal_metabolic_rate: Quantity,
        time: DateTime<Utc>,
    },
    BloodGlucose {
        level: Quantity,
        specimen_source: i32,
        meal_type: i32,
        relation_to_meal: i32,
        time: DateTime<Utc>,
    },
    BloodPressure {
        systolic: Quantity,
        diastolic: Quantity,
        body_position: i32,
        measurement_location: i32,
        time: DateTime<Utc>,
    },
    BodyFat {
        percentage: Quantity,
        time: DateTime<Utc>,
    },
    BodyTemperature {
        temperature: Quantity,
        measurement_location: i32,
        time: DateTime<Utc>,
    },
    BoneMass {
        mass: Quantity,
        time: DateTime<Utc>,
    },
    CervicalMucus {
        appearance: i32,
        sensation: i32,
        time: DateTime<Utc>,
    },
    CyclingPedalingCadence {
        samples: Vec<CadenceSample>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    Distance {
        distance: Quantity,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    ElevationGained {
        elevation: Quantity,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    ExerciseSession {
        exercise_type: i32,
        title: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    FloorsClimbed {
        floors: f64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    HeartRate {
        samples: Vec<HeartRateSample>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    Height {
        height: Quantity,
        time: DateTime<Utc>,
    },
    Hydration {
        volume: Quantity,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    LeanBodyMass {
        mass: Quantity,
        time: DateTime<Utc>,
    },
    MenstruationFlow {
        flow: i32,
        time: DateTime<Utc>,
    },
    MenstruationPeriod {
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    Nutrition {
        name: Option<String>,
        energy: Option<Quantity>,
        protein: Option<Quantity>,
        total_carbohydrate: Option<Quantity>,
        total_fat: Option<Quantity>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    OvulationTest {
        result: i32,
        time: DateTime<Utc>,
    },
    OxygenSaturation {
        percentage: Quantity,
        time: DateTime<Utc>,
    },
    Power {
        samples: Vec<PowerSample>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    RespiratoryRate {
        rate: f64,
        time: DateTime<Utc>,
    },
    RestingHeartRate {
        beats_per_minute: f64,
        time: DateTime<Utc>,
    },
    SexualActivity {
        protection_used: i32,
        time: DateTime<Utc>,
    },
    SleepSession {
        title: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    Speed {
        samples: Vec<SpeedSample>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    StepsCadence {
        samples: Vec<StepsCadenceSample>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    Steps {
        count: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    TotalCaloriesBurned {
        energy: Quantity,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    Vo2Max {
        vo2_milliliters_per_minute_kilogram: f64,
        measurement_method: i32,
        time: DateTime<Utc>,
    },
    Weight {
        weight: Quantity,
        time: DateTime<Utc>,
    },
    WheelchairPushes {
        count: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
}

impl HealthConnectRecord {
    /// The record type this record belongs to
    pub fn record_type(&self) -> RecordType {
        use HealthConnectRecord as R;
        match self {
            R::ActiveCaloriesBurned { .. } => RecordType::ActiveCaloriesBurned,
            R::BasalBodyTemperature { .. } => RecordType::BasalBodyTemperature,
            R::BasalMetabolicRate { .. } => RecordType::BasalMetabolicRate,
            R::BloodGlucose { .. } => RecordType::BloodGlucose,
            R::BloodPressure { .. } => RecordType::BloodPressure,
            R::BodyFat { .. } => RecordType::BodyFat,
            R::BodyTemperature { .. } => RecordType::BodyTemperature,
            R::BoneMass { .. } => RecordType::BoneMass,
            R::CervicalMucus { .. } => RecordType::CervicalMucus,
            R::CyclingPedalingCadence { .. } => RecordType::CyclingPedalingCadence,
            R::Distance { .. } => RecordType::Distance,
            R::ElevationGained { .. } => RecordType::ElevationGained,
            R::ExerciseSession { .. } => RecordType::ExerciseSession,
            R::FloorsClimbed { .. } => RecordType::FloorsClimbed,
            R::HeartRate { .. } => RecordType::HeartRate,
            R::Height { .. } => RecordType::Height,
            R::Hydration { .. } => RecordType::Hydration,
            R::LeanBodyMass { .. } => RecordType::LeanBodyMass,
            R::MenstruationFlow { .. } => RecordType::MenstruationFlow,
            R::MenstruationPeriod { .. } => RecordType::MenstruationPeriod,
            R::Nutrition { .. } => RecordType::Nutrition,
            R::OvulationTest { .. } => RecordType::OvulationTest,
            R::OxygenSaturation { .. } => RecordType::OxygenSaturation,
            R::Power { .. } => RecordType::Power,
            R::RespiratoryRate { .. } => RecordType::RespiratoryRate,
            R::RestingHeartRate { .. } => RecordType::RestingHeartRate,
            R::SexualActivity { .. } => RecordType::SexualActivity,
            R::SleepSession { .. } => RecordType::SleepSession,
            R::Speed { .. } => RecordType::Speed,
            R::StepsCadence { .. } => RecordType::StepsCadence,
            R::Steps { .. } => RecordType::Steps,
            R::TotalCaloriesBurned { .. } => RecordType::TotalCaloriesBurned,
            R::Vo2Max { .. } => RecordType::Vo2Max,
            R::Weight { .. } => RecordType::Weight,
            R::WheelchairPushes { .. } => RecordType::WheelchairPushes,
        }
    }

    /// The `[start, end]` span the record covers; instantaneous records have `start == end`
    pub fn span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        use HealthConnectRecord as R;
        match self {
            R::BasalBodyTemperature { time, .. }
            | R::BasalMetabolicRate { time, .. }
            | R::BloodGlucose { time, .. }
            | R::BloodPressure { time, .. }
            | R::BodyFat { time, .. }
            | R::BodyTemperature { time, .. }
            | R::BoneMass { time, .. }
            | R::CervicalMucus { time, .. }
            | R::Height { time, .. }
            | R::LeanBodyMass { time, .. }
            | R::MenstruationFlow { time, .. }
            | R::OvulationTest { time, .. }
            | R::OxygenSaturation { time, .. }
            | R::RespiratoryRate { time, .. }
            | R::RestingHeartRate { time, .. }
            | R::SexualActivity { time, .. }
            | R::Vo2Max { time, .. }
            | R::Weight { time, .. } => (*time, *time),

            R::ActiveCaloriesBurned { start_time, end_time, .. }
            | R::CyclingPedalingCadence { start_time, end_time, .. }
            | R::Distance { start_time, end_time, .. }
            | R::ElevationGained { start_time, end_time, .. }
            | R::ExerciseSession { start_time, end_time, .. }
            | R::FloorsClimbed { start_time, end_time, .. }
            | R::HeartRate { start_time, end_time, .. }
            | R::Hydration { start_time, end_time, .. }
            | R::MenstruationPeriod { start_time, end_time }
            | R::Nutrition { start_time, end_time, .. }
            | R::Power { start_time, end_time, .. }
            | R::SleepSession { start_time, end_time, .. }
            | R::Speed { start_time, end_time, .. }
            | R::StepsCadence { start_time, end_time, .. }
            | R::Steps { start_time, end_time, .. }
            | R::TotalCaloriesBurned { start_time, end_time, .. }
            | R::WheelchairPushes { start_time, end_time, .. } => (*start_time, *end_time),
        }
    }

    /// The instant the record is considered observed at (the end of its span)
    pub fn observed_at(&self) -> DateTime<Utc> {
        self.span().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(ts: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_height_record_wire_shape() {
        let record = HealthConnectRecord::Height {
            height: Quantity::new(1.75, "meters"),
            time: at("2024-05-01T08:00:00Z"),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "recordType": "Height",
                "height": { "value": 1.75, "unit": "meters" },
                "time": "2024-05-01T08:00:00Z"
            })
        );
    }

    #[test]
    fn test_blood_pressure_record_from_native_payload() {
        let payload = json!({
            "recordType": "BloodPressure",
            "systolic": { "value": 120.0, "unit": "millimetersOfMercury" },
            "diastolic": { "value": 80.0, "unit": "millimetersOfMercury" },
            "bodyPosition": 0,
            "measurementLocation": 0,
            "time": "2024-05-01T08:00:00Z"
        });

        let record: HealthConnectRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.record_type(), RecordType::BloodPressure);
        match record {
            HealthConnectRecord::BloodPressure { systolic, diastolic, .. } => {
                assert_eq!(systolic.value, 120.0);
                assert_eq!(diastolic.value, 80.0);
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_span_of_interval_and_instant_records() {
        let steps = HealthConnectRecord::Steps {
            count: 1200,
            start_time: at("2024-05-01T08:00:00Z"),
            end_time: at("2024-05-01T09:00:00Z"),
        };
        assert_eq!(steps.span(), (at("2024-05-01T08:00:00Z"), at("2024-05-01T09:00:00Z")));
        assert_eq!(steps.observed_at(), at("2024-05-01T09:00:00Z"));

        let weight = HealthConnectRecord::Weight {
            weight: Quantity::new(70.0, "kilograms"),
            time: at("2024-05-01T07:00:00Z"),
        };
        assert_eq!(weight.span().0, weight.span().1);
    }

    #[test]
    fn test_record_type_display_matches_native_name() {
        assert_eq!(RecordType::Vo2Max.to_string(), "Vo2Max");
        assert_eq!(RecordType::TotalCaloriesBurned.to_string(), "TotalCaloriesBurned");
    }
}
