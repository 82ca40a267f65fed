//! HealthKit backend
//!
//! Most iOS fields are a single quantity type read either as the latest sample
//! or as a sum since midnight. Symptoms and cycle tracking are category
//! samples; blood pressure is a correlation of two quantities.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use health_bridge_data::health_kit::identifiers as hk;
use health_bridge_data::{
    CategorySample, CorrelationSample, HealthKitSample, HealthKitStore, QuantitySample, SampleType, StoreError,
};

use super::backend::HealthBackend;
use super::handler::{sum_by, FieldHandler, HandlerTable, Lookup, MapContext, Reading};
use super::window::TimeWindow;
use crate::catalog::{FieldDescriptor, FieldRegistry};
use crate::entities::{NormalizedValue, RawValue};
use crate::error::{HealthError, ValidationError};
use crate::platform::Platform;
use crate::units::Unit;

type Sample = HealthKitSample;
type Handler = FieldHandler<Sample, SampleType>;
type Ctx<'a> = MapContext<'a, SampleType>;

/// Fields documented as not implemented, plus those with no HealthKit sample type
const KNOWN_ABSENT: &[&str] = &[
    "respiratorySixMinuteWalk",
    "respiratoryRateVital",
    "oxygenSaturationVital",
    "cardioFitnessVital",
    "heartRateVital",
    "mentalExerciseTime",
    "mentalSleep",
    "heartBloodPressure",
    "heartCardioFitness",
    "heartRateHeart",
    "heartRateCount",
    "bodyTemperature",
    "bodyTemperatureBody",
    "skinPotential",
    "sleepData",
    "medicationData",
    "walkingSixMinuteWalk",
    "walkingCardioFitness",
    "inhalerUsageOther",
    "bloodGlucoseOther",
    "sunlightExposureOther",
    // Summaries, notifications and records without a quantity
    "nikeFuel",
    "activity",
    "standHours",
    "workout",
    "physicalEffort",
    "cycleRecord",
    "depressionRisk",
    "mentalState",
    "anxietyRisk",
    "highHeartRateNotification",
    "ecg",
    "cardioFitnessLevel",
    "atrialFibrillation",
    "lowHeartRateNotification",
    "microcirculation",
    "irregularHeartRhythmNotification",
    "glassesPrescription",
    "audiogram",
    "noiseNotification",
    "headphoneNotification",
    "walkingStability",
    "walkingStabilityNotification",
    "walkingDoubleSupportTime",
    "uvExposure",
    "alcoholConsumption",
];

/// Saved samples cover the minute before now
fn sample_window(ctx: &Ctx<'_>) -> (DateTime<Utc>, DateTime<Utc>) {
    (ctx.now - Duration::seconds(60), ctx.now)
}

fn symbol(unit: Unit, ctx: &Ctx<'_>) -> Result<&'static str, HealthError> {
    unit.health_kit_symbol()
        .ok_or_else(|| HealthError::unsupported_unit(ctx.field_id, format!("{} has no HealthKit unit", unit)))
}

fn quantities(samples: &[Sample]) -> impl Iterator<Item = &QuantitySample> {
    samples.iter().filter_map(|sample| match sample {
        Sample::Quantity(quantity) => Some(quantity),
        _ => None,
    })
}

fn categories(samples: &[Sample]) -> impl Iterator<Item = &CategorySample> {
    samples.iter().filter_map(|sample| match sample {
        Sample::Category(category) => Some(category),
        _ => None,
    })
}

fn read_latest_quantity(samples: &[Sample], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let Some(latest) = quantities(samples).max_by_key(|sample| sample.end_date) else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.to_canonical(latest.quantity, &latest.unit)?, latest.end_date)))
}

fn read_total_quantity(samples: &[Sample], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let values = quantities(samples)
        .map(|sample| ctx.to_canonical(sample.quantity, &sample.unit).map(|value| (value, sample.end_date)))
        .collect::<Result<Vec<_>, HealthError>>()?;
    Ok(sum_by(&values, |(value, _)| Some(*value), |(_, at)| *at).map(|(total, at)| Reading::number(total, at)))
}

fn write_quantity(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Sample>, HealthError> {
    let (native, unit) = ctx.from_canonical(ctx.number(value)?)?;
    let (start, end) = sample_window(ctx);
    let sample = QuantitySample::new(ctx.source.identifier(), symbol(unit, ctx)?, native, start, end).user_entered();
    Ok(vec![Sample::Quantity(sample)])
}

/// Unitless quantities such as body mass index
fn read_latest_scalar(samples: &[Sample], _ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    Ok(quantities(samples)
        .max_by_key(|sample| sample.end_date)
        .map(|sample| Reading::number(sample.quantity, sample.end_date)))
}

fn write_scalar(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Sample>, HealthError> {
    let (start, end) = sample_window(ctx);
    let sample = QuantitySample::new(ctx.source.identifier(), "count", ctx.number(value)?, start, end).user_entered();
    Ok(vec![Sample::Quantity(sample)])
}

fn category_sample(ctx: &Ctx<'_>, value: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Sample {
    let mut metadata = BTreeMap::new();
    metadata.insert(
        health_bridge_data::health_kit::METADATA_WAS_USER_ENTERED.to_string(),
        serde_json::Value::Bool(true),
    );
    Sample::Category(CategorySample {
        category_type: ctx.source.identifier().to_string(),
        value,
        start_date: start,
        end_date: end,
        metadata,
    })
}

/// Latest category value code
fn read_latest_category(samples: &[Sample], _ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    Ok(categories(samples)
        .max_by_key(|sample| sample.end_date)
        .map(|sample| Reading::number(sample.value as f64, sample.end_date)))
}

fn write_category(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Sample>, HealthError> {
    let code = ctx.number(value)? as i64;
    let (start, end) = sample_window(ctx);
    Ok(vec![category_sample(ctx, code, start, end)])
}

/// Total time covered by category samples, in seconds
fn read_category_duration(samples: &[Sample], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let spans: Vec<(f64, DateTime<Utc>)> = categories(samples)
        .map(|s| ((s.end_date - s.start_date).num_milliseconds() as f64 / 1000.0, s.end_date))
        .collect();
    let Some((total, at)) = sum_by(&spans, |(value, _)| Some(*value), |(_, at)| *at) else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(total)?, at)))
}

fn write_category_duration(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Sample>, HealthError> {
    let (seconds, _) = ctx.from_canonical(ctx.number(value)?)?;
    let start = ctx.now - Duration::milliseconds((seconds * 1000.0).round() as i64);
    Ok(vec![category_sample(ctx, 0, start, ctx.now)])
}

/// Number of events since midnight
fn read_category_count(samples: &[Sample], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let events: Vec<DateTime<Utc>> = categories(samples).map(|sample| sample.end_date).collect();
    let Some((count, at)) = sum_by(&events, |_| Some(1.0), |at| *at) else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(count)?, at)))
}

fn write_category_count(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Sample>, HealthError> {
    let (count, _) = ctx.from_canonical(ctx.number(value)?)?;
    let (start, end) = sample_window(ctx);
    Ok((0..count.round() as usize).map(|_| category_sample(ctx, 0, start, end)).collect())
}

fn read_blood_pressure(samples: &[Sample], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = samples
        .iter()
        .filter_map(|sample| match sample {
            Sample::Correlation(correlation) => Some(correlation),
            _ => None,
        })
        .max_by_key(|correlation| correlation.end_date);
    let Some(correlation) = latest else {
        return Ok(None);
    };

    let part = |identifier: &str| -> Result<f64, HealthError> {
        let sample = correlation.object(identifier).ok_or_else(|| HealthError::NativeCall {
            field_id: ctx.field_id.to_string(),
            message: format!("Blood pressure correlation has no {}", identifier),
        })?;
        ctx.to_canonical(sample.quantity, &sample.unit)
    };

    Ok(Some(Reading::new(
        RawValue::BloodPressure {
            systolic: part(hk::BLOOD_PRESSURE_SYSTOLIC)?,
            diastolic: part(hk::BLOOD_PRESSURE_DIASTOLIC)?,
        },
        correlation.end_date,
    )))
}

fn write_blood_pressure(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Sample>, HealthError> {
    let RawValue::BloodPressure { systolic, diastolic } = value else {
        return Err(HealthError::validation(ctx.field_id, ValidationError::malformed("Expected systolic/diastolic")));
    };
    let (start, end) = sample_window(ctx);
    let (systolic, unit) = ctx.from_canonical(*systolic)?;
    let (diastolic, _) = ctx.from_canonical(*diastolic)?;
    let unit = symbol(unit, ctx)?;

    Ok(vec![Sample::Correlation(CorrelationSample {
        correlation_type: hk::BLOOD_PRESSURE.to_string(),
        objects: vec![
            QuantitySample::new(hk::BLOOD_PRESSURE_SYSTOLIC, unit, systolic, start, end),
            QuantitySample::new(hk::BLOOD_PRESSURE_DIASTOLIC, unit, diastolic, start, end),
        ],
        start_date: start,
        end_date: end,
        metadata: BTreeMap::new(),
    })])
}

/// Most recent sample, all time
fn latest(field_id: &'static str, identifier: &str, native: Unit) -> Handler {
    FieldHandler::new(field_id, SampleType::quantity(identifier), TimeWindow::AllTime, read_latest_quantity)
        .native(native)
}

/// Sum since local midnight
fn cumulative(field_id: &'static str, identifier: &str, native: Unit) -> Handler {
    FieldHandler::new(field_id, SampleType::quantity(identifier), TimeWindow::StartOfDay, read_total_quantity)
        .native(native)
}

/// Writable nutrient consumed today
fn nutrient(field_id: &'static str, identifier: &str, native: Unit) -> Handler {
    cumulative(field_id, identifier, native).write(write_quantity)
}

/// Symptom severity
fn symptom(field_id: &'static str, identifier: &str) -> Handler {
    FieldHandler::new(field_id, SampleType::category(identifier), TimeWindow::AllTime, read_latest_category)
        .write(write_category)
}

/// Events counted since midnight
fn events(field_id: &'static str, identifier: &str) -> Handler {
    FieldHandler::new(field_id, SampleType::category(identifier), TimeWindow::StartOfDay, read_category_count)
        .native(Unit::Count)
        .write(write_category_count)
}

fn handlers() -> Vec<Handler> {
    use Unit::*;

    vec![
        // Activity
        cumulative("activeEnergy", hk::ACTIVE_ENERGY_BURNED, Kilocalorie),
        cumulative("walkingRunningDistance", hk::DISTANCE_WALKING_RUNNING, Meter),
        cumulative("exerciseTime", hk::APPLE_EXERCISE_TIME, Minute),
        latest("cyclingCadence", hk::CYCLING_CADENCE, PerMinute),
        latest("cyclingPower", hk::CYCLING_POWER, Watt),
        latest("cyclingSpeed", hk::CYCLING_SPEED, MeterPerSecond),
        cumulative("standMinutes", hk::APPLE_STAND_TIME, Minute),
        cumulative("downhillSnowSportsDistance", hk::DISTANCE_DOWNHILL_SNOW_SPORTS, Meter),
        cumulative("pushCount", hk::PUSH_COUNT, Count),
        cumulative("moveTime", hk::APPLE_MOVE_TIME, Minute),
        latest("runningPower", hk::RUNNING_POWER, Watt),
        latest("runningSpeed", hk::RUNNING_SPEED, MeterPerSecond),
        cumulative("basalEnergyBurned", hk::BASAL_ENERGY_BURNED, Kilocalorie),
        cumulative("swimmingDistance", hk::DISTANCE_SWIMMING, Meter),
        latest("functionalThresholdPower", hk::CYCLING_FUNCTIONAL_THRESHOLD_POWER, Watt),
        cumulative("cyclingDistance", hk::DISTANCE_CYCLING, Meter),
        cumulative("wheelchairDistance", hk::DISTANCE_WHEELCHAIR, Meter),
        cumulative("flightsClimbed", hk::FLIGHTS_CLIMBED, Count),
        latest("cardioFitness", hk::VO2_MAX, MilliliterPerKilogramMinute),
        FieldHandler::new(
            "heartRate",
            SampleType::quantity(hk::HEART_RATE),
            TimeWindow::LastHours(1),
            read_latest_quantity,
        )
        .native(PerMinute),
        cumulative("swimmingStrokeCount", hk::SWIMMING_STROKE_COUNT, Count),
        latest("underwaterDepth", hk::UNDERWATER_DEPTH, Meter),
        cumulative("steps", hk::STEP_COUNT, Count),
        // Vitals
        FieldHandler::new(
            "bloodPressure",
            SampleType::correlation(hk::BLOOD_PRESSURE),
            TimeWindow::AllTime,
            read_blood_pressure,
        )
        .native(MillimeterOfMercury)
        .write(write_blood_pressure),
        latest("bloodGlucose", hk::BLOOD_GLUCOSE, MilligramPerDeciliter).write(write_quantity),
        symptom("menstruation", hk::MENSTRUAL_FLOW),
        latest("respiratoryRate", hk::RESPIRATORY_RATE, PerMinute),
        latest("oxygenSaturation", hk::OXYGEN_SATURATION, Fraction),
        // Nutrition
        nutrient("caffeine", hk::DIETARY_CAFFEINE, Milligram),
        nutrient("potassium", hk::DIETARY_POTASSIUM, Milligram),
        nutrient("calcium", hk::DIETARY_CALCIUM, Milligram),
        nutrient("chromium", hk::DIETARY_CHROMIUM, Microgram),
        nutrient("selenium", hk::DIETARY_SELENIUM, Microgram),
        nutrient("protein", hk::DIETARY_PROTEIN, Gram),
        nutrient("thiamin", hk::DIETARY_THIAMIN, Milligram),
        nutrient("niacin", hk::DIETARY_NIACIN, Milligram),
        nutrient("sodium", hk::DIETARY_SODIUM, Milligram),
        nutrient("pantothenicAcid", hk::DIETARY_PANTOTHENIC_ACID, Milligram),
        nutrient("biotin", hk::DIETARY_BIOTIN, Microgram),
        nutrient("vitaminA", hk::DIETARY_VITAMIN_A, Microgram),
        nutrient("vitaminB2", hk::DIETARY_RIBOFLAVIN, Milligram),
        nutrient("vitaminB6", hk::DIETARY_VITAMIN_B6, Milligram),
        nutrient("vitaminB12", hk::DIETARY_VITAMIN_B12, Microgram),
        nutrient("vitaminC", hk::DIETARY_VITAMIN_C, Milligram),
        nutrient("vitaminD", hk::DIETARY_VITAMIN_D, Microgram),
        nutrient("vitaminE", hk::DIETARY_VITAMIN_E, Milligram),
        nutrient("vitaminK", hk::DIETARY_VITAMIN_K, Microgram),
        nutrient("magnesium", hk::DIETARY_MAGNESIUM, Milligram),
        nutrient("manganese", hk::DIETARY_MANGANESE, Milligram),
        nutrient("molybdenum", hk::DIETARY_MOLYBDENUM, Microgram),
        nutrient("iodine", hk::DIETARY_IODINE, Microgram),
        nutrient("phosphorus", hk::DIETARY_PHOSPHORUS, Milligram),
        nutrient("zinc", hk::DIETARY_ZINC, Milligram),
        nutrient("monounsaturatedFat", hk::DIETARY_FAT_MONOUNSATURATED, Gram),
        nutrient("chloride", hk::DIETARY_CHLORIDE, Milligram),
        nutrient("dietaryFiber", hk::DIETARY_FIBER, Gram),
        nutrient("dietaryCholesterol", hk::DIETARY_CHOLESTEROL, Milligram),
        nutrient("dietarySugar", hk::DIETARY_SUGAR, Gram),
        nutrient("water", hk::DIETARY_WATER, Milliliter),
        nutrient("dietaryEnergy", hk::DIETARY_ENERGY_CONSUMED, Kilocalorie),
        nutrient("totalFat", hk::DIETARY_FAT_TOTAL, Gram),
        nutrient("polyunsaturatedFat", hk::DIETARY_FAT_POLYUNSATURATED, Gram),
        nutrient("carbohydrates", hk::DIETARY_CARBOHYDRATES, Gram),
        nutrient("iron", hk::DIETARY_IRON, Milligram),
        nutrient("copper", hk::DIETARY_COPPER, Milligram),
        nutrient("saturatedFat", hk::DIETARY_FAT_SATURATED, Gram),
        nutrient("folate", hk::DIETARY_FOLATE, Microgram),
        // Respiratory
        cumulative("inhalerUsage", hk::INHALER_USAGE, Count).write(write_quantity),
        latest("peakExpiratoryFlow", hk::PEAK_EXPIRATORY_FLOW_RATE, LiterPerMinute),
        latest("forcedExpiratoryVolume", hk::FORCED_EXPIRATORY_VOLUME_1, Liter),
        latest("forcedVitalCapacity", hk::FORCED_VITAL_CAPACITY, Liter),
        // Symptoms
        symptom("cough", hk::COUGHING),
        symptom("soreThroat", hk::SORE_THROAT),
        symptom("hotFlash", hk::HOT_FLASHES),
        symptom("dizziness", hk::DIZZINESS),
        symptom("chills", hk::CHILLS),
        symptom("diarrhea", hk::DIARRHEA),
        symptom("drySkin", hk::DRY_SKIN),
        symptom("moodChanges", hk::MOOD_CHANGES),
        symptom("memoryLapse", hk::MEMORY_LAPSE),
        symptom("chestTightness", hk::CHEST_TIGHTNESS_OR_PAIN),
        symptom("heartburn", hk::HEARTBURN),
        symptom("irregularHeartbeat", hk::SKIPPED_HEARTBEAT),
        symptom("lowBackPain", hk::LOWER_BACK_PAIN),
        symptom("pelvicPain", hk::PELVIC_PAIN),
        symptom("fainting", hk::FAINTING),
        symptom("appetiteChanges", hk::APPETITE_CHANGES),
        symptom("nightSweats", hk::NIGHT_SWEATS),
        symptom("sleepChanges", hk::SLEEP_CHANGES),
        symptom("shortnessOfBreath", hk::SHORTNESS_OF_BREATH),
        symptom("bodyPain", hk::GENERALIZED_BODY_ACHE),
        symptom("hairLoss", hk::HAIR_LOSS),
        symptom("nausea", hk::NAUSEA),
        symptom("headache", hk::HEADACHE),
        symptom("breastPain", hk::BREAST_PAIN),
        symptom("urinaryIncontinence", hk::BLADDER_INCONTINENCE),
        symptom("fever", hk::FEVER),
        symptom("fatigue", hk::FATIGUE),
        symptom("runnyNose", hk::RUNNY_NOSE),
        symptom("rapidHeartbeat", hk::RAPID_POUNDING_OR_FLUTTERING_HEARTBEAT),
        symptom("abdominalBloating", hk::BLOATING),
        symptom("abdominalCramps", hk::ABDOMINAL_CRAMPS),
        symptom("constipation", hk::CONSTIPATION),
        symptom("tasteLoss", hk::LOSS_OF_TASTE),
        symptom("wheezing", hk::WHEEZING),
        symptom("smellLoss", hk::LOSS_OF_SMELL),
        symptom("vomiting", hk::VOMITING),
        symptom("nasalCongestion", hk::SINUS_CONGESTION),
        symptom("vaginalDryness", hk::VAGINAL_DRYNESS),
        symptom("acne", hk::ACNE),
        // Mental
        FieldHandler::new(
            "mindfulMinutes",
            SampleType::category(hk::MINDFUL_SESSION),
            TimeWindow::StartOfDay,
            read_category_duration,
        )
        .native(Second)
        .write(write_category_duration),
        cumulative("sunlightExposure", hk::TIME_IN_DAYLIGHT, Minute).write(write_quantity),
        // Heart
        latest("restingHeartRate", hk::RESTING_HEART_RATE, PerMinute),
        latest("heartRateVariability", hk::HEART_RATE_VARIABILITY_SDNN, Millisecond),
        latest("walkingHeartRate", hk::WALKING_HEART_RATE_AVERAGE, PerMinute),
        // Body
        FieldHandler::new(
            "bmi",
            SampleType::quantity(hk::BODY_MASS_INDEX),
            TimeWindow::AllTime,
            read_latest_scalar,
        )
        .write(write_scalar),
        latest("basalBodyTemperature", hk::BASAL_BODY_TEMPERATURE, Celsius).write(write_quantity),
        latest("wristTemperature", hk::WRIST_TEMPERATURE, Celsius),
        latest("leanBodyMass", hk::LEAN_BODY_MASS, Kilogram),
        latest("height", hk::HEIGHT, Meter).write(write_quantity),
        latest("bodyFatPercentage", hk::BODY_FAT_PERCENTAGE, Fraction).write(write_quantity),
        latest("weight", hk::BODY_MASS, Kilogram).write(write_quantity),
        latest("waistCircumference", hk::WAIST_CIRCUMFERENCE, Meter).write(write_quantity),
        // Hearing
        latest("headphoneVolume", hk::HEADPHONE_AUDIO_EXPOSURE, Decibel),
        latest("environmentalSoundLevel", hk::ENVIRONMENTAL_AUDIO_EXPOSURE, Decibel),
        latest("environmentalSoundReduction", hk::ENVIRONMENTAL_SOUND_REDUCTION, Decibel),
        // Walking
        latest("runningStrideLength", hk::RUNNING_STRIDE_LENGTH, Meter),
        latest("stairDescentSpeed", hk::STAIR_DESCENT_SPEED, MeterPerSecond),
        latest("stairAscentSpeed", hk::STAIR_ASCENT_SPEED, MeterPerSecond),
        latest("verticalOscillation", hk::RUNNING_VERTICAL_OSCILLATION, Centimeter),
        latest("groundContactTime", hk::RUNNING_GROUND_CONTACT_TIME, Millisecond),
        latest("walkingSpeed", hk::WALKING_SPEED, MeterPerSecond),
        latest("walkingAsymmetry", hk::WALKING_ASYMMETRY_PERCENTAGE, Fraction),
        latest("stepLength", hk::WALKING_STEP_LENGTH, Meter),
        // Other
        cumulative("insulinDelivery", hk::INSULIN_DELIVERY, InternationalUnit).write(write_quantity),
        latest("bloodAlcoholContent", hk::BLOOD_ALCOHOL_CONTENT, Fraction),
        events("toothbrushing", hk::TOOTHBRUSHING_EVENT),
        events("handwashing", hk::HANDWASHING_EVENT),
        latest("waterTemperature", hk::WATER_TEMPERATURE, Celsius),
        symptom("sexualActivity", hk::SEXUAL_ACTIVITY),
        cumulative("fallCount", hk::NUMBER_OF_TIMES_FALLEN, Count),
    ]
}

/// Record mapping over a [`HealthKitStore`]
pub struct HealthKitBackend {
    store: Arc<dyn HealthKitStore>,
    table: HandlerTable<Sample, SampleType>,
}

impl HealthKitBackend {
    pub fn new(store: Arc<dyn HealthKitStore>) -> Self {
        let registry = FieldRegistry::for_platform(Platform::Ios);
        Self {
            store,
            table: HandlerTable::new(Platform::Ios, &registry, handlers(), KNOWN_ABSENT),
        }
    }

    pub fn table(&self) -> &HandlerTable<Sample, SampleType> {
        &self.table
    }
}

/// Correlation types are authorized through their component quantity types
fn authorization_types(sample_type: &SampleType) -> Vec<SampleType> {
    match sample_type {
        SampleType::Correlation(id) if id == hk::BLOOD_PRESSURE => vec![
            SampleType::quantity(hk::BLOOD_PRESSURE_SYSTOLIC),
            SampleType::quantity(hk::BLOOD_PRESSURE_DIASTOLIC),
        ],
        other => vec![other.clone()],
    }
}

fn unavailable(error: StoreError) -> HealthError {
    HealthError::PlatformUnavailable(error.to_string())
}

fn not_supported(descriptor: &FieldDescriptor) -> HealthError {
    HealthError::NotSupported {
        field_id: descriptor.id.to_string(),
        platform: Platform::Ios,
    }
}

#[async_trait]
impl HealthBackend for HealthKitBackend {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    async fn initialize(&self) -> Result<(), HealthError> {
        if !self.store.is_health_data_available().await.map_err(unavailable)? {
            return Err(HealthError::PlatformUnavailable("HealthKit is not available".to_string()));
        }
        info!("HealthKit is available");
        Ok(())
    }

    async fn request_permissions(&self, registry: &FieldRegistry) -> Result<bool, HealthError> {
        let mut read = BTreeSet::new();
        let mut write = BTreeSet::new();

        for descriptor in registry.iter() {
            let Lookup::Handler(handler) = self.table.lookup(descriptor.id) else {
                continue;
            };
            read.extend(authorization_types(&handler.source));
            if descriptor.writable && handler.write.is_some() {
                write.extend(authorization_types(&handler.source));
            }
        }

        let read: Vec<SampleType> = read.into_iter().collect();
        let write: Vec<SampleType> = write.into_iter().collect();
        debug!("Requesting HealthKit authorization for {} read / {} write types", read.len(), write.len());

        let authorized = self.store.request_authorization(&read, &write).await.map_err(unavailable)?;
        info!("HealthKit authorization {}", if authorized { "granted" } else { "declined" });
        Ok(authorized)
    }

    async fn fetch(&self, descriptor: &FieldDescriptor, now: DateTime<Utc>) -> Result<Option<NormalizedValue>, HealthError> {
        let handler = match self.table.lookup(descriptor.id) {
            Lookup::Handler(handler) => handler,
            Lookup::KnownAbsent => {
                debug!("{} is not implemented for HealthKit", descriptor.id);
                return Ok(None);
            }
            Lookup::Unmapped => return Err(not_supported(descriptor)),
        };

        let filter = handler.window.to_filter(now);
        debug!("Querying {} for {}", handler.source, descriptor.id);
        let samples = self
            .store
            .query_samples(&handler.source, &filter)
            .await
            .map_err(|e| HealthError::from_store(descriptor.id, e))?;

        let ctx = self.table.context(handler, now);
        let reading = (handler.read)(&samples, &ctx)?;
        Ok(reading.map(|reading| NormalizedValue::new(descriptor, reading.value, reading.observed_at)))
    }

    async fn save(&self, descriptor: &FieldDescriptor, value: &RawValue, now: DateTime<Utc>) -> Result<NormalizedValue, HealthError> {
        let (handler, write) = match self.table.lookup(descriptor.id) {
            Lookup::Handler(handler) => match handler.write {
                Some(write) => (handler, write),
                None => return Err(not_supported(descriptor)),
            },
            Lookup::KnownAbsent | Lookup::Unmapped => return Err(not_supported(descriptor)),
        };

        let samples = write(value, &self.table.context(handler, now))?;
        debug!("Saving {} {} sample(s) for {}", samples.len(), handler.source, descriptor.id);
        self.store
            .save_samples(samples)
            .await
            .map_err(|e| HealthError::NativeCall { field_id: descriptor.id.to_string(), message: e.to_string() })?;

        Ok(NormalizedValue::new(descriptor, value.clone(), now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_bridge_data::health_kit::METADATA_WAS_USER_ENTERED;
    use health_bridge_data::InMemoryHealthKitStore;

    fn ios(id: &str) -> FieldDescriptor {
        FieldRegistry::for_platform(Platform::Ios).describe(id).unwrap().clone()
    }

    fn backend(store: &InMemoryHealthKitStore) -> HealthKitBackend {
        HealthKitBackend::new(Arc::new(store.clone()))
    }

    fn quantity(identifier: &str, unit: &str, value: f64, at: DateTime<Utc>) -> Sample {
        Sample::Quantity(QuantitySample::new(identifier, unit, value, at, at))
    }

    #[test]
    fn test_every_ios_field_is_mapped_or_known_absent() {
        let registry = FieldRegistry::for_platform(Platform::Ios);
        let backend = backend(&InMemoryHealthKitStore::new());

        for descriptor in registry.iter() {
            match backend.table().lookup(descriptor.id) {
                Lookup::Handler(handler) => {
                    assert_eq!(descriptor.writable, handler.write.is_some(), "{}", descriptor.id);
                    if handler.native_unit.is_some() {
                        assert!(
                            backend.table().converter().canonical_unit(descriptor.id).is_some(),
                            "{} has no conversion",
                            descriptor.id
                        );
                    }
                }
                Lookup::KnownAbsent => {}
                Lookup::Unmapped => panic!("{} has no HealthKit mapping", descriptor.id),
            }
        }
    }

    #[tokio::test]
    async fn test_height_saved_in_meters_as_user_entered() {
        let store = InMemoryHealthKitStore::new();
        let backend = backend(&store);
        let now = Utc::now();

        backend.save(&ios("height"), &RawValue::Number(175.0), now).await.unwrap();

        let saved = store.samples_of(&SampleType::quantity(hk::HEIGHT)).unwrap();
        let Sample::Quantity(sample) = &saved[0] else {
            panic!("expected a quantity sample");
        };
        assert_eq!(sample.unit, "m");
        assert_eq!(sample.quantity, 1.75);
        assert_eq!(sample.start_date, now - Duration::seconds(60));
        assert_eq!(sample.metadata.get(METADATA_WAS_USER_ENTERED), Some(&serde_json::Value::Bool(true)));

        let fetched = backend.fetch(&ios("height"), Utc::now()).await.unwrap().unwrap();
        assert_eq!(fetched.display(), "175");
    }

    #[tokio::test]
    async fn test_steps_summed_since_midnight() {
        let now = Utc::now();
        let midnight = TimeWindow::StartOfDay.to_filter(now).start().unwrap();
        let store = InMemoryHealthKitStore::new().with_samples(vec![
            quantity(hk::STEP_COUNT, "count", 1500.0, midnight),
            quantity(hk::STEP_COUNT, "count", 500.0, now),
            quantity(hk::STEP_COUNT, "count", 9000.0, midnight - Duration::hours(3)),
        ]);

        let value = backend(&store).fetch(&ios("steps"), now).await.unwrap().unwrap();
        assert_eq!(value.raw_value, RawValue::Number(2000.0));
    }

    #[tokio::test]
    async fn test_fraction_reads_as_percent() {
        let now = Utc::now();
        let store = InMemoryHealthKitStore::new()
            .with_samples(vec![quantity(hk::OXYGEN_SATURATION, "%", 0.97, now)]);

        let value = backend(&store).fetch(&ios("oxygenSaturation"), now).await.unwrap().unwrap();
        assert_eq!(value.display(), "97");
    }

    #[tokio::test]
    async fn test_blood_pressure_correlation_round_trip() {
        let store = InMemoryHealthKitStore::new();
        let backend = backend(&store);
        let bp = ios("bloodPressure");

        backend
            .save(&bp, &RawValue::BloodPressure { systolic: 118.0, diastolic: 76.0 }, Utc::now())
            .await
            .unwrap();

        let saved = store.samples_of(&SampleType::correlation(hk::BLOOD_PRESSURE)).unwrap();
        let Sample::Correlation(correlation) = &saved[0] else {
            panic!("expected a correlation");
        };
        assert_eq!(correlation.object(hk::BLOOD_PRESSURE_SYSTOLIC).map(|s| s.unit.as_str()), Some("mmHg"));

        let value = backend.fetch(&bp, Utc::now()).await.unwrap().unwrap();
        assert_eq!(value.display(), "118/76");
    }

    #[tokio::test]
    async fn test_symptom_severity_and_mindful_minutes() {
        let store = InMemoryHealthKitStore::new();
        let backend = backend(&store);
        let now = Utc::now();

        backend.save(&ios("headache"), &RawValue::Number(3.0), now).await.unwrap();
        backend.save(&ios("mindfulMinutes"), &RawValue::Number(15.0), now).await.unwrap();

        let headache = backend.fetch(&ios("headache"), now).await.unwrap().unwrap();
        assert_eq!(headache.raw_value, RawValue::Number(3.0));

        let mindful = backend.fetch(&ios("mindfulMinutes"), now).await.unwrap().unwrap();
        assert_eq!(mindful.display(), "15");
    }

    #[tokio::test]
    async fn test_known_absent_and_unavailable() {
        let store = InMemoryHealthKitStore::new();
        let backend = backend(&store);

        assert_eq!(backend.fetch(&ios("sleepData"), Utc::now()).await.unwrap(), None);
        assert!(matches!(
            backend.save(&ios("bodyTemperature"), &RawValue::Number(37.0), Utc::now()).await,
            Err(HealthError::NotSupported { .. })
        ));
        assert_eq!(store.save_calls(), 0);

        let missing = InMemoryHealthKitStore::new().unavailable();
        assert_eq!(
            HealthKitBackend::new(Arc::new(missing)).initialize().await,
            Err(HealthError::PlatformUnavailable("HealthKit is not available".to_string()))
        );
    }

    #[test]
    fn test_blood_pressure_authorized_through_components() {
        let types = authorization_types(&SampleType::correlation(hk::BLOOD_PRESSURE));
        assert_eq!(
            types,
            vec![
                SampleType::quantity(hk::BLOOD_PRESSURE_SYSTOLIC),
                SampleType::quantity(hk::BLOOD_PRESSURE_DIASTOLIC)
            ]
        );
    }
}
