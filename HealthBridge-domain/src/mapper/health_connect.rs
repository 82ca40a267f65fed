//! Health Connect backend
//!
//! Maps the 36 Android catalog fields onto Health Connect records.
//! Quantities travel as `{value, unit}` objects; counts, rates and enum codes
//! are plain numbers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use health_bridge_data::health_connect::{CadenceSample, HeartRateSample, PowerSample, SpeedSample, StepsCadenceSample};
use health_bridge_data::{HealthConnectRecord, HealthConnectStore, Permission, Quantity, RecordType, SdkStatus, StoreError};

use super::backend::HealthBackend;
use super::handler::{sum_by, FieldHandler, HandlerTable, Lookup, MapContext, ReadFn, Reading};
use super::window::TimeWindow;
use crate::catalog::{FieldDescriptor, FieldRegistry};
use crate::entities::{NormalizedValue, RawValue};
use crate::error::{HealthError, ValidationError};
use crate::platform::Platform;
use crate::units::Unit;

type Record = HealthConnectRecord;
type Handler = FieldHandler<Record, RecordType>;
type Ctx<'a> = MapContext<'a, RecordType>;

/// Fields with no Health Connect mapping yet
const KNOWN_ABSENT: &[&str] = &["writeExerciseRoute"];

fn handler(field_id: &'static str, record_type: RecordType, window: TimeWindow, read: ReadFn<Record, RecordType>) -> Handler {
    FieldHandler::new(field_id, record_type, window, read)
}

fn quantity_in(value: f64, unit: Unit, ctx: &Ctx<'_>) -> Result<Quantity, HealthError> {
    let name = unit
        .health_connect_name()
        .ok_or_else(|| HealthError::unsupported_unit(ctx.field_id, format!("{} has no Health Connect name", unit)))?;
    Ok(Quantity::new(value, name))
}

/// The validated value as a native quantity
fn native_quantity(value: &RawValue, ctx: &Ctx<'_>) -> Result<Quantity, HealthError> {
    let (native, unit) = ctx.from_canonical(ctx.number(value)?)?;
    quantity_in(native, unit, ctx)
}

fn native_number(value: &RawValue, ctx: &Ctx<'_>) -> Result<f64, HealthError> {
    ctx.from_canonical(ctx.number(value)?).map(|(native, _)| native)
}

fn code(value: &RawValue, ctx: &Ctx<'_>) -> Result<i32, HealthError> {
    Ok(ctx.number(value)? as i32)
}

/// One-minute window ending now, for interval records written from a single value
fn last_minute(ctx: &Ctx<'_>) -> (DateTime<Utc>, DateTime<Utc>) {
    (ctx.now - Duration::minutes(1), ctx.now)
}

/// A window of `seconds` ending now
fn ending_now(seconds: f64, ctx: &Ctx<'_>) -> (DateTime<Utc>, DateTime<Utc>) {
    (ctx.now - Duration::milliseconds((seconds * 1000.0).round() as i64), ctx.now)
}

fn latest_quantity(
    records: &[Record],
    ctx: &Ctx<'_>,
    pick: fn(&Record) -> Option<&Quantity>,
) -> Result<Option<Reading>, HealthError> {
    let latest = records
        .iter()
        .filter_map(|record| pick(record).map(|quantity| (quantity, record.observed_at())))
        .max_by_key(|(_, at)| *at);
    let Some((quantity, at)) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.to_canonical(quantity.value, &quantity.unit)?, at)))
}

fn total_quantity(
    records: &[Record],
    ctx: &Ctx<'_>,
    pick: fn(&Record) -> Option<&Quantity>,
) -> Result<Option<Reading>, HealthError> {
    let values = records
        .iter()
        .filter_map(|record| pick(record).map(|quantity| (quantity, record.observed_at())))
        .map(|(quantity, at)| ctx.to_canonical(quantity.value, &quantity.unit).map(|value| (value, at)))
        .collect::<Result<Vec<_>, HealthError>>()?;
    Ok(sum_by(&values, |(value, _)| Some(*value), |(_, at)| *at).map(|(total, at)| Reading::number(total, at)))
}

fn latest_number(records: &[Record], ctx: &Ctx<'_>, pick: fn(&Record) -> Option<f64>) -> Result<Option<Reading>, HealthError> {
    let latest = records
        .iter()
        .filter_map(|record| pick(record).map(|value| (value, record.observed_at())))
        .max_by_key(|(_, at)| *at);
    let Some((value, at)) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(value)?, at)))
}

fn total_number(records: &[Record], ctx: &Ctx<'_>, pick: fn(&Record) -> Option<f64>) -> Result<Option<Reading>, HealthError> {
    let Some((total, at)) = sum_by(records, pick, Record::observed_at) else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(total)?, at)))
}

/// Latest enum code, reported as-is
fn latest_code(records: &[Record], pick: fn(&Record) -> Option<i32>) -> Option<Reading> {
    records
        .iter()
        .filter_map(|record| pick(record).map(|code| (code, record.observed_at())))
        .max_by_key(|(_, at)| *at)
        .map(|(code, at)| Reading::number(f64::from(code), at))
}

/// Total length of the sessions in the window, in seconds
fn total_duration(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    total_number(records, ctx, |record| {
        let (start, end) = record.span();
        Some((end - start).num_milliseconds() as f64 / 1000.0)
    })
}

/// Latest sample of a series record type, with its time and value
fn latest_sample<T>(
    records: &[Record],
    samples: fn(&Record) -> &[T],
    point: fn(&T) -> (DateTime<Utc>, f64),
) -> Option<(DateTime<Utc>, f64)> {
    records
        .iter()
        .flat_map(|record| samples(record))
        .map(point)
        .max_by_key(|(time, _)| *time)
}

fn read_blood_pressure(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = records.iter().max_by_key(|record| record.observed_at());
    match latest {
        Some(Record::BloodPressure { systolic, diastolic, time, .. }) => Ok(Some(Reading::new(
            RawValue::BloodPressure {
                systolic: ctx.to_canonical(systolic.value, &systolic.unit)?,
                diastolic: ctx.to_canonical(diastolic.value, &diastolic.unit)?,
            },
            *time,
        ))),
        _ => Ok(None),
    }
}

fn write_blood_pressure(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Record>, HealthError> {
    let RawValue::BloodPressure { systolic, diastolic } = value else {
        return Err(HealthError::validation(ctx.field_id, ValidationError::malformed("Expected systolic/diastolic")));
    };
    let (systolic, unit) = ctx.from_canonical(*systolic)?;
    let (diastolic, _) = ctx.from_canonical(*diastolic)?;
    Ok(vec![Record::BloodPressure {
        systolic: quantity_in(systolic, unit, ctx)?,
        diastolic: quantity_in(diastolic, unit, ctx)?,
        body_position: 0,
        measurement_location: 0,
        time: ctx.now,
    }])
}

fn read_cervical_mucus(records: &[Record], _ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = records.iter().max_by_key(|record| record.observed_at());
    Ok(match latest {
        Some(Record::CervicalMucus { appearance, sensation, time }) => Some(Reading::new(
            RawValue::CervicalMucus {
                appearance: i64::from(*appearance),
                sensation: i64::from(*sensation),
            },
            *time,
        )),
        _ => None,
    })
}

fn write_cervical_mucus(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Record>, HealthError> {
    match value {
        RawValue::CervicalMucus { appearance, sensation } => Ok(vec![Record::CervicalMucus {
            appearance: *appearance as i32,
            sensation: *sensation as i32,
            time: ctx.now,
        }]),
        _ => Err(HealthError::validation(ctx.field_id, ValidationError::malformed("Expected appearance,sensation"))),
    }
}

fn read_menstruation_period(records: &[Record], _ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = records.iter().max_by_key(|record| record.observed_at());
    Ok(match latest {
        Some(Record::MenstruationPeriod { start_time, end_time }) => Some(Reading::new(
            RawValue::Interval { start: *start_time, end: *end_time },
            *end_time,
        )),
        _ => None,
    })
}

fn write_menstruation_period(value: &RawValue, ctx: &Ctx<'_>) -> Result<Vec<Record>, HealthError> {
    match value {
        RawValue::Interval { start, end } => Ok(vec![Record::MenstruationPeriod { start_time: *start, end_time: *end }]),
        _ => Err(HealthError::validation(ctx.field_id, ValidationError::malformed("Expected start/end"))),
    }
}

fn read_heart_rate(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = latest_sample(
        records,
        |record| match record {
            Record::HeartRate { samples, .. } => samples.as_slice(),
            _ => &[],
        },
        |sample: &HeartRateSample| (sample.time, sample.beats_per_minute),
    );
    let Some((time, bpm)) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(bpm)?, time)))
}

fn read_cadence(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = latest_sample(
        records,
        |record| match record {
            Record::CyclingPedalingCadence { samples, .. } => samples.as_slice(),
            _ => &[],
        },
        |sample: &CadenceSample| (sample.time, sample.revolutions_per_minute),
    );
    let Some((time, rpm)) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(rpm)?, time)))
}

fn read_steps_cadence(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = latest_sample(
        records,
        |record| match record {
            Record::StepsCadence { samples, .. } => samples.as_slice(),
            _ => &[],
        },
        |sample: &StepsCadenceSample| (sample.time, sample.rate),
    );
    let Some((time, rate)) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.native_to_canonical(rate)?, time)))
}

// Power and speed samples carry their own unit
fn read_power(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = records
        .iter()
        .flat_map(|record| match record {
            Record::Power { samples, .. } => samples.as_slice(),
            _ => &[],
        })
        .max_by_key(|sample| sample.time);
    let Some(sample) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.to_canonical(sample.power.value, &sample.power.unit)?, sample.time)))
}

fn read_speed(records: &[Record], ctx: &Ctx<'_>) -> Result<Option<Reading>, HealthError> {
    let latest = records
        .iter()
        .flat_map(|record| match record {
            Record::Speed { samples, .. } => samples.as_slice(),
            _ => &[],
        })
        .max_by_key(|sample| sample.time);
    let Some(sample) = latest else {
        return Ok(None);
    };
    Ok(Some(Reading::number(ctx.to_canonical(sample.speed.value, &sample.speed.unit)?, sample.time)))
}

fn handlers() -> Vec<Handler> {
    use RecordType as T;
    use TimeWindow::*;

    vec![
        handler("activeCaloriesBurned", T::ActiveCaloriesBurned, LastHours(24), |records, ctx| {
            total_quantity(records, ctx, |r| match r {
                Record::ActiveCaloriesBurned { energy, .. } => Some(energy),
                _ => None,
            })
        })
        .native(Unit::Kilocalorie)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::ActiveCaloriesBurned { energy: native_quantity(value, ctx)?, start_time, end_time }])
        }),
        handler("basalBodyTemperature", T::BasalBodyTemperature, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::BasalBodyTemperature { temperature, .. } => Some(temperature),
                _ => None,
            })
        })
        .native(Unit::Celsius)
        .write(|value, ctx| {
            Ok(vec![Record::BasalBodyTemperature {
                temperature: native_quantity(value, ctx)?,
                measurement_location: 0,
                time: ctx.now,
            }])
        }),
        handler("basalMetabolicRate", T::BasalMetabolicRate, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::BasalMetabolicRate { basal_metabolic_rate, .. } => Some(basal_metabolic_rate),
                _ => None,
            })
        })
        .native(Unit::KilocaloriePerDay)
        .write(|value, ctx| {
            Ok(vec![Record::BasalMetabolicRate { basal_metabolic_rate: native_quantity(value, ctx)?, time: ctx.now }])
        }),
        handler("bloodGlucose", T::BloodGlucose, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::BloodGlucose { level, .. } => Some(level),
                _ => None,
            })
        })
        .native(Unit::MilligramPerDeciliter)
        .write(|value, ctx| {
            Ok(vec![Record::BloodGlucose {
                level: native_quantity(value, ctx)?,
                specimen_source: 0,
                meal_type: 0,
                relation_to_meal: 0,
                time: ctx.now,
            }])
        }),
        handler("bloodPressure", T::BloodPressure, AllTime, read_blood_pressure)
            .native(Unit::MillimeterOfMercury)
            .write(write_blood_pressure),
        handler("bodyFat", T::BodyFat, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::BodyFat { percentage, .. } => Some(percentage),
                _ => None,
            })
        })
        .native(Unit::Percent)
        .write(|value, ctx| Ok(vec![Record::BodyFat { percentage: native_quantity(value, ctx)?, time: ctx.now }])),
        handler("bodyTemperature", T::BodyTemperature, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::BodyTemperature { temperature, .. } => Some(temperature),
                _ => None,
            })
        })
        .native(Unit::Celsius)
        .write(|value, ctx| {
            Ok(vec![Record::BodyTemperature {
                temperature: native_quantity(value, ctx)?,
                measurement_location: 0,
                time: ctx.now,
            }])
        }),
        handler("boneMass", T::BoneMass, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::BoneMass { mass, .. } => Some(mass),
                _ => None,
            })
        })
        .native(Unit::Kilogram)
        .write(|value, ctx| Ok(vec![Record::BoneMass { mass: native_quantity(value, ctx)?, time: ctx.now }])),
        handler("cervicalMucus", T::CervicalMucus, AllTime, read_cervical_mucus).write(write_cervical_mucus),
        handler("cyclingPedalingCadence", T::CyclingPedalingCadence, StartOfDay, read_cadence)
            .native(Unit::PerMinute)
            .write(|value, ctx| {
                let (start_time, end_time) = last_minute(ctx);
                Ok(vec![Record::CyclingPedalingCadence {
                    samples: vec![CadenceSample { time: end_time, revolutions_per_minute: native_number(value, ctx)? }],
                    start_time,
                    end_time,
                }])
            }),
        handler("distance", T::Distance, StartOfDay, |records, ctx| {
            total_quantity(records, ctx, |r| match r {
                Record::Distance { distance, .. } => Some(distance),
                _ => None,
            })
        })
        .native(Unit::Meter)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::Distance { distance: native_quantity(value, ctx)?, start_time, end_time }])
        }),
        handler("elevationGained", T::ElevationGained, StartOfDay, |records, ctx| {
            total_quantity(records, ctx, |r| match r {
                Record::ElevationGained { elevation, .. } => Some(elevation),
                _ => None,
            })
        })
        .native(Unit::Meter)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::ElevationGained { elevation: native_quantity(value, ctx)?, start_time, end_time }])
        }),
        handler("exerciseSession", T::ExerciseSession, StartOfDay, total_duration)
            .native(Unit::Second)
            .write(|value, ctx| {
                let (start_time, end_time) = ending_now(native_number(value, ctx)?, ctx);
                Ok(vec![Record::ExerciseSession { exercise_type: 0, title: None, start_time, end_time }])
            }),
        handler("floorsClimbed", T::FloorsClimbed, StartOfDay, |records, ctx| {
            total_number(records, ctx, |r| match r {
                Record::FloorsClimbed { floors, .. } => Some(*floors),
                _ => None,
            })
        })
        .native(Unit::Count)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::FloorsClimbed { floors: native_number(value, ctx)?, start_time, end_time }])
        }),
        handler("heartRate", T::HeartRate, LastHours(1), read_heart_rate)
            .native(Unit::PerMinute)
            .write(|value, ctx| {
                let (start_time, end_time) = last_minute(ctx);
                Ok(vec![Record::HeartRate {
                    samples: vec![HeartRateSample { time: end_time, beats_per_minute: native_number(value, ctx)? }],
                    start_time,
                    end_time,
                }])
            }),
        handler("height", T::Height, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::Height { height, .. } => Some(height),
                _ => None,
            })
        })
        .native(Unit::Meter)
        .write(|value, ctx| Ok(vec![Record::Height { height: native_quantity(value, ctx)?, time: ctx.now }])),
        handler("hydration", T::Hydration, StartOfDay, |records, ctx| {
            total_quantity(records, ctx, |r| match r {
                Record::Hydration { volume, .. } => Some(volume),
                _ => None,
            })
        })
        .native(Unit::Liter)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::Hydration { volume: native_quantity(value, ctx)?, start_time, end_time }])
        }),
        handler("leanBodyMass", T::LeanBodyMass, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::LeanBodyMass { mass, .. } => Some(mass),
                _ => None,
            })
        })
        .native(Unit::Kilogram)
        .write(|value, ctx| Ok(vec![Record::LeanBodyMass { mass: native_quantity(value, ctx)?, time: ctx.now }])),
        handler("menstruationFlow", T::MenstruationFlow, AllTime, |records, _| {
            Ok(latest_code(records, |r| match r {
                Record::MenstruationFlow { flow, .. } => Some(*flow),
                _ => None,
            }))
        })
        .write(|value, ctx| Ok(vec![Record::MenstruationFlow { flow: code(value, ctx)?, time: ctx.now }])),
        handler("menstruationPeriod", T::MenstruationPeriod, AllTime, read_menstruation_period)
            .write(write_menstruation_period),
        handler("nutrition", T::Nutrition, StartOfDay, |records, ctx| {
            total_quantity(records, ctx, |r| match r {
                Record::Nutrition { energy, .. } => energy.as_ref(),
                _ => None,
            })
        })
        .native(Unit::Kilocalorie)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::Nutrition {
                name: None,
                energy: Some(native_quantity(value, ctx)?),
                protein: None,
                total_carbohydrate: None,
                total_fat: None,
                start_time,
                end_time,
            }])
        }),
        handler("ovulationTest", T::OvulationTest, AllTime, |records, _| {
            Ok(latest_code(records, |r| match r {
                Record::OvulationTest { result, .. } => Some(*result),
                _ => None,
            }))
        })
        .write(|value, ctx| Ok(vec![Record::OvulationTest { result: code(value, ctx)?, time: ctx.now }])),
        handler("oxygenSaturation", T::OxygenSaturation, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::OxygenSaturation { percentage, .. } => Some(percentage),
                _ => None,
            })
        })
        .native(Unit::Percent)
        .write(|value, ctx| {
            Ok(vec![Record::OxygenSaturation { percentage: native_quantity(value, ctx)?, time: ctx.now }])
        }),
        handler("power", T::Power, StartOfDay, read_power)
            .native(Unit::Watt)
            .write(|value, ctx| {
                let (start_time, end_time) = last_minute(ctx);
                Ok(vec![Record::Power {
                    samples: vec![PowerSample { time: end_time, power: native_quantity(value, ctx)? }],
                    start_time,
                    end_time,
                }])
            }),
        handler("respiratoryRate", T::RespiratoryRate, AllTime, |records, ctx| {
            latest_number(records, ctx, |r| match r {
                Record::RespiratoryRate { rate, .. } => Some(*rate),
                _ => None,
            })
        })
        .native(Unit::PerMinute)
        .write(|value, ctx| Ok(vec![Record::RespiratoryRate { rate: native_number(value, ctx)?, time: ctx.now }])),
        handler("restingHeartRate", T::RestingHeartRate, AllTime, |records, ctx| {
            latest_number(records, ctx, |r| match r {
                Record::RestingHeartRate { beats_per_minute, .. } => Some(*beats_per_minute),
                _ => None,
            })
        })
        .native(Unit::PerMinute)
        .write(|value, ctx| {
            Ok(vec![Record::RestingHeartRate { beats_per_minute: native_number(value, ctx)?, time: ctx.now }])
        }),
        handler("sexualActivity", T::SexualActivity, AllTime, |records, _| {
            Ok(latest_code(records, |r| match r {
                Record::SexualActivity { protection_used, .. } => Some(*protection_used),
                _ => None,
            }))
        })
        .write(|value, ctx| Ok(vec![Record::SexualActivity { protection_used: code(value, ctx)?, time: ctx.now }])),
        handler("sleepSession", T::SleepSession, LastHours(24), total_duration)
            .native(Unit::Second)
            .write(|value, ctx| {
                let (start_time, end_time) = ending_now(native_number(value, ctx)?, ctx);
                Ok(vec![Record::SleepSession { title: None, start_time, end_time }])
            }),
        handler("speed", T::Speed, StartOfDay, read_speed)
            .native(Unit::MeterPerSecond)
            .write(|value, ctx| {
                let (start_time, end_time) = last_minute(ctx);
                Ok(vec![Record::Speed {
                    samples: vec![SpeedSample { time: end_time, speed: native_quantity(value, ctx)? }],
                    start_time,
                    end_time,
                }])
            }),
        handler("stepsCadence", T::StepsCadence, StartOfDay, read_steps_cadence)
            .native(Unit::PerMinute)
            .write(|value, ctx| {
                let (start_time, end_time) = last_minute(ctx);
                Ok(vec![Record::StepsCadence {
                    samples: vec![StepsCadenceSample { time: end_time, rate: native_number(value, ctx)? }],
                    start_time,
                    end_time,
                }])
            }),
        handler("steps", T::Steps, StartOfDay, |records, ctx| {
            total_number(records, ctx, |r| match r {
                Record::Steps { count, .. } => Some(*count as f64),
                _ => None,
            })
        })
        .native(Unit::Count)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::Steps { count: native_number(value, ctx)?.round() as i64, start_time, end_time }])
        }),
        handler("totalCaloriesBurned", T::TotalCaloriesBurned, StartOfDay, |records, ctx| {
            total_quantity(records, ctx, |r| match r {
                Record::TotalCaloriesBurned { energy, .. } => Some(energy),
                _ => None,
            })
        })
        .native(Unit::Kilocalorie)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::TotalCaloriesBurned { energy: native_quantity(value, ctx)?, start_time, end_time }])
        }),
        handler("vo2Max", T::Vo2Max, AllTime, |records, ctx| {
            latest_number(records, ctx, |r| match r {
                Record::Vo2Max { vo2_milliliters_per_minute_kilogram, .. } => Some(*vo2_milliliters_per_minute_kilogram),
                _ => None,
            })
        })
        .native(Unit::MilliliterPerKilogramMinute)
        .write(|value, ctx| {
            Ok(vec![Record::Vo2Max {
                vo2_milliliters_per_minute_kilogram: native_number(value, ctx)?,
                measurement_method: 0,
                time: ctx.now,
            }])
        }),
        handler("weight", T::Weight, AllTime, |records, ctx| {
            latest_quantity(records, ctx, |r| match r {
                Record::Weight { weight, .. } => Some(weight),
                _ => None,
            })
        })
        .native(Unit::Kilogram)
        .write(|value, ctx| Ok(vec![Record::Weight { weight: native_quantity(value, ctx)?, time: ctx.now }])),
        handler("wheelchairPushes", T::WheelchairPushes, StartOfDay, |records, ctx| {
            total_number(records, ctx, |r| match r {
                Record::WheelchairPushes { count, .. } => Some(*count as f64),
                _ => None,
            })
        })
        .native(Unit::Count)
        .write(|value, ctx| {
            let (start_time, end_time) = last_minute(ctx);
            Ok(vec![Record::WheelchairPushes {
                count: native_number(value, ctx)?.round() as i64,
                start_time,
                end_time,
            }])
        }),
    ]
}

/// Record mapping over a [`HealthConnectStore`]
pub struct HealthConnectBackend {
    store: Arc<dyn HealthConnectStore>,
    table: HandlerTable<Record, RecordType>,
}

impl HealthConnectBackend {
    pub fn new(store: Arc<dyn HealthConnectStore>) -> Self {
        let registry = FieldRegistry::for_platform(Platform::Android);
        Self {
            store,
            table: HandlerTable::new(Platform::Android, &registry, handlers(), KNOWN_ABSENT),
        }
    }

    pub fn table(&self) -> &HandlerTable<Record, RecordType> {
        &self.table
    }
}

fn unavailable(error: StoreError) -> HealthError {
    HealthError::PlatformUnavailable(error.to_string())
}

#[async_trait]
impl HealthBackend for HealthConnectBackend {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    async fn initialize(&self) -> Result<(), HealthError> {
        let status = self.store.sdk_status().await.map_err(unavailable)?;
        debug!("Health Connect SDK status: {:?}", status);

        match status {
            SdkStatus::SdkUnavailable => {
                return Err(HealthError::PlatformUnavailable("Health Connect is not installed".to_string()))
            }
            SdkStatus::SdkUnavailableProviderUpdateRequired => {
                return Err(HealthError::PlatformUnavailable(
                    "Health Connect provider update required".to_string(),
                ))
            }
            SdkStatus::SdkAvailable => {}
        }

        if !self.store.initialize().await.map_err(unavailable)? {
            return Err(HealthError::PlatformUnavailable(
                "Health Connect failed to initialize".to_string(),
            ));
        }
        info!("Health Connect client initialized");
        Ok(())
    }

    async fn request_permissions(&self, registry: &FieldRegistry) -> Result<bool, HealthError> {
        let mut permissions: Vec<Permission> = Vec::new();
        for descriptor in registry.iter() {
            let Lookup::Handler(handler) = self.table.lookup(descriptor.id) else {
                continue;
            };
            let mut wanted = vec![Permission::read(handler.source)];
            if descriptor.writable && handler.write.is_some() {
                wanted.push(Permission::write(handler.source));
            }
            for permission in wanted {
                if !permissions.contains(&permission) {
                    permissions.push(permission);
                }
            }
        }

        debug!("Requesting {} Health Connect permissions", permissions.len());
        let granted = self.store.request_permission(&permissions).await.map_err(unavailable)?;
        info!("Health Connect granted {} of {} permissions", granted.len(), permissions.len());
        Ok(!granted.is_empty())
    }

    async fn fetch(&self, descriptor: &FieldDescriptor, now: DateTime<Utc>) -> Result<Option<NormalizedValue>, HealthError> {
        let handler = match self.table.lookup(descriptor.id) {
            Lookup::Handler(handler) => handler,
            Lookup::KnownAbsent => {
                debug!("{} is not implemented for Health Connect", descriptor.id);
                return Ok(None);
            }
            Lookup::Unmapped => {
                return Err(HealthError::NotSupported {
                    field_id: descriptor.id.to_string(),
                    platform: Platform::Android,
                })
            }
        };

        let filter = handler.window.to_filter(now);
        debug!("Reading {} records for {}", handler.source, descriptor.id);
        let records = self
            .store
            .read_records(handler.source, &filter)
            .await
            .map_err(|e| HealthError::from_store(descriptor.id, e))?;

        let ctx = self.table.context(handler, now);
        let reading = (handler.read)(&records, &ctx)?;
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

        let records = write(value, &self.table.context(handler, now))?;
        debug!("Inserting {} {} record(s) for {}", records.len(), handler.source, descriptor.id);
        self.store
            .insert_records(records)
            .await
            .map_err(|e| HealthError::NativeCall { field_id: descriptor.id.to_string(), message: e.to_string() })?;

        Ok(NormalizedValue::new(descriptor, value.clone(), now))
    }
}

fn not_supported(descriptor: &FieldDescriptor) -> HealthError {
    HealthError::NotSupported {
        field_id: descriptor.id.to_string(),
        platform: Platform::Android,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_bridge_data::InMemoryHealthConnectStore;

    fn at(ts: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
    }

    fn android(id: &str) -> FieldDescriptor {
        FieldRegistry::for_platform(Platform::Android).describe(id).unwrap().clone()
    }

    fn backend(store: &InMemoryHealthConnectStore) -> HealthConnectBackend {
        HealthConnectBackend::new(Arc::new(store.clone()))
    }

    #[test]
    fn test_every_android_field_is_mapped_or_known_absent() {
        let registry = FieldRegistry::for_platform(Platform::Android);
        let backend = backend(&InMemoryHealthConnectStore::new());

        for descriptor in registry.iter() {
            let mapped = match backend.table().lookup(descriptor.id) {
                Lookup::Handler(handler) => {
                    assert_eq!(descriptor.writable, handler.write.is_some(), "{}", descriptor.id);
                    true
                }
                Lookup::KnownAbsent => true,
                Lookup::Unmapped => false,
            };
            assert!(mapped, "{} has no Health Connect mapping", descriptor.id);
        }
    }

    #[test]
    fn test_every_native_unit_registers() {
        let backend = backend(&InMemoryHealthConnectStore::new());
        for handler in backend.table().handlers() {
            if handler.native_unit.is_some() {
                assert!(
                    backend.table().converter().canonical_unit(handler.field_id).is_some(),
                    "{} has no conversion",
                    handler.field_id
                );
            }
        }
    }

    #[tokio::test]
    async fn test_height_round_trip_through_meters() {
        let store = InMemoryHealthConnectStore::new();
        let backend = backend(&store);
        let height = android("height");
        let now = Utc::now();

        backend.save(&height, &RawValue::Number(175.0), now).await.unwrap();

        let stored = store.records_of(RecordType::Height).unwrap();
        assert_eq!(stored, vec![Record::Height { height: Quantity::new(1.75, "meters"), time: now }]);

        let fetched = backend.fetch(&height, Utc::now()).await.unwrap().unwrap();
        assert_eq!(fetched.display(), "175");
        assert_eq!(fetched.unit, "cm");
    }

    #[tokio::test]
    async fn test_steps_sum_since_midnight() {
        let now = Utc::now();
        let midnight = TimeWindow::StartOfDay.to_filter(now).start().unwrap();
        let store = InMemoryHealthConnectStore::new().with_records(vec![
            Record::Steps { count: 1200, start_time: midnight, end_time: midnight },
            Record::Steps { count: 800, start_time: midnight, end_time: now },
            Record::Steps { count: 5000, start_time: midnight - Duration::hours(5), end_time: midnight - Duration::hours(4) },
        ]);

        let value = backend(&store).fetch(&android("steps"), now).await.unwrap().unwrap();
        assert_eq!(value.raw_value, RawValue::Number(2000.0));
    }

    #[tokio::test]
    async fn test_empty_window_is_no_data() {
        let store = InMemoryHealthConnectStore::new();
        assert_eq!(backend(&store).fetch(&android("steps"), Utc::now()).await.unwrap(), None);
        assert_eq!(backend(&store).fetch(&android("weight"), Utc::now()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_hydration_reads_liters_as_milliliters() {
        let now = Utc::now();
        let store = InMemoryHealthConnectStore::new().with_records(vec![Record::Hydration {
            volume: Quantity::new(0.25, "liters"),
            start_time: now - Duration::minutes(2),
            end_time: now - Duration::minutes(1),
        }]);

        let value = backend(&store).fetch(&android("hydration"), now).await.unwrap().unwrap();
        assert_eq!(value.display(), "250");
    }

    #[tokio::test]
    async fn test_heart_rate_uses_latest_sample_in_last_hour() {
        let now = Utc::now();
        let store = InMemoryHealthConnectStore::new().with_records(vec![
            Record::HeartRate {
                samples: vec![
                    HeartRateSample { time: now - Duration::minutes(20), beats_per_minute: 64.0 },
                    HeartRateSample { time: now - Duration::minutes(10), beats_per_minute: 72.0 },
                ],
                start_time: now - Duration::minutes(20),
                end_time: now - Duration::minutes(10),
            },
            Record::HeartRate {
                samples: vec![HeartRateSample { time: now - Duration::hours(3), beats_per_minute: 55.0 }],
                start_time: now - Duration::hours(3),
                end_time: now - Duration::hours(3),
            },
        ]);

        let value = backend(&store).fetch(&android("heartRate"), now).await.unwrap().unwrap();
        assert_eq!(value.raw_value, RawValue::Number(72.0));
        assert_eq!(value.timestamp, now - Duration::minutes(10));
    }

    #[tokio::test]
    async fn test_blood_pressure_and_mucus_composites() {
        let store = InMemoryHealthConnectStore::new();
        let backend = backend(&store);
        let now = at("2024-05-01T08:00:00Z");

        backend
            .save(&android("bloodPressure"), &RawValue::BloodPressure { systolic: 120.0, diastolic: 80.0 }, now)
            .await
            .unwrap();
        backend
            .save(&android("cervicalMucus"), &RawValue::CervicalMucus { appearance: 5, sensation: 2 }, now)
            .await
            .unwrap();

        let bp = backend.fetch(&android("bloodPressure"), Utc::now()).await.unwrap().unwrap();
        assert_eq!(bp.display(), "120/80");
        let mucus = backend.fetch(&android("cervicalMucus"), Utc::now()).await.unwrap().unwrap();
        assert_eq!(mucus.display(), "5,2");
    }

    #[tokio::test]
    async fn test_sleep_session_duration_in_hours() {
        let store = InMemoryHealthConnectStore::new();
        let backend = backend(&store);
        let now = Utc::now();

        backend.save(&android("sleepSession"), &RawValue::Number(7.5), now).await.unwrap();

        let stored = store.records_of(RecordType::SleepSession).unwrap();
        assert_eq!(stored[0].span(), (now - Duration::minutes(450), now));

        let value = backend.fetch(&android("sleepSession"), now).await.unwrap().unwrap();
        assert_eq!(value.display(), "7.5");
    }

    #[tokio::test]
    async fn test_known_absent_field() {
        let store = InMemoryHealthConnectStore::new();
        let backend = backend(&store);
        let route = android("writeExerciseRoute");

        assert_eq!(backend.fetch(&route, Utc::now()).await.unwrap(), None);
        assert!(matches!(
            backend.save(&route, &RawValue::Number(1.0), Utc::now()).await,
            Err(HealthError::NotSupported { .. })
        ));
    }

    #[tokio::test]
    async fn test_initialize_maps_sdk_status() {
        let missing = InMemoryHealthConnectStore::new().with_status(SdkStatus::SdkUnavailable);
        assert_eq!(
            backend(&missing).initialize().await,
            Err(HealthError::PlatformUnavailable("Health Connect is not installed".to_string()))
        );

        let outdated = InMemoryHealthConnectStore::new().with_status(SdkStatus::SdkUnavailableProviderUpdateRequired);
        assert!(matches!(backend(&outdated).initialize().await, Err(HealthError::PlatformUnavailable(_))));
        assert_eq!(outdated.initialize_calls(), 0);

        let ready = InMemoryHealthConnectStore::new();
        assert!(backend(&ready).initialize().await.is_ok());
        assert_eq!(ready.initialize_calls(), 1);
    }

    #[tokio::test]
    async fn test_request_permissions() {
        let registry = FieldRegistry::for_platform(Platform::Android);

        let store = InMemoryHealthConnectStore::new();
        assert!(backend(&store).request_permissions(&registry).await.unwrap());

        let denied = InMemoryHealthConnectStore::new().deny_permissions();
        assert!(!backend(&denied).request_permissions(&registry).await.unwrap());
    }
}
