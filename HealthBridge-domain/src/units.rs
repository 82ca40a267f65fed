//! Units of measure and per-field conversion between canonical and native units
//!
//! Every unit is a linear mapping onto the base unit of its dimension:
//! `base = value * scale + offset`. Canonical units are the display units of the
//! field catalog; native units are whatever the platform record type stores.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::HealthError;
use crate::platform::Platform;

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Length,
    Mass,
    Volume,
    Energy,
    EnergyRate,
    Temperature,
    Ratio,
    Frequency,
    Count,
    Duration,
    Power,
    Speed,
    Pressure,
    BloodGlucose,
    VolumeFlow,
    OxygenUptake,
    SoundLevel,
    InsulinDose,
}

/// Units used by the catalogs and the platform record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    Meter,
    Centimeter,
    Kilometer,
    Kilogram,
    Gram,
    Milligram,
    Microgram,
    Liter,
    Milliliter,
    Kilocalorie,
    Kilojoule,
    KilocaloriePerDay,
    Celsius,
    Fahrenheit,
    /// 0 to 100
    Percent,
    /// 0 to 1
    Fraction,
    PerMinute,
    Count,
    Second,
    Millisecond,
    Minute,
    Hour,
    Watt,
    MeterPerSecond,
    KilometerPerHour,
    MillimeterOfMercury,
    MilligramPerDeciliter,
    MillimolePerLiter,
    LiterPerMinute,
    MilliliterPerKilogramMinute,
    Decibel,
    InternationalUnit,
}

/// Conversion failures between two units
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("cannot convert {from} to {to}")]
    Incompatible { from: Unit, to: Unit },

    #[error("unrecognized unit '{0}'")]
    Unrecognized(String),
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        use Unit::*;
        match self {
            Meter | Centimeter | Kilometer => Dimension::Length,
            Kilogram | Gram | Milligram | Microgram => Dimension::Mass,
            Liter | Milliliter => Dimension::Volume,
            Kilocalorie | Kilojoule => Dimension::Energy,
            KilocaloriePerDay => Dimension::EnergyRate,
            Celsius | Fahrenheit => Dimension::Temperature,
            Percent | Fraction => Dimension::Ratio,
            PerMinute => Dimension::Frequency,
            Count => Dimension::Count,
            Second | Millisecond | Minute | Hour => Dimension::Duration,
            Watt => Dimension::Power,
            MeterPerSecond | KilometerPerHour => Dimension::Speed,
            MillimeterOfMercury => Dimension::Pressure,
            MilligramPerDeciliter | MillimolePerLiter => Dimension::BloodGlucose,
            LiterPerMinute => Dimension::VolumeFlow,
            MilliliterPerKilogramMinute => Dimension::OxygenUptake,
            Decibel => Dimension::SoundLevel,
            InternationalUnit => Dimension::InsulinDose,
        }
    }

    /// `(scale, offset)` onto the dimension's base unit
    fn linear(&self) -> (f64, f64) {
        use Unit::*;
        match self {
            Centimeter => (0.01, 0.0),
            Kilometer => (1000.0, 0.0),
            Gram => (1e-3, 0.0),
            Milligram => (1e-6, 0.0),
            Microgram => (1e-9, 0.0),
            Milliliter => (1e-3, 0.0),
            Kilojoule => (1.0 / 4.184, 0.0),
            Fahrenheit => (5.0 / 9.0, -32.0 * 5.0 / 9.0),
            Percent => (0.01, 0.0),
            Millisecond => (1e-3, 0.0),
            Minute => (60.0, 0.0),
            Hour => (3600.0, 0.0),
            KilometerPerHour => (1.0 / 3.6, 0.0),
            // Glucose molar mass 180.156 g/mol
            MillimolePerLiter => (18.0156, 0.0),
            _ => (1.0, 0.0),
        }
    }

    /// Symbol shown in the UI
    pub fn symbol(&self) -> &'static str {
        use Unit::*;
        match self {
            Meter => "m",
            Centimeter => "cm",
            Kilometer => "km",
            Kilogram => "kg",
            Gram => "g",
            Milligram => "mg",
            Microgram => "μg",
            Liter => "L",
            Milliliter => "ml",
            Kilocalorie => "kcal",
            Kilojoule => "kJ",
            KilocaloriePerDay => "kcal/day",
            Celsius => "°C",
            Fahrenheit => "°F",
            Percent => "%",
            Fraction => "fraction",
            PerMinute => "/min",
            Count => "count",
            Second => "s",
            Millisecond => "ms",
            Minute => "min",
            Hour => "h",
            Watt => "W",
            MeterPerSecond => "m/s",
            KilometerPerHour => "km/h",
            MillimeterOfMercury => "mmHg",
            MilligramPerDeciliter => "mg/dL",
            MillimolePerLiter => "mmol/L",
            LiterPerMinute => "L/min",
            MilliliterPerKilogramMinute => "ml/kg/min",
            Decibel => "dB",
            InternationalUnit => "IU",
        }
    }

    /// Unit name used in Health Connect quantity objects
    pub fn health_connect_name(&self) -> Option<&'static str> {
        use Unit::*;
        let name = match self {
            Meter => "meters",
            Kilometer => "kilometers",
            Kilogram => "kilograms",
            Gram => "grams",
            Milligram => "milligrams",
            Microgram => "micrograms",
            Liter => "liters",
            Milliliter => "milliliters",
            Kilocalorie => "kilocalories",
            Kilojoule => "kilojoules",
            KilocaloriePerDay => "kilocaloriesPerDay",
            Celsius => "celsius",
            Fahrenheit => "fahrenheit",
            Percent => "percent",
            Watt => "watts",
            MeterPerSecond => "metersPerSecond",
            KilometerPerHour => "kilometersPerHour",
            MillimeterOfMercury => "millimetersOfMercury",
            MilligramPerDeciliter => "milligramsPerDeciliter",
            MillimolePerLiter => "millimolesPerLiter",
            _ => return None,
        };
        Some(name)
    }

    /// HKUnit string
    pub fn health_kit_symbol(&self) -> Option<&'static str> {
        use Unit::*;
        let symbol = match self {
            Meter => "m",
            Centimeter => "cm",
            Kilometer => "km",
            Kilogram => "kg",
            Gram => "g",
            Milligram => "mg",
            Microgram => "mcg",
            Liter => "L",
            Milliliter => "mL",
            Kilocalorie => "kcal",
            Kilojoule => "kJ",
            Celsius => "degC",
            Fahrenheit => "degF",
            // HealthKit percentages are fractions
            Fraction => "%",
            PerMinute => "count/min",
            Count => "count",
            Second => "s",
            Millisecond => "ms",
            Minute => "min",
            Hour => "hr",
            Watt => "W",
            MeterPerSecond => "m/s",
            KilometerPerHour => "km/hr",
            MillimeterOfMercury => "mmHg",
            MilligramPerDeciliter => "mg/dL",
            LiterPerMinute => "L/min",
            MilliliterPerKilogramMinute => "ml/(kg*min)",
            Decibel => "dBASPL",
            InternationalUnit => "IU",
            Percent | KilocaloriePerDay | MillimolePerLiter => return None,
        };
        Some(symbol)
    }

    /// The unit string a platform uses for this unit
    pub fn native_name(&self, platform: Platform) -> Option<&'static str> {
        match platform {
            Platform::Android => self.health_connect_name(),
            Platform::Ios => self.health_kit_symbol(),
        }
    }

    /// Parse a display unit string from the catalog
    pub fn parse(s: &str) -> Option<Unit> {
        use Unit::*;
        let unit = match s.trim() {
            "m" => Meter,
            "cm" => Centimeter,
            "km" => Kilometer,
            "kg" => Kilogram,
            "g" => Gram,
            "mg" => Milligram,
            "μg" | "µg" | "mcg" => Microgram,
            "L" | "l" => Liter,
            "ml" | "mL" => Milliliter,
            "kcal" => Kilocalorie,
            "kJ" => Kilojoule,
            "kcal/day" => KilocaloriePerDay,
            "°C" | "degC" => Celsius,
            "°F" | "degF" => Fahrenheit,
            "%" => Percent,
            "bpm" | "rpm" | "breaths/min" | "steps/min" | "count/min" | "/min" => PerMinute,
            "count" | "steps" | "floors" | "times" => Count,
            "s" => Second,
            "ms" => Millisecond,
            "min" => Minute,
            "h" | "hr" => Hour,
            "W" => Watt,
            "m/s" => MeterPerSecond,
            "km/h" | "km/hr" => KilometerPerHour,
            "mmHg" => MillimeterOfMercury,
            "mg/dL" => MilligramPerDeciliter,
            "mmol/L" => MillimolePerLiter,
            "L/min" => LiterPerMinute,
            "ml/kg/min" | "ml/(kg*min)" => MilliliterPerKilogramMinute,
            "dB" | "dBASPL" => Decibel,
            "IU" => InternationalUnit,
            _ => return None,
        };
        Some(unit)
    }

    /// Parse a unit string as reported by a platform store
    pub fn parse_native(platform: Platform, s: &str) -> Option<Unit> {
        let s = s.trim();
        ALL_UNITS
            .iter()
            .copied()
            .find(|unit| unit.native_name(platform) == Some(s))
            .or_else(|| Unit::parse(s))
    }
}

const ALL_UNITS: [Unit; 32] = [
    Unit::Meter,
    Unit::Centimeter,
    Unit::Kilometer,
    Unit::Kilogram,
    Unit::Gram,
    Unit::Milligram,
    Unit::Microgram,
    Unit::Liter,
    Unit::Milliliter,
    Unit::Kilocalorie,
    Unit::Kilojoule,
    Unit::KilocaloriePerDay,
    Unit::Celsius,
    Unit::Fahrenheit,
    Unit::Percent,
    Unit::Fraction,
    Unit::PerMinute,
    Unit::Count,
    Unit::Second,
    Unit::Millisecond,
    Unit::Minute,
    Unit::Hour,
    Unit::Watt,
    Unit::MeterPerSecond,
    Unit::KilometerPerHour,
    Unit::MillimeterOfMercury,
    Unit::MilligramPerDeciliter,
    Unit::MillimolePerLiter,
    Unit::LiterPerMinute,
    Unit::MilliliterPerKilogramMinute,
    Unit::Decibel,
    Unit::InternationalUnit,
];

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert a value between two units of the same dimension
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, UnitError> {
    if from == to {
        return Ok(value);
    }
    if from.dimension() != to.dimension() {
        return Err(UnitError::Incompatible { from, to });
    }

    let (from_scale, from_offset) = from.linear();
    let (to_scale, to_offset) = to.linear();

    if from_offset == 0.0 && to_offset == 0.0 {
        // A single ratio keeps decimal scale factors exact, e.g. 175 cm -> 1.75 m
        return Ok(value * (from_scale / to_scale));
    }

    let base = value * from_scale + from_offset;
    Ok((base - to_offset) / to_scale)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Conversion {
    canonical: Unit,
    native: Unit,
}

/// Per-field conversions for one platform
#[derive(Debug, Clone)]
pub struct UnitConverter {
    platform: Platform,
    conversions: HashMap<&'static str, Conversion>,
}

impl UnitConverter {
    /// Create a converter with no registered fields
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            conversions: HashMap::new(),
        }
    }

    /// Register the canonical and native unit of a field
    pub fn register(&mut self, field_id: &'static str, canonical: Unit, native: Unit) -> Result<(), UnitError> {
        if canonical.dimension() != native.dimension() {
            return Err(UnitError::Incompatible { from: native, to: canonical });
        }
        self.conversions.insert(field_id, Conversion { canonical, native });
        Ok(())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn canonical_unit(&self, field_id: &str) -> Option<Unit> {
        self.conversions.get(field_id).map(|c| c.canonical)
    }

    pub fn native_unit(&self, field_id: &str) -> Option<Unit> {
        self.conversions.get(field_id).map(|c| c.native)
    }

    /// Field ids with a registered conversion
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.conversions.keys().copied()
    }

    fn conversion(&self, field_id: &str) -> Result<Conversion, HealthError> {
        self.conversions.get(field_id).copied().ok_or_else(|| {
            HealthError::unsupported_unit(field_id, format!("no conversion registered on {}", self.platform))
        })
    }

    /// Convert a platform value reported in `platform_unit` to the field's canonical unit
    pub fn to_canonical(&self, field_id: &str, platform_value: f64, platform_unit: &str) -> Result<f64, HealthError> {
        let conversion = self.conversion(field_id)?;
        let unit = Unit::parse_native(self.platform, platform_unit)
            .ok_or_else(|| HealthError::unsupported_unit(field_id, UnitError::Unrecognized(platform_unit.to_string()).to_string()))?;
        if unit.dimension() != conversion.native.dimension() {
            return Err(HealthError::unsupported_unit(
                field_id,
                UnitError::Incompatible { from: unit, to: conversion.canonical }.to_string(),
            ));
        }
        convert(platform_value, unit, conversion.canonical)
            .map_err(|e| HealthError::unsupported_unit(field_id, e.to_string()))
    }

    /// Convert a value already in the field's native unit to the canonical unit
    pub fn native_to_canonical(&self, field_id: &str, native_value: f64) -> Result<f64, HealthError> {
        let conversion = self.conversion(field_id)?;
        convert(native_value, conversion.native, conversion.canonical)
            .map_err(|e| HealthError::unsupported_unit(field_id, e.to_string()))
    }

    /// Convert a canonical value to the field's native unit
    pub fn from_canonical(&self, field_id: &str, canonical_value: f64) -> Result<(f64, Unit), HealthError> {
        let conversion = self.conversion(field_id)?;
        let value = convert(canonical_value, conversion.canonical, conversion.native)
            .map_err(|e| HealthError::unsupported_unit(field_id, e.to_string()))?;
        Ok((value, conversion.native))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn test_length_mass_volume_conversions() {
        assert_eq!(convert(175.0, Unit::Centimeter, Unit::Meter).unwrap(), 1.75);
        assert_eq!(convert(1.75, Unit::Meter, Unit::Centimeter).unwrap(), 175.0);
        assert!(approx(convert(500.0, Unit::Milliliter, Unit::Liter).unwrap(), 0.5));
        assert!(approx(convert(2.5, Unit::Kilogram, Unit::Gram).unwrap(), 2500.0));
        assert!(approx(convert(1.0, Unit::Milligram, Unit::Microgram).unwrap(), 1000.0));
    }

    #[test]
    fn test_temperature_uses_offset() {
        assert!(approx(convert(98.6, Unit::Fahrenheit, Unit::Celsius).unwrap(), 37.0));
        assert!(approx(convert(37.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 98.6));
    }

    #[test]
    fn test_ratio_and_glucose() {
        assert!(approx(convert(0.97, Unit::Fraction, Unit::Percent).unwrap(), 97.0));
        assert!(approx(convert(5.5, Unit::MillimolePerLiter, Unit::MilligramPerDeciliter).unwrap(), 99.0858));
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        assert_eq!(
            convert(1.0, Unit::Meter, Unit::Kilogram),
            Err(UnitError::Incompatible { from: Unit::Meter, to: Unit::Kilogram })
        );
    }

    #[test]
    fn test_parse_dialects() {
        assert_eq!(Unit::parse("°C"), Some(Unit::Celsius));
        assert_eq!(Unit::parse("bpm"), Some(Unit::PerMinute));
        assert_eq!(Unit::parse("steps"), Some(Unit::Count));
        assert_eq!(Unit::parse("points"), None);

        assert_eq!(Unit::parse_native(Platform::Android, "meters"), Some(Unit::Meter));
        assert_eq!(Unit::parse_native(Platform::Android, "percent"), Some(Unit::Percent));
        assert_eq!(Unit::parse_native(Platform::Ios, "%"), Some(Unit::Fraction));
        assert_eq!(Unit::parse_native(Platform::Ios, "count/min"), Some(Unit::PerMinute));
        assert_eq!(Unit::parse_native(Platform::Ios, "degC"), Some(Unit::Celsius));
    }

    #[test]
    fn test_converter_round_trip() {
        let mut converter = UnitConverter::new(Platform::Android);
        converter.register("height", Unit::Centimeter, Unit::Meter).unwrap();
        converter.register("hydration", Unit::Milliliter, Unit::Liter).unwrap();
        converter.register("weight", Unit::Kilogram, Unit::Kilogram).unwrap();

        for (field, value) in [("height", 170.0), ("hydration", 500.0), ("weight", 70.0)] {
            let (native, unit) = converter.from_canonical(field, value).unwrap();
            let back = converter.to_canonical(field, native, unit.health_connect_name().unwrap()).unwrap();
            assert!(approx(back, value), "{}: {} != {}", field, back, value);
        }
    }

    #[test]
    fn test_converter_accepts_other_units_of_the_same_dimension() {
        let mut converter = UnitConverter::new(Platform::Android);
        converter.register("activeCaloriesBurned", Unit::Kilocalorie, Unit::Kilocalorie).unwrap();

        let kcal = converter.to_canonical("activeCaloriesBurned", 4.184, "kilojoules").unwrap();
        assert!(approx(kcal, 1.0));
    }

    #[test]
    fn test_converter_failures() {
        let mut converter = UnitConverter::new(Platform::Ios);
        assert!(converter.register("height", Unit::Centimeter, Unit::Kilogram).is_err());
        converter.register("height", Unit::Centimeter, Unit::Meter).unwrap();

        assert!(matches!(
            converter.from_canonical("steps", 10.0),
            Err(HealthError::UnsupportedUnit { .. })
        ));
        assert!(matches!(
            converter.to_canonical("height", 70.0, "kg"),
            Err(HealthError::UnsupportedUnit { .. })
        ));
        assert!(matches!(
            converter.to_canonical("height", 1.0, "furlongs"),
            Err(HealthError::UnsupportedUnit { .. })
        ));
    }
}
