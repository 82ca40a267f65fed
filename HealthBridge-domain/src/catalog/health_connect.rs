//! Health Connect field catalog

use super::category::Category;
use super::descriptor::{FieldDescriptor, FieldKind};

/// Menstruation flow: unknown, light, medium, heavy
pub const MENSTRUATION_FLOW_CODES: &[i64] = &[0, 1, 2, 3];

/// Ovulation test result: inconclusive, positive, high, negative
pub const OVULATION_TEST_CODES: &[i64] = &[0, 1, 2, 3];

/// Sexual activity protection: unknown, protected, unprotected
pub const SEXUAL_ACTIVITY_CODES: &[i64] = &[0, 1, 2];

/// Cervical mucus appearance: unknown, dry, sticky, creamy, watery, egg white, unusual
pub const CERVICAL_MUCUS_APPEARANCE_CODES: &[i64] = &[0, 1, 2, 3, 4, 5, 6];

/// Cervical mucus sensation: unknown, light, medium, heavy
pub const CERVICAL_MUCUS_SENSATION_CODES: &[i64] = &[0, 1, 2, 3];

pub fn descriptors() -> Vec<FieldDescriptor> {
    use Category::*;

    vec![
        FieldDescriptor::new("activeCaloriesBurned", "Active Calories Burned", "kcal", Activity, 1)
            .writable()
            .range(0.0, 10000.0)
            .decimals(0),
        FieldDescriptor::new("basalBodyTemperature", "Basal Body Temperature", "°C", Body, 2)
            .writable()
            .range(35.0, 42.0)
            .decimals(2),
        FieldDescriptor::new("basalMetabolicRate", "Basal Metabolic Rate", "kcal/day", Body, 3)
            .writable()
            .range(0.0, 10000.0)
            .decimals(0),
        FieldDescriptor::new("bloodGlucose", "Blood Glucose", "mg/dL", Vitals, 4)
            .writable()
            .range(20.0, 600.0)
            .decimals(0),
        FieldDescriptor::new("bloodPressure", "Blood Pressure", "mmHg", Vitals, 5)
            .writable()
            .kind(FieldKind::BloodPressure),
        FieldDescriptor::new("bodyFat", "Body Fat Percentage", "%", Body, 6)
            .writable()
            .range(0.0, 100.0)
            .decimals(1),
        FieldDescriptor::new("bodyTemperature", "Body Temperature", "°C", Vitals, 7)
            .writable()
            .range(35.0, 42.0)
            .decimals(1),
        FieldDescriptor::new("boneMass", "Bone Mass", "kg", Body, 8)
            .writable()
            .range(0.0, 100.0)
            .decimals(1),
        FieldDescriptor::new("cervicalMucus", "Cervical Mucus", "", Cycle, 9)
            .writable()
            .kind(FieldKind::CervicalMucus),
        FieldDescriptor::new("cyclingPedalingCadence", "Cycling Pedaling Cadence", "rpm", Activity, 10)
            .writable()
            .range(0.0, 300.0)
            .decimals(0),
        FieldDescriptor::new("distance", "Distance", "m", Activity, 11)
            .writable()
            .range(0.0, 1_000_000.0)
            .decimals(0),
        FieldDescriptor::new("elevationGained", "Elevation Gained", "m", Activity, 12)
            .writable()
            .range(0.0, 10000.0)
            .decimals(0),
        FieldDescriptor::new("exerciseSession", "Exercise Session", "min", Activity, 13)
            .writable()
            .range(1.0, 1440.0)
            .decimals(0),
        FieldDescriptor::new("floorsClimbed", "Floors Climbed", "floors", Activity, 14)
            .writable()
            .range(0.0, 1000.0)
            .decimals(0),
        FieldDescriptor::new("heartRate", "Heart Rate", "bpm", Heart, 15)
            .writable()
            .range(1.0, 300.0)
            .decimals(0),
        FieldDescriptor::new("height", "Height", "cm", Body, 16)
            .writable()
            .range(0.0, 300.0)
            .decimals(0),
        FieldDescriptor::new("hydration", "Hydration", "ml", Nutrition, 17)
            .writable()
            .range(0.0, 10000.0)
            .decimals(0),
        FieldDescriptor::new("leanBodyMass", "Lean Body Mass", "kg", Body, 18)
            .writable()
            .range(0.0, 500.0)
            .decimals(1),
        FieldDescriptor::new("menstruationFlow", "Menstruation Flow", "", Cycle, 19)
            .writable()
            .kind(FieldKind::Enumerated(MENSTRUATION_FLOW_CODES)),
        FieldDescriptor::new("menstruationPeriod", "Menstruation Period", "", Cycle, 20)
            .writable()
            .kind(FieldKind::Interval),
        FieldDescriptor::new("nutrition", "Nutrition", "kcal", Nutrition, 21)
            .writable()
            .range(0.0, 100_000.0)
            .decimals(0),
        FieldDescriptor::new("ovulationTest", "Ovulation Test", "", Cycle, 22)
            .writable()
            .kind(FieldKind::Enumerated(OVULATION_TEST_CODES)),
        FieldDescriptor::new("oxygenSaturation", "Oxygen Saturation", "%", Vitals, 23)
            .writable()
            .range(0.0, 100.0)
            .decimals(0),
        FieldDescriptor::new("power", "Power", "W", Activity, 24)
            .writable()
            .range(0.0, 2000.0)
            .decimals(0),
        FieldDescriptor::new("respiratoryRate", "Respiratory Rate", "breaths/min", Respiratory, 25)
            .writable()
            .range(0.0, 100.0)
            .decimals(0),
        FieldDescriptor::new("restingHeartRate", "Resting Heart Rate", "bpm", Heart, 26)
            .writable()
            .range(1.0, 300.0)
            .decimals(0),
        FieldDescriptor::new("sexualActivity", "Sexual Activity", "", Other, 27)
            .writable()
            .kind(FieldKind::Enumerated(SEXUAL_ACTIVITY_CODES)),
        FieldDescriptor::new("sleepSession", "Sleep", "h", Sleep, 28)
            .writable()
            .range(0.0, 24.0)
            .decimals(1),
        FieldDescriptor::new("speed", "Speed", "m/s", Activity, 29)
            .writable()
            .range(0.0, 100.0)
            .decimals(1),
        FieldDescriptor::new("stepsCadence", "Steps Cadence", "steps/min", Walking, 30)
            .writable()
            .range(0.0, 300.0)
            .decimals(0),
        FieldDescriptor::new("steps", "Steps", "steps", Activity, 31)
            .writable()
            .range(0.0, 100_000.0)
            .decimals(0),
        FieldDescriptor::new("totalCaloriesBurned", "Total Calories Burned", "kcal", Activity, 32)
            .writable()
            .range(0.0, 20000.0)
            .decimals(0),
        FieldDescriptor::new("vo2Max", "VO2 Max", "ml/kg/min", Heart, 33)
            .writable()
            .range(0.0, 100.0)
            .decimals(1),
        FieldDescriptor::new("weight", "Weight", "kg", Body, 34)
            .writable()
            .range(0.0, 500.0)
            .decimals(1),
        FieldDescriptor::new("wheelchairPushes", "Wheelchair Pushes", "times", Activity, 35)
            .writable()
            .range(0.0, 100_000.0)
            .decimals(0),
        FieldDescriptor::new("writeExerciseRoute", "Exercise Route", "", Activity, 36),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_six_fields_in_source_order() {
        let fields = descriptors();
        assert_eq!(fields.len(), 36);
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(field.display_order, i as u32 + 1, "{}", field.id);
        }
    }

    #[test]
    fn test_documented_ranges() {
        let fields = descriptors();
        let range = |id: &str| {
            let field = fields.iter().find(|f| f.id == id).unwrap();
            (field.min_value, field.max_value)
        };

        assert_eq!(range("height"), (Some(0.0), Some(300.0)));
        assert_eq!(range("bodyTemperature"), (Some(35.0), Some(42.0)));
        assert_eq!(range("bodyFat"), (Some(0.0), Some(100.0)));
        assert_eq!(range("heartRate"), (Some(1.0), Some(300.0)));
    }
}
