//! HealthKit field catalog

use super::category::Category;
use super::descriptor::{FieldDescriptor, FieldKind};

/// HKCategoryValueSeverity: unspecified, not present, mild, moderate, severe
pub const SYMPTOM_SEVERITY_CODES: &[i64] = &[0, 1, 2, 3, 4];

/// HKCategoryValueMenstrualFlow: unspecified, light, medium, heavy, none
pub const MENSTRUAL_FLOW_CODES: &[i64] = &[1, 2, 3, 4, 5];

/// Protection used: unknown, protected, unprotected
pub const SEXUAL_ACTIVITY_CODES: &[i64] = &[0, 1, 2];

pub fn descriptors() -> Vec<FieldDescriptor> {
    use Category::*;

    vec![
        // Activity
        FieldDescriptor::new("nikeFuel", "NikeFuel", "points", Activity, 1),
        FieldDescriptor::new("activity", "Activity", "", Activity, 2),
        FieldDescriptor::new("activeEnergy", "Active Energy", "kcal", Activity, 3).decimals(0),
        FieldDescriptor::new("walkingRunningDistance", "Walking + Running Distance", "km", Activity, 4)
            .decimals(2),
        FieldDescriptor::new("exerciseTime", "Exercise Minutes", "min", Activity, 5),
        FieldDescriptor::new("cyclingCadence", "Cycling Cadence", "rpm", Activity, 6),
        FieldDescriptor::new("cyclingPower", "Cycling Power", "W", Activity, 7),
        FieldDescriptor::new("cyclingSpeed", "Cycling Speed", "km/h", Activity, 8),
        FieldDescriptor::new("standHours", "Stand Hours", "h", Activity, 9),
        FieldDescriptor::new("standMinutes", "Stand Minutes", "min", Activity, 10),
        FieldDescriptor::new("downhillSnowSportsDistance", "Downhill Snow Sports Distance", "km", Activity, 11),
        FieldDescriptor::new("pushCount", "Pushes", "times", Activity, 12),
        FieldDescriptor::new("moveTime", "Move Minutes", "min", Activity, 13),
        FieldDescriptor::new("runningPower", "Running Power", "W", Activity, 14),
        FieldDescriptor::new("runningSpeed", "Running Speed", "km/h", Activity, 15),
        FieldDescriptor::new("workout", "Workouts", "", Activity, 16),
        FieldDescriptor::new("basalEnergyBurned", "Resting Energy", "kcal", Activity, 17).decimals(0),
        FieldDescriptor::new("swimmingDistance", "Swimming Distance", "m", Activity, 18),
        FieldDescriptor::new("functionalThresholdPower", "Cycling Functional Threshold Power", "W", Activity, 19),
        FieldDescriptor::new("cyclingDistance", "Cycling Distance", "km", Activity, 20).decimals(2),
        FieldDescriptor::new("wheelchairDistance", "Wheelchair Distance", "km", Activity, 21),
        FieldDescriptor::new("flightsClimbed", "Flights Climbed", "floors", Activity, 22).decimals(0),
        FieldDescriptor::new("cardioFitness", "Cardio Fitness", "ml/kg/min", Activity, 23).decimals(1),
        FieldDescriptor::new("heartRate", "Heart Rate Samples", "bpm", Activity, 24).decimals(0),
        FieldDescriptor::new("physicalEffort", "Physical Effort", "", Activity, 25),
        FieldDescriptor::new("swimmingStrokeCount", "Swimming Strokes", "times", Activity, 26),
        FieldDescriptor::new("underwaterDepth", "Underwater Depth", "m", Activity, 27),
        FieldDescriptor::new("steps", "Steps", "steps", Activity, 28).range(0.0, 100_000.0).decimals(0),

        // Vitals
        FieldDescriptor::new("bloodPressure", "Blood Pressure", "mmHg", Vitals, 1)
            .writable()
            .kind(FieldKind::BloodPressure),
        FieldDescriptor::new("bloodGlucose", "Blood Glucose", "mg/dL", Vitals, 2)
            .writable()
            .range(20.0, 600.0)
            .decimals(0),
        FieldDescriptor::new("menstruation", "Menstruation", "", Vitals, 3)
            .writable()
            .kind(FieldKind::Enumerated(MENSTRUAL_FLOW_CODES)),
        FieldDescriptor::new("respiratoryRate", "Respiratory Rate", "breaths/min", Vitals, 4).decimals(0),
        FieldDescriptor::new("oxygenSaturation", "Blood Oxygen", "%", Vitals, 5).decimals(0),
        FieldDescriptor::new("heartRateVital", "Heart Rate", "bpm", Vitals, 6).decimals(0),
        FieldDescriptor::new("bodyTemperature", "Body Temperature", "°C", Vitals, 7)
            .writable()
            .range(35.0, 42.0)
            .decimals(1),

        // Nutrition
        FieldDescriptor::new("caffeine", "Caffeine", "mg", Nutrition, 1).writable().at_least(0.0),
        FieldDescriptor::new("potassium", "Potassium", "mg", Nutrition, 2).writable().at_least(0.0),
        FieldDescriptor::new("calcium", "Calcium", "mg", Nutrition, 3).writable().at_least(0.0),
        FieldDescriptor::new("chromium", "Chromium", "μg", Nutrition, 4).writable().at_least(0.0),
        FieldDescriptor::new("selenium", "Selenium", "μg", Nutrition, 5).writable().at_least(0.0),
        FieldDescriptor::new("protein", "Protein", "g", Nutrition, 6).writable().at_least(0.0),
        FieldDescriptor::new("thiamin", "Thiamin", "mg", Nutrition, 7).writable().at_least(0.0),
        FieldDescriptor::new("niacin", "Niacin", "mg", Nutrition, 8).writable().at_least(0.0),
        FieldDescriptor::new("sodium", "Sodium", "mg", Nutrition, 9).writable().at_least(0.0),
        FieldDescriptor::new("pantothenicAcid", "Pantothenic Acid", "mg", Nutrition, 10)
            .writable()
            .at_least(0.0),
        FieldDescriptor::new("biotin", "Biotin", "μg", Nutrition, 11).writable().at_least(0.0),
        FieldDescriptor::new("vitaminA", "Vitamin A", "μg", Nutrition, 12).writable().at_least(0.0),
        FieldDescriptor::new("vitaminB2", "Vitamin B2", "mg", Nutrition, 13).writable().at_least(0.0),
        FieldDescriptor::new("vitaminB6", "Vitamin B6", "mg", Nutrition, 14).writable().at_least(0.0),
        FieldDescriptor::new("vitaminB12", "Vitamin B12", "μg", Nutrition, 15).writable().at_least(0.0),
        FieldDescriptor::new("vitaminC", "Vitamin C", "mg", Nutrition, 16).writable().at_least(0.0),
        FieldDescriptor::new("vitaminD", "Vitamin D", "μg", Nutrition, 17).writable().at_least(0.0),
        FieldDescriptor::new("vitaminE", "Vitamin E", "mg", Nutrition, 18).writable().at_least(0.0),
        FieldDescriptor::new("vitaminK", "Vitamin K", "μg", Nutrition, 19).writable().at_least(0.0),
        FieldDescriptor::new("magnesium", "Magnesium", "mg", Nutrition, 20).writable().at_least(0.0),
        FieldDescriptor::new("manganese", "Manganese", "mg", Nutrition, 21).writable().at_least(0.0),
        FieldDescriptor::new("molybdenum", "Molybdenum", "μg", Nutrition, 22).writable().at_least(0.0),
        FieldDescriptor::new("iodine", "Iodine", "μg", Nutrition, 23).writable().at_least(0.0),
        FieldDescriptor::new("phosphorus", "Phosphorus", "mg", Nutrition, 24).writable().at_least(0.0),
        FieldDescriptor::new("zinc", "Zinc", "mg", Nutrition, 25).writable().at_least(0.0),
        FieldDescriptor::new("monounsaturatedFat", "Monounsaturated Fat", "g", Nutrition, 26)
            .writable()
            .at_least(0.0),
        FieldDescriptor::new("chloride", "Chloride", "mg", Nutrition, 27).writable().at_least(0.0),
        FieldDescriptor::new("dietaryFiber", "Fiber", "g", Nutrition, 28).writable().at_least(0.0),
        FieldDescriptor::new("dietaryCholesterol", "Dietary Cholesterol", "mg", Nutrition, 29)
            .writable()
            .at_least(0.0),
        FieldDescriptor::new("dietarySugar", "Dietary Sugar", "g", Nutrition, 30).writable().at_least(0.0),
        FieldDescriptor::new("water", "Water", "ml", Nutrition, 31)
            .writable()
            .range(0.0, 10000.0)
            .decimals(0),
        FieldDescriptor::new("dietaryEnergy", "Dietary Energy", "kcal", Nutrition, 32)
            .writable()
            .range(0.0, 100_000.0)
            .decimals(0),
        FieldDescriptor::new("totalFat", "Total Fat", "g", Nutrition, 33).writable().at_least(0.0),
        FieldDescriptor::new("polyunsaturatedFat", "Polyunsaturated Fat", "g", Nutrition, 34)
            .writable()
            .at_least(0.0),
        FieldDescriptor::new("carbohydrates", "Carbohydrates", "g", Nutrition, 35).writable().at_least(0.0),
        FieldDescriptor::new("iron", "Iron", "mg", Nutrition, 36).writable().at_least(0.0),
        FieldDescriptor::new("copper", "Copper", "mg", Nutrition, 37).writable().at_least(0.0),
        FieldDescriptor::new("saturatedFat", "Saturated Fat", "g", Nutrition, 38).writable().at_least(0.0),
        FieldDescriptor::new("folate", "Folate", "μg", Nutrition, 39).writable().at_least(0.0),

        // Respiratory
        FieldDescriptor::new("respiratorySixMinuteWalk", "Six-Minute Walk", "m", Respiratory, 1),
        FieldDescriptor::new("inhalerUsage", "Inhaler Usage", "times", Respiratory, 2)
            .writable()
            .range(0.0, 100.0)
            .decimals(0),
        FieldDescriptor::new("respiratoryRateVital", "Respiratory Rate", "breaths/min", Respiratory, 3),
        FieldDescriptor::new("peakExpiratoryFlow", "Peak Expiratory Flow Rate", "L/min", Respiratory, 4),
        FieldDescriptor::new("oxygenSaturationVital", "Blood Oxygen", "%", Respiratory, 5),
        FieldDescriptor::new("cardioFitnessVital", "Cardio Fitness", "ml/kg/min", Respiratory, 6),
        FieldDescriptor::new("forcedExpiratoryVolume", "Forced Expiratory Volume, 1 sec", "L", Respiratory, 7),
        FieldDescriptor::new("forcedVitalCapacity", "Forced Vital Capacity", "L", Respiratory, 8),

        // Cycle
        FieldDescriptor::new("cycleRecord", "Cycle Log", "", Cycle, 1),

        // Symptoms
        FieldDescriptor::new("cough", "Coughing", "", Symptoms, 1)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("soreThroat", "Sore Throat", "", Symptoms, 2)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("hotFlash", "Hot Flashes", "", Symptoms, 3)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("dizziness", "Dizziness", "", Symptoms, 4)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("chills", "Chills", "", Symptoms, 5)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("diarrhea", "Diarrhea", "", Symptoms, 6)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("drySkin", "Dry Skin", "", Symptoms, 7)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("moodChanges", "Mood Changes", "", Symptoms, 8)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("memoryLapse", "Memory Lapse", "", Symptoms, 9)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("chestTightness", "Chest Tightness or Pain", "", Symptoms, 10)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("heartburn", "Heartburn", "", Symptoms, 11)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("irregularHeartbeat", "Skipped Heartbeat", "", Symptoms, 12)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("lowBackPain", "Lower Back Pain", "", Symptoms, 13)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("pelvicPain", "Pelvic Pain", "", Symptoms, 14)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("fainting", "Fainting", "", Symptoms, 15)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("appetiteChanges", "Appetite Changes", "", Symptoms, 16)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("nightSweats", "Night Sweats", "", Symptoms, 17)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("sleepChanges", "Sleep Changes", "", Symptoms, 18)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("shortnessOfBreath", "Shortness of Breath", "", Symptoms, 19)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("bodyPain", "Generalized Body Ache", "", Symptoms, 20)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("hairLoss", "Hair Loss", "", Symptoms, 21)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("nausea", "Nausea", "", Symptoms, 22)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("headache", "Headache", "", Symptoms, 23)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("breastPain", "Breast Pain", "", Symptoms, 24)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("urinaryIncontinence", "Bladder Incontinence", "", Symptoms, 25)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("fever", "Fever", "", Symptoms, 26)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("fatigue", "Fatigue", "", Symptoms, 27)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("runnyNose", "Runny Nose", "", Symptoms, 28)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("rapidHeartbeat", "Rapid, Pounding, or Fluttering Heartbeat", "", Symptoms, 29)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("abdominalBloating", "Bloating", "", Symptoms, 30)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("abdominalCramps", "Abdominal Cramps", "", Symptoms, 31)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("constipation", "Constipation", "", Symptoms, 32)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("tasteLoss", "Loss of Taste", "", Symptoms, 33)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("wheezing", "Wheezing", "", Symptoms, 34)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("smellLoss", "Loss of Smell", "", Symptoms, 35)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("vomiting", "Vomiting", "", Symptoms, 36)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("nasalCongestion", "Sinus Congestion", "", Symptoms, 37)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("vaginalDryness", "Vaginal Dryness", "", Symptoms, 38)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),
        FieldDescriptor::new("acne", "Acne", "", Symptoms, 39)
            .writable()
            .kind(FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES)),

        // Mental
        FieldDescriptor::new("depressionRisk", "Depression Risk", "", Mental, 1).writable(),
        FieldDescriptor::new("mentalExerciseTime", "Exercise Minutes", "min", Mental, 2),
        FieldDescriptor::new("mindfulMinutes", "Mindful Minutes", "min", Mental, 3)
            .writable()
            .range(0.0, 1440.0)
            .decimals(0),
        FieldDescriptor::new("mentalState", "State of Mind", "", Mental, 4).writable(),
        FieldDescriptor::new("mentalSleep", "Sleep", "h", Mental, 5).writable().range(0.0, 24.0).decimals(1),
        FieldDescriptor::new("sunlightExposure", "Time in Daylight", "min", Mental, 6)
            .writable()
            .range(0.0, 1440.0)
            .decimals(0),
        FieldDescriptor::new("anxietyRisk", "Anxiety Risk", "", Mental, 7).writable(),

        // Heart
        FieldDescriptor::new("restingHeartRate", "Resting Heart Rate", "bpm", Heart, 1).decimals(0),
        FieldDescriptor::new("heartBloodPressure", "Blood Pressure", "mmHg", Heart, 2)
            .writable()
            .kind(FieldKind::BloodPressure),
        FieldDescriptor::new("highHeartRateNotification", "High Heart Rate Notifications", "", Heart, 3),
        FieldDescriptor::new("ecg", "Electrocardiograms (ECG)", "", Heart, 4),
        FieldDescriptor::new("heartCardioFitness", "Cardio Fitness", "ml/kg/min", Heart, 5),
        FieldDescriptor::new("cardioFitnessLevel", "Cardio Fitness Notifications", "", Heart, 6),
        FieldDescriptor::new("heartRateHeart", "Heart Rate", "bpm", Heart, 7),
        FieldDescriptor::new("heartRateCount", "Heart Rate Samples", "bpm", Heart, 8),
        FieldDescriptor::new("heartRateVariability", "Heart Rate Variability", "ms", Heart, 9),
        FieldDescriptor::new("atrialFibrillation", "AFib History", "", Heart, 10),
        FieldDescriptor::new("lowHeartRateNotification", "Low Heart Rate Notifications", "", Heart, 11),
        FieldDescriptor::new("microcirculation", "Microcirculation Index", "", Heart, 12),
        FieldDescriptor::new("irregularHeartRhythmNotification", "Irregular Rhythm Notifications", "", Heart, 13),
        FieldDescriptor::new("walkingHeartRate", "Walking Heart Rate Average", "bpm", Heart, 14),

        // Body
        FieldDescriptor::new("bmi", "Body Mass Index", "", Body, 1).writable().range(10.0, 100.0).decimals(1),
        FieldDescriptor::new("glassesPrescription", "Glasses / Contacts Prescription", "", Body, 2),
        FieldDescriptor::new("basalBodyTemperature", "Basal Body Temperature", "°C", Body, 3)
            .writable()
            .range(35.0, 42.0)
            .decimals(2),
        FieldDescriptor::new("wristTemperature", "Wrist Temperature", "°C", Body, 4),
        FieldDescriptor::new("leanBodyMass", "Lean Body Mass", "kg", Body, 5),
        FieldDescriptor::new("height", "Height", "cm", Body, 6).writable().range(50.0, 250.0).decimals(0),
        FieldDescriptor::new("bodyTemperatureBody", "Body Temperature", "°C", Body, 7)
            .writable()
            .range(35.0, 42.0)
            .decimals(1),
        FieldDescriptor::new("bodyFatPercentage", "Body Fat Percentage", "%", Body, 8)
            .writable()
            .range(0.0, 100.0)
            .decimals(1),
        FieldDescriptor::new("weight", "Weight", "kg", Body, 9).writable().range(0.0, 500.0).decimals(1),
        FieldDescriptor::new("waistCircumference", "Waist Circumference", "cm", Body, 10)
            .writable()
            .range(0.0, 300.0)
            .decimals(1),
        FieldDescriptor::new("skinPotential", "Skin Potential", "mV", Body, 11),

        // Sleep
        FieldDescriptor::new("sleepData", "Sleep", "h", Sleep, 1),

        // Hearing
        FieldDescriptor::new("audiogram", "Audiograms", "", Hearing, 1),
        FieldDescriptor::new("noiseNotification", "Noise Notifications", "", Hearing, 2),
        FieldDescriptor::new("headphoneVolume", "Headphone Audio Levels", "dB", Hearing, 3),
        FieldDescriptor::new("headphoneNotification", "Headphone Notifications", "", Hearing, 4),
        FieldDescriptor::new("environmentalSoundLevel", "Environmental Sound Levels", "dB", Hearing, 5),
        FieldDescriptor::new("environmentalSoundReduction", "Environmental Sound Reduction", "dB", Hearing, 6),

        // Medication
        FieldDescriptor::new("medicationData", "Medications", "", Medication, 1).writable(),

        // Walking
        FieldDescriptor::new("walkingSixMinuteWalk", "Six-Minute Walk", "m", Walking, 1),
        FieldDescriptor::new("runningStrideLength", "Running Stride Length", "m", Walking, 2),
        FieldDescriptor::new("stairDescentSpeed", "Stair Speed: Down", "m/s", Walking, 3),
        FieldDescriptor::new("stairAscentSpeed", "Stair Speed: Up", "m/s", Walking, 4),
        FieldDescriptor::new("verticalOscillation", "Vertical Oscillation", "cm", Walking, 5),
        FieldDescriptor::new("walkingCardioFitness", "Cardio Fitness", "ml/kg/min", Walking, 6),
        FieldDescriptor::new("groundContactTime", "Ground Contact Time", "ms", Walking, 7),
        FieldDescriptor::new("walkingStability", "Walking Steadiness", "", Walking, 8),
        FieldDescriptor::new("walkingStabilityNotification", "Walking Steadiness Notifications", "", Walking, 9),
        FieldDescriptor::new("walkingSpeed", "Walking Speed", "m/s", Walking, 10),
        FieldDescriptor::new("walkingAsymmetry", "Walking Asymmetry", "%", Walking, 11),
        FieldDescriptor::new("walkingDoubleSupportTime", "Double Support Time", "ms", Walking, 12),
        FieldDescriptor::new("stepLength", "Step Length", "m", Walking, 13),

        // Other
        FieldDescriptor::new("uvExposure", "UV Index", "J/m²", Other, 1),
        FieldDescriptor::new("insulinDelivery", "Insulin Delivery", "IU", Other, 2)
            .writable()
            .range(0.0, 100.0)
            .decimals(1),
        FieldDescriptor::new("alcoholConsumption", "Alcohol Consumption", "ml", Other, 3)
            .writable()
            .range(0.0, 10000.0)
            .decimals(0),
        FieldDescriptor::new("inhalerUsageOther", "Inhaler Usage", "times", Other, 4)
            .writable()
            .range(0.0, 100.0)
            .decimals(0),
        FieldDescriptor::new("bloodAlcoholContent", "Blood Alcohol Content", "%", Other, 5),
        FieldDescriptor::new("bloodGlucoseOther", "Blood Glucose", "mg/dL", Other, 6)
            .writable()
            .range(20.0, 600.0)
            .decimals(0),
        FieldDescriptor::new("toothbrushing", "Toothbrushing", "times", Other, 7)
            .writable()
            .range(0.0, 100.0)
            .decimals(0),
        FieldDescriptor::new("handwashing", "Handwashing", "times", Other, 8)
            .writable()
            .range(0.0, 100.0)
            .decimals(0),
        FieldDescriptor::new("waterTemperature", "Water Temperature", "°C", Other, 9),
        FieldDescriptor::new("sexualActivity", "Sexual Activity", "", Other, 10)
            .writable()
            .kind(FieldKind::Enumerated(SEXUAL_ACTIVITY_CODES)),
        FieldDescriptor::new("fallCount", "Number of Times Fallen", "times", Other, 11),
        FieldDescriptor::new("sunlightExposureOther", "Time in Daylight", "min", Other, 12)
            .writable()
            .range(0.0, 1440.0)
            .decimals(0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> FieldDescriptor {
        descriptors().into_iter().find(|field| field.id == id).unwrap()
    }

    #[test]
    fn test_every_category_is_populated() {
        let fields = descriptors();
        for category in Category::ALL {
            assert!(fields.iter().any(|field| field.category == category), "{} is empty", category);
        }
    }

    #[test]
    fn test_height_and_steps_bounds() {
        let height = find("height");
        assert_eq!((height.min_value, height.max_value), (Some(50.0), Some(250.0)));
        assert_eq!(height.decimal_places, Some(0));
        assert!(height.writable);

        let steps = find("steps");
        assert_eq!((steps.min_value, steps.max_value), (Some(0.0), Some(100_000.0)));
        assert!(!steps.writable);
    }

    #[test]
    fn test_symptoms_are_severity_codes() {
        let headache = find("headache");
        assert_eq!(headache.kind, FieldKind::Enumerated(SYMPTOM_SEVERITY_CODES));
        assert!(headache.writable);
    }
}
