//! HealthKit type identifiers used by the bridge

// Body measurements
pub const BODY_MASS_INDEX: &str = "HKQuantityTypeIdentifierBodyMassIndex";
pub const BASAL_BODY_TEMPERATURE: &str = "HKQuantityTypeIdentifierBasalBodyTemperature";
pub const WRIST_TEMPERATURE: &str = "HKQuantityTypeIdentifierAppleSleepingWristTemperature";
pub const LEAN_BODY_MASS: &str = "HKQuantityTypeIdentifierLeanBodyMass";
pub const HEIGHT: &str = "HKQuantityTypeIdentifierHeight";
pub const BODY_FAT_PERCENTAGE: &str = "HKQuantityTypeIdentifierBodyFatPercentage";
pub const BODY_MASS: &str = "HKQuantityTypeIdentifierBodyMass";
pub const WAIST_CIRCUMFERENCE: &str = "HKQuantityTypeIdentifierWaistCircumference";

// Activity
pub const ACTIVE_ENERGY_BURNED: &str = "HKQuantityTypeIdentifierActiveEnergyBurned";
pub const BASAL_ENERGY_BURNED: &str = "HKQuantityTypeIdentifierBasalEnergyBurned";
pub const DISTANCE_WALKING_RUNNING: &str = "HKQuantityTypeIdentifierDistanceWalkingRunning";
pub const DISTANCE_CYCLING: &str = "HKQuantityTypeIdentifierDistanceCycling";
pub const DISTANCE_WHEELCHAIR: &str = "HKQuantityTypeIdentifierDistanceWheelchair";
pub const DISTANCE_SWIMMING: &str = "HKQuantityTypeIdentifierDistanceSwimming";
pub const DISTANCE_DOWNHILL_SNOW_SPORTS: &str = "HKQuantityTypeIdentifierDistanceDownhillSnowSports";
pub const APPLE_EXERCISE_TIME: &str = "HKQuantityTypeIdentifierAppleExerciseTime";
pub const APPLE_MOVE_TIME: &str = "HKQuantityTypeIdentifierAppleMoveTime";
pub const APPLE_STAND_TIME: &str = "HKQuantityTypeIdentifierAppleStandTime";
pub const CYCLING_CADENCE: &str = "HKQuantityTypeIdentifierCyclingCadence";
pub const CYCLING_POWER: &str = "HKQuantityTypeIdentifierCyclingPower";
pub const CYCLING_SPEED: &str = "HKQuantityTypeIdentifierCyclingSpeed";
pub const CYCLING_FUNCTIONAL_THRESHOLD_POWER: &str = "HKQuantityTypeIdentifierCyclingFunctionalThresholdPower";
pub const RUNNING_POWER: &str = "HKQuantityTypeIdentifierRunningPower";
pub const RUNNING_SPEED: &str = "HKQuantityTypeIdentifierRunningSpeed";
pub const PUSH_COUNT: &str = "HKQuantityTypeIdentifierPushCount";
pub const STEP_COUNT: &str = "HKQuantityTypeIdentifierStepCount";
pub const FLIGHTS_CLIMBED: &str = "HKQuantityTypeIdentifierFlightsClimbed";
pub const VO2_MAX: &str = "HKQuantityTypeIdentifierVO2Max";
pub const HEART_RATE: &str = "HKQuantityTypeIdentifierHeartRate";
pub const SWIMMING_STROKE_COUNT: &str = "HKQuantityTypeIdentifierSwimmingStrokeCount";
pub const UNDERWATER_DEPTH: &str = "HKQuantityTypeIdentifierUnderwaterDepth";

// Vitals
pub const BLOOD_PRESSURE: &str = "HKCorrelationTypeIdentifierBloodPressure";
pub const BLOOD_PRESSURE_SYSTOLIC: &str = "HKQuantityTypeIdentifierBloodPressureSystolic";
pub const BLOOD_PRESSURE_DIASTOLIC: &str = "HKQuantityTypeIdentifierBloodPressureDiastolic";
pub const BLOOD_GLUCOSE: &str = "HKQuantityTypeIdentifierBloodGlucose";
pub const MENSTRUAL_FLOW: &str = "HKCategoryTypeIdentifierMenstrualFlow";
pub const RESPIRATORY_RATE: &str = "HKQuantityTypeIdentifierRespiratoryRate";
pub const OXYGEN_SATURATION: &str = "HKQuantityTypeIdentifierOxygenSaturation";

// Nutrition
pub const DIETARY_CAFFEINE: &str = "HKQuantityTypeIdentifierDietaryCaffeine";
pub const DIETARY_POTASSIUM: &str = "HKQuantityTypeIdentifierDietaryPotassium";
pub const DIETARY_CALCIUM: &str = "HKQuantityTypeIdentifierDietaryCalcium";
pub const DIETARY_CHROMIUM: &str = "HKQuantityTypeIdentifierDietaryChromium";
pub const DIETARY_SELENIUM: &str = "HKQuantityTypeIdentifierDietarySelenium";
pub const DIETARY_PROTEIN: &str = "HKQuantityTypeIdentifierDietaryProtein";
pub const DIETARY_THIAMIN: &str = "HKQuantityTypeIdentifierDietaryThiamin";
pub const DIETARY_NIACIN: &str = "HKQuantityTypeIdentifierDietaryNiacin";
pub const DIETARY_SODIUM: &str = "HKQuantityTypeIdentifierDietarySodium";
pub const DIETARY_PANTOTHENIC_ACID: &str = "HKQuantityTypeIdentifierDietaryPantothenicAcid";
pub const DIETARY_BIOTIN: &str = "HKQuantityTypeIdentifierDietaryBiotin";
pub const DIETARY_VITAMIN_A: &str = "HKQuantityTypeIdentifierDietaryVitaminA";
pub const DIETARY_RIBOFLAVIN: &str = "HKQuantityTypeIdentifierDietaryRiboflavin";
pub const DIETARY_VITAMIN_B6: &str = "HKQuantityTypeIdentifierDietaryVitaminB6";
pub const DIETARY_VITAMIN_B12: &str = "HKQuantityTypeIdentifierDietaryVitaminB12";
pub const DIETARY_VITAMIN_C: &str = "HKQuantityTypeIdentifierDietaryVitaminC";
pub const DIETARY_VITAMIN_D: &str = "HKQuantityTypeIdentifierDietaryVitaminD";
pub const DIETARY_VITAMIN_E: &str = "HKQuantityTypeIdentifierDietaryVitaminE";
pub const DIETARY_VITAMIN_K: &str = "HKQuantityTypeIdentifierDietaryVitaminK";
pub const DIETARY_MAGNESIUM: &str = "HKQuantityTypeIdentifierDietaryMagnesium";
pub const DIETARY_MANGANESE: &str = "HKQuantityTypeIdentifierDietaryManganese";
pub const DIETARY_MOLYBDENUM: &str = "HKQuantityTypeIdentifierDietaryMolybdenum";
pub const DIETARY_IODINE: &str = "HKQuantityTypeIdentifierDietaryIodine";
pub const DIETARY_PHOSPHORUS: &str = "HKQuantityTypeIdentifierDietaryPhosphorus";
pub const DIETARY_ZINC: &str = "HKQuantityTypeIdentifierDietaryZinc";
pub const DIETARY_FAT_MONOUNSATURATED: &str = "HKQuantityTypeIdentifierDietaryFatMonounsaturated";
pub const DIETARY_CHLORIDE: &str = "HKQuantityTypeIdentifierDietaryChloride";
pub const DIETARY_FIBER: &str = "HKQuantityTypeIdentifierDietaryFiber";
pub const DIETARY_CHOLESTEROL: &str = "HKQuantityTypeIdentifierDietaryCholesterol";
pub const DIETARY_SUGAR: &str = "HKQuantityTypeIdentifierDietarySugar";
pub const DIETARY_WATER: &str = "HKQuantityTypeIdentifierDietaryWater";
pub const DIETARY_ENERGY_CONSUMED: &str = "HKQuantityTypeIdentifierDietaryEnergyConsumed";
pub const DIETARY_FAT_TOTAL: &str = "HKQuantityTypeIdentifierDietaryFatTotal";
pub const DIETARY_FAT_POLYUNSATURATED: &str = "HKQuantityTypeIdentifierDietaryFatPolyunsaturated";
pub const DIETARY_CARBOHYDRATES: &str = "HKQuantityTypeIdentifierDietaryCarbohydrates";
pub const DIETARY_IRON: &str = "HKQuantityTypeIdentifierDietaryIron";
pub const DIETARY_COPPER: &str = "HKQuantityTypeIdentifierDietaryCopper";
pub const DIETARY_FAT_SATURATED: &str = "HKQuantityTypeIdentifierDietaryFatSaturated";
pub const DIETARY_FOLATE: &str = "HKQuantityTypeIdentifierDietaryFolate";

// Respiratory
pub const INHALER_USAGE: &str = "HKQuantityTypeIdentifierInhalerUsage";
pub const PEAK_EXPIRATORY_FLOW_RATE: &str = "HKQuantityTypeIdentifierPeakExpiratoryFlowRate";
pub const FORCED_EXPIRATORY_VOLUME_1: &str = "HKQuantityTypeIdentifierForcedExpiratoryVolume1";
pub const FORCED_VITAL_CAPACITY: &str = "HKQuantityTypeIdentifierForcedVitalCapacity";

// Symptoms
pub const COUGHING: &str = "HKCategoryTypeIdentifierCoughing";
pub const SORE_THROAT: &str = "HKCategoryTypeIdentifierSoreThroat";
pub const HOT_FLASHES: &str = "HKCategoryTypeIdentifierHotFlashes";
pub const DIZZINESS: &str = "HKCategoryTypeIdentifierDizziness";
pub const CHILLS: &str = "HKCategoryTypeIdentifierChills";
pub const DIARRHEA: &str = "HKCategoryTypeIdentifierDiarrhea";
pub const DRY_SKIN: &str = "HKCategoryTypeIdentifierDrySkin";
pub const MOOD_CHANGES: &str = "HKCategoryTypeIdentifierMoodChanges";
pub const MEMORY_LAPSE: &str = "HKCategoryTypeIdentifierMemoryLapse";
pub const CHEST_TIGHTNESS_OR_PAIN: &str = "HKCategoryTypeIdentifierChestTightnessOrPain";
pub const HEARTBURN: &str = "HKCategoryTypeIdentifierHeartburn";
pub const SKIPPED_HEARTBEAT: &str = "HKCategoryTypeIdentifierSkippedHeartbeat";
pub const LOWER_BACK_PAIN: &str = "HKCategoryTypeIdentifierLowerBackPain";
pub const PELVIC_PAIN: &str = "HKCategoryTypeIdentifierPelvicPain";
pub const FAINTING: &str = "HKCategoryTypeIdentifierFainting";
pub const APPETITE_CHANGES: &str = "HKCategoryTypeIdentifierAppetiteChanges";
pub const NIGHT_SWEATS: &str = "HKCategoryTypeIdentifierNightSweats";
pub const SLEEP_CHANGES: &str = "HKCategoryTypeIdentifierSleepChanges";
pub const SHORTNESS_OF_BREATH: &str = "HKCategoryTypeIdentifierShortnessOfBreath";
pub const GENERALIZED_BODY_ACHE: &str = "HKCategoryTypeIdentifierGeneralizedBodyAche";
pub const HAIR_LOSS: &str = "HKCategoryTypeIdentifierHairLoss";
pub const NAUSEA: &str = "HKCategoryTypeIdentifierNausea";
pub const HEADACHE: &str = "HKCategoryTypeIdentifierHeadache";
pub const BREAST_PAIN: &str = "HKCategoryTypeIdentifierBreastPain";
pub const BLADDER_INCONTINENCE: &str = "HKCategoryTypeIdentifierBladderIncontinence";
pub const FEVER: &str = "HKCategoryTypeIdentifierFever";
pub const FATIGUE: &str = "HKCategoryTypeIdentifierFatigue";
pub const RUNNY_NOSE: &str = "HKCategoryTypeIdentifierRunnyNose";
pub const RAPID_POUNDING_OR_FLUTTERING_HEARTBEAT: &str = "HKCategoryTypeIdentifierRapidPoundingOrFlutteringHeartbeat";
pub const ABDOMINAL_CRAMPS: &str = "HKCategoryTypeIdentifierAbdominalCramps";
pub const BLOATING: &str = "HKCategoryTypeIdentifierBloating";
pub const CONSTIPATION: &str = "HKCategoryTypeIdentifierConstipation";
pub const LOSS_OF_TASTE: &str = "HKCategoryTypeIdentifierLossOfTaste";
pub const WHEEZING: &str = "HKCategoryTypeIdentifierWheezing";
pub const LOSS_OF_SMELL: &str = "HKCategoryTypeIdentifierLossOfSmell";
pub const VOMITING: &str = "HKCategoryTypeIdentifierVomiting";
pub const SINUS_CONGESTION: &str = "HKCategoryTypeIdentifierSinusCongestion";
pub const VAGINAL_DRYNESS: &str = "HKCategoryTypeIdentifierVaginalDryness";
pub const ACNE: &str = "HKCategoryTypeIdentifierAcne";

// Mental wellbeing
pub const MINDFUL_SESSION: &str = "HKCategoryTypeIdentifierMindfulSession";
pub const TIME_IN_DAYLIGHT: &str = "HKQuantityTypeIdentifierTimeInDaylight";

// Heart
pub const RESTING_HEART_RATE: &str = "HKQuantityTypeIdentifierRestingHeartRate";
pub const HEART_RATE_VARIABILITY_SDNN: &str = "HKQuantityTypeIdentifierHeartRateVariabilitySDNN";
pub const WALKING_HEART_RATE_AVERAGE: &str = "HKQuantityTypeIdentifierWalkingHeartRateAverage";

// Hearing
pub const HEADPHONE_AUDIO_EXPOSURE: &str = "HKQuantityTypeIdentifierHeadphoneAudioExposure";
pub const ENVIRONMENTAL_AUDIO_EXPOSURE: &str = "HKQuantityTypeIdentifierEnvironmentalAudioExposure";
pub const ENVIRONMENTAL_SOUND_REDUCTION: &str = "HKQuantityTypeIdentifierEnvironmentalSoundReduction";

// Mobility
pub const RUNNING_STRIDE_LENGTH: &str = "HKQuantityTypeIdentifierRunningStrideLength";
pub const STAIR_DESCENT_SPEED: &str = "HKQuantityTypeIdentifierStairDescentSpeed";
pub const STAIR_ASCENT_SPEED: &str = "HKQuantityTypeIdentifierStairAscentSpeed";
pub const RUNNING_VERTICAL_OSCILLATION: &str = "HKQuantityTypeIdentifierRunningVerticalOscillation";
pub const RUNNING_GROUND_CONTACT_TIME: &str = "HKQuantityTypeIdentifierRunningGroundContactTime";
pub const WALKING_SPEED: &str = "HKQuantityTypeIdentifierWalkingSpeed";
pub const WALKING_ASYMMETRY_PERCENTAGE: &str = "HKQuantityTypeIdentifierWalkingAsymmetryPercentage";
pub const WALKING_STEP_LENGTH: &str = "HKQuantityTypeIdentifierWalkingStepLength";

// Other
pub const INSULIN_DELIVERY: &str = "HKQuantityTypeIdentifierInsulinDelivery";
pub const BLOOD_ALCOHOL_CONTENT: &str = "HKQuantityTypeIdentifierBloodAlcoholContent";
pub const TOOTHBRUSHING_EVENT: &str = "HKCategoryTypeIdentifierToothbrushingEvent";
pub const HANDWASHING_EVENT: &str = "HKCategoryTypeIdentifierHandwashingEvent";
pub const WATER_TEMPERATURE: &str = "HKQuantityTypeIdentifierWaterTemperature";
pub const SEXUAL_ACTIVITY: &str = "HKCategoryTypeIdentifierSexualActivity";
pub const NUMBER_OF_TIMES_FALLEN: &str = "HKQuantityTypeIdentifierNumberOfTimesFallen";
