use crate::catalog::health_connect::{CERVICAL_MUCUS_APPEARANCE_CODES, CERVICAL_MUCUS_SENSATION_CODES};
use crate::catalog::{FieldDescriptor, FieldKind};
use crate::entities::composite::{decode_blood_pressure, decode_interval, split_cervical_mucus};
use crate::entities::RawValue;
use crate::error::ValidationError;
use crate::validation::{validate_enum, validate_numeric, BloodPressureInput};

/// Parse and validate raw user input according to the field's kind
pub fn parse_input(descriptor: &FieldDescriptor, raw: &str) -> Result<RawValue, ValidationError> {
    match descriptor.kind {
        FieldKind::Numeric => {
            validate_numeric(raw, descriptor.min_value, descriptor.max_value).map(RawValue::Number)
        }
        FieldKind::Enumerated(allowed) => validate_enum(raw, allowed).map(|code| RawValue::Number(code as f64)),
        FieldKind::BloodPressure => {
            let (systolic, diastolic) = decode_blood_pressure(raw)?;
            BloodPressureInput::new(systolic, diastolic).check()?;
            Ok(RawValue::BloodPressure { systolic, diastolic })
        }
        FieldKind::CervicalMucus => {
            let (appearance, sensation) = split_cervical_mucus(raw)?;
            Ok(RawValue::CervicalMucus {
                appearance: validate_enum(appearance, CERVICAL_MUCUS_APPEARANCE_CODES)?,
                sensation: validate_enum(sensation, CERVICAL_MUCUS_SENSATION_CODES)?,
            })
        }
        FieldKind::Interval => {
            let (start, end) = decode_interval(raw)?;
            Ok(RawValue::Interval { start, end })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldRegistry;
    use crate::error::{Bound, ValidationReason};
    use crate::platform::Platform;

    fn android(id: &str) -> FieldDescriptor {
        FieldRegistry::for_platform(Platform::Android).describe(id).unwrap().clone()
    }

    #[test]
    fn test_numeric_uses_descriptor_bounds() {
        assert_eq!(parse_input(&android("height"), "175").unwrap(), RawValue::Number(175.0));

        let err = parse_input(&android("bodyTemperature"), "50").unwrap_err();
        assert_eq!(err.reason, ValidationReason::OutOfRange { bound: Bound::Upper });
    }

    #[test]
    fn test_enumerated_fields() {
        assert_eq!(parse_input(&android("menstruationFlow"), "2").unwrap(), RawValue::Number(2.0));
        assert_eq!(
            parse_input(&android("menstruationFlow"), "9").unwrap_err().reason,
            ValidationReason::InvalidEnum
        );
    }

    #[test]
    fn test_blood_pressure_input() {
        let bp = android("bloodPressure");
        assert_eq!(
            parse_input(&bp, "120/80").unwrap(),
            RawValue::BloodPressure { systolic: 120.0, diastolic: 80.0 }
        );
        assert_eq!(
            parse_input(&bp, "80/120").unwrap_err().reason,
            ValidationReason::SystolicNotAboveDiastolic
        );
        assert_eq!(parse_input(&bp, "120").unwrap_err().reason, ValidationReason::MalformedComposite);
    }

    #[test]
    fn test_fractional_blood_pressure_round_trips_through_encode() {
        let bp = android("bloodPressure");
        let value = parse_input(&bp, "120.5/80.4").unwrap();
        assert_eq!(value, RawValue::BloodPressure { systolic: 120.5, diastolic: 80.4 });
        assert_eq!(parse_input(&bp, &value.encode(None)).unwrap(), value);
    }

    #[test]
    fn test_cervical_mucus_input() {
        let mucus = android("cervicalMucus");
        assert_eq!(
            parse_input(&mucus, "5,2").unwrap(),
            RawValue::CervicalMucus { appearance: 5, sensation: 2 }
        );
        assert_eq!(parse_input(&mucus, "7,2").unwrap_err().reason, ValidationReason::InvalidEnum);
        assert_eq!(parse_input(&mucus, "5,4").unwrap_err().reason, ValidationReason::InvalidEnum);
    }

    #[test]
    fn test_interval_input_round_trips_through_encode() {
        let period = android("menstruationPeriod");
        let value = parse_input(&period, "2024-05-01/2024-05-05").unwrap();
        let again = parse_input(&period, &value.encode(None)).unwrap();
        assert_eq!(value, again);
    }
}
