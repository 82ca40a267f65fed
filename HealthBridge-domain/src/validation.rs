use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Bound, ValidationError, ValidationReason};

/// Parse user input as a finite number inside the inclusive `[min, max]` range
///
/// A missing bound leaves that side unbounded.
pub fn validate_numeric(raw: &str, min: Option<f64>, max: Option<f64>) -> Result<f64, ValidationError> {
    let value: f64 = raw.trim().parse().map_err(|_| ValidationError::not_a_number(raw))?;
    if !value.is_finite() {
        return Err(ValidationError::not_a_number(raw));
    }

    if let Some(lower) = min {
        if value < lower {
            return Err(ValidationError::out_of_range(Bound::Lower, min, max));
        }
    }
    if let Some(upper) = max {
        if value > upper {
            return Err(ValidationError::out_of_range(Bound::Upper, min, max));
        }
    }

    Ok(value)
}

/// Parse user input as an integer code from `allowed`
pub fn validate_enum(raw: &str, allowed: &[i64]) -> Result<i64, ValidationError> {
    let invalid = || {
        let choices: Vec<String> = allowed.iter().map(|code| code.to_string()).collect();
        ValidationError::new(
            ValidationReason::InvalidEnum,
            format!("Value must be one of {}", choices.join(", ")),
        )
    };

    let code: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if allowed.contains(&code) {
        Ok(code)
    } else {
        Err(invalid())
    }
}

/// A blood pressure entry in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct BloodPressureInput {
    /// Systolic pressure
    #[validate(range(min = 60.0, max = 250.0, message = "Systolic must be between 60 and 250 mmHg"))]
    pub systolic: f64,

    /// Diastolic pressure
    #[validate(range(min = 30.0, max = 150.0, message = "Diastolic must be between 30 and 150 mmHg"))]
    pub diastolic: f64,
}

impl BloodPressureInput {
    pub const SYSTOLIC_MIN: f64 = 60.0;
    pub const DIASTOLIC_MIN: f64 = 30.0;

    pub fn new(systolic: f64, diastolic: f64) -> Self {
        Self { systolic, diastolic }
    }

    /// Check both ranges, then that systolic exceeds diastolic
    pub fn check(&self) -> Result<(), ValidationError> {
        if let Err(validation_errors) = self.validate() {
            let mut messages = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    error_msgs.join(", ")
                })
                .collect::<Vec<String>>();
            messages.sort();

            let bound = if self.systolic < Self::SYSTOLIC_MIN || self.diastolic < Self::DIASTOLIC_MIN {
                Bound::Lower
            } else {
                Bound::Upper
            };
            return Err(ValidationError::new(ValidationReason::OutOfRange { bound }, messages.join("; ")));
        }

        if self.systolic <= self.diastolic {
            return Err(ValidationError::new(
                ValidationReason::SystolicNotAboveDiastolic,
                "Systolic pressure must be greater than diastolic pressure",
            ));
        }

        Ok(())
    }
}
