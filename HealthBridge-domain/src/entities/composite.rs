//! Text encodings of composite field values
//!
//! - blood pressure: `"120/80"`
//! - cervical mucus: `"appearance,sensation"`
//! - interval: `"start/end"` as RFC 3339 instants; date-only parts mean UTC midnight

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::{ValidationError, ValidationReason};

/// Format a number without a trailing `.0`
pub(crate) fn format_number(value: f64, decimals: Option<u32>) -> String {
    let text = match decimals {
        Some(places) => format!("{:.*}", places as usize, value),
        None => format!("{:.6}", value),
    };
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

pub fn encode_blood_pressure(systolic: f64, diastolic: f64) -> String {
    format!("{}/{}", format_number(systolic, None), format_number(diastolic, None))
}

pub fn decode_blood_pressure(raw: &str) -> Result<(f64, f64), ValidationError> {
    let (systolic, diastolic) = raw
        .trim()
        .split_once('/')
        .ok_or_else(|| ValidationError::malformed("Blood pressure must be entered as systolic/diastolic"))?;

    let parse = |part: &str| -> Result<f64, ValidationError> {
        part.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::not_a_number(part))
    };

    Ok((parse(systolic)?, parse(diastolic)?))
}

pub fn encode_cervical_mucus(appearance: i64, sensation: i64) -> String {
    format!("{},{}", appearance, sensation)
}

/// Split `"appearance,sensation"` into its two raw parts
pub fn split_cervical_mucus(raw: &str) -> Result<(&str, &str), ValidationError> {
    let (appearance, sensation) = raw
        .trim()
        .split_once(',')
        .ok_or_else(|| ValidationError::malformed("Cervical mucus must be entered as appearance,sensation"))?;
    Ok((appearance.trim(), sensation.trim()))
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_instant(part: &str) -> Result<DateTime<Utc>, ValidationError> {
    let part = part.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(part) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(part, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .ok_or_else(|| ValidationError::malformed(format!("'{}' is not a date or time", part)))
}

pub fn encode_interval(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!("{}/{}", format_instant(start), format_instant(end))
}

pub fn decode_interval(raw: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), ValidationError> {
    let (start, end) = raw
        .trim()
        .split_once('/')
        .ok_or_else(|| ValidationError::malformed("Period must be entered as start/end"))?;

    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    if end < start {
        return Err(ValidationError::new(
            ValidationReason::InvalidInterval,
            "The end of the period must not be before its start",
        ));
    }
    Ok((start, end))
}
