use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time range filter passed to platform queries
///
/// Serialized the way the Health Connect bridge expects it, e.g.
/// `{"operator": "between", "startTime": "...", "endTime": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operator", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TimeRangeFilter {
    /// Records inside the closed interval
    Between {
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },

    /// Records at or after the instant
    After { start_time: DateTime<Utc> },

    /// Records at or before the instant
    Before { end_time: DateTime<Utc> },
}

impl TimeRangeFilter {
    /// Create a closed interval filter
    pub fn between(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        TimeRangeFilter::Between { start_time, end_time }
    }

    /// Lower bound of the filter, if any
    pub fn start(&self) -> Option<DateTime<Utc>> {
        match self {
            TimeRangeFilter::Between { start_time, .. } | TimeRangeFilter::After { start_time } => Some(*start_time),
            TimeRangeFilter::Before { .. } => None,
        }
    }

    /// Upper bound of the filter, if any
    pub fn end(&self) -> Option<DateTime<Utc>> {
        match self {
            TimeRangeFilter::Between { end_time, .. } | TimeRangeFilter::Before { end_time } => Some(*end_time),
            TimeRangeFilter::After { .. } => None,
        }
    }

    /// Check whether a record spanning `[start, end]` overlaps the filter
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        if let Some(lower) = self.start() {
            if end < lower {
                return false;
            }
        }

        if let Some(upper) = self.end() {
            if start > upper {
                return false;
            }
        }

        true
    }

    /// Check whether an instant lies inside the filter
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.overlaps(instant, instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_between_is_inclusive() {
        let now = Utc::now();
        let filter = TimeRangeFilter::between(now - Duration::hours(1), now);

        assert!(filter.contains(now));
        assert!(filter.contains(now - Duration::hours(1)));
        assert!(!filter.contains(now + Duration::seconds(1)));
        assert!(!filter.contains(now - Duration::hours(2)));
    }

    #[test]
    fn test_overlap_with_interval_records() {
        let now = Utc::now();
        let filter = TimeRangeFilter::After { start_time: now };

        // A session that started before the window but ends inside it still counts
        assert!(filter.overlaps(now - Duration::minutes(30), now + Duration::minutes(5)));
        assert!(!filter.overlaps(now - Duration::minutes(30), now - Duration::minutes(1)));
    }

    #[test]
    fn test_serializes_with_operator_tag() {
        let start = DateTime::parse_from_rfc3339("2024-05-01T00:00:00Z").unwrap().with_timezone(&Utc);
        let end = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap().with_timezone(&Utc);
        let json = serde_json::to_value(TimeRangeFilter::between(start, end)).unwrap();

        assert_eq!(json["operator"], "between");
        assert_eq!(json["startTime"], "2024-05-01T00:00:00Z");
        assert_eq!(json["endTime"], "2024-05-01T12:00:00Z");
    }
}
