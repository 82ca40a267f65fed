use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

use health_bridge_data::TimeRangeFilter;

/// How far back a field looks for records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeWindow {
    /// Everything up to now; used for "most recent" metrics
    AllTime,
    /// Since local midnight
    StartOfDay,
    /// A rolling window of hours
    LastHours(u32),
}

impl TimeWindow {
    /// The query range ending at `now`
    pub fn to_filter(&self, now: DateTime<Utc>) -> TimeRangeFilter {
        let start = match self {
            TimeWindow::AllTime => DateTime::<Utc>::default(),
            TimeWindow::StartOfDay => local_midnight(now),
            TimeWindow::LastHours(hours) => now - Duration::hours(i64::from(*hours)),
        };
        TimeRangeFilter::between(start, now)
    }
}

fn local_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    now.with_timezone(&Local)
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|midnight| midnight.with_timezone(&Utc))
        // Midnight can fall in a DST gap
        .unwrap_or_else(|| now - Duration::hours(24))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_time_starts_at_epoch() {
        let now = Utc::now();
        let filter = TimeWindow::AllTime.to_filter(now);
        assert_eq!(filter.start().map(|s| s.timestamp()), Some(0));
        assert_eq!(filter.end(), Some(now));
    }

    #[test]
    fn test_last_hours() {
        let now = Utc::now();
        let filter = TimeWindow::LastHours(24).to_filter(now);
        assert_eq!(filter.start(), Some(now - Duration::hours(24)));
    }

    #[test]
    fn test_start_of_day_is_within_the_last_day() {
        let now = Utc::now();
        let start = TimeWindow::StartOfDay.to_filter(now).start().unwrap();
        assert!(start <= now);
        assert!(now - start <= Duration::hours(25));
    }
}
