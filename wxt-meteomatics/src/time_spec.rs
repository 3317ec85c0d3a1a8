use chrono::{DateTime, TimeDelta, Timelike, Utc};

/// Timestamp format used in Meteomatics URL path segments: "2024-03-05T14:00:00Z"
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The time window and sampling interval of a query.
///
/// `start` and `end` are carried as already-rendered timestamp strings:
/// explicit values from the command line pass through verbatim, generated
/// values are rendered with [`TIME_FORMAT`]. `interval` is an opaque
/// ISO-8601 duration string (e.g. "PT1H") that the API interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSpec {
    pub start: String,
    pub end: String,
    pub interval: String,
}

impl TimeSpec {
    /// Window covering the next `hours` hours from the current UTC hour.
    pub fn from_hours(hours: i64, interval: &str) -> Self {
        Self::from_hours_at(Utc::now(), hours, interval)
    }

    /// Window of `hours` hours starting at `now` truncated to the hour.
    pub fn from_hours_at(now: DateTime<Utc>, hours: i64, interval: &str) -> Self {
        let start = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap();
        let end = start + TimeDelta::try_hours(hours).unwrap();
        TimeSpec {
            start: start.format(TIME_FORMAT).to_string(),
            end: end.format(TIME_FORMAT).to_string(),
            interval: interval.to_string(),
        }
    }

    /// Render the composite `{start}--{end}:{interval}` path segment.
    pub fn to_path_segment(&self) -> String {
        format!("{}--{}:{}", self.start, self.end, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeSpec;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_from_hours_at_truncates_to_hour() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 37, 52).unwrap();
        let spec = TimeSpec::from_hours_at(now, 24, "PT1H");
        assert_eq!(spec.start, "2024-03-05T14:00:00Z");
        assert_eq!(spec.end, "2024-03-06T14:00:00Z");
        assert_eq!(spec.interval, "PT1H");
    }

    #[test]
    fn test_from_hours_at_on_the_hour() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        let spec = TimeSpec::from_hours_at(now, 6, "PT30M");
        assert_eq!(spec.start, "2024-12-31T23:00:00Z");
        assert_eq!(spec.end, "2025-01-01T05:00:00Z");
    }

    #[test]
    fn test_path_segment() {
        let spec = TimeSpec {
            start: "2024-03-05T14:00:00Z".to_string(),
            end: "2024-03-06T14:00:00Z".to_string(),
            interval: "PT1H".to_string(),
        };
        assert_eq!(
            spec.to_path_segment(),
            "2024-03-05T14:00:00Z--2024-03-06T14:00:00Z:PT1H"
        );
    }
}
