//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp the given number of calendar years later.
    ///
    /// The time of day is preserved. A 29 February start rolls over to
    /// 1 March when the target year is not a leap year. Returns `None`
    /// on overflow of the representable range.
    pub fn plus_years(&self, years: u32) -> Option<Self> {
        let year = self.0.year().checked_add(i32::try_from(years).ok()?)?;
        if let Some(shifted) = self.0.with_year(year) {
            return Some(Self(shifted));
        }

        // Only 29 February has no counterpart in the target year
        if self.0.month() != 2 || self.0.day() != 29 {
            return None;
        }
        let rolled = NaiveDate::from_ymd_opt(year, 3, 1)?.and_time(self.0.time());
        Some(Self(rolled.and_utc()))
    }

    /// RFC 3339 rendering with millisecond precision and a `Z` suffix.
    pub fn to_rfc3339_millis(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_rfc3339_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_datetime_preserves_value() {
        let dt = Utc::now();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.as_datetime(), &dt);
    }

    #[test]
    fn timestamp_ordering_helpers_agree() {
        let earlier = at("2024-01-15T10:30:00Z");
        let later = at("2024-01-15T10:30:01Z");

        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
        assert_eq!(later.duration_since(&earlier), Duration::seconds(1));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = at("2024-01-15T10:30:00Z");

        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();

        assert_eq!(ts.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_from_unix_secs_works() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_secs(1705276800).unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 15);
        assert_eq!(ts.as_unix_secs(), 1705276800);
    }

    #[test]
    fn timestamp_from_unix_secs_rejects_out_of_range() {
        assert!(Timestamp::from_unix_secs(i64::MAX).is_none());
    }

    // ══════════════════════════════════════════════════════════════
    // Calendar Arithmetic Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn plus_years_keeps_month_day_and_time() {
        let ts = at("2025-03-10T08:15:42.123Z");

        let later = ts.plus_years(1).unwrap();

        assert_eq!(later, at("2026-03-10T08:15:42.123Z"));
        assert_eq!(later.as_datetime().nanosecond(), 123_000_000);
    }

    #[test]
    fn plus_years_spans_leap_day() {
        let ts = at("2023-06-01T00:00:00Z");

        let later = ts.plus_years(1).unwrap();

        // 2024 is a leap year, so this year is 366 days long
        assert_eq!(later.duration_since(&ts), Duration::days(366));
    }

    #[test]
    fn plus_years_from_leap_day_rolls_over_to_march_1() {
        let ts = at("2024-02-29T12:00:00Z");

        let later = ts.plus_years(1).unwrap();

        assert_eq!(later, at("2025-03-01T12:00:00Z"));
    }

    #[test]
    fn plus_years_from_leap_day_to_leap_year_keeps_february_29() {
        let ts = at("2024-02-29T12:00:00Z");

        let later = ts.plus_years(4).unwrap();

        assert_eq!(later, at("2028-02-29T12:00:00Z"));
    }

    #[test]
    fn plus_years_keeps_february_28() {
        let ts = at("2023-02-28T06:00:00Z");

        let later = ts.plus_years(1).unwrap();

        assert_eq!(later, at("2024-02-28T06:00:00Z"));
    }

    #[test]
    fn plus_years_overflow_returns_none() {
        let ts = Timestamp::from_datetime(DateTime::<Utc>::MAX_UTC);
        assert!(ts.plus_years(1).is_none());
    }

    #[test]
    fn rfc3339_millis_uses_z_suffix() {
        let ts = at("2025-01-02T03:04:05.678901Z");
        assert_eq!(ts.to_rfc3339_millis(), "2025-01-02T03:04:05.678Z");
        assert_eq!(ts.to_string(), "2025-01-02T03:04:05.678Z");
    }
}
