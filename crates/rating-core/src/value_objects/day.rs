//! Local calendar day handling
//!
//! Quota accounting runs on the organization-local calendar day, not UTC.
//! The clock captures the configured offset once per process and hands out
//! the current local date and the UTC window covering it, so every code
//! path shares the same day boundary.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

/// Clock producing the organization-local calendar date
#[derive(Debug, Clone, Copy)]
pub struct DayClock {
    offset: FixedOffset,
}

impl DayClock {
    /// Create a clock with an explicit fixed offset
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Clock for a whole-hour offset east of UTC (negative for west)
    ///
    /// Returns None when the offset is outside the valid -23..=23 range.
    pub fn from_offset_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(Self::new)
    }

    /// Clock running on UTC days
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// The current local calendar date
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// UTC instants [start, end) covering the given local date
    pub fn day_bounds(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let midnight = date.and_time(NaiveTime::MIN);
        let start_naive_utc = midnight - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        let start = Utc.from_utc_datetime(&start_naive_utc);
        (start, start + Duration::days(1))
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::utc()
    }
}
