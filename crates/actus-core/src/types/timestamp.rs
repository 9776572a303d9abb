//! Timestamp type for contract event times.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ActusError, ActusResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// A point in time, counted in seconds since the Unix epoch.
///
/// `Timestamp::ZERO` is reserved to mean "not set" and is never a valid
/// real date; calendar arithmetic propagates it unchanged rather than
/// producing a bogus result.
///
/// # Example
///
/// ```rust
/// use actus_core::types::Timestamp;
///
/// let t = Timestamp::from_ymd(2016, 4, 30).unwrap();
/// assert!(t.is_last_day_of_month());
/// assert_eq!(t.add_months(10), Timestamp::from_ymd(2017, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The null timestamp, meaning "not set".
    pub const ZERO: Timestamp = Timestamp(0);

    /// Creates a timestamp from seconds since the Unix epoch.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Timestamp(seconds)
    }

    /// Creates a timestamp at midnight UTC of the given calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ActusError::InvalidDate` for nonexistent dates or dates
    /// before the epoch.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ActusResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ActusError::invalid_date(format!("{year}-{month:02}-{day:02}")))?;
        let seconds = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ActusError::invalid_date(format!("{year}-{month:02}-{day:02}")))?
            .and_utc()
            .timestamp();
        if seconds < 0 {
            return Err(ActusError::invalid_date(format!(
                "{year}-{month:02}-{day:02} precedes the epoch"
            )));
        }
        Ok(Timestamp(seconds as u64))
    }

    /// Returns the raw seconds since the epoch.
    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0
    }

    /// Returns true if the timestamp carries a real date (non-zero).
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    fn datetime(self) -> NaiveDateTime {
        // u64 epoch seconds always fit i64 for dates this library handles.
        DateTime::<Utc>::from_timestamp(self.0 as i64, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default()
    }

    fn from_datetime(dt: NaiveDateTime) -> Self {
        let seconds = dt.and_utc().timestamp();
        Timestamp(seconds.max(0) as u64)
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(self) -> i32 {
        self.datetime().year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(self) -> u32 {
        self.datetime().month()
    }

    /// Returns the day-of-month component (1-31).
    #[must_use]
    pub fn day(self) -> u32 {
        self.datetime().day()
    }

    /// Returns the number of days in the timestamp's month.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        let dt = self.datetime();
        match dt.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if dt.date().leap_year() => 29,
            2 => 28,
            _ => unreachable!(),
        }
    }

    /// Returns true if this is the last calendar day of its month.
    #[must_use]
    pub fn is_last_day_of_month(self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Rolls the timestamp to the last calendar day of its month,
    /// preserving the time of day.
    #[must_use]
    pub fn end_of_month(self) -> Self {
        if !self.is_set() {
            return self;
        }
        let dt = self.datetime();
        let last = self.days_in_month();
        match dt.with_day(last) {
            Some(rolled) => Self::from_datetime(rolled),
            None => self,
        }
    }

    /// Returns the weekday of the timestamp.
    #[must_use]
    pub fn weekday(self) -> chrono::Weekday {
        self.datetime().weekday()
    }

    /// Adds a number of calendar days (pure elapsed-seconds arithmetic).
    ///
    /// The null timestamp propagates unchanged.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        if !self.is_set() {
            return self;
        }
        let seconds = self.0 as i64 + days * SECONDS_PER_DAY;
        Timestamp(seconds.max(0) as u64)
    }

    /// Adds a number of seconds.
    #[must_use]
    pub fn add_seconds(self, seconds: i64) -> Self {
        if !self.is_set() {
            return self;
        }
        Timestamp((self.0 as i64 + seconds).max(0) as u64)
    }

    /// Adds a number of calendar months, clamping the day-of-month to the
    /// last valid day of the target month (e.g. Jan 31 + 1 month = Feb 28
    /// or 29), preserving the time of day.
    ///
    /// The null timestamp propagates unchanged.
    #[must_use]
    pub fn add_months(self, months: u32) -> Self {
        if !self.is_set() {
            return self;
        }
        match self.datetime().checked_add_months(Months::new(months)) {
            Some(dt) => Self::from_datetime(dt),
            None => self,
        }
    }

    /// Returns the number of whole seconds from `self` to `other`
    /// (negative when `other` is earlier).
    #[must_use]
    pub fn seconds_until(self, other: Timestamp) -> i64 {
        other.0 as i64 - self.0 as i64
    }

    /// Returns the number of days from `self` to `other`, in exact
    /// elapsed-seconds terms (truncating).
    #[must_use]
    pub fn days_until(self, other: Timestamp) -> i64 {
        self.seconds_until(other) / SECONDS_PER_DAY
    }

    /// Returns the time of day in seconds past midnight.
    #[must_use]
    pub fn seconds_of_day(self) -> u32 {
        self.datetime().num_seconds_from_midnight()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            return write!(f, "<not set>");
        }
        write!(f, "{}", self.datetime().format("%Y-%m-%dT%H:%M:%S"))
    }
}
