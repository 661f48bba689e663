use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{SEC_PER_DAY, TimeErrors};

/// A civil timestamp, presumed UTC.
///
/// Every field is real-valued and none of them are range checked on
/// construction. Out of range values (month 13, hour 25, ...) flow through the
/// Julian Date formula and produce a number. Call [`Timestamp::validate`] to
/// opt into strict checking.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Timestamp {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl Timestamp {
    pub fn new(year: f64, month: f64, day: f64, hour: f64, minute: f64, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 * 1e-9;
        Self::new(
            dt.year() as f64,
            dt.month() as f64,
            dt.day() as f64,
            dt.hour() as f64,
            dt.minute() as f64,
            second,
        )
    }

    /// Fraction of a day elapsed since midnight.
    ///
    /// Not clamped, so an hour of 36 yields 1.5.
    pub fn day_fraction(&self) -> f64 {
        (self.second + 60.0 * (self.minute + 60.0 * self.hour)) / SEC_PER_DAY
    }

    /// Converts to a chrono datetime, failing if any field is outside its
    /// civil range.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, TimeErrors> {
        let fields = [
            ("year", self.year),
            ("month", self.month),
            ("day", self.day),
            ("hour", self.hour),
            ("minute", self.minute),
            ("second", self.second),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TimeErrors::NonFinite(name));
            }
        }
        for &(name, value) in &fields[..5] {
            if value.fract() != 0.0 {
                return Err(TimeErrors::FractionalField(name, value));
            }
        }

        let invalid_date = TimeErrors::InvalidDate(self.year, self.month, self.day);
        if self.year.abs() > i32::MAX as f64 || self.month < 1.0 || self.day < 1.0 {
            return Err(invalid_date);
        }
        let date = NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)
            .ok_or(invalid_date)?;

        // 60.x is allowed so that a leap second can at least be written down
        let invalid_time = TimeErrors::InvalidTimeOfDay(self.hour, self.minute, self.second);
        if !(0.0..24.0).contains(&self.hour)
            || !(0.0..60.0).contains(&self.minute)
            || !(0.0..61.0).contains(&self.second)
        {
            return Err(invalid_time);
        }
        let sec = self.second.floor();
        let nano = ((self.second - sec) * 1e9).round().min(999_999_999.0);
        let (sec, nano) = if sec >= 60.0 {
            // chrono represents a leap second as 59 plus an extra second of nanos
            (59, nano as u32 + 1_000_000_000)
        } else {
            (sec as u32, nano as u32)
        };
        date.and_hms_nano_opt(self.hour as u32, self.minute as u32, sec, nano)
            .ok_or(invalid_time)
    }

    /// Strict check of the civil date and time of day.
    pub fn validate(&self) -> Result<(), TimeErrors> {
        self.to_datetime().map(|_| ())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::from_datetime(dt)
    }
}
