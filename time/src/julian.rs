use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::Timestamp;
use crate::{DAYS_PER_CENTURY, JD_J2000};

/// How the calendar-date part of the day number is evaluated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DayNumberRule {
    /// Every division in the day number formula is real-valued and the
    /// combined expression is truncated toward zero once. Can land one day
    /// away from the calendar for dates after February.
    #[default]
    Reference,
    /// Fliegel & Van Flandern (1968), every division truncated toward zero.
    /// Gives the calendar-correct day number for proleptic Gregorian dates.
    FliegelVanFlandern,
}

/// Fractional Julian Date in days.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct JulianDate(pub f64);

impl JulianDate {
    pub const J2000: Self = JulianDate(JD_J2000);

    pub fn from_timestamp(ts: &Timestamp, rule: DayNumberRule) -> Self {
        let midnight = day_number(ts.year, ts.month, ts.day, rule) - 0.5;
        let jd = JulianDate(midnight + ts.day_fraction());
        debug!(?rule, midnight, jd = jd.0, "julian date");
        jd
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.0 - JD_J2000) / DAYS_PER_CENTURY
    }
}

impl From<&Timestamp> for JulianDate {
    fn from(ts: &Timestamp) -> Self {
        JulianDate::from_timestamp(ts, DayNumberRule::default())
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

/// Julian day number of the date, the integer day that begins at noon.
fn day_number(year: f64, month: f64, day: f64, rule: DayNumberRule) -> f64 {
    match rule {
        DayNumberRule::Reference => {
            let a = (month - 14.0) / 12.0;
            let jd = day - 32075.0
                + (1461.0 * (year + 4800.0 + a) / 4.0)
                + (367.0 * (month - 2.0 - a * 12.0) / 12.0)
                - (3.0 * ((year + 4900.0 + a) / 100.0) / 4.0);
            jd.trunc()
        }
        DayNumberRule::FliegelVanFlandern => {
            let a = ((month - 14.0) / 12.0).trunc();
            day - 32075.0 + (1461.0 * (year + 4800.0 + a) / 4.0).trunc()
                + (367.0 * (month - 2.0 - a * 12.0) / 12.0).trunc()
                - (3.0 * ((year + 4900.0 + a) / 100.0).trunc() / 4.0).trunc()
        }
    }
}
