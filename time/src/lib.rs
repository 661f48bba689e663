pub mod calendar;
pub mod julian;
pub mod sidereal;

use thiserror::Error;

pub const JD_J2000: f64 = 2451545.0;
pub const SEC_PER_DAY: f64 = 86400.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

pub mod prelude {
    pub use crate::calendar::Timestamp;
    pub use crate::julian::{DayNumberRule, JulianDate};
    pub use crate::sidereal::{gmst, gmst_seconds, EARTH_ROTATION_RATE};
    pub use crate::TimeErrors;
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeErrors {
    #[error("calendar field {0} must be a whole number, got {1}")]
    FractionalField(&'static str, f64),
    #[error("{0}-{1}-{2} is not a valid calendar date")]
    InvalidDate(f64, f64, f64),
    #[error("{0}:{1}:{2} is not a valid time of day")]
    InvalidTimeOfDay(f64, f64, f64),
    #[error("timestamp field {0} is not finite")]
    NonFinite(&'static str),
}
