//! Greenwich Mean Sidereal Time.
//!
//! The polynomial is the IAU 1982 GMST expression in seconds of time, with
//! the century rate folded into a single coefficient. The angle is formed by
//! scaling the seconds into the current day by the Earth rotation rate.

use std::f64::consts::TAU;

use tracing::debug;

use crate::SEC_PER_DAY;
use crate::julian::JulianDate;

/// Earth rotation rate in rad/s.
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

const GMST_C0: f64 = 67310.54841;
const GMST_C1: f64 = 876600.0 * 3600.0 + 8640184.812866;
const GMST_C2: f64 = 0.093104;
const GMST_C3: f64 = -6.2e-6;

/// GMST in seconds of time, before any reduction to a single day.
pub fn gmst_seconds(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();
    GMST_C0 + GMST_C1 * t + GMST_C2 * (t * t) + GMST_C3 * t.powi(3)
}

/// GMST rotation angle in radians, in [0, 2π).
pub fn gmst(jd: JulianDate) -> f64 {
    let seconds = gmst_seconds(jd);
    // floored modulo, so negative centuries still give seconds in [0, 86400]
    let angle = seconds.rem_euclid(SEC_PER_DAY) * EARTH_ROTATION_RATE + TAU;
    // the offset keeps the dividend positive, so % is a true modulo here
    let theta = angle % TAU;
    debug!(jd = jd.0, seconds, theta, "gmst");
    theta
}
