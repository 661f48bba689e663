use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::prelude::*;
use tracing::debug;

use crate::earth::Earth;
use crate::frames::{Frame, Position};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameErrors {
    #[error("expected a position in the {expected} frame, got {found}")]
    FrameMismatch { expected: Frame, found: Frame },
    #[error("TimeError: {0}")]
    TimeError(#[from] TimeErrors),
}

/// Options for converting a position between ECEF and ECI.
///
/// The default uses the reference day number rule and does no validation of
/// the calendar fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Transformation {
    pub day_number_rule: DayNumberRule,
    /// reject timestamps that are not a real civil date and time of day
    pub strict: bool,
}

/// Everything computed along the way, for logging and structured output.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TransformationReport {
    pub timestamp: Timestamp,
    pub julian_date: JulianDate,
    pub gmst: f64,
    pub input: Position,
    pub output: Position,
}

impl Transformation {
    pub fn new(day_number_rule: DayNumberRule, strict: bool) -> Self {
        Self {
            day_number_rule,
            strict,
        }
    }

    /// Earth orientation at the timestamp.
    pub fn earth(&self, timestamp: &Timestamp) -> Result<(JulianDate, Earth), FrameErrors> {
        if self.strict {
            timestamp.validate()?;
        }
        let jd = JulianDate::from_timestamp(timestamp, self.day_number_rule);
        Ok((jd, Earth::at(jd)))
    }

    pub fn ecef_to_eci(
        &self,
        timestamp: &Timestamp,
        ecef: Position,
    ) -> Result<TransformationReport, FrameErrors> {
        check_frame(Frame::Ecef, ecef.frame)?;
        let (julian_date, earth) = self.earth(timestamp)?;
        let output = Position {
            frame: Frame::Eci,
            km: earth.ecef_to_eci(ecef.km),
        };
        debug!(gmst = earth.gmst, x = output.x(), y = output.y(), z = output.z(), "ecef to eci");
        Ok(TransformationReport {
            timestamp: *timestamp,
            julian_date,
            gmst: earth.gmst,
            input: ecef,
            output,
        })
    }

    pub fn eci_to_ecef(
        &self,
        timestamp: &Timestamp,
        eci: Position,
    ) -> Result<TransformationReport, FrameErrors> {
        check_frame(Frame::Eci, eci.frame)?;
        let (julian_date, earth) = self.earth(timestamp)?;
        let output = Position {
            frame: Frame::Ecef,
            km: earth.eci_to_ecef(eci.km),
        };
        debug!(gmst = earth.gmst, x = output.x(), y = output.y(), z = output.z(), "eci to ecef");
        Ok(TransformationReport {
            timestamp: *timestamp,
            julian_date,
            gmst: earth.gmst,
            input: eci,
            output,
        })
    }

    /// Converts the position into the other frame, whichever it is in.
    pub fn apply(
        &self,
        timestamp: &Timestamp,
        position: Position,
    ) -> Result<TransformationReport, FrameErrors> {
        match position.frame {
            Frame::Ecef => self.ecef_to_eci(timestamp, position),
            Frame::Eci => self.eci_to_ecef(timestamp, position),
        }
    }
}

fn check_frame(expected: Frame, found: Frame) -> Result<(), FrameErrors> {
    if expected == found {
        Ok(())
    } else {
        Err(FrameErrors::FrameMismatch { expected, found })
    }
}

/// ECEF to ECI with the default options.
pub fn ecef_to_eci(timestamp: &Timestamp, ecef: Position) -> Result<Position, FrameErrors> {
    Ok(Transformation::default().ecef_to_eci(timestamp, ecef)?.output)
}

/// ECI to ECEF with the default options.
pub fn eci_to_ecef(timestamp: &Timestamp, eci: Position) -> Result<Position, FrameErrors> {
    Ok(Transformation::default().eci_to_ecef(timestamp, eci)?.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ts(year: f64, month: f64, day: f64, hour: f64, minute: f64, second: f64) -> Timestamp {
        Timestamp::new(year, month, day, hour, minute, second)
    }

    fn assert_eci(actual: Position, expected: (f64, f64, f64)) {
        assert_eq!(actual.frame, Frame::Eci);
        assert_abs_diff_eq!(actual.x(), expected.0, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.y(), expected.1, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.z(), expected.2, epsilon = 1e-12);
    }

    #[test]
    fn test_j2000_equatorial_radius() {
        let eci = ecef_to_eci(
            &ts(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0),
            Position::ecef(6378.137, 0.0, 0.0),
        )
        .unwrap();
        assert_eci(eci, (1241.961089296197, -6256.050211071135, 0.0));
    }

    #[test]
    fn test_reference_fractional_second() {
        let eci = ecef_to_eci(
            &ts(2024.0, 1.0, 31.0, 6.0, 16.0, 30.5),
            Position::ecef(1000.0, 2000.0, 3000.0),
        )
        .unwrap();
        assert_eci(eci, (696.7466214398468, -2124.7456660768034, 3000.0));
    }

    #[test]
    fn test_reference_off_axis() {
        let eci = ecef_to_eci(
            &ts(2019.0, 1.0, 4.0, 12.0, 0.0, 0.0),
            Position::ecef(6524.834, 6862.875, 6448.296),
        )
        .unwrap();
        assert_eci(eci, (8284.962265716564, -4586.056284961368, 6448.296));
    }

    #[test]
    fn test_reference_leap_day_negative_components() {
        let eci = ecef_to_eci(
            &ts(2024.0, 2.0, 29.0, 23.0, 59.0, 59.999),
            Position::ecef(-4000.0, 5000.0, -100.0),
        )
        .unwrap();
        assert_eci(eci, (1914.6926734324413, -6110.151550191217, -100.0));
    }

    #[test]
    fn test_report_carries_intermediates() {
        let report = Transformation::default()
            .ecef_to_eci(
                &ts(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0),
                Position::ecef(6378.137, 0.0, 0.0),
            )
            .unwrap();
        assert_eq!(report.julian_date, JulianDate::J2000);
        assert_abs_diff_eq!(report.gmst, 4.908362597187871, epsilon = 1e-12);
        assert_eq!(report.input, Position::ecef(6378.137, 0.0, 0.0));
    }

    #[test]
    fn test_round_trip() {
        let t = ts(2024.0, 1.0, 31.0, 6.0, 16.0, 30.5);
        let ecef = Position::ecef(-1234.5, 6789.0, 10.0);
        let eci = ecef_to_eci(&t, ecef).unwrap();
        let back = eci_to_ecef(&t, eci).unwrap();
        assert_eq!(back.frame, Frame::Ecef);
        assert_abs_diff_eq!(back.km, ecef.km, epsilon = 1e-9);
    }

    #[test]
    fn test_apply_picks_direction() {
        let t = ts(2019.0, 1.0, 4.0, 12.0, 0.0, 0.0);
        let transformation = Transformation::default();
        let eci = transformation.apply(&t, Position::ecef(1.0, 2.0, 3.0)).unwrap().output;
        assert_eq!(eci.frame, Frame::Eci);
        let ecef = transformation.apply(&t, eci).unwrap().output;
        assert_eq!(ecef.frame, Frame::Ecef);
    }

    #[test]
    fn test_frame_mismatch() {
        let t = ts(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0);
        let result = ecef_to_eci(&t, Position::eci(1.0, 0.0, 0.0));
        assert_eq!(
            result,
            Err(FrameErrors::FrameMismatch {
                expected: Frame::Ecef,
                found: Frame::Eci
            })
        );
    }

    #[test]
    fn test_out_of_range_fields_accepted_by_default() {
        let t = ts(2000.0, 13.0, 1.0, 25.0, 61.0, 75.0);
        assert!(ecef_to_eci(&t, Position::ecef(1.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_strict_rejects_out_of_range_fields() {
        let t = ts(2000.0, 13.0, 1.0, 0.0, 0.0, 0.0);
        let transformation = Transformation::new(DayNumberRule::Reference, true);
        let result = transformation.ecef_to_eci(&t, Position::ecef(1.0, 0.0, 0.0));
        assert!(matches!(
            result,
            Err(FrameErrors::TimeError(TimeErrors::InvalidDate(..)))
        ));
    }

    #[test]
    fn test_day_number_rule_changes_result() {
        let t = ts(2024.0, 3.0, 1.0, 0.0, 0.0, 0.0);
        let reference = Transformation::default();
        let calendar = Transformation::new(DayNumberRule::FliegelVanFlandern, false);
        let a = reference.ecef_to_eci(&t, Position::ecef(1.0, 0.0, 0.0)).unwrap();
        let b = calendar.ecef_to_eci(&t, Position::ecef(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(a.julian_date.value() - b.julian_date.value(), 1.0);
        assert_abs_diff_eq!(a.gmst, 2.8050220504031635, epsilon = 1e-6);
    }
}
