use nalgebra::Vector3;
use rotations::{RotationTrait, prelude::RotationMatrix};
use serde::{Deserialize, Serialize};
use time::{julian::JulianDate, sidereal::gmst};

/// Orientation of the Earth-fixed frame relative to the inertial frame.
///
/// Only the spin about the polar axis is modeled, so z is the same in both
/// frames. No polar motion, precession or nutation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Earth {
    /// GMST in radians, [0, 2π)
    pub gmst: f64,
    pub eci_from_ecef: RotationMatrix,
}

impl Earth {
    pub fn at(jd: JulianDate) -> Self {
        Self::from_gmst(gmst(jd))
    }

    pub fn from_gmst(gmst: f64) -> Self {
        // the earth-fixed frame is rotated +gmst about z from the inertial frame
        Self {
            gmst,
            eci_from_ecef: RotationMatrix::rotz(gmst),
        }
    }

    pub fn ecef_to_eci(&self, ecef: Vector3<f64>) -> Vector3<f64> {
        let mut eci = self.eci_from_ecef.rotate(ecef);
        eci[2] = ecef[2];
        eci
    }

    pub fn eci_to_ecef(&self, eci: Vector3<f64>) -> Vector3<f64> {
        let mut ecef = self.eci_from_ecef.transform(eci);
        ecef[2] = eci[2];
        ecef
    }
}
