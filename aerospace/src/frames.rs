use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Frame {
    /// Earth-centered, earth-fixed. Rotates with the Earth.
    Ecef,
    /// Earth-centered inertial. Non-rotating.
    Eci,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Ecef => write!(f, "ECEF"),
            Frame::Eci => write!(f, "ECI"),
        }
    }
}

/// A position vector in km, tagged with the frame it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub frame: Frame,
    pub km: Vector3<f64>,
}

impl Position {
    pub fn new(frame: Frame, x: f64, y: f64, z: f64) -> Self {
        Self {
            frame,
            km: Vector3::new(x, y, z),
        }
    }

    pub fn ecef(x: f64, y: f64, z: f64) -> Self {
        Self::new(Frame::Ecef, x, y, z)
    }

    pub fn eci(x: f64, y: f64, z: f64) -> Self {
        Self::new(Frame::Eci, x, y, z)
    }

    pub fn x(&self) -> f64 {
        self.km[0]
    }

    pub fn y(&self) -> f64 {
        self.km[1]
    }

    pub fn z(&self) -> f64 {
        self.km[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_display() {
        assert_eq!(Frame::Ecef.to_string(), "ECEF");
        assert_eq!(Frame::Eci.to_string(), "ECI");
    }

    #[test]
    fn test_position_components() {
        let p = Position::ecef(1.0, -2.0, 3.5);
        assert_eq!(p.frame, Frame::Ecef);
        assert_eq!((p.x(), p.y(), p.z()), (1.0, -2.0, 3.5));
    }
}
