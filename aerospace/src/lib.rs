pub mod earth;
pub mod frames;
pub mod transformations;

pub mod prelude {
    pub use crate::earth::Earth;
    pub use crate::frames::{Frame, Position};
    pub use crate::transformations::{
        ecef_to_eci, eci_to_ecef, FrameErrors, Transformation, TransformationReport,
    };
}
