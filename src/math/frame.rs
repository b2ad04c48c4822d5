use nalgebra as na;

use crate::math::{ContinuousVector, FixedVector};

/// A rigid 2D frame (origin plus orientation) used to move points in and out
/// of a rotated body's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    isometry: na::Isometry2<f64>,
}

impl LocalFrame {
    /// Creates a frame centered on `origin` and rotated counter-clockwise by `angle`
    pub fn new(origin: FixedVector, angle: f64) -> Self {
        Self {
            isometry: na::Isometry2::new(origin.to_continuous().to_nalgebra(), angle),
        }
    }

    /// Returns the frame's rotation angle in radians
    pub fn angle(&self) -> f64 {
        self.isometry.rotation.angle()
    }

    /// Expresses a world point in local coordinates
    pub fn to_local(&self, point: ContinuousVector) -> ContinuousVector {
        let local = self
            .isometry
            .inverse_transform_point(&na::Point2::from(point.to_nalgebra()));
        ContinuousVector::new(local.x, local.y)
    }

    /// Expresses a local point in world coordinates
    pub fn to_world(&self, local: ContinuousVector) -> ContinuousVector {
        let world = self
            .isometry
            .transform_point(&na::Point2::from(local.to_nalgebra()));
        ContinuousVector::new(world.x, world.y)
    }

    /// Rotates a local direction into world orientation (no translation)
    pub fn direction_to_world(&self, local: ContinuousVector) -> ContinuousVector {
        ContinuousVector::from_nalgebra(&self.isometry.rotation.transform_vector(&local.to_nalgebra()))
    }
}
