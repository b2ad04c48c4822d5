mod components;
mod body;
mod circle;
mod aged;
mod rectangle;
mod polygon;

pub use self::components::{Motion, Spin};
pub use self::body::{extrapolate_position, AgedBody, MovingBody, Outline, RenderPolygon, RotatingBody};
pub use self::circle::CircleBody;
pub use self::aged::Aged;
pub use self::rectangle::RectangleBody;
pub use self::polygon::PolygonBody;

use crate::error::PhysicsError;
use crate::math::FixedDistance;
use crate::Result;

/// Rejects negative radii
pub(crate) fn check_radius(radius: FixedDistance) -> Result<()> {
    if radius < 0 {
        return Err(PhysicsError::InvalidParameter(format!(
            "radius must be non-negative, got {}",
            radius
        )));
    }
    Ok(())
}

/// Rejects masses that are not strictly positive and finite
pub(crate) fn check_mass(mass: f64) -> Result<()> {
    if !(mass.is_finite() && mass > 0.0) {
        return Err(PhysicsError::InvalidParameter(format!(
            "mass must be positive, got {}",
            mass
        )));
    }
    Ok(())
}
