use crate::bodies::{extrapolate_position, Motion, MovingBody, Outline, RotatingBody, Spin};
use crate::collision::{Collider, OrientedRect, SurfaceContact};
use crate::error::PhysicsError;
use crate::math::{ContinuousVector, FixedDistance, FixedTime, FixedVector};
use crate::Result;

/// A rectangle that rotates about its center (tanks, walls)
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleBody {
    /// The body's translational state
    motion: Motion,

    /// The body's rotational state
    spin: Spin,

    /// Half width and half height in the unrotated frame
    half_extents: FixedVector,

    /// Half the diagonal, rounded up
    bounding_radius: FixedDistance,
}

impl RectangleBody {
    /// Creates a rectangle with the given full width and height.
    ///
    /// Odd sizes are halved rounding down.
    pub fn new(width: FixedDistance, height: FixedDistance) -> Result<Self> {
        Self::from_half_extents(FixedVector::new(width / 2, height / 2))
    }

    /// Creates a rectangle from its half width and half height
    pub fn from_half_extents(half_extents: FixedVector) -> Result<Self> {
        if half_extents.x <= 0 || half_extents.y <= 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "rectangle half extents must be positive, got {}",
                half_extents
            )));
        }
        let mut body = Self {
            motion: Motion::default(),
            spin: Spin::default(),
            half_extents,
            bounding_radius: 0,
        };
        body.bounding_radius = body.shape().bounding_radius();
        Ok(body)
    }

    /// Returns the body moved to `position`
    pub fn with_position(mut self, position: FixedVector) -> Self {
        self.motion.place(position);
        self
    }

    /// Returns the body rotated to `angle`
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.spin.angle = angle;
        self
    }

    /// Returns the body with `velocity`
    pub fn with_velocity(mut self, velocity: ContinuousVector) -> Self {
        self.motion.velocity = velocity;
        self
    }

    /// Returns the half width and half height
    pub fn half_extents(&self) -> FixedVector {
        self.half_extents
    }

    /// The rectangle's geometry at its current position and angle
    pub fn shape(&self) -> OrientedRect {
        OrientedRect::new(self.motion.position, self.half_extents, self.spin.angle)
    }

    /// Returns true if the point lies inside or on the rectangle
    pub fn contains_point(&self, point: FixedVector) -> bool {
        self.shape().contains_point(point.to_continuous())
    }

    /// The nearest surface point to `point` and the outward normal there
    pub fn surface_contact(&self, point: FixedVector) -> SurfaceContact {
        self.shape().surface_contact(point.to_continuous())
    }
}

impl MovingBody for RectangleBody {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn radius(&self) -> FixedDistance {
        self.bounding_radius
    }

    fn mass(&self) -> f64 {
        // Proportional to area
        4.0 * self.half_extents.x as f64 * self.half_extents.y as f64
    }

    fn collider(&self) -> Collider {
        Collider::Rectangle(self.shape())
    }

    fn advance(&mut self, dt: FixedTime) {
        self.motion.integrate(dt);
        self.spin.integrate(dt);
    }
}

impl RotatingBody for RectangleBody {
    fn spin(&self) -> &Spin {
        &self.spin
    }

    fn spin_mut(&mut self) -> &mut Spin {
        &mut self.spin
    }
}

impl Outline for RectangleBody {
    fn outline_vertices(&self, extrapolate_time: f64) -> Vec<FixedVector> {
        let center = extrapolate_position(self, extrapolate_time);
        OrientedRect::new(center, self.half_extents, self.spin.angle)
            .corners()
            .iter()
            .map(ContinuousVector::round_to_fixed)
            .collect()
    }
}
