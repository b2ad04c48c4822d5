use crate::bodies::{check_mass, check_radius, Motion, MovingBody};
use crate::core::SimulationConfig;
use crate::math::{ContinuousVector, FixedDistance, FixedVector};
use crate::Result;

/// A circular body (asteroid, ship hull, bullet)
#[derive(Debug, Clone, PartialEq)]
pub struct CircleBody {
    /// The body's translational state
    motion: Motion,

    /// The circle's radius in distance units
    radius: FixedDistance,

    /// The body's mass
    mass: f64,
}

impl CircleBody {
    /// Creates a circle at the origin, at rest
    pub fn new(radius: FixedDistance, mass: f64) -> Result<Self> {
        check_radius(radius)?;
        check_mass(mass)?;
        Ok(Self {
            motion: Motion::default(),
            radius,
            mass,
        })
    }

    /// Creates a unit-mass projectile with the session's bullet radius
    pub fn bullet(config: &SimulationConfig) -> Result<Self> {
        Self::new(config.default_bullet_radius, 1.0)
    }

    /// Returns the body moved to `position`
    pub fn with_position(mut self, position: FixedVector) -> Self {
        self.motion.place(position);
        self
    }

    /// Returns the body with `velocity`
    pub fn with_velocity(mut self, velocity: ContinuousVector) -> Self {
        self.motion.velocity = velocity;
        self
    }

    /// Returns the body with `acceleration`
    pub fn with_acceleration(mut self, acceleration: ContinuousVector) -> Self {
        self.motion.acceleration = acceleration;
        self
    }
}

impl MovingBody for CircleBody {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn radius(&self) -> FixedDistance {
        self.radius
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}
