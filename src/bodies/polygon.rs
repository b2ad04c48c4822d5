use crate::bodies::{check_mass, check_radius, extrapolate_position, Motion, MovingBody, Outline, RotatingBody, Spin};
use crate::collision::{Collider, Hull};
use crate::error::PhysicsError;
use crate::math::{ContinuousVector, FixedDistance, FixedTime, FixedVector};
use crate::Result;

/// A rotating body with a custom polygon outline around a circular core
/// (ships, debris fragments)
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBody {
    /// The body's translational state
    motion: Motion,

    /// The body's rotational state
    spin: Spin,

    /// Outline vertices relative to the position, at angle zero
    outline: Vec<ContinuousVector>,

    /// Radius of the circular core used for collisions
    core_radius: FixedDistance,

    /// Distance from the position to the furthest vertex, rounded up
    reach: FixedDistance,

    /// The body's mass
    mass: f64,
}

impl PolygonBody {
    /// Creates a polygon body at the origin from vertices relative to its center
    pub fn new(outline: Vec<ContinuousVector>, core_radius: FixedDistance, mass: f64) -> Result<Self> {
        if outline.is_empty() {
            return Err(PhysicsError::InvalidParameter("polygon outline is empty".to_string()));
        }
        check_radius(core_radius)?;
        check_mass(mass)?;

        let reach = outline
            .iter()
            .map(|vertex| vertex.length().ceil() as FixedDistance)
            .max()
            .unwrap_or(0);

        Ok(Self {
            motion: Motion::default(),
            spin: Spin::default(),
            outline,
            core_radius,
            reach,
            mass,
        })
    }

    /// Creates a polygon body from world-space vertices, centered on their average
    pub fn from_world_outline(vertices: &[FixedVector], mass: f64) -> Result<Self> {
        if vertices.is_empty() {
            return Err(PhysicsError::InvalidParameter("polygon outline is empty".to_string()));
        }
        let sum = vertices
            .iter()
            .fold(ContinuousVector::zero(), |sum, vertex| sum + vertex.to_continuous());
        let center = (sum / vertices.len() as f64).round_to_fixed();
        let outline = vertices
            .iter()
            .map(|vertex| (*vertex - center).to_continuous())
            .collect();

        Ok(Self::new(outline, 0, mass)?.with_position(center))
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

    /// Returns the outline relative to the position, at angle zero
    pub fn relative_outline(&self) -> &[ContinuousVector] {
        &self.outline
    }

    /// Returns the radius of the collision core
    pub fn core_radius(&self) -> FixedDistance {
        self.core_radius
    }
}

impl MovingBody for PolygonBody {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn radius(&self) -> FixedDistance {
        self.core_radius.max(self.reach)
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn collider(&self) -> Collider {
        Collider::Hull(Hull::new(self.position(), self.core_radius, self.outline_vertices(0.0)))
    }

    fn advance(&mut self, dt: FixedTime) {
        self.motion.integrate(dt);
        self.spin.integrate(dt);
    }
}

impl RotatingBody for PolygonBody {
    fn spin(&self) -> &Spin {
        &self.spin
    }

    fn spin_mut(&mut self) -> &mut Spin {
        &mut self.spin
    }
}

impl Outline for PolygonBody {
    fn outline_vertices(&self, extrapolate_time: f64) -> Vec<FixedVector> {
        let center = extrapolate_position(self, extrapolate_time);
        self.outline
            .iter()
            .map(|vertex| center.offset(vertex.rotated(self.spin.angle)))
            .collect()
    }
}
