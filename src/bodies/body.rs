use crate::bodies::components::{Motion, Spin};
use crate::collision::{self, Circle, Collider, Playfield};
use crate::math::{ContinuousVector, FixedDistance, FixedTime, FixedVector, UnitConverter};

/// Base trait for anything that moves through the playfield
pub trait MovingBody {
    /// Returns the body's translational state
    fn motion(&self) -> &Motion;

    /// Returns the body's translational state mutably
    fn motion_mut(&mut self) -> &mut Motion;

    /// Returns a radius around the position that contains the whole shape
    fn radius(&self) -> FixedDistance;

    /// Returns the body's mass
    fn mass(&self) -> f64;

    /// Returns the body's collision geometry; circular unless overridden
    fn collider(&self) -> Collider {
        Collider::Circle(Circle::new(self.position(), self.radius()))
    }

    /// Advances the body by one step of `dt` time units
    fn advance(&mut self, dt: FixedTime) {
        self.motion_mut().integrate(dt);
    }

    /// Returns the body's position
    fn position(&self) -> FixedVector {
        self.motion().position
    }

    /// Returns the body's velocity
    fn velocity(&self) -> ContinuousVector {
        self.motion().velocity
    }

    /// Returns the body's acceleration
    fn acceleration(&self) -> ContinuousVector {
        self.motion().acceleration
    }

    /// Sets the body's velocity
    fn set_velocity(&mut self, velocity: ContinuousVector) {
        self.motion_mut().velocity = velocity;
    }

    /// Sets the body's acceleration
    fn set_acceleration(&mut self, acceleration: ContinuousVector) {
        self.motion_mut().acceleration = acceleration;
    }

    /// Moves the position back into the playfield's canonical range
    fn wrap_position(&mut self, playfield: &Playfield) {
        let motion = self.motion_mut();
        motion.position = playfield.wrap(motion.position);
    }

    /// Squared distance between the two centers
    fn distance_squared_to<B: MovingBody + ?Sized>(&self, other: &B) -> i128 {
        collision::distance_squared(self, other)
    }

    /// Returns true if the two bodies overlap at their stored positions
    fn is_touching<B: MovingBody + ?Sized>(&self, other: &B) -> bool {
        collision::bodies_touching(self, other)
    }

    /// Returns true if the two bodies overlap anywhere on the torus
    fn is_touching_wrapped<B: MovingBody + ?Sized>(&mut self, other: &mut B, playfield: &Playfield) -> bool {
        collision::bodies_touching_wrapped(self, other, playfield)
    }
}

/// A body that also has an orientation
pub trait RotatingBody: MovingBody {
    /// Returns the body's rotational state
    fn spin(&self) -> &Spin;

    /// Returns the body's rotational state mutably
    fn spin_mut(&mut self) -> &mut Spin;

    /// Returns the body's heading in radians
    fn angle(&self) -> f64 {
        self.spin().angle
    }
}

/// A body that tracks how long it has existed, for time-to-live pruning
pub trait AgedBody: MovingBody {
    /// Returns the body's age in time units
    fn age(&self) -> FixedTime;

    /// Returns true once the body has lived for at least `lifetime`
    fn is_expired(&self, lifetime: FixedTime) -> bool {
        self.age() >= lifetime
    }
}

/// A shape that can report its outline for collision or drawing
pub trait Outline {
    /// Outline vertices in world space, with the body extrapolated forward by
    /// `extrapolate_time` time units along its velocity
    fn outline_vertices(&self, extrapolate_time: f64) -> Vec<FixedVector>;

    /// The outline in whole pixels, ready to draw
    fn outline_polygon(&self, extrapolate_time: f64, units: &UnitConverter) -> RenderPolygon {
        RenderPolygon::from_vertices(&self.outline_vertices(extrapolate_time), units)
    }
}

/// A closed polygon in pixel coordinates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPolygon {
    pub points: Vec<[i32; 2]>,
}

impl RenderPolygon {
    /// Converts fixed-point vertices to pixel points
    pub fn from_vertices(vertices: &[FixedVector], units: &UnitConverter) -> Self {
        Self {
            points: vertices.iter().map(|vertex| units.vector_to_pixels(*vertex)).collect(),
        }
    }
}

/// The body's position pushed forward linearly by `extrapolate_time`
pub fn extrapolate_position<B: MovingBody + ?Sized>(body: &B, extrapolate_time: f64) -> FixedVector {
    body.position().offset(body.velocity() * extrapolate_time)
}
