use crate::bodies::{AgedBody, Motion, MovingBody, Outline, RotatingBody, Spin};
use crate::collision::Collider;
use crate::math::{FixedDistance, FixedTime, FixedVector};

/// Adds an age counter to any body. The age grows by `dt` on every advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Aged<B> {
    body: B,
    age: FixedTime,
}

impl<B> Aged<B> {
    /// Wraps a newborn body
    pub fn new(body: B) -> Self {
        Self { body, age: 0 }
    }

    /// Returns the wrapped body
    pub fn inner(&self) -> &B {
        &self.body
    }

    /// Returns the wrapped body mutably
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Unwraps the body, discarding its age
    pub fn into_inner(self) -> B {
        self.body
    }

    /// Ages the body without moving it (stationary markers)
    pub fn add_age(&mut self, dt: FixedTime) {
        self.age = self.age.saturating_add(dt);
    }
}

impl<B: MovingBody> MovingBody for Aged<B> {
    fn motion(&self) -> &Motion {
        self.body.motion()
    }

    fn motion_mut(&mut self) -> &mut Motion {
        self.body.motion_mut()
    }

    fn radius(&self) -> FixedDistance {
        self.body.radius()
    }

    fn mass(&self) -> f64 {
        self.body.mass()
    }

    fn collider(&self) -> Collider {
        self.body.collider()
    }

    fn advance(&mut self, dt: FixedTime) {
        self.body.advance(dt);
        self.add_age(dt);
    }
}

impl<B: MovingBody> AgedBody for Aged<B> {
    fn age(&self) -> FixedTime {
        self.age
    }
}

impl<B: RotatingBody> RotatingBody for Aged<B> {
    fn spin(&self) -> &Spin {
        self.body.spin()
    }

    fn spin_mut(&mut self) -> &mut Spin {
        self.body.spin_mut()
    }
}

impl<B: Outline> Outline for Aged<B> {
    fn outline_vertices(&self, extrapolate_time: f64) -> Vec<FixedVector> {
        self.body.outline_vertices(extrapolate_time)
    }
}
