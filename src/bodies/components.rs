use crate::math::{ContinuousVector, FixedTime, FixedVector};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Translational state of a body: fixed-point position, continuous velocity
/// and acceleration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Motion {
    /// Position in distance units
    pub position: FixedVector,

    /// Velocity in distance units per time unit
    pub velocity: ContinuousVector,

    /// Acceleration in distance units per time unit squared
    pub acceleration: ContinuousVector,

    /// Displacement smaller than one unit not yet applied to `position`
    remainder: ContinuousVector,
}

impl Motion {
    /// Creates a motion at rest at `position`
    pub fn at(position: FixedVector) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Creates a motion at `position` moving with `velocity`
    pub fn moving(position: FixedVector, velocity: ContinuousVector) -> Self {
        Self {
            position,
            velocity,
            ..Self::default()
        }
    }

    /// Returns the sub-unit displacement carried over to the next step
    pub fn remainder(&self) -> ContinuousVector {
        self.remainder
    }

    /// Puts the body exactly at `position`, dropping any carried sub-unit displacement
    pub fn place(&mut self, position: FixedVector) {
        self.position = position;
        self.remainder = ContinuousVector::zero();
    }

    /// Advances by `dt` assuming constant acceleration over the interval.
    ///
    /// Position moves by `(v + a dt / 2) dt` and velocity by `a dt`. The
    /// displacement is applied in whole units; the fraction is carried into
    /// the next step rather than truncated away.
    pub fn integrate(&mut self, dt: FixedTime) {
        let dt = dt as f64;
        let displacement = (self.velocity + self.acceleration * (dt / 2.0)) * dt + self.remainder;
        let step = displacement.round_to_fixed();
        self.remainder = displacement - step.to_continuous();
        self.position += step;
        self.velocity += self.acceleration * dt;
    }
}

/// Rotational state of a body, in radians and radians per time unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Spin {
    pub angle: f64,
    pub angular_velocity: f64,
    pub angular_acceleration: f64,
}

impl Spin {
    /// Creates a spin at rest facing `angle`
    pub fn facing(angle: f64) -> Self {
        Self {
            angle,
            ..Self::default()
        }
    }

    /// Advances the angle with the same constant-acceleration rule as [`Motion::integrate`]
    pub fn integrate(&mut self, dt: FixedTime) {
        let dt = dt as f64;
        self.angle += (self.angular_velocity + self.angular_acceleration * dt / 2.0) * dt;
        self.angular_velocity += self.angular_acceleration * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn integrates_constant_acceleration_exactly() {
        let mut motion = Motion::at(FixedVector::zero());
        motion.acceleration = ContinuousVector::new(0.002, 0.0);
        motion.integrate(100);

        // x = a t^2 / 2 = 0.002 * 10000 / 2
        assert_eq!(motion.position, FixedVector::new(10, 0));
        assert_relative_eq!(motion.velocity.x, 0.2);
    }

    #[test]
    fn carries_sub_unit_displacement() {
        let mut motion = Motion::moving(FixedVector::zero(), ContinuousVector::new(0.1, 0.0));
        for _ in 0..16 {
            motion.integrate(16);
        }

        // 0.1 units per ms for 256 ms; truncating each 1.6 unit step would give 16
        assert_eq!(motion.position.x, 26);
        assert!(motion.remainder().x.abs() <= 0.5);
    }

    #[test]
    fn spin_follows_angular_acceleration() {
        let mut spin = Spin::facing(1.0);
        spin.angular_acceleration = 0.001;
        spin.integrate(10);

        assert_relative_eq!(spin.angle, 1.05);
        assert_relative_eq!(spin.angular_velocity, 0.01);
    }
}
