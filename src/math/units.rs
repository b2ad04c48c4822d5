use crate::error::PhysicsError;
use crate::math::{round_to_fixed, FixedVector};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A distance measured in fixed-point distance units
pub type FixedDistance = i64;

/// A duration measured in fixed-point time units (milliseconds by default)
pub type FixedTime = i64;

/// Converts between real-world scale (meters, pixels, seconds) and engine units.
///
/// One meter (or one pixel) is `distance_unit` engine distance units and one
/// second is `time_unit` engine time units. Rates are divided by the time unit
/// once per derivative order, so a velocity of one meter per second becomes
/// `distance_unit / time_unit` distance units per time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct UnitConverter {
    /// Engine distance units per meter (and per pixel)
    distance_unit: i64,

    /// Engine time units per second
    time_unit: i64,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self {
            distance_unit: 100,
            time_unit: 1000,
        }
    }
}

impl UnitConverter {
    /// Creates a converter with custom scales; both must be positive
    pub fn new(distance_unit: i64, time_unit: i64) -> Result<Self> {
        if distance_unit <= 0 || time_unit <= 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "unit scales must be positive, got distance {} and time {}",
                distance_unit, time_unit
            )));
        }
        Ok(Self { distance_unit, time_unit })
    }

    /// Returns the number of distance units per meter
    pub fn distance_unit(&self) -> i64 {
        self.distance_unit
    }

    /// Returns the number of time units per second
    pub fn time_unit(&self) -> i64 {
        self.time_unit
    }

    /// Converts whole pixels to fixed-point distance, saturating at the `i64` bounds
    pub fn distance_from_pixels(&self, pixels: i32) -> FixedDistance {
        i64::from(pixels).saturating_mul(self.distance_unit)
    }

    /// Converts meters to fixed-point distance
    pub fn distance_from_meters(&self, meters: f64) -> FixedDistance {
        round_to_fixed(meters * self.distance_unit as f64)
    }

    /// Converts seconds to fixed-point time
    pub fn time_from_seconds(&self, seconds: f64) -> FixedTime {
        round_to_fixed(seconds * self.time_unit as f64)
    }

    /// Converts wall-clock milliseconds to fixed-point time
    pub fn time_from_millis(&self, millis: u64) -> FixedTime {
        round_to_fixed(millis as f64 * self.time_unit as f64 / 1000.0)
    }

    /// Applies one order of time-unit scaling, e.g. acceleration relative to velocity
    pub fn integral(&self, value: f64) -> f64 {
        value / self.time_unit as f64
    }

    /// Converts meters per second to distance units per time unit
    pub fn velocity(&self, meters_per_second: f64) -> f64 {
        self.integral(meters_per_second * self.distance_unit as f64)
    }

    /// Converts meters per second squared to distance units per time unit squared
    pub fn acceleration(&self, meters_per_second_squared: f64) -> f64 {
        self.integral(self.velocity(meters_per_second_squared))
    }

    /// Converts radians per second to radians per time unit
    pub fn angular_velocity(&self, radians_per_second: f64) -> f64 {
        self.integral(radians_per_second)
    }

    /// Converts radians per second squared to radians per time unit squared
    pub fn angular_acceleration(&self, radians_per_second_squared: f64) -> f64 {
        self.integral(self.integral(radians_per_second_squared))
    }

    /// Converts fixed-point distance back to whole pixels, truncating toward
    /// zero and clamping to the `i32` range
    pub fn to_pixels(&self, distance: FixedDistance) -> i32 {
        let pixels = distance / self.distance_unit;
        i32::try_from(pixels).unwrap_or(if pixels < 0 { i32::MIN } else { i32::MAX })
    }

    /// Converts a fixed-point position to pixel coordinates
    pub fn vector_to_pixels(&self, vector: FixedVector) -> [i32; 2] {
        [self.to_pixels(vector.x), self.to_pixels(vector.y)]
    }
}
