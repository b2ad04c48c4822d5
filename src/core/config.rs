use crate::error::PhysicsError;
use crate::math::{FixedDistance, UnitConverter};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration for one game session, passed to the simulation loop and to
/// body factories
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Minimum wall-clock duration of one frame; shorter frames sleep the rest
    pub min_frame_millis: u64,

    /// Upper bound on physics ticks per frame; surplus lag is dropped.
    /// `None` lets the loop catch up however far it fell behind.
    pub max_ticks_per_frame: Option<u32>,

    /// Scale between real-world and engine units
    pub units: UnitConverter,

    /// Extra distance added when separating overlapping circles
    pub separation_clearance: FixedDistance,

    /// Distance a body is pushed off a wall it ran into
    pub wall_push_step: FixedDistance,

    /// Radius given to projectiles created with `CircleBody::bullet`
    pub default_bullet_radius: FixedDistance,

    /// Enables frame-time reporting
    pub debug: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let units = UnitConverter::default();
        Self {
            min_frame_millis: 1000 / 60,
            max_ticks_per_frame: None,
            units,
            separation_clearance: units.distance_from_meters(0.1),
            wall_push_step: units.distance_from_meters(0.5),
            default_bullet_radius: units.distance_from_meters(1.0),
            debug: false,
        }
    }
}

impl SimulationConfig {
    /// Checks that every distance is non-negative and the tick cap, if any, is positive
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("separation_clearance", self.separation_clearance),
            ("wall_push_step", self.wall_push_step),
            ("default_bullet_radius", self.default_bullet_radius),
        ];
        for (name, value) in distances {
            if value < 0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.max_ticks_per_frame == Some(0) {
            return Err(PhysicsError::InvalidParameter(
                "max_ticks_per_frame must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
