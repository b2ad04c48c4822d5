use crate::error::PhysicsError;
use crate::math::UnitConverter;
use crate::Result;

/// Fixed-timestep bookkeeping: wall-clock time is banked as lag and spent in
/// whole ticks of `tick_millis`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStepAccumulator {
    /// Length of one physics tick
    tick_millis: u64,

    /// Wall-clock time not yet simulated
    lag: u64,
}

/// How far the renderer is between the last completed tick and the next one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    /// Fraction of a tick in `[0, 1)`
    pub fraction: f64,

    /// Length of one physics tick
    pub tick_millis: u64,
}

impl FixedStepAccumulator {
    /// Creates an accumulator with no lag; the tick length must be positive
    pub fn new(tick_millis: u64) -> Result<Self> {
        if tick_millis == 0 {
            return Err(PhysicsError::InvalidParameter(
                "physics tick interval must be positive".to_string(),
            ));
        }
        Ok(Self { tick_millis, lag: 0 })
    }

    /// Returns the tick length
    pub fn tick_millis(&self) -> u64 {
        self.tick_millis
    }

    /// Returns the banked wall-clock time
    pub fn lag(&self) -> u64 {
        self.lag
    }

    /// Banks elapsed wall-clock time
    pub fn add_elapsed(&mut self, elapsed_millis: u64) {
        self.lag = self.lag.saturating_add(elapsed_millis);
    }

    /// Returns true if at least one whole tick is banked
    pub fn tick_due(&self) -> bool {
        self.lag >= self.tick_millis
    }

    /// Spends one tick of lag after the tick has run
    pub fn consume_tick(&mut self) {
        self.lag = self.lag.saturating_sub(self.tick_millis);
    }

    /// Drops every whole tick still banked, keeping the fraction. Returns the
    /// number of ticks dropped.
    pub fn discard_backlog(&mut self) -> u64 {
        let dropped = self.lag / self.tick_millis;
        self.lag %= self.tick_millis;
        dropped
    }

    /// Forgets all banked time
    pub fn reset(&mut self) {
        self.lag = 0;
    }

    /// The renderer's position between ticks
    pub fn interpolation(&self) -> Interpolation {
        Interpolation {
            fraction: self.lag as f64 / self.tick_millis as f64,
            tick_millis: self.tick_millis,
        }
    }
}

impl Interpolation {
    /// Time since the last tick, in engine time units, for extrapolating
    /// positions and outlines
    pub fn extrapolate_time(&self, units: &UnitConverter) -> f64 {
        self.fraction * self.tick_millis as f64 * units.time_unit() as f64 / 1000.0
    }
}
