mod vector;
mod units;
mod frame;

pub use vector::{ContinuousVector, FixedVector};
pub use units::{FixedDistance, FixedTime, UnitConverter};
pub use frame::LocalFrame;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Rounds a float to the nearest fixed-point unit, saturating at the `i64` bounds
#[inline]
pub fn round_to_fixed(value: f64) -> i64 {
    // `as` saturates for out-of-range floats and maps NaN to 0
    value.round() as i64
}
