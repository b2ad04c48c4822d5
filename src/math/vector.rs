use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};
use std::fmt;

use crate::math::{approx_zero, round_to_fixed};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A continuous 2D vector used for velocity, acceleration and direction math
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContinuousVector {
    pub x: f64,
    pub y: f64,
}

/// A fixed-point 2D vector used for positions, measured in distance units.
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FixedVector {
    pub x: i64,
    pub y: i64,
}

// === ContinuousVector Implementation ===

impl ContinuousVector {
    /// Creates a new continuous vector
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with both components set to zero
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates a vector from polar coordinates (length, angle in radians)
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the determinant of the 2x2 matrix made of the two vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length of the vector
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the angle in radians of this vector (in the range [-PI, PI])
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns true if the vector is approximately zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        approx_zero(self.length_squared())
    }

    /// Returns a vector with the same length pointing at `angle`
    #[inline]
    pub fn with_angle(&self, angle: f64) -> Self {
        Self::from_polar(self.length(), angle)
    }

    /// Rotates the vector in place, preserving its length
    #[inline]
    pub fn rotate(&mut self, angle: f64) {
        *self = self.rotated(angle);
    }

    /// Returns the vector rotated counter-clockwise by `angle`
    #[inline]
    pub fn rotated(&self, angle: f64) -> Self {
        self.with_angle(self.angle() + angle)
    }

    /// Points the vector at `angle` without changing its length
    #[inline]
    pub fn set_angle(&mut self, angle: f64) {
        *self = self.with_angle(angle);
    }

    /// Scales the vector to `length`, keeping its direction.
    ///
    /// A zero vector has no direction and is left unchanged.
    pub fn set_length(&mut self, length: f64) {
        let current = self.length();
        if approx_zero(current) {
            return;
        }
        let scale = length / current;
        self.x *= scale;
        self.y *= scale;
    }

    /// Returns a unit vector in the same direction, or the vector itself if it is zero
    #[inline]
    pub fn to_unit(&self) -> Self {
        let length = self.length();
        if approx_zero(length) {
            *self
        } else {
            *self / length
        }
    }

    /// Squared distance between two vectors
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        (*self - *other).length_squared()
    }

    /// Rounds both components to the nearest fixed-point unit
    #[inline]
    pub fn round_to_fixed(&self) -> FixedVector {
        FixedVector::new(round_to_fixed(self.x), round_to_fixed(self.y))
    }

    /// Convert to nalgebra Vector2
    #[inline]
    pub fn to_nalgebra(&self) -> na::Vector2<f64> {
        na::Vector2::new(self.x, self.y)
    }

    /// Convert from nalgebra Vector2
    #[inline]
    pub fn from_nalgebra(v: &na::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for ContinuousVector {
    #[inline]
    fn from(array: [f64; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<ContinuousVector> for [f64; 2] {
    #[inline]
    fn from(vector: ContinuousVector) -> Self {
        [vector.x, vector.y]
    }
}

impl From<FixedVector> for ContinuousVector {
    #[inline]
    fn from(vector: FixedVector) -> Self {
        vector.to_continuous()
    }
}

impl fmt::Display for ContinuousVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for ContinuousVector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ContinuousVector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for ContinuousVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<ContinuousVector> for f64 {
    type Output = ContinuousVector;
    #[inline]
    fn mul(self, rhs: ContinuousVector) -> Self::Output {
        ContinuousVector::new(self * rhs.x, self * rhs.y)
    }
}

impl Div<f64> for ContinuousVector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for ContinuousVector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for ContinuousVector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for ContinuousVector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for ContinuousVector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl AbsDiffEq for ContinuousVector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for ContinuousVector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

// === FixedVector Implementation ===

impl FixedVector {
    /// Creates a new fixed-point vector
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with both components set to zero
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Creates a vector from polar coordinates, rounded to whole units
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        ContinuousVector::from_polar(radius, angle).round_to_fixed()
    }

    /// Converts to a continuous vector without loss for realistic magnitudes
    #[inline]
    pub fn to_continuous(&self) -> ContinuousVector {
        ContinuousVector::new(self.x as f64, self.y as f64)
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(&self, other: &Self) -> i128 {
        self.x as i128 * other.x as i128 + self.y as i128 * other.y as i128
    }

    /// Returns the squared length of the vector
    #[inline]
    pub fn length_squared(&self) -> i128 {
        self.dot(self)
    }

    /// Returns the length of the vector
    #[inline]
    pub fn length(&self) -> f64 {
        (self.length_squared() as f64).sqrt()
    }

    /// Returns the angle in radians of this vector (in the range [-PI, PI])
    #[inline]
    pub fn angle(&self) -> f64 {
        (self.y as f64).atan2(self.x as f64)
    }

    /// Returns true if both components are zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Returns the vector rotated counter-clockwise by `angle`, rounded to whole units
    #[inline]
    pub fn rotated(&self, angle: f64) -> Self {
        Self::from_polar(self.length(), self.angle() + angle)
    }

    /// Rotates the vector in place, preserving its length up to rounding
    #[inline]
    pub fn rotate(&mut self, angle: f64) {
        *self = self.rotated(angle);
    }

    /// Points the vector at `angle` without changing its length
    #[inline]
    pub fn set_angle(&mut self, angle: f64) {
        *self = Self::from_polar(self.length(), angle);
    }

    /// Scales the vector to `length`; a zero vector is left unchanged
    pub fn set_length(&mut self, length: f64) {
        let mut continuous = self.to_continuous();
        continuous.set_length(length);
        *self = continuous.round_to_fixed();
    }

    /// Returns a continuous unit vector in the same direction (zero stays zero)
    #[inline]
    pub fn to_unit(&self) -> ContinuousVector {
        self.to_continuous().to_unit()
    }

    /// Scales the vector by a real factor, rounded to whole units
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        (self.to_continuous() * factor).round_to_fixed()
    }

    /// Offsets the vector by a continuous displacement, rounded to whole units
    #[inline]
    pub fn offset(&self, displacement: ContinuousVector) -> Self {
        *self + displacement.round_to_fixed()
    }

    /// Squared distance between two points
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> i128 {
        (*self - *other).length_squared()
    }

    /// Reduces both components into `[0, width)` x `[0, height)`
    #[inline]
    pub fn wrapped(&self, width: i64, height: i64) -> Self {
        Self::new(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }
}

impl From<[i64; 2]> for FixedVector {
    #[inline]
    fn from(array: [i64; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<FixedVector> for [i64; 2] {
    #[inline]
    fn from(vector: FixedVector) -> Self {
        [vector.x, vector.y]
    }
}

impl fmt::Display for FixedVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for FixedVector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for FixedVector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Mul<i64> for FixedVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        Self::new(self.x.saturating_mul(rhs), self.y.saturating_mul(rhs))
    }
}

impl Neg for FixedVector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl AddAssign for FixedVector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedVector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
