use bitflags::bitflags;
use log::trace;

use crate::bodies::MovingBody;
use crate::error::PhysicsError;
use crate::math::{FixedDistance, FixedVector};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A toroidal playfield: both axes wrap around at the given extents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Playfield {
    /// The extent along x, in fixed-point distance units
    width: FixedDistance,

    /// The extent along y, in fixed-point distance units
    height: FixedDistance,
}

bitflags! {
    /// Records which body was translated along which axis by an unwrap
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Unwrapped: u8 {
        /// The first body moved one width toward the origin
        const FIRST_X = 0x01;

        /// The second body moved one width toward the origin
        const SECOND_X = 0x02;

        /// The first body moved one height toward the origin
        const FIRST_Y = 0x04;

        /// The second body moved one height toward the origin
        const SECOND_Y = 0x08;
    }
}

impl Playfield {
    /// Creates a playfield; both dimensions must be positive
    pub fn new(width: FixedDistance, height: FixedDistance) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "playfield dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Returns the playfield width
    pub fn width(&self) -> FixedDistance {
        self.width
    }

    /// Returns the playfield height
    pub fn height(&self) -> FixedDistance {
        self.height
    }

    /// Reduces a position into `[0, width)` x `[0, height)`
    pub fn wrap(&self, position: FixedVector) -> FixedVector {
        position.wrapped(self.width, self.height)
    }

    /// Returns true if the position already lies inside the canonical range
    pub fn contains(&self, position: FixedVector) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Moves one of two positions by a full dimension wherever their separation
    /// along an axis exceeds half of that axis, so the pair sits at its nearest
    /// image. A separation of exactly half the extent is left alone.
    pub fn unwrap_pair(&self, a: &mut FixedVector, b: &mut FixedVector) -> Unwrapped {
        let mut unwrapped = Unwrapped::empty();

        let dx = a.x as i128 - b.x as i128;
        if 2 * dx.abs() > self.width as i128 {
            if dx > 0 {
                a.x = a.x.saturating_sub(self.width);
                unwrapped |= Unwrapped::FIRST_X;
            } else {
                b.x = b.x.saturating_sub(self.width);
                unwrapped |= Unwrapped::SECOND_X;
            }
        }

        let dy = a.y as i128 - b.y as i128;
        if 2 * dy.abs() > self.height as i128 {
            if dy > 0 {
                a.y = a.y.saturating_sub(self.height);
                unwrapped |= Unwrapped::FIRST_Y;
            } else {
                b.y = b.y.saturating_sub(self.height);
                unwrapped |= Unwrapped::SECOND_Y;
            }
        }

        unwrapped
    }
}

/// Unwraps two bodies to their nearest images; re-wrap both afterwards
pub fn unwrap_positions<A, B>(a: &mut A, b: &mut B, playfield: &Playfield) -> Unwrapped
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    let mut position_a = a.position();
    let mut position_b = b.position();
    let unwrapped = playfield.unwrap_pair(&mut position_a, &mut position_b);
    if !unwrapped.is_empty() {
        trace!("unwrapped pair {} / {}: {:?}", position_a, position_b, unwrapped);
        a.motion_mut().position = position_a;
        b.motion_mut().position = position_b;
    }
    unwrapped
}

/// Returns both bodies to canonical playfield coordinates
pub fn rewrap_positions<A, B>(a: &mut A, b: &mut B, playfield: &Playfield)
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    a.wrap_position(playfield);
    b.wrap_position(playfield);
}
