use crate::bodies::MovingBody;
use crate::collision::narrow_phase;
use crate::collision::playfield::{rewrap_positions, unwrap_positions, Playfield};

/// Returns true if two bodies overlap at their stored positions
pub fn bodies_touching<A, B>(a: &A, b: &B) -> bool
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    narrow_phase::is_touching(&a.collider(), &b.collider())
}

/// Returns true if two bodies overlap at their nearest toroidal images.
///
/// Both bodies are unwrapped for the test and wrapped back into canonical
/// coordinates afterwards.
pub fn bodies_touching_wrapped<A, B>(a: &mut A, b: &mut B, playfield: &Playfield) -> bool
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    unwrap_positions(a, b, playfield);
    let touching = bodies_touching(a, b);
    rewrap_positions(a, b, playfield);
    touching
}

/// Squared distance between two body centers, in squared distance units
pub fn distance_squared<A, B>(a: &A, b: &B) -> i128
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    a.position().distance_squared(&b.position())
}
