use log::trace;

use crate::bodies::MovingBody;
use crate::collision::collider::{OrientedRect, SurfaceContact};
use crate::collision::playfield::{rewrap_positions, unwrap_positions, Playfield};
use crate::math::{approx_zero, ContinuousVector, FixedDistance};

/// Velocity of the first body after a perfectly elastic collision with the
/// second, exchanged along the line through both centers
pub fn elastic_velocity(
    mass: f64,
    position: ContinuousVector,
    velocity: ContinuousVector,
    other_mass: f64,
    other_position: ContinuousVector,
    other_velocity: ContinuousVector,
) -> ContinuousVector {
    let offset = position - other_position;
    let distance_squared = offset.length_squared();
    if approx_zero(distance_squared) {
        return velocity;
    }

    let mass_term = 2.0 * other_mass / (mass + other_mass);
    let projection = (velocity - other_velocity).dot(&offset) / distance_squared;
    velocity - offset * (mass_term * projection)
}

/// Post-collision velocities of both bodies of an elastic collision.
///
/// Conserves total momentum and kinetic energy for any pair of positive masses.
pub fn elastic_velocities<A, B>(a: &A, b: &B) -> (ContinuousVector, ContinuousVector)
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    let (position_a, position_b) = (a.position().to_continuous(), b.position().to_continuous());
    (
        elastic_velocity(a.mass(), position_a, a.velocity(), b.mass(), position_b, b.velocity()),
        elastic_velocity(b.mass(), position_b, b.velocity(), a.mass(), position_a, a.velocity()),
    )
}

/// Bounces two circular bodies off each other.
///
/// Overlapping bodies are first pushed apart along the line of centers, each by
/// half the overlap plus `clearance`, so they do not stay tangled. If the pair
/// is already moving apart nothing else happens; otherwise both velocities
/// are replaced by the elastic collision result. Returns true if the
/// velocities changed.
pub fn bounce<A, B>(a: &mut A, b: &mut B, clearance: FixedDistance) -> bool
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    let mut separation = (a.position() - b.position()).to_continuous();
    let radius_sum = a.radius() as f64 + b.radius() as f64;
    let overlap = radius_sum - separation.length();

    if overlap > 0.0 {
        if separation.is_zero() {
            // Coincident centers have no line of centers; pick the x axis
            separation = ContinuousVector::new(1.0, 0.0);
        }
        separation.set_length(0.5 * overlap + clearance as f64);
        let push = separation.round_to_fixed();
        a.motion_mut().position += push;
        b.motion_mut().position -= push;
    }

    let velocity_away = (a.velocity() - b.velocity()).dot(&separation);
    if velocity_away > 0.0 {
        return false;
    }

    let (velocity_a, velocity_b) = elastic_velocities(a, b);
    trace!(
        "bounce: overlap {:.2}, velocities {} / {} -> {} / {}",
        overlap,
        a.velocity(),
        b.velocity(),
        velocity_a,
        velocity_b
    );
    a.motion_mut().velocity = velocity_a;
    b.motion_mut().velocity = velocity_b;
    true
}

/// Same as [`bounce`] for bodies that may sit near opposite playfield edges.
///
/// Both bodies end in canonical playfield coordinates whatever the outcome.
pub fn bounce_wrapped<A, B>(
    a: &mut A,
    b: &mut B,
    playfield: &Playfield,
    clearance: FixedDistance,
) -> bool
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    unwrap_positions(a, b, playfield);
    let bounced = bounce(a, b, clearance);
    rewrap_positions(a, b, playfield);
    bounced
}

/// Soft pushback: moves both bodies apart along the line of centers by half
/// the overlap each (at least half a unit), leaving velocities untouched
pub fn push_apart<A, B>(a: &mut A, b: &mut B)
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    let mut separation = (a.position() - b.position()).to_continuous();
    let radius_sum = a.radius() as f64 + b.radius() as f64;
    let overlap = (radius_sum - separation.length()).max(1.0);

    if separation.is_zero() {
        separation = ContinuousVector::new(1.0, 0.0);
    }
    separation.set_length(overlap / 2.0);
    let push = separation.round_to_fixed();
    a.motion_mut().position += push;
    b.motion_mut().position -= push;
}

/// Reflects a velocity about a surface normal: `v - 2 (v.n / |n|^2) n`.
///
/// A zero normal leaves the velocity unchanged.
pub fn reflect(velocity: ContinuousVector, normal: ContinuousVector) -> ContinuousVector {
    let normal_squared = normal.length_squared();
    if approx_zero(normal_squared) {
        return velocity;
    }
    velocity - normal * (2.0 * velocity.dot(&normal) / normal_squared)
}

/// Bounces a point-like body off a rectangle: the velocity is reflected about
/// the surface normal nearest the body and the body is placed on the surface.
///
/// A body already heading away from the surface is left alone and `None` is
/// returned, so a body still overlapping on the way out is not turned back.
pub fn reflect_off_rectangle<B>(body: &mut B, rect: &OrientedRect) -> Option<SurfaceContact>
where
    B: MovingBody + ?Sized,
{
    let contact = rect.surface_contact(body.position().to_continuous());
    let motion = body.motion_mut();
    if motion.velocity.dot(&contact.normal) >= 0.0 {
        return None;
    }
    motion.velocity = reflect(motion.velocity, contact.normal);
    motion.place(contact.point.round_to_fixed());
    Some(contact)
}

/// Pushes a body off a rectangle by `step` along the nearest surface normal
/// and stops it dead
pub fn push_out_of_rectangle<B>(body: &mut B, rect: &OrientedRect, step: FixedDistance) -> SurfaceContact
where
    B: MovingBody + ?Sized,
{
    let contact = rect.surface_contact(body.position().to_continuous());
    let motion = body.motion_mut();
    motion.position = motion.position.offset(contact.normal * step as f64);
    motion.velocity = ContinuousVector::zero();
    contact
}
