mod collider;
mod detector;
mod narrow_phase;
mod pairs;
mod playfield;
mod response;

pub use self::collider::{Circle, Collider, Hull, OrientedRect, SurfaceContact};
pub use self::detector::{bodies_touching, bodies_touching_wrapped, distance_squared};
pub use self::narrow_phase::{
    bounding_boxes_overlap, circle_touches_rect, circles_touch, hull_touches_circle,
    hull_touches_hull, hull_touches_rect, is_touching, rects_touch,
};
pub use self::pairs::for_each_pair_mut;
pub use self::playfield::{rewrap_positions, unwrap_positions, Playfield, Unwrapped};
pub use self::response::{
    bounce, bounce_wrapped, elastic_velocities, elastic_velocity, push_apart,
    push_out_of_rectangle, reflect, reflect_off_rectangle,
};
