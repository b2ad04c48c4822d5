use crate::math::{ContinuousVector, FixedDistance, FixedVector, LocalFrame};

/// The collision geometry of a body at its current position
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// A circle (asteroids, bullets, ships)
    Circle(Circle),

    /// A rectangle rotated about its center (tanks, walls)
    Rectangle(OrientedRect),

    /// A polygon outline with a bounding circle
    Hull(Hull),
}

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: FixedVector,
    pub radius: FixedDistance,
}

/// A rectangle in world space, rotated by `angle` about its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    /// The rectangle's center
    pub center: FixedVector,

    /// Half width and half height in the rectangle's unrotated frame
    pub half_extents: FixedVector,

    /// Counter-clockwise rotation in radians
    pub angle: f64,
}

/// A polygon outline in world space around a circular core.
///
/// The outline may reach beyond the core (a ship's nose and wing tips).
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    pub center: FixedVector,
    pub core_radius: FixedDistance,
    pub vertices: Vec<FixedVector>,
}

/// The nearest point on a surface and the outward unit normal there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContact {
    /// The nearest point on the surface, in world space
    pub point: ContinuousVector,

    /// The outward unit normal at that point
    pub normal: ContinuousVector,
}

impl Collider {
    /// Returns the collider's reference point
    pub fn center(&self) -> FixedVector {
        match self {
            Collider::Circle(circle) => circle.center,
            Collider::Rectangle(rect) => rect.center,
            Collider::Hull(hull) => hull.center,
        }
    }

    /// Returns the radius of a circle around `center` that contains the whole shape
    pub fn bounding_radius(&self) -> FixedDistance {
        match self {
            Collider::Circle(circle) => circle.radius,
            Collider::Rectangle(rect) => rect.bounding_radius(),
            Collider::Hull(hull) => hull.bounding_radius(),
        }
    }
}

impl Circle {
    /// Creates a new circle
    pub fn new(center: FixedVector, radius: FixedDistance) -> Self {
        Self { center, radius }
    }

    /// Returns true if the point lies inside or on the circle
    pub fn contains_point(&self, point: FixedVector) -> bool {
        point.distance_squared(&self.center) <= self.radius as i128 * self.radius as i128
    }
}

impl OrientedRect {
    /// Creates a new oriented rectangle
    pub fn new(center: FixedVector, half_extents: FixedVector, angle: f64) -> Self {
        Self { center, half_extents, angle }
    }

    /// The rectangle's local frame
    pub fn frame(&self) -> LocalFrame {
        LocalFrame::new(self.center, self.angle)
    }

    /// Half the diagonal, rounded up so the circle always contains the corners
    pub fn bounding_radius(&self) -> FixedDistance {
        self.half_extents.length().ceil() as FixedDistance
    }

    /// The corners in world space, counter-clockwise from the first quadrant
    pub fn corners(&self) -> [ContinuousVector; 4] {
        let frame = self.frame();
        let hx = self.half_extents.x as f64;
        let hy = self.half_extents.y as f64;
        [
            frame.to_world(ContinuousVector::new(hx, hy)),
            frame.to_world(ContinuousVector::new(-hx, hy)),
            frame.to_world(ContinuousVector::new(-hx, -hy)),
            frame.to_world(ContinuousVector::new(hx, -hy)),
        ]
    }

    /// Returns true if the point lies inside or on the rectangle
    pub fn contains_point(&self, point: ContinuousVector) -> bool {
        let local = self.frame().to_local(point);
        local.x.abs() <= self.half_extents.x as f64 && local.y.abs() <= self.half_extents.y as f64
    }

    /// Finds the nearest boundary point to `point` and the outward normal there.
    ///
    /// The point is classified into one of nine regions of the rectangle's
    /// local frame: four corners, four edges, or the interior. Interior points
    /// project onto the nearest edge.
    pub fn surface_contact(&self, point: ContinuousVector) -> SurfaceContact {
        let frame = self.frame();
        let local = frame.to_local(point);
        let hx = self.half_extents.x as f64;
        let hy = self.half_extents.y as f64;

        let right = local.x > hx;
        let left = local.x < -hx;
        let above = local.y > hy;
        let below = local.y < -hy;

        if (right || left) && (above || below) {
            // Corner regions: the normal points from the corner to the point
            let corner = ContinuousVector::new(hx.copysign(local.x), hy.copysign(local.y));
            let surface = frame.to_world(corner);
            return SurfaceContact {
                point: surface,
                normal: (point - surface).to_unit(),
            };
        }

        // Interior points go to whichever edge is closer
        let vertical_edge = right
            || left
            || (!above && !below && hx - local.x.abs() <= hy - local.y.abs());

        let (surface, local_normal) = if vertical_edge {
            (
                ContinuousVector::new(hx.copysign(local.x), local.y),
                ContinuousVector::new(1.0f64.copysign(local.x), 0.0),
            )
        } else {
            (
                ContinuousVector::new(local.x, hy.copysign(local.y)),
                ContinuousVector::new(0.0, 1.0f64.copysign(local.y)),
            )
        };

        SurfaceContact {
            point: frame.to_world(surface),
            normal: frame.direction_to_world(local_normal),
        }
    }
}

impl Hull {
    /// Creates a new hull
    pub fn new(center: FixedVector, core_radius: FixedDistance, vertices: Vec<FixedVector>) -> Self {
        Self { center, core_radius, vertices }
    }

    /// The circular core
    pub fn core(&self) -> Circle {
        Circle::new(self.center, self.core_radius)
    }

    /// The smallest radius around `center` containing both the core and every vertex
    pub fn bounding_radius(&self) -> FixedDistance {
        self.vertices
            .iter()
            .map(|vertex| (*vertex - self.center).length().ceil() as FixedDistance)
            .fold(self.core_radius, FixedDistance::max)
    }
}
