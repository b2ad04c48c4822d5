use crate::collision::collider::{Circle, Collider, Hull, OrientedRect};

/// Returns true if the two colliders overlap.
///
/// A cheap bounding-box check on the bounding radii runs first; the exact
/// test is picked from the pair of shapes.
pub fn is_touching(a: &Collider, b: &Collider) -> bool {
    if !bounding_boxes_overlap(a, b) {
        return false;
    }

    match (a, b) {
        (Collider::Circle(a), Collider::Circle(b)) => circles_touch(a, b),
        (Collider::Circle(circle), Collider::Rectangle(rect))
        | (Collider::Rectangle(rect), Collider::Circle(circle)) => circle_touches_rect(circle, rect),
        (Collider::Rectangle(a), Collider::Rectangle(b)) => rects_touch(a, b),
        (Collider::Hull(hull), Collider::Circle(circle))
        | (Collider::Circle(circle), Collider::Hull(hull)) => hull_touches_circle(hull, circle),
        (Collider::Hull(hull), Collider::Rectangle(rect))
        | (Collider::Rectangle(rect), Collider::Hull(hull)) => hull_touches_rect(hull, rect),
        (Collider::Hull(a), Collider::Hull(b)) => hull_touches_hull(a, b),
    }
}

/// Rejects pairs whose centers are further apart than the radius sum on either axis
pub fn bounding_boxes_overlap(a: &Collider, b: &Collider) -> bool {
    let radius_sum = a.bounding_radius() as i128 + b.bounding_radius() as i128;
    let (center_a, center_b) = (a.center(), b.center());
    (center_a.x as i128 - center_b.x as i128).abs() <= radius_sum
        && (center_a.y as i128 - center_b.y as i128).abs() <= radius_sum
}

/// Circle-circle overlap on squared distances
pub fn circles_touch(a: &Circle, b: &Circle) -> bool {
    let radius_sum = a.radius as i128 + b.radius as i128;
    a.center.distance_squared(&b.center) <= radius_sum * radius_sum
}

/// Circle-rectangle overlap in the rectangle's local frame.
///
/// The rectangle is grown by the circle radius along one axis at a time; a
/// center inside either grown rectangle touches. What remains are the four
/// corner regions, where the center must lie within one radius of the corner.
pub fn circle_touches_rect(circle: &Circle, rect: &OrientedRect) -> bool {
    let local = rect.frame().to_local(circle.center.to_continuous());
    let (x, y) = (local.x.abs(), local.y.abs());
    let (hx, hy) = (rect.half_extents.x as f64, rect.half_extents.y as f64);
    let radius = circle.radius as f64;

    if x <= hx + radius && y <= hy {
        return true;
    }
    if x <= hx && y <= hy + radius {
        return true;
    }

    let (corner_dx, corner_dy) = (x - hx, y - hy);
    corner_dx * corner_dx + corner_dy * corner_dy <= radius * radius
}

/// Rectangle-rectangle overlap by vertex containment.
///
/// Reports contact when a corner of either rectangle lies inside the other.
/// Two rectangles crossed like a plus sign overlap without any corner inside
/// the other and are not detected.
pub fn rects_touch(a: &OrientedRect, b: &OrientedRect) -> bool {
    a.corners().iter().any(|corner| b.contains_point(*corner))
        || b.corners().iter().any(|corner| a.contains_point(*corner))
}

/// Hull-circle overlap: an outline vertex inside the circle, or the core touching it
pub fn hull_touches_circle(hull: &Hull, circle: &Circle) -> bool {
    hull.vertices.iter().any(|vertex| circle.contains_point(*vertex))
        || circles_touch(&hull.core(), circle)
}

/// Hull-rectangle overlap: an outline vertex inside the rectangle, or the core touching it
pub fn hull_touches_rect(hull: &Hull, rect: &OrientedRect) -> bool {
    hull.vertices.iter().any(|vertex| rect.contains_point(vertex.to_continuous()))
        || circle_touches_rect(&hull.core(), rect)
}

/// Hull-hull overlap: an outline vertex of either hull inside the other's
/// core, or the two cores touching
pub fn hull_touches_hull(a: &Hull, b: &Hull) -> bool {
    let (core_a, core_b) = (a.core(), b.core());
    a.vertices.iter().any(|vertex| core_b.contains_point(*vertex))
        || b.vertices.iter().any(|vertex| core_a.contains_point(*vertex))
        || circles_touch(&core_a, &core_b)
}
