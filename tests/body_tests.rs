use arcade_physics::bodies::{extrapolate_position, Motion};
use arcade_physics::{
    Aged, AgedBody, CircleBody, ContinuousVector, FixedVector, MovingBody, Outline, Playfield,
    PolygonBody, RectangleBody, RotatingBody, SimulationConfig, UnitConverter,
};
use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_circle_body_creation() {
    let body = CircleBody::new(10, 2.0).unwrap();

    assert_eq!(body.radius(), 10);
    assert_eq!(body.mass(), 2.0);
    assert!(body.position().is_zero());
    assert!(body.velocity().is_zero());
    assert!(body.acceleration().is_zero());

    assert!(CircleBody::new(-1, 1.0).is_err());
    assert!(CircleBody::new(10, 0.0).is_err());
    assert!(CircleBody::new(10, f64::NAN).is_err());
}

#[test]
fn test_bullet_uses_session_radius() {
    let config = SimulationConfig::default();
    let bullet = CircleBody::bullet(&config).unwrap();

    assert_eq!(bullet.radius(), 100);
    assert_eq!(bullet.mass(), 1.0);
}

#[test]
fn test_constant_velocity_motion() {
    let mut body = CircleBody::new(5, 1.0)
        .unwrap()
        .with_position(FixedVector::new(100, 100))
        .with_velocity(ContinuousVector::new(0.5, -0.25));

    body.advance(16);

    assert_eq!(body.position(), FixedVector::new(108, 96));
    assert_eq!(body.velocity(), ContinuousVector::new(0.5, -0.25));
}

#[test]
fn test_accelerated_motion_keeps_fractions() {
    let mut body = CircleBody::new(5, 1.0)
        .unwrap()
        .with_acceleration(ContinuousVector::new(0.001, 0.0));

    // 0.2 units after the first step stays in the remainder
    body.advance(20);
    assert_eq!(body.position(), FixedVector::zero());
    assert_relative_eq!(body.velocity().x, 0.02);

    // a t^2 / 2 at t = 40 is 0.8 units
    body.advance(20);
    assert_eq!(body.position(), FixedVector::new(1, 0));
    assert_relative_eq!(body.velocity().x, 0.04);
}

#[test]
fn test_motion_place_drops_remainder() {
    let mut motion = Motion::moving(FixedVector::zero(), ContinuousVector::new(0.3, 0.0));
    motion.integrate(1);
    assert!(motion.remainder().x > 0.0);

    motion.place(FixedVector::new(50, 50));
    assert_eq!(motion.position, FixedVector::new(50, 50));
    assert!(motion.remainder().is_zero());
}

#[test]
fn test_wrap_position() {
    let playfield = Playfield::new(400, 300).unwrap();
    let mut body = CircleBody::new(5, 1.0)
        .unwrap()
        .with_position(FixedVector::new(395, 10))
        .with_velocity(ContinuousVector::new(1.0, -2.0));

    body.advance(10);
    assert_eq!(body.position(), FixedVector::new(405, -10));

    body.wrap_position(&playfield);
    assert_eq!(body.position(), FixedVector::new(5, 290));
    assert!(playfield.contains(body.position()));
}

#[test]
fn test_rectangle_body() {
    let rect = RectangleBody::new(40, 20).unwrap();

    assert_eq!(rect.half_extents(), FixedVector::new(20, 10));
    // ceil(sqrt(20^2 + 10^2))
    assert_eq!(rect.radius(), 23);
    assert_eq!(rect.mass(), 800.0);

    assert!(RectangleBody::new(0, 10).is_err());
    assert!(RectangleBody::from_half_extents(FixedVector::new(5, -1)).is_err());
}

#[test]
fn test_rectangle_spins_while_moving() {
    let mut rect = RectangleBody::new(40, 20)
        .unwrap()
        .with_velocity(ContinuousVector::new(0.1, 0.0));
    rect.spin_mut().angular_velocity = 0.001;

    rect.advance(100);

    assert_eq!(rect.position(), FixedVector::new(10, 0));
    assert_relative_eq!(rect.angle(), 0.1);
}

#[test]
fn test_rotated_rectangle_contains_point() {
    let rect = RectangleBody::new(40, 20).unwrap().with_angle(FRAC_PI_2);

    // Turned a quarter, the long side runs along y
    assert!(rect.contains_point(FixedVector::new(0, 15)));
    assert!(!rect.contains_point(FixedVector::new(15, 0)));
    assert!(rect.contains_point(FixedVector::new(5, -15)));
}

#[test]
fn test_rectangle_outline() {
    let rect = RectangleBody::new(40, 20)
        .unwrap()
        .with_position(FixedVector::new(100, 100))
        .with_velocity(ContinuousVector::new(1.0, 0.0));

    assert_eq!(
        rect.outline_vertices(0.0),
        vec![
            FixedVector::new(120, 110),
            FixedVector::new(80, 110),
            FixedVector::new(80, 90),
            FixedVector::new(120, 90),
        ]
    );

    // Extrapolated half a tick along the velocity
    let ahead = rect.outline_vertices(5.0);
    assert_eq!(ahead[0], FixedVector::new(125, 110));
    assert_eq!(ahead[2], FixedVector::new(85, 90));
}

#[test]
fn test_outline_polygon_in_pixels() {
    let units = UnitConverter::default();
    let rect = RectangleBody::new(400, 200)
        .unwrap()
        .with_position(FixedVector::new(1000, 1000));

    let polygon = rect.outline_polygon(0.0, &units);
    assert_eq!(polygon.points, vec![[12, 11], [8, 11], [8, 9], [12, 9]]);
}

fn ship() -> PolygonBody {
    let outline = vec![
        ContinuousVector::new(30.0, 0.0),
        ContinuousVector::new(-10.0, 10.0),
        ContinuousVector::new(-10.0, -10.0),
    ];
    PolygonBody::new(outline, 10, 2.0).unwrap()
}

#[test]
fn test_polygon_body() {
    let body = ship();

    assert_eq!(body.core_radius(), 10);
    // The nose reaches further than the core
    assert_eq!(body.radius(), 30);
    assert_eq!(body.mass(), 2.0);
    assert_eq!(body.relative_outline().len(), 3);

    assert!(PolygonBody::new(Vec::new(), 10, 1.0).is_err());
    assert!(PolygonBody::new(vec![ContinuousVector::new(1.0, 0.0)], -1, 1.0).is_err());
}

#[test]
fn test_polygon_outline_follows_heading() {
    let body = ship()
        .with_position(FixedVector::new(100, 100))
        .with_angle(FRAC_PI_2);

    assert_eq!(
        body.outline_vertices(0.0),
        vec![
            FixedVector::new(100, 130),
            FixedVector::new(90, 90),
            FixedVector::new(110, 90),
        ]
    );
}

#[test]
fn test_polygon_from_world_outline() {
    let vertices = [
        FixedVector::new(0, 0),
        FixedVector::new(30, 0),
        FixedVector::new(0, 30),
    ];
    let body = PolygonBody::from_world_outline(&vertices, 1.0).unwrap();

    assert_eq!(body.position(), FixedVector::new(10, 10));
    assert_eq!(body.core_radius(), 0);
    assert_eq!(body.outline_vertices(0.0), vertices.to_vec());

    assert!(PolygonBody::from_world_outline(&[], 1.0).is_err());
}

#[test]
fn test_aged_body_expires() {
    let mut bullet = Aged::new(
        CircleBody::new(1, 1.0)
            .unwrap()
            .with_velocity(ContinuousVector::new(1.0, 0.0)),
    );

    bullet.advance(16);
    bullet.advance(16);

    assert_eq!(bullet.age(), 32);
    assert_eq!(bullet.position(), FixedVector::new(32, 0));
    assert!(bullet.is_expired(32));
    assert!(!bullet.is_expired(33));

    bullet.add_age(1);
    assert!(bullet.is_expired(33));
    assert_eq!(bullet.into_inner().position(), FixedVector::new(32, 0));
}

#[test]
fn test_aged_body_keeps_capabilities() {
    let mut debris = Aged::new(RectangleBody::new(20, 20).unwrap());
    debris.spin_mut().angular_velocity = 0.01;
    debris.advance(10);

    assert_relative_eq!(debris.angle(), 0.1);
    assert_eq!(debris.outline_vertices(0.0).len(), 4);
    assert_eq!(debris.inner().angle(), debris.angle());
}

#[test]
fn test_extrapolate_position() {
    let body = CircleBody::new(5, 1.0)
        .unwrap()
        .with_position(FixedVector::new(10, 10))
        .with_velocity(ContinuousVector::new(0.5, -1.0));

    assert_eq!(extrapolate_position(&body, 8.0), FixedVector::new(14, 2));
    // Extrapolation does not move the body
    assert_eq!(body.position(), FixedVector::new(10, 10));
}

#[test]
fn test_split_steps_match_single_step() {
    let start = CircleBody::new(5, 1.0)
        .unwrap()
        .with_position(FixedVector::new(1000, -500))
        .with_velocity(ContinuousVector::new(0.4, 0.25))
        .with_acceleration(ContinuousVector::new(0.002, -0.001));

    let mut once = start.clone();
    once.advance(200);

    let mut twice = start;
    twice.advance(100);
    twice.advance(100);

    // Constant acceleration is integrated exactly, up to one unit of rounding
    let offset = once.position() - twice.position();
    assert!(offset.x.abs() <= 1 && offset.y.abs() <= 1);
    assert_relative_eq!(once.velocity(), twice.velocity(), epsilon = 1e-12);
}
