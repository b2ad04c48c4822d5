use arcade_physics::math::{round_to_fixed, ContinuousVector, FixedVector, LocalFrame, UnitConverter};
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn test_continuous_vector_operations() {
    let v1 = ContinuousVector::new(1.0, 2.0);
    let v2 = ContinuousVector::new(3.0, -4.0);

    // Addition and subtraction
    assert_eq!(v1 + v2, ContinuousVector::new(4.0, -2.0));
    assert_eq!(v2 - v1, ContinuousVector::new(2.0, -6.0));

    // Scaling
    assert_eq!(v1 * 2.0, ContinuousVector::new(2.0, 4.0));
    assert_eq!(2.0 * v1, ContinuousVector::new(2.0, 4.0));
    assert_eq!(v2 / 2.0, ContinuousVector::new(1.5, -2.0));
    assert_eq!(-v1, ContinuousVector::new(-1.0, -2.0));

    // Products
    assert_eq!(v1.dot(&v2), 3.0 - 8.0);
    assert_eq!(v1.cross(&v2), -4.0 - 6.0);

    // Length
    assert_eq!(v2.length_squared(), 25.0);
    assert_eq!(v2.length(), 5.0);
    assert_relative_eq!(v2.to_unit().length(), 1.0);
}

#[test]
fn test_continuous_vector_polar_form() {
    let v = ContinuousVector::from_polar(2.0, FRAC_PI_2);
    assert_relative_eq!(v, ContinuousVector::new(0.0, 2.0), epsilon = 1e-12);
    assert_relative_eq!(v.angle(), FRAC_PI_2);

    let rotated = ContinuousVector::new(1.0, 0.0).rotated(PI);
    assert_relative_eq!(rotated, ContinuousVector::new(-1.0, 0.0), epsilon = 1e-12);

    let mut v = ContinuousVector::new(3.0, 4.0);
    v.set_angle(0.0);
    assert_relative_eq!(v, ContinuousVector::new(5.0, 0.0), epsilon = 1e-12);

    v.set_length(2.0);
    assert_relative_eq!(v, ContinuousVector::new(2.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_zero_vector_has_no_direction() {
    let mut zero = ContinuousVector::zero();
    assert!(zero.is_zero());
    assert_eq!(zero.to_unit(), ContinuousVector::zero());

    zero.set_length(10.0);
    assert_eq!(zero, ContinuousVector::zero());
}

#[test]
fn test_fixed_vector_operations() {
    let a = FixedVector::new(30, -40);
    let b = FixedVector::new(10, 20);

    assert_eq!(a + b, FixedVector::new(40, -20));
    assert_eq!(a - b, FixedVector::new(20, -60));
    assert_eq!(b * 3, FixedVector::new(30, 60));
    assert_eq!(-b, FixedVector::new(-10, -20));

    assert_eq!(a.dot(&b), 300 - 800);
    assert_eq!(a.length_squared(), 2500);
    assert_eq!(a.length(), 50.0);
    assert_eq!(a.distance_squared(&b), 400 + 3600);

    assert_eq!(FixedVector::new(10, 4).scaled(0.5), FixedVector::new(5, 2));
    assert_eq!(
        FixedVector::new(10, 10).offset(ContinuousVector::new(0.4, 0.6)),
        FixedVector::new(10, 11)
    );
}

#[test]
fn test_fixed_vector_saturates() {
    let max = FixedVector::new(i64::MAX, i64::MIN);
    assert_eq!(max + FixedVector::new(1, -1), max);
    assert_eq!(max - FixedVector::new(-1, 1), max);

    // Squared lengths are computed in 128 bits
    let far = FixedVector::new(i64::MAX, i64::MAX);
    assert_eq!(far.length_squared(), 2 * (i64::MAX as i128) * (i64::MAX as i128));
}

#[test]
fn test_fixed_vector_rotation() {
    let v = FixedVector::new(100, 0);
    assert_eq!(v.rotated(FRAC_PI_2), FixedVector::new(0, 100));
    assert_eq!(v.rotated(PI), FixedVector::new(-100, 0));
    assert_eq!(FixedVector::from_polar(50.0, -FRAC_PI_2), FixedVector::new(0, -50));

    let mut w = FixedVector::new(3, 4);
    w.set_length(10.0);
    assert_eq!(w, FixedVector::new(6, 8));
    assert_relative_eq!(w.to_unit(), ContinuousVector::new(0.6, 0.8), epsilon = 1e-12);
}

#[test]
fn test_fixed_vector_wrapping() {
    assert_eq!(FixedVector::new(-5, 305).wrapped(400, 300), FixedVector::new(395, 5));
    assert_eq!(FixedVector::new(400, 0).wrapped(400, 300), FixedVector::new(0, 0));
    assert_eq!(FixedVector::new(-800, -1).wrapped(400, 300), FixedVector::new(0, 299));
}

#[test]
fn test_round_to_fixed() {
    assert_eq!(round_to_fixed(2.4), 2);
    assert_eq!(round_to_fixed(2.5), 3);
    assert_eq!(round_to_fixed(-2.5), -3);
    assert_eq!(round_to_fixed(f64::NAN), 0);
    assert_eq!(round_to_fixed(1e300), i64::MAX);
    assert_eq!(round_to_fixed(-1e300), i64::MIN);
}

#[test]
fn test_unit_conversions() {
    let units = UnitConverter::default();
    assert_eq!(units.distance_unit(), 100);
    assert_eq!(units.time_unit(), 1000);

    assert_eq!(units.distance_from_pixels(3), 300);
    assert_eq!(units.distance_from_meters(0.1), 10);
    assert_eq!(units.distance_from_meters(2.5), 250);
    assert_eq!(units.time_from_seconds(0.016), 16);
    assert_eq!(units.time_from_millis(16), 16);

    // One division by the time unit per derivative order
    assert_relative_eq!(units.velocity(1.0), 0.1);
    assert_relative_eq!(units.acceleration(1.0), 0.0001);
    assert_relative_eq!(units.angular_velocity(PI), PI / 1000.0);
    assert_relative_eq!(units.angular_acceleration(1.0), 1e-6);

    assert_eq!(units.to_pixels(350), 3);
    assert_eq!(units.to_pixels(-350), -3);
    assert_eq!(units.vector_to_pixels(FixedVector::new(1250, 99)), [12, 0]);
}

#[test]
fn test_custom_unit_scales() {
    let units = UnitConverter::new(10, 100).unwrap();
    assert_eq!(units.distance_from_meters(1.5), 15);
    assert_eq!(units.time_from_millis(500), 50);
    assert_relative_eq!(units.velocity(1.0), 0.1);

    assert!(UnitConverter::new(0, 1000).is_err());
    assert!(UnitConverter::new(100, -1).is_err());
}

#[test]
fn test_pixel_conversions_saturate() {
    let units = UnitConverter::default();
    assert_eq!(units.to_pixels(i64::MAX), i32::MAX);
    assert_eq!(units.to_pixels(i64::MIN), i32::MIN);
    assert_eq!(units.to_pixels(-250), -2);

    let coarse = UnitConverter::new(i64::MAX / 2, 1000).unwrap();
    assert_eq!(coarse.distance_from_pixels(3), i64::MAX);
    assert_eq!(coarse.distance_from_pixels(-3), i64::MIN);
    assert_eq!(coarse.distance_from_pixels(1), i64::MAX / 2);
}

#[test]
fn test_local_frame() {
    let frame = LocalFrame::new(FixedVector::new(100, 0), FRAC_PI_2);
    assert_relative_eq!(frame.angle(), FRAC_PI_2);

    let local = frame.to_local(ContinuousVector::new(100.0, 10.0));
    assert_relative_eq!(local, ContinuousVector::new(10.0, 0.0), epsilon = 1e-9);

    let world = frame.to_world(ContinuousVector::new(10.0, 0.0));
    assert_relative_eq!(world, ContinuousVector::new(100.0, 10.0), epsilon = 1e-9);

    let direction = frame.direction_to_world(ContinuousVector::new(1.0, 0.0));
    assert_relative_eq!(direction, ContinuousVector::new(0.0, 1.0), epsilon = 1e-12);
}
