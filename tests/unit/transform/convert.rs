use super::*;
use std::f64::consts::PI;

fn assert_vec3_close(actual: Vec3, expected: Vec3, tol: f64) {
    assert!(
        (actual.x - expected.x).abs() < tol
            && (actual.y - expected.y).abs() < tol
            && (actual.z - expected.z).abs() < tol,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn direct_position_only_scales() {
    let t = CoordinateTransform::viewer();
    assert_eq!(
        t.position(Vec3::new(1.0, 2.0, 3.0)),
        Vec3::new(100.0, 200.0, 300.0)
    );
}

#[test]
fn swap_position_exchanges_y_and_z_before_scaling() {
    let t = CoordinateTransform::animation();
    // (x, y, z) -> (x, z, y), then x100.
    assert_eq!(
        t.position(Vec3::new(1.0, 2.0, 3.0)),
        Vec3::new(100.0, 300.0, 200.0)
    );
}

#[test]
fn radians_convert_to_degrees() {
    let t = CoordinateTransform::viewer();
    assert_vec3_close(
        t.rotation(Vec3::new(PI / 2.0, PI, PI / 4.0)),
        Vec3::new(90.0, 180.0, 45.0),
        1e-6,
    );
}

#[test]
fn swap_permutes_rotation_components_with_the_axes() {
    let t = CoordinateTransform::animation();
    assert_vec3_close(
        t.rotation(Vec3::new(PI / 2.0, PI, PI / 4.0)),
        Vec3::new(90.0, 45.0, 180.0),
        1e-6,
    );
}

#[test]
fn degrees_pass_through_unchanged() {
    let t = CoordinateTransform {
        angle_unit: AngleUnit::Degrees,
        ..CoordinateTransform::viewer()
    };
    assert_eq!(
        t.rotation(Vec3::new(90.0, 180.0, 45.0)),
        Vec3::new(90.0, 180.0, 45.0)
    );
}

#[test]
fn auto_heuristic_keys_on_pi_magnitude() {
    let t = CoordinateTransform {
        angle_unit: AngleUnit::Auto,
        ..CoordinateTransform::viewer()
    };
    // All components within pi: treated as radians.
    assert_vec3_close(
        t.rotation(Vec3::new(PI / 2.0, 0.0, 0.0)),
        Vec3::new(90.0, 0.0, 0.0),
        1e-6,
    );
    // Any component beyond pi: treated as already-degrees.
    assert_eq!(
        t.rotation(Vec3::new(170.0, 0.0, 0.0)),
        Vec3::new(170.0, 0.0, 0.0)
    );
}

#[test]
fn single_swap_is_not_an_identity_under_scale() {
    let t = CoordinateTransform::animation();
    let once = t.position(Vec3::new(1.0, 2.0, 3.0));
    let twice = t.position(once);
    // Scale reapplies, so a double application is not the original point.
    assert_eq!(twice, Vec3::new(10_000.0, 20_000.0, 30_000.0));
}
