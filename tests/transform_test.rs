use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};
use still_life::transform::{Transform, compose};

fn assert_close(actual: Vector4<f32>, expected: [f32; 4]) {
    let actual_arr: [f32; 4] = actual.into();
    for (a, e) in actual_arr.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }
}

#[test]
fn compose_is_deterministic() {
    let scale = Vector3::new(3.2, 0.7, 1.9);
    let translation = Vector3::new(-12.9, 3.65, -4.77);
    let first = compose(scale, 90.0, 10.0, -25.0, translation);
    let second = compose(scale, 90.0, 10.0, -25.0, translation);
    assert_eq!(first, second);
}

#[test]
fn neutral_parameters_compose_to_identity() {
    let matrix = compose(
        Vector3::new(1.0, 1.0, 1.0),
        0.0,
        0.0,
        0.0,
        Vector3::new(0.0, 0.0, 0.0),
    );
    assert_eq!(matrix, Matrix4::identity());
}

#[test]
fn rotation_axes_do_not_commute() {
    let scale = Vector3::new(2.0, 1.0, 1.0);
    let zero = Vector3::new(0.0, 0.0, 0.0);
    let about_x = compose(scale, 90.0, 0.0, 0.0, zero);
    let about_z = compose(scale, 0.0, 0.0, 90.0, zero);
    assert_ne!(about_x, about_z);
}

#[test]
fn scale_applies_before_rotation() {
    // (0, 1, 0) scaled to (0, 2, 0), then rotated 90 degrees about X
    // onto the Z axis. Rotating first would land on (0, 0, 1) scaled to
    // (0, 0, 1) instead.
    let matrix = compose(
        Vector3::new(1.0, 2.0, 1.0),
        90.0,
        0.0,
        0.0,
        Vector3::new(0.0, 0.0, 0.0),
    );
    let point = matrix * Vector4::new(0.0, 1.0, 0.0, 1.0);
    assert_close(point, [0.0, 0.0, 2.0, 1.0]);
}

#[test]
fn translation_applies_last() {
    let matrix = compose(
        Vector3::new(1.0, 1.0, 1.0),
        0.0,
        0.0,
        90.0,
        Vector3::new(5.0, 0.0, 0.0),
    );
    // (1, 0, 0) rotates onto the Y axis, then moves by the translation.
    let point = matrix * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_close(point, [5.0, 1.0, 0.0, 1.0]);
}

#[test]
fn angles_are_degrees() {
    let matrix = compose(
        Vector3::new(1.0, 1.0, 1.0),
        180.0,
        0.0,
        0.0,
        Vector3::new(0.0, 0.0, 0.0),
    );
    let point = matrix * Vector4::new(0.0, 1.0, 1.0, 1.0);
    assert_close(point, [0.0, -1.0, -1.0, 1.0]);
}

#[test]
fn transform_matrix_matches_compose() {
    let transform = Transform {
        scale: Vector3::new(4.0, 5.5, 4.0),
        rotation: Vector3::new(0.0, 10.0, 0.0),
        translation: Vector3::new(-12.0, 2.7, -7.0),
    };
    assert_eq!(
        transform.matrix(),
        compose(
            transform.scale,
            0.0,
            10.0,
            0.0,
            transform.translation
        )
    );
}
