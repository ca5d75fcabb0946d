use approx::assert_abs_diff_eq;
use vecmath::{Vector, Vector2, Vector3, VectorBuffer};

#[test]
fn vector2_of_three_and_four_has_length_five() {
    assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
}

#[test]
fn crossing_x_axis_with_y_axis_gives_z_axis() {
    let mut v = Vector3::new(1.0, 0.0, 0.0);
    v.cross(&Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(v, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn perpendicular_vector2s_have_zero_dot_product() {
    assert_eq!(
        Vector2::dot(&Vector2::new(1.0, 0.0), &Vector2::new(0.0, 1.0)),
        0.0
    );
}

#[test]
fn adding_to_vector2_mutates_receiver_in_place() {
    let mut v = Vector2::new(1.0, 2.0);
    let receiver: *const Vector2 = &v;
    let returned: *const Vector2 = v.add(&Vector2::new(3.0, 4.0));
    assert!(std::ptr::eq(receiver, returned));
    assert_eq!(v, Vector2::new(4.0, 6.0));
}

#[test]
fn static_vector3_subtraction_returns_new_vector() {
    let a = Vector3::new(5.0, 5.0, 5.0);
    let b = Vector3::new(1.0, 2.0, 3.0);
    let difference = Vector3::difference(&a, &b);
    assert_eq!(difference, Vector3::new(4.0, 3.0, 2.0));
    assert_eq!(a, Vector3::new(5.0, 5.0, 5.0));
    assert_eq!(b, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn fluent_chain_builds_unit_normal_of_triangle() {
    let p0 = Vector3::new(0.0, 0.0, 0.0);
    let p1 = Vector3::new(2.0, 0.0, 0.0);
    let p2 = Vector3::new(0.0, 3.0, 0.0);

    let mut normal = p1;
    normal.sub(&p0).cross(&Vector3::difference(&p2, &p0)).normalize();

    assert_abs_diff_eq!(normal, Vector3::unit_z(), epsilon = 1e-6);
    assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-6);
}

#[test]
fn zero_vectors_survive_normalization() {
    let mut v2 = Vector2::zeros();
    let mut v3 = Vector3::zeros();
    v2.normalize();
    v3.normalize();
    assert_eq!(v2.values(), &[0.0, 0.0]);
    assert_eq!(v3.values(), &[0.0, 0.0, 0.0]);
}

#[test]
fn generic_code_can_measure_any_vector() {
    fn lengths_of<V: Vector>(vectors: &[V]) -> Vec<f32> {
        vectors.iter().map(Vector::length).collect()
    }

    assert_eq!(
        lengths_of(&[Vector2::new(3.0, 4.0), Vector2::new(0.0, 1.0)]),
        vec![5.0, 1.0]
    );
    assert_eq!(lengths_of(&[Vector3::new(2.0, 3.0, 6.0)]), vec![7.0]);
}

#[test]
fn buffer_magnitude_matches_vector_length() {
    let buffer = VectorBuffer::new([2.0, 3.0, 6.0]);
    assert_eq!(buffer.magnitude(), Vector3::from(*buffer.values()).length());
}
