//! Vectors.

mod vector2;
mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;

use crate::buffer;

/// Capabilities shared by every vector type: exposing its components and
/// measuring its Euclidean length.
pub trait Vector {
    /// The number of components.
    const DIMENSION: usize;

    /// The components in index order.
    fn values(&self) -> &[f32];

    /// Computes the Euclidean length (magnitude) of the vector.
    fn length(&self) -> f32 {
        buffer::magnitude(self.values())
    }

    /// Computes the square of the length of the vector.
    fn length_squared(&self) -> f32 {
        buffer::magnitude_squared(self.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn length_of(vector: &impl Vector) -> f32 {
        vector.length()
    }

    #[test]
    fn vector_dimensions_are_correct() {
        assert_eq!(Vector2::DIMENSION, 2);
        assert_eq!(Vector3::DIMENSION, 3);
    }

    #[test]
    fn trait_exposes_components_in_index_order() {
        assert_eq!(Vector::values(&Vector2::new(1.0, 2.0)), &[1.0, 2.0]);
        assert_eq!(Vector::values(&Vector3::new(1.0, 2.0, 3.0)), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn trait_length_agrees_with_inherent_length() {
        let v2 = Vector2::new(3.0, 4.0);
        let v3 = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(length_of(&v2), v2.length());
        assert_abs_diff_eq!(length_of(&v3), v3.length());
        assert_abs_diff_eq!(Vector::length_squared(&v3), 49.0, epsilon = 1e-6);
    }
}
