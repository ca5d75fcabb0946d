//! Fixed-length component storage shared by the vector types.

use anyhow::{Result, bail};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

/// An owned, contiguous sequence of `N` single-precision components.
///
/// The length is part of the type, so it can never change after
/// construction. Component-wise arithmetic lives here so that each vector
/// type only has to map its named components onto indices.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorBuffer<const N: usize> {
    values: [f32; N],
}

// SAFETY: `VectorBuffer` is a transparent wrapper around `[f32; N]`, which
// has no padding and is valid for any bit pattern, including all zeros.
unsafe impl<const N: usize> Zeroable for VectorBuffer<N> {}

// SAFETY: See above.
unsafe impl<const N: usize> Pod for VectorBuffer<N> {}

impl<const N: usize> VectorBuffer<N> {
    /// Creates a buffer holding the given components.
    #[inline]
    pub const fn new(values: [f32; N]) -> Self {
        Self { values }
    }

    /// Creates a buffer with all components zero.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new([0.0; N])
    }

    /// Creates a buffer from a slice of components.
    ///
    /// # Errors
    /// Returns an error if the slice does not have exactly `N` elements.
    pub fn try_from_slice(values: &[f32]) -> Result<Self> {
        if values.len() != N {
            bail!(
                "Expected {} vector components, got {}",
                N,
                values.len()
            );
        }
        let mut buffer = Self::zeros();
        buffer.values.copy_from_slice(values);
        Ok(buffer)
    }

    /// The components in index order.
    #[inline]
    pub const fn values(&self) -> &[f32; N] {
        &self.values
    }

    #[inline]
    pub(crate) const fn values_mut(&mut self) -> &mut [f32; N] {
        &mut self.values
    }

    /// Computes the Euclidean magnitude of the components. This is
    /// recomputed on every call.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        magnitude(&self.values)
    }

    /// Computes the sum of the squared components.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        magnitude_squared(&self.values)
    }

    /// Adds each component of `other` to the corresponding component.
    #[inline]
    pub fn add_assign(&mut self, other: &Self) {
        for (value, other) in self.values.iter_mut().zip(&other.values) {
            *value += other;
        }
    }

    /// Subtracts each component of `other` from the corresponding component.
    #[inline]
    pub fn sub_assign(&mut self, other: &Self) {
        for (value, other) in self.values.iter_mut().zip(&other.values) {
            *value -= other;
        }
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub fn scale(&mut self, factor: f32) {
        for value in &mut self.values {
            *value *= factor;
        }
    }

    /// Computes the sum of the products of corresponding components.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Scales the components by the reciprocal of their magnitude. When the
    /// magnitude is not positive (zero or NaN) the components are left as
    /// they are and `false` is returned.
    ///
    /// The magnitude and the scaling are evaluated in `f64`, so vectors whose
    /// squared components would overflow or underflow `f32` still come out
    /// with unit length.
    #[inline]
    pub fn normalize(&mut self) -> bool {
        let magnitude = magnitude_f64(&self.values);
        if magnitude > 0.0 {
            let inverse_magnitude = 1.0 / magnitude;
            for value in &mut self.values {
                *value = (f64::from(*value) * inverse_magnitude) as f32;
            }
            true
        } else {
            false
        }
    }
}

impl<const N: usize> Default for VectorBuffer<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> AbsDiffEq for VectorBuffer<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for VectorBuffer<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Computes `sqrt(sum(v_i^2))` over the given components. The magnitude of
/// an empty or all-zero sequence is exactly zero.
///
/// The sum is accumulated in `f64`, so the result is only infinite or zero
/// when the true magnitude is outside the range of `f32`.
#[inline]
pub fn magnitude(values: &[f32]) -> f32 {
    magnitude_f64(values) as f32
}

/// Computes `sum(v_i^2)` over the given components, accumulated in `f64`.
#[inline]
pub fn magnitude_squared(values: &[f32]) -> f32 {
    magnitude_squared_f64(values) as f32
}

#[inline]
fn magnitude_f64(values: &[f32]) -> f64 {
    magnitude_squared_f64(values).sqrt()
}

#[inline]
fn magnitude_squared_f64(values: &[f32]) -> f64 {
    values
        .iter()
        .map(|&value| {
            let value = f64::from(value);
            value * value
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, relative_eq};

    const EPSILON: f32 = 1e-6;

    #[test]
    fn magnitude_of_zero_components_is_exactly_zero() {
        assert_eq!(magnitude(&[0.0, 0.0]), 0.0);
        assert_eq!(magnitude(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(magnitude(&[]), 0.0);
    }

    #[test]
    fn computing_magnitude_works() {
        assert_abs_diff_eq!(magnitude(&[3.0, 4.0]), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(magnitude(&[2.0, 3.0, 6.0]), 7.0, epsilon = EPSILON);
        assert_abs_diff_eq!(magnitude_squared(&[2.0, 3.0, 6.0]), 49.0, epsilon = EPSILON);
    }

    #[test]
    fn magnitude_reflects_latest_components() {
        let mut buffer = VectorBuffer::new([3.0, 4.0]);
        assert_abs_diff_eq!(buffer.magnitude(), 5.0, epsilon = EPSILON);

        buffer.values_mut()[1] = 0.0;
        assert_abs_diff_eq!(buffer.magnitude(), 3.0, epsilon = EPSILON);
    }

    #[test]
    fn magnitude_of_huge_components_does_not_overflow() {
        let buffer = VectorBuffer::new([1e20, 1e20]);
        assert!(relative_eq!(
            buffer.magnitude(),
            1e20 * std::f32::consts::SQRT_2,
            max_relative = 1e-6
        ));
    }

    #[test]
    fn magnitude_of_tiny_components_does_not_underflow() {
        let buffer = VectorBuffer::new([1e-30, 0.0, 0.0]);
        assert!(relative_eq!(buffer.magnitude(), 1e-30, max_relative = 1e-6));
        assert!(buffer.magnitude() > 0.0);
    }

    #[test]
    fn magnitude_outside_f32_range_is_infinite() {
        assert_eq!(magnitude(&[f32::MAX, f32::MAX]), f32::INFINITY);
    }

    #[test]
    fn normalizing_huge_buffer_gives_unit_magnitude() {
        let mut buffer = VectorBuffer::new([1e20, 1e20]);
        assert!(buffer.normalize());
        assert_abs_diff_eq!(buffer.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            buffer.values()[0],
            std::f32::consts::FRAC_1_SQRT_2,
            epsilon = EPSILON
        );
    }

    #[test]
    fn normalizing_tiny_buffer_gives_unit_magnitude() {
        let mut buffer = VectorBuffer::new([1e-30, 0.0, 0.0]);
        assert!(buffer.normalize());
        assert_abs_diff_eq!(buffer.values()[0], 1.0, epsilon = EPSILON);
        assert_eq!(buffer.values()[1], 0.0);
    }

    #[test]
    fn normalizing_buffer_at_f32_limit_gives_unit_magnitude() {
        let mut buffer = VectorBuffer::new([f32::MAX, -f32::MAX, f32::MAX]);
        assert!(buffer.normalize());
        assert_abs_diff_eq!(buffer.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn magnitude_propagates_nan() {
        assert!(magnitude(&[f32::NAN, 1.0]).is_nan());
    }

    #[test]
    fn creating_buffer_from_slice_of_right_length_works() {
        let buffer = VectorBuffer::<3>::try_from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(buffer.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn creating_buffer_from_slice_of_wrong_length_fails() {
        let error = VectorBuffer::<2>::try_from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(error.to_string(), "Expected 2 vector components, got 3");
        assert!(VectorBuffer::<3>::try_from_slice(&[]).is_err());
    }

    #[test]
    fn default_buffer_is_all_zeros() {
        assert_eq!(VectorBuffer::<3>::default(), VectorBuffer::zeros());
        assert_eq!(VectorBuffer::<3>::default().values(), &[0.0; 3]);
    }

    #[test]
    fn componentwise_arithmetic_works() {
        let mut buffer = VectorBuffer::new([1.0, 2.0, 3.0]);
        buffer.add_assign(&VectorBuffer::new([1.0, 1.0, 1.0]));
        assert_eq!(buffer.values(), &[2.0, 3.0, 4.0]);

        buffer.sub_assign(&VectorBuffer::new([2.0, 2.0, 2.0]));
        assert_eq!(buffer.values(), &[0.0, 1.0, 2.0]);

        buffer.scale(-2.0);
        assert_eq!(buffer.values(), &[-0.0, -2.0, -4.0]);

        assert_abs_diff_eq!(
            buffer.dot(&VectorBuffer::new([1.0, 1.0, 1.0])),
            -6.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn normalizing_nonzero_buffer_gives_unit_magnitude() {
        let mut buffer = VectorBuffer::new([0.0, 3.0, 4.0]);
        assert!(buffer.normalize());
        assert_abs_diff_eq!(buffer.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_buffer_leaves_it_unchanged() {
        let mut buffer = VectorBuffer::<2>::zeros();
        assert!(!buffer.normalize());
        assert_eq!(buffer.values(), &[0.0, 0.0]);
    }

    #[test]
    fn buffers_can_be_viewed_as_raw_components() {
        let buffers = [VectorBuffer::new([1.0, 2.0]), VectorBuffer::new([3.0, 4.0])];
        let values: &[f32] = bytemuck::cast_slice(&buffers);
        assert_eq!(values, &[1.0, 2.0, 3.0, 4.0]);
    }
}
