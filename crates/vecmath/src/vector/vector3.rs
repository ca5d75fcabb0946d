//! Spatial vectors.

use crate::{buffer::VectorBuffer, vector::Vector};
use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use core::fmt;
use vecmath_log::trace;

/// A 3-dimensional vector with components `x`, `y` and `z`.
///
/// Follows the same conventions as [`Vector2`](crate::Vector2): instance
/// methods mutate in place and return the receiver, while associated
/// functions and operators produce new vectors.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    buffer: VectorBuffer<3>,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            buffer: VectorBuffer::new([x, y, z]),
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            buffer: VectorBuffer::zeros(),
        }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.buffer.values()[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.buffer.values()[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.buffer.values()[2]
    }

    /// Replaces the x-component.
    #[inline]
    pub const fn set_x(&mut self, x: f32) {
        *self.x_mut() = x;
    }

    /// Replaces the y-component.
    #[inline]
    pub const fn set_y(&mut self, y: f32) {
        *self.y_mut() = y;
    }

    /// Replaces the z-component.
    #[inline]
    pub const fn set_z(&mut self, z: f32) {
        *self.z_mut() = z;
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.buffer.values_mut()[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.buffer.values_mut()[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.buffer.values_mut()[2]
    }

    /// The components as `[x, y, z]`.
    #[inline]
    pub const fn values(&self) -> &[f32; 3] {
        self.buffer.values()
    }

    /// Computes the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.buffer.magnitude()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.buffer.magnitude_squared()
    }

    /// Overwrites all three components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self.buffer.values_mut() = [x, y, z];
        self
    }

    /// Adds another vector to this one.
    #[inline]
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.buffer.add_assign(&other.buffer);
        self
    }

    /// Subtracts another vector from this one.
    #[inline]
    pub fn sub(&mut self, other: &Self) -> &mut Self {
        self.buffer.sub_assign(&other.buffer);
        self
    }

    /// Multiplies all components by the given factor.
    #[inline]
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.buffer.scale(factor);
        self
    }

    /// Computes the dot product of this vector with another. Can also be
    /// called as `Vector3::dot(&a, &b)`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Replaces this vector with its right-handed cross product with
    /// another.
    #[inline]
    pub fn cross(&mut self, other: &Self) -> &mut Self {
        *self = Self::cross_product(self, other);
        self
    }

    /// Scales the vector to unit length. A vector with zero length is left
    /// unchanged.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        if !self.buffer.normalize() {
            trace!("Left vector {} unnormalized since its length is not positive", self);
        }
        self
    }

    /// Computes the normalized version of the vector, or returns it unchanged
    /// if it has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Computes `a + b` as a new vector.
    #[inline]
    pub fn sum(a: &Self, b: &Self) -> Self {
        Self::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
    }

    /// Computes `a - b` as a new vector.
    #[inline]
    pub fn difference(a: &Self, b: &Self) -> Self {
        Self::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
    }

    /// Computes the right-handed cross product `a × b` as a new vector.
    #[inline]
    pub fn cross_product(a: &Self, b: &Self) -> Self {
        Self::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }
}

impl Vector for Vector3 {
    const DIMENSION: usize = 3;

    #[inline]
    fn values(&self) -> &[f32] {
        self.buffer.values()
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        *vector.values()
    }
}

impl TryFrom<&[f32]> for Vector3 {
    type Error = anyhow::Error;

    fn try_from(values: &[f32]) -> Result<Self> {
        Ok(Self {
            buffer: VectorBuffer::try_from_slice(values)?,
        })
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::sum(a, b)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::difference(a, b)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x() * b, a.y() * b, a.z() * b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| {
    Vector3::new(a * b.x(), a * b.y(), a * b.z())
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x() / b, a.y() / b, a.z() / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.add(b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.sub(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.scale(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.set(a.x() / b, a.y() / b, a.z() / b);
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x(), -val.y(), -val.z())
});

impl_approx_eq_via_buffer!(Vector3);

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
