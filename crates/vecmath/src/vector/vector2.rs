//! Planar vectors.

use crate::{buffer::VectorBuffer, vector::Vector};
use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use core::fmt;
use vecmath_log::trace;

/// A 2-dimensional vector with components `x` and `y`.
///
/// Instance methods such as [`add`](Self::add) and [`normalize`](Self::normalize)
/// modify the vector in place and return it, so calls can be chained.
/// Associated functions such as [`sum`](Self::sum) and the arithmetic
/// operators leave their operands alone and return a new vector.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    buffer: VectorBuffer<2>,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            buffer: VectorBuffer::new([x, y]),
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
        Self::new(value, value)
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

    /// The components as `[x, y]`.
    #[inline]
    pub const fn values(&self) -> &[f32; 2] {
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

    /// Overwrites both components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        *self.buffer.values_mut() = [x, y];
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

    /// Multiplies both components by the given factor.
    #[inline]
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.buffer.scale(factor);
        self
    }

    /// Computes the dot product of this vector with another. Can also be
    /// called as `Vector2::dot(&a, &b)`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
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
        Self::new(a.x() + b.x(), a.y() + b.y())
    }

    /// Computes `a - b` as a new vector.
    #[inline]
    pub fn difference(a: &Self, b: &Self) -> Self {
        Self::new(a.x() - b.x(), a.y() - b.y())
    }
}

impl Vector for Vector2 {
    const DIMENSION: usize = 2;

    #[inline]
    fn values(&self) -> &[f32] {
        self.buffer.values()
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        *vector.values()
    }
}

impl TryFrom<&[f32]> for Vector2 {
    type Error = anyhow::Error;

    fn try_from(values: &[f32]) -> Result<Self> {
        Ok(Self {
            buffer: VectorBuffer::try_from_slice(values)?,
        })
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::sum(a, b)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::difference(a, b)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x() * b, a.y() * b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| {
    Vector2::new(a * b.x(), a * b.y())
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x() / b, a.y() / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.add(b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.sub(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.scale(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.set(a.x() / b, a.y() / b);
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x(), -val.y())
});

impl_approx_eq_via_buffer!(Vector2);

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
