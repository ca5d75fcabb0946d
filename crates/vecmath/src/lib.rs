//! Planar and spatial vector math.
//!
//! [`Vector2`] and [`Vector3`] each own a fixed-length [`VectorBuffer`] of
//! `f32` components. Their instance methods mutate in place and return the
//! receiver for chaining, while their associated functions and operators
//! leave the operands untouched and produce new vectors.

#[macro_use]
mod macros;

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod buffer;
pub mod vector;

pub use buffer::VectorBuffer;
pub use vector::{Vector, Vector2, Vector3};
