//! Utilities for benchmarking the vecmath operations.

pub mod benchmark;
