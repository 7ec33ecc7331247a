//! fixpoint - Q7.24 fixed-point math for targets without an FPU
//!
//! Scalars, 3D vectors and quaternions built on a single `i32` storage word
//! with 24 fractional bits. Every type is a plain `Copy` value; nothing
//! allocates and nothing holds state between calls.
//!
//! ```
//! use fixpoint::{Q24, QuatQ24, Vec3Q24};
//!
//! let quarter = Q24::from_f32(0.25);
//! assert_eq!(quarter * Q24::from_f32(4.0), Q24::ONE);
//!
//! let inc = QuatQ24::from_small_rotation(Vec3Q24::from_f32(0.07, 0.0, 0.0));
//! let rotated = (QuatQ24::identity() * inc).rotate(&Vec3Q24::from_f32(0.0, 1.0, 0.0));
//! assert!(rotated.z.to_f32() > 0.0);
//! ```
//!
//! Overflow wraps silently and division by zero panics, like the underlying
//! integer operations. [`Q24::checked_div`] is the one non-panicking variant.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Configuration read from the environment (drift harness knobs)
pub mod config;
/// Core value types (Q24, Vec3Q24, QuatQ24)
pub mod models;
/// Drift harness comparing the fixed-point path against f64
pub mod tools;
/// Utility functions (double-precision reference math)
pub mod utils;

mod debug;

pub use models::{Q24, QuatQ24, Vec3Q24};
