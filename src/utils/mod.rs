//! Utility functions
//!
//! - Reference math (f64 vectors and quaternions mirroring the Q24 formulas)

pub mod reference;
