// Our Real scalar type:
pub type Real = f64;

/// Tolerance used across the crate for unit-norm checks, orthogonality
/// checks and degenerate-branch detection.
///
/// Quaternion components produced by chains of products and square roots
/// carry rounding on the order of `1e-15`; `1e-9` leaves headroom without
/// accepting genuinely non-unit input.
pub const EPSILON: Real = 1e-9;

pub use core::f64::consts::PI;
