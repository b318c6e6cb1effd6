//! A **quaternion and dual quaternion** algebra library, generalized to an
//! arbitrary symmetric bilinear form: the classical Hamilton basis
//! (`i·i = j·j = k·k = -1`, `i·j = k`) is the default [`Form`], and any
//! symmetric 3×3 matrix defines a sibling algebra through its structure
//! tensor.
//!
//! # What's here
//! - [`Quaternion`]: immutable four-component values with
//!   structure-tensor multiplication, norm/conjugate/inverse, closed-form
//!   square and cube roots, and integer/half-integer/third-integer powers
//! - [`Hurwitz`]: the integer sub-ring with component-wise modular
//!   reduction and Fermat-quotient modular inverse
//! - [`rotation`]: Euler / axis-angle / rotation-matrix conversions,
//!   including Shepperd's branch method for matrix → quaternion
//! - [`DualQuaternion`]: rigid motions (rotation + translation) with
//!   conversion to and from 4×4 homogeneous transforms
//! - [`moebius`]: cross-ratio and fractional-linear transformations over
//!   quaternion arguments
//!
//! # Example
//! ```
//! use qforms::Quaternion;
//!
//! let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! let b: Quaternion = "3-4i".parse().unwrap();
//! assert_eq!((&a * &b).coeffs(), [11.0, 2.0, -7.0, 24.0]);
//!
//! let unit = a.unitary().unwrap();
//! let matrix = unit.to_rotation_matrix().unwrap();
//! ```
//!
//! Every value is immutable and every operation is pure, so the library is
//! safe to call concurrently with no locking anywhere.

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod dual;
pub mod errors;
pub mod float_types;
pub mod form;
pub mod hurwitz;
mod literal;
pub mod moebius;
pub mod quaternion;
pub mod rotation;

pub use dual::DualQuaternion;
pub use errors::AlgebraError;
pub use float_types::{EPSILON, Real};
pub use form::Form;
pub use hurwitz::Hurwitz;
pub use moebius::{ProjectivePoint, cross_ratio, moebius};
pub use quaternion::Quaternion;
pub use rotation::{
    axis_angle_to_quaternion, euler_to_quaternion, matrix_to_euler, quaternion_to_rotation,
    rotation_to_quaternion,
};
