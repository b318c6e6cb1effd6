//! Algebraic errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways an algebra operation can fail.
///
/// Every fallible entry point in the crate reports one of these; nothing is
/// recovered internally. [`AlgebraError::InfiniteRoots`] is the one variant
/// that does not mark invalid input: the requested root exists but is not
/// unique, and the variant carries the radius of the solution sphere.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgebraError {
    /// (MalformedLiteral) The text does not match the `a+bi+cj+dk` grammar
    MalformedLiteral(String),
    /// (InvalidShape) A component sequence of unusable length
    InvalidShape(usize),
    /// (AsymmetricForm) The structure form matrix is not symmetric
    AsymmetricForm,
    /// (MismatchedForm) Operands built from different form matrices were combined
    MismatchedForm,
    /// (NotInvertible) Inverse of a quaternion with zero norm
    NotInvertible,
    /// (ZeroHasNoDirection) Unit direction of the zero quaternion
    ZeroHasNoDirection,
    /// (NotUnitary) Rotation-matrix extraction from a non-unit quaternion
    NotUnitary,
    /// (NotOrthogonal) Rotation decoding of a matrix that is not orthogonal
    NotOrthogonal,
    /// (UnsupportedExponent) Exponent that is not an integer, half-integer or third-integer
    UnsupportedExponent(Real),
    /// (NonIntegralComponent) Hurwitz construction from a fractional component
    NonIntegralComponent(Real),
    /// (NotSupportedForHurwitz) Operation that leaves the integer ring
    NotSupportedForHurwitz,
    /// (NotAMoebiusTransform) Degenerate parameters, `ad = bc`
    NotAMoebiusTransform,
    /// (InfiniteRoots) The root exists but is not unique; carries the size
    /// of the sphere `{ai+bj+ck : a²+b²+c² = radius}` of solutions
    InfiniteRoots { radius: Real },
}

impl Display for AlgebraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgebraError::MalformedLiteral(text) => write!(f, "(MalformedLiteral) '{}' can not be converted to a quaternion", text),
            AlgebraError::InvalidShape(len) => write!(f, "(InvalidShape) expected 3 or 4 components, got {}", len),
            AlgebraError::AsymmetricForm => write!(f, "(AsymmetricForm) the form matrix must be symmetric"),
            AlgebraError::MismatchedForm => write!(f, "(MismatchedForm) the operands were built from different form matrices"),
            AlgebraError::NotInvertible => write!(f, "(NotInvertible) a quaternion with zero norm is not invertible"),
            AlgebraError::ZeroHasNoDirection => write!(f, "(ZeroHasNoDirection) the zero quaternion has no direction"),
            AlgebraError::NotUnitary => write!(f, "(NotUnitary) the quaternion must be unitary"),
            AlgebraError::NotOrthogonal => write!(f, "(NotOrthogonal) the matrix is not orthogonal"),
            AlgebraError::UnsupportedExponent(e) => write!(f, "(UnsupportedExponent) a quaternion power can be computed only for integer, half-integer or third-integer exponents, got {}", e),
            AlgebraError::NonIntegralComponent(c) => write!(f, "(NonIntegralComponent) component {} is not an integer", c),
            AlgebraError::NotSupportedForHurwitz => write!(f, "(NotSupportedForHurwitz) not supported on the Hurwitz ring without a modulus"),
            AlgebraError::NotAMoebiusTransform => write!(f, "(NotAMoebiusTransform) the parameters satisfy ad = bc"),
            AlgebraError::InfiniteRoots { radius } => write!(f, "(InfiniteRoots) infinitely many roots: every ai+bj+ck with a² + b² + c² = {}", radius),
        }
    }
}
