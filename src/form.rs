//! Symmetric bilinear forms and their structure tensors.
//!
//! A [`Form`] fixes how the basis elements `i`, `j`, `k` multiply. The
//! identity form reproduces the classical Hamilton basis
//! (`i·i = j·j = k·k = -1`, `i·j = k`); any other symmetric 3×3 matrix
//! yields a generalized quaternion algebra over that bilinear form.

use nalgebra::Matrix3;

use crate::errors::AlgebraError;
use crate::float_types::Real;

/// Rank-3 array defining basis multiplication: the product of `a` and `b`
/// has components `out[i] = Σ_jk a[j]·T[i][j][k]·b[k]`.
pub type StructureTensor = [[[Real; 4]; 4]; 4];

/// A validated symmetric 3×3 form matrix together with the structure
/// tensor derived from it.
///
/// The tensor is built once at construction and never mutated afterwards,
/// so sharing a `Form` across threads needs no synchronization. Two
/// quaternions may only be combined when their forms compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Form {
    matrix: Matrix3<Real>,
    tensor: StructureTensor,
}

impl Form {
    /// Build a form from a symmetric matrix.
    ///
    /// Fails with [`AlgebraError::AsymmetricForm`] when `matrix` differs
    /// from its transpose.
    pub fn new(matrix: Matrix3<Real>) -> Result<Self, AlgebraError> {
        if matrix != matrix.transpose() {
            return Err(AlgebraError::AsymmetricForm);
        }
        Ok(Self {
            tensor: structure_tensor(&matrix),
            matrix,
        })
    }

    /// The Hamilton basis: form matrix = identity.
    pub fn identity() -> Self {
        let matrix = Matrix3::identity();
        Self {
            tensor: structure_tensor(&matrix),
            matrix,
        }
    }

    pub fn matrix(&self) -> &Matrix3<Real> {
        &self.matrix
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    pub(crate) fn tensor(&self) -> &StructureTensor {
        &self.tensor
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::identity()
    }
}

/// Expand a symmetric form matrix into its structure tensor.
///
/// The scalar slice `T[0]` holds the 2×2 cofactors of `m`; the three
/// imaginary slices hold the form entries directly. At the identity matrix
/// this reduces exactly to the Hamilton multiplication table, so the
/// classical basis needs no separate code path.
fn structure_tensor(m: &Matrix3<Real>) -> StructureTensor {
    [
        [
            [1.0, 0.0, 0.0, 0.0],
            [
                0.0,
                -(m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)]),
                m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)],
                -(m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)]),
            ],
            [
                0.0,
                m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)],
                -(m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)]),
                m[(0, 0)] * m[(2, 1)] - m[(0, 1)] * m[(2, 0)],
            ],
            [
                0.0,
                -(m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)]),
                m[(0, 0)] * m[(2, 1)] - m[(0, 1)] * m[(2, 0)],
                -(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
            ],
        ],
        [
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, m[(0, 2)], -m[(0, 1)]],
            [0.0, -m[(0, 2)], 0.0, m[(0, 0)]],
            [0.0, m[(0, 1)], -m[(0, 0)], 0.0],
        ],
        [
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, m[(1, 2)], -m[(1, 1)]],
            [1.0, -m[(1, 2)], 0.0, m[(0, 1)]],
            [0.0, m[(1, 1)], -m[(0, 1)], 0.0],
        ],
        [
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, m[(2, 2)], -m[(1, 2)]],
            [0.0, -m[(2, 2)], 0.0, m[(0, 2)]],
            [1.0, m[(1, 2)], -m[(0, 2)], 0.0],
        ],
    ]
}
