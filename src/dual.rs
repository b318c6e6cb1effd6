//! Dual quaternions: rigid rotation + translation as one algebraic value.
//!
//! A rigid motion with rotation `r` (unit quaternion) and translation `t`
//! is the pair `(r, ½·t_q·r)` where `t_q = (0, tx, ty, tz)`. The dual part
//! stores the translation *coupled to the rotation*; the translation is
//! always recovered as `2·dual·conj(real)`, never read off directly.

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::errors::AlgebraError;
use crate::float_types::Real;
use crate::quaternion::Quaternion;
use crate::rotation;

/// An ordered pair `(real, dual)` of quaternions encoding a rigid motion.
///
/// The real part is normalized to unit norm at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DualQuaternion {
    real: Quaternion,
    dual: Quaternion,
}

impl DualQuaternion {
    /// Pair a rotation with a raw dual part. The real part is normalized;
    /// a zero rotation fails with [`AlgebraError::ZeroHasNoDirection`],
    /// parts over different forms with [`AlgebraError::MismatchedForm`].
    pub fn new(real: &Quaternion, dual: &Quaternion) -> Result<Self, AlgebraError> {
        if real.form() != dual.form() {
            return Err(AlgebraError::MismatchedForm);
        }
        Ok(Self {
            real: real.unitary()?,
            dual: dual.clone(),
        })
    }

    /// The identity motion: identity rotation, zero translation.
    pub fn identity() -> Self {
        Self {
            real: Quaternion::one(),
            dual: Quaternion::zero(),
        }
    }

    /// Build from a unit rotation and a translation vector, coupling the
    /// translation into the dual part: `dual = ½·(0, t)·real`.
    pub fn from_rotation_translation(
        rotation: &Quaternion,
        translation: &Vector3<Real>,
    ) -> Result<Self, AlgebraError> {
        let real = rotation.unitary()?;
        let t_q = Quaternion::with_form(
            [0.0, translation.x, translation.y, translation.z],
            real.form().clone(),
        );
        let dual = t_q.try_mul(&real)?.scale(0.5);
        Ok(Self { real, dual })
    }

    /// The unit rotation quaternion.
    pub fn rotation(&self) -> &Quaternion {
        &self.real
    }

    pub fn dual_part(&self) -> &Quaternion {
        &self.dual
    }

    /// The translation quaternion `2·dual·conj(real)`.
    pub fn translation(&self) -> Quaternion {
        &self.dual.scale(2.0) * &self.real.conjugate()
    }

    /// The translation as a 3-vector (imaginary components of
    /// [`DualQuaternion::translation`]).
    pub fn translation_vector(&self) -> Vector3<Real> {
        let t = self.translation();
        Vector3::new(t.x(), t.y(), t.z())
    }

    /// Dual-quaternion product: `(p.r·q.r, p.d·q.r + p.r·q.d)`.
    ///
    /// This coupled rule (not a component-wise combination) is what makes
    /// composition match the product of the corresponding homogeneous
    /// transforms.
    pub fn try_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        let real = self.real.try_mul(&other.real)?;
        let dual = self
            .dual
            .try_mul(&other.real)?
            .try_add(&self.real.try_mul(&other.dual)?)?;
        Ok(Self { real, dual })
    }

    /// Component-wise sum; the real part is re-normalized.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        Self::new(
            &self.real.try_add(&other.real)?,
            &self.dual.try_add(&other.dual)?,
        )
    }

    /// Conjugate both parts.
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real.conjugate(),
            dual: self.dual.conjugate(),
        }
    }

    /// Scale both parts by `1/norm(real)`.
    pub fn normalize(&self) -> Self {
        let scale = 1.0 / self.real.norm();
        Self {
            real: self.real.scale(scale),
            dual: self.dual.scale(scale),
        }
    }

    /// Scale both parts by `s`. Note the result's real part is no longer
    /// unit for `|s| ≠ 1`; matrix extraction will report it.
    pub fn scale(&self, s: Real) -> Self {
        Self {
            real: self.real.scale(s),
            dual: self.dual.scale(s),
        }
    }

    /// Dot product of the real parts.
    pub fn dot(&self, other: &Self) -> Real {
        self.real.dot(&other.real)
    }

    /// The 4×4 homogeneous transform: rotation block from the real part,
    /// rotation-coupled translation in the last column, `[0,0,0,1]` below.
    pub fn to_homogeneous(&self) -> Result<Matrix4<Real>, AlgebraError> {
        let r = rotation::quaternion_to_rotation(&self.real)?;
        let t = self.translation();
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
        m[(0, 3)] = t.x();
        m[(1, 3)] = t.y();
        m[(2, 3)] = t.z();
        Ok(m)
    }

    /// Inverse of [`DualQuaternion::to_homogeneous`]: Shepperd's method on
    /// the rotation block, then the raw half-translation of the last
    /// column is coupled back through the rotation into the dual part.
    pub fn from_homogeneous(m: &Matrix4<Real>) -> Result<Self, AlgebraError> {
        let block: Matrix3<Real> = m.fixed_view::<3, 3>(0, 0).into_owned();
        let real = rotation::rotation_to_quaternion(&block)?;
        let half_t = Quaternion::new(0.0, m[(0, 3)] / 2.0, m[(1, 3)] / 2.0, m[(2, 3)] / 2.0);
        let dual = half_t.try_mul(&real)?;
        Ok(Self { real, dual })
    }

    /// Origin of the local frame this motion places: the translation.
    pub fn origin(&self) -> Vector3<Real> {
        self.translation_vector()
    }

    /// First column of the rotation block: the local x direction.
    pub fn x_axis(&self) -> Result<Vector3<Real>, AlgebraError> {
        let r = rotation::quaternion_to_rotation(&self.real)?;
        Ok(r.column(0).into_owned())
    }

    /// Second column of the rotation block: the local y direction.
    pub fn y_axis(&self) -> Result<Vector3<Real>, AlgebraError> {
        let r = rotation::quaternion_to_rotation(&self.real)?;
        Ok(r.column(1).into_owned())
    }
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}
