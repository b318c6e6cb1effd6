//! Fractional-linear (Moebius) transformations and the cross-ratio over
//! quaternion arguments.

use crate::errors::AlgebraError;
use crate::quaternion::Quaternion;

/// A point of the quaternionic projective line: a finite quaternion or the
/// distinguished point at infinity.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectivePoint {
    Finite(Quaternion),
    Infinity,
}

impl From<Quaternion> for ProjectivePoint {
    fn from(q: Quaternion) -> Self {
        ProjectivePoint::Finite(q)
    }
}

impl ProjectivePoint {
    pub fn is_infinity(&self) -> bool {
        matches!(self, ProjectivePoint::Infinity)
    }

    /// The finite value, if any.
    pub fn finite(&self) -> Option<&Quaternion> {
        match self {
            ProjectivePoint::Finite(q) => Some(q),
            ProjectivePoint::Infinity => None,
        }
    }
}

/// Cross-ratio `(q1-q3)·(q1-q4)⁻¹·(q2-q4)·(q2-q3)⁻¹` of four quaternions.
///
/// When `(q1-q4)(q2-q3)` vanishes but `(q1-q3)(q2-q4)` does not the value
/// is [`ProjectivePoint::Infinity`]; when both vanish it is the
/// multiplicative identity.
pub fn cross_ratio(
    q1: &Quaternion,
    q2: &Quaternion,
    q3: &Quaternion,
    q4: &Quaternion,
) -> Result<ProjectivePoint, AlgebraError> {
    let d13 = q1.try_sub(q3)?;
    let d14 = q1.try_sub(q4)?;
    let d23 = q2.try_sub(q3)?;
    let d24 = q2.try_sub(q4)?;
    if !d14.try_mul(&d23)?.is_zero() {
        let value = d13
            .try_mul(&d14.inverse()?)?
            .try_mul(&d24)?
            .try_mul(&d23.inverse()?)?;
        Ok(ProjectivePoint::Finite(value))
    } else if !d13.try_mul(&d24)?.is_zero() {
        Ok(ProjectivePoint::Infinity)
    } else {
        Ok(ProjectivePoint::Finite(Quaternion::one_with_form(
            q1.form().clone(),
        )))
    }
}

/// The Moebius transformation `z ↦ (a·z + b)·(c·z + d)⁻¹`.
///
/// Fails with [`AlgebraError::NotAMoebiusTransform`] when `ad = bc`. The
/// point at infinity maps to `a·c⁻¹` (or stays at infinity when `c` is not
/// invertible); a finite `z` with non-invertible `c·z + d` maps to
/// infinity.
pub fn moebius(
    z: &ProjectivePoint,
    a: &Quaternion,
    b: &Quaternion,
    c: &Quaternion,
    d: &Quaternion,
) -> Result<ProjectivePoint, AlgebraError> {
    if a.try_mul(d)?.try_sub(&b.try_mul(c)?)?.is_zero() {
        return Err(AlgebraError::NotAMoebiusTransform);
    }
    match z {
        ProjectivePoint::Infinity => match c.inverse() {
            Ok(c_inv) => Ok(ProjectivePoint::Finite(a.try_mul(&c_inv)?)),
            Err(AlgebraError::NotInvertible) => Ok(ProjectivePoint::Infinity),
            Err(e) => Err(e),
        },
        ProjectivePoint::Finite(zq) => {
            let denominator = c.try_mul(zq)?.try_add(d)?;
            match denominator.inverse() {
                Ok(inv) => Ok(ProjectivePoint::Finite(
                    a.try_mul(zq)?.try_add(b)?.try_mul(&inv)?,
                )),
                Err(AlgebraError::NotInvertible) => Ok(ProjectivePoint::Infinity),
                Err(e) => Err(e),
            }
        }
    }
}
