//! Conversions between unit quaternions, Euler angles, axis-angle pairs
//! and 3×3 rotation matrices.
//!
//! Euler angles follow the aerospace ZYX sequence and are passed as
//! `[yaw, pitch, roll]` (rotation about z, then y, then x).

use nalgebra::{Matrix3, Vector3};

use crate::errors::AlgebraError;
use crate::float_types::{EPSILON, Real};
use crate::quaternion::Quaternion;

fn is_orthogonal(m: &Matrix3<Real>) -> bool {
    (m * m.transpose() - Matrix3::identity()).amax() <= EPSILON
}

/// Encode `[yaw, pitch, roll]` as a unit quaternion.
pub fn euler_to_quaternion(angles: [Real; 3]) -> Quaternion {
    let [yaw, pitch, roll] = angles;
    let (sy, cy) = (yaw / 2.0).sin_cos();
    let (sp, cp) = (pitch / 2.0).sin_cos();
    let (sr, cr) = (roll / 2.0).sin_cos();
    Quaternion::new(
        cy * cp * cr + sy * sp * sr,
        cy * cp * sr - sy * sp * cr,
        cy * sp * cr + sy * cp * sr,
        sy * cp * cr - cy * sp * sr,
    )
}

/// Decode a rotation matrix into `[yaw, pitch, roll]`.
///
/// Fails with [`AlgebraError::NotOrthogonal`] unless `M·Mᵀ ≈ I`. At gimbal
/// lock (`cos(pitch) = 0`) yaw and roll rotate about the same axis and only
/// their combination is observable; yaw is pinned to zero and the combined
/// angle is recovered from the entries the degeneracy leaves intact.
pub fn matrix_to_euler(m: &Matrix3<Real>) -> Result<[Real; 3], AlgebraError> {
    // Rounding in the matrix entries is amplified to √(2ε) in cos(pitch)
    // near the poles, so the lock threshold is much wider than EPSILON.
    const GIMBAL_LOCK: Real = 1e-6;
    if !is_orthogonal(m) {
        return Err(AlgebraError::NotOrthogonal);
    }
    let pitch = (-m[(2, 0)]).clamp(-1.0, 1.0).asin();
    let cp = pitch.cos();
    if cp > GIMBAL_LOCK {
        let roll = (m[(2, 1)] / cp).atan2(m[(2, 2)] / cp);
        let yaw = (m[(1, 0)] / cp).atan2(m[(0, 0)] / cp);
        Ok([yaw, pitch, roll])
    } else if pitch > 0.0 {
        Ok([0.0, pitch, m[(0, 1)].atan2(m[(1, 1)])])
    } else {
        Ok([0.0, pitch, (-m[(0, 1)]).atan2(m[(1, 1)])])
    }
}

/// Encode a rotation of `angle` radians about `axis` (expected unit
/// length) as a quaternion.
pub fn axis_angle_to_quaternion(angle: Real, axis: &Vector3<Real>) -> Quaternion {
    let (s, c) = (angle / 2.0).sin_cos();
    Quaternion::new(c, axis.x * s, axis.y * s, axis.z * s)
}

/// Rotation matrix of a unit quaternion.
///
/// Fails with [`AlgebraError::NotUnitary`] unless `norm(q) ≈ 1`.
pub fn quaternion_to_rotation(q: &Quaternion) -> Result<Matrix3<Real>, AlgebraError> {
    if (q.norm() - 1.0).abs() > EPSILON {
        return Err(AlgebraError::NotUnitary);
    }
    let [w, x, y, z] = q.coeffs();
    Ok(Matrix3::new(
        w * w + x * x - y * y - z * z,
        2.0 * (x * y - w * z),
        2.0 * (w * y + x * z),
        2.0 * (x * y + w * z),
        w * w - x * x + y * y - z * z,
        2.0 * (y * z - w * x),
        2.0 * (x * z - w * y),
        2.0 * (w * x + y * z),
        w * w - x * x - y * y + z * z,
    ))
}

/// Shepperd's method: recover a unit quaternion from a rotation matrix.
///
/// The branch is chosen by comparing the trace against the diagonal
/// entries, so the division is always by the largest available square
/// root and never by a value near zero. The result is defined up to
/// global sign.
pub fn rotation_to_quaternion(m: &Matrix3<Real>) -> Result<Quaternion, AlgebraError> {
    if !is_orthogonal(m) {
        return Err(AlgebraError::NotOrthogonal);
    }
    let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
    let q = if trace > 0.0 {
        let s = 2.0 * (trace + 1.0).sqrt();
        Quaternion::new(
            0.25 * s,
            (m[(2, 1)] - m[(1, 2)]) / s,
            (m[(0, 2)] - m[(2, 0)]) / s,
            (m[(1, 0)] - m[(0, 1)]) / s,
        )
    } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
        let s = 2.0 * (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt();
        Quaternion::new(
            (m[(2, 1)] - m[(1, 2)]) / s,
            0.25 * s,
            (m[(0, 1)] + m[(1, 0)]) / s,
            (m[(0, 2)] + m[(2, 0)]) / s,
        )
    } else if m[(1, 1)] > m[(2, 2)] {
        let s = 2.0 * (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt();
        Quaternion::new(
            (m[(0, 2)] - m[(2, 0)]) / s,
            (m[(0, 1)] + m[(1, 0)]) / s,
            0.25 * s,
            (m[(1, 2)] + m[(2, 1)]) / s,
        )
    } else {
        let s = 2.0 * (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt();
        Quaternion::new(
            (m[(1, 0)] - m[(0, 1)]) / s,
            (m[(0, 2)] + m[(2, 0)]) / s,
            (m[(1, 2)] + m[(2, 1)]) / s,
            0.25 * s,
        )
    };
    Ok(q)
}
