//! The `Quaternion` value and its algebra.

use core::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Matrix3, Vector3};
use num_complex::Complex;

use crate::errors::AlgebraError;
use crate::float_types::{EPSILON, Real};
use crate::form::Form;
use crate::rotation;

/// A quaternion `w + xi + yj + zk` over a symmetric bilinear [`Form`].
///
/// Values are immutable: every operation returns a new quaternion and never
/// mutates an operand. Binary operations require both operands to carry the
/// same form; the checked `try_*` methods report a mismatch as
/// [`AlgebraError::MismatchedForm`], while the operator impls (`+`, `-`,
/// `*`) panic on it and exist for the dominant same-form case.
#[derive(Clone, Debug, PartialEq)]
pub struct Quaternion {
    coeffs: [Real; 4],
    form: Form,
}

impl Quaternion {
    /// Quaternion over the classical Hamilton basis.
    pub fn new(w: Real, x: Real, y: Real, z: Real) -> Self {
        Self {
            coeffs: [w, x, y, z],
            form: Form::identity(),
        }
    }

    /// Quaternion over an arbitrary form.
    pub fn with_form(coeffs: [Real; 4], form: Form) -> Self {
        Self { coeffs, form }
    }

    /// Build from a component sequence: four entries are taken as
    /// `(w, x, y, z)`, three entries as Euler angles (yaw, pitch, roll).
    ///
    /// Any other length fails with [`AlgebraError::InvalidShape`].
    pub fn from_slice(values: &[Real]) -> Result<Self, AlgebraError> {
        match *values {
            [w, x, y, z] => Ok(Self::new(w, x, y, z)),
            [yaw, pitch, roll] => Ok(rotation::euler_to_quaternion([yaw, pitch, roll])),
            _ => Err(AlgebraError::InvalidShape(values.len())),
        }
    }

    /// Embed a real scalar as `(s, 0, 0, 0)`.
    pub fn from_scalar(s: Real) -> Self {
        Self::new(s, 0.0, 0.0, 0.0)
    }

    /// Embed a complex number: the imaginary part becomes the `x` component.
    pub fn from_complex(z: Complex<Real>) -> Self {
        Self::new(z.re, z.im, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about `axis` (expected unit length).
    pub fn from_axis_angle(angle: Real, axis: &Vector3<Real>) -> Self {
        rotation::axis_angle_to_quaternion(angle, axis)
    }

    /// Rotation from Euler angles (yaw, pitch, roll), ZYX sequence.
    pub fn from_euler(angles: [Real; 3]) -> Self {
        rotation::euler_to_quaternion(angles)
    }

    /// Rotation from a 3×3 orthogonal matrix, decoded via Euler angles and
    /// re-encoded.
    pub fn from_rotation_matrix(m: &Matrix3<Real>) -> Result<Self, AlgebraError> {
        Ok(rotation::euler_to_quaternion(rotation::matrix_to_euler(m)?))
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub fn one() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn zero_with_form(form: Form) -> Self {
        Self::with_form([0.0; 4], form)
    }

    /// The multiplicative identity carried over `form`. `(1, 0, 0, 0)` is
    /// the unit of every algebra produced by a structure tensor.
    pub fn one_with_form(form: Form) -> Self {
        Self::with_form([1.0, 0.0, 0.0, 0.0], form)
    }

    pub fn w(&self) -> Real {
        self.coeffs[0]
    }

    pub fn x(&self) -> Real {
        self.coeffs[1]
    }

    pub fn y(&self) -> Real {
        self.coeffs[2]
    }

    pub fn z(&self) -> Real {
        self.coeffs[3]
    }

    pub fn coeffs(&self) -> [Real; 4] {
        self.coeffs
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Component-wise equality within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn check_form(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.form == other.form {
            Ok(())
        } else {
            Err(AlgebraError::MismatchedForm)
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_form(other)?;
        let mut coeffs = self.coeffs;
        for (c, o) in coeffs.iter_mut().zip(other.coeffs.iter()) {
            *c += o;
        }
        Ok(Self {
            coeffs,
            form: self.form.clone(),
        })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_add(&-other)
    }

    /// Right-multiplication `self · other`, contracting the structure
    /// tensor: `out[i] = Σ_jk self[j]·T[i][j][k]·other[k]`.
    ///
    /// For the identity form this is the Hamilton product. Multiplication
    /// is non-commutative in general; see [`Quaternion::try_left_mul`].
    pub fn try_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_form(other)?;
        let tensor = self.form.tensor();
        let mut coeffs = [0.0; 4];
        for (out, slice) in coeffs.iter_mut().zip(tensor.iter()) {
            for (j, row) in slice.iter().enumerate() {
                for (k, t) in row.iter().enumerate() {
                    *out += self.coeffs[j] * t * other.coeffs[k];
                }
            }
        }
        Ok(Self {
            coeffs,
            form: self.form.clone(),
        })
    }

    /// Left-multiplication `other · self`.
    pub fn try_left_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        other.try_mul(self)
    }

    /// Right-division: `self · other⁻¹`.
    pub fn try_div(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_mul(&other.inverse()?)
    }

    /// Left-division: `other⁻¹ · self`.
    pub fn try_left_div(&self, other: &Self) -> Result<Self, AlgebraError> {
        other.inverse()?.try_mul(self)
    }

    /// Scale every component by `s`.
    pub fn scale(&self, s: Real) -> Self {
        Self {
            coeffs: self.coeffs.map(|c| c * s),
            form: self.form.clone(),
        }
    }

    /// The scalar part `(w, 0, 0, 0)`.
    pub fn real_part(&self) -> Self {
        Self {
            coeffs: [self.coeffs[0], 0.0, 0.0, 0.0],
            form: self.form.clone(),
        }
    }

    /// The imaginary part `(0, x, y, z)`.
    pub fn imag_part(&self) -> Self {
        Self {
            coeffs: [0.0, self.coeffs[1], self.coeffs[2], self.coeffs[3]],
            form: self.form.clone(),
        }
    }

    /// `2w`, the trace of the left-multiplication operator.
    pub fn trace(&self) -> Real {
        2.0 * self.coeffs[0]
    }

    /// Euclidean dot product of the component vectors.
    pub fn dot(&self, other: &Self) -> Real {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// `(w, -x, -y, -z)`.
    pub fn conjugate(&self) -> Self {
        Self {
            coeffs: [
                self.coeffs[0],
                -self.coeffs[1],
                -self.coeffs[2],
                -self.coeffs[3],
            ],
            form: self.form.clone(),
        }
    }

    /// The norm `q · T[0] · conj(q)`, the square of the modulus.
    ///
    /// Sum of squared components for the identity form; for indefinite
    /// forms the norm of a nonzero quaternion can be zero or negative.
    pub fn norm(&self) -> Real {
        let t0 = &self.form.tensor()[0];
        let conj = [
            self.coeffs[0],
            -self.coeffs[1],
            -self.coeffs[2],
            -self.coeffs[3],
        ];
        let mut acc = 0.0;
        for (j, row) in t0.iter().enumerate() {
            for (k, t) in row.iter().enumerate() {
                acc += self.coeffs[j] * t * conj[k];
            }
        }
        acc
    }

    /// `w² − norm`, the discriminant used by the cube-root closed form.
    pub fn delta(&self) -> Real {
        self.coeffs[0] * self.coeffs[0] - self.norm()
    }

    /// `√norm`.
    pub fn modulus(&self) -> Real {
        self.norm().sqrt()
    }

    /// `conj(q) / norm(q)`; fails with [`AlgebraError::NotInvertible`] when
    /// the norm is zero.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(AlgebraError::NotInvertible);
        }
        Ok(self.conjugate().scale(1.0 / norm))
    }

    /// `q / |q|`; fails with [`AlgebraError::ZeroHasNoDirection`] for the
    /// zero quaternion.
    pub fn unitary(&self) -> Result<Self, AlgebraError> {
        if self.is_zero() {
            return Err(AlgebraError::ZeroHasNoDirection);
        }
        Ok(self.scale(1.0 / self.modulus()))
    }

    /// Integer power by binary exponentiation, O(log n) multiplications.
    /// Negative exponents go through the inverse.
    pub fn powi(&self, exponent: i64) -> Result<Self, AlgebraError> {
        if exponent < 0 {
            return self.inverse()?.powi(-exponent);
        }
        let mut result = Self::one_with_form(self.form.clone());
        let mut base = self.clone();
        let mut e = exponent as u64;
        while e > 0 {
            if e & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            base = base.try_mul(&base)?;
            e >>= 1;
        }
        Ok(result)
    }

    /// Power with an integer, half-integer (`k + ½`) or third-integer
    /// (`k ± ⅓`) exponent.
    ///
    /// Half-integers compute `q^⌊e⌋ · √q`; third-integers compute
    /// `q^⌊e⌋ · ∛q` or `q^⌊e⌋ · ∛q²` by the residue of `3e` mod 3. Any
    /// other exponent fails with [`AlgebraError::UnsupportedExponent`];
    /// degenerate roots propagate [`AlgebraError::InfiniteRoots`].
    pub fn powf(&self, exponent: Real) -> Result<Self, AlgebraError> {
        if exponent.floor() == exponent {
            return self.powi(exponent as i64);
        }
        if (2.0 * exponent).floor() == 2.0 * exponent {
            return self.powi(exponent.floor() as i64)?.try_mul(&self.sqrt()?);
        }
        if (3.0 * exponent).floor() == 3.0 * exponent {
            let whole = self.powi(exponent.floor() as i64)?;
            let croot = self.croot()?;
            return match ((3.0 * exponent) as i64).rem_euclid(3) {
                1 => whole.try_mul(&croot),
                _ => whole.try_mul(&croot.try_mul(&croot)?),
            };
        }
        Err(AlgebraError::UnsupportedExponent(exponent))
    }

    /// Square root by the closed form `(q + ν) / τ` with `ν = √norm` and
    /// `τ = √(2ν + trace)`.
    ///
    /// Of the two roots the one with positive trace is returned; if this
    /// returns `r`, `-r` is the other. When `τ` degenerates the root is
    /// not unique and [`AlgebraError::InfiniteRoots`] carries `ν`.
    pub fn sqrt(&self) -> Result<Self, AlgebraError> {
        let nu = self.norm().sqrt();
        let tau = (2.0 * nu + self.trace()).sqrt();
        if tau.is_nan() || tau.abs() < EPSILON {
            return Err(AlgebraError::InfiniteRoots { radius: nu });
        }
        self.try_add(&Self::with_form([nu, 0.0, 0.0, 0.0], self.form.clone()))
            .map(|sum| sum.scale(1.0 / tau))
    }

    /// Cube root by the closed form `(q + ν·τ) / (τ² − ν)` with
    /// `ν = ∛norm` and `τ` the sum of the complex cube roots of
    /// `w ± √delta`.
    ///
    /// The two cube roots are conjugates, so their sum is real even though
    /// the intermediates are not. A degenerate denominator yields
    /// [`AlgebraError::InfiniteRoots`].
    pub fn croot(&self) -> Result<Self, AlgebraError> {
        let nu = self.norm().cbrt();
        let w = Complex::new(self.coeffs[0], 0.0);
        let sqrt_delta = Complex::new(self.delta(), 0.0).sqrt();
        let tau = ((w + sqrt_delta).powf(1.0 / 3.0) + (w - sqrt_delta).powf(1.0 / 3.0)).re;
        let denom = tau * tau - nu;
        if denom.abs() < EPSILON {
            return Err(AlgebraError::InfiniteRoots { radius: nu });
        }
        self.try_add(&Self::with_form(
            [nu * tau, 0.0, 0.0, 0.0],
            self.form.clone(),
        ))
        .map(|sum| sum.scale(1.0 / denom))
    }

    /// Rotation matrix of a unit quaternion; see
    /// [`rotation::quaternion_to_rotation`].
    pub fn to_rotation_matrix(&self) -> Result<Matrix3<Real>, AlgebraError> {
        rotation::quaternion_to_rotation(self)
    }
}

fn same_form_or_panic(result: Result<Quaternion, AlgebraError>) -> Quaternion {
    match result {
        Ok(q) => q,
        Err(e) => panic!("quaternion operands disagree: {e}"),
    }
}

impl Add for &Quaternion {
    type Output = Quaternion;

    /// # Panics
    /// When the operands carry different forms; use
    /// [`Quaternion::try_add`] to handle that case as an error.
    fn add(self, rhs: &Quaternion) -> Quaternion {
        same_form_or_panic(self.try_add(rhs))
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        &self + &rhs
    }
}

impl Sub for &Quaternion {
    type Output = Quaternion;

    /// # Panics
    /// When the operands carry different forms; use
    /// [`Quaternion::try_sub`] to handle that case as an error.
    fn sub(self, rhs: &Quaternion) -> Quaternion {
        same_form_or_panic(self.try_sub(rhs))
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        &self - &rhs
    }
}

impl Mul for &Quaternion {
    type Output = Quaternion;

    /// # Panics
    /// When the operands carry different forms; use
    /// [`Quaternion::try_mul`] to handle that case as an error.
    fn mul(self, rhs: &Quaternion) -> Quaternion {
        same_form_or_panic(self.try_mul(rhs))
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        &self * &rhs
    }
}

impl Mul<Real> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, s: Real) -> Quaternion {
        self.scale(s)
    }
}

impl Mul<Real> for Quaternion {
    type Output = Quaternion;

    fn mul(self, s: Real) -> Quaternion {
        self.scale(s)
    }
}

impl Mul<&Quaternion> for Real {
    type Output = Quaternion;

    fn mul(self, q: &Quaternion) -> Quaternion {
        q.scale(self)
    }
}

impl Mul<Quaternion> for Real {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q.scale(self)
    }
}

impl Div<Real> for &Quaternion {
    type Output = Quaternion;

    fn div(self, s: Real) -> Quaternion {
        self.scale(1.0 / s)
    }
}

impl Div<Real> for Quaternion {
    type Output = Quaternion;

    fn div(self, s: Real) -> Quaternion {
        self.scale(1.0 / s)
    }
}

impl Neg for &Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        self.scale(-1.0)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        self.scale(-1.0)
    }
}
