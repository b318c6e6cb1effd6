//! The integer (Hurwitz) quaternion ring.
//!
//! A [`Hurwitz`] wraps a real-valued [`Quaternion`] whose components are
//! validated integral at the boundary. Composition, not inheritance, so
//! float-only operations (inverse, unit direction, roots) simply do not
//! exist here. What the ring adds is modular arithmetic: component-wise
//! reduction and the Fermat-quotient modular inverse.

use core::fmt;
use core::str::FromStr;

use crate::errors::AlgebraError;
use crate::float_types::Real;
use crate::form::Form;
use crate::quaternion::Quaternion;

/// A quaternion with integer components.
#[derive(Clone, Debug, PartialEq)]
pub struct Hurwitz {
    inner: Quaternion,
}

/// `base^exp mod m` by square-and-multiply; `i128` intermediates keep the
/// products exact for any `i64` modulus.
fn mod_pow(base: i64, mut exp: i64, m: i64) -> i64 {
    let m = m as i128;
    let mut base = (base as i128).rem_euclid(m);
    let mut result = 1i128;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as i64
}

impl Hurwitz {
    pub fn new(w: i64, x: i64, y: i64, z: i64) -> Self {
        Self {
            inner: Quaternion::new(w as Real, x as Real, y as Real, z as Real),
        }
    }

    pub fn with_form(components: [i64; 4], form: Form) -> Self {
        Self {
            inner: Quaternion::with_form(components.map(|c| c as Real), form),
        }
    }

    /// Coerce a real-valued quaternion into the ring.
    ///
    /// Fails with [`AlgebraError::NonIntegralComponent`] if any component
    /// has a fractional part.
    pub fn try_from_quaternion(q: &Quaternion) -> Result<Self, AlgebraError> {
        for c in q.coeffs() {
            if c.round() != c {
                return Err(AlgebraError::NonIntegralComponent(c));
            }
        }
        Ok(Self { inner: q.clone() })
    }

    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn one() -> Self {
        Self::new(1, 0, 0, 0)
    }

    pub fn components(&self) -> [i64; 4] {
        self.inner.coeffs().map(|c| c as i64)
    }

    /// The wrapped real-valued quaternion.
    pub fn as_quaternion(&self) -> &Quaternion {
        &self.inner
    }

    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    pub fn norm(&self) -> i64 {
        self.inner.norm().round() as i64
    }

    pub fn trace(&self) -> i64 {
        self.inner.trace().round() as i64
    }

    pub fn conjugate(&self) -> Self {
        Self {
            inner: self.inner.conjugate(),
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        Self::try_from_quaternion(&self.inner.try_add(&other.inner)?)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        Self::try_from_quaternion(&self.inner.try_sub(&other.inner)?)
    }

    /// Right-multiplication. Re-validated through the boundary: a form
    /// matrix with fractional entries can carry a product outside the
    /// ring, and that must surface as [`AlgebraError::NonIntegralComponent`].
    pub fn try_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        Self::try_from_quaternion(&self.inner.try_mul(&other.inner)?)
    }

    /// Component-wise reduction modulo `m`, non-negative residues.
    ///
    /// # Panics
    /// When `m` is zero.
    pub fn rem(&self, m: i64) -> Self {
        let [w, x, y, z] = self.components().map(|c| c.rem_euclid(m));
        Self {
            inner: Quaternion::with_form(
                [w as Real, x as Real, y as Real, z as Real],
                self.inner.form().clone(),
            ),
        }
    }

    /// General inversion leaves the integer ring; only
    /// [`Hurwitz::inverse_mod`] is available.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        Err(AlgebraError::NotSupportedForHurwitz)
    }

    /// Modular inverse: `conj(q) · norm(q)^(p-2) mod p`.
    ///
    /// Valid when `p` is prime and does not divide `norm(q)`; primality is
    /// not checked; that is the caller's responsibility. Fails with
    /// [`AlgebraError::NotInvertible`] when `p` divides the norm.
    pub fn inverse_mod(&self, p: i64) -> Result<Self, AlgebraError> {
        let norm = self.norm().rem_euclid(p);
        if norm == 0 {
            return Err(AlgebraError::NotInvertible);
        }
        let scale = mod_pow(norm, p - 2, p);
        let [w, x, y, z] = self.conjugate().components();
        Ok(Self::with_form(
            [w * scale, x * scale, y * scale, z * scale],
            self.inner.form().clone(),
        )
        .rem(p))
    }

    /// Non-negative integer power, reduced modulo `modulo` when given.
    pub fn pow(&self, exponent: u32, modulo: Option<i64>) -> Result<Self, AlgebraError> {
        let power = Self::try_from_quaternion(&self.inner.powi(exponent as i64)?)?;
        Ok(match modulo {
            Some(m) => power.rem(m),
            None => power,
        })
    }
}

impl FromStr for Hurwitz {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_quaternion(&s.parse::<Quaternion>()?)
    }
}

impl fmt::Display for Hurwitz {
    /// Same literal grammar as [`Quaternion`], integer-formatted: `1+2i-2k`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printed = false;
        for (coeff, label) in self.components().into_iter().zip(["", "i", "j", "k"]) {
            if coeff == 0 {
                continue;
            }
            if printed && coeff > 0 {
                write!(f, "+")?;
            }
            write!(f, "{coeff}{label}")?;
            printed = true;
        }
        if !printed {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_pow_matches_plain_pow() {
        assert_eq!(mod_pow(8, 11, 13), 5);
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(7, 0, 13), 1);
    }
}
