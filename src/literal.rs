//! Textual quaternion literals: `[+|-]a[+|-]bi[+|-]cj[+|-]dk`.
//!
//! Terms may appear in any subset, each basis label at most once; a bare
//! number with no label is the scalar term. Parsing walks the string right
//! to left, peeling one signed term per step, the same scan the grammar is
//! defined by.

use core::fmt;
use core::str::FromStr;

use crate::errors::AlgebraError;
use crate::float_types::Real;
use crate::quaternion::Quaternion;

fn slot(label: char) -> Option<usize> {
    match label {
        'i' => Some(1),
        'j' => Some(2),
        'k' => Some(3),
        _ => None,
    }
}

pub(crate) fn parse(input: &str) -> Result<[Real; 4], AlgebraError> {
    let malformed = || AlgebraError::MalformedLiteral(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.is_ascii() {
        return Err(malformed());
    }
    let mut rest = if trimmed.starts_with('+') || trimmed.starts_with('-') {
        trimmed.to_string()
    } else {
        format!("+{trimmed}")
    };

    let mut coeffs = [0.0; 4];
    let mut seen = [false; 4];
    while !rest.is_empty() {
        let cut = rest.rfind(['+', '-']).ok_or_else(malformed)?;
        let term = rest.split_off(cut);

        let (index, number) = match term.chars().last().and_then(slot) {
            Some(index) => (index, &term[..term.len() - 1]),
            None => (0, term.as_str()),
        };
        if seen[index] {
            return Err(malformed());
        }
        seen[index] = true;
        coeffs[index] = number.trim().parse::<Real>().map_err(|_| malformed())?;
    }
    Ok(coeffs)
}

impl FromStr for Quaternion {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [w, x, y, z] = parse(s)?;
        Ok(Quaternion::new(w, x, y, z))
    }
}

impl fmt::Display for Quaternion {
    /// Emits the literal grammar, skipping zero terms: `1+2i-2k`. The zero
    /// quaternion prints as `0`. Output parses back to the same components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printed = false;
        for (coeff, label) in self.coeffs().into_iter().zip(["", "i", "j", "k"]) {
            if coeff == 0.0 {
                continue;
            }
            if printed && coeff > 0.0 {
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
