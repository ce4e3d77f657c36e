//! Sparse exact Laurent polynomials over a fixed set of variables.
//!
//! A polynomial is a map from integer exponent vectors to nonzero `BigInt`
//! coefficients; every stored vector has the same length (the arity, fixed
//! at construction). Exponents may be negative. All arithmetic is exact.
//!
//! # Invariants
//! - No stored coefficient is zero.
//! - Every stored exponent vector has length `arity`.
//!
//! The binary operators require equal arities and panic otherwise, like the
//! dimension checks of a linear-algebra library; `checked_add`/`checked_mul`
//! return the mismatch as an error instead.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul};

/// Error raised by polynomial construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Two operands carry different numbers of variables.
    ArityMismatch {
        /// Arity of the left operand.
        left: usize,
        /// Arity of the right operand.
        right: usize,
    },
    /// A term's exponent vector has the wrong length.
    ExponentLength {
        /// The polynomial's arity.
        expected: usize,
        /// The offending vector's length.
        found: usize,
    },
    /// An exponent did not divide evenly during a rescale.
    FractionalExponent {
        /// The exponent that failed to divide.
        exponent: i64,
        /// The requested divisor.
        divisor: i64,
    },
    /// Evaluation or rendering received the wrong number of variables.
    WrongVariableCount {
        /// The polynomial's arity.
        expected: usize,
        /// How many values or symbols were supplied.
        given: usize,
    },
}

impl fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolynomialError::ArityMismatch { left, right } => {
                write!(f, "cannot combine polynomials in {left} and {right} variables")
            }
            PolynomialError::ExponentLength { expected, found } => {
                write!(f, "exponent vector of length {found}, expected {expected}")
            }
            PolynomialError::FractionalExponent { exponent, divisor } => {
                write!(f, "exponent {exponent} is not divisible by {divisor}")
            }
            PolynomialError::WrongVariableCount { expected, given } => {
                write!(f, "expected {expected} variables, received {given}")
            }
        }
    }
}

impl std::error::Error for PolynomialError {}

/// An immutable sparse Laurent polynomial with exact integer coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    arity: usize,
    coefficients: BTreeMap<Vec<i64>, BigInt>,
}

impl Polynomial {
    /// The zero polynomial in `arity` variables.
    pub fn zero(arity: usize) -> Self {
        Self { arity, coefficients: BTreeMap::new() }
    }

    /// The constant 1 in `arity` variables.
    pub fn one(arity: usize) -> Self {
        Self::monomial(vec![0; arity], 1)
    }

    /// A single term `coefficient · x₀^e₀ ⋯ xₙ^eₙ`.
    pub fn monomial(exponents: Vec<i64>, coefficient: i64) -> Self {
        let arity = exponents.len();
        let mut coefficients = BTreeMap::new();
        if coefficient != 0 {
            coefficients.insert(exponents, BigInt::from(coefficient));
        }
        Self { arity, coefficients }
    }

    /// A univariate polynomial from `(exponent, coefficient)` pairs.
    ///
    /// Coefficients for a repeated exponent accumulate; zero results drop.
    pub fn univariate(terms: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let mut coefficients: BTreeMap<Vec<i64>, BigInt> = BTreeMap::new();
        for (exponent, coefficient) in terms {
            let entry = coefficients.entry(vec![exponent]).or_insert_with(BigInt::zero);
            *entry += coefficient;
        }
        coefficients.retain(|_, c| !c.is_zero());
        Self { arity: 1, coefficients }
    }

    /// Builds a polynomial in `arity` variables from raw terms.
    pub fn from_terms(
        arity: usize,
        terms: impl IntoIterator<Item = (Vec<i64>, i64)>,
    ) -> Result<Self, PolynomialError> {
        let mut coefficients: BTreeMap<Vec<i64>, BigInt> = BTreeMap::new();
        for (exponents, coefficient) in terms {
            if exponents.len() != arity {
                return Err(PolynomialError::ExponentLength { expected: arity, found: exponents.len() });
            }
            let entry = coefficients.entry(exponents).or_insert_with(BigInt::zero);
            *entry += coefficient;
        }
        coefficients.retain(|_, c| !c.is_zero());
        Ok(Self { arity, coefficients })
    }

    /// Number of variables.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Whether no terms remain.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The stored terms, sorted by exponent vector.
    pub fn terms(&self) -> impl Iterator<Item = (&[i64], &BigInt)> {
        self.coefficients.iter().map(|(e, c)| (e.as_slice(), c))
    }

    /// The coefficient at `exponents`, if nonzero.
    pub fn coefficient(&self, exponents: &[i64]) -> Option<&BigInt> {
        self.coefficients.get(exponents)
    }

    fn add_unchecked(&self, other: &Self) -> Self {
        let mut coefficients = self.coefficients.clone();
        for (exponents, coefficient) in &other.coefficients {
            let entry = coefficients.entry(exponents.clone()).or_insert_with(BigInt::zero);
            *entry += coefficient;
        }
        coefficients.retain(|_, c| !c.is_zero());
        Self { arity: self.arity, coefficients }
    }

    fn mul_unchecked(&self, other: &Self) -> Self {
        let mut coefficients: BTreeMap<Vec<i64>, BigInt> = BTreeMap::new();
        for (left_exp, left_coeff) in &self.coefficients {
            for (right_exp, right_coeff) in &other.coefficients {
                let exponents: Vec<i64> =
                    left_exp.iter().zip(right_exp.iter()).map(|(a, b)| a + b).collect();
                let entry = coefficients.entry(exponents).or_insert_with(BigInt::zero);
                *entry += left_coeff * right_coeff;
            }
        }
        coefficients.retain(|_, c| !c.is_zero());
        Self { arity: self.arity, coefficients }
    }

    /// Coefficient-wise sum; arity mismatch is an error.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PolynomialError> {
        if self.arity != other.arity {
            return Err(PolynomialError::ArityMismatch { left: self.arity, right: other.arity });
        }
        Ok(self.add_unchecked(other))
    }

    /// Full convolution product; arity mismatch is an error.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        if self.arity != other.arity {
            return Err(PolynomialError::ArityMismatch { left: self.arity, right: other.arity });
        }
        Ok(self.mul_unchecked(other))
    }

    /// Raises to a non-negative power by repeated multiplication.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one(self.arity);
        for _ in 0..exponent {
            result = result.mul_unchecked(self);
        }
        result
    }

    /// Divides every exponent by `divisor` exactly.
    ///
    /// A remainder anywhere means the polynomial does not live in the coarser
    /// variable; the offending exponent is reported.
    pub fn rescale_exponents(&self, divisor: i64) -> Result<Self, PolynomialError> {
        let mut coefficients = BTreeMap::new();
        for (exponents, coefficient) in &self.coefficients {
            let mut rescaled = Vec::with_capacity(exponents.len());
            for &exponent in exponents {
                if exponent % divisor != 0 {
                    return Err(PolynomialError::FractionalExponent { exponent, divisor });
                }
                rescaled.push(exponent / divisor);
            }
            coefficients.insert(rescaled, coefficient.clone());
        }
        Ok(Self { arity: self.arity, coefficients })
    }

    /// Numeric evaluation at one value per variable.
    pub fn eval(&self, values: &[f64]) -> Result<f64, PolynomialError> {
        if values.len() != self.arity {
            return Err(PolynomialError::WrongVariableCount {
                expected: self.arity,
                given: values.len(),
            });
        }
        let mut sum = 0.0;
        for (exponents, coefficient) in &self.coefficients {
            let mut term = coefficient.to_f64().unwrap_or(f64::INFINITY);
            for (&exponent, &value) in exponents.iter().zip(values.iter()) {
                term *= value.powi(exponent as i32);
            }
            sum += term;
        }
        Ok(sum)
    }

    /// Renders the polynomial with one symbol per variable.
    ///
    /// Diagnostic only; terms appear in exponent order with `^` powers, as
    /// in `-A^-5 - A^3 + A^7`.
    pub fn render(&self, variables: &[&str]) -> Result<String, PolynomialError> {
        if variables.len() != self.arity {
            return Err(PolynomialError::WrongVariableCount {
                expected: self.arity,
                given: variables.len(),
            });
        }
        let mut out = String::new();
        for (i, (exponents, coefficient)) in self.coefficients.iter().enumerate() {
            if i == 0 && coefficient.is_negative() {
                out.push_str("-");
            } else if i != 0 && !coefficient.is_negative() {
                out.push_str(" + ");
            } else if i != 0 {
                out.push_str(" - ");
            }
            let magnitude = coefficient.abs();
            if magnitude != BigInt::from(1) || exponents.iter().all(|&e| e == 0) {
                out.push_str(&magnitude.to_string());
            }
            for (&exponent, symbol) in exponents.iter().zip(variables.iter()) {
                if exponent != 0 {
                    out.push_str(symbol);
                    if exponent != 1 {
                        out.push('^');
                        out.push_str(&exponent.to_string());
                    }
                }
            }
        }
        Ok(out)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        assert_eq!(self.arity, rhs.arity, "polynomial arity mismatch in +");
        self.add_unchecked(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        assert_eq!(self.arity, rhs.arity, "polynomial arity mismatch in *");
        self.mul_unchecked(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_are_identities() {
        let p = Polynomial::univariate([(2, 3), (-1, 1)]);
        assert_eq!(&p + &Polynomial::zero(1), p);
        assert_eq!(&p * &Polynomial::one(1), p);
        assert!(Polynomial::zero(1).is_zero());
        assert!(!Polynomial::one(1).is_zero());
    }

    #[test]
    fn zero_coefficients_are_never_stored() {
        let p = Polynomial::univariate([(3, 2), (3, -2), (0, 1)]);
        assert_eq!(p, Polynomial::one(1));
        let q = Polynomial::univariate([(1, 1)]);
        let negated = Polynomial::univariate([(1, -1)]);
        assert!((&q + &negated).is_zero());
    }

    #[test]
    fn multiplication_convolves_exponents() {
        // (A + A^-1)^2 = A^2 + 2 + A^-2
        let p = Polynomial::univariate([(1, 1), (-1, 1)]);
        assert_eq!(p.pow(2), Polynomial::univariate([(2, 1), (0, 2), (-2, 1)]));
    }

    #[test]
    fn pow_zero_is_one() {
        let p = Polynomial::univariate([(5, -7)]);
        assert_eq!(p.pow(0), Polynomial::one(1));
    }

    #[test]
    fn checked_ops_reject_arity_mismatch() {
        let p = Polynomial::one(1);
        let q = Polynomial::one(2);
        assert_eq!(
            p.checked_add(&q),
            Err(PolynomialError::ArityMismatch { left: 1, right: 2 })
        );
        assert_eq!(
            p.checked_mul(&q),
            Err(PolynomialError::ArityMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn from_terms_rejects_ragged_exponents() {
        let result = Polynomial::from_terms(2, [(vec![1, 2], 1), (vec![1], 1)]);
        assert_eq!(result, Err(PolynomialError::ExponentLength { expected: 2, found: 1 }));
    }

    #[test]
    fn rescale_divides_exactly_or_fails() {
        let p = Polynomial::univariate([(4, 1), (-8, 2)]);
        assert_eq!(p.rescale_exponents(4).unwrap(), Polynomial::univariate([(1, 1), (-2, 2)]));
        let q = Polynomial::univariate([(6, 1)]);
        assert_eq!(
            q.rescale_exponents(4),
            Err(PolynomialError::FractionalExponent { exponent: 6, divisor: 4 })
        );
    }

    #[test]
    fn eval_matches_hand_computation() {
        // 2A^2 - 3A^-1 at A = 2: 8 - 1.5
        let p = Polynomial::univariate([(2, 2), (-1, -3)]);
        let value = p.eval(&[2.0]).unwrap();
        assert!((value - 6.5).abs() < 1e-12);
        assert!(p.eval(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn render_writes_signs_and_powers() {
        let p = Polynomial::univariate([(-5, -1), (3, -1), (7, 1)]);
        assert_eq!(p.render(&["A"]).unwrap(), "-A^-5 - A^3 + A^7");
        let constant = Polynomial::univariate([(0, 2)]);
        assert_eq!(constant.render(&["A"]).unwrap(), "2");
        assert!(p.render(&[]).is_err());
    }

    #[test]
    fn structural_equality_includes_arity() {
        assert_ne!(Polynomial::zero(1), Polynomial::zero(2));
        assert_eq!(
            Polynomial::monomial(vec![2, 0], 3),
            Polynomial::from_terms(2, [(vec![2, 0], 3)]).unwrap()
        );
    }
}
