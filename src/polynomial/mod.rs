//! # Polynomial layer
//!
//! [`Polynomial<R>`] is generic over any ring-capable coefficient type: its
//! own ring operations are built from `R`'s, so "polynomial over rationals",
//! "polynomial over integers" and deeper nestings all come from the same
//! code. Division requires field coefficients and lives in the sibling
//! `euclid` file.

mod euclid;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::algebra::{AdditiveGroup, AdditiveMonoid, Module, Ring};

/// A dense polynomial; index = power of the indeterminate, index 0 is the
/// constant term.
///
/// The highest-index coefficient, if any, is never zero under `R`'s own
/// is-zero test; the empty coefficient sequence is the zero polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polynomial<R> {
    coefficients: Vec<R>,
}

impl<R> Default for Polynomial<R> {
    /// The zero polynomial.
    fn default() -> Self {
        Polynomial {
            coefficients: Vec::new(),
        }
    }
}

impl<R: AdditiveMonoid> Polynomial<R> {
    /// Builds a polynomial from coefficients (constant term first), trimming
    /// trailing zeros.
    pub fn new(coefficients: Vec<R>) -> Self {
        let mut polynomial = Polynomial { coefficients };
        polynomial.normalize();
        polynomial
    }

    /// The constant polynomial `value`.
    pub fn constant(value: R) -> Self {
        Polynomial::new(vec![value])
    }

    /// `coefficient * x^power`.
    pub fn monomial(coefficient: R, power: usize) -> Self {
        let mut coefficients = vec![R::zero(); power];
        coefficients.push(coefficient);
        Polynomial::new(coefficients)
    }

    /// Coefficients in ascending power order.
    pub fn coefficients(&self) -> &[R] {
        &self.coefficients
    }

    /// The degree; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// The highest non-zero coefficient, if any.
    pub fn leading_coefficient(&self) -> Option<&R> {
        self.coefficients.last()
    }

    /// True for the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Drops trailing coefficients that are zero under `R`'s is-zero test.
    fn normalize(&mut self) {
        while self.coefficients.last().is_some_and(|c| c.is_zero()) {
            self.coefficients.pop();
        }
    }

    /// In-place coefficient-wise `self += rhs`, zero-padded to the longer
    /// operand, then re-trimmed.
    pub fn add_assign(&mut self, rhs: &Self) {
        let coefficients: Vec<R> = self
            .coefficients
            .drain(..)
            .zip_longest(rhs.coefficients.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(mut a, b) => {
                    a.add_assign(b);
                    a
                }
                EitherOrBoth::Left(a) => a,
                EitherOrBoth::Right(b) => b.clone(),
            })
            .collect();
        self.coefficients = coefficients;
        self.normalize();
    }
}

impl<R: AdditiveGroup> Polynomial<R> {
    /// In-place coefficient-wise negation.
    pub fn neg_assign(&mut self) {
        for coefficient in self.coefficients.iter_mut() {
            coefficient.neg_assign();
        }
    }
}

impl<R: Ring> Polynomial<R> {
    /// Returns `self * rhs` by discrete convolution: result coefficient `k`
    /// accumulates `a[i] * b[j]` over all `i + j == k`, using `R`'s own ring
    /// operations.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::polynomial::Polynomial;
    /// # use exact_algebra::rational::Rational;
    /// let one_plus_x = Polynomial::new(vec![Rational::from(1), Rational::from(1)]);
    /// let square = one_plus_x.mul(&one_plus_x);
    /// assert_eq!(square.to_string(), "1 x^2 + 2 x + 1");
    /// ```
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::default();
        }
        let mut cells = vec![R::zero(); self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                cells[i + j].add_assign(&a.mul(b));
            }
        }
        Polynomial::new(cells)
    }

    /// In-place `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &Self) {
        *self = Polynomial::mul(self, rhs);
    }

    /// Evaluates at `point` by Horner's rule.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::polynomial::Polynomial;
    /// # use exact_algebra::rational::Rational;
    /// let p = Polynomial::new(vec![Rational::from(1), Rational::from(2), Rational::from(1)]);
    /// assert_eq!(p.evaluate(&Rational::from(3)).to_string(), "16");
    /// ```
    pub fn evaluate(&self, point: &R) -> R {
        let mut value = R::zero();
        for coefficient in self.coefficients.iter().rev() {
            value.mul_assign(point);
            value.add_assign(coefficient);
        }
        value
    }
}

impl<R: AdditiveMonoid> fmt::Display for Polynomial<R> {
    /// Descending-power sum `c_n x^n + ... + c_0`, zero terms omitted; the
    /// zero polynomial renders as the coefficient type's zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "{}", R::zero());
        }
        let rendered = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(power, coefficient)| match power {
                0 => format!("{}", coefficient),
                1 => format!("{} x", coefficient),
                _ => format!("{} x^{}", coefficient, power),
            })
            .join(" + ");
        f.write_str(&rendered)
    }
}

impl<R: AdditiveMonoid> Add for Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(mut self, rhs: Polynomial<R>) -> Polynomial<R> {
        self.add_assign(&rhs);
        self
    }
}

impl<R: AdditiveGroup> Sub for Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(mut self, mut rhs: Polynomial<R>) -> Polynomial<R> {
        rhs.neg_assign();
        self.add_assign(&rhs);
        self
    }
}

impl<R: Ring> Mul for Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: Polynomial<R>) -> Polynomial<R> {
        Polynomial::mul(&self, &rhs)
    }
}

impl<R: AdditiveGroup> Neg for Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(mut self) -> Polynomial<R> {
        self.neg_assign();
        self
    }
}

impl<R: AdditiveMonoid> AdditiveMonoid for Polynomial<R> {
    fn zero() -> Self {
        Polynomial::default()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }

    fn add_assign(&mut self, rhs: &Self) {
        Polynomial::add_assign(self, rhs);
    }
}

impl<R: AdditiveGroup> AdditiveGroup for Polynomial<R> {
    fn neg_assign(&mut self) {
        Polynomial::neg_assign(self);
    }
}

impl<R: Ring> Ring for Polynomial<R> {
    fn one() -> Self {
        Polynomial::constant(R::one())
    }

    fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_one()
    }

    fn mul_assign(&mut self, rhs: &Self) {
        Polynomial::mul_assign(self, rhs);
    }
}

impl<R: Ring> Module<R> for Polynomial<R> {
    fn scale_assign(&mut self, scalar: &R) {
        for coefficient in self.coefficients.iter_mut() {
            coefficient.mul_assign(scalar);
        }
        self.normalize();
    }
}
