//! # Signed integer layer
//!
//! [`Integer`] wraps a [`Natural`] magnitude with a sign flag and delegates
//! all magnitude arithmetic to the natural-number engine.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algebra::{AdditiveGroup, AdditiveMonoid, Module, Ring};
use crate::errors::ExactAlgebraError;
use crate::natural::Natural;

/// An arbitrary-precision signed integer.
///
/// Zero is always represented with `negative = false`; there is no negative
/// zero.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Integer {
    magnitude: Natural,
    negative: bool,
}

impl Integer {
    /// Builds an integer from a magnitude and a sign flag, normalizing the
    /// sign of zero.
    pub fn from_parts(magnitude: Natural, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Integer {
            magnitude,
            negative,
        }
    }

    /// The magnitude, ignoring the sign.
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// True for negative non-zero values.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `|self|`.
    pub fn abs(&self) -> Integer {
        Integer::from_parts(self.magnitude.clone(), false)
    }

    /// Returns -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// In-place `self += rhs`, branching on the four sign combinations:
    /// like signs add magnitudes, unlike signs take the signed magnitude
    /// difference.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::integer::Integer;
    /// let mut a = Integer::from(-5);
    /// a.add_assign(&Integer::from(3));
    /// assert_eq!(a.to_string(), "-2");
    /// ```
    pub fn add_assign(&mut self, rhs: &Integer) {
        if self.negative == rhs.negative {
            self.magnitude.add_assign(&rhs.magnitude);
        } else if self.negative {
            *self = rhs.magnitude.difference(&self.magnitude);
        } else {
            *self = self.magnitude.difference(&rhs.magnitude);
        }
    }

    /// In-place negation; zero stays non-negative.
    pub fn neg_assign(&mut self) {
        if !self.magnitude.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Integer {
        let mut negated = self.clone();
        negated.neg_assign();
        negated
    }

    /// Returns `self - rhs`.
    pub fn sub(&self, rhs: &Integer) -> Integer {
        let mut difference = self.clone();
        difference.add_assign(&rhs.neg());
        difference
    }

    /// Returns `self * rhs`: magnitudes multiply, signs combine by XOR.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::integer::Integer;
    /// assert_eq!(Integer::from(-2).mul(&Integer::from(-3)).to_string(), "6");
    /// assert_eq!(Integer::from(-2).mul(&Integer::from(3)).to_string(), "-6");
    /// ```
    pub fn mul(&self, rhs: &Integer) -> Integer {
        Integer::from_parts(
            Natural::mul(&self.magnitude, &rhs.magnitude),
            self.negative != rhs.negative,
        )
    }

    /// In-place `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &Integer) {
        *self = Integer::mul(self, rhs);
    }

    /// Truncating division: the quotient is rounded toward zero and the
    /// remainder takes the dividend's sign. True (possibly fractional)
    /// division lives in the rational layer.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::integer::Integer;
    /// let (quotient, remainder) = Integer::from(-7).div_rem(&Integer::from(2)).unwrap();
    /// assert_eq!(quotient.to_string(), "-3");
    /// assert_eq!(remainder.to_string(), "-1");
    /// ```
    pub fn div_rem(&self, divisor: &Integer) -> Result<(Integer, Integer), ExactAlgebraError> {
        let (quotient, remainder) = self.magnitude.div_rem(&divisor.magnitude)?;
        Ok((
            Integer::from_parts(quotient, self.negative != divisor.negative),
            Integer::from_parts(remainder, self.negative),
        ))
    }
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b) >= 0` and `g = a*x + b*y`.
///
/// # Example
///
/// ```
/// # use exact_algebra::integer::{extended_gcd, Integer};
/// let (g, x, y) = extended_gcd(&Integer::from(240), &Integer::from(46));
/// assert_eq!(g.to_string(), "2");
/// assert_eq!(Integer::from(240).mul(&x) + Integer::from(46).mul(&y), g);
/// ```
pub fn extended_gcd(a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (Integer::from(1), Integer::from(0));
    let (mut old_t, mut t) = (Integer::from(0), Integer::from(1));
    while !r.is_zero() {
        let (quotient, remainder) = match old_r.div_rem(&r) {
            Ok(pair) => pair,
            // the loop condition keeps the divisor non-zero
            Err(_) => break,
        };
        old_r = std::mem::replace(&mut r, remainder);
        let next_s = Integer::sub(&old_s, &Integer::mul(&quotient, &s));
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = Integer::sub(&old_t, &Integer::mul(&quotient, &t));
        old_t = std::mem::replace(&mut t, next_t);
    }
    if old_r.is_negative() {
        old_r.neg_assign();
        old_s.neg_assign();
        old_t.neg_assign();
    }
    (old_r, old_s, old_t)
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer::from_parts(Natural::from(value.unsigned_abs()), value < 0)
    }
}

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Integer {
            magnitude,
            negative: false,
        }
    }
}

impl Ord for Integer {
    /// Negative < non-negative; like signs compare magnitudes, reversed for
    /// two negatives.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        self.magnitude.fmt(f)
    }
}

impl FromStr for Integer {
    type Err = ExactAlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(rest) => Ok(Integer::from_parts(rest.parse()?, true)),
            None => Ok(Integer::from_parts(s.parse()?, false)),
        }
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(mut self, rhs: Integer) -> Integer {
        self.add_assign(&rhs);
        self
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(mut self, rhs: Integer) -> Integer {
        self.add_assign(&rhs.neg());
        self
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        Integer::mul(&self, &rhs)
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(mut self) -> Integer {
        self.neg_assign();
        self
    }
}

impl AdditiveMonoid for Integer {
    fn zero() -> Self {
        Integer::default()
    }

    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }

    fn add_assign(&mut self, rhs: &Self) {
        Integer::add_assign(self, rhs);
    }
}

impl AdditiveGroup for Integer {
    fn neg_assign(&mut self) {
        Integer::neg_assign(self);
    }
}

impl Ring for Integer {
    fn one() -> Self {
        Integer::from(1)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.magnitude == Natural::from(1)
    }

    fn mul_assign(&mut self, rhs: &Self) {
        Integer::mul_assign(self, rhs);
    }
}

impl Module<Integer> for Integer {
    fn scale_assign(&mut self, scalar: &Integer) {
        Integer::mul_assign(self, scalar);
    }
}

impl num_traits::Zero for Integer {
    fn zero() -> Self {
        Integer::default()
    }

    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }
}

impl num_traits::One for Integer {
    fn one() -> Self {
        Integer::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_negative_zero() {
        let zero = Integer::from_parts(Natural::from(0), true);
        assert!(!zero.is_negative());
        assert_eq!(zero.to_string(), "0");
        assert_eq!(Integer::sub(&Integer::from(5), &Integer::from(5)), Integer::from(0));
    }

    #[test]
    fn test_addition_sign_combinations() {
        assert_eq!(Integer::from(5) + Integer::from(3), Integer::from(8));
        assert_eq!(Integer::from(-5) + Integer::from(-3), Integer::from(-8));
        assert_eq!(Integer::from(-5) + Integer::from(3), Integer::from(-2));
        assert_eq!(Integer::from(5) + Integer::from(-3), Integer::from(2));
        assert_eq!(Integer::from(3) + Integer::from(-5), Integer::from(-2));
    }

    #[test]
    fn test_multiplication_signs() {
        assert_eq!(Integer::from(-4) * Integer::from(6), Integer::from(-24));
        assert_eq!(Integer::from(-4) * Integer::from(-6), Integer::from(24));
        assert_eq!(Integer::from(4) * Integer::from(0), Integer::from(0));
    }

    #[test]
    fn test_ordering() {
        assert!(Integer::from(-1) < Integer::from(0));
        assert!(Integer::from(-3) < Integer::from(-2));
        assert!(Integer::from(2) < Integer::from(3));
        assert!(Integer::from(-100) < Integer::from(1));
    }

    #[test]
    fn test_truncating_division() -> Result<(), ExactAlgebraError> {
        let (q, r) = Integer::from(7).div_rem(&Integer::from(2))?;
        assert_eq!((q, r), (Integer::from(3), Integer::from(1)));

        let (q, r) = Integer::from(-7).div_rem(&Integer::from(2))?;
        assert_eq!((q, r), (Integer::from(-3), Integer::from(-1)));

        let (q, r) = Integer::from(7).div_rem(&Integer::from(-2))?;
        assert_eq!((q, r), (Integer::from(-3), Integer::from(1)));

        assert!(Integer::from(7).div_rem(&Integer::from(0)).is_err());
        Ok(())
    }

    #[test]
    fn test_extended_gcd_bezout() {
        for (a, b) in [(240i64, 46i64), (-240, 46), (17, 0), (0, 9), (12, 18)] {
            let a = Integer::from(a);
            let b = Integer::from(b);
            let (g, x, y) = extended_gcd(&a, &b);
            assert!(!g.is_negative());
            assert_eq!(Integer::mul(&a, &x) + Integer::mul(&b, &y), g);
        }
        let (g, _, _) = extended_gcd(&Integer::from(240), &Integer::from(46));
        assert_eq!(g, Integer::from(2));
    }

    #[test]
    fn test_display_and_parse() -> Result<(), ExactAlgebraError> {
        assert_eq!(Integer::from(-5).to_string(), "-5");
        assert_eq!(Integer::from(0).to_string(), "0");
        assert_eq!("-864197532".parse::<Integer>()?.to_string(), "-864197532");
        assert!("--3".parse::<Integer>().is_err());
        Ok(())
    }
}
