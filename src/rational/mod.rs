//! # Rational field layer
//!
//! [`Rational`] pairs an [`Integer`] numerator with a [`Natural`] denominator
//! kept in lowest terms. Every constructor and mutating operation finishes
//! with a reduction step, so `gcd(|numerator|, denominator) == 1` and
//! `denominator >= 1` hold at all times.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algebra::{AdditiveGroup, AdditiveMonoid, Field, Module, Ring};
use crate::errors::ExactAlgebraError;
use crate::integer::Integer;
use crate::natural::{Natural, gcd};

/// An exact rational number in lowest terms.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

impl Rational {
    /// Creates `numerator / denominator`, reduced to lowest terms. A negative
    /// denominator moves its sign onto the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::ZeroDenominator`] if `denominator` is
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::integer::Integer;
    /// # use exact_algebra::rational::Rational;
    /// let half = Rational::try_with(Integer::from(2), Integer::from(4)).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    ///
    /// let negative = Rational::try_with(Integer::from(1), Integer::from(-2)).unwrap();
    /// assert_eq!(negative.to_string(), "-1/2");
    ///
    /// assert!(Rational::try_with(Integer::from(1), Integer::from(0)).is_err());
    /// ```
    pub fn try_with(numerator: Integer, denominator: Integer) -> Result<Self, ExactAlgebraError> {
        if denominator.is_zero() {
            return Err(ExactAlgebraError::ZeroDenominator(format!(
                "rational {}/0 is undefined",
                numerator
            )));
        }
        let numerator = if denominator.is_negative() {
            numerator.neg()
        } else {
            numerator
        };
        Ok(Rational::new_reduced(
            numerator,
            denominator.magnitude().clone(),
        ))
    }

    /// Internal constructor for a non-zero denominator; reduces immediately.
    fn new_reduced(numerator: Integer, denominator: Natural) -> Rational {
        let mut value = Rational {
            numerator,
            denominator,
        };
        value.simplify();
        value
    }

    /// The reduced numerator.
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The reduced denominator; always `>= 1`.
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Divides out `gcd(|numerator|, denominator)`.
    fn simplify(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = Natural::from(1);
            return;
        }
        let divisor = gcd(self.numerator.magnitude(), &self.denominator);
        if divisor == Natural::from(1) {
            return;
        }
        let reduced_numerator = self.numerator.magnitude().div_rem(&divisor);
        let reduced_denominator = self.denominator.div_rem(&divisor);
        if let (Ok((numerator, _)), Ok((denominator, _))) =
            (reduced_numerator, reduced_denominator)
        {
            self.numerator = Integer::from_parts(numerator, self.numerator.is_negative());
            self.denominator = denominator;
        }
    }

    /// In-place `self += rhs` over the cross-multiplied common denominator,
    /// then reduces.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::integer::Integer;
    /// # use exact_algebra::rational::Rational;
    /// let mut sum = Rational::try_with(Integer::from(1), Integer::from(2)).unwrap();
    /// sum.add_assign(&Rational::try_with(Integer::from(1), Integer::from(3)).unwrap());
    /// assert_eq!(sum.to_string(), "5/6");
    /// ```
    pub fn add_assign(&mut self, rhs: &Rational) {
        let lhs_denominator = Integer::from(self.denominator.clone());
        let rhs_denominator = Integer::from(rhs.denominator.clone());
        let mut numerator = Integer::mul(&self.numerator, &rhs_denominator);
        numerator.add_assign(&Integer::mul(&rhs.numerator, &lhs_denominator));
        self.numerator = numerator;
        self.denominator = Natural::mul(&self.denominator, &rhs.denominator);
        self.simplify();
    }

    /// In-place negation.
    pub fn neg_assign(&mut self) {
        self.numerator.neg_assign();
    }

    /// Returns `self * rhs`, reduced.
    pub fn mul(&self, rhs: &Rational) -> Rational {
        Rational::new_reduced(
            Integer::mul(&self.numerator, &rhs.numerator),
            Natural::mul(&self.denominator, &rhs.denominator),
        )
    }

    /// In-place `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &Rational) {
        *self = Rational::mul(self, rhs);
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `self` is zero.
    pub fn inv(&self) -> Result<Rational, ExactAlgebraError> {
        if self.numerator.is_zero() {
            return Err(ExactAlgebraError::DivisionByZero(
                "cannot invert the zero rational".to_string(),
            ));
        }
        Ok(Rational::new_reduced(
            Integer::from_parts(self.denominator.clone(), self.numerator.is_negative()),
            self.numerator.magnitude().clone(),
        ))
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `rhs` is zero.
    pub fn div(&self, rhs: &Rational) -> Result<Rational, ExactAlgebraError> {
        Ok(Rational::mul(self, &rhs.inv()?))
    }

    /// Returns `self^exponent`; negative exponents invert first.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] for a negative exponent
    /// of zero.
    pub fn pow(&self, exponent: i32) -> Result<Rational, ExactAlgebraError> {
        let power = Ring::pow(self, exponent.unsigned_abs());
        if exponent < 0 { power.inv() } else { Ok(power) }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational {
            numerator: Integer::default(),
            denominator: Natural::from(1),
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from(Integer::from(value))
    }
}

impl From<Integer> for Rational {
    fn from(numerator: Integer) -> Self {
        Rational {
            numerator,
            denominator: Natural::from(1),
        }
    }
}

impl Ord for Rational {
    /// Compares by cross products; both denominators are positive, so the
    /// sign handling is [`Integer`]'s.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = Integer::mul(&self.numerator, &Integer::from(other.denominator.clone()));
        let rhs = Integer::mul(&other.numerator, &Integer::from(self.denominator.clone()));
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    /// `"numerator"` when the denominator is 1, `"numerator/denominator"`
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == Natural::from(1) {
            self.numerator.fmt(f)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ExactAlgebraError;

    /// Parses `"a"` or `"a/b"` in decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Rational::try_with(numerator.parse()?, denominator.parse()?)
            }
            None => Ok(Rational::from(s.parse::<Integer>()?)),
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(mut self, rhs: Rational) -> Rational {
        self.add_assign(&rhs);
        self
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(mut self, mut rhs: Rational) -> Rational {
        rhs.neg_assign();
        self.add_assign(&rhs);
        self
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::mul(&self, &rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        self.neg_assign();
        self
    }
}

impl AdditiveMonoid for Rational {
    fn zero() -> Self {
        Rational::default()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }

    fn add_assign(&mut self, rhs: &Self) {
        Rational::add_assign(self, rhs);
    }
}

impl AdditiveGroup for Rational {
    fn neg_assign(&mut self) {
        Rational::neg_assign(self);
    }
}

impl Ring for Rational {
    fn one() -> Self {
        Rational::from(1)
    }

    fn is_one(&self) -> bool {
        self.numerator == Integer::from(1) && self.denominator == Natural::from(1)
    }

    fn mul_assign(&mut self, rhs: &Self) {
        Rational::mul_assign(self, rhs);
    }
}

impl Field for Rational {
    fn inv(&self) -> Result<Self, ExactAlgebraError> {
        Rational::inv(self)
    }
}

impl Module<Integer> for Rational {
    fn scale_assign(&mut self, scalar: &Integer) {
        self.numerator.mul_assign(scalar);
        self.simplify();
    }
}

impl Module<Rational> for Rational {
    fn scale_assign(&mut self, scalar: &Rational) {
        Rational::mul_assign(self, scalar);
    }
}

impl num_traits::Zero for Rational {
    fn zero() -> Self {
        Rational::default()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl num_traits::One for Rational {
    fn one() -> Self {
        Rational::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    fn rational(n: i64, d: i64) -> Rational {
        Rational::try_with(Integer::from(n), Integer::from(d)).unwrap()
    }

    #[test]
    fn test_reduced_at_construction() {
        assert_eq!(rational(2, 4).to_string(), "1/2");
        assert_eq!(rational(-6, 4).to_string(), "-3/2");
        assert_eq!(rational(0, 7).to_string(), "0");
        assert_eq!(rational(7, 1).to_string(), "7");
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(Rational::try_with(Integer::from(3), Integer::from(0)).is_err());
    }

    #[test]
    fn test_addition_cross_multiplied() {
        assert_eq!((rational(1, 2) + rational(1, 3)).to_string(), "5/6");
        assert_eq!((rational(1, 2) + rational(1, 2)).to_string(), "1");
        assert_eq!((rational(1, 2) + rational(-1, 2)).to_string(), "0");
        assert_eq!((rational(-1, 6) + rational(-1, 6)).to_string(), "-1/3");
    }

    #[test]
    fn test_multiplication_and_division() -> Result<(), ExactAlgebraError> {
        assert_eq!(Rational::mul(&rational(2, 3), &rational(3, 4)).to_string(), "1/2");
        assert_eq!(rational(1, 2).div(&rational(3, 2))?.to_string(), "1/3");
        assert!(rational(1, 2).div(&rational(0, 1)).is_err());
        assert!(rational(0, 1).inv().is_err());
        Ok(())
    }

    #[test]
    fn test_ordering() {
        assert!(rational(1, 3) < rational(1, 2));
        assert!(rational(-1, 2) < rational(1, 3));
        assert!(rational(-1, 2) < rational(-1, 3));
        assert!(rational(2, 4) == rational(1, 2));
    }

    #[test]
    fn test_pow() -> Result<(), ExactAlgebraError> {
        assert_eq!(rational(2, 3).pow(3)?.to_string(), "8/27");
        assert_eq!(rational(2, 3).pow(-2)?.to_string(), "9/4");
        assert_eq!(rational(0, 1).pow(0)?.to_string(), "1");
        assert!(rational(0, 1).pow(-1).is_err());
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ExactAlgebraError> {
        assert_eq!("5/6".parse::<Rational>()?, rational(5, 6));
        assert_eq!("-4/8".parse::<Rational>()?.to_string(), "-1/2");
        assert_eq!("3".parse::<Rational>()?, rational(3, 1));
        assert!("1/0".parse::<Rational>().is_err());
        Ok(())
    }

    quickcheck! {
        fn prop_reduced_after_arithmetic(a: i32, b: i32, c: i32, d: i32) -> TestResult {
            if b == 0 || d == 0 {
                return TestResult::discard();
            }
            let lhs = rational(a as i64, b as i64);
            let rhs = rational(c as i64, d as i64);
            for value in [
                lhs.clone() + rhs.clone(),
                lhs.clone() - rhs.clone(),
                Rational::mul(&lhs, &rhs),
            ] {
                let divisor = gcd(value.numerator().magnitude(), value.denominator());
                if divisor != Natural::from(1) || value.denominator().is_zero() {
                    return TestResult::failed();
                }
            }
            TestResult::passed()
        }

        fn prop_add_commutes(a: i32, b: i32, c: i32, d: i32) -> TestResult {
            if b == 0 || d == 0 {
                return TestResult::discard();
            }
            let lhs = rational(a as i64, b as i64);
            let rhs = rational(c as i64, d as i64);
            TestResult::from_bool(lhs.clone() + rhs.clone() == rhs + lhs)
        }
    }
}
