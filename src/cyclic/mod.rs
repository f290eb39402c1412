//! # Finite cyclic groups
//!
//! [`CyclicGroup`] holds a [`Natural`] strictly below a modulus carried in
//! the type. Every operation reduces through the engine's division, so the
//! held value never reaches the modulus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algebra::{AdditiveGroup, AdditiveMonoid, Ring};
use crate::errors::ExactAlgebraError;
use crate::integer::{Integer, extended_gcd};
use crate::natural::Natural;

/// An element of Z modulo `MODULUS`.
///
/// The modulus is a const generic so that the identity factories of the
/// capability traits can produce an element without an instance to read a
/// modulus from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CyclicGroup<const MODULUS: u64> {
    value: Natural,
}

impl<const MODULUS: u64> CyclicGroup<MODULUS> {
    /// Creates an element from a native value, reduced modulo `MODULUS`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::InvalidModulus`] when `MODULUS` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::cyclic::CyclicGroup;
    /// assert_eq!(CyclicGroup::<1597>::try_with(1597).unwrap().to_string(), "0");
    /// assert_eq!(CyclicGroup::<1597>::try_with(2000).unwrap().to_string(), "403");
    /// assert!(CyclicGroup::<0>::try_with(5).is_err());
    /// ```
    pub fn try_with(value: u64) -> Result<Self, ExactAlgebraError> {
        Self::from_natural(Natural::from(value))
    }

    /// Creates an element from an arbitrary-precision value, reduced modulo
    /// `MODULUS`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::InvalidModulus`] when `MODULUS` is 0.
    pub fn from_natural(mut value: Natural) -> Result<Self, ExactAlgebraError> {
        if MODULUS == 0 {
            return Err(ExactAlgebraError::InvalidModulus(
                "modulus must be greater than 0".to_string(),
            ));
        }
        Self::reduce(&mut value);
        Ok(CyclicGroup { value })
    }

    /// The modulus as a [`Natural`].
    pub fn modulus() -> Natural {
        Natural::from(MODULUS)
    }

    /// The held value; always below the modulus.
    pub fn value(&self) -> &Natural {
        &self.value
    }

    fn reduce(value: &mut Natural) {
        let modulus = Natural::from(MODULUS);
        if modulus.is_zero() {
            return;
        }
        // the receiver becomes the remainder; the quotient is discarded
        let _ = value.div_rem_assign(&modulus);
    }

    /// The multiplicative inverse modulo `MODULUS`, via the extended
    /// Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::NoInverse`] if the value is 0 or
    /// `gcd(value, MODULUS) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::cyclic::CyclicGroup;
    /// assert_eq!(CyclicGroup::<10>::try_with(3).unwrap().inv().unwrap().to_string(), "7");
    /// assert_eq!(CyclicGroup::<10>::try_with(9).unwrap().inv().unwrap().to_string(), "9");
    /// assert!(CyclicGroup::<10>::try_with(2).unwrap().inv().is_err());
    /// assert!(CyclicGroup::<10>::try_with(0).unwrap().inv().is_err());
    /// ```
    pub fn inv(&self) -> Result<Self, ExactAlgebraError> {
        if self.value.is_zero() {
            return Err(ExactAlgebraError::NoInverse(format!(
                "cannot invert 0 in mod {}",
                MODULUS
            )));
        }
        let modulus = Integer::from(Self::modulus());
        let (g, bezout, _) = extended_gcd(&Integer::from(self.value.clone()), &modulus);
        if g != Integer::from(1) {
            return Err(ExactAlgebraError::NoInverse(format!(
                "modular inverse does not exist for {} mod {} (gcd={})",
                self.value, MODULUS, g
            )));
        }
        let (_, mut remainder) = bezout.div_rem(&modulus)?;
        if remainder.is_negative() {
            remainder.add_assign(&modulus);
        }
        Ok(CyclicGroup {
            value: remainder.magnitude().clone(),
        })
    }
}

impl<const MODULUS: u64> fmt::Display for CyclicGroup<MODULUS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<const MODULUS: u64> AdditiveMonoid for CyclicGroup<MODULUS> {
    fn zero() -> Self {
        CyclicGroup {
            value: Natural::default(),
        }
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn add_assign(&mut self, rhs: &Self) {
        self.value.add_assign(&rhs.value);
        Self::reduce(&mut self.value);
    }
}

impl<const MODULUS: u64> AdditiveGroup for CyclicGroup<MODULUS> {
    /// `-a` is `MODULUS - a` for non-zero `a`.
    fn neg_assign(&mut self) {
        if self.value.is_zero() {
            return;
        }
        self.value = Self::modulus().difference(&self.value).magnitude().clone();
    }
}

impl<const MODULUS: u64> Ring for CyclicGroup<MODULUS> {
    fn one() -> Self {
        let mut value = Natural::from(1);
        Self::reduce(&mut value);
        CyclicGroup { value }
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    fn mul_assign(&mut self, rhs: &Self) {
        self.value.mul_assign(&rhs.value);
        Self::reduce(&mut self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::product::DirectProduct;

    #[test]
    fn test_construction_reduces() -> Result<(), ExactAlgebraError> {
        assert_eq!(CyclicGroup::<1597>::try_with(1597)?.to_string(), "0");
        assert_eq!(CyclicGroup::<1597>::try_with(2000)?.to_string(), "403");
        assert_eq!(CyclicGroup::<1597>::try_with(42)?.to_string(), "42");
        Ok(())
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(CyclicGroup::<0>::try_with(0).is_err());
        assert!(CyclicGroup::<0>::from_natural(Natural::from(3)).is_err());
    }

    #[test]
    fn test_addition_wraps() -> Result<(), ExactAlgebraError> {
        let mut sum = CyclicGroup::<1597>::try_with(800)?;
        sum.add_assign(&CyclicGroup::<1597>::try_with(900)?);
        assert_eq!(sum.to_string(), "103");
        Ok(())
    }

    #[test]
    fn test_negation() -> Result<(), ExactAlgebraError> {
        let three = CyclicGroup::<10>::try_with(3)?;
        assert_eq!(three.neg().to_string(), "7");
        assert!(three.add(&three.neg()).is_zero());
        assert!(CyclicGroup::<10>::zero().neg().is_zero());
        Ok(())
    }

    #[test]
    fn test_ring_multiplication() -> Result<(), ExactAlgebraError> {
        let product = CyclicGroup::<10>::try_with(7)?.mul(&CyclicGroup::<10>::try_with(5)?);
        assert_eq!(product.to_string(), "5");
        assert!(CyclicGroup::<10>::one().is_one());
        Ok(())
    }

    #[test]
    fn test_inverse() -> Result<(), ExactAlgebraError> {
        let five = CyclicGroup::<11>::try_with(5)?;
        assert_eq!(five.inv()?.to_string(), "9");
        assert!(five.mul(&five.inv()?).is_one());
        assert!(CyclicGroup::<10>::try_with(2)?.inv().is_err());
        Ok(())
    }

    #[test]
    fn test_large_values_reduce_through_engine() -> Result<(), ExactAlgebraError> {
        let big = Natural::from(u64::MAX).mul(&Natural::from(u64::MAX));
        let reduced = CyclicGroup::<1597>::from_natural(big.clone())?;
        let (_, expected) = big.div_rem(&Natural::from(1597))?;
        assert_eq!(reduced.value(), &expected);
        Ok(())
    }

    #[test]
    fn test_product_of_cyclic_groups() -> Result<(), ExactAlgebraError> {
        let mut pair = DirectProduct::new(
            CyclicGroup::<2>::try_with(1)?,
            CyclicGroup::<3>::try_with(2)?,
        );
        pair.add_assign(&DirectProduct::new(
            CyclicGroup::<2>::try_with(1)?,
            CyclicGroup::<3>::try_with(2)?,
        ));
        assert_eq!(pair.to_string(), "(0, 1)");
        Ok(())
    }
}
