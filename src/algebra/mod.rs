//! # Algebraic capability traits
//!
//! The capability levels (monoid, group, ring, field, module) are independent
//! traits composed per concrete type, so a new number-like type opts into
//! exactly the operations it supports. Every trait pairs an in-place
//! `*_assign` method with a pure form that clones first; the pure forms are
//! provided as defaults.

use std::fmt::{Debug, Display};

use crate::errors::ExactAlgebraError;

/// A set closed under a commutative, associative addition with identity
/// [`zero`](AdditiveMonoid::zero).
pub trait AdditiveMonoid: Clone + PartialEq + Debug + Display {
    /// The additive identity.
    fn zero() -> Self;

    /// True if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// In-place `self += rhs`.
    fn add_assign(&mut self, rhs: &Self);

    /// Returns `self + rhs`, leaving both operands untouched.
    fn add(&self, rhs: &Self) -> Self {
        let mut sum = self.clone();
        sum.add_assign(rhs);
        sum
    }
}

/// An additive monoid in which every element has an additive inverse.
pub trait AdditiveGroup: AdditiveMonoid {
    /// In-place negation.
    fn neg_assign(&mut self);

    /// Returns `-self`.
    fn neg(&self) -> Self {
        let mut negated = self.clone();
        negated.neg_assign();
        negated
    }

    /// In-place `self -= rhs`.
    fn sub_assign(&mut self, rhs: &Self) {
        self.add_assign(&rhs.neg());
    }

    /// Returns `self - rhs`.
    fn sub(&self, rhs: &Self) -> Self {
        let mut difference = self.clone();
        difference.sub_assign(rhs);
        difference
    }
}

/// An additive group with an associative multiplication that distributes over
/// addition and has identity [`one`](Ring::one).
pub trait Ring: AdditiveGroup {
    /// The multiplicative identity.
    fn one() -> Self;

    /// True if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// In-place `self *= rhs`.
    fn mul_assign(&mut self, rhs: &Self);

    /// Returns `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self {
        let mut product = self.clone();
        product.mul_assign(rhs);
        product
    }

    /// Returns `self^exponent` by binary exponentiation; `self^0` is
    /// [`one`](Ring::one).
    fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result.mul_assign(&base);
            }
            base = base.mul(&base);
            exponent >>= 1;
        }
        result
    }
}

/// A commutative ring in which every non-zero element is invertible.
pub trait Field: Ring {
    /// The multiplicative inverse of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `self` is zero.
    fn inv(&self) -> Result<Self, ExactAlgebraError>;

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `rhs` is zero.
    fn div(&self, rhs: &Self) -> Result<Self, ExactAlgebraError> {
        Ok(self.mul(&rhs.inv()?))
    }
}

/// An additive group closed under scaling by elements of the ring `R`.
pub trait Module<R: Ring>: AdditiveGroup {
    /// In-place `self *= scalar`.
    fn scale_assign(&mut self, scalar: &R);

    /// Returns `self` scaled by `scalar`.
    fn scale(&self, scalar: &R) -> Self {
        let mut scaled = self.clone();
        scaled.scale_assign(scalar);
        scaled
    }
}

/// A ring that is simultaneously a module over `R`.
pub trait Algebra<R: Ring>: Ring + Module<R> {}

impl<R: Ring, T: Ring + Module<R>> Algebra<R> for T {}

/// A module whose scalars form a field.
pub trait VectorSpace<F: Field>: Module<F> {}

impl<F: Field, T: Module<F>> VectorSpace<F> for T {}
