//! # Direct products
//!
//! [`DirectProduct`] pairs two algebraic structures into one structure of the
//! same kind: whichever capability both components share (monoid, group,
//! ring, module) is applied component-wise.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algebra::{AdditiveGroup, AdditiveMonoid, Module, Ring};

/// An ordered pair operated on component-wise.
///
/// # Example
///
/// ```
/// # use exact_algebra::algebra::AdditiveMonoid;
/// # use exact_algebra::integer::Integer;
/// # use exact_algebra::product::DirectProduct;
/// let a = DirectProduct::new(Integer::from(1), Integer::from(2));
/// let b = DirectProduct::new(Integer::from(10), Integer::from(20));
/// assert_eq!(a.add(&b).to_string(), "(11, 22)");
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectProduct<A, B> {
    left: A,
    right: B,
}

impl<A, B> DirectProduct<A, B> {
    /// Pairs two component values.
    pub fn new(left: A, right: B) -> Self {
        DirectProduct { left, right }
    }

    /// The first component.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// The second component.
    pub fn right(&self) -> &B {
        &self.right
    }

    /// Splits the pair back into its components.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for DirectProduct<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

impl<A: AdditiveMonoid, B: AdditiveMonoid> AdditiveMonoid for DirectProduct<A, B> {
    fn zero() -> Self {
        DirectProduct::new(A::zero(), B::zero())
    }

    fn is_zero(&self) -> bool {
        self.left.is_zero() && self.right.is_zero()
    }

    fn add_assign(&mut self, rhs: &Self) {
        self.left.add_assign(&rhs.left);
        self.right.add_assign(&rhs.right);
    }
}

impl<A: AdditiveGroup, B: AdditiveGroup> AdditiveGroup for DirectProduct<A, B> {
    fn neg_assign(&mut self) {
        self.left.neg_assign();
        self.right.neg_assign();
    }
}

impl<A: Ring, B: Ring> Ring for DirectProduct<A, B> {
    fn one() -> Self {
        DirectProduct::new(A::one(), B::one())
    }

    fn is_one(&self) -> bool {
        self.left.is_one() && self.right.is_one()
    }

    fn mul_assign(&mut self, rhs: &Self) {
        self.left.mul_assign(&rhs.left);
        self.right.mul_assign(&rhs.right);
    }
}

impl<R: Ring, A: Module<R>, B: Module<R>> Module<R> for DirectProduct<A, B> {
    fn scale_assign(&mut self, scalar: &R) {
        self.left.scale_assign(scalar);
        self.right.scale_assign(scalar);
    }
}
