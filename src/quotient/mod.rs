//! # Quotient structures
//!
//! A [`Quotient`] holds one canonical coset representative of a structure `G`
//! modulo a designated sub-structure `H`. Equality of two quotient elements
//! asks whether the difference of their representatives belongs to the
//! sub-structure, not whether the representatives match.

pub mod gaussian;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algebra::{AdditiveGroup, AdditiveMonoid, Ring};

/// A sub-structure of `G` with a membership test and a canonicalizing
/// reduction.
///
/// `reduce` maps any value to the canonical representative of its coset;
/// `contains` holds exactly for the values whose coset is the identity's.
/// Both are pure: testing membership never rewrites the operand.
pub trait SubStructure<G> {
    /// True if `value` belongs to the sub-structure.
    fn contains(&self, value: &G) -> bool;

    /// The canonical representative of `value`'s coset.
    fn reduce(&self, value: &G) -> G;
}

/// An element of `G` modulo `H`, stored as one representative of its coset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotient<G, H> {
    representative: G,
    sub: H,
}

impl<G, H> Quotient<G, H>
where
    G: AdditiveGroup,
    H: SubStructure<G> + Default,
{
    /// Wraps a representative, canonicalized immediately.
    pub fn new(representative: G) -> Self {
        let mut value = Quotient {
            representative,
            sub: H::default(),
        };
        value.normalize();
        value
    }

    /// The held representative.
    pub fn representative(&self) -> &G {
        &self.representative
    }

    /// Rewrites the held representative to its canonical form. Equality never
    /// does this implicitly.
    pub fn normalize(&mut self) {
        self.representative = self.sub.reduce(&self.representative);
    }
}

impl<G, H> PartialEq for Quotient<G, H>
where
    G: AdditiveGroup,
    H: SubStructure<G>,
{
    /// Two cosets are equal when the difference of their representatives
    /// reduces into the sub-structure.
    fn eq(&self, other: &Self) -> bool {
        self.sub
            .contains(&self.representative.sub(&other.representative))
    }
}

impl<G, H> Eq for Quotient<G, H>
where
    G: AdditiveGroup,
    H: SubStructure<G>,
{
}

impl<G, H> fmt::Display for Quotient<G, H>
where
    G: AdditiveGroup,
    H: SubStructure<G>,
{
    /// The reduced representative in bracket notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.sub.reduce(&self.representative))
    }
}

impl<G, H> AdditiveMonoid for Quotient<G, H>
where
    G: AdditiveGroup,
    H: SubStructure<G> + Default + Clone + PartialEq + fmt::Debug,
{
    fn zero() -> Self {
        Quotient {
            representative: G::zero(),
            sub: H::default(),
        }
    }

    fn is_zero(&self) -> bool {
        self.sub.contains(&self.representative)
    }

    fn add_assign(&mut self, rhs: &Self) {
        self.representative.add_assign(&rhs.representative);
        self.normalize();
    }
}

impl<G, H> AdditiveGroup for Quotient<G, H>
where
    G: AdditiveGroup,
    H: SubStructure<G> + Default + Clone + PartialEq + fmt::Debug,
{
    fn neg_assign(&mut self) {
        self.representative.neg_assign();
        self.normalize();
    }
}

impl<G, H> Ring for Quotient<G, H>
where
    G: Ring,
    H: SubStructure<G> + Default + Clone + PartialEq + fmt::Debug,
{
    fn one() -> Self {
        Quotient::new(G::one())
    }

    fn is_one(&self) -> bool {
        self.sub.contains(&self.representative.sub(&G::one()))
    }

    fn mul_assign(&mut self, rhs: &Self) {
        self.representative.mul_assign(&rhs.representative);
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::ExactAlgebraError;
    use crate::integer::Integer;

    /// Multiples of two inside the integers; reduces to the truncating
    /// remainder.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    struct EvenIdeal;

    impl SubStructure<Integer> for EvenIdeal {
        fn contains(&self, value: &Integer) -> bool {
            self.reduce(value).is_zero()
        }

        fn reduce(&self, value: &Integer) -> Integer {
            match value.div_rem(&Integer::from(2)) {
                Ok((_, remainder)) => remainder,
                Err(_) => value.clone(),
            }
        }
    }

    type Parity = Quotient<Integer, EvenIdeal>;

    #[test]
    fn test_equality_by_membership_of_difference() {
        assert_eq!(Parity::new(Integer::from(4)), Parity::new(Integer::from(10)));
        assert_eq!(Parity::new(Integer::from(3)), Parity::new(Integer::from(-5)));
        assert_ne!(Parity::new(Integer::from(3)), Parity::new(Integer::from(4)));
    }

    #[test]
    fn test_equality_has_no_side_effect() {
        let held = Quotient {
            representative: Integer::from(7),
            sub: EvenIdeal,
        };
        let other = Parity::new(Integer::from(1));
        assert_eq!(held, other);
        // the unreduced representative is untouched by the comparison
        assert_eq!(held.representative(), &Integer::from(7));
    }

    #[test]
    fn test_explicit_normalize() {
        let mut held = Quotient {
            representative: Integer::from(7),
            sub: EvenIdeal,
        };
        held.normalize();
        assert_eq!(held.representative(), &Integer::from(1));
    }

    #[test]
    fn test_group_and_ring_ops_reduce() -> Result<(), ExactAlgebraError> {
        let mut sum = Parity::new(Integer::from(1));
        sum.add_assign(&Parity::new(Integer::from(1)));
        assert!(sum.is_zero());

        let product = Parity::new(Integer::from(3)).mul(&Parity::new(Integer::from(5)));
        assert!(product.is_one());
        assert_eq!(product.to_string(), "[1]");
        Ok(())
    }
}
