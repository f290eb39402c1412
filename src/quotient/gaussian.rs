//! The ideal generated by `x^2 + 1` over the rationals, and the quotient
//! ring it defines.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;
use crate::rational::Rational;

use super::{Quotient, SubStructure};

lazy_static! {
    /// The generator `x^2 + 1`, constant term first.
    static ref GENERATOR: Polynomial<Rational> = Polynomial::new(vec![
        Rational::from(1),
        Rational::from(0),
        Rational::from(1),
    ]);
}

/// The principal ideal `(x^2 + 1)` in the ring of rational polynomials.
///
/// A polynomial belongs to the ideal exactly when division by the generator
/// leaves a zero remainder; reduction keeps that remainder, so canonical
/// representatives have degree at most 1.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaussianIdeal;

impl SubStructure<Polynomial<Rational>> for GaussianIdeal {
    fn contains(&self, value: &Polynomial<Rational>) -> bool {
        self.reduce(value).is_zero()
    }

    fn reduce(&self, value: &Polynomial<Rational>) -> Polynomial<Rational> {
        match value.div_rem(&GENERATOR) {
            Ok((_, remainder)) => remainder,
            // the generator is non-zero
            Err(_) => value.clone(),
        }
    }
}

/// The quotient ring Q[x]/(x^2 + 1): Gaussian-rational arithmetic with `[x]`
/// playing the imaginary unit.
///
/// # Example
///
/// ```
/// # use exact_algebra::algebra::Ring;
/// # use exact_algebra::polynomial::Polynomial;
/// # use exact_algebra::quotient::gaussian::GaussianRational;
/// # use exact_algebra::rational::Rational;
/// let i = GaussianRational::new(Polynomial::monomial(Rational::from(1), 1));
/// let minus_one = GaussianRational::new(Polynomial::constant(Rational::from(-1)));
/// assert_eq!(i.mul(&i), minus_one);
/// ```
pub type GaussianRational = Quotient<Polynomial<Rational>, GaussianIdeal>;
