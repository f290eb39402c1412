//! Euclidean division for polynomials with field coefficients.

use crate::algebra::{Field, Ring};
use crate::errors::ExactAlgebraError;

use super::Polynomial;

impl<F: Field> Polynomial<F> {
    /// Polynomial long division: repeatedly cancels the dividend's leading
    /// term with a scaled, shifted copy of the divisor, the scale being the
    /// divisor's leading coefficient's field inverse. Returns
    /// `(quotient, remainder)` with `degree(remainder) < degree(divisor)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `divisor` is the zero
    /// polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::polynomial::Polynomial;
    /// # use exact_algebra::rational::Rational;
    /// // (x^2 + 3x + 5) / (x + 1) = x + 2 remainder 3
    /// let dividend = Polynomial::new(vec![5i64, 3, 1].into_iter().map(Rational::from).collect());
    /// let divisor = Polynomial::new(vec![1i64, 1].into_iter().map(Rational::from).collect());
    /// let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    /// assert_eq!(quotient.to_string(), "1 x + 2");
    /// assert_eq!(remainder.to_string(), "3");
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ExactAlgebraError> {
        let Some(divisor_degree) = divisor.degree() else {
            return Err(ExactAlgebraError::DivisionByZero(
                "polynomial division by the zero polynomial".to_string(),
            ));
        };
        // the leading coefficient of a trimmed non-zero polynomial is non-zero
        let leading_inverse = divisor.coefficients[divisor_degree].inv()?;
        let mut remainder = self.clone();
        let mut quotient = Polynomial::default();
        while let Some(remainder_degree) = remainder.degree() {
            if remainder_degree < divisor_degree {
                break;
            }
            let scale = remainder.coefficients[remainder_degree].mul(&leading_inverse);
            let term = Polynomial::monomial(scale, remainder_degree - divisor_degree);
            let mut cancelled = divisor.mul(&term);
            cancelled.neg_assign();
            remainder.add_assign(&cancelled);
            quotient.add_assign(&term);
        }
        Ok((quotient, remainder))
    }

    /// Euclidean polynomial gcd, normalized monic.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            match a.div_rem(&b) {
                Ok((_, remainder)) => {
                    a = std::mem::replace(&mut b, remainder);
                }
                // the loop condition keeps the divisor non-zero
                Err(_) => break,
            }
        }
        if let Some(degree) = a.degree() {
            if let Ok(inverse) = a.coefficients[degree].inv() {
                for coefficient in a.coefficients.iter_mut() {
                    coefficient.mul_assign(&inverse);
                }
            }
        }
        a
    }
}
