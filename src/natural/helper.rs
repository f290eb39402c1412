use super::Natural;

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// `gcd(0, b) = b` and `gcd(a, 0) = a`.
///
/// # Example
///
/// ```
/// # use exact_algebra::natural::{gcd, Natural};
/// assert_eq!(gcd(&Natural::from(48), &Natural::from(18)).to_string(), "6");
/// assert_eq!(gcd(&Natural::from(0), &Natural::from(5)).to_string(), "5");
/// ```
pub fn gcd(a: &Natural, b: &Natural) -> Natural {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        match a.div_rem(&b) {
            Ok((_, remainder)) => {
                a = std::mem::replace(&mut b, remainder);
            }
            // the loop condition keeps the divisor non-zero
            Err(_) => break,
        }
    }
    a
}

/// Least common multiple; `lcm(a, 0) = lcm(0, b) = 0`.
///
/// # Example
///
/// ```
/// # use exact_algebra::natural::{lcm, Natural};
/// assert_eq!(lcm(&Natural::from(4), &Natural::from(6)).to_string(), "12");
/// ```
pub fn lcm(a: &Natural, b: &Natural) -> Natural {
    if a.is_zero() || b.is_zero() {
        return Natural::default();
    }
    let divisor = gcd(a, b);
    match a.div_rem(&divisor) {
        Ok((quotient, _)) => quotient.mul(b),
        // gcd of two non-zero values is non-zero
        Err(_) => Natural::default(),
    }
}
