use quickcheck_macros::quickcheck;

use exact_algebra::integer::Integer;
use exact_algebra::natural::{Natural, gcd};
use exact_algebra::polynomial::Polynomial;
use exact_algebra::rational::Rational;

fn poly(coefficients: &[i8]) -> Polynomial<Rational> {
    // keep degrees small so the convolution stays schoolbook-sized
    Polynomial::new(
        coefficients
            .iter()
            .take(8)
            .map(|&c| Rational::from(c as i64))
            .collect(),
    )
}

#[quickcheck]
fn natural_add_then_subtract_round_trips(a: u64, b: u64) -> bool {
    let sum = Natural::from(a) + Natural::from(b);
    sum - Natural::from(a) == Integer::from(Natural::from(b))
}

#[quickcheck]
fn natural_division_identity_holds(a: u64, b: u64) -> bool {
    if b == 0 {
        return true;
    }
    let dividend = Natural::from(a);
    let divisor = Natural::from(b);
    let Ok((quotient, remainder)) = dividend.div_rem(&divisor) else {
        return false;
    };
    quotient.mul(&divisor) + remainder.clone() == dividend && remainder < divisor
}

#[quickcheck]
fn gcd_divides_both_operands(a: u64, b: u64) -> bool {
    let divisor = gcd(&Natural::from(a), &Natural::from(b));
    if divisor.is_zero() {
        return a == 0 && b == 0;
    }
    let divides = |value: u64| match Natural::from(value).div_rem(&divisor) {
        Ok((_, remainder)) => remainder.is_zero(),
        Err(_) => false,
    };
    divides(a) && divides(b)
}

#[quickcheck]
fn rational_stays_reduced(a: i32, b: i32, c: i32, d: i32) -> bool {
    let (Some(lhs), Some(rhs)) = (rational(a, b), rational(c, d)) else {
        return true;
    };
    let results = [
        lhs.clone() + rhs.clone(),
        lhs.clone() - rhs.clone(),
        lhs.mul(&rhs),
    ];
    results.iter().all(|value| {
        !value.denominator().is_zero()
            && gcd(value.numerator().magnitude(), value.denominator()) == Natural::from(1)
    })
}

#[quickcheck]
fn polynomial_multiplication_distributes_over_addition(p: Vec<i8>, q: Vec<i8>, r: Vec<i8>) -> bool {
    let (p, q, r) = (poly(&p), poly(&q), poly(&r));
    (p.clone() + q.clone()) * r.clone() == p * r.clone() + q * r
}

fn rational(n: i32, d: i32) -> Option<Rational> {
    Rational::try_with(Integer::from(n as i64), Integer::from(d as i64)).ok()
}
