use exact_algebra::algebra::{AdditiveGroup, AdditiveMonoid, Field, Module, Ring};
use exact_algebra::errors::ExactAlgebraError;
use exact_algebra::integer::Integer;
use exact_algebra::polynomial::Polynomial;
use exact_algebra::product::DirectProduct;
use exact_algebra::quotient::gaussian::GaussianRational;
use exact_algebra::rational::Rational;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

fn rational(n: i64, d: i64) -> Result<Rational, ExactAlgebraError> {
    Rational::try_with(Integer::from(n), Integer::from(d))
}

#[test]
fn showcase_gaussian_rational_arithmetic() -> Result<(), ExactAlgebraError> {
    init_tracing();

    // build (1/2 + 3/4 i) and (2 - i) in Q[x]/(x^2 + 1)
    let lhs = GaussianRational::new(Polynomial::new(vec![rational(1, 2)?, rational(3, 4)?]));
    let rhs = GaussianRational::new(Polynomial::new(vec![rational(2, 1)?, rational(-1, 1)?]));

    let sum = lhs.add(&rhs);
    dbg!(sum.to_string());
    assert_eq!(sum.to_string(), "[-1/4 x + 5/2]");

    // (1/2 + 3/4 i)(2 - i) = 1 + 3/4 + (3/2 - 1/2) i = 7/4 + i
    let product = lhs.mul(&rhs);
    dbg!(product.to_string());
    assert_eq!(
        product,
        GaussianRational::new(Polynomial::new(vec![rational(7, 4)?, rational(1, 1)?]))
    );

    let difference = lhs.sub(&lhs);
    assert!(difference.is_zero());
    Ok(())
}

#[test]
fn showcase_module_composition() -> Result<(), ExactAlgebraError> {
    init_tracing();

    // a pair of rationals, treated as a module over the integers
    let mut pair = DirectProduct::new(rational(5, 6)?, rational(-7, 10)?);
    pair.scale_assign(&Integer::from(30));

    dbg!(pair.to_string());
    assert_eq!(pair.to_string(), "(25, -21)");
    Ok(())
}

#[test]
fn showcase_field_tower() -> Result<(), ExactAlgebraError> {
    init_tracing();

    // 1/(1/2 + 1/3) = 6/5, computed through the field capability
    let sum = rational(1, 2)?.add(&rational(1, 3)?);
    let inverse = Field::inv(&sum)?;
    dbg!(inverse.to_string());
    assert_eq!(inverse.to_string(), "6/5");

    // and the same value by field division
    assert_eq!(Rational::from(1).div(&sum)?, inverse);
    Ok(())
}
