#[derive(thiserror::Error, Debug)]
pub enum ExactAlgebraError {
    /// Error when a divisor's is-zero test holds at the moment of division or inversion.
    #[error("DivisionByZero: {0}")]
    DivisionByZero(String),
    /// Error when constructing a rational with a zero denominator.
    #[error("ZeroDenominator: {0}")]
    ZeroDenominator(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when building a cyclic group over an invalid modulus.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when decimal text does not parse as a number.
    #[error("ParseDigit: {0}")]
    ParseDigit(String),
}
