//! # Natural-number engine
//!
//! Provides [`Natural`], the arbitrary-precision unsigned integer every other
//! numeric type in this crate bottoms out in, together with the
//! [`gcd`]/[`lcm`] helpers built on its division.

pub mod helper;
pub mod math;

/// One 16-bit digit of a multi-precision number, least significant first.
pub type Limb = u16;

pub use helper::{gcd, lcm};
pub use math::Natural;
