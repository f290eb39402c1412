//! Implementation of the base-2^16 limb arithmetic engine.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Shl, Shr, Sub};
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::algebra::AdditiveMonoid;
use crate::errors::ExactAlgebraError;
use crate::integer::Integer;

use super::Limb;

/// Bits per limb.
pub const LIMB_BITS: usize = 16;
const LIMB_MASK: u32 = (1 << LIMB_BITS) - 1;

/// An arbitrary-precision unsigned integer.
///
/// Stored as 16-bit limbs, least significant first, with no trailing zero
/// limb; the empty limb sequence is zero. The value is
/// `sum(limb[i] * 65536^i)`.
///
/// The in-place methods (`add_assign`, `mul_assign`, the shifts,
/// `div_rem_assign`) mutate the receiver; the operator impls clone first and
/// delegate to them.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Natural {
    limbs: Vec<Limb>,
}

impl Natural {
    /// True if the value is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// assert!(Natural::from(0).is_zero());
    /// assert!(!Natural::from(7).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of limbs in use.
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Drops trailing (most-significant) zero limbs.
    fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }

    /// In-place `self += rhs` with limb-wise carry propagation.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// let mut a = Natural::from(987_654_321);
    /// a.add_assign(&Natural::from(123_456_789));
    /// assert_eq!(a.to_string(), "1111111110");
    /// ```
    pub fn add_assign(&mut self, rhs: &Natural) {
        let mut carry = 0u32;
        let limbs: Vec<Limb> = self
            .limbs
            .iter()
            .zip_longest(rhs.limbs.iter())
            .map(|pair| {
                let (a, b) = match pair {
                    EitherOrBoth::Both(&a, &b) => (a as u32, b as u32),
                    EitherOrBoth::Left(&a) => (a as u32, 0),
                    EitherOrBoth::Right(&b) => (0, b as u32),
                };
                let sum = a + b + carry;
                carry = sum >> LIMB_BITS;
                (sum & LIMB_MASK) as Limb
            })
            .collect();
        self.limbs = limbs;
        if carry != 0 {
            self.limbs.push(carry as Limb);
        }
    }

    /// Returns `self * rhs` by schoolbook convolution: result limb `k`
    /// accumulates every `a[i] * b[j]` with `i + j == k` in a 64-bit
    /// accumulator before carries are propagated.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// let a = Natural::from(65_536);
    /// assert_eq!(a.mul(&a).to_string(), "4294967296");
    /// ```
    pub fn mul(&self, rhs: &Natural) -> Natural {
        if self.is_zero() || rhs.is_zero() {
            return Natural::default();
        }
        let mut cells = vec![0u64; self.limbs.len() + rhs.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            for (j, &b) in rhs.limbs.iter().enumerate() {
                cells[i + j] += a as u64 * b as u64;
            }
        }
        let mut limbs = Vec::with_capacity(cells.len());
        let mut carry = 0u64;
        for cell in cells {
            let total = cell + carry;
            limbs.push((total & LIMB_MASK as u64) as Limb);
            carry = total >> LIMB_BITS;
        }
        while carry != 0 {
            limbs.push((carry & LIMB_MASK as u64) as Limb);
            carry >>= LIMB_BITS;
        }
        let mut product = Natural { limbs };
        product.normalize();
        product
    }

    /// In-place `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &Natural) {
        *self = Natural::mul(self, rhs);
    }

    /// Borrow-propagating magnitude subtraction. Caller guarantees
    /// `self >= rhs`.
    fn sub_magnitude(&mut self, rhs: &Natural) {
        let mut borrow = 0i32;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let subtrahend = rhs.limbs.get(i).copied().unwrap_or(0) as i32;
            let mut diff = *limb as i32 - subtrahend - borrow;
            if diff < 0 {
                diff += 1 << LIMB_BITS;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *limb = diff as Limb;
        }
        self.normalize();
    }

    /// Signed difference `self - rhs`. The result type is inherently signed:
    /// when `rhs > self` the magnitude is `rhs - self` with a negative sign.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// let a = Natural::from(987_654_321);
    /// let b = Natural::from(123_456_789);
    /// assert_eq!(a.difference(&b).to_string(), "864197532");
    /// assert_eq!(b.difference(&a).to_string(), "-864197532");
    /// ```
    pub fn difference(&self, rhs: &Natural) -> Integer {
        if *self < *rhs {
            let mut magnitude = rhs.clone();
            magnitude.sub_magnitude(self);
            Integer::from_parts(magnitude, true)
        } else {
            let mut magnitude = self.clone();
            magnitude.sub_magnitude(rhs);
            Integer::from_parts(magnitude, false)
        }
    }

    /// In-place left shift by `bits`. The limb-granularity part of the shift
    /// inserts whole zero limbs; the sub-limb part shifts with carry across
    /// adjacent limbs.
    pub fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() || bits == 0 {
            return;
        }
        let small = bits % LIMB_BITS;
        if small != 0 {
            let mut carry = 0u32;
            for limb in self.limbs.iter_mut() {
                let widened = ((*limb as u32) << small) | carry;
                *limb = (widened & LIMB_MASK) as Limb;
                carry = widened >> LIMB_BITS;
            }
            if carry != 0 {
                self.limbs.push(carry as Limb);
            }
        }
        let big = bits / LIMB_BITS;
        if big != 0 {
            let mut limbs = vec![0; big];
            limbs.extend_from_slice(&self.limbs);
            self.limbs = limbs;
        }
    }

    /// In-place right shift by `bits`, re-normalized afterwards.
    pub fn shr_assign(&mut self, bits: usize) {
        let big = bits / LIMB_BITS;
        if big >= self.limbs.len() {
            self.limbs.clear();
            return;
        }
        if big != 0 {
            self.limbs.drain(0..big);
        }
        let small = bits % LIMB_BITS;
        if small != 0 {
            let mut carry = 0u32;
            for limb in self.limbs.iter_mut().rev() {
                let widened = (carry << LIMB_BITS) | *limb as u32;
                *limb = (widened >> small) as Limb;
                carry = widened & ((1 << small) - 1);
            }
        }
        self.normalize();
    }

    /// Binary long division. The receiver is replaced by the remainder and
    /// the quotient is returned: the divisor is shifted left until it covers
    /// the dividend, then for each shift amount down to zero the shifted
    /// divisor is subtracted whenever it is `<=` the running remainder and
    /// the matching quotient bit is set.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// let mut a = Natural::from(123);
    /// let quotient = a.div_rem_assign(&Natural::from(10)).unwrap();
    /// assert_eq!(quotient.to_string(), "12");
    /// assert_eq!(a.to_string(), "3");
    ///
    /// assert!(Natural::from(123).div_rem_assign(&Natural::from(0)).is_err());
    /// ```
    pub fn div_rem_assign(&mut self, divisor: &Natural) -> Result<Natural, ExactAlgebraError> {
        if divisor.is_zero() {
            return Err(ExactAlgebraError::DivisionByZero(format!(
                "cannot divide {} by zero",
                self
            )));
        }
        if (*self) < *divisor {
            return Ok(Natural::default());
        }
        let max_shift = (self.limbs.len() - divisor.limbs.len() + 1) * LIMB_BITS;
        let mut shifted = divisor.clone();
        shifted.shl_assign(max_shift);
        let one = Natural::from(1);
        let mut quotient = Natural::default();
        for _ in 0..=max_shift {
            quotient.shl_assign(1);
            if shifted <= *self {
                self.sub_magnitude(&shifted);
                quotient.add_assign(&one);
            }
            shifted.shr_assign(1);
        }
        Ok(quotient)
    }

    /// Returns `(quotient, remainder)` without mutating `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ExactAlgebraError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// let (quotient, remainder) = Natural::from(100).div_rem(&Natural::from(10)).unwrap();
    /// assert_eq!(quotient.to_string(), "10");
    /// assert!(remainder.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Natural) -> Result<(Natural, Natural), ExactAlgebraError> {
        let mut remainder = self.clone();
        let quotient = remainder.div_rem_assign(divisor)?;
        Ok((quotient, remainder))
    }

    /// Returns `self^exponent` by binary exponentiation.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// assert_eq!(Natural::from(2).pow(10).to_string(), "1024");
    /// assert_eq!(Natural::from(7).pow(0).to_string(), "1");
    /// ```
    pub fn pow(&self, mut exponent: u32) -> Natural {
        let mut result = Natural::from(1);
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result.mul_assign(&base);
            }
            base = Natural::mul(&base, &base);
            exponent >>= 1;
        }
        result
    }
}

impl From<u64> for Natural {
    fn from(mut value: u64) -> Self {
        let mut limbs = Vec::new();
        while value != 0 {
            limbs.push((value & LIMB_MASK as u64) as Limb);
            value >>= LIMB_BITS;
        }
        Natural { limbs }
    }
}

impl Ord for Natural {
    /// Shorter limb sequences are smaller; equal lengths compare
    /// lexicographically from the most significant limb down.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => self.limbs.iter().rev().cmp(other.limbs.iter().rev()),
            unequal => unequal,
        }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Natural {
    /// Unsigned decimal digits, no leading zeros; zero renders as `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let ten = Natural::from(10);
        let mut value = self.clone();
        let mut digits = Vec::new();
        while !value.is_zero() {
            let quotient = match value.div_rem_assign(&ten) {
                Ok(quotient) => quotient,
                // ten is non-zero
                Err(_) => break,
            };
            let digit = value.limbs.first().copied().unwrap_or(0) as u8;
            digits.push((b'0' + digit) as char);
            value = quotient;
        }
        let rendered: String = digits.iter().rev().collect();
        f.write_str(&rendered)
    }
}

impl FromStr for Natural {
    type Err = ExactAlgebraError;

    /// Parses unsigned decimal text.
    ///
    /// # Example
    ///
    /// ```
    /// # use exact_algebra::natural::Natural;
    /// let value: Natural = "1111111110".parse().unwrap();
    /// assert_eq!(value.to_string(), "1111111110");
    /// assert!("12a".parse::<Natural>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ExactAlgebraError::ParseDigit(
                "empty decimal string".to_string(),
            ));
        }
        let ten = Natural::from(10);
        let mut value = Natural::default();
        for ch in s.chars() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                ExactAlgebraError::ParseDigit(format!("invalid decimal digit '{}'", ch))
            })?;
            value.mul_assign(&ten);
            value.add_assign(&Natural::from(digit as u64));
        }
        Ok(value)
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(mut self, rhs: Natural) -> Natural {
        self.add_assign(&rhs);
        self
    }
}

impl Add<&Natural> for Natural {
    type Output = Natural;

    fn add(mut self, rhs: &Natural) -> Natural {
        self.add_assign(rhs);
        self
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        Natural::mul(&self, &rhs)
    }
}

impl Mul<&Natural> for Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        Natural::mul(&self, rhs)
    }
}

impl Sub for Natural {
    /// Subtraction of naturals is inherently signed.
    type Output = Integer;

    fn sub(self, rhs: Natural) -> Integer {
        self.difference(&rhs)
    }
}

impl Shl<usize> for Natural {
    type Output = Natural;

    fn shl(mut self, bits: usize) -> Natural {
        self.shl_assign(bits);
        self
    }
}

impl Shr<usize> for Natural {
    type Output = Natural;

    fn shr(mut self, bits: usize) -> Natural {
        self.shr_assign(bits);
        self
    }
}

impl AdditiveMonoid for Natural {
    fn zero() -> Self {
        Natural::default()
    }

    fn is_zero(&self) -> bool {
        Natural::is_zero(self)
    }

    fn add_assign(&mut self, rhs: &Self) {
        Natural::add_assign(self, rhs);
    }
}

impl num_traits::Zero for Natural {
    fn zero() -> Self {
        Natural::default()
    }

    fn is_zero(&self) -> bool {
        Natural::is_zero(self)
    }
}

impl num_traits::One for Natural {
    fn one() -> Self {
        Natural::from(1)
    }
}
