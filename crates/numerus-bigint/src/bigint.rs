use std::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops,
};

use crate::{digits, ArithmeticError};

mod ops_impls;
mod text;

/// The sign of a [`BigInt`].
///
/// Zero is its own sign: a [`BigInt`] is never "positive zero" or "negative zero".
///
/// Signs are ordered `Negative < Zero < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Sign of a product.
impl ops::Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer, stored as a sequence of decimal digits.
///
/// # Construction
///
/// - From any built-in integer type via [`From`].
/// - From decimal text via [`str::parse`] (see the [`FromStr`][std::str::FromStr] impl for the
///   accepted syntax).
/// - From a digit sequence via [`BigInt::from_digits`].
/// - [`BigInt::zero`], [`BigInt::one`] and [`Default`] (zero).
///
/// # Arithmetic
///
/// All arithmetic operators (`+`, `-`, `*`, `/`, `%`, unary `-`) and their compound assignment
/// forms are implemented for owned values and references. Like the built-in integer types,
/// `/` and `%` panic when the divisor is zero; [`BigInt::checked_div`] and
/// [`BigInt::checked_rem`] report an [`ArithmeticError`] instead.
///
/// Division truncates toward zero, so the remainder takes the sign of the dividend:
///
/// ```
/// # use numerus_bigint::BigInt;
/// let a = BigInt::from(-7);
/// let b = BigInt::from(2);
/// assert_eq!(&a / &b, BigInt::from(-3));
/// assert_eq!(&a % &b, BigInt::from(-1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    /// Little-endian decimal digits, trimmed. `[0]` if and only if `sign` is `Sign::Zero`.
    digits: Vec<u8>,
}

impl BigInt {
    /// Returns the value 0.
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            digits: vec![0],
        }
    }

    /// Returns the value 1.
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            digits: vec![1],
        }
    }

    /// Creates a value from a magnitude and the sign it should have if it is non-zero.
    pub(crate) fn from_magnitude(sign: Sign, mut digits: Vec<u8>) -> Self {
        digits::trim(&mut digits);
        if digits::is_zero(&digits) {
            return Self::zero();
        }
        debug_assert_ne!(sign, Sign::Zero, "non-zero magnitude with zero sign");
        Self { sign, digits }
    }

    /// Creates a [`BigInt`] from its decimal digits, most significant digit first.
    ///
    /// Leading zero digits are ignored, and a magnitude of zero produces the value 0 regardless of
    /// `negative`. Returns [`None`] if `digits` is empty or contains a value larger than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let n = BigInt::from_digits(true, &[0, 4, 2]).unwrap();
    /// assert_eq!(n, BigInt::from(-42));
    /// assert_eq!(BigInt::from_digits(true, &[0]), Some(BigInt::zero()));
    /// assert_eq!(BigInt::from_digits(false, &[1, 10]), None);
    /// ```
    pub fn from_digits(negative: bool, digits: &[u8]) -> Option<Self> {
        if digits.is_empty() || digits.iter().any(|&d| d > 9) {
            return None;
        }
        let sign = if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Some(Self::from_magnitude(sign, digits.iter().rev().copied().collect()))
    }

    /// Returns the sign of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns the number of decimal digits in the magnitude of `self` (1 for zero).
    #[inline]
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Returns an iterator over the decimal digits of the magnitude, most significant first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let n = BigInt::from(-305);
    /// assert_eq!(n.digits().collect::<Vec<_>>(), [3, 0, 5]);
    /// ```
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.digits.iter().rev().copied()
    }

    /// Returns the decimal digit at `index`, counting from the most significant digit, or [`None`]
    /// if `index` is out of range.
    ///
    /// Indexing a [`BigInt`] directly (`n[index]`) does the same, but panics when out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let n = BigInt::from(-305);
    /// assert_eq!(n.digit(0), Some(3));
    /// assert_eq!(n[2], 5);
    /// assert_eq!(n.digit(3), None);
    /// ```
    pub fn digit(&self, index: usize) -> Option<u8> {
        let len = self.digits.len();
        index.checked_add(1).and_then(|i| len.checked_sub(i)).map(|i| self.digits[i])
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> BigInt {
        match self.sign {
            Sign::Negative => -self,
            _ => self.clone(),
        }
    }

    /// Returns -1, 0 or 1 depending on the sign of `self`.
    pub fn signum(&self) -> BigInt {
        match self.sign {
            Sign::Negative => -BigInt::one(),
            Sign::Zero => BigInt::zero(),
            Sign::Positive => BigInt::one(),
        }
    }

    /// Adds one to `self`, returning `self` for further chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let mut n = BigInt::from(-1);
    /// n.increment().increment();
    /// assert_eq!(n, BigInt::from(1));
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        *self += BigInt::one();
        self
    }

    /// Subtracts one from `self`, returning `self` for further chaining.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= BigInt::one();
        self
    }

    /// Adds one to `self`, returning the value from before the increment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let mut n = BigInt::from(9);
    /// assert_eq!(n.post_increment(), BigInt::from(9));
    /// assert_eq!(n, BigInt::from(10));
    /// ```
    pub fn post_increment(&mut self) -> BigInt {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Subtracts one from `self`, returning the value from before the decrement.
    pub fn post_decrement(&mut self) -> BigInt {
        let prev = self.clone();
        self.decrement();
        prev
    }

    /// Raises `self` to the power of `exp`, using exponentiation by squaring.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let n = BigInt::from(10).pow(20);
    /// assert_eq!(n.to_string(), "100000000000000000000");
    /// assert_eq!(BigInt::from(-2).pow(3), BigInt::from(-8));
    /// assert_eq!(BigInt::zero().pow(0), BigInt::one());
    /// ```
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut acc = BigInt::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Divides `self` by `divisor`, truncating toward zero.
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::{ArithmeticError, BigInt};
    /// let seven = BigInt::from(7);
    /// assert_eq!(seven.checked_div(&BigInt::from(2)), Ok(BigInt::from(3)));
    /// assert_eq!(seven.checked_div(&BigInt::from(-2)), Ok(BigInt::from(-3)));
    /// assert_eq!(seven.checked_div(&BigInt::zero()), Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let quotient = div_magnitude(&self.digits, &divisor.digits);
        Ok(BigInt::from_magnitude(self.sign * divisor.sign, quotient))
    }

    /// Computes the remainder of the truncating division of `self` by `divisor`.
    ///
    /// The result is `self - (self / divisor) * divisor`, so it is either zero or has the sign of
    /// `self`. Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        self.checked_div_rem(divisor).map(|(_, rem)| rem)
    }

    /// Computes the quotient and remainder of the truncating division of `self` by `divisor`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_bigint::BigInt;
    /// let (q, r) = BigInt::from(-17).checked_div_rem(&BigInt::from(5)).unwrap();
    /// assert_eq!(q, BigInt::from(-3));
    /// assert_eq!(r, BigInt::from(-2));
    /// ```
    pub fn checked_div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        let quotient = self.checked_div(divisor)?;
        let remainder = self - &quotient * divisor;
        Ok((quotient, remainder))
    }

    /// Converts `self` to an [`i128`], or returns [`None`] if it doesn't fit.
    pub fn to_i128(&self) -> Option<i128> {
        let negative = self.is_negative();
        self.digits().try_fold(0i128, |acc, digit| {
            let acc = acc.checked_mul(10)?;
            if negative {
                acc.checked_sub(i128::from(digit))
            } else {
                acc.checked_add(i128::from(digit))
            }
        })
    }

    /// Converts `self` to an [`i64`], or returns [`None`] if it doesn't fit.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }
}

/// Finds `|dividend| / |divisor|` by binary search over the candidate quotients
/// `1..=|dividend|`.
///
/// `divisor` must be non-zero.
fn div_magnitude(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    if digits::cmp(divisor, dividend) == Ordering::Greater {
        return vec![0];
    }

    // Invariant: `left * divisor <= dividend`, and `right * divisor > dividend` unless `right`
    // is still the initial upper bound.
    let mut left = vec![1];
    let mut right = dividend.to_vec();
    let mut steps = 0usize;
    while digits::cmp(&digits::sub(&right, &left), &[1]) == Ordering::Greater {
        let mid = digits::halve(&digits::add(&left, &right));
        if digits::cmp(&digits::mul(&mid, divisor), dividend) == Ordering::Greater {
            right = mid;
        } else {
            left = mid;
        }
        steps += 1;
    }
    log::trace!(
        "quotient search over a {}-digit dividend converged after {steps} steps",
        dividend.len()
    );

    if digits::mul(&right, divisor) == dividend {
        right
    } else {
        left
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Positive => digits::cmp(&self.digits, &other.digits),
                Sign::Negative => digits::cmp(&other.digits, &self.digits),
                Sign::Zero => Ordering::Equal,
            },
            unequal => unequal,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u128> for BigInt {
    fn from(mut n: u128) -> Self {
        let mut digits = Vec::new();
        while n != 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        Self::from_magnitude(Sign::Positive, digits)
    }
}

impl From<i128> for BigInt {
    fn from(n: i128) -> Self {
        let magnitude = BigInt::from(n.unsigned_abs());
        if n < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

macro_rules! from_primitive {
    ($wide:ty: $($types:ty),+) => {
        $(
            impl From<$types> for BigInt {
                fn from(n: $types) -> Self {
                    Self::from(n as $wide)
                }
            }
        )+
    };
}
from_primitive!(u128: u8, u16, u32, u64, usize);
from_primitive!(i128: i8, i16, i32, i64, isize);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, n| acc + n)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, n| acc * n)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, n| acc * n)
    }
}
