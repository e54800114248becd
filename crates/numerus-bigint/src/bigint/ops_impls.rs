//! Implementations of `std::ops`.
//!
//! The arithmetic lives in the `*Assign<&BigInt>` impls; every other operator form forwards to
//! them.

use std::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
    },
};

use crate::{digits, BigInt, Sign};

/// Decimal digit access, most significant digit first.
///
/// # Panics
///
/// Panics if `index` is not less than [`BigInt::num_digits`]. Use [`BigInt::digit`] for a
/// non-panicking version.
impl Index<usize> for BigInt {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        let len = self.digits.len();
        assert!(
            index < len,
            "digit index {index} out of range for a {len}-digit number"
        );
        &self.digits[len - 1 - index]
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        match (self.sign, rhs.sign) {
            (_, Sign::Zero) => {}
            (Sign::Zero, _) => *self = rhs.clone(),
            (lhs_sign, rhs_sign) if lhs_sign == rhs_sign => {
                self.digits = digits::add(&self.digits, &rhs.digits);
            }
            // Opposite signs: the larger magnitude wins.
            _ => match digits::cmp(&self.digits, &rhs.digits) {
                Ordering::Greater => self.digits = digits::sub(&self.digits, &rhs.digits),
                Ordering::Less => {
                    self.digits = digits::sub(&rhs.digits, &self.digits);
                    self.sign = rhs.sign;
                }
                Ordering::Equal => *self = BigInt::zero(),
            },
        }
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self += &-rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return;
        }
        self.sign = self.sign * rhs.sign;
        self.digits = digits::mul(&self.digits, &rhs.digits);
    }
}

/// Truncating division.
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`BigInt::checked_div`] to handle that case.
impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Remainder of truncating division; takes the sign of the dividend.
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`BigInt::checked_rem`] to handle that case.
impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        match self.checked_rem(rhs) {
            Ok(remainder) => *self = remainder,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! forward_binop {
    ($($imp:ident::$method:ident => $imp_assign:ident::$method_assign:ident;)+) => {
        $(
            impl $imp_assign<BigInt> for BigInt {
                #[inline]
                fn $method_assign(&mut self, rhs: BigInt) {
                    $imp_assign::$method_assign(self, &rhs);
                }
            }

            impl $imp<&BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(mut self, rhs: &BigInt) -> BigInt {
                    $imp_assign::$method_assign(&mut self, rhs);
                    self
                }
            }

            impl $imp<BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(mut self, rhs: BigInt) -> BigInt {
                    $imp_assign::$method_assign(&mut self, &rhs);
                    self
                }
            }

            impl $imp<&BigInt> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: &BigInt) -> BigInt {
                    let mut out = self.clone();
                    $imp_assign::$method_assign(&mut out, rhs);
                    out
                }
            }

            impl $imp<BigInt> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: BigInt) -> BigInt {
                    let mut out = self.clone();
                    $imp_assign::$method_assign(&mut out, &rhs);
                    out
                }
            }
        )+
    };
}

forward_binop! {
    Add::add => AddAssign::add_assign;
    Sub::sub => SubAssign::sub_assign;
    Mul::mul => MulAssign::mul_assign;
    Div::div => DivAssign::div_assign;
    Rem::rem => RemAssign::rem_assign;
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn add_sign_pairs() {
        assert_eq!(big("123") + big("-456"), big("-333"));
        assert_eq!(big("-123") + big("456"), big("333"));
        assert_eq!(big("-123") + big("-456"), big("-579"));
        assert_eq!(big("456") + big("-123"), big("333"));
        assert_eq!(big("-456") + big("123"), big("-333"));
        assert_eq!(big("456") + big("-456"), BigInt::zero());
        assert_eq!(big("0") + big("-7"), big("-7"));
        assert_eq!(big("-7") + big("0"), big("-7"));
        assert_eq!(big("999999999999999999999") + big("1"), big("1000000000000000000000"));
    }

    #[test]
    fn sub_sign_pairs() {
        assert_eq!(big("5") - big("8"), big("-3"));
        assert_eq!(big("-5") - big("-8"), big("3"));
        assert_eq!(big("-5") - big("8"), big("-13"));
        assert_eq!(big("0") - big("8"), big("-8"));
        assert_eq!(big("0") - big("-8"), big("8"));
        assert_eq!(big("8") - big("0"), big("8"));
        assert_eq!(big("8") - big("8"), BigInt::zero());
        assert_eq!(big("1000000000000000000000") - big("1"), big("999999999999999999999"));
    }

    #[test]
    fn mul_exceeds_native_range() {
        assert_eq!(
            big("1000000000000000000") * big("2"),
            big("2000000000000000000")
        );
        assert_eq!(
            big("-18446744073709551616") * big("18446744073709551616"),
            big("-340282366920938463463374607431768211456")
        );
        assert_eq!(big("-3") * big("-4"), big("12"));
        assert_eq!(big("-3") * big("0"), BigInt::zero());
        assert_eq!(big("0") * big("-3"), BigInt::zero());
    }

    #[test]
    fn operator_forms() {
        let a = big("17");
        let b = big("5");
        assert_eq!(&a + &b, big("22"));
        assert_eq!(&a - b.clone(), big("12"));
        assert_eq!(a.clone() * &b, big("85"));
        assert_eq!(&a / &b, big("3"));
        assert_eq!(a.clone() % b.clone(), big("2"));

        let mut c = a.clone();
        c += &b;
        c -= big("2");
        c *= &b;
        assert_eq!(c, big("100"));
        c /= big("7");
        assert_eq!(c, big("14"));
        c %= &b;
        assert_eq!(c, big("4"));
    }

    #[test]
    fn negation() {
        assert_eq!(-big("5"), big("-5"));
        assert_eq!(-&big("-5"), big("5"));
        assert_eq!(-BigInt::zero(), BigInt::zero());
        assert!(!(-BigInt::zero()).is_negative());
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_by_zero_panics() {
        let _ = big("1") / BigInt::zero();
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn rem_by_zero_panics() {
        let mut n = big("1");
        n %= BigInt::zero();
    }
}
