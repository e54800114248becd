//! Decimal text conversion.

use std::{fmt, str::FromStr};

use crate::{BigInt, ParseBigIntError, Sign};

/// Formats the number in decimal, with a leading `-` for negative numbers.
///
/// Width, fill, alignment, the `+` flag and zero-padding (`{:08}`) behave like they do for the
/// built-in integer types.
///
/// # Examples
///
/// ```
/// # use numerus_bigint::BigInt;
/// let n = BigInt::from(-1234);
/// assert_eq!(n.to_string(), "-1234");
/// assert_eq!(format!("{:>7}", n), "  -1234");
/// assert_eq!(format!("{:+}", BigInt::from(5)), "+5");
/// ```
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.digits().map(|d| char::from(b'0' + d)).collect();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parses a decimal numeral.
///
/// The accepted syntax is an optional `-` followed by one or more ASCII digits. There is no
/// whitespace trimming, no `+` sign, and no digit separators. A numeral with more than one digit
/// may not start with `0`; `"0"` and `"-0"` both parse as zero.
///
/// # Examples
///
/// ```
/// # use numerus_bigint::{BigInt, ParseBigIntError};
/// let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
/// assert!(n.is_negative());
///
/// assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
/// assert_eq!("0123".parse::<BigInt>(), Err(ParseBigIntError::LeadingZero));
/// assert_eq!(
///     "12a".parse::<BigInt>(),
///     Err(ParseBigIntError::InvalidDigit { index: 2, found: 'a' }),
/// );
/// ```
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, body, offset) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest, 1),
            None => (Sign::Positive, s, 0),
        };
        if body.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let mut digits = Vec::with_capacity(body.len());
        for (index, found) in body.char_indices() {
            match found.to_digit(10) {
                Some(digit) => digits.push(digit as u8),
                None => {
                    return Err(ParseBigIntError::InvalidDigit {
                        index: index + offset,
                        found,
                    })
                }
            }
        }
        if digits.len() > 1 && digits[0] == 0 {
            return Err(ParseBigIntError::LeadingZero);
        }

        digits.reverse();
        Ok(BigInt::from_magnitude(sign, digits))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, ParseBigIntError};

    #[test]
    fn round_trip() {
        for s in [
            "0",
            "1",
            "-1",
            "10",
            "-100",
            "123456789",
            "-9223372036854775809",
            "340282366920938463463374607431768211456",
        ] {
            let n: BigInt = s.parse().unwrap();
            assert_eq!(n.to_string(), s);
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        let n: BigInt = "-0".parse().unwrap();
        assert!(n.is_zero());
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!(
            "+5".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 0, found: '+' })
        );
        assert_eq!(
            " 5".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 0, found: ' ' })
        );
        assert_eq!(
            "-1_000".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 2, found: '_' })
        );
        assert_eq!(
            "1e5".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 1, found: 'e' })
        );
        assert_eq!(
            "--1".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 1, found: '-' })
        );
        assert_eq!(
            "١٢".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 0, found: '١' })
        );
    }

    #[test]
    fn rejects_leading_zeroes() {
        assert_eq!("00".parse::<BigInt>(), Err(ParseBigIntError::LeadingZero));
        assert_eq!("0123".parse::<BigInt>(), Err(ParseBigIntError::LeadingZero));
        assert_eq!("-05".parse::<BigInt>(), Err(ParseBigIntError::LeadingZero));
        // Garbage after a leading zero is reported as such.
        assert_eq!(
            "0x1F".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { index: 1, found: 'x' })
        );
    }

    #[test]
    fn formatting_flags() {
        let n = BigInt::from(42);
        assert_eq!(format!("{:<5}|", n), "42   |");
        assert_eq!(format!("{:05}", BigInt::from(-42)), "-0042");
        assert_eq!(format!("{:+}", BigInt::zero()), "+0");
        assert_eq!(format!("{:?}", BigInt::from(-7)), "-7");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseBigIntError::InvalidDigit { index: 3, found: 'z' }.to_string(),
            "invalid digit 'z' at byte offset 3"
        );
        assert_eq!(
            ParseBigIntError::Empty.to_string(),
            "cannot parse integer from empty string"
        );
    }
}
