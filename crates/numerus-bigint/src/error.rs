use thiserror::Error;

/// An error returned when parsing a [`BigInt`][crate::BigInt] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseBigIntError {
    /// The string was empty, or consisted only of a `-` sign.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character other than an ASCII digit was found after the optional sign.
    #[error("invalid digit {found:?} at byte offset {index}")]
    InvalidDigit {
        /// Byte offset of the offending character in the input string.
        index: usize,
        /// The offending character.
        found: char,
    },

    /// A numeral with more than one digit started with `0` (eg. `"0123"`).
    #[error("numeral has a leading zero")]
    LeadingZero,
}

/// Errors produced by the checked arithmetic methods of [`BigInt`][crate::BigInt].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// The divisor of a division or remainder operation was zero.
    #[error("attempt to divide by zero")]
    DivisionByZero,
}
