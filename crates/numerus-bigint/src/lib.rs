//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] stores its magnitude as a sequence of decimal digits, which makes parsing and
//! formatting trivial and keeps every algorithm easy to follow. It is meant for correctness
//! rather than speed.
//!
//! # Goals & Non-Goals
//!
//! - Only decimal digit storage. There is no support for other bases.
//! - Multiplication uses the schoolbook algorithm. Division performs a binary search over the
//!   possible quotients, multiplying each candidate by the divisor. Neither is suitable for huge
//!   operands.
//! - No rational, floating-point or modular arithmetic.
//! - Errors that the caller can reasonably handle (malformed input, division by zero) are
//!   reported via [`ParseBigIntError`] and [`ArithmeticError`]. The `/` and `%` operators panic on
//!   a zero divisor, just like the built-in integer types.
//!
//! # Examples
//!
//! ```
//! use numerus_bigint::BigInt;
//!
//! let a: BigInt = "1000000000000000000".parse()?;
//! let b = BigInt::from(2);
//! assert_eq!((&a * &b).to_string(), "2000000000000000000");
//! assert_eq!(BigInt::from(123) + BigInt::from(-456), BigInt::from(-333));
//! # Ok::<_, numerus_bigint::ParseBigIntError>(())
//! ```

mod bigint;
mod digits;
mod error;

pub use bigint::*;
pub use error::*;
