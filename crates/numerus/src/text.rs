//! Reading and writing [`BigInt`]s as text on I/O streams.
//!
//! Numerals on an input stream are separated by ASCII whitespace, and are parsed with the
//! [`FromStr`][std::str::FromStr] impl of [`BigInt`].

use std::{
    io::{self, BufRead, Write},
    mem,
};

use anyhow::Context;
use itertools::Itertools;

use crate::BigInt;

/// Appends the rest of the current numeral to `token`.
///
/// Leading whitespace is skipped while `token` is empty. The whitespace byte that terminates the
/// numeral is left in the reader. If reading fails, the bytes consumed so far remain in `token`,
/// so calling this again continues the same numeral.
fn read_token<R: BufRead + ?Sized>(reader: &mut R, token: &mut Vec<u8>) -> io::Result<()> {
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            return Ok(());
        }

        let mut consumed = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    consumed += 1;
                    continue;
                }
                complete = true;
                break;
            }
            token.push(byte);
            consumed += 1;
        }
        reader.consume(consumed);
        if complete {
            return Ok(());
        }
    }
}

/// Reads whitespace-separated [`BigInt`]s from a reader.
///
/// Created by [`bigints`]. Besides being an [`Iterator`], numerals can be pulled one at a time
/// with [`BigInts::read_bigint`].
#[derive(Debug)]
pub struct BigInts<R> {
    reader: R,
    /// Bytes of a numeral whose reading was cut short by an I/O error.
    pending: Vec<u8>,
}

/// Returns a reader yielding every numeral of `reader`.
///
/// A malformed numeral produces an `Err` item; iteration may continue past it.
///
/// # Examples
///
/// ```
/// # use numerus::{text::bigints, BigInt};
/// let sum: BigInt = bigints("1 2 3\n4".as_bytes()).sum::<anyhow::Result<BigInt>>()?;
/// assert_eq!(sum, BigInt::from(10));
/// # anyhow::Ok(())
/// ```
pub fn bigints<R: BufRead>(reader: R) -> BigInts<R> {
    BigInts {
        reader,
        pending: Vec::new(),
    }
}

impl<R: BufRead> BigInts<R> {
    /// Reads the next whitespace-delimited numeral.
    ///
    /// Leading whitespace is skipped. Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails if reading from the underlying reader fails, or if the token is not a valid numeral.
    ///
    /// A malformed token has already been consumed, so reading can continue with the next one.
    /// If an I/O error interrupts a numeral, the part read so far is kept, and the next call
    /// resumes that numeral instead of returning its tail as a separate value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus::{text::bigints, BigInt};
    /// let mut input = bigints("  42\n-7 ".as_bytes());
    /// assert_eq!(input.read_bigint()?, Some(BigInt::from(42)));
    /// assert_eq!(input.read_bigint()?, Some(BigInt::from(-7)));
    /// assert_eq!(input.read_bigint()?, None);
    /// # anyhow::Ok(())
    /// ```
    pub fn read_bigint(&mut self) -> anyhow::Result<Option<BigInt>> {
        read_token(&mut self.reader, &mut self.pending).context("failed to read numeral")?;
        if self.pending.is_empty() {
            return Ok(None);
        }

        let token = String::from_utf8(mem::take(&mut self.pending))
            .context("numeral is not valid UTF-8")?;
        let n = token
            .parse()
            .with_context(|| format!("failed to parse `{token}` as an integer"))?;
        Ok(Some(n))
    }

    /// Returns the underlying reader.
    ///
    /// Any partially read numeral is discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for BigInts<R> {
    type Item = anyhow::Result<BigInt>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bigint().transpose()
    }
}

/// Writes `n` in decimal to `writer`.
pub fn write_bigint<W: Write + ?Sized>(writer: &mut W, n: &BigInt) -> io::Result<()> {
    write!(writer, "{n}")
}

/// Writes every value of `values` to `writer`, separated by `separator`.
///
/// # Examples
///
/// ```
/// # use numerus::{text::write_bigints, BigInt};
/// let mut out = Vec::new();
/// write_bigints(&mut out, &[BigInt::from(1), BigInt::from(-2)], " ")?;
/// assert_eq!(out, b"1 -2");
/// # std::io::Result::Ok(())
/// ```
pub fn write_bigints<'a, W, I>(writer: &mut W, values: I, separator: &str) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a BigInt>,
{
    write!(writer, "{}", values.into_iter().format(separator))
}
