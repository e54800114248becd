//! Magnitude arithmetic on decimal digit slices.
//!
//! All slices are *little-endian*: index 0 holds the least significant digit. Every function
//! returns a trimmed sequence (no most-significant zero digits, except for the single digit `0`).

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

const BASE: u8 = 10;

/// Removes most-significant zero digits, keeping at least one digit.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits == [0]
}

/// Compares two trimmed magnitudes.
///
/// The shorter sequence is smaller; sequences of equal length are compared starting at the most
/// significant digit.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0;
    for pair in a.iter().zip_longest(b) {
        let sum = match pair {
            EitherOrBoth::Both(x, y) => x + y,
            EitherOrBoth::Left(x) | EitherOrBoth::Right(x) => *x,
        } + carry;
        out.push(sum % BASE);
        carry = sum / BASE;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Computes `a - b`.
///
/// # Panics
///
/// Panics if `a < b`.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = a.to_vec();
    for (i, &subtrahend) in b.iter().enumerate() {
        if out[i] < subtrahend {
            let lender = (i + 1..out.len())
                .find(|&j| out[j] != 0)
                .expect("magnitude subtraction underflowed");
            out[lender] -= 1;
            out[i + 1..lender].iter_mut().for_each(|d| *d = BASE - 1);
            out[i] += BASE;
        }
        out[i] -= subtrahend;
    }
    trim(&mut out);
    out
}

/// Schoolbook multiplication.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut acc = vec![0u64; a.len() + b.len()];
    for (j, &y) in b.iter().enumerate() {
        for (i, &x) in a.iter().enumerate() {
            acc[i + j] += u64::from(x) * u64::from(y);
        }
    }

    let mut carry = 0;
    let mut out: Vec<u8> = acc
        .into_iter()
        .map(|cell| {
            let cell = cell + carry;
            carry = cell / u64::from(BASE);
            (cell % u64::from(BASE)) as u8
        })
        .collect();
    debug_assert_eq!(carry, 0);
    trim(&mut out);
    out
}

/// Divides by two, discarding the remainder.
pub(crate) fn halve(digits: &[u8]) -> Vec<u8> {
    let mut out = vec![0; digits.len()];
    let mut rem = 0;
    for (quotient, &digit) in out.iter_mut().zip(digits).rev() {
        let cur = rem * BASE + digit;
        *quotient = cur / 2;
        rem = cur % 2;
    }
    trim(&mut out);
    out
}
