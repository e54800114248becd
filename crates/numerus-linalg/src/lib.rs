//! Const-generic matrices.
//!
//! The central type of this crate is [`Matrix`], a fixed-size matrix whose row and column counts
//! are const generic parameters. Because the dimensions are part of the type, shape mismatches
//! between operands are compile errors rather than runtime failures, and the result type of a
//! matrix product is computed by the compiler.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized or sparse matrices. Relying on const generics keeps the API
//!   small and moves all shape checking to compile time.
//! - Store elements in a single, row-major, unpadded layout.
//! - Be generic over the element type. Arithmetic requires the element type to implement
//!   [`Number`], which covers the built-in integer and floating-point types.
//! - Square-only operations (like [`Matrix::trace`]) are only defined when the row and column
//!   count are the same, so they are statically unavailable on non-square matrices.

mod matrix;
mod traits;

pub use matrix::*;
pub use traits::*;
