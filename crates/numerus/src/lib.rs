//! Big integers and const-generic matrices.
//!
//! This crate bundles the numerus component crates:
//!
//! * [`bigint`] ([`numerus-bigint`]): the arbitrary-precision decimal integer [`BigInt`].
//! * [`linalg`] ([`numerus-linalg`]): the fixed-size [`Matrix`] type.
//!
//! The two components are independent of each other. On top of them, this crate provides
//! [`text`], which reads and writes whitespace-separated [`BigInt`] numerals from and to I/O
//! streams, and logger initialization via [`init_logger!`].
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log levels configured by [`init_logger!`], using the usual
//!   [`env_logger`] syntax. The big integer division traces its search at *trace* level.
//!
//! [`numerus-bigint`]: numerus_bigint
//! [`numerus-linalg`]: numerus_linalg

use log::LevelFilter;

pub mod text;

pub use numerus_bigint as bigint;
pub use numerus_linalg as linalg;

pub use numerus_bigint::{ArithmeticError, BigInt, ParseBigIntError, Sign};
pub use numerus_linalg::Matrix;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("numerus_bigint"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and numerus will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` takes precedence over both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
