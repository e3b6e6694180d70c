//! Instance-free logging.
//!
//! These functions print straight to standard output and never touch an
//! error cache, for code that has no configured [`Logger`] at hand.
//!
//! [`global`] additionally exposes one process-wide `Logger`, created on
//! first use from [`Config::from_env`] and never reconfigured afterwards.
//! Tests that need isolation should build their own `Logger` instead.

use lazy_static::lazy_static;

use crate::arg::LogArg;
use crate::caller::Caller;
use crate::clock::Stamp;
use crate::config::Config;
use crate::level::Level;
use crate::logger::{emit, emit_error, Logger, Stdout};

lazy_static! {
    /// The process-wide default logger.
    static ref GLOBAL: Logger = Logger::new(Config::from_env());
}

/// Returns the process-wide default logger.
///
/// ```
/// # use tintlog::direct::global;
/// let a = global() as *const _;
/// let b = global() as *const _;
/// assert_eq!(a, b);
/// ```
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Prints an error line carrying the raw message.
pub fn error(args: &[&dyn LogArg]) {
    emit_error(&Stdout, &crate::formatter::concat(args), &Stamp::now());
}

pub fn info(args: &[&dyn LogArg]) {
    emit(&Stdout, Level::Info, &Caller::unknown(), args);
}

pub fn info_c(caller: &Caller, args: &[&dyn LogArg]) {
    emit(&Stdout, Level::InfoWithContext, caller, args);
}

pub fn warn(args: &[&dyn LogArg]) {
    emit(&Stdout, Level::Warn, &Caller::unknown(), args);
}

pub fn warn_c(caller: &Caller, args: &[&dyn LogArg]) {
    emit(&Stdout, Level::WarnWithContext, caller, args);
}

pub fn debug(caller: &Caller, args: &[&dyn LogArg]) {
    emit(&Stdout, Level::Debug, caller, args);
}
