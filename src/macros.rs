//! Call-site macros for [`Logger`](crate::Logger).
//!
//! Each macro takes the logger first and then any number of
//! [`LogArg`](crate::LogArg) arguments, joined by
//! [`concat`](crate::formatter::concat). The context variants and
//! `error!` capture the enclosing function and line with
//! [`caller!`](crate::caller).
//!
//! ```
//! # use tintlog::{Config, Logger, info, info_c, warn, debug};
//! let logger = Logger::new(Config::default());
//! let attempts = 3;
//!
//! info!(logger, "listening on port ", 8080);
//! info_c!(logger);
//! warn!(logger, "retrying after ", attempts, " attempts");
//! debug!(logger, "state=", "ready");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_args {
    ($($arg:expr),*) => {
        &[$(&$arg as &dyn $crate::LogArg),*]
    };
}

/// Records an error in the logger's cache and prints the raw message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&$crate::caller!(), $crate::__log_args!($($arg),*))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($crate::__log_args!($($arg),*))
    };
}

/// Info with the calling function and line in the header.
#[macro_export]
macro_rules! info_c {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info_c(&$crate::caller!(), $crate::__log_args!($($arg),*))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($crate::__log_args!($($arg),*))
    };
}

/// Warn with the calling function and line in the header.
#[macro_export]
macro_rules! warn_c {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn_c(&$crate::caller!(), $crate::__log_args!($($arg),*))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&$crate::caller!(), $crate::__log_args!($($arg),*))
    };
}

/// Prints an alert and delivers it through an [`AlertSender`](crate::AlertSender).
///
/// Evaluates to the delivery result.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $sender:expr $(, $arg:expr)* $(,)?) => {
        $logger.alert(&$crate::caller!(), $crate::__log_args!($($arg),*), &$sender)
    };
}
