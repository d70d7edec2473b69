//! crates/logging/src/macros.rs
//! Guarded emission macros for explicit and ambient loggers.
//!
//! Every macro here performs the filtering check before `format_args!` is
//! evaluated, so a disabled severity never pays formatting cost and never
//! evaluates side-effecting arguments. For the ambient macros the guard is
//! two-part: a logger must be installed and its threshold must admit the
//! severity.

/// Logs through an explicit [`Logger`](crate::Logger).
///
/// The enabled check runs before the format arguments are captured, so a
/// filtered call costs an atomic load and an integer comparison.
///
/// # Examples
///
/// ```
/// use logging::{log, Logger, Severity};
///
/// let logger = Logger::stderr();
/// log!(logger, Severity::Info, "loaded {} plugins", 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        let severity = $severity;
        if logger.enabled(severity) {
            logger.log(severity, ::core::format_args!($($arg)*));
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ambient_log {
    ($severity:expr, $($arg:tt)*) => {{
        let severity = $severity;
        if $crate::ambient::enabled(severity) {
            $crate::ambient::log(severity, ::core::format_args!($($arg)*));
        }
    }};
}

/// Logs a [`Trace`](crate::Severity::Trace) message through the ambient logger.
///
/// Silently does nothing when no ambient logger is installed or the
/// severity is filtered.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::__ambient_log!($crate::Severity::Trace, $($arg)*)
    };
}

/// Logs a [`Debug`](crate::Severity::Debug) message through the ambient logger.
///
/// Silently does nothing when no ambient logger is installed or the
/// severity is filtered.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::__ambient_log!($crate::Severity::Debug, $($arg)*)
    };
}

/// Logs an [`Info`](crate::Severity::Info) message through the ambient logger.
///
/// Silently does nothing when no ambient logger is installed or the
/// severity is filtered.
///
/// # Examples
///
/// ```
/// use logging::{ambient, info_log, Logger};
///
/// ambient::install(Logger::stderr());
/// info_log!("listening on port {}", 8080);
/// ambient::clear();
/// ```
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::__ambient_log!($crate::Severity::Info, $($arg)*)
    };
}

/// Logs a [`Warning`](crate::Severity::Warning) message through the ambient logger.
///
/// Silently does nothing when no ambient logger is installed or the
/// severity is filtered.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::__ambient_log!($crate::Severity::Warning, $($arg)*)
    };
}

/// Logs an [`Error`](crate::Severity::Error) message through the ambient logger.
///
/// Silently does nothing when no ambient logger is installed or the
/// severity is filtered.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::__ambient_log!($crate::Severity::Error, $($arg)*)
    };
}
