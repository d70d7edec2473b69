//! crates/logging/src/ambient.rs
//! Process-wide ambient logger consulted by the call-site macros.
//!
//! The ambient logger is a single process-lifetime container rather than a
//! raw mutable global: call sites observe the installed [`Logger`] through
//! a read lock and never take ownership of it. The intended ordering is
//! [`install`] during initialisation, logging calls for the remainder of
//! the process, and [`clear`] (if at all) after the last call site has
//! gone quiet.
//!
//! When no logger is installed, messages are silently dropped. That is
//! expected behaviour, not an error: the emission contract of this crate
//! is that logging never fails and never interrupts the caller.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::logger::Logger;
use crate::severity::Severity;

static AMBIENT: RwLock<Option<Logger>> = RwLock::new(None);

// A poisoned lock only means another thread panicked mid-access; the
// Option<Logger> inside is still structurally valid, so emission keeps
// its never-fails contract by taking the guard anyway.
fn read_ambient() -> RwLockReadGuard<'static, Option<Logger>> {
    AMBIENT.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_ambient() -> RwLockWriteGuard<'static, Option<Logger>> {
    AMBIENT.write().unwrap_or_else(PoisonError::into_inner)
}

/// Installs `logger` as the ambient logger for the whole process.
///
/// Returns the previously installed logger, if any, so the caller decides
/// its teardown. Replacing the ambient logger mid-run is supported but
/// should happen in controlled initialisation or teardown phases, not
/// concurrently with heavy logging traffic.
///
/// # Examples
///
/// ```
/// use logging::{ambient, Logger};
///
/// assert!(ambient::install(Logger::stderr()).is_none());
/// assert!(ambient::is_installed());
/// ambient::clear();
/// ```
pub fn install(logger: Logger) -> Option<Logger> {
    write_ambient().replace(logger)
}

/// Removes and returns the ambient logger.
///
/// Subsequent ambient emissions are silently dropped until a new logger is
/// installed. The returned logger closes its sink when the caller drops
/// it, exactly as if it had never been installed.
pub fn clear() -> Option<Logger> {
    write_ambient().take()
}

/// Reports whether an ambient logger is currently installed.
#[must_use]
pub fn is_installed() -> bool {
    read_ambient().is_some()
}

/// Reports whether an ambient message at `severity` would be emitted.
///
/// Returns `false` when no logger is installed. Together with the
/// installed logger's threshold check this is the guard the per-severity
/// macros evaluate before any formatting work.
#[must_use]
pub fn enabled(severity: Severity) -> bool {
    read_ambient()
        .as_ref()
        .is_some_and(|logger| logger.enabled(severity))
}

/// Emits a message through the ambient logger, if one is installed.
///
/// A missing logger or a filtered severity silently drops the message;
/// neither case is an error. The call never fails.
pub fn log(severity: Severity, args: fmt::Arguments<'_>) {
    if let Some(logger) = read_ambient().as_ref() {
        logger.log(severity, args);
    }
}

/// Observes the ambient logger without transferring ownership.
///
/// Runs `f` against the installed logger under the read lock and returns
/// its result, or `None` when no logger is installed.
///
/// # Examples
///
/// ```
/// use logging::{ambient, Logger, Severity};
///
/// ambient::install(Logger::stderr());
/// let level = ambient::with(Logger::level);
/// assert_eq!(level, Some(Severity::Info));
/// ambient::clear();
/// ```
pub fn with<R>(f: impl FnOnce(&Logger) -> R) -> Option<R> {
    read_ambient().as_ref().map(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn install_returns_previous_logger() {
        clear();
        assert!(install(Logger::stderr()).is_none());
        assert!(install(Logger::stderr()).is_some());
        clear();
    }

    #[test]
    #[serial]
    fn clear_removes_the_logger() {
        install(Logger::stderr());
        assert!(clear().is_some());
        assert!(clear().is_none());
        assert!(!is_installed());
    }

    #[test]
    #[serial]
    fn enabled_is_false_without_a_logger() {
        clear();
        assert!(!enabled(Severity::Error));
    }

    #[test]
    #[serial]
    fn enabled_delegates_to_installed_threshold() {
        install(Logger::stderr());
        with(|logger| logger.set_level(Severity::Warning));
        assert!(!enabled(Severity::Info));
        assert!(enabled(Severity::Warning));
        assert!(enabled(Severity::Error));
        clear();
    }

    #[test]
    #[serial]
    fn log_without_logger_is_a_silent_no_op() {
        clear();
        log(Severity::Error, format_args!("dropped on the floor"));
    }

    #[test]
    #[serial]
    fn with_observes_without_consuming() {
        install(Logger::stderr());
        assert_eq!(with(Logger::level), Some(Severity::Info));
        assert!(is_installed());
        clear();
    }

    #[test]
    #[serial]
    fn with_returns_none_when_unset() {
        clear();
        assert_eq!(with(Logger::level), None);
    }
}
