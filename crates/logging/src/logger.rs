//! crates/logging/src/logger.rs
//! The logger entity: sink ownership, level filtering, and emission.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::SinkOpenError;
use crate::severity::Severity;
use crate::sink::Sink;

/// A single destination for leveled diagnostic output.
///
/// A `Logger` pairs one [`Sink`] with a minimum-severity threshold.
/// Messages below the threshold are dropped before any formatting work
/// happens; messages at or above it are rendered as `[Severity] message`
/// followed by a newline and written to the sink. That line shape is a
/// stable contract for anything consuming the output.
///
/// The type is deliberately neither `Clone` nor `Copy`: a logger has
/// exactly one owner, and when that owner drops it the sink is closed if
/// and only if the logger opened it. Stderr-backed loggers never close the
/// standard error stream; file-backed loggers close their file handle.
///
/// Emission is best-effort by contract. [`log`](Self::log) has no error
/// path: a formatting or write failure is discarded so logging can never
/// become a new source of application faults.
///
/// # Examples
///
/// ```
/// use logging::{Logger, Severity};
///
/// let logger = Logger::stderr();
/// logger.set_level(Severity::Warning);
///
/// assert!(!logger.enabled(Severity::Info));
/// assert!(logger.enabled(Severity::Warning));
/// ```
pub struct Logger {
    level: AtomicU8,
    sink: Sink,
}

impl Logger {
    /// Threshold applied to newly constructed loggers.
    pub const DEFAULT_LEVEL: Severity = Severity::Info;

    fn with_sink(sink: Sink) -> Self {
        Self {
            level: AtomicU8::new(Self::DEFAULT_LEVEL as u8),
            sink,
        }
    }

    /// Creates a logger writing to the standard error stream.
    ///
    /// This constructor cannot fail: the process already owns stderr, so
    /// there is nothing to acquire. The returned logger does not own the
    /// stream and will never close it.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_sink(Sink::Stderr)
    }

    /// Creates a logger writing to the file at `path`.
    ///
    /// The file is created if missing and truncated if present. On success
    /// the logger owns the handle and closes it on drop. On failure a
    /// [`SinkOpenError`] names the path and the underlying cause, and no
    /// logger or open handle is left behind.
    ///
    /// # Errors
    ///
    /// Returns [`SinkOpenError`] when the path cannot be opened for
    /// writing, for example because a parent directory is missing or
    /// permissions deny the create.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Logger;
    ///
    /// let dir = tempfile::tempdir()?;
    /// let logger = Logger::create(dir.path().join("app.log"))?;
    /// assert_eq!(logger.level(), Logger::DEFAULT_LEVEL);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkOpenError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SinkOpenError::new(path, source))?;
        Ok(Self::with_sink(Sink::File(file)))
    }

    /// Returns the current minimum severity that will be emitted.
    #[must_use]
    pub fn level(&self) -> Severity {
        Severity::from_raw(self.level.load(Ordering::Relaxed))
    }

    /// Sets the minimum severity that will be emitted.
    ///
    /// Takes effect for subsequent [`log`](Self::log) calls. The threshold
    /// lives in an atomic so it stays adjustable through the shared
    /// ambient reference; no other logger state is mutable.
    pub fn set_level(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Reports whether a message at `severity` would be emitted.
    ///
    /// This is the cheap pre-format check call sites perform before
    /// building a message: one atomic load and one integer comparison.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Emits a message from a pre-captured argument list.
    ///
    /// This is the low-level emission variant; the [`log!`](crate::log)
    /// macro wraps it for variadic call sites. When `severity` is below
    /// the threshold the call returns before any formatting work. The
    /// rendered line is written to the sink in a single call, and any
    /// formatting or write error is swallowed: emission never fails from
    /// the caller's perspective.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{Logger, Severity};
    ///
    /// let logger = Logger::stderr();
    /// logger.log(Severity::Info, format_args!("{} items loaded", 3));
    /// ```
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let mut line = String::with_capacity(64);
        if write!(line, "[{}] ", severity.as_str()).is_err() {
            return;
        }
        if line.write_fmt(args).is_err() {
            return;
        }
        line.push('\n');
        let _ = self.sink.write_line(line.as_bytes());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sink", &self.sink)
            .finish()
    }
}
