//! crates/logging/src/error.rs
//! The single recoverable error surfaced by this crate.

use std::io;
use std::path::{Path, PathBuf};

/// Error returned when [`Logger::create`](crate::Logger::create) cannot
/// open its file sink.
///
/// This is the only fallible operation in the crate: failing to establish
/// a logging destination is diagnostically important, so the error carries
/// both the attempted path and the underlying I/O failure and is always
/// surfaced to the caller. Whether to fall back to stderr, retry another
/// path, or abort initialisation is the caller's decision.
#[derive(Debug, thiserror::Error)]
#[error("failed to open log sink at {}: {source}", path.display())]
pub struct SinkOpenError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl SinkOpenError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Returns the path that could not be opened.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying I/O failure.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// Consumes the error and returns the underlying I/O failure.
    #[must_use]
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::Path;

    fn sample() -> SinkOpenError {
        SinkOpenError::new(
            "/var/log/app.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        )
    }

    #[test]
    fn display_names_path_and_cause() {
        let message = sample().to_string();
        assert!(message.contains("/var/log/app.log"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn path_accessor_returns_attempted_path() {
        assert_eq!(sample().path(), Path::new("/var/log/app.log"));
    }

    #[test]
    fn source_chain_exposes_io_error() {
        let error = sample();
        assert_eq!(error.io_error().kind(), io::ErrorKind::PermissionDenied);
        let source = error.source().expect("io error is chained");
        assert!(source.to_string().contains("permission denied"));
    }

    #[test]
    fn into_io_error_preserves_kind() {
        assert_eq!(
            sample().into_io_error().kind(),
            io::ErrorKind::PermissionDenied
        );
    }
}
