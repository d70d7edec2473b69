#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a minimal leveled logging facility: one [`Logger`] owning
//! one output sink (the standard error stream or an opened file) paired
//! with a minimum-severity threshold, plus an ordered [`Severity`]
//! taxonomy used for filtering and line prefixing. A process-wide
//! [`ambient`] logger lets call sites emit diagnostics through the
//! per-severity macros without threading a handle everywhere.
//!
//! # Design
//!
//! Sink ownership is encoded in the type rather than tracked by a flag: a
//! stderr-backed logger borrows the process stream and never closes it,
//! while a file-backed logger owns its handle and closes it on drop.
//! [`Logger`] is neither `Clone` nor `Copy`, so exactly one owner closes
//! the sink. Emitted lines follow the stable shape `[Severity] message`
//! terminated by a newline.
//!
//! Filtering happens before formatting. The macros check the threshold
//! (and, for the ambient variants, that a logger is installed at all)
//! before `format_args!` captures anything, so a disabled level costs a
//! threshold comparison rather than string formatting.
//!
//! # Invariants
//!
//! - `Trace < Debug < Info < Warning < Error`; a message is emitted iff
//!   its severity is at or above the logger threshold.
//! - [`name_of`] is total: defined values map to their canonical names and
//!   everything else maps to `"UNKNOWN"`.
//! - Emission never fails and never interrupts the caller; write and
//!   formatting errors are discarded.
//! - Dropping a stderr-backed logger leaves the standard error stream
//!   untouched and writable.
//!
//! # Errors
//!
//! The only fallible operation is [`Logger::create`], which surfaces a
//! [`SinkOpenError`] naming the attempted path and the underlying I/O
//! cause. Everything else is total by contract.
//!
//! # Examples
//!
//! Install an ambient logger and emit through the guarded macros:
//!
//! ```
//! use logging::{ambient, info_log, warn_log, Logger, Severity};
//!
//! ambient::install(Logger::stderr());
//! ambient::with(|logger| logger.set_level(Severity::Warning));
//!
//! info_log!("filtered out before formatting");
//! warn_log!("disk {}% full", 95);
//!
//! ambient::clear();
//! ```
//!
//! Thread an explicit logger instead of relying on ambient state:
//!
//! ```
//! use logging::{log, name_of, Logger, Severity};
//!
//! let logger = Logger::stderr();
//! log!(logger, Severity::Info, "starting up");
//!
//! assert_eq!(name_of(Severity::Error as i32), "Error");
//! assert_eq!(name_of(42), "UNKNOWN");
//! ```

pub mod ambient;
mod error;
mod logger;
mod macros;
mod severity;
mod sink;

pub use error::SinkOpenError;
pub use logger::Logger;
pub use severity::{name_of, ParseSeverityError, Severity};
