//! crates/logging/src/sink.rs
//! Output destinations for rendered log lines.

use std::fs::File;
use std::io::{self, Write};

/// Destination that receives rendered log lines.
///
/// Sink ownership is encoded in the variant rather than tracked by a flag:
/// `Stderr` borrows the process-wide stream and never closes it, while
/// `File` owns its handle and closes it when the sink is dropped. Dropping
/// a stderr-backed sink therefore cannot disturb the standard error stream
/// other code keeps writing to.
#[derive(Debug)]
pub(crate) enum Sink {
    /// The standard error stream; not owned, never closed.
    Stderr,
    /// An owned file handle, closed on drop.
    File(File),
}

impl Sink {
    /// Writes one rendered line in a single `write_all` call.
    ///
    /// Emitting the full line at once keeps concurrently written lines from
    /// interleaving mid-message on the shared stderr stream.
    pub(crate) fn write_line(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().lock().write_all(bytes),
            Self::File(file) => {
                let mut handle: &File = file;
                handle.write_all(bytes)
            }
        }
    }
}
