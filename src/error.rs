//! Error types for fixture generation.
//!
//! Every failure is fatal and identifies the fixture it occurred in, since
//! downstream test suites assume all five files exist after a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while generating fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The output directory could not be created. Raised before any writer
    /// runs.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },

    /// A file-system operation (truncate, raw write) failed for one fixture.
    #[error("fixture `{fixture}`: file system error: {source}")]
    Io {
        /// Name of the fixture being written (e.g. "corrupt")
        fixture: &'static str,
        /// Underlying OS error
        source: io::Error,
    },

    /// The SQLite engine rejected an open, schema, or insert operation.
    #[error("fixture `{fixture}`: storage error: {source}")]
    Storage {
        /// Name of the fixture being written (e.g. "valid")
        fixture: &'static str,
        /// Underlying rusqlite error
        source: rusqlite::Error,
    },
}
