//! Orchestration: run all five fixture writers against one output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FixtureError, Result};
use crate::writer;

/// The five fixture categories, in canonical generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Valid,
    BadDates,
    MissingTables,
    Empty,
    Corrupt,
}

impl Fixture {
    /// All fixtures, in the order they are generated.
    pub const ALL: [Fixture; 5] = [
        Fixture::Valid,
        Fixture::BadDates,
        Fixture::MissingTables,
        Fixture::Empty,
        Fixture::Corrupt,
    ];

    /// Short name used in logs and error diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Fixture::Valid => "valid",
            Fixture::BadDates => "bad_dates",
            Fixture::MissingTables => "missing_tables",
            Fixture::Empty => "empty",
            Fixture::Corrupt => "corrupt",
        }
    }

    /// File name of this fixture inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Fixture::Valid => "valid.mmbak",
            Fixture::BadDates => "bad_dates.mmbak",
            Fixture::MissingTables => "missing_tables.mmbak",
            Fixture::Empty => "empty.mmbak",
            Fixture::Corrupt => "corrupt.mmbak",
        }
    }

    /// Write this fixture to `path`.
    pub fn write(self, path: &Path) -> Result<()> {
        match self {
            Fixture::Valid => writer::write_valid(path),
            Fixture::BadDates => writer::write_bad_dates(path),
            Fixture::MissingTables => writer::write_missing_tables(path),
            Fixture::Empty => writer::write_empty(path),
            Fixture::Corrupt => writer::write_corrupt(path),
        }
    }
}

/// Generates the full fixture set into a configured output directory.
///
/// The directory is an explicit value, not a process-wide constant, so the
/// generator can target temporary directories in tests.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    out_dir: PathBuf,
}

impl FixtureGenerator {
    /// Create a generator targeting `out_dir`. Nothing is written until
    /// [`generate_all`](Self::generate_all) is called.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    /// The configured output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path a given fixture will be written to.
    pub fn fixture_path(&self, fixture: Fixture) -> PathBuf {
        self.out_dir.join(fixture.file_name())
    }

    /// Ensure the output directory exists, then run every writer in
    /// canonical order. Aborts on the first failure; the error names the
    /// fixture that failed. Returns the five written paths.
    pub fn generate_all(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.out_dir).map_err(|source| FixtureError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(Fixture::ALL.len());
        for fixture in Fixture::ALL {
            let path = self.fixture_path(fixture);
            fixture.write(&path)?;
            info!(fixture = fixture.name(), path = %path.display(), "fixture written");
            written.push(path);
        }
        info!(count = written.len(), out_dir = %self.out_dir.display(), "fixture set complete");
        Ok(written)
    }
}
