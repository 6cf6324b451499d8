/// Test utilities for the CSV storage layer.
///
/// Provides an RAII test environment over a temporary directory so test
/// data is removed even when a test panics.
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;
use shared::ReferenceKind;

/// Temporary data directory plus a connection rooted in it. The directory
/// lives as long as the environment value.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    pub base_path: PathBuf,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Write raw cash-book file contents, bypassing the repository, so
    /// tests can set up malformed rows.
    pub fn write_cash_book(&self, contents: &str) -> Result<()> {
        fs::write(self.connection.cash_book_path(), contents)?;
        Ok(())
    }

    /// Write raw contents for one of the reference tables.
    pub fn write_reference(&self, kind: ReferenceKind, contents: &str) -> Result<()> {
        fs::write(self.connection.reference_path(kind), contents)?;
        Ok(())
    }
}
