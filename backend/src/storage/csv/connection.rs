//! Data-directory handling for the CSV storage backend.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::Result;
use shared::ReferenceKind;

/// Header row of the cash-book file.
pub const CASH_BOOK_HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

const CASH_BOOK_FILE: &str = "cash_book.csv";
const DATA_DIR_ENV: &str = "COOP_BOOKS_DATA_DIR";

/// Handle on the data directory that all repositories share.
///
/// Knows where each table lives and can bootstrap the editable cash-book
/// file; the reference tables are never created here because they are
/// maintained outside this tool.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Open a connection rooted at `base_directory`, creating the directory
    /// if needed.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory)?;
        Ok(Self { base_directory })
    }

    /// Resolve the default data directory: the `COOP_BOOKS_DATA_DIR`
    /// environment variable if set, otherwise a per-user data directory.
    pub fn default_directory() -> PathBuf {
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coop-books")
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn cash_book_path(&self) -> PathBuf {
        self.base_directory.join(CASH_BOOK_FILE)
    }

    pub fn reference_path(&self, kind: ReferenceKind) -> PathBuf {
        let file_name = match kind {
            ReferenceKind::Members => "members.csv",
            ReferenceKind::SavingsLoans => "savings_loans.csv",
            ReferenceKind::Journal => "journal.csv",
        };
        self.base_directory.join(file_name)
    }

    /// Create an empty cash-book file (header only) if none exists yet, so
    /// a fresh data directory starts with a loadable ledger.
    pub fn ensure_cash_book_file_exists(&self) -> Result<()> {
        let path = self.cash_book_path();
        if path.exists() {
            return Ok(());
        }
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(CASH_BOOK_HEADER)?;
        writer.flush()?;
        info!("Created empty cash book at {:?}", path);
        Ok(())
    }
}
