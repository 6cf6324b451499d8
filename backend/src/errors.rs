use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type that captures the failures a cash-book operation can hit.
///
/// Parsing-level problems are recovered locally during load (a bad date
/// becomes `None`, a structurally broken row is skipped) and never show up
/// here; only structural misuse and storage failures are surfaced.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing cash-book file is missing or unreadable. Fatal to the
    /// load operation; nothing is retried.
    #[error("cash book source unavailable at {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An update or delete addressed a position that is not a valid index
    /// into the entry sequence.
    #[error("position {position} is out of range for a cash book of {len} entries")]
    OutOfRange { position: usize, len: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
