//! Storage abstraction traits.
//!
//! The domain layer works against these traits so a different backing store
//! (a database, an in-memory fixture) could replace the CSV files without
//! touching the services.

use crate::errors::Result;
use shared::{CashEntry, ReferenceKind, ReferenceTable};

/// Whole-collection access to the cash book.
///
/// There is no incremental append: `save_entries` overwrites the entire
/// backing source, which is the persistence model of a single-operator tool.
pub trait CashBookStorage: Send + Sync {
    /// Load every entry from the backing source, in stored order.
    fn load_entries(&self) -> Result<Vec<CashEntry>>;

    /// Replace the backing source's contents with exactly `entries`.
    fn save_entries(&self, entries: &[CashEntry]) -> Result<()>;
}

/// Read-only access to the reference tables (members, savings/loans,
/// journal). Their contents are not interpreted, only passed through.
pub trait ReferenceStorage: Send + Sync {
    fn load_table(&self, kind: ReferenceKind) -> Result<ReferenceTable>;
}
