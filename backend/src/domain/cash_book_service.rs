//! Load-modify-save orchestration for the cash book.

use std::sync::Arc;

use tracing::info;

use crate::domain::cash_book;
use crate::errors::Result;
use crate::storage::traits::CashBookStorage;
use shared::CashEntry;

/// Mediates between the pure sequence transforms in [`cash_book`] and the
/// backing store. Every mutation loads the full sequence, transforms it,
/// and saves it back whole; the updated sequence is returned so callers can
/// re-render without a second load.
pub struct CashBookService<S: CashBookStorage> {
    storage: Arc<S>,
}

impl<S: CashBookStorage> Clone for CashBookService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: CashBookStorage> CashBookService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// All entries in stored order (position order).
    pub fn list(&self) -> Result<Vec<CashEntry>> {
        self.storage.load_entries()
    }

    /// All entries ordered for display: newest date first, undated last.
    pub fn list_for_display(&self) -> Result<Vec<CashEntry>> {
        Ok(cash_book::sorted_for_display(&self.storage.load_entries()?))
    }

    /// Append a new entry and persist the whole sequence.
    pub fn add_entry(&self, entry: CashEntry) -> Result<Vec<CashEntry>> {
        let entries = cash_book::add(self.storage.load_entries()?, entry);
        self.storage.save_entries(&entries)?;
        info!(position = entries.len() - 1, "Added cash book entry");
        Ok(entries)
    }

    /// Replace the entry at `position` and persist. Fails with `OutOfRange`
    /// before anything is written when the position is invalid.
    pub fn update_entry(&self, position: usize, entry: CashEntry) -> Result<Vec<CashEntry>> {
        let entries = cash_book::update(self.storage.load_entries()?, position, entry)?;
        self.storage.save_entries(&entries)?;
        info!(position, "Updated cash book entry");
        Ok(entries)
    }

    /// Remove the entry at `position` and persist. Fails with `OutOfRange`
    /// before anything is written when the position is invalid.
    pub fn delete_entry(&self, position: usize) -> Result<Vec<CashEntry>> {
        let entries = cash_book::delete(self.storage.load_entries()?, position)?;
        self.storage.save_entries(&entries)?;
        info!(position, "Deleted cash book entry");
        Ok(entries)
    }
}
