//! Pass-through access to the read-only reference tables.

use std::sync::Arc;

use crate::errors::Result;
use crate::storage::traits::ReferenceStorage;
use shared::{ReferenceKind, ReferenceTable};

/// Serves the member list, savings/loans book, and general journal for
/// display. The core never interprets these tables.
pub struct ReferenceService<R: ReferenceStorage> {
    storage: Arc<R>,
}

impl<R: ReferenceStorage> Clone for ReferenceService<R> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<R: ReferenceStorage> ReferenceService<R> {
    pub fn new(storage: Arc<R>) -> Self {
        Self { storage }
    }

    pub fn table(&self, kind: ReferenceKind) -> Result<ReferenceTable> {
        self.storage.load_table(kind)
    }
}
