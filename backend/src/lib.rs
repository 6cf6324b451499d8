//! # Backend for the cooperative bookkeeping dashboard
//!
//! Loads, edits, aggregates, and persists the cooperative's cash book and
//! passes three read-only reference tables (members, savings/loans,
//! journal) through for display. All tables are flat CSV files; every
//! operation is synchronous and runs to completion before the next one.
//!
//! The presentation layer is not here: a frontend talks to the services on
//! [`Backend`] either directly or through the HTTP surface in [`rest`].

pub mod domain;
pub mod errors;
pub mod rest;
pub mod storage;

pub use errors::LedgerError;
pub use storage::csv::CsvConnection;

use std::path::Path;
use std::sync::Arc;

use domain::{CashBookService, DashboardService, ReferenceService};
use storage::csv::{CashBookRepository, ReferenceRepository};

/// Service facade over one data directory.
pub struct Backend {
    pub cash_book_service: CashBookService<CashBookRepository>,
    pub dashboard_service: DashboardService<CashBookRepository>,
    pub reference_service: ReferenceService<ReferenceRepository>,
}

impl Backend {
    /// Open the data directory, bootstrapping an empty cash book when none
    /// exists yet, and wire up all services.
    pub fn new(data_directory: impl AsRef<Path>) -> anyhow::Result<Self> {
        let connection = CsvConnection::new(data_directory)?;
        connection.ensure_cash_book_file_exists()?;

        let cash_book_repository = Arc::new(CashBookRepository::new(connection.clone()));
        let reference_repository = Arc::new(ReferenceRepository::new(connection));

        Ok(Backend {
            cash_book_service: CashBookService::new(Arc::clone(&cash_book_repository)),
            dashboard_service: DashboardService::new(cash_book_repository),
            reference_service: ReferenceService::new(reference_repository),
        })
    }
}
