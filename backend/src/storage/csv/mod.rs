//! # CSV Storage Module
//!
//! File-based storage for the cooperative's books. Each table is one CSV
//! file with a fixed named-column header inside a single data directory:
//!
//! ```text
//! data/
//! ├── cash_book.csv      ← editable ledger (Date, Description, Category, Amount)
//! ├── members.csv        ← read-only reference table
//! ├── savings_loans.csv  ← read-only reference table
//! └── journal.csv        ← read-only reference table
//! ```
//!
//! Writes rewrite the whole file; there is no incremental append and no
//! locking, which matches a single-operator tool.

pub mod cash_book_repository;
pub mod connection;
pub mod reference_repository;

#[cfg(test)]
pub mod test_utils;

pub use cash_book_repository::CashBookRepository;
pub use connection::CsvConnection;
pub use reference_repository::ReferenceRepository;
