//! Storage layer: CSV-backed implementations of the storage traits.

pub mod csv;
pub mod traits;

pub use csv::{CashBookRepository, CsvConnection, ReferenceRepository};
pub use traits::{CashBookStorage, ReferenceStorage};
