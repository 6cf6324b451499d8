//! CSV-backed repository for the editable cash book.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use tracing::{debug, warn};

use super::connection::{CsvConnection, CASH_BOOK_HEADER};
use crate::errors::{LedgerError, Result};
use crate::storage::traits::CashBookStorage;
use shared::{CashEntry, Category};

/// Date formats accepted on load. Everything is written back as `%Y-%m-%d`.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Loads and saves the cash-book file.
///
/// Loading is deliberately fail-soft: a date that does not parse is kept as
/// `None` rather than raising, and a structurally broken row is skipped with
/// a warning, so malformed historical data never blocks the rest of the
/// table. Saving rewrites the whole file.
#[derive(Clone)]
pub struct CashBookRepository {
    connection: CsvConnection,
}

impl CashBookRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Parse a stored date value, `None` when no format matches.
    fn parse_date(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    }

    /// Turn one CSV record into an entry, or `None` when the row is
    /// structurally unusable (wrong column count, unknown category,
    /// non-numeric amount).
    fn parse_record(record: &csv::StringRecord) -> Option<CashEntry> {
        if record.len() != CASH_BOOK_HEADER.len() {
            warn!(
                columns = record.len(),
                "Skipping cash book row with wrong column count"
            );
            return None;
        }

        let category = match record[2].parse::<Category>() {
            Ok(category) => category,
            Err(()) => {
                warn!(value = &record[2], "Skipping cash book row with unknown category");
                return None;
            }
        };

        let amount = match record[3].trim().parse::<i64>() {
            Ok(amount) => amount,
            Err(_) => {
                warn!(value = &record[3], "Skipping cash book row with non-numeric amount");
                return None;
            }
        };

        // Invalid dates are kept, not dropped; the entry still counts
        // toward totals.
        let date = Self::parse_date(&record[0]);
        if date.is_none() && !record[0].trim().is_empty() {
            warn!(value = &record[0], "Unparsable date stored as empty");
        }

        Some(CashEntry {
            date,
            description: record[1].to_string(),
            category,
            amount,
        })
    }
}

impl CashBookStorage for CashBookRepository {
    fn load_entries(&self) -> Result<Vec<CashEntry>> {
        let path = self.connection.cash_book_path();
        let file = File::open(&path).map_err(|source| LedgerError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    warn!(%error, "Skipping unreadable cash book row");
                    continue;
                }
            };
            if let Some(entry) = Self::parse_record(&record) {
                entries.push(entry);
            }
        }

        debug!(count = entries.len(), "Loaded cash book from {:?}", path);
        Ok(entries)
    }

    fn save_entries(&self, entries: &[CashEntry]) -> Result<()> {
        let path = self.connection.cash_book_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));

        writer.write_record(CASH_BOOK_HEADER)?;
        for entry in entries {
            let date = entry
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            writer.write_record([
                date.as_str(),
                entry.description.as_str(),
                entry.category.as_str(),
                &entry.amount.to_string(),
            ])?;
        }
        writer.flush()?;

        debug!(count = entries.len(), "Saved cash book to {:?}", path);
        Ok(())
    }
}
