//! Read-only repository for the reference tables.

use std::fs::File;
use std::io::BufReader;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use super::connection::CsvConnection;
use crate::errors::Result;
use crate::storage::traits::ReferenceStorage;
use shared::{ReferenceKind, ReferenceTable};

/// Passes the members, savings/loans, and journal tables through without
/// interpreting them. A missing file yields an empty table so a partially
/// populated data directory still works; an unreadable row is skipped.
#[derive(Clone)]
pub struct ReferenceRepository {
    connection: CsvConnection,
}

impl ReferenceRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl ReferenceStorage for ReferenceRepository {
    fn load_table(&self, kind: ReferenceKind) -> Result<ReferenceTable> {
        let path = self.connection.reference_path(kind);
        if !path.exists() {
            debug!(table = kind.slug(), "Reference file absent, serving empty table");
            return Ok(ReferenceTable::default());
        }

        let file = File::open(&path)?;
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let columns = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
                Err(error) => warn!(table = kind.slug(), %error, "Skipping unreadable reference row"),
            }
        }

        debug!(table = kind.slug(), rows = rows.len(), "Loaded reference table");
        Ok(ReferenceTable { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use anyhow::Result;

    #[test]
    fn missing_file_yields_empty_table() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = ReferenceRepository::new(env.connection.clone());

        let table = repo.load_table(ReferenceKind::Members)?;
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
        Ok(())
    }

    #[test]
    fn table_passes_through_uninterpreted() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_reference(
            ReferenceKind::Members,
            "Member ID,Name,Joined\n\
             A-01,Sari,2021-04-01\n\
             A-02,Dewi,2022-09-15\n",
        )?;

        let repo = ReferenceRepository::new(env.connection.clone());
        let table = repo.load_table(ReferenceKind::Members)?;

        assert_eq!(table.columns, vec!["Member ID", "Name", "Joined"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["A-02", "Dewi", "2022-09-15"]);
        Ok(())
    }

    #[test]
    fn each_kind_reads_its_own_file() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_reference(ReferenceKind::Journal, "Ref,Debit,Credit\nJ-1,100,100\n")?;

        let repo = ReferenceRepository::new(env.connection.clone());
        assert!(!repo.load_table(ReferenceKind::Journal)?.is_empty());
        assert!(repo.load_table(ReferenceKind::SavingsLoans)?.is_empty());
        Ok(())
    }
}
