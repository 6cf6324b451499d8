use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two mutually exclusive cash-book categories.
///
/// Legacy data files use the Indonesian labels "Pemasukan" (inflow) and
/// "Pengeluaran" (outflow); parsing accepts both spellings, serialization
/// always writes the canonical English labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Money coming into the cooperative (dues, repayments, ...)
    Inflow,
    /// Money leaving the cooperative (supplies, disbursements, ...)
    Outflow,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Inflow => "Inflow",
            Category::Outflow => "Outflow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inflow" | "pemasukan" => Ok(Category::Inflow),
            "outflow" | "pengeluaran" => Ok(Category::Outflow),
            _ => Err(()),
        }
    }
}

/// One dated financial transaction in the cooperative's cash book.
///
/// Entries have no id of their own: the zero-based position in the stored
/// sequence is the only per-entry address, so inserting or deleting shifts
/// the positions of everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashEntry {
    /// Calendar date of the transaction. `None` when the stored date could
    /// not be parsed; such entries still count toward totals.
    pub date: Option<NaiveDate>,
    pub description: String,
    pub category: Category,
    /// Amount in the smallest currency unit (whole rupiah). Sign is implied
    /// by the category, not stored.
    pub amount: i64,
}

/// Summed cash flow over a sequence of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowTotals {
    pub inflow: i64,
    pub outflow: i64,
    /// Always `inflow - outflow`.
    pub balance: i64,
}

/// A calendar month used as an aggregation key, e.g. 2024-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Summed amounts for one month, categories as columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFlow {
    pub month: MonthKey,
    pub inflow: i64,
    pub outflow: i64,
}

/// Month-by-category aggregation table, the data behind the dashboard's
/// stacked bar chart. Months appear in chronological order; a month with
/// activity in only one category still lists both, the other as 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub months: Vec<MonthFlow>,
}

impl MonthlyBreakdown {
    pub fn get(&self, month: MonthKey) -> Option<&MonthFlow> {
        self.months.iter().find(|m| m.month == month)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// The three read-only reference tables next to the cash book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    Members,
    SavingsLoans,
    Journal,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Members,
        ReferenceKind::SavingsLoans,
        ReferenceKind::Journal,
    ];

    /// Stable identifier used in file names and URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            ReferenceKind::Members => "members",
            ReferenceKind::SavingsLoans => "savings-loans",
            ReferenceKind::Journal => "journal",
        }
    }
}

impl FromStr for ReferenceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "members" => Ok(ReferenceKind::Members),
            "savings-loans" => Ok(ReferenceKind::SavingsLoans),
            "journal" => Ok(ReferenceKind::Journal),
            _ => Err(()),
        }
    }
}

/// An uninterpreted tabular source, passed through for display as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReferenceTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Response for the dashboard view: metric cards plus chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub totals: CashFlowTotals,
    pub monthly: MonthlyBreakdown,
}

/// Response for cash-book listing and mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBookResponse {
    pub entries: Vec<CashEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_localized_labels() {
        assert_eq!("Pemasukan".parse::<Category>(), Ok(Category::Inflow));
        assert_eq!("Pengeluaran".parse::<Category>(), Ok(Category::Outflow));
        assert_eq!("inflow".parse::<Category>(), Ok(Category::Inflow));
        assert_eq!(" Outflow ".parse::<Category>(), Ok(Category::Outflow));
        assert!("Transfer".parse::<Category>().is_err());
    }

    #[test]
    fn month_key_formats_with_padding() {
        let key = MonthKey { year: 2024, month: 3 };
        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn month_keys_order_chronologically() {
        let dec_2023 = MonthKey { year: 2023, month: 12 };
        let jan_2024 = MonthKey { year: 2024, month: 1 };
        assert!(dec_2023 < jan_2024);
    }

    #[test]
    fn reference_kind_slug_round_trips() {
        for kind in ReferenceKind::ALL {
            assert_eq!(kind.slug().parse::<ReferenceKind>(), Ok(kind));
        }
    }
}
