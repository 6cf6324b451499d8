//! Dashboard view over the cash book: totals plus the monthly chart data.

use std::sync::Arc;

use crate::domain::cash_book;
use crate::errors::Result;
use crate::storage::traits::CashBookStorage;
use shared::DashboardResponse;

/// Produces the data behind the dashboard page: the three metric cards
/// (total inflow, total outflow, net balance) and the month-by-category
/// table the stacked bar chart is drawn from.
pub struct DashboardService<S: CashBookStorage> {
    storage: Arc<S>,
}

impl<S: CashBookStorage> Clone for DashboardService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: CashBookStorage> DashboardService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn dashboard(&self) -> Result<DashboardResponse> {
        let entries = self.storage.load_entries()?;
        Ok(DashboardResponse {
            totals: cash_book::totals(&entries),
            monthly: cash_book::monthly_breakdown(&entries),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::CashBookRepository;
    use anyhow::Result;
    use shared::MonthKey;

    #[test]
    fn dashboard_combines_totals_and_monthly_breakdown() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_cash_book(
            "Date,Description,Category,Amount\n\
             2024-01-05,Dues,Inflow,50000\n\
             2024-01-10,Supplies,Outflow,20000\n\
             2024-02-01,Dues,Inflow,30000\n",
        )?;

        let service = DashboardService::new(Arc::new(CashBookRepository::new(env.connection.clone())));
        let dashboard = service.dashboard()?;

        assert_eq!(dashboard.totals.balance, 60000);
        assert_eq!(dashboard.monthly.months.len(), 2);
        let feb = dashboard
            .monthly
            .get(MonthKey { year: 2024, month: 2 })
            .unwrap();
        assert_eq!(feb.inflow, 30000);
        assert_eq!(feb.outflow, 0);
        Ok(())
    }

    #[test]
    fn undated_entry_counts_in_totals_but_not_in_chart() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.write_cash_book(
            "Date,Description,Category,Amount\n\
             ???,Lost receipt,Outflow,7500\n\
             2024-01-05,Dues,Inflow,50000\n",
        )?;

        let service = DashboardService::new(Arc::new(CashBookRepository::new(env.connection.clone())));
        let dashboard = service.dashboard()?;

        assert_eq!(dashboard.totals.outflow, 7500);
        assert_eq!(dashboard.monthly.months.len(), 1);
        assert_eq!(dashboard.monthly.months[0].outflow, 0);
        Ok(())
    }
}
