//! Domain layer: the cash-book logic and the services the presentation
//! layer calls.

pub mod cash_book;
pub mod cash_book_service;
pub mod dashboard_service;
pub mod reference_service;

pub use cash_book_service::CashBookService;
pub use dashboard_service::DashboardService;
pub use reference_service::ReferenceService;
