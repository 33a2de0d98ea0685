//! Expense Ledger
//!
//! Domain layer for the expense tracker: records, the in-memory ledger,
//! amount parsing, display formatting, chart series and the storage seam.
//! Nothing here touches the browser, so everything runs in native tests.

mod amount;
mod chart;
mod config;
mod error;
mod expense;
mod format;
mod ledger;
mod seed;
mod storage;


pub use amount::parse_amount;
pub use chart::{ChartGeometry, ChartPoint, ChartSeries, PlotArea, Tick, XLabel};
pub use config::TrackerConfig;
pub use error::{LedgerError, LedgerResult};
pub use expense::{parse_stored_date, Expense, ExpenseDraft};
pub use format::{format_iso_date, format_long_date, format_money, format_short_date, format_tick};
pub use ledger::Ledger;
pub use seed::seed_expenses;
pub use storage::{ExpenseStorage, MemoryStorage};
