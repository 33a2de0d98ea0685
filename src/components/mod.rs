//! UI Components
//!
//! Leptos components of the expense tracker.

mod expense_chart;
mod expense_form;
mod expense_list;
mod expense_row;
mod icons;
mod summary_header;

pub use expense_chart::ExpenseChart;
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use expense_row::ExpenseRow;
pub use icons::icon_plus;
pub use summary_header::SummaryHeader;
