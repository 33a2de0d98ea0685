//! Seed List
//!
//! Sample records shown when storage holds nothing yet.

use chrono::NaiveDate;

use crate::expense::Expense;

const SEED: &[(&str, f64, i32, u32, u32)] = &[
    ("Groceries", 250.0, 2024, 5, 15),
    ("Rent", 250.0, 2024, 6, 1),
    ("Utilities", 250.0, 2024, 6, 5),
    ("Dining Out", 250.0, 2024, 6, 10),
];

/// The four fixed sample expenses, ids 1 through 4
pub fn seed_expenses() -> Vec<Expense> {
    SEED.iter()
        .zip(1u32..)
        .filter_map(|(&(name, amount, y, m, d), id)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Expense {
                id,
                name: name.to_string(),
                amount: Some(amount),
                date,
            })
        })
        .collect()
}
