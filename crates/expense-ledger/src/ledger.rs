//! Expense Ledger
//!
//! Ordered in-memory list of expenses plus the id counter. Order is
//! insertion order and is never re-sorted.

use std::collections::HashSet;

use log::{debug, warn};

use crate::chart::{ChartPoint, ChartSeries};
use crate::error::{LedgerError, LedgerResult};
use crate::expense::{Expense, ExpenseDraft};
use crate::format::format_short_date;
use crate::storage::ExpenseStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
    /// Next id to hand out; only ever grows, so ids of deleted records are
    /// never reused
    next_id: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }
}

/// Hand out `*next` and advance it, failing instead of wrapping
fn allocate_id(next: &mut u32) -> LedgerResult<u32> {
    let id = *next;
    *next = id.checked_add(1).ok_or(LedgerError::IdsExhausted)?;
    Ok(id)
}

impl Ledger {
    /// Build a ledger over `expenses`, keeping their order.
    ///
    /// Lists saved by older versions of the tracker can repeat an id; every
    /// repeat after the first gets a fresh id so each row stays addressable.
    pub fn new(mut expenses: Vec<Expense>) -> LedgerResult<Self> {
        let max_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);
        let mut next_id = max_id.checked_add(1).ok_or(LedgerError::IdsExhausted)?;

        let mut seen = HashSet::with_capacity(expenses.len());
        for expense in &mut expenses {
            if !seen.insert(expense.id) {
                let fresh = allocate_id(&mut next_id)?;
                warn!("Duplicate expense id #{}, renumbered to #{}", expense.id, fresh);
                expense.id = fresh;
                seen.insert(fresh);
            }
        }

        Ok(Self { expenses, next_id })
    }

    fn from_seed(seed: Vec<Expense>) -> Self {
        Self::new(seed).unwrap_or_else(|err| {
            warn!("Seed list rejected, starting empty: {}", err);
            Self::default()
        })
    }

    /// Load the stored list, or `seed` when storage is empty or unreadable
    pub fn hydrate<S: ExpenseStorage>(storage: &S, seed: Vec<Expense>) -> Self {
        match storage.load() {
            Ok(Some(raw)) => match Self::decode(&raw).and_then(Self::new) {
                Ok(ledger) => {
                    debug!("Hydrated {} expenses from storage", ledger.len());
                    ledger
                }
                Err(err) => {
                    warn!("Stored expenses are unusable, using seed list: {}", err);
                    Self::from_seed(seed)
                }
            },
            Ok(None) => {
                debug!("No stored expenses, using seed list");
                Self::from_seed(seed)
            }
            Err(err) => {
                warn!("Could not read storage, using seed list: {}", err);
                Self::from_seed(seed)
            }
        }
    }

    pub fn decode(raw: &str) -> LedgerResult<Vec<Expense>> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn encode(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string(&self.expenses)?)
    }

    /// Write the whole list to `storage`
    pub fn persist<S: ExpenseStorage>(&self, storage: &S) -> LedgerResult<()> {
        let raw = self.encode()?;
        storage.save(&raw)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Append a new expense built from `draft`, returning its id
    pub fn add(&mut self, draft: &ExpenseDraft) -> LedgerResult<u32> {
        let (name, amount, date) = draft.to_fields()?;
        let id = allocate_id(&mut self.next_id)?;
        debug!("Adding expense #{} {:?} ({})", id, name, amount);
        self.expenses.push(Expense {
            id,
            name,
            amount: Some(amount),
            date,
        });
        Ok(id)
    }

    /// Replace name, amount and date of expense `id` in place
    pub fn update(&mut self, id: u32, draft: &ExpenseDraft) -> LedgerResult<()> {
        let (name, amount, date) = draft.to_fields()?;
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        debug!("Updating expense #{}", id);
        expense.name = name;
        expense.amount = Some(amount);
        expense.date = date;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> LedgerResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        debug!("Removing expense #{}", id);
        Ok(self.expenses.remove(index))
    }

    /// Sum of all amounts, `None` counted as zero.
    ///
    /// Saturates at `±f64::MAX` instead of overflowing to infinity.
    pub fn total(&self) -> f64 {
        self.expenses
            .iter()
            .map(Expense::amount_or_zero)
            .fold(0.0, |acc, amount| (acc + amount).clamp(-f64::MAX, f64::MAX))
    }

    /// Chart points in list order
    pub fn chart_series(&self, label: &str) -> ChartSeries {
        ChartSeries {
            label: label.to_string(),
            points: self
                .expenses
                .iter()
                .map(|e| ChartPoint {
                    label: format_short_date(e.date),
                    value: e.amount_or_zero(),
                })
                .collect(),
        }
    }
}
