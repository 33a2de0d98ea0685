//! Storage Seam
//!
//! The ledger persists as one serialized string under one key. The browser
//! implementation lives in the UI crate; `MemoryStorage` backs the tests.

use std::cell::RefCell;

use crate::error::LedgerResult;

/// Single-slot text storage for the serialized expense list
pub trait ExpenseStorage {
    /// Read the stored value, `None` when nothing has been saved yet
    fn load(&self) -> LedgerResult<Option<String>>;

    /// Replace the stored value
    fn save(&self, raw: &str) -> LedgerResult<()>;
}

/// In-memory storage slot
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `raw`
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// Current stored value
    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ExpenseStorage for MemoryStorage {
    fn load(&self) -> LedgerResult<Option<String>> {
        Ok(self.value())
    }

    fn save(&self, raw: &str) -> LedgerResult<()> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}
