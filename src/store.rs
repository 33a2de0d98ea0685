//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use expense_ledger::{ExpenseDraft, Ledger, LedgerResult};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All expenses, in insertion order
    pub ledger: Ledger,
}

impl AppState {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new expense, returning its id
pub fn store_add_expense(store: &AppStore, draft: &ExpenseDraft) -> LedgerResult<u32> {
    let id = store.ledger().write().add(draft)?;
    log::info!("[STORE] Added expense #{}", id);
    Ok(id)
}

/// Replace the fields of an existing expense
pub fn store_update_expense(store: &AppStore, id: u32, draft: &ExpenseDraft) -> LedgerResult<()> {
    store.ledger().write().update(id, draft)?;
    log::info!("[STORE] Updated expense #{}", id);
    Ok(())
}

/// Remove an expense by ID
pub fn store_remove_expense(store: &AppStore, id: u32) -> LedgerResult<()> {
    let removed = store.ledger().write().remove(id)?;
    log::info!("[STORE] Removed expense #{} {:?}", id, removed.name);
    Ok(())
}
