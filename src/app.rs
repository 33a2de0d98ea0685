//! Expense Tracker App
//!
//! Hydrates the ledger from localStorage, mirrors every change back, and
//! lays out the header, list, chart and modal form.

use expense_ledger::{seed_expenses, Ledger, TrackerConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{icon_plus, ExpenseChart, ExpenseForm, ExpenseList, SummaryHeader};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let storage = LocalStorage::new(config.storage_key.clone());
    let ledger = Ledger::hydrate(&storage, seed_expenses());
    log::info!("[APP] Hydrated {} expenses", ledger.len());

    let store = Store::new(AppState::new(ledger));
    provide_context(store);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Persist on every change; the first run only subscribes, so hydration
    // itself never writes
    Effect::new(move |prev: Option<()>| {
        let ledger = store.ledger().read();
        if prev.is_none() {
            return;
        }
        match ledger.persist(&storage) {
            Ok(()) => log::debug!("[APP] Saved {} expenses", ledger.len()),
            Err(e) => log::error!("[APP] Failed to save expenses: {}", e),
        }
    });

    view! {
        <div class="tracker">
            <SummaryHeader />

            <main class="tracker-main">
                <ExpenseList />
                <ExpenseChart />
            </main>

            <div class="fab">
                <button class="fab-btn" title="Add expense" on:click=move |_| ctx.open_create()>
                    {icon_plus()}
                </button>
            </div>

            <ExpenseForm />
        </div>
    }
}
