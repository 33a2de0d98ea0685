//! Summary Header Component
//!
//! Title bar showing the running total of all expenses.

use expense_ledger::format_money;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let symbol = ctx.currency_symbol();

    let total = move || format_money(store.ledger().read().total(), &symbol);

    view! {
        <header class="tracker-header">
            <h1>"Expense Tracker"</h1>
            <div class="tracker-total">"Total: " {total}</div>
        </header>
    }
}
