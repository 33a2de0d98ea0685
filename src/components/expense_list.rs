//! Expense List Component
//!
//! Renders expenses in insertion order, or a hint when there are none.

use expense_ledger::Expense;
use leptos::prelude::*;

use crate::components::ExpenseRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Rows are static, so the key covers every displayed field and an edit
/// re-creates the row.
fn row_key(expense: &Expense) -> (u32, String, Option<u64>, chrono::NaiveDate) {
    (
        expense.id,
        expense.name.clone(),
        expense.amount.map(f64::to_bits),
        expense.date,
    )
}

#[component]
pub fn ExpenseList() -> impl IntoView {
    let store = use_app_store();
    let is_empty = move || store.ledger().read().is_empty();

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="empty-state">"No expenses yet. Add your first expense!"</p> }
        >
            <ul class="expense-list">
                <For
                    each=move || store.ledger().read().expenses().to_vec()
                    key=row_key
                    children=move |expense| view! { <ExpenseRow expense=expense /> }
                />
            </ul>
        </Show>
    }
}
