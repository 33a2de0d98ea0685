//! Expense Row Component
//!
//! One expense with its edit and delete buttons.

use expense_ledger::{format_long_date, format_money, Expense};
use leptos::prelude::*;

use crate::components::icons::{icon_pen, icon_trash};
use crate::context::use_app_context;
use crate::store::{store_remove_expense, use_app_store};

#[component]
pub fn ExpenseRow(expense: Expense) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = expense.id;
    let amount = format_money(expense.amount_or_zero(), &ctx.currency_symbol());
    let date = format_long_date(expense.date);
    let name = expense.name.clone();

    let on_edit = move |_| ctx.open_edit(&expense);
    let on_delete = move |_| {
        if let Err(e) = store_remove_expense(&store, id) {
            log::warn!("[LIST] Delete failed: {}", e);
        }
    };

    view! {
        <li class="expense-row">
            <div class="expense-info">
                <h2 class="expense-name">{name}</h2>
                <p class="expense-date">{date}</p>
            </div>
            <div class="expense-actions">
                <span class="expense-amount">{amount}</span>
                <button class="icon-btn" title="Edit" on:click=on_edit>
                    {icon_pen()}
                </button>
                <button class="icon-btn destructive" title="Delete" on:click=on_delete>
                    {icon_trash()}
                </button>
            </div>
        </li>
    }
}
