//! Expense Form Component
//!
//! Modal shared by "add" and "edit". Submitting writes into the store and
//! closes; cancelling throws the draft away.

use expense_ledger::{format_iso_date, parse_stored_date};
use leptos::prelude::*;

use crate::context::{use_app_context, FormMode};
use crate::store::{store_add_expense, store_update_expense, use_app_store};

#[component]
pub fn ExpenseForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let is_editing = move || ctx.form_mode.get().is_edit();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ctx.draft.get();
        let result = match ctx.form_mode.get() {
            FormMode::Create => store_add_expense(&store, &draft).map(|_| ()),
            FormMode::Edit(id) => store_update_expense(&store, id, &draft),
        };
        match result {
            Ok(()) => ctx.close_form(),
            Err(e) => log::warn!("[FORM] Submit rejected: {}", e),
        }
    };

    view! {
        <Show when=move || ctx.form_open.get()>
            <div class="modal-backdrop" on:click=move |_| ctx.close_form()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || if is_editing() { "Edit Expense" } else { "Add Expense" }}</h2>
                        <button type="button" class="modal-close" on:click=move |_| ctx.close_form()>
                            "✕"
                        </button>
                    </div>
                    <form class="expense-form" on:submit=on_submit>
                        <div class="form-field">
                            <label for="name"><b>"Expense Name"</b></label>
                            <input
                                id="name"
                                type="text"
                                required=true
                                prop:value=move || ctx.draft.read().name.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.draft.update(|d| d.name = value);
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label for="amount"><b>"Amount"</b></label>
                            <input
                                id="amount"
                                type="number"
                                step="any"
                                required=true
                                prop:value=move || ctx.draft.read().amount.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.draft.update(|d| d.amount = value);
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label for="date"><b>"Date"</b></label>
                            <input
                                id="date"
                                type="date"
                                prop:value=move || format_iso_date(ctx.draft.read().date)
                                on:input=move |ev| {
                                    // Cleared or partial input keeps the previous date
                                    if let Ok(date) = parse_stored_date(&event_target_value(&ev)) {
                                        ctx.draft.update(|d| d.date = date);
                                    }
                                }
                            />
                        </div>
                        <div class="modal-footer">
                            <button type="submit">
                                {move || if is_editing() { "Save Changes" } else { "Add Expense" }}
                            </button>
                            <button type="button" class="outline" on:click=move |_| ctx.close_form()>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
