//! Application Context
//!
//! Configuration and modal form state shared via Leptos Context API.

use chrono::NaiveDate;
use expense_ledger::{Expense, ExpenseDraft, TrackerConfig};
use leptos::prelude::*;

/// What submitting the modal form does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// Save changes to the expense with this id
    Edit(u32),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<TrackerConfig>,
    /// Whether the add/edit modal is shown - read
    pub form_open: ReadSignal<bool>,
    /// Whether the add/edit modal is shown - write
    set_form_open: WriteSignal<bool>,
    pub form_mode: ReadSignal<FormMode>,
    set_form_mode: WriteSignal<FormMode>,
    /// Raw field values of the modal form
    pub draft: RwSignal<ExpenseDraft>,
}

impl AppContext {
    pub fn new(config: TrackerConfig) -> Self {
        let (form_open, set_form_open) = signal(false);
        let (form_mode, set_form_mode) = signal(FormMode::Create);
        Self {
            config: StoredValue::new(config),
            form_open,
            set_form_open,
            form_mode,
            set_form_mode,
            draft: RwSignal::new(ExpenseDraft::blank(today())),
        }
    }

    pub fn currency_symbol(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    /// Open the modal for a new expense
    pub fn open_create(&self) {
        self.set_form_mode.set(FormMode::Create);
        self.set_form_open.set(true);
    }

    /// Open the modal pre-filled from `expense`
    pub fn open_edit(&self, expense: &Expense) {
        self.draft.set(ExpenseDraft::from_expense(expense));
        self.set_form_mode.set(FormMode::Edit(expense.id));
        self.set_form_open.set(true);
    }

    /// Hide the modal and reset it to a blank create form
    pub fn close_form(&self) {
        self.set_form_open.set(false);
        self.set_form_mode.set(FormMode::Create);
        self.draft.set(ExpenseDraft::blank(today()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
