//! Browser Storage
//!
//! `ExpenseStorage` over `window.localStorage`.

use expense_ledger::{ExpenseStorage, LedgerError, LedgerResult};
use wasm_bindgen::JsValue;

/// One localStorage key holding the serialized expense list
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> LedgerResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| LedgerError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| LedgerError::Storage("localStorage is unavailable".to_string()))
    }
}

impl ExpenseStorage for LocalStorage {
    fn load(&self) -> LedgerResult<Option<String>> {
        Self::storage()?.get_item(&self.key).map_err(js_error)
    }

    fn save(&self, raw: &str) -> LedgerResult<()> {
        Self::storage()?.set_item(&self.key, raw).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> LedgerError {
    LedgerError::Storage(format!("{:?}", err))
}
