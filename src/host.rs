//! Host Page Integration
//!
//! Reads the optional configuration override embedded in the host page:
//! `<meta name="expense-tracker-config" content='{"currency_symbol":"€"}'>`

use expense_ledger::TrackerConfig;

const CONFIG_META_SELECTOR: &str = r#"meta[name="expense-tracker-config"]"#;

/// Config from the host page, defaults when absent or malformed.
///
/// Runs before the logger is installed, so problems go straight to the
/// console.
pub fn read_config() -> TrackerConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(CONFIG_META_SELECTOR).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    let Some(raw) = raw else {
        return TrackerConfig::default();
    };

    match TrackerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[HOST] Ignoring malformed config: {}", e).into());
            TrackerConfig::default()
        }
    }
}
