//! Expense Tracker Frontend Entry Point

mod app;
mod components;
mod context;
mod host;
mod logger;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = host::read_config();
    logger::init(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
