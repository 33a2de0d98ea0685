//! Inline SVG Icons

use leptos::prelude::*;

fn icon_base(path: &'static str) -> impl IntoView {
    view! {
        <svg
            class="icon"
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d=path></path>
        </svg>
    }
}

pub fn icon_pen() -> impl IntoView {
    icon_base("M12 20h9M16.5 3.5a2.1 2.1 0 013 3L7 19l-4 1 1-4z")
}

pub fn icon_trash() -> impl IntoView {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6")
}

pub fn icon_plus() -> impl IntoView {
    icon_base("M12 5v14M5 12h14")
}
