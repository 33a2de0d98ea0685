//! Expense Chart Component
//!
//! SVG line chart of amounts in list order.

use expense_ledger::ChartGeometry;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 280.0;

fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

#[component]
pub fn ExpenseChart() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let label = ctx.config.with_value(|c| c.chart_label.clone());

    let geometry = {
        let label = label.clone();
        Memo::new(move |_| {
            let series = store.ledger().read().chart_series(&label);
            ChartGeometry::layout(&series, CHART_WIDTH, CHART_HEIGHT)
        })
    };

    let plot = move || {
        let g = geometry.get();
        let area = g.plot;
        let polyline = g.polyline();

        let grid = g
            .y_ticks
            .into_iter()
            .map(|tick| {
                view! {
                    <g class="chart-tick">
                        <line
                            class="chart-grid"
                            x1=coord(area.left)
                            y1=coord(tick.y)
                            x2=coord(area.right())
                            y2=coord(tick.y)
                        />
                        <text class="chart-y-label" x=coord(area.left - 6.0) y=coord(tick.y + 4.0)>
                            {tick.label}
                        </text>
                    </g>
                }
            })
            .collect_view();

        let x_labels = g
            .x_labels
            .into_iter()
            .map(|l| {
                view! {
                    <text class="chart-x-label" x=coord(l.x) y=coord(area.bottom() + 20.0)>
                        {l.label}
                    </text>
                }
            })
            .collect_view();

        let markers = g
            .points
            .into_iter()
            .map(|(x, y)| view! { <circle class="chart-point" cx=coord(x) cy=coord(y) r="4" /> })
            .collect_view();

        view! {
            <g>
                {grid}
                <line
                    class="chart-axis"
                    x1=coord(area.left)
                    y1=coord(area.bottom())
                    x2=coord(area.right())
                    y2=coord(area.bottom())
                />
                <polyline class="chart-line" points=polyline />
                {markers}
                {x_labels}
            </g>
        }
    };

    view! {
        <section class="chart-card">
            <div class="chart-legend">
                <span class="chart-swatch"></span>
                {label}
            </div>
            <svg
                class="expense-chart"
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
            >
                {plot}
            </svg>
        </section>
    }
}
