use leptos::*;

use crate::view::targets;

/// Canvases the chart manager attaches to, plus the gauge label
#[component]
pub fn ChartsPanel() -> impl IntoView {
    view! {
        <div class="charts-grid">
            <div class="card chart-card">
                <canvas id=targets::ENERGY_CHART></canvas>
            </div>
            <div class="card chart-card">
                <canvas id=targets::PEAK_CHART></canvas>
            </div>
            <div class="card chart-card">
                <canvas id=targets::RELAYS_CHART></canvas>
            </div>
            <div class="card chart-card gauge-card">
                <h3>"Usage"</h3>
                <canvas id=targets::GAUGE_CHART></canvas>
                <div class="gauge-value" id=targets::GAUGE_VALUE>"0%"</div>
            </div>
        </div>
    }
}
