//! Chart.js instances driven through wasm-bindgen.
//!
//! Chart.js itself is loaded by `index.html`; this module only creates one
//! chart per canvas and mutates its data in place afterwards.
use wasm_bindgen::prelude::*;

use super::{ChartData, ChartKind, ChartSurface};

#[wasm_bindgen(inline_js = r#"
const gridColor = 'rgba(0, 0, 0, 0.1)';
const tooltip = { backgroundColor: 'rgba(0, 0, 0, 0.8)', titleColor: 'white', bodyColor: 'white', padding: 10, cornerRadius: 8 };

function titled(text) {
    return { display: true, text, font: { size: 14, weight: '700' }, padding: { bottom: 20 } };
}

function configFor(kind) {
    switch (kind) {
    case 'energy':
        return {
            type: 'line',
            data: { labels: [], datasets: [{
                label: 'Consumption (kWh)', data: [],
                borderColor: 'rgb(54, 162, 235)', backgroundColor: 'rgba(54, 162, 235, 0.1)',
                borderWidth: 3, tension: 0.4, fill: true, pointRadius: 4
            }] },
            options: {
                responsive: true, maintainAspectRatio: false,
                interaction: { intersect: false, mode: 'index' },
                plugins: { title: titled('Energy consumption - last 24h'), tooltip },
                scales: {
                    y: { beginAtZero: true, title: { display: true, text: 'kWh' }, grid: { color: gridColor } },
                    x: { grid: { color: gridColor }, ticks: { maxTicksLimit: 12 } }
                }
            }
        };
    case 'peaks':
        return {
            type: 'bar',
            data: { labels: [], datasets: [{
                label: 'Peak demand (W)', data: [],
                backgroundColor: 'rgba(255, 159, 64, 0.8)', borderColor: 'rgb(255, 159, 64)',
                borderWidth: 2, borderRadius: 6, borderSkipped: false
            }] },
            options: {
                responsive: true, maintainAspectRatio: false,
                plugins: { title: titled('Peak demand - last 7 days'), tooltip },
                scales: {
                    y: { beginAtZero: true, title: { display: true, text: 'Watts' }, grid: { color: gridColor } },
                    x: { grid: { display: false } }
                }
            }
        };
    case 'relays':
        return {
            type: 'doughnut',
            data: { labels: [], datasets: [{
                data: [],
                backgroundColor: ['rgba(75, 192, 192, 0.8)', 'rgba(255, 99, 132, 0.8)'],
                borderWidth: 3, borderColor: '#ffffff', hoverOffset: 15
            }] },
            options: {
                responsive: true, maintainAspectRatio: false, cutout: '60%',
                plugins: { title: titled('Relays'), tooltip }
            }
        };
    case 'gauge':
        return {
            type: 'doughnut',
            data: { datasets: [{
                data: [0, 100], backgroundColor: ['#4caf50', '#f0f0f0'],
                borderWidth: 0, circumference: 180, rotation: 270
            }] },
            options: {
                responsive: true, maintainAspectRatio: false, cutout: '80%',
                plugins: { legend: { display: false }, tooltip: { enabled: false } }
            }
        };
    default:
        return null;
    }
}

export function createChart(canvasId, kind) {
    const canvas = document.getElementById(canvasId);
    const config = configFor(kind);
    if (!canvas || !config || typeof Chart === 'undefined') return null;
    const existing = Chart.getChart(canvas);
    if (existing) existing.destroy();
    return new Chart(canvas.getContext('2d'), config);
}

export function updateChart(chart, dataJson) {
    const data = JSON.parse(dataJson);
    const dataset = chart.data.datasets[0];
    chart.data.labels = data.labels;
    dataset.data = data.values;
    if (data.colors != null) dataset.backgroundColor = data.colors;
    chart.update();
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = createChart)]
    fn create_chart(canvas_id: &str, kind: &str) -> JsValue;

    #[wasm_bindgen(js_name = updateChart)]
    fn update_chart(chart: &JsValue, data_json: &str);
}

/// Handle to one Chart.js instance
pub struct ChartJs {
    kind: ChartKind,
    handle: JsValue,
}

impl ChartJs {
    /// Build the chart on its canvas; `None` when the canvas or Chart.js is missing
    pub fn create(kind: ChartKind) -> Option<Self> {
        let handle = create_chart(kind.canvas_id(), kind.as_str());
        if handle.is_null() || handle.is_undefined() {
            return None;
        }
        Some(Self { kind, handle })
    }
}

impl ChartSurface for ChartJs {
    fn apply(&mut self, data: &ChartData) {
        let payload = serde_json::json!({
            "labels": data.labels,
            "values": data.values,
            "colors": data.colors,
        });
        match serde_json::to_string(&payload) {
            Ok(json) => update_chart(&self.handle, &json),
            Err(e) => log::error!("Failed to encode {} chart data: {}", self.kind.as_str(), e),
        }
    }
}
