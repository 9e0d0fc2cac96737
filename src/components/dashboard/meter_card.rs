use leptos::*;

use crate::view::targets::{meter_field, meter_status};

/// Card for one PZEM meter; values are written by the refresh cycle
#[component]
pub fn MeterCard(index: usize) -> impl IntoView {
    let field = move |name: &str| meter_field(name, index);

    view! {
        <div class="card meter-card">
            <div class="card-header-row">
                <h3>{format!("PZEM {:03}", index)}</h3>
                <span id=meter_status(index) class="badge bg-secondary">"--"</span>
            </div>
            <div class="reading-grid">
                <Reading label="Voltage" id=field("voltage") />
                <Reading label="Current" id=field("current") />
                <Reading label="Power" id=field("power") />
                <Reading label="Energy" id=field("energy") />
                <Reading label="Frequency" id=field("frequency") />
                <Reading label="Power factor" id=field("pf") />
                <Reading label="Limit" id=field("limit") />
            </div>
        </div>
    }
}

#[component]
fn Reading(label: &'static str, id: String) -> impl IntoView {
    view! {
        <div class="reading-item">
            <span class="reading-label">{label}</span>
            <span class="reading-value" id=id>"--"</span>
        </div>
    }
}
