use leptos::*;

use crate::kpi::{apply_reset, KpiKey, RESET_ALL};
use crate::state::use_session;
use crate::view::DomViewPort;

/// KPI cards; texts are written by the refresh cycle
#[component]
pub fn KpiCards() -> impl IntoView {
    view! {
        <div class="kpi-grid">
            <KpiCard title="Current power" kpi=KpiKey::CurrentPower />
            <KpiCard title="Energy balance" kpi=KpiKey::TodayEnergy />
            <KpiCard title="Balance value" kpi=KpiKey::TodayCost />
            <KpiCard title="Peak today" kpi=KpiKey::PeakToday />
            <KpiCard title="Weekly peak" kpi=KpiKey::PeakWeekly />
            <KpiCard title="Monthly peak" kpi=KpiKey::PeakMonthly />
            <KpiCard title="Balance" kpi=KpiKey::Savings />
        </div>
    }
}

#[component]
fn KpiCard(title: &'static str, kpi: KpiKey) -> impl IntoView {
    view! {
        <div class="card kpi-card">
            <h4>{title}</h4>
            <div class="kpi-value" id=kpi.value_target()>{kpi.zero_text()}</div>
            {kpi.time_target().map(|id| view! {
                <div class="kpi-time" id=id>"--:--"</div>
            })}
        </div>
    }
}

/// Selector and button that force KPIs to zero until reload
#[component]
pub fn KpiResetPanel() -> impl IntoView {
    let session = use_session();
    let (option, set_option) = create_signal(RESET_ALL.to_string());
    let (message, set_message) = create_signal(None::<(bool, &'static str)>);

    let on_reset = move |_| {
        let selected = option.get_untracked();
        let keys = apply_reset(&DomViewPort, &mut session.borrow_mut().kpi_resets, &selected);

        if keys.is_empty() {
            set_message.set(Some((false, "No KPI selected for reset.")));
            return;
        }
        set_message.set(Some((true, "KPI(s) reset successfully!")));

        #[cfg(target_arch = "wasm32")]
        {
            let _ = gloo_timers::callback::Timeout::new(4_000, move || set_message.set(None)).forget();
        }
    };

    view! {
        <div class="card kpi-reset">
            <h4>"Reset KPI"</h4>
            <div class="kpi-reset-controls">
                <select
                    id="kpi-reset-select"
                    on:change=move |ev| set_option.set(event_target_value(&ev))
                >
                    <option value=RESET_ALL selected=true>"All"</option>
                    {KpiKey::ALL
                        .into_iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect_view()}
                </select>
                <button class="refresh-button" on:click=on_reset>"Reset"</button>
            </div>
            <div id="msg-reset-kpi">
                {move || message.get().map(|(ok, text)| {
                    let class = if ok { "alert alert-success mt-2" } else { "alert alert-warning mt-2" };
                    view! { <div class=class>{text}</div> }
                })}
            </div>
        </div>
    }
}
