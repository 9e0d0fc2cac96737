use leptos::*;

use super::charts_panel::ChartsPanel;
use super::kpi_cards::{KpiCards, KpiResetPanel};
use super::meter_card::MeterCard;
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::controller::RefreshCycle;
use crate::state::{use_session, use_toasts, SessionHandle, ToastContext};
use crate::view::{targets, DomViewPort};

/// Dashboard page; rendering is driven by the refresh cycle, not by signals
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = AppConfig::load();
    let session = use_session();
    let toasts = use_toasts();
    let client = ApiClient::with_config(&config);

    let refresh = {
        let session = session.clone();
        move || spawn_refresh(session.clone(), client.clone(), toasts)
    };

    #[cfg(target_arch = "wasm32")]
    {
        use crate::charts::{chartjs::ChartJs, ChartManager};
        use gloo_timers::callback::Interval;

        // Canvases exist once the view is mounted
        let first = refresh.clone();
        request_animation_frame(move || {
            session.borrow_mut().charts = ChartManager::attach(ChartJs::create);
            first();
        });

        let tick = refresh.clone();
        let interval = Interval::new(config.refresh_interval_ms, move || tick());
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = session;

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <span class="last-update">
                    "Last update: "
                    <span id=targets::LAST_UPDATE>"--:--:--"</span>
                </span>
                <button class="refresh-button" on:click=move |_| refresh()>"Refresh"</button>
            </div>

            <div id=targets::ALERT_CONTAINER class="alert-section"></div>

            <div class="dashboard-grid">
                <MeterCard index=1 />
                <MeterCard index=2 />
            </div>

            <KpiCards />
            <ChartsPanel />
            <KpiResetPanel />
        </div>
    }
}

fn spawn_refresh(session: SessionHandle, client: ApiClient, toasts: ToastContext) {
    wasm_bindgen_futures::spawn_local(async move {
        let cycle = RefreshCycle {
            api: &client,
            view: &DomViewPort,
            notifier: &toasts,
            session: &*session,
            random: js_sys::Math::random,
            clock: clock_text,
        };
        cycle.refresh().await;
    });
}

fn clock_text() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
