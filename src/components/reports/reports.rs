use leptos::*;

use super::report_table::ReportTable;
use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::export::{export_data, BrowserExportSink};
use crate::models::{ReportDataset, ReportRequest, CUSTOM_PERIOD, REPORT_PERIODS, REPORT_TYPES};
use crate::state::{use_session, use_toasts, Notifier, Severity};

/// Report generation form, result table and export actions
#[component]
pub fn Reports() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let client = ApiClient::with_config(&AppConfig::load());

    let report_type = create_rw_signal(REPORT_TYPES[0].0.to_string());
    let period = create_rw_signal(REPORT_PERIODS[0].0.to_string());
    let pzem = create_rw_signal("all".to_string());
    let start_date = create_rw_signal(String::new());
    let end_date = create_rw_signal(String::new());
    let loading = create_rw_signal(false);

    // Keep the last report when navigating back to this page
    let dataset = create_rw_signal(session.borrow().reports.current().cloned());

    let generate = {
        let session = session.clone();
        move |_| {
            let request = match ReportRequest::from_form(
                &report_type.get_untracked(),
                &period.get_untracked(),
                &pzem.get_untracked(),
                &start_date.get_untracked(),
                &end_date.get_untracked(),
            ) {
                Ok(request) => request,
                Err(message) => {
                    toasts.notify(message, Severity::Warning);
                    return;
                }
            };

            let (client, session) = (client.clone(), session.clone());
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match client.generate_report(&request).await {
                    Ok(report) => {
                        log::info!("Report {} loaded with {} rows", request.report_type, report.rows.len());
                        session.borrow_mut().reports.replace(report.clone());
                        dataset.set(Some(report));
                        toasts.notify("Report generated", Severity::Success);
                    }
                    Err(ApiError::Rejected(message)) => {
                        toasts.notify(&format!("Error: {}", message), Severity::Danger);
                    }
                    Err(e) => {
                        log::error!("Failed to generate report: {}", e);
                        toasts.notify("Error generating report!", Severity::Danger);
                    }
                }
                loading.set(false);
            });
        }
    };

    let export = move |format: &'static str| {
        let session = session.clone();
        move |_| {
            let now = chrono::Local::now();
            let generated_at = now.format("%d/%m/%Y %H:%M:%S").to_string();
            let _ = export_data(
                format,
                &session.borrow().reports,
                &toasts,
                &BrowserExportSink,
                now.date_naive(),
                &generated_at,
            );
        }
    };

    view! {
        <div class="reports">
            <div class="card report-form">
                <h3>"Reports"</h3>
                <div class="form-row">
                    <label>
                        "Type"
                        <select on:change=move |ev| report_type.set(event_target_value(&ev))>
                            {REPORT_TYPES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Period"
                        <select on:change=move |ev| period.set(event_target_value(&ev))>
                            {REPORT_PERIODS
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Meter"
                        <select on:change=move |ev| pzem.set(event_target_value(&ev))>
                            <option value="all">"All"</option>
                            <option value="1">"PZEM 001"</option>
                            <option value="2">"PZEM 002"</option>
                        </select>
                    </label>
                </div>
                <Show when=move || period.get() == CUSTOM_PERIOD>
                    <div class="form-row">
                        <label>
                            "From"
                            <input type="date" on:input=move |ev| start_date.set(event_target_value(&ev)) />
                        </label>
                        <label>
                            "To"
                            <input type="date" on:input=move |ev| end_date.set(event_target_value(&ev)) />
                        </label>
                    </div>
                </Show>
                <div class="form-actions">
                    <button class="refresh-button" disabled=move || loading.get() on:click=generate>
                        {move || if loading.get() { "Generating..." } else { "Generate" }}
                    </button>
                    <button class="export-button" on:click=export("csv")>"Export CSV"</button>
                    <button class="export-button" on:click=export("pdf")>"Export PDF"</button>
                </div>
            </div>

            {move || match dataset.get() {
                Some(report) => view! { <ReportTable dataset=report /> }.into_view(),
                None => view! {
                    <p class="placeholder-text">"Generate a report to see its rows."</p>
                }.into_view(),
            }}
        </div>
    }
}

/// Summary line under the table title
pub fn summary(dataset: &ReportDataset) -> String {
    let meta = &dataset.metadata;
    let total = meta.total_registros.unwrap_or(dataset.rows.len() as u64);
    format!(
        "{} | {} | {} record(s)",
        meta.tipo.as_deref().unwrap_or("N/A"),
        meta.periodo.as_deref().unwrap_or("N/A"),
        total
    )
}
