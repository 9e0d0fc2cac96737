use leptos::*;

use super::reports::summary;
use crate::export::html::column_title;
use crate::models::{cell_text, ReportDataset};

/// Table of the current report rows
#[component]
pub fn ReportTable(dataset: ReportDataset) -> impl IntoView {
    if dataset.is_empty() {
        return view! {
            <div class="card">
                <p class="placeholder-text">"No records for this filter."</p>
            </div>
        }
        .into_view();
    }

    let headers: Vec<String> = dataset.headers().into_iter().map(String::from).collect();
    let head = headers
        .iter()
        .map(|h| view! { <th>{column_title(h)}</th> })
        .collect_view();
    let body = dataset
        .rows
        .iter()
        .map(|row| {
            let cells = headers
                .iter()
                .map(|h| view! { <td>{cell_text(row.get(h))}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="card report-table">
            <p class="report-summary">{summary(&dataset)}</p>
            <table class="table table-striped">
                <thead><tr>{head}</tr></thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
    .into_view()
}
