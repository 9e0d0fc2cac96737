//! Export of the current report to CSV or to a printable page.
pub mod browser;
pub mod csv;
pub mod html;

pub use browser::BrowserExportSink;

use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::state::{Notifier, ReportStore, Severity};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("No data available to export. Generate a report first.")]
    NoData,
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error("Browser error: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Where exported output goes
pub trait ExportSink {
    /// Offer `content` as a file download
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), ExportError>;
    /// Open `html` as a document and start printing it
    fn print_html(&self, html: &str) -> Result<(), ExportError>;
}

/// File name of a CSV exported on `day`
pub fn csv_filename(day: NaiveDate) -> String {
    format!("relatorio_{}.csv", day.format("%Y-%m-%d"))
}

/// Export the stored report and tell the user how it went
pub fn export_data<N, S>(
    format: &str,
    store: &ReportStore,
    notifier: &N,
    sink: &S,
    today: NaiveDate,
    generated_at: &str,
) -> Result<(), ExportError>
where
    N: Notifier + ?Sized,
    S: ExportSink + ?Sized,
{
    let result = run_export(format, store, sink, today, generated_at);

    match &result {
        Ok(ExportFormat::Csv) => notifier.notify("CSV exported successfully!", Severity::Success),
        Ok(ExportFormat::Pdf) => notifier.notify("PDF ready to print!", Severity::Success),
        Err(e @ ExportError::NoData) => notifier.notify(&e.to_string(), Severity::Warning),
        Err(e) => {
            log::error!("Export failed: {}", e);
            notifier.notify(&format!("Export failed: {}", e), Severity::Danger)
        }
    }

    result.map(|_| ())
}

fn run_export<S: ExportSink + ?Sized>(
    format: &str,
    store: &ReportStore,
    sink: &S,
    today: NaiveDate,
    generated_at: &str,
) -> Result<ExportFormat, ExportError> {
    let dataset = store
        .current()
        .filter(|d| !d.is_empty())
        .ok_or(ExportError::NoData)?;
    let format: ExportFormat = format.parse()?;

    log::info!("Exporting {} row(s) as {:?}", dataset.rows.len(), format);
    match format {
        ExportFormat::Csv => sink.download(&csv_filename(today), CSV_MIME, &csv::to_csv(dataset))?,
        ExportFormat::Pdf => sink.print_html(&html::to_print_html(dataset, generated_at))?,
    }
    Ok(format)
}
