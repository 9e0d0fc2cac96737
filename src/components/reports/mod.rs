mod report_table;
mod reports;

pub use reports::Reports;
