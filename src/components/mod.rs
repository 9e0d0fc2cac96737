pub mod dashboard;
pub mod layout;
pub mod reports;
pub mod toast;

pub use dashboard::Dashboard;
pub use reports::Reports;
