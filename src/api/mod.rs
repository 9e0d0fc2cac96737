pub mod client;
pub mod dashboard;
pub mod report;

pub use client::{ApiClient, ApiError};
pub use dashboard::DashboardApi;
