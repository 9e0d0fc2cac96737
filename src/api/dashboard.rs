use super::client::{ApiClient, ApiError};
use crate::models::{DashboardSnapshot, ReportRequest, ReportResponse, ReportRow};

pub const DASHBOARD_PATH: &str = "/api/dashboard-data";
pub const REPORT_PATH: &str = "/api/relatorio";

/// Backend calls made by a refresh cycle
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// Get the consolidated dashboard snapshot
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ApiError>;

    /// Get consumption rows for the live chart; failures yield no rows
    async fn fetch_historical_series(&self, period: &str, device: &str) -> Vec<ReportRow>;
}

impl DashboardApi for ApiClient {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ApiError> {
        self.get(DASHBOARD_PATH).await
    }

    async fn fetch_historical_series(&self, period: &str, device: &str) -> Vec<ReportRow> {
        let request = ReportRequest::consumption(period, device);

        match self.post::<ReportResponse, _>(REPORT_PATH, &request).await {
            Ok(response) => rows_or_empty(response),
            Err(e) => {
                log::error!("Failed to fetch historical series: {}", e);
                Vec::new()
            }
        }
    }
}

/// Rows of a successful response, otherwise nothing
pub fn rows_or_empty(response: ReportResponse) -> Vec<ReportRow> {
    match (response.success, response.dados) {
        (true, Some(rows)) => rows,
        _ => {
            log::warn!("No historical data available");
            Vec::new()
        }
    }
}
