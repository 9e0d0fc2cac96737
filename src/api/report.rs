use super::client::{ApiClient, ApiError};
use super::dashboard::REPORT_PATH;
use crate::models::{ReportDataset, ReportRequest, ReportResponse};

impl ApiClient {
    /// Generate a report; the result becomes the dataset offered for export
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<ReportDataset, ApiError> {
        let response: ReportResponse = self.post(REPORT_PATH, request).await?;
        into_dataset(response)
    }
}

fn into_dataset(response: ReportResponse) -> Result<ReportDataset, ApiError> {
    if !response.success {
        return Err(ApiError::Rejected(
            response
                .message
                .unwrap_or_else(|| "report generation failed".to_string()),
        ));
    }

    Ok(ReportDataset {
        rows: response.dados.unwrap_or_default(),
        metadata: response.metadata.unwrap_or_default(),
    })
}
