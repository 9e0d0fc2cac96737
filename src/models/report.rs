use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One report row; key order is the order the backend sent
pub type ReportRow = Map<String, Value>;

/// Report kinds offered by the backend: (value, label)
pub const REPORT_TYPES: [(&str, &str); 5] = [
    ("consumo", "Consumption"),
    ("picos", "Peaks"),
    ("reles", "Relays"),
    ("custo", "Cost"),
    ("recargas", "Top-ups"),
];

/// Period values: (value, label)
pub const REPORT_PERIODS: [(&str, &str); 4] = [
    ("today", "Today"),
    ("week", "Last 7 days"),
    ("month", "Last 30 days"),
    (CUSTOM_PERIOD, "Custom"),
];

pub const CUSTOM_PERIOD: &str = "custom";

/// Request body for `POST /api/relatorio`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub report_type: String,
    pub period: String,
    pub pzem: String,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ReportRequest {
    /// Consumption rows used by the 24h chart
    pub fn consumption(period: &str, pzem: &str) -> Self {
        Self {
            report_type: "consumo".to_string(),
            period: period.to_string(),
            pzem: pzem.to_string(),
            start_date: None,
            end_date: None,
        }
    }

    /// Build a request from the report form; a custom period needs both dates
    pub fn from_form(
        report_type: &str,
        period: &str,
        pzem: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, &'static str> {
        let (start_date, end_date) = if period == CUSTOM_PERIOD {
            if start_date.is_empty() || end_date.is_empty() {
                return Err("Select the start and end dates");
            }
            (Some(start_date.to_string()), Some(end_date.to_string()))
        } else {
            (None, None)
        };

        Ok(Self {
            report_type: report_type.to_string(),
            period: period.to_string(),
            pzem: pzem.to_string(),
            start_date,
            end_date,
        })
    }
}

/// Report metadata echoed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetadata {
    pub tipo: Option<String>,
    pub periodo: Option<String>,
    pub pzem: Option<String>,
    pub total_registros: Option<u64>,
}

/// Response envelope of `POST /api/relatorio`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportResponse {
    pub success: bool,
    pub message: Option<String>,
    pub dados: Option<Vec<ReportRow>>,
    pub metadata: Option<ReportMetadata>,
}

/// The report currently offered for export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDataset {
    pub rows: Vec<ReportRow>,
    pub metadata: ReportMetadata,
}

impl ReportDataset {
    /// Column keys, taken from the first row
    pub fn headers(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render a cell the way the table and exports show it
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_backend_field_names() {
        let body = serde_json::to_value(ReportRequest::consumption("today", "all")).unwrap();

        assert_eq!(body, json!({"type": "consumo", "period": "today", "pzem": "all"}));
    }

    #[test]
    fn test_custom_period_requires_both_dates() {
        assert!(ReportRequest::from_form("picos", "custom", "1", "2025-01-01", "").is_err());

        let request = ReportRequest::from_form("picos", "custom", "1", "2025-01-01", "2025-01-31").unwrap();
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({"type": "picos", "period": "custom", "pzem": "1",
                   "startDate": "2025-01-01", "endDate": "2025-01-31"})
        );
    }

    #[test]
    fn test_fixed_period_drops_dates() {
        let request = ReportRequest::from_form("custo", "week", "all", "2025-01-01", "").unwrap();

        assert_eq!(request.start_date, None);
        assert_eq!(request.end_date, None);
    }

    #[test]
    fn test_headers_keep_backend_key_order() {
        let response: ReportResponse = serde_json::from_str(
            r#"{"success": true, "dados": [{"zeta": 1, "alpha": 2, "mid": 3}]}"#,
        )
        .unwrap();
        let dataset = ReportDataset {
            rows: response.dados.unwrap(),
            metadata: ReportMetadata::default(),
        };

        assert_eq!(dataset.headers(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(Some(&json!("abc"))), "abc");
        assert_eq!(cell_text(Some(&json!(2.5))), "2.5");
        assert_eq!(cell_text(Some(&json!(true))), "true");
        assert_eq!(cell_text(Some(&json!({"k": 1}))), r#"{"k":1}"#);
    }
}
