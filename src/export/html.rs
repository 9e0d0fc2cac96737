use crate::models::{cell_text, ReportDataset};
use crate::view::escape_html;

const STYLE: &str = "body { font-family: Arial, sans-serif; margin: 20px; }\
h1 { color: #1a73e8; }\
table { width: 100%; border-collapse: collapse; margin-top: 15px; }\
th, td { border: 1px solid #ddd; padding: 8px; }\
th { background: #1a73e8; color: #fff; }\
tr:nth-child(even) { background: #f2f2f2; }\
footer { margin-top: 20px; font-size: 12px; color: #666; }";

/// Column title as shown in tables: `peak_time` -> `PEAK TIME`
pub fn column_title(key: &str) -> String {
    key.to_uppercase().replace('_', " ")
}

/// Printable document: letterhead, table and footer
pub fn to_print_html(dataset: &ReportDataset, generated_at: &str) -> String {
    let meta = &dataset.metadata;
    let or_na = |v: &Option<String>| escape_html(v.as_deref().unwrap_or("N/A"));
    let headers = dataset.headers();

    let mut html = format!(
        "<head><meta charset=\"utf-8\"><title>Report</title><style>{}</style></head><body>\
         <h1>Energy System Report</h1>\
         <p><b>Type:</b> {}</p><p><b>Period:</b> {}</p><p><b>Meter:</b> {}</p>\
         <p><b>Generated:</b> {}</p><table><tr>",
        STYLE,
        or_na(&meta.tipo),
        or_na(&meta.periodo),
        escape_html(meta.pzem.as_deref().unwrap_or("all")),
        escape_html(generated_at)
    );

    for header in &headers {
        html.push_str(&format!("<th>{}</th>", escape_html(&column_title(header))));
    }
    html.push_str("</tr>");

    for row in &dataset.rows {
        html.push_str("<tr>");
        for header in &headers {
            html.push_str(&format!("<td>{}</td>", escape_html(&cell_text(row.get(*header)))));
        }
        html.push_str("</tr>");
    }

    html.push_str(&format!(
        "</table><footer>{} record(s) - Energy monitoring system</footer></body>",
        dataset.rows.len()
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportMetadata;
    use serde_json::json;

    #[test]
    fn test_column_title() {
        assert_eq!(column_title("peak_time_w"), "PEAK TIME W");
    }

    #[test]
    fn test_document_contains_letterhead_table_and_footer() {
        let dataset = ReportDataset {
            rows: vec![json!({"data": "2025-11-20", "nota": "<b>"}).as_object().cloned().unwrap()],
            metadata: ReportMetadata {
                tipo: Some("consumo".into()),
                ..Default::default()
            },
        };
        let html = to_print_html(&dataset, "20/11/2025 10:00:00");

        assert!(html.contains("<h1>Energy System Report</h1>"));
        assert!(html.contains("<b>Type:</b> consumo"));
        assert!(html.contains("<b>Period:</b> N/A"));
        assert!(html.contains("20/11/2025 10:00:00"));
        assert!(html.contains("<th>DATA</th><th>NOTA</th>"));
        assert!(html.contains("<td>&lt;b&gt;</td>"));
        assert!(html.contains("1 record(s)"));
    }
}
