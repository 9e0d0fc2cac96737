use crate::models::{cell_text, ReportDataset};

pub const DELIMITER: char = ';';

/// Semicolon-separated text, header from the first row's keys
pub fn to_csv(dataset: &ReportDataset) -> String {
    let headers = dataset.headers();
    if headers.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().map(|h| h.to_string()));

    for row in &dataset.rows {
        push_line(&mut out, headers.iter().map(|h| cell_text(row.get(*h))));
    }

    out
}

fn push_line<I: Iterator<Item = String>>(out: &mut String, cells: I) {
    let line: Vec<String> = cells
        .map(|cell| cell.replace(DELIMITER, ","))
        .collect();
    out.push_str(&line.join(&DELIMITER.to_string()));
    out.push('\n');
}
