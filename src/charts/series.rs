//! Choosing and synthesizing the data each chart shows.
//!
//! Every chart prefers real data and falls back in a fixed order; a series
//! whose labels and values differ in length counts as missing.
use chrono::NaiveDate;
use serde_json::Value;

use super::ChartData;
use crate::kpi::Gauge;
use crate::models::{DashboardSnapshot, ReportRow};

pub const GAUGE_TRACK_COLOR: &str = "#f0f0f0";
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Where a chart's data came from on this refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    Live,
    Snapshot,
    Synthesized,
}

/// 24h energy: live rows, then the snapshot series, then a synthetic day
pub fn energy_series(
    snapshot: &DashboardSnapshot,
    live_rows: &[ReportRow],
    random: &mut dyn FnMut() -> f64,
) -> (ChartData, SeriesSource) {
    if !live_rows.is_empty() {
        let labels = live_rows
            .iter()
            .enumerate()
            .map(|(i, row)| row_label(row, i))
            .collect();
        let values = live_rows.iter().map(row_energy).collect();
        return (ChartData::new(labels, values), SeriesSource::Live);
    }

    if let Some((labels, values)) = snapshot.historical.as_ref().and_then(|s| s.aligned()) {
        return (
            ChartData::new(labels.to_vec(), values.to_vec()),
            SeriesSource::Snapshot,
        );
    }

    let total_kw = snapshot.total_power() / 1000.0;
    let (labels, values) = (0..24u32)
        .map(|hour| {
            let value = total_kw * hourly_multiplier(hour) + random() * 0.5;
            (format!("{}:00", hour), round3(value))
        })
        .unzip();
    (ChartData::new(labels, values), SeriesSource::Synthesized)
}

/// Typical load shape across the day
pub fn hourly_multiplier(hour: u32) -> f64 {
    match hour {
        6..=9 => 1.8,
        18..=22 => 2.2,
        23 | 0..=5 => 0.4,
        _ => 1.0,
    }
}

/// 7-day peaks: the snapshot series, else the current peak scaled 70-130%
pub fn weekly_peak_series(
    snapshot: &DashboardSnapshot,
    random: &mut dyn FnMut() -> f64,
) -> (ChartData, SeriesSource) {
    if let Some((labels, values)) = snapshot.peaks.as_ref().and_then(|s| s.aligned()) {
        return (
            ChartData::new(labels.to_vec(), values.to_vec()),
            SeriesSource::Snapshot,
        );
    }

    let current_peak = snapshot.meter(1).power.max(snapshot.meter(2).power);
    let (labels, values) = WEEKDAYS
        .iter()
        .map(|day| (day.to_string(), current_peak * (0.7 + random() * 0.6)))
        .unzip();
    (ChartData::new(labels, values), SeriesSource::Synthesized)
}

/// Relay donut: active/inactive counted from the relays; without relays, the
/// snapshot series when it is a two-value count, else empty counts
pub fn relay_series(snapshot: &DashboardSnapshot) -> (ChartData, SeriesSource) {
    let counts = |active: usize, inactive: usize| {
        ChartData::new(
            vec!["Active relays".to_string(), "Inactive relays".to_string()],
            vec![active as f64, inactive as f64],
        )
    };

    if !snapshot.reles.is_empty() {
        let active = snapshot.active_relays();
        return (counts(active, snapshot.reles.len() - active), SeriesSource::Snapshot);
    }

    match snapshot.reles_chart.as_ref().and_then(|s| s.aligned()) {
        Some((labels, values)) if values.len() == 2 => (
            ChartData::new(labels.to_vec(), values.to_vec()),
            SeriesSource::Snapshot,
        ),
        _ => (counts(0, 0), SeriesSource::Synthesized),
    }
}

/// Two segments: usage and the remaining track
pub fn gauge_data(gauge: &Gauge) -> ChartData {
    ChartData {
        labels: vec!["Usage".to_string(), "Free".to_string()],
        values: vec![gauge.percent, 100.0 - gauge.percent],
        colors: Some(vec![gauge.color.to_string(), GAUGE_TRACK_COLOR.to_string()]),
    }
}

/// Hour of the row if present, else its date as a short weekday, else its position
fn row_label(row: &ReportRow, index: usize) -> String {
    if let Some(hour) = row.get("hora").and_then(Value::as_str) {
        return hour.to_string();
    }
    match row.get("data").and_then(Value::as_str) {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.format("%a %d").to_string())
            .unwrap_or_else(|_| date.to_string()),
        None => format!("#{}", index + 1),
    }
}

fn row_energy(row: &ReportRow) -> f64 {
    match row.get("energia") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabeledSeries, MeterReading, RelayState};
    use serde_json::json;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    fn row(value: serde_json::Value) -> ReportRow {
        value.as_object().cloned().unwrap()
    }

    fn with_power(p1: f64, p2: f64) -> DashboardSnapshot {
        DashboardSnapshot {
            pzem1: Some(MeterReading { power: p1, ..Default::default() }),
            pzem2: Some(MeterReading { power: p2, ..Default::default() }),
            ..Default::default()
        }
    }

    #[test]
    fn test_live_rows_win() {
        let rows = vec![
            row(json!({"hora": "10:00", "energia": 1.25})),
            row(json!({"data": "2025-11-20", "energia": "0.5"})),
            row(json!({"energia": null})),
        ];
        let snapshot = DashboardSnapshot::fallback();
        let (data, source) = energy_series(&snapshot, &rows, &mut fixed(0.0));

        assert_eq!(source, SeriesSource::Live);
        assert_eq!(data.labels, vec!["10:00", "Thu 20", "#3"]);
        assert_eq!(data.values, vec![1.25, 0.5, 0.0]);
    }

    #[test]
    fn test_snapshot_history_used_without_live_rows() {
        let (data, source) = energy_series(&DashboardSnapshot::fallback(), &[], &mut fixed(0.0));

        assert_eq!(source, SeriesSource::Snapshot);
        assert_eq!(data.labels.len(), data.values.len());
        assert_eq!(data.values[3], 180.0);
    }

    #[test]
    fn test_synthesized_day_follows_load_shape() {
        let snapshot = with_power(600.0, 400.0);
        let (data, source) = energy_series(&snapshot, &[], &mut fixed(0.0));

        assert_eq!(source, SeriesSource::Synthesized);
        assert_eq!(data.labels.len(), 24);
        assert_eq!(data.labels[0], "0:00");
        assert_eq!(data.values[3], 0.4);
        assert_eq!(data.values[7], 1.8);
        assert_eq!(data.values[12], 1.0);
        assert_eq!(data.values[20], 2.2);
        assert_eq!(data.values[23], 0.4);
    }

    #[test]
    fn test_synthesized_values_have_three_decimals() {
        let snapshot = with_power(123.4567, 0.0);
        let (data, _) = energy_series(&snapshot, &[], &mut fixed(0.3333));

        for value in data.values {
            assert_eq!(value, (value * 1000.0).round() / 1000.0);
        }
    }

    #[test]
    fn test_misaligned_history_is_synthesized() {
        let snapshot = DashboardSnapshot {
            historical: Some(LabeledSeries {
                labels: Some(vec!["00:00".into()]),
                values: Some(vec![1.0, 2.0]),
            }),
            ..with_power(100.0, 0.0)
        };
        let (_, source) = energy_series(&snapshot, &[], &mut fixed(0.5));
        assert_eq!(source, SeriesSource::Synthesized);
    }

    #[test]
    fn test_weekly_peaks_scale_between_70_and_130_percent() {
        let snapshot = with_power(500.0, 1000.0);

        let (low, source) = weekly_peak_series(&snapshot, &mut fixed(0.0));
        assert_eq!(source, SeriesSource::Synthesized);
        assert_eq!(low.labels.len(), 7);
        assert!(low.values.iter().all(|v| (*v - 700.0).abs() < 1e-9));

        let (high, _) = weekly_peak_series(&snapshot, &mut fixed(1.0));
        assert!(high.values.iter().all(|v| (*v - 1300.0).abs() < 1e-9));
    }

    #[test]
    fn test_relays_counted_from_states() {
        let snapshot = DashboardSnapshot {
            reles: vec![RelayState { estado: true }, RelayState { estado: false }, RelayState { estado: false }],
            ..Default::default()
        };
        let (data, source) = relay_series(&snapshot);

        assert_eq!(source, SeriesSource::Snapshot);
        assert_eq!(data.labels, vec!["Active relays", "Inactive relays"]);
        assert_eq!(data.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_per_relay_chart_series_ignored_for_counts() {
        let snapshot = DashboardSnapshot {
            reles: vec![RelayState { estado: true }, RelayState { estado: true }, RelayState { estado: false }],
            reles_chart: Some(LabeledSeries::new(&["Sala", "Quarto", "Cozinha"], &[1.0, 1.0, 0.0])),
            ..Default::default()
        };
        let (data, _) = relay_series(&snapshot);

        assert_eq!(data.values, vec![2.0, 1.0]);
    }

    #[test]
    fn test_two_value_chart_series_used_without_relays() {
        let snapshot = DashboardSnapshot {
            reles_chart: Some(LabeledSeries::new(&["Ativos", "Inativos"], &[3.0, 1.0])),
            ..Default::default()
        };
        let (data, source) = relay_series(&snapshot);

        assert_eq!(source, SeriesSource::Snapshot);
        assert_eq!(data.labels, vec!["Ativos", "Inativos"]);
    }

    #[test]
    fn test_no_relay_data_yields_empty_counts() {
        let (data, source) = relay_series(&DashboardSnapshot::default());

        assert_eq!(source, SeriesSource::Synthesized);
        assert_eq!(data.values, vec![0.0, 0.0]);
    }

    #[test]
    fn test_gauge_data_segments() {
        let gauge = Gauge { percent: 70.0, color: crate::kpi::GAUGE_AMBER };
        let data = gauge_data(&gauge);

        assert_eq!(data.values, vec![70.0, 30.0]);
        assert_eq!(
            data.colors,
            Some(vec!["#ff9800".to_string(), GAUGE_TRACK_COLOR.to_string()])
        );
    }
}
