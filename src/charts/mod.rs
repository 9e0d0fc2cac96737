pub mod chartjs;
pub mod series;

pub use chartjs::ChartJs;
pub use series::SeriesSource;

use crate::kpi::Gauge;
use crate::models::{DashboardSnapshot, ReportRow};
use crate::view::{targets, ViewPort};

/// The four dashboard visualizations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// 24h energy line
    Energy,
    /// 7-day peak bars
    WeeklyPeaks,
    /// Relay active/inactive donut
    Relays,
    /// Half-circle usage gauge
    Gauge,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Energy,
        ChartKind::WeeklyPeaks,
        ChartKind::Relays,
        ChartKind::Gauge,
    ];

    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::Energy => targets::ENERGY_CHART,
            ChartKind::WeeklyPeaks => targets::PEAK_CHART,
            ChartKind::Relays => targets::RELAYS_CHART,
            ChartKind::Gauge => targets::GAUGE_CHART,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Energy => "energy",
            ChartKind::WeeklyPeaks => "peaks",
            ChartKind::Relays => "relays",
            ChartKind::Gauge => "gauge",
        }
    }
}

/// Labels and values pushed into a chart, plus optional segment colors
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Option<Vec<String>>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            colors: None,
        }
    }
}

/// A live chart instance that can take new data in place
pub trait ChartSurface {
    /// Replace labels/data (and colors when given), then redraw
    fn apply(&mut self, data: &ChartData);
}

/// Sources used by one chart pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPass {
    pub energy: SeriesSource,
    pub peaks: SeriesSource,
    pub relays: SeriesSource,
}

/// Owns one persistent instance per visualization
pub struct ChartManager<C> {
    energy: Option<C>,
    peaks: Option<C>,
    relays: Option<C>,
    gauge: Option<C>,
}

impl<C> Default for ChartManager<C> {
    fn default() -> Self {
        Self {
            energy: None,
            peaks: None,
            relays: None,
            gauge: None,
        }
    }
}

impl<C: ChartSurface> ChartManager<C> {
    /// Create the instances; a kind the factory cannot build stays empty
    pub fn attach<F>(mut create: F) -> Self
    where
        F: FnMut(ChartKind) -> Option<C>,
    {
        let mut build = |kind: ChartKind| {
            let chart = create(kind);
            if chart.is_none() {
                log::warn!("Chart canvas {} not available", kind.canvas_id());
            }
            chart
        };

        Self {
            energy: build(ChartKind::Energy),
            peaks: build(ChartKind::WeeklyPeaks),
            relays: build(ChartKind::Relays),
            gauge: build(ChartKind::Gauge),
        }
    }

    pub fn get(&self, kind: ChartKind) -> Option<&C> {
        match kind {
            ChartKind::Energy => self.energy.as_ref(),
            ChartKind::WeeklyPeaks => self.peaks.as_ref(),
            ChartKind::Relays => self.relays.as_ref(),
            ChartKind::Gauge => self.gauge.as_ref(),
        }
    }

    /// Push this refresh's data into every attached chart
    pub fn update<V: ViewPort + ?Sized>(
        &mut self,
        view: &V,
        snapshot: &DashboardSnapshot,
        live_rows: &[ReportRow],
        random: &mut dyn FnMut() -> f64,
    ) -> ChartPass {
        let (energy, energy_source) = series::energy_series(snapshot, live_rows, random);
        if let Some(chart) = self.energy.as_mut() {
            chart.apply(&energy);
        }

        let (peaks, peaks_source) = series::weekly_peak_series(snapshot, random);
        if let Some(chart) = self.peaks.as_mut() {
            chart.apply(&peaks);
        }

        let (relays, relays_source) = series::relay_series(snapshot);
        if let Some(chart) = self.relays.as_mut() {
            chart.apply(&relays);
        }

        let gauge = Gauge::from_snapshot(snapshot);
        if let Some(chart) = self.gauge.as_mut() {
            chart.apply(&series::gauge_data(&gauge));
        }
        view.set_text(targets::GAUGE_VALUE, &gauge.label());
        view.set_style(targets::GAUGE_VALUE, "color", gauge.color);

        log::debug!(
            "Charts updated (energy: {:?}, peaks: {:?}, relays: {:?})",
            energy_source,
            peaks_source,
            relays_source
        );

        ChartPass {
            energy: energy_source,
            peaks: peaks_source,
            relays: relays_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fake_chart_factory, FakeChart, RecordingView};

    #[test]
    fn test_attach_builds_one_instance_per_kind() {
        let charts: ChartManager<FakeChart> = ChartManager::attach(fake_chart_factory());

        for kind in ChartKind::ALL {
            assert_eq!(charts.get(kind).map(|c| c.kind), Some(kind));
        }
    }

    #[test]
    fn test_missing_canvas_leaves_slot_empty() {
        let mut factory = fake_chart_factory();
        let mut charts: ChartManager<FakeChart> = ChartManager::attach(|kind| match kind {
            ChartKind::Relays => None,
            other => factory(other),
        });
        let view = RecordingView::default();

        charts.update(&view, &DashboardSnapshot::fallback(), &[], &mut || 0.5);

        assert!(charts.get(ChartKind::Relays).is_none());
        assert_eq!(charts.get(ChartKind::Energy).unwrap().applied.len(), 1);
    }

    #[test]
    fn test_refresh_keeps_instances() {
        let mut charts: ChartManager<FakeChart> = ChartManager::attach(fake_chart_factory());
        let view = RecordingView::default();
        let before: Vec<u32> = ChartKind::ALL
            .iter()
            .map(|k| charts.get(*k).unwrap().instance)
            .collect();

        for _ in 0..3 {
            charts.update(&view, &DashboardSnapshot::fallback(), &[], &mut || 0.5);
        }

        let after: Vec<u32> = ChartKind::ALL
            .iter()
            .map(|k| charts.get(*k).unwrap().instance)
            .collect();
        assert_eq!(before, after);
        assert_eq!(charts.get(ChartKind::Gauge).unwrap().applied.len(), 3);
    }

    #[test]
    fn test_gauge_label_mirrors_chart() {
        let mut charts: ChartManager<FakeChart> = ChartManager::attach(fake_chart_factory());
        let view = RecordingView::default();

        charts.update(&view, &DashboardSnapshot::fallback(), &[], &mut || 0.0);

        let gauge = charts.get(ChartKind::Gauge).unwrap().applied[0].clone();
        assert_eq!(gauge.colors.unwrap()[0], crate::kpi::GAUGE_GREEN);
        assert_eq!(view.text(targets::GAUGE_VALUE).as_deref(), Some("9%"));
        assert_eq!(
            view.style(targets::GAUGE_VALUE, "color").as_deref(),
            Some(crate::kpi::GAUGE_GREEN)
        );
    }
}
