//! Aggregate figures shown on the KPI cards and the usage gauge.
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::models::{DashboardSnapshot, PeakReading};
use crate::view::ViewPort;

const NO_TIME: &str = "--:--";
/// Combined limit assumed when neither meter reports one
const DEFAULT_COMBINED_LIMIT_W: f64 = 3000.0;

pub const GAUGE_GREEN: &str = "#4caf50";
pub const GAUGE_AMBER: &str = "#ff9800";
pub const GAUGE_RED: &str = "#f44336";

/// KPI cards that can be forced to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KpiKey {
    CurrentPower,
    TodayEnergy,
    TodayCost,
    PeakToday,
    PeakWeekly,
    PeakMonthly,
    Savings,
}

impl KpiKey {
    pub const ALL: [KpiKey; 7] = [
        KpiKey::CurrentPower,
        KpiKey::TodayEnergy,
        KpiKey::TodayCost,
        KpiKey::PeakToday,
        KpiKey::PeakWeekly,
        KpiKey::PeakMonthly,
        KpiKey::Savings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KpiKey::CurrentPower => "currentPower",
            KpiKey::TodayEnergy => "todayEnergy",
            KpiKey::TodayCost => "todayCost",
            KpiKey::PeakToday => "peakToday",
            KpiKey::PeakWeekly => "peakWeekly",
            KpiKey::PeakMonthly => "peakMonthly",
            KpiKey::Savings => "savings",
        }
    }

    /// Human readable name for the reset selector
    pub fn label(&self) -> &'static str {
        match self {
            KpiKey::CurrentPower => "Current power",
            KpiKey::TodayEnergy => "Energy balance",
            KpiKey::TodayCost => "Balance value",
            KpiKey::PeakToday => "Peak today",
            KpiKey::PeakWeekly => "Weekly peak",
            KpiKey::PeakMonthly => "Monthly peak",
            KpiKey::Savings => "Balance %",
        }
    }

    pub fn value_target(&self) -> &'static str {
        match self {
            KpiKey::CurrentPower => "kpi-current-power",
            KpiKey::TodayEnergy => "kpi-today-energy",
            KpiKey::TodayCost => "kpi-today-cost",
            KpiKey::PeakToday => "kpi-peak-today",
            KpiKey::PeakWeekly => "kpi-peak-weekly",
            KpiKey::PeakMonthly => "kpi-peak-monthly",
            KpiKey::Savings => "kpi-savings",
        }
    }

    pub fn time_target(&self) -> Option<&'static str> {
        match self {
            KpiKey::PeakToday => Some("kpi-peak-time"),
            KpiKey::PeakWeekly => Some("kpi-peak-weekly-time"),
            KpiKey::PeakMonthly => Some("kpi-peak-monthly-time"),
            _ => None,
        }
    }

    /// Text shown while the KPI is forced to zero
    pub fn zero_text(&self) -> &'static str {
        match self {
            KpiKey::CurrentPower
            | KpiKey::PeakToday
            | KpiKey::PeakWeekly
            | KpiKey::PeakMonthly => "0 W",
            KpiKey::TodayEnergy => "0 kWh",
            KpiKey::TodayCost => "MZN 0,00",
            KpiKey::Savings => "0%",
        }
    }
}

impl FromStr for KpiKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown KPI: {}", s))
    }
}

/// Selector value that flags every KPI
pub const RESET_ALL: &str = "all";

/// KPIs the user forced to zero; lives as long as the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiResetState {
    flagged: BTreeSet<KpiKey>,
}

impl KpiResetState {
    /// Flag the KPI(s) named by a selector option; returns what was flagged
    pub fn flag(&mut self, option: &str) -> Vec<KpiKey> {
        let keys: Vec<KpiKey> = if option == RESET_ALL {
            KpiKey::ALL.to_vec()
        } else {
            option.parse::<KpiKey>().into_iter().collect()
        };
        self.flagged.extend(keys.iter().copied());
        keys
    }

    pub fn is_flagged(&self, key: KpiKey) -> bool {
        self.flagged.contains(&key)
    }

    pub fn flagged(&self) -> impl Iterator<Item = KpiKey> + '_ {
        self.flagged.iter().copied()
    }
}

/// Usage of the combined meter limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub percent: f64,
    pub color: &'static str,
}

impl Gauge {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let limits = snapshot.meter(1).limite + snapshot.meter(2).limite;
        let max_power = if limits != 0.0 { limits } else { DEFAULT_COMBINED_LIMIT_W };
        let percent = (snapshot.total_power() / max_power * 100.0).min(100.0);

        Self {
            percent,
            color: gauge_color(percent),
        }
    }

    pub fn label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

fn gauge_color(percent: f64) -> &'static str {
    if percent > 80.0 {
        GAUGE_RED
    } else if percent > 60.0 {
        GAUGE_AMBER
    } else {
        GAUGE_GREEN
    }
}

/// Figures derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_power: f64,
    pub balance_kwh: f64,
    pub balance_value: f64,
    pub peak_today: (f64, String),
    pub peak_weekly: (f64, String),
    pub peak_monthly: (f64, String),
    pub gauge: Gauge,
}

impl Kpis {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let balance = snapshot.energia_atual.clone().unwrap_or_default();

        Self {
            total_power: snapshot.total_power(),
            balance_kwh: balance.saldo_kwh,
            balance_value: balance.valor_mzn,
            peak_today: peak(snapshot.peak_today.as_ref()),
            peak_weekly: peak(snapshot.peak_weekly.as_ref()),
            peak_monthly: peak(snapshot.peak_monthly.as_ref()),
            gauge: Gauge::from_snapshot(snapshot),
        }
    }

    /// Target and text for every KPI field
    fn texts(&self) -> Vec<(&'static str, String)> {
        let mut texts = vec![
            (KpiKey::CurrentPower.value_target(), format!("{:.1} W", self.total_power)),
            (KpiKey::TodayEnergy.value_target(), format!("{:.2} kWh", self.balance_kwh)),
            (KpiKey::TodayCost.value_target(), format!("MZN {:.2}", self.balance_value)),
            (KpiKey::Savings.value_target(), format!("{:.0}%", self.balance_kwh)),
        ];

        for (key, (value, time)) in [
            (KpiKey::PeakToday, &self.peak_today),
            (KpiKey::PeakWeekly, &self.peak_weekly),
            (KpiKey::PeakMonthly, &self.peak_monthly),
        ] {
            texts.push((key.value_target(), format!("{:.1} W", value)));
            if let Some(target) = key.time_target() {
                texts.push((target, time.clone()));
            }
        }

        texts
    }
}

fn peak(reading: Option<&PeakReading>) -> (f64, String) {
    match reading {
        Some(p) => (
            p.value,
            p.time.clone().unwrap_or_else(|| NO_TIME.to_string()),
        ),
        None => (0.0, NO_TIME.to_string()),
    }
}

/// Render every KPI, then re-apply the zero overrides
pub fn render_kpis<V: ViewPort + ?Sized>(
    view: &V,
    snapshot: &DashboardSnapshot,
    resets: &KpiResetState,
) -> Kpis {
    let kpis = Kpis::from_snapshot(snapshot);

    for (target, text) in kpis.texts() {
        view.set_text(target, &text);
    }

    view.set_title(KpiKey::Savings.value_target(), "Available energy balance");

    for key in resets.flagged() {
        write_zero(view, key);
    }

    kpis
}

/// Write the zero text(s) of one KPI
pub fn write_zero<V: ViewPort + ?Sized>(view: &V, key: KpiKey) {
    view.set_text(key.value_target(), key.zero_text());
    if let Some(target) = key.time_target() {
        view.set_text(target, NO_TIME);
    }
}

/// Handle the reset action: flag the selection and zero it right away
pub fn apply_reset<V: ViewPort + ?Sized>(
    view: &V,
    resets: &mut KpiResetState,
    option: &str,
) -> Vec<KpiKey> {
    let keys = resets.flag(option);
    for key in &keys {
        write_zero(view, *key);
    }
    log::info!("KPIs reset: {:?}", keys);
    keys
}
