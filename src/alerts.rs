//! Threshold checks over a snapshot and the alert list they produce.
use crate::models::{DashboardSnapshot, MeterReading};
use crate::view::{escape_html, targets, ViewPort};

const VOLTAGE_NORMAL: (f64, f64) = (200.0, 240.0);
const VOLTAGE_CRITICAL: (f64, f64) = (180.0, 250.0);
const CURRENT_CEILING_A: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Danger,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Danger => "danger",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertSeverity::Danger => "bi-exclamation-triangle-fill",
            AlertSeverity::Warning => "bi-exclamation-circle-fill",
            AlertSeverity::Info => "bi-info-circle-fill",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub severity: AlertSeverity,
    /// 1 is the most urgent
    pub priority: u8,
}

impl Alert {
    fn new(message: String, severity: AlertSeverity, priority: u8) -> Self {
        Self {
            message,
            severity,
            priority,
        }
    }
}

/// Evaluate every rule; the result is ordered by priority, ties in rule order
pub fn evaluate_alerts(snapshot: Option<&DashboardSnapshot>) -> Vec<Alert> {
    let meters = snapshot.and_then(|s| Some((s.pzem1.as_ref()?, s.pzem2.as_ref()?)));

    let mut alerts = match meters {
        None => vec![Alert::new(
            "Dados dos sensores não disponíveis. Verifique a conexão.".to_string(),
            AlertSeverity::Danger,
            1,
        )],
        Some((pzem1, pzem2)) => {
            let mut alerts = meter_alerts("PZEM 001", pzem1);
            alerts.extend(meter_alerts("PZEM 002", pzem2));
            alerts
        }
    };

    // sort_by_key is stable
    alerts.sort_by_key(|a| a.priority);
    alerts
}

fn meter_alerts(name: &str, meter: &MeterReading) -> Vec<Alert> {
    if !meter.conectado {
        return vec![Alert::new(
            format!("{} desconectado!", name),
            AlertSeverity::Danger,
            1,
        )];
    }

    let mut alerts = Vec::new();

    if meter.power > meter.limite {
        alerts.push(Alert::new(
            format!("{} acima do limite! {:.1}W > {}W", name, meter.power, meter.limite),
            AlertSeverity::Danger,
            1,
        ));
    }
    if outside(meter.voltage, VOLTAGE_NORMAL) {
        alerts.push(Alert::new(
            format!(
                "Tensão {} anormal: {:.1}V (faixa normal: 200-240V)",
                name, meter.voltage
            ),
            AlertSeverity::Warning,
            3,
        ));
    }
    if outside(meter.voltage, VOLTAGE_CRITICAL) {
        alerts.push(Alert::new(
            format!("TENSÃO CRÍTICA {}: {:.1}V!", name, meter.voltage),
            AlertSeverity::Danger,
            1,
        ));
    }
    if meter.current > CURRENT_CEILING_A {
        alerts.push(Alert::new(
            format!("Corrente alta no {}: {:.3}A", name, meter.current),
            AlertSeverity::Warning,
            2,
        ));
    }

    alerts
}

fn outside(value: f64, (low, high): (f64, f64)) -> bool {
    value < low || value > high
}

/// Markup for the alert container; danger entries pulse
pub fn alerts_html(alerts: &[Alert]) -> String {
    alerts
        .iter()
        .map(|alert| {
            let pulse = if alert.severity == AlertSeverity::Danger {
                " animate-pulse"
            } else {
                ""
            };
            format!(
                "<div class=\"alert alert-{} alert-custom alert-dismissible fade show{}\" role=\"alert\">\
                 <i class=\"bi {} me-2\"></i>{}\
                 <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" aria-label=\"Close\"></button>\
                 </div>",
                alert.severity.as_str(),
                pulse,
                alert.severity.icon(),
                escape_html(&alert.message)
            )
        })
        .collect()
}

/// Replace whatever alerts are shown with this set
pub fn render_alerts<V: ViewPort + ?Sized>(view: &V, alerts: &[Alert]) {
    if !view.set_html(targets::ALERT_CONTAINER, &alerts_html(alerts)) {
        log::warn!("Alert container not found; {} alert(s) not shown", alerts.len());
    }
}
