//! Write access to the named targets of the dashboard page.
//!
//! Every render pass goes through [`ViewPort`], so the computations behind it
//! run unchanged against the DOM or against an in-memory recorder.

pub mod dom;
pub mod meters;

pub use dom::DomViewPort;
pub use meters::render_meter_readings;

/// Writes formatted values into named targets.
///
/// Each method returns `false` when the target does not exist; the port
/// reports the missing target and callers keep rendering the remaining ones.
pub trait ViewPort {
    fn set_text(&self, target: &str, text: &str) -> bool;
    fn set_class(&self, target: &str, class: &str) -> bool;
    fn set_style(&self, target: &str, property: &str, value: &str) -> bool;
    fn set_title(&self, target: &str, title: &str) -> bool;
    /// Replace all children of the target
    fn set_html(&self, target: &str, html: &str) -> bool;
}

/// Target identifiers shared by the renderers and the page markup
pub mod targets {
    pub const GAUGE_VALUE: &str = "gaugeValue";
    pub const ALERT_CONTAINER: &str = "alert-container";
    pub const LAST_UPDATE: &str = "last-update-time";

    pub const ENERGY_CHART: &str = "energyChart";
    pub const PEAK_CHART: &str = "peakChart";
    pub const RELAYS_CHART: &str = "relesChart";
    pub const GAUGE_CHART: &str = "gaugeChart";

    /// Target id of a per-meter field, e.g. `voltage-pzem1`
    pub fn meter_field(field: &str, meter: usize) -> String {
        format!("{}-pzem{}", field, meter)
    }

    /// Connection badge of a meter, e.g. `status-pzem-1`
    pub fn meter_status(meter: usize) -> String {
        format!("status-pzem-{}", meter)
    }
}

/// Minimal HTML escaping for text placed inside markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
