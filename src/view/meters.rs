use super::targets::{meter_field, meter_status};
use super::ViewPort;
use crate::models::{DashboardSnapshot, MeterReading};

pub const METER_COUNT: usize = 2;

/// Write both meters' readings and connection badges
pub fn render_meter_readings<V: ViewPort + ?Sized>(view: &V, snapshot: &DashboardSnapshot) {
    for index in 1..=METER_COUNT {
        let meter = snapshot.meter(index);
        for (target, text) in meter_fields(index, &meter) {
            view.set_text(&target, &text);
        }

        let status = meter_status(index);
        let (label, class) = if meter.conectado {
            ("Connected", "badge bg-success")
        } else {
            ("Disconnected", "badge bg-danger")
        };
        // A missing badge is reported once, by the text write
        if view.set_text(&status, label) {
            view.set_class(&status, class);
        }
    }
}

/// Target and formatted text for every numeric field of one meter
fn meter_fields(index: usize, meter: &MeterReading) -> [(String, String); 7] {
    [
        (meter_field("voltage", index), format!("{:.1} V", meter.voltage)),
        (meter_field("current", index), format!("{:.3} A", meter.current)),
        (meter_field("power", index), format!("{:.1} W", meter.power)),
        (meter_field("energy", index), format!("{:.3} kWh", meter.energy)),
        (meter_field("frequency", index), format!("{:.1} Hz", meter.frequency)),
        (meter_field("pf", index), format!("{:.2}", meter.pf)),
        (meter_field("limit", index), format!("{:.0} W", meter.limite)),
    ]
}
