use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number from a JSON number, numeric string or boolean; anything else is 0
fn number_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_of(&Value::deserialize(deserializer)?))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

/// Array elements as text; a non-array reads as absent
fn lenient_labels<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Array elements as numbers (see [`number_of`]); a non-array reads as absent
fn lenient_values<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.iter().map(number_of).collect()),
        _ => None,
    })
}

/// One PZEM power meter reading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterReading {
    #[serde(deserialize_with = "lenient_number")]
    pub voltage: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub current: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub power: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub energy: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub frequency: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub pf: f64,
    /// Configured alert limit in watts
    #[serde(deserialize_with = "lenient_number")]
    pub limite: f64,
    #[serde(deserialize_with = "lenient_bool")]
    pub conectado: bool,
}

/// Relay state as reported in the snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayState {
    #[serde(deserialize_with = "lenient_bool")]
    pub estado: bool,
}

/// Current energy balance and its monetary value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyBalance {
    #[serde(deserialize_with = "lenient_number")]
    pub saldo_kwh: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub valor_mzn: f64,
}

/// Peak power and when it happened
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakReading {
    #[serde(deserialize_with = "lenient_number")]
    pub value: f64,
    pub time: Option<String>,
}

/// Parallel label/value arrays backing one chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledSeries {
    #[serde(deserialize_with = "lenient_labels")]
    pub labels: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_values")]
    pub values: Option<Vec<f64>>,
}

impl LabeledSeries {
    pub fn new(labels: &[&str], values: &[f64]) -> Self {
        Self {
            labels: Some(labels.iter().map(|l| l.to_string()).collect()),
            values: Some(values.to_vec()),
        }
    }

    /// Both arrays present and positionally aligned
    pub fn aligned(&self) -> Option<(&[String], &[f64])> {
        match (&self.labels, &self.values) {
            (Some(labels), Some(values)) if labels.len() == values.len() => {
                Some((labels.as_slice(), values.as_slice()))
            }
            _ => None,
        }
    }
}

/// Consolidated read of all sensors, relays and KPIs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub pzem1: Option<MeterReading>,
    pub pzem2: Option<MeterReading>,
    #[serde(deserialize_with = "null_as_default")]
    pub reles: Vec<RelayState>,
    pub energia_atual: Option<EnergyBalance>,
    pub peak_today: Option<PeakReading>,
    pub peak_weekly: Option<PeakReading>,
    pub peak_monthly: Option<PeakReading>,
    pub historical: Option<LabeledSeries>,
    pub peaks: Option<LabeledSeries>,
    pub reles_chart: Option<LabeledSeries>,
}

impl DashboardSnapshot {
    /// Substitute used when the dashboard endpoint cannot be read
    pub fn fallback() -> Self {
        Self {
            pzem1: Some(MeterReading {
                voltage: 220.0,
                current: 0.5,
                power: 110.0,
                energy: 2.5,
                frequency: 50.0,
                pf: 0.98,
                limite: 1000.0,
                conectado: true,
            }),
            pzem2: Some(MeterReading {
                voltage: 220.0,
                current: 0.3,
                power: 66.0,
                energy: 1.8,
                frequency: 50.0,
                pf: 0.95,
                limite: 1000.0,
                conectado: true,
            }),
            reles: Vec::new(),
            historical: Some(LabeledSeries::new(
                &["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"],
                &[50.0, 30.0, 120.0, 180.0, 90.0, 150.0],
            )),
            peaks: Some(LabeledSeries::new(
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                &[800.0, 750.0, 900.0, 600.0, 850.0, 700.0, 950.0],
            )),
            ..Default::default()
        }
    }

    /// Meter by 1-based index; absent meters read as all-zero
    pub fn meter(&self, index: usize) -> MeterReading {
        let meter = match index {
            1 => self.pzem1.as_ref(),
            2 => self.pzem2.as_ref(),
            _ => None,
        };
        meter.cloned().unwrap_or_default()
    }

    pub fn total_power(&self) -> f64 {
        self.meter(1).power + self.meter(2).power
    }

    pub fn active_relays(&self) -> usize {
        self.reles.iter().filter(|r| r.estado).count()
    }
}
