//! In-memory fakes shared by the unit tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::api::{ApiError, DashboardApi};
use crate::charts::{ChartData, ChartKind, ChartSurface};
use crate::export::ExportSink;
use crate::models::{DashboardSnapshot, ReportRow};
use crate::state::{Notifier, Severity};
use crate::view::ViewPort;

/// `/api/dashboard-data` body as the backend serializes it: relay records,
/// one boolean per relay in `reles_chart`, extra keys the dashboard ignores
pub const BACKEND_SNAPSHOT_JSON: &str = r#"{
    "pzem1": {"voltage": 229.4, "current": 5.236, "power": 1200.0, "energy": 12.345,
              "frequency": 50.0, "pf": 0.99, "limite": 1000, "conectado": true,
              "ultima_atualizacao": "Thu, 20 Nov 2025 10:42:00 GMT"},
    "pzem2": {"voltage": 0, "current": 0, "power": 0, "energy": 0, "frequency": 0,
              "pf": 0, "limite": 1000, "conectado": false, "ultima_atualizacao": null},
    "reles": [
        {"id": 1, "nome": "Sala", "pzem_id": 1, "estado": true, "prioridade": 1,
         "limite_individual": 500.0, "modo_automatico": true},
        {"id": 2, "nome": "Quarto", "pzem_id": 1, "estado": false, "prioridade": 2,
         "limite_individual": 300.0, "modo_automatico": false},
        {"id": 3, "nome": "Cozinha", "pzem_id": 2, "estado": true, "prioridade": 3,
         "limite_individual": null, "modo_automatico": true}
    ],
    "historical": {"labels": ["0:00", "1:00", "2:00"], "values": [1200.0, 1200.0, 1200.0]},
    "peaks": {"labels": ["Seg (17)", "Ter (18)", "Qua (19)", "Qui (20)", "Sex (21)", "Sáb (22)", "Dom (23)"],
              "values": [900.5, 1010.0, 0, 1200.0, 0, 0, 0]},
    "reles_chart": {"labels": ["Sala", "Quarto", "Cozinha"], "values": [true, false, true]},
    "peak_today": {"value": 1200.0, "time": "10:42", "pzem": 1},
    "peak_weekly": {"value": 1200.0, "time": "20/11 10:42", "pzem": 1},
    "peak_monthly": {"value": 1350.2, "time": "03/11 19:05", "pzem": 1},
    "energia_atual": {"saldo_kwh": 42.5, "valor_mzn": 31.88, "preco_kwh": 0.75},
    "savings": 15
}"#;

#[derive(Default)]
pub struct RecordingView {
    pub texts: RefCell<HashMap<String, String>>,
    pub classes: RefCell<HashMap<String, String>>,
    pub styles: RefCell<HashMap<String, String>>,
    pub titles: RefCell<HashMap<String, String>>,
    pub html: RefCell<HashMap<String, String>>,
    pub missing: HashSet<String>,
    /// Writes that hit a missing target, in order
    pub missed: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn without(targets: &[&str]) -> Self {
        Self {
            missing: targets.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn text(&self, target: &str) -> Option<String> {
        self.texts.borrow().get(target).cloned()
    }

    pub fn class(&self, target: &str) -> Option<String> {
        self.classes.borrow().get(target).cloned()
    }

    pub fn style(&self, target: &str, property: &str) -> Option<String> {
        self.styles.borrow().get(&format!("{}:{}", target, property)).cloned()
    }

    pub fn html_of(&self, target: &str) -> Option<String> {
        self.html.borrow().get(target).cloned()
    }

    pub fn misses(&self) -> Vec<String> {
        self.missed.borrow().clone()
    }

    fn write(&self, map: &RefCell<HashMap<String, String>>, key: String, target: &str, value: &str) -> bool {
        if self.missing.contains(target) {
            self.missed.borrow_mut().push(target.to_string());
            return false;
        }
        map.borrow_mut().insert(key, value.to_string());
        true
    }
}

impl ViewPort for RecordingView {
    fn set_text(&self, target: &str, text: &str) -> bool {
        self.write(&self.texts, target.to_string(), target, text)
    }

    fn set_class(&self, target: &str, class: &str) -> bool {
        self.write(&self.classes, target.to_string(), target, class)
    }

    fn set_style(&self, target: &str, property: &str, value: &str) -> bool {
        self.write(&self.styles, format!("{}:{}", target, property), target, value)
    }

    fn set_title(&self, target: &str, title: &str) -> bool {
        self.write(&self.titles, target.to_string(), target, title)
    }

    fn set_html(&self, target: &str, html: &str) -> bool {
        self.write(&self.html, target.to_string(), target, html)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn severities(&self) -> Vec<Severity> {
        self.messages.borrow().iter().map(|(_, s)| *s).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages.borrow_mut().push((message.to_string(), severity));
    }
}

/// Chart stand-in that remembers which instance it is and what it was given
#[derive(Debug)]
pub struct FakeChart {
    pub instance: u32,
    pub kind: ChartKind,
    pub applied: Vec<ChartData>,
}

impl ChartSurface for FakeChart {
    fn apply(&mut self, data: &ChartData) {
        self.applied.push(data.clone());
    }
}

pub fn fake_chart_factory() -> impl FnMut(ChartKind) -> Option<FakeChart> {
    let mut next = 0;
    move |kind| {
        next += 1;
        Some(FakeChart {
            instance: next,
            kind,
            applied: Vec::new(),
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub downloads: RefCell<Vec<(String, String, String)>>,
    pub printed: RefCell<Vec<String>>,
}

impl ExportSink for RecordingSink {
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), crate::export::ExportError> {
        self.downloads
            .borrow_mut()
            .push((filename.to_string(), mime.to_string(), content.to_string()));
        Ok(())
    }

    fn print_html(&self, html: &str) -> Result<(), crate::export::ExportError> {
        self.printed.borrow_mut().push(html.to_string());
        Ok(())
    }
}

/// Future that is pending exactly once
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Scripted backend
pub struct FakeApi {
    pub snapshot: Result<DashboardSnapshot, ApiError>,
    pub rows: Vec<ReportRow>,
    pub snapshot_calls: Cell<u32>,
    /// Suspend once inside every snapshot fetch
    pub yield_on_fetch: bool,
}

impl FakeApi {
    pub fn returning(snapshot: DashboardSnapshot) -> Self {
        Self {
            snapshot: Ok(snapshot),
            rows: Vec::new(),
            snapshot_calls: Cell::new(0),
            yield_on_fetch: false,
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            snapshot: Err(error),
            rows: Vec::new(),
            snapshot_calls: Cell::new(0),
            yield_on_fetch: false,
        }
    }
}

impl DashboardApi for FakeApi {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ApiError> {
        self.snapshot_calls.set(self.snapshot_calls.get() + 1);
        if self.yield_on_fetch {
            YieldOnce(false).await;
        }
        self.snapshot.clone()
    }

    async fn fetch_historical_series(&self, _period: &str, _device: &str) -> Vec<ReportRow> {
        self.rows.clone()
    }
}
