use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::charts::{ChartJs, ChartManager};
use crate::kpi::KpiResetState;
use crate::models::ReportDataset;

/// Single-flight guard for the refresh cycle.
///
/// A request made while a cycle runs is queued; any number of such requests
/// collapse into one extra cycle.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RefreshGate {
    in_flight: bool,
    queued: bool,
}

impl RefreshGate {
    /// `true` if the caller should run a cycle now
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            self.queued = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Called when a cycle ends; `true` if a queued cycle should run next
    pub fn finish(&mut self) -> bool {
        if self.queued {
            self.queued = false;
            true
        } else {
            self.in_flight = false;
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

/// The report offered for export; replaced wholesale by each generation
#[derive(Debug, Default, Clone)]
pub struct ReportStore {
    current: Option<ReportDataset>,
}

impl ReportStore {
    pub fn replace(&mut self, dataset: ReportDataset) {
        self.current = Some(dataset);
    }

    pub fn current(&self) -> Option<&ReportDataset> {
        self.current.as_ref()
    }
}

/// Everything the page mutates between refreshes
pub struct DashboardSession<C> {
    pub charts: ChartManager<C>,
    pub kpi_resets: KpiResetState,
    pub reports: ReportStore,
    pub gate: RefreshGate,
}

impl<C> Default for DashboardSession<C> {
    fn default() -> Self {
        Self {
            charts: ChartManager::default(),
            kpi_resets: KpiResetState::default(),
            reports: ReportStore::default(),
            gate: RefreshGate::default(),
        }
    }
}

/// Session shared by the dashboard and reports pages
pub type SessionHandle = Rc<RefCell<DashboardSession<ChartJs>>>;

/// Provide the session context at the app root
pub fn provide_session_context() {
    let session: SessionHandle = Rc::new(RefCell::new(DashboardSession::default()));
    provide_context(session);
}

/// Hook to access the session
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("DashboardSession must be provided by a parent component")
}
