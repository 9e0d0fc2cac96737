//! The refresh cycle: fetch, then render meters, KPIs, charts and alerts.
use std::cell::RefCell;

use crate::alerts::{evaluate_alerts, render_alerts};
use crate::api::{ApiError, DashboardApi};
use crate::charts::ChartSurface;
use crate::kpi::render_kpis;
use crate::models::DashboardSnapshot;
use crate::state::{DashboardSession, Notifier, Severity};
use crate::view::{render_meter_readings, targets, ViewPort};

/// Period and meter filter of the live 24h series
const HISTORY_PERIOD: &str = "today";
const HISTORY_DEVICE: &str = "all";

/// User-facing message for a failed snapshot request
pub fn error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network(_) | ApiError::Timeout(_) => {
            "Connection error with the server. Check that the server is running."
        }
        ApiError::Unauthorized | ApiError::Http { status: 401 | 403, .. } => {
            "Authentication error. Please log in again."
        }
        ApiError::Http { status: 404, .. } => "Endpoint not found. Check the API URL.",
        _ => "Error loading dashboard data",
    }
}

/// Everything one refresh needs, borrowed from the page
pub struct RefreshCycle<'a, A, V: ?Sized, N: ?Sized, C> {
    pub api: &'a A,
    pub view: &'a V,
    pub notifier: &'a N,
    pub session: &'a RefCell<DashboardSession<C>>,
    /// Jitter source in [0, 1) for synthesized chart points
    pub random: fn() -> f64,
    /// Wall-clock text for the last-update stamp
    pub clock: fn() -> String,
}

impl<'a, A, V, N, C> RefreshCycle<'a, A, V, N, C>
where
    A: DashboardApi,
    V: ViewPort + ?Sized,
    N: Notifier + ?Sized,
    C: ChartSurface,
{
    /// Refresh, or queue behind the refresh in flight.
    ///
    /// Returns the number of cycles this call ran; a queued call returns 0
    /// and its cycle is run by the caller already in flight.
    pub async fn refresh(&self) -> u32 {
        if !self.session.borrow_mut().gate.begin() {
            log::debug!("Refresh already running, queued");
            return 0;
        }

        let mut cycles = 0;
        loop {
            self.run_once().await;
            cycles += 1;
            if !self.session.borrow_mut().gate.finish() {
                break;
            }
        }
        cycles
    }

    async fn run_once(&self) {
        let snapshot = match self.api.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("Failed to load dashboard data: {}", e);
                self.notifier.notify(error_message(&e), Severity::Danger);
                DashboardSnapshot::fallback()
            }
        };
        if snapshot.pzem1.is_none() || snapshot.pzem2.is_none() {
            log::warn!("Incomplete meter data in snapshot");
        }

        render_meter_readings(self.view, &snapshot);
        render_kpis(self.view, &snapshot, &self.session.borrow().kpi_resets);

        let rows = self
            .api
            .fetch_historical_series(HISTORY_PERIOD, HISTORY_DEVICE)
            .await;
        let mut random = self.random;
        self.session
            .borrow_mut()
            .charts
            .update(self.view, &snapshot, &rows, &mut random);

        render_alerts(self.view, &evaluate_alerts(Some(&snapshot)));
        self.view.set_text(targets::LAST_UPDATE, &(self.clock)());

        log::debug!("Dashboard refreshed");
    }
}
