use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use hiring_ai::config::AppConfig;
use hiring_ai::notify::{CsvLedger, LoggingMailer};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Gateways shared by every workflow service. Both adapt to missing
/// configuration by skipping instead of failing.
pub(crate) struct Gateways {
    pub(crate) mailer: Arc<LoggingMailer>,
    pub(crate) ledger: Arc<CsvLedger>,
}

pub(crate) fn build_gateways(config: &AppConfig) -> Gateways {
    Gateways {
        mailer: Arc::new(LoggingMailer::new(&config.notifications)),
        ledger: Arc::new(CsvLedger::new(&config.ledger)),
    }
}
