use ferrous_route_application::ports::DomainSetMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_FLUSH_INTERVAL_SECS: u64 = 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

/// Periodically writes changed learned lists and sweeps expired transient
/// entries. Both loops stop when the cancellation token fires.
pub struct DomainSetMaintenanceJob {
    maintenance: Arc<dyn DomainSetMaintenancePort>,
    flush_interval_secs: u64,
    sweep_interval_secs: u64,
    shutdown: CancellationToken,
}

impl DomainSetMaintenanceJob {
    pub fn new(maintenance: Arc<dyn DomainSetMaintenancePort>) -> Self {
        Self {
            maintenance,
            flush_interval_secs: DEFAULT_FLUSH_INTERVAL_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_intervals(mut self, flush_secs: u64, sweep_secs: u64) -> Self {
        self.flush_interval_secs = flush_secs;
        self.sweep_interval_secs = sweep_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            flush_interval_secs = self.flush_interval_secs,
            sweep_interval_secs = self.sweep_interval_secs,
            "Starting domain set maintenance background jobs"
        );

        let flush_job = Arc::clone(&self);
        let flush_shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(flush_job.flush_interval_secs));
            // The first tick completes immediately; nothing can be dirty yet.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = flush_shutdown.cancelled() => {
                        info!("DomainSetMaintenanceJob (flush): shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match flush_job.maintenance.run_flush_cycle().await {
                            Ok(outcome) => {
                                if outcome.wrote_any() {
                                    info!(
                                        blocked_written = outcome.blocked_written,
                                        direct_written = outcome.direct_written,
                                        "Domain list flush cycle completed"
                                    );
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "Domain list flush cycle failed");
                            }
                        }
                    }
                }
            }
        });

        let sweep_job = Arc::clone(&self);
        let sweep_shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(sweep_job.sweep_interval_secs));
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = sweep_shutdown.cancelled() => {
                        info!("DomainSetMaintenanceJob (sweep): shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match sweep_job.maintenance.run_sweep_cycle().await {
                            Ok(outcome) => {
                                if outcome.entries_removed > 0 {
                                    info!(
                                        entries_removed = outcome.entries_removed,
                                        transient_size = outcome.transient_size,
                                        "Transient sweep cycle completed"
                                    );
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "Transient sweep cycle failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
