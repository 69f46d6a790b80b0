use crate::DomainSetMaintenanceJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct JobRunner {
    domain_set_maintenance: Option<DomainSetMaintenanceJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            domain_set_maintenance: None,
            shutdown: None,
        }
    }

    pub fn with_domain_set_maintenance(mut self, job: DomainSetMaintenanceJob) -> Self {
        self.domain_set_maintenance = Some(job);
        self
    }

    /// Every job started by this runner stops when `token` is cancelled.
    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.domain_set_maintenance {
            let job = match &self.shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
