use super::DomainClassifier;
use async_trait::async_trait;
use ferrous_route_application::ports::{DomainSetMaintenancePort, SweepOutcome};
use ferrous_route_domain::{DomainError, PersistOutcome};
use std::sync::Arc;
use tracing::debug;

/// Runs classifier upkeep off the async runtime's worker threads.
pub struct DomainSetMaintenance {
    classifier: Arc<DomainClassifier>,
}

impl DomainSetMaintenance {
    pub fn new(classifier: Arc<DomainClassifier>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl DomainSetMaintenancePort for DomainSetMaintenance {
    async fn run_flush_cycle(&self) -> Result<PersistOutcome, DomainError> {
        let classifier = Arc::clone(&self.classifier);
        tokio::task::spawn_blocking(move || classifier.persist())
            .await
            .map_err(|e| {
                debug!(error = %e, "Flush task panicked");
                DomainError::TaskFailed(e.to_string())
            })?
    }

    async fn run_sweep_cycle(&self) -> Result<SweepOutcome, DomainError> {
        let classifier = Arc::clone(&self.classifier);
        let removed = tokio::task::spawn_blocking(move || classifier.compact_transient())
            .await
            .map_err(|e| {
                debug!(error = %e, "Sweep task panicked");
                DomainError::TaskFailed(e.to_string())
            })?;

        Ok(SweepOutcome {
            entries_removed: removed,
            transient_size: self.classifier.transient_len(),
        })
    }
}
