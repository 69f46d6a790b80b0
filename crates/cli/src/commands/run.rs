use ferrous_route_domain::Config;
use ferrous_route_infrastructure::{DomainClassifier, DomainSetMaintenance};
use ferrous_route_jobs::{DomainSetMaintenanceJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Keeps the classifier's lists maintained until Ctrl-C, then saves them.
pub async fn run(config: &Config, classifier: Arc<DomainClassifier>) -> anyhow::Result<()> {
    let stats = classifier.stats();
    info!(
        always_direct = stats.always_direct,
        always_blocked = stats.always_blocked,
        learned_direct = stats.learned_direct,
        learned_blocked = stats.learned_blocked,
        always_conflicts = stats.always_conflicts,
        "Routing with loaded domain sets"
    );

    let shutdown = CancellationToken::new();

    let maintenance = Arc::new(DomainSetMaintenance::new(Arc::clone(&classifier)));
    let job = DomainSetMaintenanceJob::new(maintenance).with_intervals(
        config.maintenance.flush_interval_secs,
        config.maintenance.sweep_interval_secs,
    );

    JobRunner::new()
        .with_domain_set_maintenance(job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();

    let flushed = tokio::task::spawn_blocking(move || classifier.persist()).await?;
    if let Err(e) = flushed {
        error!(error = %e, "Final flush failed");
        return Err(e.into());
    }

    info!("Shutdown complete");
    Ok(())
}
