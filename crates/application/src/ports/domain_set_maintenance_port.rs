use async_trait::async_trait;
use ferrous_route_domain::{DomainError, PersistOutcome};

/// Outcome of a transient sweep cycle.
#[derive(Debug, Default, Clone)]
pub struct SweepOutcome {
    pub entries_removed: usize,
    pub transient_size: usize,
}

/// Port for periodic upkeep of the domain sets (flush + sweep).
#[async_trait]
pub trait DomainSetMaintenancePort: Send + Sync {
    /// Write changed learned sets to disk.
    async fn run_flush_cycle(&self) -> Result<PersistOutcome, DomainError>;

    /// Drop expired transient entries to reclaim memory.
    async fn run_sweep_cycle(&self) -> Result<SweepOutcome, DomainError>;
}
