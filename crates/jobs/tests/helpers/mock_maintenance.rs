use async_trait::async_trait;
use ferrous_route_application::ports::{DomainSetMaintenancePort, SweepOutcome};
use ferrous_route_domain::{DomainError, PersistOutcome};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub struct MockDomainSetMaintenancePort {
    flush_call_count: Arc<AtomicU64>,
    sweep_call_count: Arc<AtomicU64>,
    should_fail_flush: Arc<AtomicBool>,
    should_fail_sweep: Arc<AtomicBool>,
    flush_outcome: PersistOutcome,
    sweep_outcome: SweepOutcome,
}

#[allow(dead_code)]
impl MockDomainSetMaintenancePort {
    pub fn new() -> Self {
        Self {
            flush_call_count: Arc::new(AtomicU64::new(0)),
            sweep_call_count: Arc::new(AtomicU64::new(0)),
            should_fail_flush: Arc::new(AtomicBool::new(false)),
            should_fail_sweep: Arc::new(AtomicBool::new(false)),
            flush_outcome: PersistOutcome::default(),
            sweep_outcome: SweepOutcome::default(),
        }
    }

    pub fn with_flush_outcome(mut self, outcome: PersistOutcome) -> Self {
        self.flush_outcome = outcome;
        self
    }

    pub fn with_sweep_outcome(mut self, outcome: SweepOutcome) -> Self {
        self.sweep_outcome = outcome;
        self
    }

    pub fn flush_call_count(&self) -> u64 {
        self.flush_call_count.load(Ordering::Relaxed)
    }

    pub fn sweep_call_count(&self) -> u64 {
        self.sweep_call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail_flush(&self, fail: bool) {
        self.should_fail_flush.store(fail, Ordering::Relaxed);
    }

    pub fn set_should_fail_sweep(&self, fail: bool) {
        self.should_fail_sweep.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl DomainSetMaintenancePort for MockDomainSetMaintenancePort {
    async fn run_flush_cycle(&self) -> Result<PersistOutcome, DomainError> {
        self.flush_call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail_flush.load(Ordering::Relaxed) {
            return Err(DomainError::io("blocked", "mock flush failure"));
        }
        Ok(self.flush_outcome)
    }

    async fn run_sweep_cycle(&self) -> Result<SweepOutcome, DomainError> {
        self.sweep_call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail_sweep.load(Ordering::Relaxed) {
            return Err(DomainError::TaskFailed("mock sweep failure".into()));
        }
        Ok(self.sweep_outcome.clone())
    }
}
