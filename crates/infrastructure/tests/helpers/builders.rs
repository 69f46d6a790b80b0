#![allow(dead_code)]
use ferrous_route_application::ports::DomainListStore;
use ferrous_route_domain::{DomainError, DomainListPaths, RouteTarget, RoutingConfig};
use ferrous_route_infrastructure::repositories::domain_list_repository::store_domain_list;
use ferrous_route_infrastructure::{
    DomainClassifier, FileDomainListStore, ManualClock, SeedLists,
};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

pub fn target(host: &str) -> RouteTarget {
    RouteTarget::parse(host).unwrap()
}

pub struct ClassifierBuilder {
    dir: TempDir,
    routing: RoutingConfig,
    seeds: SeedLists,
    clock: ManualClock,
    store: Option<Arc<dyn DomainListStore>>,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            routing: RoutingConfig::default(),
            seeds: SeedLists::default(),
            clock: ManualClock::new(),
            store: None,
        }
    }

    pub fn update_blocked(mut self, enabled: bool) -> Self {
        self.routing.update_blocked = enabled;
        self
    }

    pub fn update_direct(mut self, enabled: bool) -> Self {
        self.routing.update_direct = enabled;
        self
    }

    pub fn transient_ttl_secs(mut self, secs: u64) -> Self {
        self.routing.transient_ttl_secs = secs;
        self
    }

    pub fn seed_blocked(mut self, domains: &[&str]) -> Self {
        self.seeds.blocked = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn seed_direct(mut self, domains: &[&str]) -> Self {
        self.seeds.direct = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn blocked_file(self, domains: &[&str]) -> Self {
        let path = self.paths().blocked;
        write_list(&path, domains);
        self
    }

    pub fn raw_blocked_file(self, content: &[u8]) -> Self {
        std::fs::write(self.paths().blocked, content).unwrap();
        self
    }

    pub fn direct_file(self, domains: &[&str]) -> Self {
        let path = self.paths().direct;
        write_list(&path, domains);
        self
    }

    pub fn always_blocked_file(self, domains: &[&str]) -> Self {
        let path = self.paths().always_blocked;
        write_list(&path, domains);
        self
    }

    pub fn always_direct_file(self, domains: &[&str]) -> Self {
        let path = self.paths().always_direct;
        write_list(&path, domains);
        self
    }

    pub fn store(mut self, store: Arc<dyn DomainListStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn paths(&self) -> DomainListPaths {
        DomainListPaths::in_dir(self.dir.path())
    }

    /// Keeps the temp dir alive alongside the classifier.
    pub fn build(self) -> Fixture {
        self.try_build().unwrap()
    }

    pub fn try_build(self) -> Result<Fixture, DomainError> {
        let paths = self.paths();
        let store: Arc<dyn DomainListStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileDomainListStore::new()),
        };
        let classifier = DomainClassifier::load_with_clock(
            self.routing,
            paths.clone(),
            self.seeds,
            store,
            Arc::new(self.clock.clone()),
        )?;

        Ok(Fixture {
            classifier: Arc::new(classifier),
            clock: self.clock,
            paths,
            _dir: self.dir,
        })
    }
}

pub struct Fixture {
    pub classifier: Arc<DomainClassifier>,
    pub clock: ManualClock,
    pub paths: DomainListPaths,
    _dir: TempDir,
}

fn write_list(path: &Path, domains: &[&str]) {
    store_domain_list(path, domains.iter().map(|d| d.to_string()).collect()).unwrap();
}

/// Delegates to the file store until told to fail writes.
pub struct FailingDomainListStore {
    inner: FileDomainListStore,
    fail_writes: AtomicBool,
    write_calls: AtomicU64,
}

impl FailingDomainListStore {
    pub fn new() -> Self {
        Self {
            inner: FileDomainListStore::new(),
            fail_writes: AtomicBool::new(false),
            write_calls: AtomicU64::new(0),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    pub fn write_calls(&self) -> u64 {
        self.write_calls.load(Ordering::Relaxed)
    }
}

impl DomainListStore for FailingDomainListStore {
    fn load_domain_list(&self, path: &Path) -> Result<Vec<String>, DomainError> {
        self.inner.load_domain_list(path)
    }

    fn store_domain_list(&self, path: &Path, names: Vec<String>) -> Result<(), DomainError> {
        self.write_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(DomainError::io(path.display().to_string(), "disk full"));
        }
        self.inner.store_domain_list(path, names)
    }
}
