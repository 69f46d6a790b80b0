use crate::clock::{Clock, MonotonicClock};
use crate::domain_set::{ConcurrentDomainSet, ExpiringDomainSet};
use ferrous_route_application::ports::{DomainListStore, RouteClassifierPort};
use ferrous_route_domain::route_target::has_port;
use ferrous_route_domain::{
    DomainError, DomainListPaths, DomainSetKind, PersistOutcome, RecordOutcome, RouteDecision,
    RouteSource, RouteTarget, RoutingConfig,
};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Learned entries known before any list file is read. Consumed by `load`.
#[derive(Debug, Default, Clone)]
pub struct SeedLists {
    pub blocked: Vec<String>,
    pub direct: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DomainSetStats {
    pub always_direct: usize,
    pub always_blocked: usize,
    pub learned_direct: usize,
    pub learned_blocked: usize,
    pub transient_blocked: usize,
    /// Names dropped from always-direct at load because always-blocked also had them.
    pub always_conflicts: usize,
}

/// Decides whether a destination is reached directly or through the proxy,
/// and learns from connection outcomes.
///
/// Every set has its own locks. A learned-set update touches two sets one
/// after the other, so a concurrent reader may briefly see a domain in both
/// learned sets or in neither.
pub struct DomainClassifier {
    always_direct: FxHashSet<String>,
    always_blocked: FxHashSet<String>,
    learned_direct: ConcurrentDomainSet,
    learned_blocked: ConcurrentDomainSet,
    transient_blocked: ExpiringDomainSet,
    always_conflicts: Vec<String>,
    blocked_dirty: AtomicBool,
    direct_dirty: AtomicBool,
    routing: RoutingConfig,
    paths: DomainListPaths,
    store: Arc<dyn DomainListStore>,
    flush_lock: Mutex<()>,
}

impl DomainClassifier {
    pub fn load(
        routing: RoutingConfig,
        paths: DomainListPaths,
        seeds: SeedLists,
        store: Arc<dyn DomainListStore>,
    ) -> Result<Self, DomainError> {
        Self::load_with_clock(routing, paths, seeds, store, Arc::new(MonotonicClock::new()))
    }

    pub fn load_with_clock(
        routing: RoutingConfig,
        paths: DomainListPaths,
        seeds: SeedLists,
        store: Arc<dyn DomainListStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let transient_blocked = ExpiringDomainSet::with_clock(
            Duration::from_secs(routing.transient_ttl_secs),
            routing.transient_max_entries,
            clock,
        )?;

        let learned_blocked: ConcurrentDomainSet = seeds.blocked.into_iter().collect();
        let learned_direct: ConcurrentDomainSet = seeds.direct.into_iter().collect();
        learned_blocked.extend(load_or_empty(store.as_ref(), &paths.blocked));
        learned_direct.extend(load_or_empty(store.as_ref(), &paths.direct));

        let always_blocked: FxHashSet<String> =
            load_or_empty(store.as_ref(), &paths.always_blocked)
                .into_iter()
                .collect();
        let mut always_direct: FxHashSet<String> =
            load_or_empty(store.as_ref(), &paths.always_direct)
                .into_iter()
                .collect();

        let in_always = |d: &str| always_direct.contains(d) || always_blocked.contains(d);
        let blocked_filtered = learned_blocked.remove_matching(in_always);
        let direct_filtered = learned_direct.remove_matching(in_always);
        let direct_conflicts = learned_direct.remove_matching(|d| learned_blocked.has(d));

        let mut conflicts: Vec<String> = always_direct
            .iter()
            .filter(|d| always_blocked.contains(*d))
            .cloned()
            .collect();
        conflicts.sort_unstable();
        for domain in &conflicts {
            warn!(
                domain = %domain,
                "Domain in both always blocked and always direct lists, taken as blocked"
            );
            always_direct.remove(domain);
        }

        info!(
            always_direct = always_direct.len(),
            always_blocked = always_blocked.len(),
            learned_direct = learned_direct.len(),
            learned_blocked = learned_blocked.len(),
            filtered = blocked_filtered + direct_filtered + direct_conflicts,
            conflicts = conflicts.len(),
            "Domain sets loaded"
        );

        Ok(Self {
            always_direct,
            always_blocked,
            learned_direct,
            learned_blocked,
            transient_blocked,
            always_conflicts: conflicts,
            blocked_dirty: AtomicBool::new(blocked_filtered > 0),
            direct_dirty: AtomicBool::new(direct_filtered + direct_conflicts > 0),
            routing,
            paths,
            store,
            flush_lock: Mutex::new(()),
        })
    }

    pub fn is_always_direct(&self, target: &RouteTarget) -> bool {
        // Simple host names are always reached directly.
        if !target.has_domain() {
            return true;
        }
        self.always_direct.contains(&target.host) || self.always_direct.contains(&target.domain)
    }

    pub fn is_always_blocked(&self, target: &RouteTarget) -> bool {
        if !target.has_domain() {
            return false;
        }
        self.always_blocked.contains(&target.host) || self.always_blocked.contains(&target.domain)
    }

    pub fn is_in_always_sets(&self, target: &RouteTarget) -> bool {
        if !target.has_domain() {
            return false;
        }
        self.is_always_direct(target) || self.is_always_blocked(target)
    }

    pub fn lookup_blocked(&self, name: &str) -> bool {
        debug_assert!(!has_port(name), "lookup_blocked got host with port: {}", name);
        if self.always_direct.contains(name) {
            return false;
        }
        if self.always_blocked.contains(name) {
            return true;
        }
        if self.transient_blocked.has(name) {
            return true;
        }
        self.learned_blocked.has(name)
    }

    pub fn lookup_direct(&self, name: &str) -> bool {
        debug_assert!(!has_port(name), "lookup_direct got host with port: {}", name);
        if self.always_direct.contains(name) {
            return true;
        }
        if self.always_blocked.contains(name) {
            return false;
        }
        self.learned_direct.has(name)
    }

    pub fn classify(&self, target: &RouteTarget) -> RouteDecision {
        if !target.has_domain() {
            return RouteDecision::Direct(RouteSource::LocalHost);
        }

        let host = target.host.as_str();
        let domain = target.domain.as_str();
        let either = |set: &FxHashSet<String>| set.contains(host) || set.contains(domain);

        if either(&self.always_direct) {
            return RouteDecision::Direct(RouteSource::AlwaysDirect);
        }
        if either(&self.always_blocked) {
            return RouteDecision::Blocked(RouteSource::AlwaysBlocked);
        }
        if self.transient_blocked.has(host) || self.transient_blocked.has(domain) {
            return RouteDecision::Blocked(RouteSource::Transient);
        }
        if self.learned_blocked.has(host) || self.learned_blocked.has(domain) {
            return RouteDecision::Blocked(RouteSource::Learned);
        }
        if self.learned_direct.has(host) || self.learned_direct.has(domain) {
            return RouteDecision::Direct(RouteSource::Learned);
        }
        RouteDecision::Direct(RouteSource::Default)
    }

    pub fn is_url_blocked(&self, target: &RouteTarget) -> bool {
        self.classify(target).is_blocked()
    }

    /// True unless the target is known to be blocked.
    pub fn is_url_direct(&self, target: &RouteTarget) -> bool {
        !self.classify(target).is_blocked()
    }

    /// True only when an always or learned list says direct.
    pub fn is_known_direct(&self, target: &RouteTarget) -> bool {
        if !target.has_domain() {
            return true;
        }
        self.lookup_direct(&target.host) || self.lookup_direct(&target.domain)
    }

    pub fn record_blocked(&self, target: &RouteTarget) -> RecordOutcome {
        if self.is_always_direct(target) || !target.has_domain() || target.host_is_ip() {
            return RecordOutcome::Skipped;
        }
        if !self.routing.update_blocked {
            return self.record_transient(target);
        }

        let domain = target.domain.as_str();
        if !self.learned_blocked.add(domain) {
            return RecordOutcome::AlreadyRecorded;
        }
        self.blocked_dirty.store(true, Ordering::Release);
        debug!(domain = %domain, "Added to blocked list");

        if self.learned_direct.delete(domain) {
            self.direct_dirty.store(true, Ordering::Release);
            debug!(domain = %domain, "Deleted from direct list");
        }
        RecordOutcome::Recorded
    }

    fn record_transient(&self, target: &RouteTarget) -> RecordOutcome {
        if self.transient_blocked.add(&target.domain) {
            info!(
                target = %target.host_port(),
                ttl_secs = self.transient_blocked.ttl().as_secs(),
                "Blocked (transient)"
            );
        }
        RecordOutcome::RecordedTransient
    }

    pub fn record_direct(&self, target: &RouteTarget) -> RecordOutcome {
        if !self.routing.update_direct {
            return RecordOutcome::Disabled;
        }
        if self.is_in_always_sets(target) || !target.has_domain() || target.host_is_ip() {
            return RecordOutcome::Skipped;
        }

        let domain = target.domain.as_str();
        if !self.learned_direct.add(domain) {
            return RecordOutcome::AlreadyRecorded;
        }
        self.direct_dirty.store(true, Ordering::Release);
        debug!(domain = %domain, "Added to direct list");

        if self.learned_blocked.delete(domain) {
            self.blocked_dirty.store(true, Ordering::Release);
            debug!(domain = %domain, "Deleted from blocked list");
        }
        RecordOutcome::Recorded
    }

    /// Writes every changed learned set whose learning is enabled.
    ///
    /// A dirty flag is cleared before its set is copied and restored if the
    /// write fails, so a domain recorded mid-flush is picked up next time.
    pub fn persist(&self) -> Result<PersistOutcome, DomainError> {
        let _guard = self.flush_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut outcome = PersistOutcome::default();
        let mut failure = None;

        if self.routing.update_blocked {
            match self.flush_set(&self.learned_blocked, &self.blocked_dirty, &self.paths.blocked) {
                Ok(written) => outcome.blocked_written = written,
                Err(e) => failure = Some(e),
            }
        }
        if self.routing.update_direct {
            match self.flush_set(&self.learned_direct, &self.direct_dirty, &self.paths.direct) {
                Ok(written) => outcome.direct_written = written,
                Err(e) => failure = failure.or(Some(e)),
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(outcome),
        }
    }

    fn flush_set(
        &self,
        set: &ConcurrentDomainSet,
        dirty: &AtomicBool,
        path: &Path,
    ) -> Result<bool, DomainError> {
        if !dirty.swap(false, Ordering::AcqRel) {
            return Ok(false);
        }

        let domains = set.snapshot();
        let count = domains.len();
        match self.store.store_domain_list(path, domains) {
            Ok(()) => {
                info!(path = %path.display(), domains = count, "Domain list persisted");
                Ok(true)
            }
            Err(e) => {
                dirty.store(true, Ordering::Release);
                error!(path = %path.display(), error = %e, "Failed to persist domain list");
                Err(e)
            }
        }
    }

    /// Reclaims expired transient entries; returns how many were removed.
    pub fn compact_transient(&self) -> usize {
        self.transient_blocked.compact()
    }

    pub fn is_blocked_dirty(&self) -> bool {
        self.blocked_dirty.load(Ordering::Acquire)
    }

    pub fn is_direct_dirty(&self) -> bool {
        self.direct_dirty.load(Ordering::Acquire)
    }

    pub fn learned_blocked(&self) -> Vec<String> {
        sorted(self.learned_blocked.snapshot())
    }

    pub fn learned_direct(&self) -> Vec<String> {
        sorted(self.learned_direct.snapshot())
    }

    pub fn always_blocked(&self) -> Vec<String> {
        sorted(self.always_blocked.iter().cloned().collect())
    }

    pub fn always_direct(&self) -> Vec<String> {
        sorted(self.always_direct.iter().cloned().collect())
    }

    /// Names found in both always lists at load, sorted.
    pub fn always_conflicts(&self) -> &[String] {
        &self.always_conflicts
    }

    pub fn stats(&self) -> DomainSetStats {
        DomainSetStats {
            always_direct: self.always_direct.len(),
            always_blocked: self.always_blocked.len(),
            learned_direct: self.learned_direct.len(),
            learned_blocked: self.learned_blocked.len(),
            transient_blocked: self.transient_blocked.len(),
            always_conflicts: self.always_conflicts.len(),
        }
    }

    pub fn transient_len(&self) -> usize {
        self.transient_blocked.len()
    }
}

impl RouteClassifierPort for DomainClassifier {
    fn classify(&self, target: &RouteTarget) -> RouteDecision {
        DomainClassifier::classify(self, target)
    }

    fn record_blocked(&self, target: &RouteTarget) -> RecordOutcome {
        DomainClassifier::record_blocked(self, target)
    }

    fn record_direct(&self, target: &RouteTarget) -> RecordOutcome {
        DomainClassifier::record_direct(self, target)
    }

    fn domains(&self, kind: DomainSetKind) -> Vec<String> {
        match kind {
            DomainSetKind::Blocked => self.learned_blocked(),
            DomainSetKind::Direct => self.learned_direct(),
            DomainSetKind::AlwaysBlocked => self.always_blocked(),
            DomainSetKind::AlwaysDirect => self.always_direct(),
        }
    }
}

fn load_or_empty(store: &dyn DomainListStore, path: &Path) -> Vec<String> {
    store.load_domain_list(path).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "Error loading domain list, using empty list");
        Vec::new()
    })
}

fn sorted(mut domains: Vec<String>) -> Vec<String> {
    domains.sort_unstable();
    domains
}
