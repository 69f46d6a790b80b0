#![allow(dead_code)]

use ferrous_route_application::ports::RouteClassifierPort;
use ferrous_route_domain::{DomainSetKind, RecordOutcome, RouteDecision, RouteSource, RouteTarget};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

pub struct MockRouteClassifier {
    blocked: RwLock<HashSet<String>>,
    direct: RwLock<HashSet<String>>,
    record_blocked_calls: AtomicU64,
    record_direct_calls: AtomicU64,
}

impl MockRouteClassifier {
    pub fn new() -> Self {
        Self {
            blocked: RwLock::new(HashSet::new()),
            direct: RwLock::new(HashSet::new()),
            record_blocked_calls: AtomicU64::new(0),
            record_direct_calls: AtomicU64::new(0),
        }
    }

    pub fn with_blocked(domains: Vec<&str>) -> Self {
        let mock = Self::new();
        mock.blocked
            .write()
            .unwrap()
            .extend(domains.into_iter().map(String::from));
        mock
    }

    pub fn record_blocked_calls(&self) -> u64 {
        self.record_blocked_calls.load(Ordering::Relaxed)
    }

    pub fn record_direct_calls(&self) -> u64 {
        self.record_direct_calls.load(Ordering::Relaxed)
    }
}

impl RouteClassifierPort for MockRouteClassifier {
    fn classify(&self, target: &RouteTarget) -> RouteDecision {
        if self.blocked.read().unwrap().contains(&target.domain) {
            RouteDecision::Blocked(RouteSource::Learned)
        } else {
            RouteDecision::Direct(RouteSource::Default)
        }
    }

    fn record_blocked(&self, target: &RouteTarget) -> RecordOutcome {
        self.record_blocked_calls.fetch_add(1, Ordering::Relaxed);
        self.direct.write().unwrap().remove(&target.domain);
        if self.blocked.write().unwrap().insert(target.domain.clone()) {
            RecordOutcome::Recorded
        } else {
            RecordOutcome::AlreadyRecorded
        }
    }

    fn record_direct(&self, target: &RouteTarget) -> RecordOutcome {
        self.record_direct_calls.fetch_add(1, Ordering::Relaxed);
        self.blocked.write().unwrap().remove(&target.domain);
        if self.direct.write().unwrap().insert(target.domain.clone()) {
            RecordOutcome::Recorded
        } else {
            RecordOutcome::AlreadyRecorded
        }
    }

    fn domains(&self, kind: DomainSetKind) -> Vec<String> {
        match kind {
            DomainSetKind::Blocked => self.blocked.read().unwrap().iter().cloned().collect(),
            DomainSetKind::Direct => self.direct.read().unwrap().iter().cloned().collect(),
            DomainSetKind::AlwaysBlocked | DomainSetKind::AlwaysDirect => vec![],
        }
    }
}
