use crate::clock::{Clock, MonotonicClock};
use dashmap::DashMap;
use ferrous_route_domain::DomainError;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;

const EVICTION_BATCH_SIZE: usize = 64;

/// Domain set whose entries disappear a fixed TTL after insertion.
///
/// Re-adding a live entry does not extend it: a domain stays penalized for
/// one window counted from its first insertion. Expired entries are dropped
/// lazily by `has`/`add` and in bulk by `compact`; `max_entries` bounds memory
/// even when nothing calls `compact`.
pub struct ExpiringDomainSet {
    entries: DashMap<String, u64, FxBuildHasher>,
    ttl_millis: u64,
    max_entries: usize,
    clock: Arc<dyn Clock>,
}

impl ExpiringDomainSet {
    pub fn new(ttl: Duration, max_entries: usize) -> Result<Self, DomainError> {
        Self::with_clock(ttl, max_entries, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(
        ttl: Duration,
        max_entries: usize,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let ttl_millis = u64::try_from(ttl.as_millis()).map_err(|_| {
            DomainError::ConfigError(format!("transient TTL too large: {:?}", ttl))
        })?;
        if ttl_millis == 0 {
            return Err(DomainError::ConfigError(
                "transient TTL must be at least 1ms".to_string(),
            ));
        }
        if max_entries == 0 {
            return Err(DomainError::ConfigError(
                "transient set capacity cannot be 0".to_string(),
            ));
        }

        Ok(Self {
            entries: DashMap::with_capacity_and_hasher(max_entries.min(4096), FxBuildHasher),
            ttl_millis,
            max_entries,
            clock,
        })
    }

    /// Starts a TTL window for `domain` unless one is already running.
    /// Returns true if a new window was started.
    pub fn add(&self, domain: &str) -> bool {
        let now = self.clock.now_millis();

        let live = self
            .entries
            .get(domain)
            .map(|expires| now < *expires.value());
        if live == Some(true) {
            return false;
        }
        if live.is_none() && self.entries.len() >= self.max_entries {
            self.make_room(now);
        }

        match self.entries.entry(domain.to_string()) {
            dashmap::Entry::Occupied(mut e) => {
                if now < *e.get() {
                    false
                } else {
                    e.insert(now.saturating_add(self.ttl_millis));
                    true
                }
            }
            dashmap::Entry::Vacant(e) => {
                e.insert(now.saturating_add(self.ttl_millis));
                true
            }
        }
    }

    pub fn has(&self, domain: &str) -> bool {
        let now = self.clock.now_millis();
        let live = match self.entries.get(domain) {
            Some(expires) => now < *expires.value(),
            None => return false,
        };
        if !live {
            self.entries.remove_if(domain, |_, expires| now >= *expires);
        }
        live
    }

    /// Drops every expired entry; returns how many were removed.
    pub fn compact(&self) -> usize {
        let now = self.clock.now_millis();
        let mut removed = 0;
        self.entries.retain(|_, expires| {
            let keep = now < *expires;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_millis)
    }

    /// Number of tracked entries, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn make_room(&self, now: u64) {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|e| now >= *e.value())
            .map(|e| e.key().clone())
            .take(EVICTION_BATCH_SIZE)
            .collect();
        for k in &expired {
            self.entries.remove_if(k, |_, expires| now >= *expires);
        }

        if self.entries.len() >= self.max_entries {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|e| *e.value())
                .map(|e| e.key().clone());
            if let Some(k) = oldest {
                self.entries.remove(&k);
            }
        }
    }
}
