use dashmap::DashSet;
use rustc_hash::FxBuildHasher;

/// Thread-safe set of domain names.
///
/// Backed by a sharded `DashSet`: `add`/`delete` take the shard's write lock,
/// `has` its read lock, so single-key operations never wait on unrelated keys.
pub struct ConcurrentDomainSet {
    domains: DashSet<String, FxBuildHasher>,
}

impl ConcurrentDomainSet {
    pub fn new() -> Self {
        Self {
            domains: DashSet::with_hasher(FxBuildHasher),
        }
    }

    /// Returns true if the name was not present before.
    pub fn add(&self, domain: &str) -> bool {
        if self.domains.contains(domain) {
            return false;
        }
        self.domains.insert(domain.to_string())
    }

    #[inline]
    pub fn has(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Returns true if the name was present.
    pub fn delete(&self, domain: &str) -> bool {
        self.domains.remove(domain).is_some()
    }

    /// Copy of the current contents, in no particular order.
    pub fn snapshot(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.key().clone()).collect()
    }

    pub fn extend<I>(&self, domains: I)
    where
        I: IntoIterator<Item = String>,
    {
        for domain in domains {
            self.domains.insert(domain);
        }
    }

    /// Removes every name for which `remove` returns true; returns how many.
    pub fn remove_matching<F>(&self, mut remove: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.domains.len();
        self.domains.retain(|d| !remove(d.as_str()));
        before - self.domains.len()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for ConcurrentDomainSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<String> for ConcurrentDomainSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let set = Self::new();
        set.extend(iter);
        set
    }
}
