use serde::{Deserialize, Serialize};

/// How connection outcomes are learned.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// Persist domains that failed direct connections. When disabled, a
    /// failure only puts the domain into the transient penalty set.
    #[serde(default = "default_true")]
    pub update_blocked: bool,

    /// Persist domains that connected directly.
    #[serde(default = "default_true")]
    pub update_direct: bool,

    /// How long a transiently blocked domain stays blocked.
    #[serde(default = "default_transient_ttl_secs")]
    pub transient_ttl_secs: u64,

    /// Upper bound on tracked transient entries.
    #[serde(default = "default_transient_max_entries")]
    pub transient_max_entries: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            update_blocked: true,
            update_direct: true,
            transient_ttl_secs: default_transient_ttl_secs(),
            transient_max_entries: default_transient_max_entries(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_transient_ttl_secs() -> u64 {
    120
}

fn default_transient_max_entries() -> usize {
    65_536
}
