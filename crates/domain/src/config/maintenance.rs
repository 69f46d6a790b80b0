use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MaintenanceConfig {
    /// Seconds between flushes of changed learned sets.
    #[serde(default = "default_flush_interval_secs")]
    pub flush_interval_secs: u64,

    /// Seconds between sweeps of expired transient entries.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            flush_interval_secs: default_flush_interval_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_flush_interval_secs() -> u64 {
    60
}

fn default_sweep_interval_secs() -> u64 {
    300
}
