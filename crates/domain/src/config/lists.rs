use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the domain list files plus the built-in seed lists.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainListConfig {
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_blocked_file")]
    pub blocked: String,

    #[serde(default = "default_direct_file")]
    pub direct: String,

    #[serde(default = "default_always_blocked_file")]
    pub always_blocked: String,

    #[serde(default = "default_always_direct_file")]
    pub always_direct: String,

    /// Learned-blocked entries applied before the on-disk list.
    #[serde(default)]
    pub seed_blocked: Vec<String>,

    /// Learned-direct entries applied before the on-disk list.
    #[serde(default)]
    pub seed_direct: Vec<String>,
}

impl Default for DomainListConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            blocked: default_blocked_file(),
            direct: default_direct_file(),
            always_blocked: default_always_blocked_file(),
            always_direct: default_always_direct_file(),
            seed_blocked: vec![],
            seed_direct: vec![],
        }
    }
}

impl DomainListConfig {
    pub fn paths(&self) -> DomainListPaths {
        let dir = PathBuf::from(&self.dir);
        DomainListPaths {
            blocked: dir.join(&self.blocked),
            direct: dir.join(&self.direct),
            always_blocked: dir.join(&self.always_blocked),
            always_direct: dir.join(&self.always_direct),
        }
    }
}

/// Resolved file paths, one per domain set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainListPaths {
    pub blocked: PathBuf,
    pub direct: PathBuf,
    pub always_blocked: PathBuf,
    pub always_direct: PathBuf,
}

impl DomainListPaths {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        DomainListConfig {
            dir: dir.into().to_string_lossy().into_owned(),
            ..Default::default()
        }
        .paths()
    }
}

fn default_dir() -> String {
    "./ferrous-route".to_string()
}

fn default_blocked_file() -> String {
    "blocked".to_string()
}

fn default_direct_file() -> String {
    "direct".to_string()
}

fn default_always_blocked_file() -> String {
    "always_blocked".to_string()
}

fn default_always_direct_file() -> String {
    "always_direct".to_string()
}
