use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which rule produced a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// Bare host name without a registered domain.
    LocalHost,
    AlwaysDirect,
    AlwaysBlocked,
    Transient,
    Learned,
    /// Nothing matched; unknown domains are tried direct.
    Default,
}

impl RouteSource {
    pub fn to_str(&self) -> &'static str {
        match self {
            RouteSource::LocalHost => "local_host",
            RouteSource::AlwaysDirect => "always_direct",
            RouteSource::AlwaysBlocked => "always_blocked",
            RouteSource::Transient => "transient",
            RouteSource::Learned => "learned",
            RouteSource::Default => "default",
        }
    }
}

impl std::fmt::Display for RouteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "source", rename_all = "snake_case")]
pub enum RouteDecision {
    Direct(RouteSource),
    Blocked(RouteSource),
}

impl RouteDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, RouteDecision::Blocked(_))
    }

    pub fn source(&self) -> RouteSource {
        match self {
            RouteDecision::Direct(s) | RouteDecision::Blocked(s) => *s,
        }
    }
}

impl std::fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteDecision::Direct(s) => write!(f, "direct ({})", s),
            RouteDecision::Blocked(s) => write!(f, "blocked ({})", s),
        }
    }
}

/// Result of recording a connection outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// Inserted into a learned set.
    Recorded,
    /// Marked in the transient penalty set.
    RecordedTransient,
    /// Already present; nothing changed.
    AlreadyRecorded,
    /// Target is local, a literal IP or covered by an always list.
    Skipped,
    /// Learning for this set is turned off.
    Disabled,
}

/// What a connection handler observed when reaching a target directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionOutcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainSetKind {
    Blocked,
    Direct,
    AlwaysBlocked,
    AlwaysDirect,
}

impl FromStr for DomainSetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "blocked" => Ok(DomainSetKind::Blocked),
            "direct" => Ok(DomainSetKind::Direct),
            "always-blocked" => Ok(DomainSetKind::AlwaysBlocked),
            "always-direct" => Ok(DomainSetKind::AlwaysDirect),
            other => Err(format!("unknown domain set: {}", other)),
        }
    }
}

/// Which learned sets a flush wrote to disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PersistOutcome {
    pub blocked_written: bool,
    pub direct_written: bool,
}

impl PersistOutcome {
    pub fn wrote_any(&self) -> bool {
        self.blocked_written || self.direct_written
    }
}
