//! Ferrous Route Domain Layer
pub mod config;
pub mod errors;
pub mod route_decision;
pub mod route_target;

pub use config::{
    CliOverrides, Config, ConfigError, DomainListConfig, DomainListPaths, RoutingConfig,
};
pub use errors::DomainError;
pub use route_decision::{
    ConnectionOutcome, DomainSetKind, PersistOutcome, RecordOutcome, RouteDecision, RouteSource,
};
pub use route_target::RouteTarget;
