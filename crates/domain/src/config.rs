pub mod errors;
pub mod lists;
pub mod logging;
pub mod maintenance;
pub mod root;
pub mod routing;

pub use errors::ConfigError;
pub use lists::{DomainListConfig, DomainListPaths};
pub use logging::LoggingConfig;
pub use maintenance::MaintenanceConfig;
pub use root::{CliOverrides, Config};
pub use routing::RoutingConfig;
