pub mod domain_set_maintenance;
pub mod runner;

pub use domain_set_maintenance::DomainSetMaintenanceJob;
pub use runner::JobRunner;
