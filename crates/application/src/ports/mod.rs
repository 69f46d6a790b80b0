mod domain_list_store;
mod domain_set_maintenance_port;
mod route_classifier;

pub use domain_list_store::DomainListStore;
pub use domain_set_maintenance_port::{DomainSetMaintenancePort, SweepOutcome};
pub use route_classifier::RouteClassifierPort;
