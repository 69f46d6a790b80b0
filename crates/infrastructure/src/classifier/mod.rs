pub mod domain_classifier;
pub mod maintenance;

pub use domain_classifier::{DomainClassifier, DomainSetStats, SeedLists};
pub use maintenance::DomainSetMaintenance;
