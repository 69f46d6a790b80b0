//! Ferrous Route Infrastructure Layer
pub mod classifier;
pub mod clock;
pub mod domain_set;
pub mod repositories;

pub use classifier::{DomainClassifier, DomainSetMaintenance, DomainSetStats, SeedLists};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use repositories::FileDomainListStore;
