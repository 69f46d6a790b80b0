pub mod builders;

#[allow(unused_imports)]
pub use builders::{target, ClassifierBuilder, FailingDomainListStore, Fixture};
