pub mod routing;

pub use routing::{CheckRouteUseCase, GetDomainSetsUseCase, RecordConnectionOutcomeUseCase};
