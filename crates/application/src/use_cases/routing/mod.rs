mod check_route;
mod get_domain_sets;
mod record_outcome;

pub use check_route::CheckRouteUseCase;
pub use get_domain_sets::GetDomainSetsUseCase;
pub use record_outcome::RecordConnectionOutcomeUseCase;
