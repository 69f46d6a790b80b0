use ferrous_route_application::ports::RouteClassifierPort;
use ferrous_route_application::use_cases::{
    CheckRouteUseCase, GetDomainSetsUseCase, RecordConnectionOutcomeUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub check_route: Arc<CheckRouteUseCase>,
    pub record_outcome: Arc<RecordConnectionOutcomeUseCase>,
    pub get_domain_sets: Arc<GetDomainSetsUseCase>,
}

impl UseCases {
    pub fn new(classifier: Arc<dyn RouteClassifierPort>) -> Self {
        Self {
            check_route: Arc::new(CheckRouteUseCase::new(classifier.clone())),
            record_outcome: Arc::new(RecordConnectionOutcomeUseCase::new(classifier.clone())),
            get_domain_sets: Arc::new(GetDomainSetsUseCase::new(classifier)),
        }
    }
}
