use crate::ports::RouteClassifierPort;
use ferrous_route_domain::DomainSetKind;
use std::sync::Arc;

pub struct GetDomainSetsUseCase {
    classifier: Arc<dyn RouteClassifierPort>,
}

impl GetDomainSetsUseCase {
    pub fn new(classifier: Arc<dyn RouteClassifierPort>) -> Self {
        Self { classifier }
    }

    /// Sorted contents of one domain set.
    pub fn execute(&self, kind: DomainSetKind) -> Vec<String> {
        let mut domains = self.classifier.domains(kind);
        domains.sort_unstable();
        domains
    }
}
