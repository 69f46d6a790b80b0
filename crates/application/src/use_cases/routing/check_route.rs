use crate::ports::RouteClassifierPort;
use ferrous_route_domain::{RouteDecision, RouteTarget};
use std::sync::Arc;
use tracing::debug;

pub struct CheckRouteUseCase {
    classifier: Arc<dyn RouteClassifierPort>,
}

impl CheckRouteUseCase {
    pub fn new(classifier: Arc<dyn RouteClassifierPort>) -> Self {
        Self { classifier }
    }

    pub fn execute(&self, target: &RouteTarget) -> RouteDecision {
        let decision = self.classifier.classify(target);
        debug!(target = %target, decision = %decision, "Route decided");
        decision
    }
}
