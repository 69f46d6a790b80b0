use crate::ports::RouteClassifierPort;
use ferrous_route_domain::{ConnectionOutcome, RecordOutcome, RouteTarget};
use std::sync::Arc;
use tracing::debug;

/// Feeds the result of a direct connection attempt back into the classifier.
pub struct RecordConnectionOutcomeUseCase {
    classifier: Arc<dyn RouteClassifierPort>,
}

impl RecordConnectionOutcomeUseCase {
    pub fn new(classifier: Arc<dyn RouteClassifierPort>) -> Self {
        Self { classifier }
    }

    pub fn execute(&self, target: &RouteTarget, outcome: ConnectionOutcome) -> RecordOutcome {
        let recorded = match outcome {
            ConnectionOutcome::Succeeded => self.classifier.record_direct(target),
            ConnectionOutcome::Failed => self.classifier.record_blocked(target),
        };
        debug!(target = %target, ?outcome, ?recorded, "Connection outcome recorded");
        recorded
    }
}
