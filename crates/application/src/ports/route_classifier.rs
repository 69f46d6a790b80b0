use ferrous_route_domain::{DomainSetKind, RecordOutcome, RouteDecision, RouteTarget};

pub trait RouteClassifierPort: Send + Sync {
    fn classify(&self, target: &RouteTarget) -> RouteDecision;
    fn record_blocked(&self, target: &RouteTarget) -> RecordOutcome;
    fn record_direct(&self, target: &RouteTarget) -> RecordOutcome;
    fn domains(&self, kind: DomainSetKind) -> Vec<String>;
}
