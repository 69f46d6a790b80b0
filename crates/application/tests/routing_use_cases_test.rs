use ferrous_route_application::use_cases::{
    CheckRouteUseCase, GetDomainSetsUseCase, RecordConnectionOutcomeUseCase,
};
use ferrous_route_domain::{
    ConnectionOutcome, DomainSetKind, RecordOutcome, RouteDecision, RouteSource, RouteTarget,
};
use std::sync::Arc;

mod helpers;
use helpers::MockRouteClassifier;

fn target(authority: &str) -> RouteTarget {
    RouteTarget::parse(authority).unwrap()
}

#[test]
fn test_check_route_unknown_domain_is_direct() {
    let classifier = Arc::new(MockRouteClassifier::new());
    let use_case = CheckRouteUseCase::new(classifier);

    let decision = use_case.execute(&target("example.com:443"));

    assert_eq!(decision, RouteDecision::Direct(RouteSource::Default));
    assert!(!decision.is_blocked());
}

#[test]
fn test_check_route_blocked_domain() {
    let classifier = Arc::new(MockRouteClassifier::with_blocked(vec!["blocked.com"]));
    let use_case = CheckRouteUseCase::new(classifier);

    let decision = use_case.execute(&target("www.blocked.com:443"));

    assert!(decision.is_blocked());
    assert_eq!(decision.source(), RouteSource::Learned);
}

#[test]
fn test_failed_connection_records_blocked() {
    let classifier = Arc::new(MockRouteClassifier::new());
    let use_case = RecordConnectionOutcomeUseCase::new(classifier.clone());

    let outcome = use_case.execute(&target("slow.com:80"), ConnectionOutcome::Failed);

    assert_eq!(outcome, RecordOutcome::Recorded);
    assert_eq!(classifier.record_blocked_calls(), 1);
    assert_eq!(classifier.record_direct_calls(), 0);
}

#[test]
fn test_successful_connection_records_direct() {
    let classifier = Arc::new(MockRouteClassifier::new());
    let use_case = RecordConnectionOutcomeUseCase::new(classifier.clone());

    let outcome = use_case.execute(&target("fast.com:80"), ConnectionOutcome::Succeeded);

    assert_eq!(outcome, RecordOutcome::Recorded);
    assert_eq!(classifier.record_direct_calls(), 1);
    assert_eq!(classifier.record_blocked_calls(), 0);
}

#[test]
fn test_repeated_failure_reports_already_recorded() {
    let classifier = Arc::new(MockRouteClassifier::new());
    let use_case = RecordConnectionOutcomeUseCase::new(classifier);
    let t = target("slow.com:80");

    assert_eq!(use_case.execute(&t, ConnectionOutcome::Failed), RecordOutcome::Recorded);
    assert_eq!(
        use_case.execute(&t, ConnectionOutcome::Failed),
        RecordOutcome::AlreadyRecorded
    );
}

#[test]
fn test_get_domain_sets_sorted() {
    let classifier = Arc::new(MockRouteClassifier::with_blocked(vec![
        "zeta.com",
        "alpha.com",
        "mid.org",
    ]));
    let use_case = GetDomainSetsUseCase::new(classifier);

    let domains = use_case.execute(DomainSetKind::Blocked);

    assert_eq!(domains, vec!["alpha.com", "mid.org", "zeta.com"]);
    assert!(use_case.execute(DomainSetKind::Direct).is_empty());
}
