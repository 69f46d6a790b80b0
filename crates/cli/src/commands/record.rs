use crate::di::UseCases;
use ferrous_route_domain::{ConnectionOutcome, RouteTarget};
use ferrous_route_infrastructure::DomainClassifier;
use tracing::info;

pub fn record(
    use_cases: &UseCases,
    classifier: &DomainClassifier,
    outcome: ConnectionOutcome,
    hosts: &[String],
) -> anyhow::Result<()> {
    for host in hosts {
        let target = RouteTarget::parse(host)?;
        let recorded = use_cases.record_outcome.execute(&target, outcome);
        println!("{}\t{:?}", target, recorded);
    }

    let written = classifier.persist()?;
    info!(
        blocked_written = written.blocked_written,
        direct_written = written.direct_written,
        "Domain lists saved"
    );
    Ok(())
}
