use crate::di::UseCases;
use ferrous_route_domain::{RouteSource, RouteTarget};
use serde::Serialize;

#[derive(Serialize)]
struct CheckReport<'a> {
    target: String,
    domain: &'a str,
    route: &'static str,
    source: RouteSource,
}

pub fn check(use_cases: &UseCases, hosts: &[String], json: bool) -> anyhow::Result<()> {
    for host in hosts {
        let target = RouteTarget::parse(host)?;
        let decision = use_cases.check_route.execute(&target);

        if json {
            let report = CheckReport {
                target: target.host_port(),
                domain: &target.domain,
                route: if decision.is_blocked() { "blocked" } else { "direct" },
                source: decision.source(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}\t{}", target, decision);
        }
    }
    Ok(())
}
