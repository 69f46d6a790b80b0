use crate::di::UseCases;
use ferrous_route_domain::DomainSetKind;

pub fn list(use_cases: &UseCases, kind: DomainSetKind) {
    for domain in use_cases.get_domain_sets.execute(kind) {
        println!("{}", domain);
    }
}
