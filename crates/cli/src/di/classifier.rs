use anyhow::Context;
use ferrous_route_domain::Config;
use ferrous_route_infrastructure::{DomainClassifier, FileDomainListStore, SeedLists};
use std::sync::Arc;

pub fn build_classifier(config: &Config) -> anyhow::Result<Arc<DomainClassifier>> {
    let seeds = SeedLists {
        blocked: config.lists.seed_blocked.clone(),
        direct: config.lists.seed_direct.clone(),
    };

    let classifier = DomainClassifier::load(
        config.routing,
        config.lists.paths(),
        seeds,
        Arc::new(FileDomainListStore::new()),
    )
    .context("Failed to load domain sets")?;

    Ok(Arc::new(classifier))
}
