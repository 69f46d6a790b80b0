use ferrous_route_domain::DomainError;
use std::path::Path;

/// Durable storage for newline-delimited domain lists.
pub trait DomainListStore: Send + Sync {
    /// Reads every non-blank, trimmed line. A missing file is an empty list.
    fn load_domain_list(&self, path: &Path) -> Result<Vec<String>, DomainError>;

    /// Replaces the list at `path` atomically, sorted lexicographically.
    fn store_domain_list(&self, path: &Path, names: Vec<String>) -> Result<(), DomainError>;
}
