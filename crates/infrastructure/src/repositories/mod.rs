pub mod domain_list_repository;

pub use domain_list_repository::FileDomainListStore;
