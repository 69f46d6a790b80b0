pub mod concurrent;
pub mod expiring;

pub use concurrent::ConcurrentDomainSet;
pub use expiring::ExpiringDomainSet;
