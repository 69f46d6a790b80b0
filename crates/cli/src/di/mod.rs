mod classifier;
mod use_cases;

pub use classifier::build_classifier;
pub use use_cases::UseCases;
