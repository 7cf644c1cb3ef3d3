//! Application services

pub mod ancestry;
pub mod birds;
pub mod dataset;

pub use ancestry::AncestryService;
pub use birds::BirdService;
pub use dataset::DatasetService;
