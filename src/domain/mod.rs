//! Domain layer: entities and ancestry algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod ancestry;
pub mod dataset;
pub mod entities;
pub mod error;
pub mod forest;

pub use ancestry::common_ancestry;
pub use entities::{Bird, BirdDetail, BirdId, CommonAncestry, Node, NodeId};
pub use error::{DomainError, DomainResult};
pub use forest::Forest;
