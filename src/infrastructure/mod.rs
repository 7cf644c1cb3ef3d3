//! Infrastructure layer: store implementations and DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod memory;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use memory::MemoryStore;
pub use traits::{FileSystem, NodeStore, RealFileSystem, StoreError, StoreResult};
