//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{AncestryService, BirdService, DatasetService};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, NodeStore, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Node store boundary
    pub store: Arc<dyn NodeStore>,

    /// Common-ancestor queries
    pub ancestry: AncestryService,

    /// Descendant bird queries
    pub birds: BirdService,
}

impl ServiceContainer {
    /// Create a service container over an already-loaded store.
    pub fn new(settings: Settings, store: Arc<dyn NodeStore>) -> Self {
        let settings = Arc::new(settings);
        let ancestry = AncestryService::new(Arc::clone(&store));
        let birds = BirdService::new(Arc::clone(&store));

        Self {
            settings,
            store,
            ancestry,
            birds,
        }
    }

    /// Load the dataset named in settings and wire services over it.
    pub fn from_settings(settings: Settings) -> crate::application::ApplicationResult<Self> {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let dataset = DatasetService::new(fs);
        let store = dataset.load(&settings.nodes_file, &settings.birds_file)?;
        Ok(Self::new(settings, Arc::new(store)))
    }
}
