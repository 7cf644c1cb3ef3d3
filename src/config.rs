//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/aviary/aviary.toml`
//! 3. Environment variables: `AVIARY_*` prefix
//! 4. CLI flags (applied by the caller)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Node dataset file (`id,parent_id` rows)
    pub nodes_file: PathBuf,
    /// Bird dataset file (`id,node_id,name` rows)
    pub birds_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nodes_file: PathBuf::from("data/nodes.csv"),
            birds_file: PathBuf::from("data/birds.csv"),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        if let Some(global) = global_config_path() {
            if global.exists() {
                builder = builder.add_source(File::from(global));
            }
        }

        let cfg = builder
            .add_source(Environment::with_prefix("AVIARY"))
            .build()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "load configuration".to_string(),
                source: Box::new(e),
            })?;

        let mut settings = Settings::default();
        if let Ok(path) = cfg.get_string("nodes_file") {
            settings.nodes_file = PathBuf::from(path);
        }
        if let Ok(path) = cfg.get_string("birds_file") {
            settings.birds_file = PathBuf::from(path);
        }
        Ok(settings)
    }

    /// Apply CLI overrides on top of loaded settings.
    pub fn with_overrides(mut self, nodes: Option<PathBuf>, birds: Option<PathBuf>) -> Self {
        if let Some(nodes) = nodes {
            self.nodes_file = nodes;
        }
        if let Some(birds) = birds {
            self.birds_file = birds;
        }
        self
    }
}

/// Path of the global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aviary").map(|dirs| dirs.config_dir().join("aviary.toml"))
}
