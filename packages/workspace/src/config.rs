use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::WorkspaceError;

pub const DEFAULT_CONFIG_NAME: &str = "lectern.config.json";

/// Lectern configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Directory holding the persisted deck
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Bundled deck shipped with the presentation
    #[serde(default = "default_bundled_deck")]
    pub bundled_deck: String,

    /// Page shown on startup
    #[serde(default = "default_start_page")]
    pub start_page: String,
}

fn default_store_dir() -> String {
    ".lectern".to_string()
}

fn default_bundled_deck() -> String {
    "data/meeting.json".to_string()
}

fn default_start_page() -> String {
    "page01".to_string()
}

impl WorkspaceConfig {
    /// Load config from a directory
    pub fn load(cwd: &str) -> Result<Self, WorkspaceError> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: WorkspaceConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(WorkspaceConfig::default())
        }
    }

    /// Absolute path to the store directory
    pub fn store_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_dir)
    }

    /// Absolute path to the bundled deck
    pub fn bundled_deck(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.bundled_deck)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            bundled_deck: default_bundled_deck(),
            start_page: default_start_page(),
        }
    }
}
