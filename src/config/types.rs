use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where the grocery list is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Settings file holding the list blob. Defaults to
    /// `<data_dir>/grocerylist/settings.toml`.
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
}
