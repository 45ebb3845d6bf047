//! Local state storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Directory name under the platform data directory.
const APP_DIR: &str = "exitready";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `state.json`. Empty uses `<data dir>/exitready`.
    #[serde(default)]
    pub state_dir: String,
}

impl StorageConfig {
    /// Resolved state directory.
    pub fn state_dir(&self) -> Result<PathBuf, ConfigError> {
        let configured = self.state_dir.trim();
        if !configured.is_empty() {
            return Ok(PathBuf::from(configured));
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ConfigError::NoDefaultPath {
                field: "storage.state_dir".into(),
            })
    }
}
