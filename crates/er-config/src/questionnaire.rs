//! Questionnaire document selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionnaireConfig {
    /// Path to a questionnaire JSON document. Empty uses the built-in one.
    #[serde(default)]
    pub path: String,
}

impl QuestionnaireConfig {
    #[must_use]
    pub fn custom_path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}
