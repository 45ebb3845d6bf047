//! The saved assessment, one JSON snapshot in `state.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use er_core::AssessmentSnapshot;

const STATE_FILE_NAME: &str = "state.json";

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STATE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when nothing has been saved yet.
    pub fn load(&self) -> anyhow::Result<Option<AssessmentSnapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };

        let snapshot = serde_json::from_str(&contents).with_context(|| {
            format!(
                "{} is not a valid exitready state file; run 'exr state clear' to start over",
                self.path.display()
            )
        })?;
        Ok(Some(snapshot))
    }

    /// Replace the saved state. The file is swapped in whole or not at all.
    pub fn save(&self, snapshot: &AssessmentSnapshot) -> anyhow::Result<()> {
        let dir = self
            .path
            .parent()
            .context("state file path has no parent directory")?;
        fs::create_dir_all(dir).with_context(|| format!("mkdir {}", dir.display()))?;

        let json = serde_json::to_string_pretty(snapshot)?;
        let mut staged = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to stage state file in {}", dir.display()))?;
        staged.write_all(json.as_bytes())?;
        staged
            .persist(&self.path)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "saved state");
        Ok(())
    }

    /// Returns whether a file was removed.
    pub fn clear(&self) -> anyhow::Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => {
                Err(error).with_context(|| format!("failed to delete {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use er_core::QuestionnaireSpec;
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot() -> AssessmentSnapshot {
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        let mut snapshot = AssessmentSnapshot::initial(&spec, 2026);
        snapshot.responses.set("f1", 3);
        snapshot.sector = Some("technology".into());
        snapshot.valuation.total_debt = Some(250_000.0);
        snapshot
    }

    #[test]
    fn missing_file_loads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = StateStore::in_dir(tmp.path());
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn save_then_load_returns_same_snapshot() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = StateStore::in_dir(tmp.path().join("nested"));
        let saved = snapshot();

        store.save(&saved).expect("save");
        assert!(store.path().ends_with("nested/state.json"));
        assert_eq!(store.load().expect("load"), Some(saved));
    }

    #[test]
    fn save_overwrites_previous_state() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = StateStore::in_dir(tmp.path());
        store.save(&snapshot()).expect("first save");

        let mut updated = snapshot();
        updated.responses.set("f1", 1);
        store.save(&updated).expect("second save");

        let loaded = store.load().expect("load").expect("state present");
        assert_eq!(loaded.responses.get("f1"), Some(1));
    }

    #[test]
    fn clear_reports_whether_anything_was_removed() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = StateStore::in_dir(tmp.path());
        assert!(!store.clear().expect("clear empty"));

        store.save(&snapshot()).expect("save");
        assert!(store.clear().expect("clear saved"));
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = StateStore::in_dir(tmp.path());
        fs::write(store.path(), "{not json").expect("write");

        let error = store.load().expect_err("corrupt state should fail");
        assert!(format!("{error:#}").contains("not a valid exitready state file"));
    }
}
