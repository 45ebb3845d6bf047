use std::path::PathBuf;

use anyhow::Context;
use er_codec::CodecContext;
use er_config::ExitReadyConfig;
use er_core::{AssessmentSnapshot, QuestionnaireSpec};

use crate::store::StateStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ExitReadyConfig,
    pub spec: QuestionnaireSpec,
    pub codec: CodecContext,
    pub store: StateStore,
    pub anchor_year: i32,
}

impl AppContext {
    /// Load the questionnaire named by the config (or the built-in one) and
    /// open the state store. `state_dir` overrides `storage.state_dir`.
    pub fn init(config: ExitReadyConfig, state_dir: Option<&str>) -> anyhow::Result<Self> {
        let spec = load_questionnaire(&config)?;
        let state_dir = match state_dir {
            Some(dir) => PathBuf::from(dir),
            None => config.storage.state_dir()?,
        };
        Self::from_parts(config, spec, state_dir)
    }

    pub fn from_parts(
        config: ExitReadyConfig,
        spec: QuestionnaireSpec,
        state_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let anchor_year = config.general.resolved_anchor_year();
        let codec = CodecContext::from_spec(&spec, anchor_year)
            .context("questionnaire cannot be used for export codes")?;

        tracing::debug!(
            questions = spec.question_count(),
            anchor_year,
            state_dir = %state_dir.display(),
            "application context ready"
        );

        Ok(Self {
            config,
            spec,
            codec,
            store: StateStore::in_dir(state_dir),
            anchor_year,
        })
    }

    /// The saved state, or a fresh assessment when nothing is saved.
    pub fn snapshot(&self) -> anyhow::Result<AssessmentSnapshot> {
        Ok(self
            .store
            .load()?
            .unwrap_or_else(|| AssessmentSnapshot::initial(&self.spec, self.anchor_year)))
    }

    pub fn save(&self, snapshot: &AssessmentSnapshot) -> anyhow::Result<()> {
        self.store.save(snapshot)
    }
}

fn load_questionnaire(config: &ExitReadyConfig) -> anyhow::Result<QuestionnaireSpec> {
    let Some(path) = config.questionnaire.custom_path() else {
        return QuestionnaireSpec::builtin().context("built-in questionnaire is invalid");
    };

    let document = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read questionnaire {}", path.display()))?;
    QuestionnaireSpec::from_json(&document)
        .with_context(|| format!("failed to parse questionnaire {}", path.display()))
}

#[cfg(test)]
mod tests {
    use er_config::QuestionnaireConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_with_year(year: i32) -> ExitReadyConfig {
        let mut config = ExitReadyConfig::default();
        config.general.anchor_year = Some(year);
        config
    }

    #[test]
    fn fresh_context_starts_from_initial_snapshot() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        let ctx = AppContext::from_parts(config_with_year(2026), spec, tmp.path().to_path_buf())
            .expect("context");

        let snapshot = ctx.snapshot().expect("snapshot");
        assert_eq!(snapshot.responses.len(), 36);
        assert_eq!(snapshot.valuation.forecast_financials[0].year, 2026);
        assert_eq!(ctx.codec.anchor_year(), 2026);
    }

    #[test]
    fn saved_snapshot_is_returned() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        let ctx = AppContext::from_parts(config_with_year(2026), spec, tmp.path().to_path_buf())
            .expect("context");

        let mut snapshot = ctx.snapshot().expect("snapshot");
        snapshot.lifecycle = Some("fiveM".into());
        ctx.save(&snapshot).expect("save");

        assert_eq!(ctx.snapshot().expect("reload").lifecycle_id(), Some("fiveM"));
    }

    #[test]
    fn missing_custom_questionnaire_is_reported() {
        let config = ExitReadyConfig {
            questionnaire: QuestionnaireConfig {
                path: "/nonexistent/questionnaire.json".into(),
            },
            ..ExitReadyConfig::default()
        };
        let error = load_questionnaire(&config).expect_err("missing file should fail");
        assert!(format!("{error:#}").contains("failed to read questionnaire"));
    }
}
