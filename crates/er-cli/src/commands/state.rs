use std::path::Path;

use anyhow::Context;
use er_core::AssessmentSnapshot;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StateCommands;
use crate::commands::shared::view::snapshot_tables;
use crate::context::AppContext;
use crate::output::{output, output_with_tables};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClearResponse {
    path: String,
    removed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PathsResponse {
    state_file: String,
    saved: bool,
    questionnaire: String,
    anchor_year: i32,
}

/// Handle `exr state`.
pub fn handle(action: &StateCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StateCommands::Show => {
            let snapshot = ctx.snapshot()?;
            output_with_tables(&snapshot, flags.format, |snapshot| {
                snapshot_tables(snapshot, &ctx.spec)
            })
        }
        StateCommands::Clear => {
            let removed = ctx.store.clear()?;
            if flags.quiet {
                return Ok(());
            }
            output(
                &ClearResponse {
                    path: ctx.store.path().display().to_string(),
                    removed,
                },
                flags.format,
            )
        }
        StateCommands::Import { path } => {
            let snapshot = import(Path::new(path), ctx)?;
            if flags.quiet {
                return Ok(());
            }
            output_with_tables(&snapshot, flags.format, |snapshot| {
                snapshot_tables(snapshot, &ctx.spec)
            })
        }
        StateCommands::Path => output(
            &PathsResponse {
                state_file: ctx.store.path().display().to_string(),
                saved: ctx.store.path().exists(),
                questionnaire: ctx
                    .config
                    .questionnaire
                    .custom_path()
                    .map_or_else(|| "built-in".to_string(), |path| path.display().to_string()),
                anchor_year: ctx.anchor_year,
            },
            flags.format,
        ),
    }
}

/// Read a snapshot JSON file and make it the saved state.
///
/// Figures the export code cannot hold exactly are reported as warnings;
/// the file itself is stored unchanged.
fn import(path: &Path, ctx: &AppContext) -> anyhow::Result<AssessmentSnapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: AssessmentSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not an assessment snapshot", path.display()))?;

    for warning in er_codec::encode(&snapshot, &ctx.codec).warnings {
        tracing::warn!(%warning, "imported state will not survive an export code exactly");
    }

    ctx.save(&snapshot)?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use er_config::ExitReadyConfig;
    use er_core::QuestionnaireSpec;
    use pretty_assertions::assert_eq;

    use super::*;

    fn context(dir: &Path) -> AppContext {
        let mut config = ExitReadyConfig::default();
        config.general.anchor_year = Some(2026);
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        AppContext::from_parts(config, spec, dir.join("state")).expect("context")
    }

    #[test]
    fn import_replaces_saved_state() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = context(tmp.path());

        let mut exported = ctx.snapshot().expect("snapshot");
        exported.responses.set("o4", 2);
        exported.valuation.forecast_financials[1].ebitda = Some(-35_000.0);
        let file = tmp.path().join("export.json");
        std::fs::write(&file, serde_json::to_string(&exported).expect("serialize")).expect("write");

        let imported = import(&file, &ctx).expect("import");
        assert_eq!(imported, exported);
        assert_eq!(ctx.store.load().expect("load"), Some(exported));
    }

    #[test]
    fn import_of_invalid_file_keeps_saved_state() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = context(tmp.path());
        let saved = ctx.snapshot().expect("snapshot");
        ctx.save(&saved).expect("save");

        let file = tmp.path().join("broken.json");
        std::fs::write(&file, r#"{"responses": "nope"}"#).expect("write");

        let err = import(&file, &ctx).expect_err("invalid snapshot");
        assert!(format!("{err:#}").contains("is not an assessment snapshot"));
        assert_eq!(ctx.store.load().expect("load"), Some(saved));
    }
}
