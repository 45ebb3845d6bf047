use er_core::{AssessmentSnapshot, QuestionnaireSpec};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SelectArgs;
use crate::commands::shared::parse::parse_selection;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionResponse {
    sector: Option<String>,
    lifecycle: Option<String>,
}

/// Handle `exr select`.
pub fn handle(args: &SelectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut snapshot = ctx.snapshot()?;
    apply(&mut snapshot, &ctx.spec, args)?;
    ctx.save(&snapshot)?;

    if flags.quiet {
        return Ok(());
    }
    output(
        &SelectionResponse {
            sector: snapshot.sector,
            lifecycle: snapshot.lifecycle,
        },
        flags.format,
    )
}

/// Both flags are validated before either is applied.
fn apply(
    snapshot: &mut AssessmentSnapshot,
    spec: &QuestionnaireSpec,
    args: &SelectArgs,
) -> anyhow::Result<()> {
    let sector = args
        .sector
        .as_deref()
        .map(|raw| parse_selection(raw, &spec.sector_ids(), "sector"))
        .transpose()?;
    let lifecycle = args
        .lifecycle
        .as_deref()
        .map(|raw| parse_selection(raw, &spec.lifecycle_phase_ids(), "lifecycle phase"))
        .transpose()?;

    if let Some(sector) = sector {
        snapshot.sector = sector;
    }
    if let Some(lifecycle) = lifecycle {
        snapshot.lifecycle = lifecycle;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(sector: Option<&str>, lifecycle: Option<&str>) -> SelectArgs {
        SelectArgs {
            sector: sector.map(str::to_string),
            lifecycle: lifecycle.map(str::to_string),
        }
    }

    #[test]
    fn selects_and_clears_independently() {
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        let mut snapshot = AssessmentSnapshot::initial(&spec, 2026);

        apply(&mut snapshot, &spec, &args(Some("technology"), Some("fiveM"))).expect("select");
        assert_eq!(snapshot.sector_id(), Some("technology"));
        assert_eq!(snapshot.lifecycle_id(), Some("fiveM"));

        apply(&mut snapshot, &spec, &args(Some("none"), None)).expect("clear sector");
        assert_eq!(snapshot.sector_id(), None);
        assert_eq!(snapshot.lifecycle_id(), Some("fiveM"));
    }

    #[test]
    fn invalid_lifecycle_does_not_apply_valid_sector() {
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        let mut snapshot = AssessmentSnapshot::initial(&spec, 2026);

        let err = apply(&mut snapshot, &spec, &args(Some("technology"), Some("hundredM")))
            .expect_err("unknown phase");
        assert!(err.to_string().starts_with("unknown lifecycle phase 'hundredM'"));
        assert_eq!(snapshot.sector_id(), None);
    }
}
