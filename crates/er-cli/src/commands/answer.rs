use anyhow::bail;
use er_core::{AssessmentSnapshot, QuestionnaireSpec};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnswerArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerResponse {
    question_id: String,
    question: String,
    value: i32,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

/// Handle `exr answer`.
pub fn handle(args: &AnswerArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut snapshot = ctx.snapshot()?;
    let response = apply(&mut snapshot, &ctx.spec, &args.question_id, args.value)?;
    ctx.save(&snapshot)?;

    if flags.quiet {
        return Ok(());
    }
    output(&response, flags.format)
}

fn apply(
    snapshot: &mut AssessmentSnapshot,
    spec: &QuestionnaireSpec,
    question_id: &str,
    value: i32,
) -> anyhow::Result<AnswerResponse> {
    let Some(question) = spec.question(question_id) else {
        bail!("unknown question '{question_id}'");
    };
    if !(spec.scale.min..=spec.scale.max).contains(&value) {
        bail!(
            "answer {value} is outside the scale {}..={}",
            spec.scale.min,
            spec.scale.max
        );
    }

    snapshot.responses.set(question.id.clone(), value);
    tracing::debug!(question_id, value, "recorded answer");

    Ok(AnswerResponse {
        question_id: question.id.clone(),
        question: question.text.clone(),
        value,
        label: spec.label_for(value),
        explanation: spec.explanation_for(question_id, value).map(ToString::to_string),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup() -> (QuestionnaireSpec, AssessmentSnapshot) {
        let spec = QuestionnaireSpec::builtin().expect("builtin questionnaire");
        let snapshot = AssessmentSnapshot::initial(&spec, 2026);
        (spec, snapshot)
    }

    #[test]
    fn answer_is_recorded() {
        let (spec, mut snapshot) = setup();
        let response = apply(&mut snapshot, &spec, "l3", 4).expect("valid answer");
        assert_eq!(snapshot.responses.get("l3"), Some(4));
        assert_eq!(response.value, 4);
        assert_eq!(response.label, spec.label_for(4));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let (spec, mut snapshot) = setup();
        let err = apply(&mut snapshot, &spec, "z9", 1).expect_err("unknown id");
        assert_eq!(err.to_string(), "unknown question 'z9'");
    }

    #[test]
    fn out_of_scale_answer_leaves_snapshot_untouched() {
        let (spec, mut snapshot) = setup();
        let before = snapshot.clone();
        let err = apply(&mut snapshot, &spec, "f1", spec.scale.max + 1).expect_err("too high");
        assert!(err.to_string().contains("outside the scale"));
        assert_eq!(snapshot, before);
    }
}
