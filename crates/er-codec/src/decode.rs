//! Code → snapshot.

use er_core::valuation::{FinancialYear, ValuationInputs};
use er_core::{AssessmentSnapshot, Responses};

use crate::bigint::PackedInt;
use crate::context::{CodecContext, selection_id};
use crate::error::CodecError;
use crate::fields;
use crate::radix::{BASE36, from_base36};
use crate::{MULTIPLIER, OFFSET};

/// Decode `code` against `ctx`.
///
/// Whitespace around the code is ignored and lowercase letters are accepted.
/// Codes from before the valuation block existed decode with every valuation
/// input unset. Decoding is all-or-nothing.
pub fn decode(code: &str, ctx: &CodecContext) -> Result<AssessmentSnapshot, CodecError> {
    let normalized = code.trim().to_ascii_uppercase();
    let mut chars = normalized.chars();
    let Some(check) = chars.next_back() else {
        return Err(CodecError::MalformedInput("code is empty".into()));
    };
    let body = chars.as_str();
    let (Some(obfuscated), Some(check)) = (from_base36(body), check.to_digit(BASE36)) else {
        return Err(CodecError::MalformedInput(
            "code may only contain letters and digits".into(),
        ));
    };
    if body.is_empty() {
        return Err(CodecError::InvalidCode("code is too short".into()));
    }
    if obfuscated.rem_small(BASE36) != check {
        return Err(CodecError::InvalidCode("checksum mismatch".into()));
    }

    let mut acc = obfuscated
        .checked_sub_small(OFFSET)
        .ok_or_else(|| CodecError::InvalidCode("not an exitready code".into()))?;
    if acc.divmod_small(MULTIPLIER) != 0 {
        return Err(CodecError::InvalidCode("not an exitready code".into()));
    }

    if let Some(snapshot) = unpack_current(acc.clone(), ctx) {
        return Ok(snapshot);
    }
    tracing::debug!("code does not carry a valuation block, trying legacy layout");
    unpack_assessment(acc, ctx)
        .map(|(responses, sector, lifecycle)| AssessmentSnapshot {
            responses,
            sector,
            lifecycle,
            valuation: ValuationInputs::for_year(ctx.anchor_year()),
        })
        .ok_or_else(|| {
            CodecError::InvalidCode("code does not match this questionnaire".into())
        })
}

fn unpack_current(mut acc: PackedInt, ctx: &CodecContext) -> Option<AssessmentSnapshot> {
    let valuation = unpack_valuation(&mut acc, ctx.anchor_year());
    if acc.divmod_small(fields::VERSION_RADIX) != fields::FORMAT_VERSION {
        return None;
    }
    let (responses, sector, lifecycle) = unpack_assessment(acc, ctx)?;
    Some(AssessmentSnapshot {
        responses,
        sector,
        lifecycle,
        valuation,
    })
}

/// Reverse of `pack_valuation`: least significant field first.
fn unpack_valuation(acc: &mut PackedInt, anchor_year: i32) -> ValuationInputs {
    let mut inputs = ValuationInputs::for_year(anchor_year);
    inputs.recurring_revenue_percentage =
        fields::recurring_from_digit(acc.divmod_small(fields::RECURRING_RADIX));
    inputs.customer_concentration =
        fields::concentration_from_digit(acc.divmod_small(fields::CONCENTRATION_RADIX));
    inputs.growth_trend = fields::growth_from_digit(acc.divmod_small(fields::GROWTH_RADIX));
    inputs.total_debt = fields::amount_from_digit(acc.divmod_small(fields::DEBT_RADIX));

    for year in inputs
        .forecast_financials
        .iter_mut()
        .rev()
        .chain(inputs.historical_financials.iter_mut().rev())
    {
        unpack_year(acc, year);
    }

    inputs.business_type =
        fields::business_type_from_digit(acc.divmod_small(fields::BUSINESS_TYPE_RADIX));
    inputs
}

fn unpack_year(acc: &mut PackedInt, year: &mut FinancialYear) {
    year.ebitda = fields::ebitda_from_digit(acc.divmod_small(fields::EBITDA_RADIX));
    year.turnover = fields::amount_from_digit(acc.divmod_small(fields::TURNOVER_RADIX));
}

/// Answers and selections. `None` if digits remain once every question is read.
fn unpack_assessment(
    mut acc: PackedInt,
    ctx: &CodecContext,
) -> Option<(Responses, Option<String>, Option<String>)> {
    let lifecycle = selection_id(ctx.phase_ids(), acc.divmod_small(ctx.phase_radix()));
    let sector = selection_id(ctx.sector_ids(), acc.divmod_small(ctx.sector_radix()));

    let radix = ctx.answer_radix();
    let mut responses = Responses::new();
    for question_id in ctx.question_ids().iter().rev() {
        let digit = acc.divmod_small(radix);
        responses.set(question_id.clone(), i32::try_from(digit).ok()?);
    }

    acc.is_zero().then_some((responses, sector, lifecycle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CodecContext {
        CodecContext::new(
            vec!["a".into(), "b".into()],
            4,
            vec!["s1".into()],
            vec!["p1".into(), "p2".into()],
            2026,
        )
        .unwrap()
    }

    #[test]
    fn rejects_single_character() {
        assert_eq!(
            decode("0", &ctx()),
            Err(CodecError::InvalidCode("code is too short".into()))
        );
    }

    #[test]
    fn rejects_values_below_offset() {
        // "10" = 36, checksum of 36 is "0".
        assert!(matches!(decode("100", &ctx()), Err(CodecError::InvalidCode(_))));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(matches!(
            decode("JBKRVé", &ctx()),
            Err(CodecError::MalformedInput(_))
        ));
    }
}
