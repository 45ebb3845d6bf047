//! Snapshot → code.

use er_core::AssessmentSnapshot;
use er_core::valuation::{FinancialYear, ValuationInputs};
use serde::Serialize;

use crate::bigint::PackedInt;
use crate::context::{CodecContext, selection_digit};
use crate::fields;
use crate::radix::{BASE36, digit_char, to_base36};
use crate::warnings::{EncodeWarning, SelectionKind};
use crate::{MULTIPLIER, OFFSET};

/// A finished code and every lossy transform applied while producing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoded {
    pub code: String,
    pub warnings: Vec<EncodeWarning>,
}

impl Encoded {
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Encode a snapshot against `ctx`.
///
/// Fields are packed most significant first: answers, sector, lifecycle,
/// version flag, then the valuation block.
#[must_use]
pub fn encode(snapshot: &AssessmentSnapshot, ctx: &CodecContext) -> Encoded {
    let mut warnings = Vec::new();
    let mut acc = PackedInt::zero();

    let radix = ctx.answer_radix();
    for question_id in ctx.question_ids() {
        let value = snapshot.responses.value_or_zero(question_id);
        acc.mul_add_small(radix, answer_digit(question_id, value, ctx.scale_max(), &mut warnings));
    }

    let sector = selection(
        ctx.sector_ids(),
        snapshot.sector_id(),
        SelectionKind::Sector,
        &mut warnings,
    );
    acc.mul_add_small(ctx.sector_radix(), sector);
    let lifecycle = selection(
        ctx.phase_ids(),
        snapshot.lifecycle_id(),
        SelectionKind::Lifecycle,
        &mut warnings,
    );
    acc.mul_add_small(ctx.phase_radix(), lifecycle);

    acc.mul_add_small(fields::VERSION_RADIX, fields::FORMAT_VERSION);
    pack_valuation(&mut acc, &snapshot.valuation, &mut warnings);

    for warning in &warnings {
        tracing::debug!(%warning, "lossy encode");
    }

    Encoded {
        code: render(acc),
        warnings,
    }
}

/// Obfuscate, render in base 36 and append the checksum character.
pub(crate) fn render(mut acc: PackedInt) -> String {
    acc.mul_add_small(MULTIPLIER, OFFSET);
    let mut code = to_base36(&acc);
    code.push(digit_char(acc.rem_small(BASE36)));
    code
}

fn answer_digit(
    question_id: &str,
    value: i32,
    scale_max: u32,
    warnings: &mut Vec<EncodeWarning>,
) -> u32 {
    let stored = u32::try_from(value).unwrap_or(0).min(scale_max);
    if i64::from(stored) != i64::from(value) {
        warnings.push(EncodeWarning::ResponseOutOfRange {
            question_id: question_id.to_string(),
            value,
            stored,
        });
    }
    stored
}

fn selection(
    ids: &[String],
    selected: Option<&str>,
    kind: SelectionKind,
    warnings: &mut Vec<EncodeWarning>,
) -> u32 {
    selection_digit(ids, selected).unwrap_or_else(|| {
        warnings.push(EncodeWarning::UnknownSelection {
            selection: kind,
            id: selected.unwrap_or_default().to_string(),
        });
        0
    })
}

fn pack_valuation(acc: &mut PackedInt, inputs: &ValuationInputs, warnings: &mut Vec<EncodeWarning>) {
    acc.mul_add_small(
        fields::BUSINESS_TYPE_RADIX,
        fields::business_type_digit(inputs.business_type),
    );

    let periods: [(&str, &[FinancialYear]); 2] = [
        ("historicalFinancials", &inputs.historical_financials),
        ("forecastFinancials", &inputs.forecast_financials),
    ];
    for (period, years) in periods {
        for (index, year) in years.iter().enumerate() {
            let turnover = fields::amount_digit(
                year.turnover,
                &format!("{period}[{index}].turnover"),
                warnings,
            );
            acc.mul_add_small(fields::TURNOVER_RADIX, turnover);
            let ebitda =
                fields::ebitda_digit(year.ebitda, &format!("{period}[{index}].ebitda"), warnings);
            acc.mul_add_small(fields::EBITDA_RADIX, ebitda);
        }
    }

    acc.mul_add_small(
        fields::DEBT_RADIX,
        fields::amount_digit(inputs.total_debt, "totalDebt", warnings),
    );
    acc.mul_add_small(fields::GROWTH_RADIX, fields::growth_digit(inputs.growth_trend));
    acc.mul_add_small(
        fields::CONCENTRATION_RADIX,
        fields::concentration_digit(inputs.customer_concentration),
    );
    acc.mul_add_small(
        fields::RECURRING_RADIX,
        fields::recurring_digit(inputs.recurring_revenue_percentage, warnings),
    );
}
