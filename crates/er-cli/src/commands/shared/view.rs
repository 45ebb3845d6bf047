//! Table-mode views shared by several commands.

use er_core::valuation::ValueRange;
use er_core::{AssessmentSnapshot, QuestionnaireSpec, ValuationResult};
use er_valuation::format::UNSET;
use er_valuation::{format_currency, format_number};

use crate::output::Table;

pub fn format_multiple(range: Option<&ValueRange>) -> String {
    range.map_or_else(
        || UNSET.to_string(),
        |range| format!("{:.1}–{:.1}×", range.min, range.max),
    )
}

pub fn format_value_range(range: Option<&ValueRange>) -> String {
    range.map_or_else(
        || UNSET.to_string(),
        |range| {
            format!(
                "{} – {}",
                format_currency(Some(range.min)),
                format_currency(Some(range.max))
            )
        },
    )
}

fn sector_name(spec: &QuestionnaireSpec, id: Option<&str>) -> String {
    id.map_or_else(
        || UNSET.to_string(),
        |id| {
            spec.sectors()
                .iter()
                .find(|sector| sector.id == id)
                .map_or_else(|| id.to_string(), |sector| sector.name.clone())
        },
    )
}

fn phase_name(spec: &QuestionnaireSpec, id: Option<&str>) -> String {
    id.map_or_else(
        || UNSET.to_string(),
        |id| {
            spec.lifecycle_phases()
                .iter()
                .find(|phase| phase.id == id)
                .map_or_else(|| id.to_string(), |phase| phase.name.clone())
        },
    )
}

/// Selections, answers per domain, business characteristics and the six
/// financial years.
pub fn snapshot_tables(
    snapshot: &AssessmentSnapshot,
    spec: &QuestionnaireSpec,
) -> Vec<(String, Table)> {
    let mut selection = Table::new(["key", "value"]);
    selection
        .row(["sector".to_string(), sector_name(spec, snapshot.sector_id())])
        .row(["lifecycle".to_string(), phase_name(spec, snapshot.lifecycle_id())]);

    let mut answers = Table::new(["domain", "answers"]);
    for dimension in &spec.dimensions {
        let values = dimension
            .questions
            .iter()
            .map(|question| {
                snapshot
                    .responses
                    .get(&question.id)
                    .map_or_else(|| "·".to_string(), |value| value.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ");
        answers.row([dimension.name.clone(), values]);
    }

    let inputs = &snapshot.valuation;
    let mut business = Table::new(["key", "value"]);
    business
        .row([
            "business type",
            inputs.business_type.map_or(UNSET, |t| t.label()),
        ])
        .row(["growth", inputs.growth_trend.map_or(UNSET, |g| g.label())])
        .row([
            "customer concentration",
            inputs.customer_concentration.map_or(UNSET, |c| c.label()),
        ]);
    business
        .row([
            "recurring revenue".to_string(),
            inputs
                .recurring_revenue_percentage
                .map_or_else(|| UNSET.to_string(), |pct| format!("{pct}%")),
        ])
        .row(["total debt".to_string(), format_currency(inputs.total_debt)]);

    let mut years = Table::new(["year", "period", "turnover", "ebitda"]);
    let periods = inputs
        .historical_financials
        .iter()
        .map(|year| (year, "historical"))
        .chain(inputs.forecast_financials.iter().map(|year| (year, "forecast")));
    for (year, period) in periods {
        years.row([
            year.year.to_string(),
            period.to_string(),
            format_currency(year.turnover),
            format_currency(year.ebitda),
        ]);
    }

    vec![
        ("Benchmark".to_string(), selection),
        ("Answers".to_string(), answers),
        ("Business".to_string(), business),
        ("Financials".to_string(), years),
    ]
}

/// Headline figures, adjustments and caveats.
pub fn valuation_tables(result: &ValuationResult) -> Vec<(String, Table)> {
    let mut summary = Table::new(["key", "value"]);
    summary
        .row(["method", result.method.as_str()])
        .row(["confidence", result.confidence.as_str()]);
    summary
        .row([
            result.base_value_label.clone(),
            format_currency(result.base_value),
        ])
        .row(["multiple".to_string(), format_multiple(result.multiple.as_ref())])
        .row([
            "enterprise value".to_string(),
            format_value_range(result.enterprise_value.as_ref()),
        ])
        .row([
            "equity value".to_string(),
            format_value_range(result.equity_value.as_ref()),
        ]);

    let mut tables = vec![("Valuation".to_string(), summary)];

    if !result.adjustments.is_empty() {
        let mut adjustments = Table::new(["factor", "impact", "change", "explanation"]);
        for adjustment in &result.adjustments {
            adjustments.row([
                adjustment.factor.clone(),
                adjustment.impact.as_str().to_string(),
                format!("{}%", format_number(Some(adjustment.percentage_change))),
                adjustment.explanation.clone(),
            ]);
        }
        tables.push(("Adjustments".to_string(), adjustments));
    }

    if !result.caveats.is_empty() {
        let mut caveats = Table::new(["caveat"]);
        for caveat in &result.caveats {
            caveats.row([caveat.as_str()]);
        }
        tables.push(("Caveats".to_string(), caveats));
    }

    tables
}
