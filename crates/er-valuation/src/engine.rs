//! The valuation calculation.

use er_core::enums::{BusinessType, ValuationMethod};
use er_core::valuation::{
    FinancialYear, ValuationAdjustment, ValuationInputs, ValuationResult, ValueRange,
};

use crate::adjustments::apply_adjustments;
use crate::caveats::{self, confidence};
use crate::multiples::base_multiples;

/// Ceiling on latest turnover for the revenue-multiple fallback.
pub const MAX_TURNOVER_FOR_REVENUE_MULTIPLE: f64 = 3_000_000.0;

pub const EBITDA_LABEL: &str = "Normalised EBITDA/Profit";
pub const TURNOVER_LABEL: &str = "Annual Turnover";

/// Business type set and at least one year with positive turnover or EBITDA.
#[must_use]
pub fn has_minimum_data(inputs: &ValuationInputs) -> bool {
    inputs.business_type.is_some() && inputs.all_years().any(FinancialYear::has_positive_data)
}

/// Mean of every provided EBITDA figure, zero and negative values included.
#[must_use]
pub fn normalised_ebitda<'a>(years: impl IntoIterator<Item = &'a FinancialYear>) -> Option<f64> {
    let values: Vec<f64> = years
        .into_iter()
        .filter_map(FinancialYear::usable_ebitda)
        .collect();
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    Some(values.iter().sum::<f64>() / count)
}

/// Positive turnover of the latest calendar year that has one.
#[must_use]
pub fn latest_turnover<'a>(years: impl IntoIterator<Item = &'a FinancialYear>) -> Option<f64> {
    years
        .into_iter()
        .filter_map(|year| year.positive_turnover().map(|turnover| (year.year, turnover)))
        .max_by_key(|(year, _)| *year)
        .map(|(_, turnover)| turnover)
}

/// Indicative enterprise and equity value ranges for `inputs`.
///
/// Never fails: missing or unusable data produces a non-calculable result
/// whose caveats say what to provide.
#[must_use]
pub fn calculate_valuation(inputs: &ValuationInputs) -> ValuationResult {
    let Some(business_type) = inputs.business_type.filter(|_| has_minimum_data(inputs)) else {
        tracing::debug!("valuation inputs below minimum data");
        return insufficient_data(inputs);
    };

    if let Some(ebitda) = normalised_ebitda(inputs.all_years()).filter(|mean| *mean > 0.0) {
        return ebitda_valuation(inputs, business_type, ebitda);
    }

    match latest_turnover(inputs.all_years()) {
        Some(turnover) if turnover <= MAX_TURNOVER_FOR_REVENUE_MULTIPLE => {
            revenue_valuation(inputs, business_type, turnover)
        }
        Some(turnover) => {
            tracing::debug!(turnover, "turnover above revenue-multiple ceiling without EBITDA");
            ValuationResult::insufficient(vec![
                caveats::EBITDA_REQUIRED.to_string(),
                caveats::EBITDA_PROMPT.to_string(),
            ])
        }
        None => {
            tracing::debug!("normalised EBITDA not positive and no turnover to fall back on");
            ValuationResult::insufficient(vec![caveats::NON_POSITIVE_EBITDA.to_string()])
        }
    }
}

fn ebitda_valuation(
    inputs: &ValuationInputs,
    business_type: BusinessType,
    ebitda: f64,
) -> ValuationResult {
    let base = base_multiples(business_type).ebitda;
    let adjusted = apply_adjustments(base, inputs, Some(ebitda));
    tracing::debug!(
        method = ValuationMethod::EbitdaMultiple.as_str(),
        base_value = ebitda,
        factor = adjusted.factor,
        "valuation calculated"
    );
    calculable(
        inputs,
        ValuationMethod::EbitdaMultiple,
        ebitda,
        EBITDA_LABEL,
        adjusted.range,
        adjusted.adjustments,
    )
}

fn revenue_valuation(
    inputs: &ValuationInputs,
    business_type: BusinessType,
    turnover: f64,
) -> ValuationResult {
    let base = base_multiples(business_type).revenue;
    let adjusted = apply_adjustments(base, inputs, None);
    tracing::debug!(
        method = ValuationMethod::RevenueMultiple.as_str(),
        base_value = turnover,
        factor = adjusted.factor,
        "valuation calculated"
    );
    calculable(
        inputs,
        ValuationMethod::RevenueMultiple,
        turnover,
        TURNOVER_LABEL,
        adjusted.range,
        adjusted.adjustments,
    )
}

fn calculable(
    inputs: &ValuationInputs,
    method: ValuationMethod,
    base_value: f64,
    label: &str,
    multiple: ValueRange,
    adjustments: Vec<ValuationAdjustment>,
) -> ValuationResult {
    let enterprise = ValueRange::new(base_value * multiple.min, base_value * multiple.max);
    let debt = inputs.usable_debt().unwrap_or(0.0);
    let equity = ValueRange::new(
        (enterprise.min - debt).max(0.0),
        (enterprise.max - debt).max(0.0),
    );
    ValuationResult {
        is_calculable: true,
        method,
        enterprise_value: Some(enterprise),
        equity_value: Some(equity),
        multiple: Some(multiple),
        base_value: Some(base_value),
        base_value_label: label.to_string(),
        adjustments,
        confidence: confidence(inputs),
        caveats: caveats::caveats(inputs, method, base_value),
    }
}

fn insufficient_data(inputs: &ValuationInputs) -> ValuationResult {
    let mut missing = Vec::new();
    if inputs.business_type.is_none() {
        missing.push(caveats::MISSING_BUSINESS_TYPE.to_string());
    }
    if !inputs.all_years().any(FinancialYear::has_positive_data) {
        missing.push(caveats::MISSING_FINANCIALS.to_string());
    }
    ValuationResult::insufficient(missing)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn year(year: i32, turnover: Option<f64>, ebitda: Option<f64>) -> FinancialYear {
        FinancialYear {
            year,
            turnover,
            ebitda,
        }
    }

    #[test]
    fn normalised_ebitda_averages_every_provided_value() {
        let years = [
            year(2023, None, Some(100_000.0)),
            year(2024, None, None),
            year(2025, None, Some(-40_000.0)),
            year(2026, None, Some(0.0)),
        ];
        assert_eq!(normalised_ebitda(&years), Some(20_000.0));
        assert_eq!(normalised_ebitda(&[year(2023, Some(1.0), None)]), None);
    }

    #[test]
    fn normalised_ebitda_skips_nan() {
        let years = [year(2023, None, Some(f64::NAN)), year(2024, None, Some(300_000.0))];
        assert_eq!(normalised_ebitda(&years), Some(300_000.0));
    }

    #[test]
    fn latest_turnover_uses_calendar_year() {
        let years = [
            year(2027, Some(900_000.0), None),
            year(2023, Some(400_000.0), None),
            year(2028, Some(0.0), None),
        ];
        assert_eq!(latest_turnover(&years), Some(900_000.0));
        assert_eq!(latest_turnover(&[year(2023, Some(-5.0), None)]), None);
    }

    #[test]
    fn minimum_data_needs_business_type() {
        let mut inputs = ValuationInputs::for_year(2026);
        inputs.historical_financials[0].turnover = Some(10_000.0);
        assert!(!has_minimum_data(&inputs));
        inputs.business_type = Some(BusinessType::Service);
        assert!(has_minimum_data(&inputs));
    }

    #[test]
    fn negative_mean_without_turnover_is_explained() {
        let mut inputs = ValuationInputs::for_year(2026);
        inputs.business_type = Some(BusinessType::Product);
        inputs.historical_financials[0].ebitda = Some(50_000.0);
        inputs.historical_financials[1].ebitda = Some(-150_000.0);
        let result = calculate_valuation(&inputs);
        assert!(!result.is_calculable);
        assert_eq!(result.caveats, vec![caveats::NON_POSITIVE_EBITDA]);
    }
}
