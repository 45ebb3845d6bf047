//! Confidence rating and caveat text.

use er_core::enums::{Confidence, ValuationMethod};
use er_core::valuation::ValuationInputs;

pub const INDICATIVE_ONLY: &str = "This is an indicative estimate only, not a professional valuation.";
pub const REVENUE_METHOD: &str =
    "Valuation based on turnover multiple (EBITDA data would improve accuracy).";
pub const LIMITED_HISTORY: &str =
    "Limited historical data available. More years of data would improve accuracy.";
pub const KEY_PERSON_RISK: &str = "Small business valuations may be significantly affected by owner involvement and key person risk.";
pub const ADVISORY_RECOMMENDED: &str =
    "For businesses of this size, professional valuation advisory is strongly recommended.";
pub const NO_DEBT: &str = "No debt information provided. Equity value assumes zero debt.";
pub const MORE_CHARACTERISTICS: &str =
    "Providing additional business characteristics would improve valuation accuracy.";

pub const MISSING_BUSINESS_TYPE: &str = "Please select a business type to calculate valuation.";
pub const MISSING_FINANCIALS: &str =
    "Please provide at least one year of financial data (turnover or EBITDA/profit).";
pub const EBITDA_REQUIRED: &str =
    "EBITDA/Profit data is required for businesses with turnover above £3M.";
pub const EBITDA_PROMPT: &str = "Please provide at least one year of EBITDA or profit data.";
pub const NON_POSITIVE_EBITDA: &str =
    "Average EBITDA/Profit is not positive. Please provide turnover to use a turnover-based estimate.";

const KEY_PERSON_THRESHOLD: f64 = 200_000.0;
const ADVISORY_THRESHOLD: f64 = 5_000_000.0;

/// High with three historical years and every optional set; medium with two
/// years or every optional set; low otherwise.
#[must_use]
pub fn confidence(inputs: &ValuationInputs) -> Confidence {
    let years = inputs.historical_years_with_data();
    let all_optionals = inputs.has_all_optionals();
    if years >= 3 && all_optionals {
        Confidence::High
    } else if years >= 2 || all_optionals {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Caveats for a calculable result, in display order.
#[must_use]
pub fn caveats(inputs: &ValuationInputs, method: ValuationMethod, base_value: f64) -> Vec<String> {
    let ebitda_based = method == ValuationMethod::EbitdaMultiple;
    [
        (true, INDICATIVE_ONLY),
        (method == ValuationMethod::RevenueMultiple, REVENUE_METHOD),
        (inputs.historical_years_with_data() < 2, LIMITED_HISTORY),
        (ebitda_based && base_value < KEY_PERSON_THRESHOLD, KEY_PERSON_RISK),
        (ebitda_based && base_value > ADVISORY_THRESHOLD, ADVISORY_RECOMMENDED),
        (inputs.usable_debt().is_none(), NO_DEBT),
        (!inputs.has_all_optionals(), MORE_CHARACTERISTICS),
    ]
    .into_iter()
    .filter_map(|(applies, text)| applies.then(|| text.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use er_core::enums::{CustomerConcentration, GrowthTrend};
    use pretty_assertions::assert_eq;

    use super::*;

    fn with_history(years: usize) -> ValuationInputs {
        let mut inputs = ValuationInputs::for_year(2026);
        for year in inputs.historical_financials.iter_mut().take(years) {
            year.turnover = Some(500_000.0);
        }
        inputs
    }

    fn set_optionals(inputs: &mut ValuationInputs) {
        inputs.growth_trend = Some(GrowthTrend::Flat);
        inputs.customer_concentration = Some(CustomerConcentration::Low);
        inputs.recurring_revenue_percentage = Some(10);
    }

    #[test]
    fn confidence_tiers() {
        assert_eq!(confidence(&with_history(1)), Confidence::Low);
        assert_eq!(confidence(&with_history(2)), Confidence::Medium);
        assert_eq!(confidence(&with_history(3)), Confidence::Medium);

        let mut inputs = with_history(0);
        set_optionals(&mut inputs);
        assert_eq!(confidence(&inputs), Confidence::Medium);

        let mut inputs = with_history(3);
        set_optionals(&mut inputs);
        assert_eq!(confidence(&inputs), Confidence::High);
    }

    #[test]
    fn forecast_years_do_not_count_toward_confidence() {
        let mut inputs = with_history(1);
        inputs.forecast_financials[0].turnover = Some(1.0);
        inputs.forecast_financials[1].turnover = Some(1.0);
        assert_eq!(confidence(&inputs), Confidence::Low);
    }

    #[test]
    fn full_caveat_order() {
        let inputs = with_history(1);
        assert_eq!(
            caveats(&inputs, ValuationMethod::EbitdaMultiple, 150_000.0),
            vec![
                INDICATIVE_ONLY,
                LIMITED_HISTORY,
                KEY_PERSON_RISK,
                NO_DEBT,
                MORE_CHARACTERISTICS,
            ]
        );
    }

    #[test]
    fn size_caveats_only_for_ebitda_method() {
        let mut inputs = with_history(3);
        set_optionals(&mut inputs);
        inputs.total_debt = Some(0.0);
        assert_eq!(
            caveats(&inputs, ValuationMethod::RevenueMultiple, 100_000.0),
            vec![INDICATIVE_ONLY, REVENUE_METHOD]
        );
        assert_eq!(
            caveats(&inputs, ValuationMethod::EbitdaMultiple, 6_000_000.0),
            vec![INDICATIVE_ONLY, ADVISORY_RECOMMENDED]
        );
    }
}
