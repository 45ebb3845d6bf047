//! Valuation inputs and results.
//!
//! Every financial figure is optional. `None` means "not provided" and is
//! never conflated with zero: the valuation engine and the codec both keep the
//! distinction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    AdjustmentImpact, BusinessType, Confidence, CustomerConcentration, GrowthTrend,
    ValuationMethod,
};

/// Number of historical and of forecast years collected.
pub const YEARS_PER_PERIOD: usize = 3;

/// Figures for a single financial year, in GBP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FinancialYear {
    pub year: i32,
    pub turnover: Option<f64>,
    /// EBITDA, or profit for businesses that do not report EBITDA.
    pub ebitda: Option<f64>,
}

impl FinancialYear {
    #[must_use]
    pub const fn empty(year: i32) -> Self {
        Self {
            year,
            turnover: None,
            ebitda: None,
        }
    }

    /// Turnover when provided, finite and positive.
    #[must_use]
    pub fn positive_turnover(&self) -> Option<f64> {
        self.turnover.filter(|v| v.is_finite() && *v > 0.0)
    }

    /// EBITDA when provided and finite (zero and negative values included).
    #[must_use]
    pub fn usable_ebitda(&self) -> Option<f64> {
        self.ebitda.filter(|v| v.is_finite())
    }

    /// Whether the year carries a positive turnover or a positive EBITDA.
    #[must_use]
    pub fn has_positive_data(&self) -> bool {
        self.positive_turnover().is_some() || self.usable_ebitda().is_some_and(|v| v > 0.0)
    }
}

/// Everything the valuation engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInputs {
    pub business_type: Option<BusinessType>,
    /// Completed years, oldest first.
    pub historical_financials: [FinancialYear; YEARS_PER_PERIOD],
    /// Current and future years, oldest first.
    pub forecast_financials: [FinancialYear; YEARS_PER_PERIOD],
    pub total_debt: Option<f64>,
    pub growth_trend: Option<GrowthTrend>,
    pub customer_concentration: Option<CustomerConcentration>,
    /// Share of revenue that is recurring, 0-100.
    pub recurring_revenue_percentage: Option<u8>,
}

impl ValuationInputs {
    /// Empty inputs laid out around `anchor_year`: historical years
    /// `anchor-3..=anchor-1`, forecast years `anchor..=anchor+2`.
    #[must_use]
    pub const fn for_year(anchor_year: i32) -> Self {
        Self {
            business_type: None,
            historical_financials: [
                FinancialYear::empty(anchor_year - 3),
                FinancialYear::empty(anchor_year - 2),
                FinancialYear::empty(anchor_year - 1),
            ],
            forecast_financials: [
                FinancialYear::empty(anchor_year),
                FinancialYear::empty(anchor_year + 1),
                FinancialYear::empty(anchor_year + 2),
            ],
            total_debt: None,
            growth_trend: None,
            customer_concentration: None,
            recurring_revenue_percentage: None,
        }
    }

    /// Historical years followed by forecast years.
    pub fn all_years(&self) -> impl Iterator<Item = &FinancialYear> {
        self.historical_financials
            .iter()
            .chain(self.forecast_financials.iter())
    }

    /// Historical years with a positive turnover or EBITDA.
    #[must_use]
    pub fn historical_years_with_data(&self) -> usize {
        self.historical_financials
            .iter()
            .filter(|year| year.has_positive_data())
            .count()
    }

    /// Whether growth trend, customer concentration and recurring revenue are all set.
    #[must_use]
    pub const fn has_all_optionals(&self) -> bool {
        self.growth_trend.is_some()
            && self.customer_concentration.is_some()
            && self.recurring_revenue_percentage.is_some()
    }

    /// Total debt when provided and finite.
    #[must_use]
    pub fn usable_debt(&self) -> Option<f64> {
        self.total_debt.filter(|v| v.is_finite())
    }
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One named adjustment applied to the base multiple range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValuationAdjustment {
    pub factor: String,
    pub impact: AdjustmentImpact,
    /// Signed percentage, e.g. -25 for a 25% discount.
    pub percentage_change: f64,
    pub explanation: String,
}

/// Outcome of a valuation, recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub is_calculable: bool,
    pub method: ValuationMethod,
    pub enterprise_value: Option<ValueRange>,
    /// Enterprise value less total debt, floored at zero per bound.
    pub equity_value: Option<ValueRange>,
    pub multiple: Option<ValueRange>,
    pub base_value: Option<f64>,
    pub base_value_label: String,
    pub adjustments: Vec<ValuationAdjustment>,
    pub confidence: Confidence,
    pub caveats: Vec<String>,
}

impl ValuationResult {
    /// A non-calculable result carrying only explanatory caveats.
    #[must_use]
    pub const fn insufficient(caveats: Vec<String>) -> Self {
        Self {
            is_calculable: false,
            method: ValuationMethod::InsufficientData,
            enterprise_value: None,
            equity_value: None,
            multiple: None,
            base_value: None,
            base_value_label: String::new(),
            adjustments: Vec::new(),
            confidence: Confidence::Low,
            caveats,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn for_year_lays_out_chronological_years() {
        let inputs = ValuationInputs::for_year(2026);
        let years: Vec<i32> = inputs.all_years().map(|y| y.year).collect();
        assert_eq!(years, vec![2023, 2024, 2025, 2026, 2027, 2028]);
        assert!(inputs.all_years().all(|y| y.turnover.is_none() && y.ebitda.is_none()));
    }

    #[test]
    fn negative_ebitda_is_usable_but_not_positive_data() {
        let year = FinancialYear {
            year: 2024,
            turnover: None,
            ebitda: Some(-50_000.0),
        };
        assert_eq!(year.usable_ebitda(), Some(-50_000.0));
        assert!(!year.has_positive_data());
    }

    #[test]
    fn non_finite_figures_are_ignored() {
        let year = FinancialYear {
            year: 2024,
            turnover: Some(f64::NAN),
            ebitda: Some(f64::INFINITY),
        };
        assert_eq!(year.positive_turnover(), None);
        assert_eq!(year.usable_ebitda(), None);
    }

    #[test]
    fn inputs_serialize_with_camel_case_keys() {
        let value = serde_json::to_value(ValuationInputs::for_year(2026)).unwrap();
        assert!(value.get("historicalFinancials").is_some());
        assert!(value.get("recurringRevenuePercentage").is_some());
        assert_eq!(value["businessType"], serde_json::Value::Null);
    }
}
