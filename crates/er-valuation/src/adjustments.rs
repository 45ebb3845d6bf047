//! Percentage adjustments and small-company range compression.
//!
//! Neutral outcomes (low concentration, under 50% recurring, flat growth)
//! produce no adjustment entry.

use er_core::enums::{AdjustmentImpact, CustomerConcentration, GrowthTrend};
use er_core::valuation::{ValuationAdjustment, ValuationInputs, ValueRange};

/// Normalised EBITDA below which the range is pulled toward its low end.
pub const SMALL_COMPANY_EBITDA: f64 = 500_000.0;
/// Share of the adjusted range a small company keeps.
pub const SMALL_COMPANY_RANGE_SHARE: f64 = 0.6;

/// Adjusted multiples and the entries that explain them.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedMultiples {
    /// Rounded to one decimal place.
    pub range: ValueRange,
    /// `1 + Σ percentages / 100`.
    pub factor: f64,
    pub adjustments: Vec<ValuationAdjustment>,
}

fn adjustment(
    factor: &str,
    impact: AdjustmentImpact,
    percentage_change: f64,
    explanation: impl Into<String>,
) -> ValuationAdjustment {
    ValuationAdjustment {
        factor: factor.to_string(),
        impact,
        percentage_change,
        explanation: explanation.into(),
    }
}

#[must_use]
pub fn concentration_adjustment(
    concentration: CustomerConcentration,
) -> Option<ValuationAdjustment> {
    match concentration {
        CustomerConcentration::High => Some(adjustment(
            "Customer concentration",
            AdjustmentImpact::Discount,
            -25.0,
            "High customer concentration (>40% from one customer) increases revenue risk",
        )),
        CustomerConcentration::Medium => Some(adjustment(
            "Customer concentration",
            AdjustmentImpact::Discount,
            -12.0,
            "Moderate customer concentration (20-40%) presents some risk",
        )),
        CustomerConcentration::Low => None,
    }
}

#[must_use]
pub fn recurring_adjustment(percentage: u8) -> Option<ValuationAdjustment> {
    if percentage >= 70 {
        Some(adjustment(
            "Recurring revenue",
            AdjustmentImpact::Premium,
            15.0,
            format!("High recurring revenue ({percentage}%) provides predictable income"),
        ))
    } else if percentage >= 50 {
        Some(adjustment(
            "Recurring revenue",
            AdjustmentImpact::Premium,
            7.0,
            format!("Good recurring revenue ({percentage}%) supports valuation"),
        ))
    } else {
        None
    }
}

#[must_use]
pub fn growth_adjustment(trend: GrowthTrend) -> Option<ValuationAdjustment> {
    match trend {
        GrowthTrend::Growing => Some(adjustment(
            "Growth trend",
            AdjustmentImpact::Premium,
            12.0,
            "Growing revenue trajectory attracts premium valuations",
        )),
        GrowthTrend::Declining => Some(adjustment(
            "Growth trend",
            AdjustmentImpact::Discount,
            -18.0,
            "Declining revenue increases buyer risk perception",
        )),
        GrowthTrend::Flat => None,
    }
}

/// Informational entry recorded when the range is compressed.
#[must_use]
pub fn size_adjustment() -> ValuationAdjustment {
    adjustment(
        "Company size",
        AdjustmentImpact::Discount,
        0.0,
        "Smaller businesses typically command lower multiples due to higher risk",
    )
}

/// Round half up to one decimal place.
#[must_use]
pub fn round_multiple(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Apply every adjustment to `base`.
///
/// `ebitda` is the normalised EBITDA when valuing on the EBITDA method; the
/// size rule only applies then. Pass `None` for the revenue method.
#[must_use]
pub fn apply_adjustments(
    base: ValueRange,
    inputs: &ValuationInputs,
    ebitda: Option<f64>,
) -> AdjustedMultiples {
    let mut adjustments: Vec<ValuationAdjustment> = [
        inputs.customer_concentration.and_then(concentration_adjustment),
        inputs.recurring_revenue_percentage.and_then(recurring_adjustment),
        inputs.growth_trend.and_then(growth_adjustment),
    ]
    .into_iter()
    .flatten()
    .collect();

    let total_percent: f64 = adjustments.iter().map(|a| a.percentage_change).sum();
    let factor = 1.0 + total_percent / 100.0;
    let min = base.min * factor;
    let mut max = base.max * factor;

    if ebitda.is_some_and(|value| value < SMALL_COMPANY_EBITDA) {
        max = min + (max - min) * SMALL_COMPANY_RANGE_SHARE;
        adjustments.push(size_adjustment());
    }

    AdjustedMultiples {
        range: ValueRange::new(round_multiple(min), round_multiple(max)),
        factor,
        adjustments,
    }
}
