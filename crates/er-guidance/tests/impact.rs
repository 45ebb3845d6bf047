//! Impact analysis.
//!
//! - Completion probability floor and bounds
//! - Discount mitigation per concentration and growth trend
//! - Value gain arithmetic against the enterprise-value midpoint
//! - Documentation opportunities for weak non-financial domains

use er_core::enums::{BusinessType, CustomerConcentration, GrowthTrend};
use er_core::scoring::DomainAverage;
use er_core::valuation::ValueRange;
use er_core::{ValuationInputs, ValuationResult};
use er_guidance::{
    OpportunityCategory, Severity, ThresholdViolation, ViolationType, completion_probability,
    impact_analysis,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn domain(id: &str, average: f64) -> DomainAverage {
    DomainAverage {
        id: id.to_string(),
        name: id.to_uppercase(),
        average,
    }
}

fn violation(domain_id: &str, severity: Severity) -> ThresholdViolation {
    ThresholdViolation {
        violation_type: match severity {
            Severity::Blocker => ViolationType::LevelZero,
            Severity::Critical => ViolationType::critical_for(domain_id),
        },
        domain_id: domain_id.to_string(),
        domain_name: domain_id.to_string(),
        current_level: 0.0,
        required_level: 1.0,
        severity,
        message: String::new(),
    }
}

fn inputs(
    concentration: Option<CustomerConcentration>,
    growth: Option<GrowthTrend>,
) -> ValuationInputs {
    let mut inputs = ValuationInputs::for_year(2026);
    inputs.customer_concentration = concentration;
    inputs.growth_trend = growth;
    inputs
}

fn valued(min: f64, max: f64) -> ValuationResult {
    ValuationResult {
        is_calculable: true,
        enterprise_value: Some(ValueRange::new(min, max)),
        ..ValuationResult::insufficient(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Completion probability
// ---------------------------------------------------------------------------

#[rstest]
#[case::no_risks(0, 0, 28, 68)]
#[case::one_blocker(1, 0, 20, 65)]
#[case::one_below_minimum(0, 1, 24, 66)]
#[case::current_hits_floor(2, 3, 5, 56)]
#[case::mitigated_hits_floor(6, 6, 5, 45)]
#[case::huge_counts(usize::MAX, usize::MAX, 5, 45)]
fn completion_probability_bands(
    #[case] level_zero: usize,
    #[case] below_minimum: usize,
    #[case] current: u32,
    #[case] mitigated: u32,
) {
    assert_eq!(completion_probability(level_zero, below_minimum), (current, mitigated));
}

#[test]
fn completion_probability_stays_in_bounds() {
    for level_zero in 0..=6 {
        for below_minimum in 0..=6 {
            let (current, mitigated) = completion_probability(level_zero, below_minimum);
            assert!((5..=28).contains(&current), "current {current}");
            assert!((45..=85).contains(&mitigated), "mitigated {mitigated}");
            assert!(mitigated > current);
        }
    }
}

#[test]
fn only_blockers_count_as_level_zero() {
    let violations = [
        violation("financial", Severity::Blocker),
        violation("financial", Severity::Critical),
        violation("legal", Severity::Critical),
    ];
    let summary = impact_analysis(&[], &violations, None, &inputs(None, None), 2);
    assert_eq!(summary.completion.current_probability, 12);
    assert_eq!(summary.completion.mitigated_probability, 61);
    assert_eq!(summary.completion.risk_factor_count, 3);
}

// ---------------------------------------------------------------------------
// Valuation discounts
// ---------------------------------------------------------------------------

#[rstest]
#[case::high_and_declining(Some(CustomerConcentration::High), Some(GrowthTrend::Declining), 43.0, 22.0, &["customer-concentration", "growth-narrative"])]
#[case::medium(Some(CustomerConcentration::Medium), Some(GrowthTrend::Growing), 12.0, 5.0, &["customer-concentration-medium"])]
#[case::declining_only(Some(CustomerConcentration::Low), Some(GrowthTrend::Declining), 18.0, 10.0, &["growth-narrative"])]
#[case::data_room_baseline(None, None, 8.0, 0.0, &["data-room-quality"])]
fn discounts_follow_inputs(
    #[case] concentration: Option<CustomerConcentration>,
    #[case] growth: Option<GrowthTrend>,
    #[case] current: f64,
    #[case] mitigated: f64,
    #[case] ids: &[&str],
) {
    let summary = impact_analysis(&[], &[], None, &inputs(concentration, growth), 0);
    assert_eq!(summary.valuation.current_discount_percent, current);
    assert_eq!(summary.valuation.mitigated_discount_percent, mitigated);
    assert_eq!(summary.valuation.improvement_percent, current - mitigated);
    let found: Vec<&str> = summary.opportunities.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(found, ids);
    assert!(summary.has_mitigatable_issues);
}

#[test]
fn data_room_baseline_is_a_documentation_opportunity() {
    let summary = impact_analysis(&[], &[], None, &inputs(None, None), 0);
    let baseline = &summary.opportunities[0];
    assert_eq!(baseline.category, OpportunityCategory::Documentation);
    assert_eq!(baseline.current_value, -8.0);
    assert_eq!(baseline.mitigated_value, 0.0);
    assert_eq!(baseline.unit, "%");
}

// ---------------------------------------------------------------------------
// Value gain
// ---------------------------------------------------------------------------

#[rstest]
#[case::high_and_declining(Some(CustomerConcentration::High), Some(GrowthTrend::Declining), 525_000.0)]
#[case::medium(Some(CustomerConcentration::Medium), None, 175_000.0)]
#[case::baseline(None, None, 200_000.0)]
fn value_gain_is_midpoint_times_improvement(
    #[case] concentration: Option<CustomerConcentration>,
    #[case] growth: Option<GrowthTrend>,
    #[case] gain: f64,
) {
    let result = valued(2_000_000.0, 3_000_000.0);
    let summary = impact_analysis(&[], &[], Some(&result), &inputs(concentration, growth), 0);
    assert_eq!(summary.valuation.estimated_value_gain, Some(gain));
}

#[test]
fn value_gain_rounds_to_whole_pounds() {
    let result = valued(1_000.0, 1_001.0);
    let summary = impact_analysis(&[], &[], Some(&result), &inputs(None, None), 0);
    // 1000.5 * 8%
    assert_eq!(summary.valuation.estimated_value_gain, Some(80.0));
}

#[test]
fn value_gain_needs_a_calculable_valuation() {
    let insufficient = ValuationResult::insufficient(vec!["no figures".into()]);
    let summary = impact_analysis(&[], &[], Some(&insufficient), &inputs(None, None), 0);
    assert_eq!(summary.valuation.estimated_value_gain, None);

    let summary = impact_analysis(&[], &[], None, &inputs(None, None), 0);
    assert_eq!(summary.valuation.estimated_value_gain, None);
}

#[test]
fn value_gain_from_engine_result() {
    let mut inputs = inputs(Some(CustomerConcentration::High), Some(GrowthTrend::Flat));
    inputs.business_type = Some(BusinessType::Service);
    inputs.historical_financials[2].turnover = Some(2_000_000.0);
    inputs.historical_financials[2].ebitda = Some(400_000.0);
    let result = er_valuation::calculate_valuation(&inputs);
    let range = result.enterprise_value.expect("calculable valuation");

    let summary = impact_analysis(&[], &[], Some(&result), &inputs, 0);
    let expected = ((range.min + range.max) / 2.0 * 13.0 / 100.0).round();
    assert_eq!(summary.valuation.estimated_value_gain, Some(expected));
}

// ---------------------------------------------------------------------------
// Documentation opportunities
// ---------------------------------------------------------------------------

#[test]
fn weak_non_financial_domains_get_documentation_work() {
    let domains = [
        domain("financial", 0.5),
        domain("legal", 1.94),
        domain("commercial", 2.0),
        domain("operational", 3.1),
        domain("people", 0.0),
        domain("custom", 0.0),
    ];
    let summary = impact_analysis(&domains, &[], None, &inputs(None, Some(GrowthTrend::Declining)), 0);

    let documentation: Vec<_> = summary
        .opportunities
        .iter()
        .filter(|o| o.category == OpportunityCategory::Documentation)
        .collect();
    let ids: Vec<&str> = documentation.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["legal-documentation", "people-documentation"]);

    let legal = documentation[0];
    assert_eq!(legal.current_state, "LEGAL at Level 1.9 - gaps in DD readiness");
    assert_eq!(legal.current_value, 1.94);
    assert_eq!(legal.mitigated_value, 2.0);
    assert_eq!(legal.unit, "level");
}

#[test]
fn summary_serializes_in_camel_case() {
    let result = valued(2_000_000.0, 3_000_000.0);
    let summary = impact_analysis(&[domain("esg", 1.0)], &[], Some(&result), &inputs(None, None), 1);
    let json = serde_json::to_value(&summary).expect("serialize");
    assert_eq!(json["valuation"]["estimatedValueGain"], 200_000.0);
    assert_eq!(json["completion"]["riskFactorCount"], 1);
    assert_eq!(json["timeline"]["ddTimeSavings"], "6-8 weeks");
    assert_eq!(json["opportunities"][1]["id"], "esg-documentation");
    assert_eq!(json["opportunities"][1]["category"], "documentation");
}
