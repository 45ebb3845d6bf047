//! Serde roundtrip and JsonSchema validation tests for the persisted shapes.

use er_core::enums::*;
use er_core::questionnaire::QuestionnaireSpec;
use er_core::scoring::DomainAverage;
use er_core::valuation::{FinancialYear, ValuationAdjustment, ValueRange};
use er_core::{AssessmentSnapshot, Responses, ValuationInputs, ValuationResult};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn populated_inputs() -> ValuationInputs {
    let mut inputs = ValuationInputs::for_year(2026);
    inputs.business_type = Some(BusinessType::Product);
    inputs.historical_financials[2] = FinancialYear {
        year: 2025,
        turnover: Some(2_400_000.0),
        ebitda: Some(-35_000.0),
    };
    inputs.forecast_financials[0].ebitda = Some(0.0);
    inputs.total_debt = Some(150_000.0);
    inputs.growth_trend = Some(GrowthTrend::Flat);
    inputs.customer_concentration = Some(CustomerConcentration::Medium);
    inputs.recurring_revenue_percentage = Some(55);
    inputs
}

roundtrip_and_validate!(
    builtin_questionnaire_roundtrip,
    QuestionnaireSpec,
    QuestionnaireSpec::builtin().unwrap()
);

roundtrip_and_validate!(
    empty_inputs_roundtrip,
    ValuationInputs,
    ValuationInputs::for_year(2026)
);

roundtrip_and_validate!(populated_inputs_roundtrip, ValuationInputs, populated_inputs());

roundtrip_and_validate!(
    snapshot_roundtrip,
    AssessmentSnapshot,
    AssessmentSnapshot {
        responses: [("f1".to_string(), 3), ("l2".to_string(), 0)]
            .into_iter()
            .collect::<Responses>(),
        sector: Some("technology".into()),
        lifecycle: None,
        valuation: populated_inputs(),
    }
);

roundtrip_and_validate!(
    calculable_result_roundtrip,
    ValuationResult,
    ValuationResult {
        is_calculable: true,
        method: ValuationMethod::EbitdaMultiple,
        enterprise_value: Some(ValueRange::new(2_040_000.0, 3_880_000.0)),
        equity_value: Some(ValueRange::new(1_890_000.0, 3_730_000.0)),
        multiple: Some(ValueRange::new(5.1, 9.7)),
        base_value: Some(400_000.0),
        base_value_label: "Normalised EBITDA/Profit".into(),
        adjustments: vec![ValuationAdjustment {
            factor: "Growth trend".into(),
            impact: AdjustmentImpact::Premium,
            percentage_change: 12.0,
            explanation: "Growing revenue trajectory attracts premium valuations".into(),
        }],
        confidence: Confidence::Medium,
        caveats: vec!["This is an indicative estimate only, not a professional valuation.".into()],
    }
);

roundtrip_and_validate!(
    insufficient_result_roundtrip,
    ValuationResult,
    ValuationResult::insufficient(vec![
        "Please select a business type to calculate valuation.".into()
    ])
);

roundtrip_and_validate!(
    domain_average_roundtrip,
    DomainAverage,
    DomainAverage {
        id: "financial".into(),
        name: "Financial".into(),
        average: 2.5,
    }
);

#[test]
fn browser_persisted_inputs_load() {
    let raw = r#"{
        "businessType": "tech-saas",
        "historicalFinancials": [
            { "year": 2023, "turnover": null, "ebitda": null },
            { "year": 2024, "turnover": 900000, "ebitda": null },
            { "year": 2025, "turnover": 1200000, "ebitda": 400000 }
        ],
        "forecastFinancials": [
            { "year": 2026, "turnover": null, "ebitda": null },
            { "year": 2027, "turnover": null, "ebitda": null },
            { "year": 2028, "turnover": null, "ebitda": null }
        ],
        "totalDebt": null,
        "growthTrend": "growing",
        "customerConcentration": "low",
        "recurringRevenuePercentage": 80
    }"#;
    let inputs: ValuationInputs = serde_json::from_str(raw).expect("inputs should parse");
    assert_eq!(inputs.business_type, Some(BusinessType::TechSaas));
    assert_eq!(inputs.historical_financials[2].ebitda, Some(400_000.0));
    assert_eq!(inputs.recurring_revenue_percentage, Some(80));
}
