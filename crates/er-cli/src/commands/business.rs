use er_core::ValuationInputs;
use er_core::enums::{BusinessType, CustomerConcentration, GrowthTrend};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BusinessArgs;
use crate::commands::shared::parse::parse_amount_arg;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BusinessResponse {
    business_type: Option<BusinessType>,
    growth_trend: Option<GrowthTrend>,
    customer_concentration: Option<CustomerConcentration>,
    recurring_revenue_percentage: Option<u8>,
    total_debt: Option<f64>,
}

impl From<&ValuationInputs> for BusinessResponse {
    fn from(inputs: &ValuationInputs) -> Self {
        Self {
            business_type: inputs.business_type,
            growth_trend: inputs.growth_trend,
            customer_concentration: inputs.customer_concentration,
            recurring_revenue_percentage: inputs.recurring_revenue_percentage,
            total_debt: inputs.total_debt,
        }
    }
}

/// Handle `exr business`.
pub fn handle(args: &BusinessArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut snapshot = ctx.snapshot()?;
    apply(&mut snapshot.valuation, args)?;
    ctx.save(&snapshot)?;

    if flags.quiet {
        return Ok(());
    }
    output(&BusinessResponse::from(&snapshot.valuation), flags.format)
}

fn apply(inputs: &mut ValuationInputs, args: &BusinessArgs) -> anyhow::Result<()> {
    // Parse first so a bad amount changes nothing.
    let debt = args
        .debt
        .as_deref()
        .map(|raw| parse_amount_arg(raw, "debt", false))
        .transpose()?;

    if args.reset {
        inputs.business_type = None;
        inputs.growth_trend = None;
        inputs.customer_concentration = None;
        inputs.recurring_revenue_percentage = None;
        inputs.total_debt = None;
    }

    if let Some(business_type) = args.business_type {
        inputs.business_type = Some(business_type);
    }
    if let Some(growth) = args.growth {
        inputs.growth_trend = Some(growth);
    }
    if let Some(concentration) = args.concentration {
        inputs.customer_concentration = Some(concentration);
    }
    if let Some(recurring) = args.recurring {
        inputs.recurring_revenue_percentage = Some(recurring);
    }
    if let Some(debt) = debt {
        inputs.total_debt = debt;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> BusinessArgs {
        BusinessArgs {
            business_type: None,
            growth: None,
            concentration: None,
            recurring: None,
            debt: None,
            reset: false,
        }
    }

    #[test]
    fn flags_update_only_what_they_name() {
        let mut inputs = ValuationInputs::for_year(2026);
        inputs.growth_trend = Some(GrowthTrend::Flat);

        let update = BusinessArgs {
            business_type: Some(BusinessType::Product),
            debt: Some("£250,000".into()),
            ..args()
        };
        apply(&mut inputs, &update).expect("apply");

        assert_eq!(inputs.business_type, Some(BusinessType::Product));
        assert_eq!(inputs.growth_trend, Some(GrowthTrend::Flat));
        assert_eq!(inputs.total_debt, Some(250_000.0));
    }

    #[test]
    fn empty_debt_clears_it() {
        let mut inputs = ValuationInputs::for_year(2026);
        inputs.total_debt = Some(10_000.0);
        apply(&mut inputs, &BusinessArgs { debt: Some(String::new()), ..args() }).expect("apply");
        assert_eq!(inputs.total_debt, None);
    }

    #[test]
    fn reset_then_set() {
        let mut inputs = ValuationInputs::for_year(2026);
        inputs.customer_concentration = Some(CustomerConcentration::High);
        inputs.recurring_revenue_percentage = Some(40);

        let update = BusinessArgs {
            recurring: Some(75),
            reset: true,
            ..args()
        };
        apply(&mut inputs, &update).expect("apply");
        assert_eq!(inputs.customer_concentration, None);
        assert_eq!(inputs.recurring_revenue_percentage, Some(75));
    }

    #[test]
    fn bad_debt_changes_nothing() {
        let mut inputs = ValuationInputs::for_year(2026);
        let update = BusinessArgs {
            business_type: Some(BusinessType::Service),
            debt: Some("-1".into()),
            reset: true,
            ..args()
        };
        apply(&mut inputs, &update).expect_err("negative debt");
        assert_eq!(inputs, ValuationInputs::for_year(2026));
    }
}
