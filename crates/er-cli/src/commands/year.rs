use anyhow::bail;
use er_core::{FinancialYear, ValuationInputs};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::YearArgs;
use crate::commands::shared::parse::parse_amount_arg;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct YearResponse {
    #[serde(flatten)]
    year: FinancialYear,
    forecast: bool,
}

/// Handle `exr year`.
pub fn handle(args: &YearArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut snapshot = ctx.snapshot()?;
    let response = apply(&mut snapshot.valuation, args)?;
    ctx.save(&snapshot)?;

    if flags.quiet {
        return Ok(());
    }
    output(&response, flags.format)
}

fn apply(inputs: &mut ValuationInputs, args: &YearArgs) -> anyhow::Result<YearResponse> {
    if args.turnover.is_none() && args.ebitda.is_none() {
        bail!("nothing to set; pass --turnover and/or --ebitda");
    }
    let turnover = args
        .turnover
        .as_deref()
        .map(|raw| parse_amount_arg(raw, "turnover", false))
        .transpose()?;
    let ebitda = args
        .ebitda
        .as_deref()
        .map(|raw| parse_amount_arg(raw, "ebitda", true))
        .transpose()?;

    let known = inputs
        .all_years()
        .map(|year| year.year.to_string())
        .collect::<Vec<_>>();
    let forecast = inputs
        .forecast_financials
        .iter()
        .any(|year| year.year == args.year);
    let Some(entry) = inputs
        .historical_financials
        .iter_mut()
        .chain(inputs.forecast_financials.iter_mut())
        .find(|year| year.year == args.year)
    else {
        bail!(
            "{} is not an assessment year; expected one of: {}",
            args.year,
            known.join(", ")
        );
    };

    if let Some(turnover) = turnover {
        entry.turnover = turnover;
    }
    if let Some(ebitda) = ebitda {
        entry.ebitda = ebitda;
    }

    Ok(YearResponse {
        year: *entry,
        forecast,
    })
}
