use er_valuation::calculate_valuation;

use crate::cli::GlobalFlags;
use crate::commands::shared::view::valuation_tables;
use crate::context::AppContext;
use crate::output::output_with_tables;

/// Handle `exr value`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot()?;
    let result = calculate_valuation(&snapshot.valuation);
    output_with_tables(&result, flags.format, valuation_tables)
}
