use anyhow::Context;
use er_core::AssessmentSnapshot;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CodeArgs;
use crate::commands::shared::view::snapshot_tables;
use crate::context::AppContext;
use crate::output::output_with_tables;

/// Handle `exr restore`.
pub fn handle(args: &CodeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = restore(&args.code, ctx)?;
    if flags.quiet {
        return Ok(());
    }
    output_with_tables(&snapshot, flags.format, |snapshot| {
        snapshot_tables(snapshot, &ctx.spec)
    })
}

/// Decode `code` and make it the saved state. A code that does not decode
/// leaves the saved state as it was.
fn restore(code: &str, ctx: &AppContext) -> anyhow::Result<AssessmentSnapshot> {
    let snapshot = er_codec::decode(code, &ctx.codec)
        .context("export code not restored; saved state is unchanged")?;
    ctx.save(&snapshot)?;
    tracing::info!(path = %ctx.store.path().display(), "restored state from export code");
    Ok(snapshot)
}
