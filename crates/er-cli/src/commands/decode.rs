use crate::cli::GlobalFlags;
use crate::cli::root_commands::CodeArgs;
use crate::commands::shared::view::snapshot_tables;
use crate::context::AppContext;
use crate::output::output_with_tables;

/// Handle `exr decode`. The saved state is not touched.
pub fn handle(args: &CodeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = er_codec::decode(&args.code, &ctx.codec)?;
    output_with_tables(&snapshot, flags.format, |snapshot| {
        snapshot_tables(snapshot, &ctx.spec)
    })
}
