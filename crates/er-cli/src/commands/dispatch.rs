use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Answer(args) => commands::answer::handle(&args, ctx, flags),
        Commands::Select(args) => commands::select::handle(&args, ctx, flags),
        Commands::Business(args) => commands::business::handle(&args, ctx, flags),
        Commands::Year(args) => commands::year::handle(&args, ctx, flags),
        Commands::Encode => commands::encode::handle(ctx, flags),
        Commands::Decode(args) => commands::decode::handle(&args, ctx, flags),
        Commands::Restore(args) => commands::restore::handle(&args, ctx, flags),
        Commands::Value => commands::value::handle(ctx, flags),
        Commands::Report(args) => commands::report::handle(&args, ctx, flags),
        Commands::State { action } => commands::state::handle(&action, ctx, flags),
    }
}
