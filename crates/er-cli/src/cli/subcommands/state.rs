use clap::Subcommand;

/// Saved state commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StateCommands {
    /// Print the saved state.
    Show,
    /// Delete the saved state.
    Clear,
    /// Replace the saved state with a JSON snapshot file.
    Import { path: String },
    /// Print where the state file lives.
    Path,
}
