use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `exr` binary.
#[derive(Debug, Parser)]
#[command(
    name = "exr",
    version,
    about = "exitready - exit-readiness assessment and indicative valuation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colours: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Directory holding state.json (overrides storage.state_dir)
    #[arg(long, global = true)]
    pub state_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            color: self.color,
            state_dir: self.state_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::StateCommands;
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["exr", "--format", "table", "--verbose", "value"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Value));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["exr", "encode", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Encode));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["exr", "--format", "xml", "report"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["exr", "--state-dir", "/tmp/exr", "--color", "never", "report"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.state_dir.as_deref(), Some("/tmp/exr"));
        assert_eq!(flags.color, ColorMode::Never);
    }

    #[test]
    fn restore_requires_a_code() {
        assert!(Cli::try_parse_from(["exr", "restore"]).is_err());
        let cli = Cli::try_parse_from(["exr", "restore", "abc123"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Restore(args) if args.code == "abc123"));
    }

    #[test]
    fn answer_accepts_question_and_value() {
        let cli = Cli::try_parse_from(["exr", "answer", "f1", "3"]).expect("cli should parse");
        let Commands::Answer(args) = cli.command else {
            panic!("expected answer command");
        };
        assert_eq!(args.question_id, "f1");
        assert_eq!(args.value, 3);
    }

    #[test]
    fn business_parses_enum_values() {
        let cli = Cli::try_parse_from([
            "exr",
            "business",
            "--type",
            "tech-saas",
            "--growth",
            "growing",
            "--concentration",
            "low",
            "--recurring",
            "80",
        ])
        .expect("cli should parse");
        let Commands::Business(args) = cli.command else {
            panic!("expected business command");
        };
        assert_eq!(args.business_type.map(|t| t.as_str()), Some("tech-saas"));
        assert_eq!(args.recurring, Some(80));
    }

    #[test]
    fn business_rejects_unknown_type() {
        let parsed = Cli::try_parse_from(["exr", "business", "--type", "retail"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn recurring_revenue_is_bounded() {
        let parsed = Cli::try_parse_from(["exr", "business", "--recurring", "101"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn state_subcommands_parse() {
        let cli = Cli::try_parse_from(["exr", "state", "import", "saved.json"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::State { action: StateCommands::Import { ref path } } if path == "saved.json"
        ));
    }
}
