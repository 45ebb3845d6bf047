use anyhow::Context;
use clap::Parser;
use er_config::ExitReadyConfig;

mod cli;
mod commands;
mod context;
mod output;
mod store;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("exr error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config =
        ExitReadyConfig::load_with_dotenv().context("failed to load exitready configuration")?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config, flags.state_dir.as_deref())
        .context("failed to initialize exitready application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EXITREADY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
