mod cli;
mod commands;
mod source;

use clap::Parser;
use cli::{Cli, Commands};
use figdoc_core::error::Result;
use figdoc_core::figdoc_log;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    figdoc_log!("", "collect.log");
    figdoc_log!("", "generated.log");

    init_tracing(&cli);

    let result = match cli.command {
        Some(Commands::Generate(ref args)) => commands::generate::run(&cli, args.clone()).await,
        Some(Commands::Inspect(ref args)) => commands::inspect::run(&cli, args.clone()).await,
        Some(Commands::Init(ref args)) => commands::init::run(&cli, args.clone()).await,
        None => commands::generate::run_default(&cli).await,
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

/// RUST_LOG takes precedence over -v/-q. Logs go to stderr so `--stdout`
/// output stays clean.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
