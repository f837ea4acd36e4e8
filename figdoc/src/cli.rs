//! Command-line interface definitions for figdoc.

use clap::{Args, Parser, Subcommand, ValueEnum};
use figdoc_core::bindings::TableKind;
use std::path::PathBuf;

/// figdoc - TypeScript declarations from a design-file format's documentation tables
#[derive(Parser, Debug)]
#[command(name = "figdoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to figdoc.toml configuration file
    #[arg(short, long, global = true, env = "FIGDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output directory override (overrides config file)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the properties and node TypeScript modules (default)
    Generate(GenerateArgs),

    /// Print the type description collected from one table as JSON
    Inspect(InspectArgs),

    /// Initialize a new figdoc.toml configuration file
    Init(InitArgs),
}

/// Where to read the documentation page from. Overrides `[source]`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Saved copy of the documentation page
    #[arg(short, long, conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// URL of the documentation page
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print both modules to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Table to collect
    #[arg(value_enum)]
    pub table: TableArg,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    Properties,
    GlobalProperties,
    NodeTypes,
}

impl From<TableArg> for TableKind {
    fn from(table: TableArg) -> Self {
        match table {
            TableArg::Properties => TableKind::Properties,
            TableArg::GlobalProperties => TableKind::GlobalProperties,
            TableArg::NodeTypes => TableKind::NodeTypes,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing figdoc.toml if present
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "figdoc", "-vv", "generate", "--input", "docs.html", "--stdout",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.source.input, Some(PathBuf::from("docs.html")));
        assert!(args.stdout);
    }

    #[test]
    fn test_input_conflicts_with_url() {
        let result = Cli::try_parse_from([
            "figdoc",
            "generate",
            "--input",
            "docs.html",
            "--url",
            "https://example.com/docs",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from(["figdoc", "inspect", "global-properties"]).unwrap();
        let Some(Commands::Inspect(args)) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(TableKind::from(args.table), TableKind::GlobalProperties);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["figdoc", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.command.is_none());
    }
}
