use clap::{ArgAction, Parser, Subcommand};
use commands::{export, import, inspect};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "rewind")]
#[command(about = "Rewind - carry your settings and watch progress between installations")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Override the local state file location
    #[arg(long, global = true, value_name = "FILE")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export settings and watch progress as a portable document
    #[command(
        long_about = "Write the current settings and per-title watch progress to a dated JSON document that can be imported into another installation. Account credentials are left out unless --include-auth is given."
    )]
    Export {
        /// Include account credentials in the export
        #[arg(long, action = ArgAction::SetTrue)]
        include_auth: bool,

        /// Write to this file or directory instead of the default location
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Import a settings document, reconciling watch progress
    #[command(
        long_about = "Validate a settings document and fold it into local state. Watch progress is reconciled per title so existing progress is never lost; all other domains take the imported values. A document that fails validation changes nothing."
    )]
    Import {
        /// Settings document to import
        file: PathBuf,

        /// Validate and merge without persisting any change
        #[arg(long, action = ArgAction::SetTrue)]
        dry_run: bool,
    },

    /// Validate a settings document and report what it contains
    Inspect {
        /// Settings document to inspect
        file: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Export { include_auth, out } => {
            export::run_export(include_auth, out, cli.state, &output)
        }
        Commands::Import { file, dry_run } => {
            import::run_import(file, dry_run, cli.state, &output)
        }
        Commands::Inspect { file } => inspect::run_inspect(file, &output),
    }
}
