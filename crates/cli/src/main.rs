use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use cetable::commands::{
    eval_command, export_command, info_command, preview_command, resolve_export_config,
};
use cetable::{describe_error, init_logging};
use cetable_core::config::DEFAULT_INPUT;
use cetable_core::services::DEFAULT_MAX_DEPTH;
use clap::{Parser, Subcommand};

/// Cheat table flattening CLI.
///
/// This CLI is a thin wrapper around `cetable-core` (exposed in code as `cetable_core`).
/// All substantive logic lives in the library so it can be tested thoroughly.
#[derive(Parser, Debug)]
#[command(
    name = "cetable",
    version,
    about = "Flatten Cheat Engine tables into a CSV address export",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a cheat table into a CSV export.
    ///
    /// Values come from `--config` (JSON or YAML) when given; flags override them.
    /// With no config and no flags, reads `data/person-player.xml` and writes
    /// `output/cheat_table.csv`.
    Export {
        /// Optional export config file (.json, .yaml, .yml).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Cheat table to read.
        #[arg(long)]
        input: Option<PathBuf>,

        /// CSV file to write.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Nesting depth below which children are not descended into.
        #[arg(long)]
        max_depth: Option<usize>,

        /// Also write `<output>.meta.json` describing the run.
        #[arg(long, default_value_t = false)]
        metadata: bool,
    },

    /// Print the flattened, deduplicated rows without writing files.
    Preview {
        /// Cheat table to read.
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Nesting depth below which children are not descended into.
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Evaluate a hexadecimal address expression such as `1A2B+10-4`.
    Eval {
        /// Expression to evaluate.
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Show entry counts and the content hash of a cheat table.
    Info {
        /// Cheat table to read.
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Default to a plain export if no command is provided.
    let command = cli.command.unwrap_or(Command::Export {
        config: None,
        input: None,
        output: None,
        max_depth: None,
        metadata: false,
    });

    match command {
        Command::Export { config, input, output, max_depth, metadata } => {
            let config =
                resolve_export_config(config.as_deref(), input, output, max_depth, metadata)?;
            export_command(&config)?;
        }
        Command::Preview { input, max_depth, json } => {
            preview_command(&input, max_depth, json)?;
        }
        Command::Eval { expr } => {
            eval_command(&expr)?;
        }
        Command::Info { input, json } => {
            info_command(&input, json)?;
        }
    }

    Ok(())
}
