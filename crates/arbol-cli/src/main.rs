//! arbol - decision tree classifier CLI
//!
//! Usage:
//!   arbol demo                                    # Triage the built-in bug reports
//!   arbol demo --show-tree --max-depth 2          # Print the learned rules
//!   arbol predict --data bugs.json --features 1,0,3
//!   arbol predict --data bugs.json --config tree.json --features 1,0,3 --json

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod dataset;
mod error;
mod output;

use commands::{demo, predict};

/// arbol - train and query decision tree classifiers
#[derive(Parser)]
#[command(name = "arbol")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on the built-in bug-severity dataset and triage sample bugs
    Demo {
        /// Maximum tree depth
        #[arg(long, default_value_t = demo::DEMO_MAX_DEPTH)]
        max_depth: usize,

        /// Print the learned rules
        #[arg(long)]
        show_tree: bool,
    },

    /// Train on a JSON dataset and classify feature vectors
    Predict {
        /// JSON array of {"features": [..], "label": ".."} objects
        #[arg(long, value_name = "FILE")]
        data: PathBuf,

        /// JSON tree configuration ({"max_depth": N})
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Maximum tree depth (overrides --config)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Comma-separated feature vector to classify (repeatable)
        #[arg(long = "features", value_name = "V1,V2,...", required = true)]
        features: Vec<String>,

        /// Print the learned rules
        #[arg(long)]
        show_tree: bool,
    },
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins over the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber can only be installed once per process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Demo {
            max_depth,
            show_tree,
        } => demo::run(max_depth, cli.json, show_tree),

        Commands::Predict {
            data,
            config,
            max_depth,
            features,
            show_tree,
        } => predict::run(
            &data,
            config.as_deref(),
            max_depth,
            &features,
            cli.json,
            show_tree,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
