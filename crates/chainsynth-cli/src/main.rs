//! Chainsynth Command-Line Interface
//!
//! Builds the circuit families of the spin-chain experiments, writes them as
//! OpenQASM 3 or JSON, and post-processes result files returned by an
//! external executor.
//!
//! ```text
//!   chainsynth trotter --qubits 100 --steps 10      → trotter_step_01.qasm ...
//!   chainsynth teleport --min-qubits 7 --max-qubits 41
//!   chainsynth generate --config experiment.yaml
//!   chainsynth analyze survival --results counts.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use chainsynth_ir::ParameterExpression;
use chainsynth_synth::{GhzConfig, TeleportSweep, TrotterConfig};
use commands::analyze::Analysis;
use commands::common::{OutputFormat, OutputOptions};
use commands::{analyze, generate, ghz, teleport, trotter, version};

/// Chainsynth - circuit synthesis for spin-chain experiments
#[derive(Parser)]
#[command(name = "chainsynth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "qasm")]
    format: OutputFormat,
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        Self {
            dir: args.output_dir,
            format: args.format,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a Trotter echo family (forward + mirrored layers per step)
    Trotter {
        /// Chain length
        #[arg(short, long, default_value = "100")]
        qubits: u32,

        /// Number of Trotter steps
        #[arg(short, long, default_value = "10")]
        steps: u32,

        /// Transverse-field rotation angle in radians (default pi/2)
        #[arg(long, conflicts_with = "angle_symbol")]
        angle: Option<f64>,

        /// Leave the rotation angle as a named input parameter
        #[arg(long)]
        angle_symbol: Option<String>,

        /// Qubits to measure, comma separated (default: the two middle qubits)
        #[arg(short, long, value_delimiter = ',')]
        measure: Vec<u32>,

        /// Omit barriers between layers
        #[arg(long)]
        no_barriers: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a sweep of teleportation chains
    Teleport {
        /// Shortest chain (odd, at least 7)
        #[arg(long, default_value = "7")]
        min_qubits: u32,

        /// Longest chain
        #[arg(long, default_value = "41")]
        max_qubits: u32,

        /// Omit barriers between stages
        #[arg(long)]
        no_barriers: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a GHZ coherence chain
    Ghz {
        /// Chain length
        #[arg(short, long, default_value = "100")]
        qubits: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build circuits from an experiment file (YAML or JSON)
    Generate {
        /// Experiment file
        #[arg(short, long)]
        config: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive probabilities from a batch result file
    Analyze {
        /// Quantity to derive
        #[arg(value_enum)]
        analysis: Analysis,

        /// Result file (JSON array of results, null for circuits not run)
        #[arg(short, long)]
        results: String,

        /// Register width of survival bitstrings
        #[arg(long, default_value = "2")]
        width: usize,

        /// Value reported for missing survival steps
        #[arg(long)]
        sentinel: Option<f64>,

        /// GHZ chain length (inferred from the counts if omitted)
        #[arg(short, long)]
        qubits: Option<usize>,
    },

    /// Show version information
    Version,
}

fn trotter_config(
    qubits: u32,
    steps: u32,
    angle: Option<f64>,
    angle_symbol: Option<String>,
    measure: Vec<u32>,
    no_barriers: bool,
) -> TrotterConfig {
    let mut config = TrotterConfig::new(qubits, steps).with_barriers(!no_barriers);
    if let Some(angle) = angle {
        config = config.with_angle(angle);
    }
    if let Some(name) = angle_symbol {
        config = config.with_angle(ParameterExpression::symbol(name));
    }
    if !measure.is_empty() {
        config = config.with_measured_qubits(measure);
    }
    config
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Trotter {
            qubits,
            steps,
            angle,
            angle_symbol,
            measure,
            no_barriers,
            output,
        } => {
            let config = trotter_config(qubits, steps, angle, angle_symbol, measure, no_barriers);
            trotter::execute(&config, &output.into())
        }

        Commands::Teleport {
            min_qubits,
            max_qubits,
            no_barriers,
            output,
        } => {
            let sweep = TeleportSweep::new(min_qubits, max_qubits).with_barriers(!no_barriers);
            teleport::execute(&sweep, &output.into())
        }

        Commands::Ghz { qubits, output } => ghz::execute(&GhzConfig::new(qubits), &output.into()),

        Commands::Generate { config, output } => generate::execute(&config, &output.into()),

        Commands::Analyze {
            analysis,
            results,
            width,
            sentinel,
            qubits,
        } => analyze::execute(analysis, &results, width, sentinel, qubits),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
