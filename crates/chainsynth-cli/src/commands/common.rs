//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use tracing::debug;

use chainsynth_hal::BatchResult;
use chainsynth_ir::Circuit;
use chainsynth_qasm3::emit;
use chainsynth_synth::{CircuitFamily, ExperimentConfig};

/// How generated circuits are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One OpenQASM 3 file per circuit.
    Qasm,
    /// The whole family as one JSON array.
    Json,
}

/// Where and how to write a family.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub format: OutputFormat,
}

/// Load an experiment file. `.json` files are parsed as JSON, anything else
/// as YAML.
pub fn load_experiment(path: &str) -> Result<ExperimentConfig> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    let config: ExperimentConfig = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Invalid experiment file: {path}"))?,
        _ => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Invalid experiment file: {path}"))?,
    };
    config.validate()?;
    Ok(config)
}

/// Load a batch result file: a JSON array of results, `null` for circuits
/// that were not run.
pub fn load_results(path: &str) -> Result<BatchResult> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    BatchResult::from_json(&source).with_context(|| format!("Invalid result file: {path}"))
}

/// Write `family` under `options.dir`.
///
/// QASM output names each file with `file_name(index, circuit)`; JSON output
/// writes a single `{stem}.json`. Returns the written paths.
pub fn write_family(
    family: &CircuitFamily,
    stem: &str,
    options: &OutputOptions,
    file_name: impl Fn(usize, &Circuit) -> String,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&options.dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.dir.display()
        )
    })?;

    match options.format {
        OutputFormat::Json => {
            let path = options.dir.join(format!("{stem}.json"));
            let json = serde_json::to_string_pretty(family)?;
            fs::write(&path, json)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            Ok(vec![path])
        }
        OutputFormat::Qasm => family
            .iter()
            .enumerate()
            .map(|(i, circuit)| {
                let path = options.dir.join(file_name(i, circuit));
                let qasm = emit(circuit)
                    .with_context(|| format!("Failed to emit circuit {}", circuit.name()))?;
                fs::write(&path, qasm)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                debug!(path = %path.display(), "Wrote circuit");
                Ok(path)
            })
            .collect(),
    }
}

/// Print one line of sizes per circuit.
pub fn print_family(family: &CircuitFamily) {
    println!(
        "  {:<16} {:>7} {:>7} {:>7} {:>9}",
        style("circuit").bold(),
        style("qubits").bold(),
        style("ops").bold(),
        style("depth").bold(),
        style("2q depth").bold()
    );
    for circuit in family {
        println!(
            "  {:<16} {:>7} {:>7} {:>7} {:>9}",
            circuit.name(),
            circuit.num_qubits(),
            circuit.len(),
            circuit.depth(),
            circuit.two_qubit_depth()
        );
    }
}

/// Print the paths a command wrote.
pub fn print_written(paths: &[PathBuf]) {
    println!(
        "{} Wrote {} file{}",
        style("✓").green().bold(),
        paths.len(),
        if paths.len() == 1 { "" } else { "s" }
    );
    for path in paths {
        println!("  {}", style(path.display()).dim());
    }
}
