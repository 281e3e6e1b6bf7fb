//! Generate command implementation.

use anyhow::Result;
use console::style;

use chainsynth_synth::ExperimentConfig;

use super::common::{OutputOptions, load_experiment};
use super::{ghz, teleport, trotter};

/// Execute the generate command.
pub fn execute(config_path: &str, output: &OutputOptions) -> Result<()> {
    let config = load_experiment(config_path)?;
    println!(
        "{} Loaded {} experiment from {}",
        style("→").cyan().bold(),
        style(config.name()).yellow(),
        style(config_path).green()
    );

    match &config {
        ExperimentConfig::Trotter(family) => trotter::execute(family, output),
        ExperimentConfig::Teleport(sweep) => teleport::execute(sweep, output),
        ExperimentConfig::Ghz(chain) => ghz::execute(chain, output),
    }
}
