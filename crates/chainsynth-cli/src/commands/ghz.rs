//! GHZ command implementation.

use anyhow::Result;
use console::style;

use chainsynth_synth::{CircuitFamily, GhzConfig, ghz_chain};

use super::common::{OutputOptions, print_family, print_written, write_family};

/// Execute the ghz command.
pub fn execute(config: &GhzConfig, output: &OutputOptions) -> Result<()> {
    println!(
        "{} Building GHZ chain on {} qubits",
        style("→").cyan().bold(),
        style(config.num_qubits).yellow()
    );

    let family = CircuitFamily::from(vec![ghz_chain(config)?]);
    print_family(&family);

    let written = write_family(&family, "ghz", output, |_, circuit| {
        format!("{}.qasm", circuit.name())
    })?;
    print_written(&written);
    Ok(())
}
