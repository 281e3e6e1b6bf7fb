//! Teleport command implementation.

use anyhow::Result;
use console::style;

use chainsynth_synth::{TeleportSweep, teleport_sweep};

use super::common::{OutputOptions, print_family, print_written, write_family};

/// Execute the teleport command.
pub fn execute(sweep: &TeleportSweep, output: &OutputOptions) -> Result<()> {
    println!(
        "{} Building teleportation chains of {} to {} qubits",
        style("→").cyan().bold(),
        style(sweep.min_qubits).yellow(),
        style(sweep.max_qubits).yellow()
    );

    let family = teleport_sweep(sweep)?;
    print_family(&family);

    let written = write_family(&family, "teleport", output, |_, circuit| {
        format!("{}.qasm", circuit.name())
    })?;
    print_written(&written);
    Ok(())
}
