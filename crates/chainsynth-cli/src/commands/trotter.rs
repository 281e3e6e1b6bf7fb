//! Trotter command implementation.

use anyhow::Result;
use console::style;

use chainsynth_synth::{TrotterConfig, tfim_family};

use super::common::{OutputOptions, print_family, print_written, write_family};

/// File name of the QASM export of step `index` (0-based).
pub fn step_file_name(index: usize) -> String {
    format!("trotter_step_{:02}.qasm", index + 1)
}

/// Execute the trotter command.
pub fn execute(config: &TrotterConfig, output: &OutputOptions) -> Result<()> {
    println!(
        "{} Building {} Trotter steps on {} qubits",
        style("→").cyan().bold(),
        style(config.steps).yellow(),
        style(config.num_qubits).yellow()
    );

    let family = tfim_family(config)?;
    print_family(&family);

    let written = write_family(&family, "trotter", output, |i, _| step_file_name(i))?;
    print_written(&written);
    Ok(())
}
