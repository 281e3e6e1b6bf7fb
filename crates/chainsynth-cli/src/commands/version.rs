//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - circuit synthesis for spin-chain experiments",
        style("Chainsynth").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  chainsynth-ir     Circuit model and depth analysis");
    println!("  chainsynth-synth  Trotter, teleportation and GHZ builders");
    println!("  chainsynth-qasm3  OpenQASM 3 export");
    println!("  chainsynth-hal    Backend boundary and result analysis");
    println!("  chainsynth-cli    Command-line interface");
}
