//! Mirrored Trotter circuit families.

use chainsynth_ir::{Circuit, QubitId};
use tracing::{debug, info};

use crate::config::TrotterConfig;
use crate::error::SynthResult;
use crate::family::CircuitFamily;
use crate::tfim::{add_mirrored_trotter_layer, add_trotter_layer};

/// Name of the classical register each snapshot measures into.
pub const MEASURE_REGISTER: &str = "c";

/// Build one circuit per Trotter step.
///
/// A single measurement-free program grows by one forward and one mirrored
/// layer per step. After each step a copy of it is taken, named
/// `tfim_step_XX`, and the designated qubits are measured into register `c`
/// on the copy only. Every element therefore starts with all the gates of the
/// element before it.
pub fn tfim_family(config: &TrotterConfig) -> SynthResult<CircuitFamily> {
    config.validate()?;

    let mut program = Circuit::new("tfim", config.num_qubits);
    let mut family = CircuitFamily::with_capacity(config.steps as usize);

    for step in 1..=config.steps {
        add_trotter_layer(&mut program, &config.rx_angle, config.layer_barriers)?;
        add_mirrored_trotter_layer(&mut program, &config.rx_angle, config.layer_barriers)?;

        let mut snapshot = program.clone();
        snapshot.set_name(format!("tfim_step_{step:02}"));
        measure_into_register(&mut snapshot, &config.measured_qubits)?;

        debug!(
            step,
            ops = snapshot.len(),
            two_qubit_depth = snapshot.two_qubit_depth(),
            "Recorded Trotter snapshot"
        );
        family.push(snapshot);
    }

    info!(
        num_qubits = config.num_qubits,
        steps = config.steps,
        "Built Trotter family"
    );
    Ok(family)
}

fn measure_into_register(circuit: &mut Circuit, qubits: &[u32]) -> SynthResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    let register = circuit.add_creg(MEASURE_REGISTER, qubits.len() as u32)?;
    for (&q, &bit) in qubits.iter().zip(&register.bits) {
        circuit.measure(QubitId(q), bit)?;
    }
    Ok(())
}
