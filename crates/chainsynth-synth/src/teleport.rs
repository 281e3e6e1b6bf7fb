//! Long-range entanglement through a chain of measured ancillas.
//!
//! On an odd chain of `N` qubits the endpoints `0` and `N-1` end up sharing a
//! Bell pair without ever interacting directly:
//!
//! 1. `h 0`
//! 2. `cx 0,1`, then for every interior pair `(2k, 2k+1)`: `h 2k`, `cx 2k,2k+1`
//! 3. for `k = 1..=(N-1)/2`: `cx 2k-1,2k`, `h 2k-1`
//! 4. odd ancillas `1, 3, .., N-2` are measured into `cr1`, even ancillas
//!    `2, 4, .., N-3` into `cr2`, both ascending
//! 5. parity-guarded `z 0` and `x N-1`, then `0` and `N-1` into `cr3`
//!
//! Stages 1 to 3 are each followed by a barrier when barriers are enabled.

use chainsynth_ir::{Circuit, QubitId};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{TeleportConfig, TeleportSweep, validate_chain_length};
use crate::error::{SynthError, SynthResult};
use crate::family::CircuitFamily;
use crate::parity::ParityConditions;

/// Register receiving odd-ancilla outcomes.
pub const CONTROL_REGISTER: &str = "cr1";
/// Register receiving even-ancilla outcomes.
pub const TARGET_REGISTER: &str = "cr2";
/// Register receiving the endpoint outcomes.
pub const OUTCOME_REGISTER: &str = "cr3";

/// Classical register sizes for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeleportLayout {
    /// Chain length.
    pub num_qubits: u32,
    /// Size of `cr1`, `⌈(N-2)/2⌉`.
    pub control_bits: u32,
    /// Size of `cr2`, `⌊(N-2)/2⌋`.
    pub target_bits: u32,
}

impl TeleportLayout {
    /// The layout of an `n`-qubit chain.
    pub fn for_chain(n: u32) -> SynthResult<Self> {
        validate_chain_length(n)?;
        let ancillas = n - 2;
        Self::from_sizes(n, ancillas.div_ceil(2), ancillas / 2)
    }

    /// A layout with explicit register sizes, checked against the chain length.
    pub fn from_sizes(n: u32, control_bits: u32, target_bits: u32) -> SynthResult<Self> {
        validate_chain_length(n)?;
        if control_bits.checked_add(target_bits) != Some(n - 2) {
            return Err(SynthError::config(format!(
                "Ancilla registers of {control_bits} and {target_bits} bits do not cover {} ancillas",
                n - 2
            )));
        }
        // Stage 4 measures every odd ancilla into cr1.
        if control_bits != (n - 1) / 2 {
            return Err(SynthError::config(format!(
                "A {n}-qubit chain has {} odd ancillas, not {control_bits}",
                (n - 1) / 2
            )));
        }
        Ok(Self {
            num_qubits: n,
            control_bits,
            target_bits,
        })
    }

    /// Number of ancilla qubits.
    pub fn num_ancillas(&self) -> u32 {
        self.num_qubits - 2
    }

    /// Total classical bits, ancillas plus the two endpoint outcomes.
    pub fn num_clbits(&self) -> u32 {
        self.control_bits + self.target_bits + 2
    }

    /// Last qubit of the chain.
    pub fn last(&self) -> QubitId {
        QubitId(self.num_qubits - 1)
    }
}

/// Build one teleportation chain.
pub fn teleport_chain(config: &TeleportConfig) -> SynthResult<Circuit> {
    config.validate()?;
    build(TeleportLayout::for_chain(config.num_qubits)?, config.barriers)
}

/// Build a chain for every length of `sweep`, in ascending order.
///
/// Chains are independent and built in parallel.
pub fn teleport_sweep(sweep: &TeleportSweep) -> SynthResult<CircuitFamily> {
    sweep.validate()?;
    let lengths: Vec<u32> = sweep.lengths().collect();
    let circuits = lengths
        .into_par_iter()
        .map(|n| teleport_chain(&sweep.chain(n)))
        .collect::<SynthResult<Vec<_>>>()?;
    info!(
        min_qubits = sweep.min_qubits,
        max_qubits = sweep.max_qubits,
        circuits = circuits.len(),
        "Built teleportation sweep"
    );
    Ok(CircuitFamily::from(circuits))
}

fn build(layout: TeleportLayout, barriers: bool) -> SynthResult<Circuit> {
    let n = layout.num_qubits;
    let half = (n - 1) / 2;
    let mut circuit = Circuit::new(format!("teleport_{n}"), n);
    let cr1 = circuit.add_creg(CONTROL_REGISTER, layout.control_bits)?;
    let cr2 = circuit.add_creg(TARGET_REGISTER, layout.target_bits)?;
    let cr3 = circuit.add_creg(OUTCOME_REGISTER, 2)?;

    circuit.h(QubitId(0))?;
    if barriers {
        circuit.barrier_all()?;
    }

    circuit.cx(QubitId(0), QubitId(1))?;
    for k in 1..half {
        circuit.h(QubitId(2 * k))?;
        circuit.cx(QubitId(2 * k), QubitId(2 * k + 1))?;
    }
    if barriers {
        circuit.barrier_all()?;
    }

    for k in 1..=half {
        circuit.cx(QubitId(2 * k - 1), QubitId(2 * k))?;
        circuit.h(QubitId(2 * k - 1))?;
    }
    if barriers {
        circuit.barrier_all()?;
    }

    let odd = (1..n - 1).step_by(2);
    for (q, &bit) in odd.zip(&cr1.bits) {
        circuit.measure(QubitId(q), bit)?;
    }
    let even = (2..n - 1).step_by(2);
    for (q, &bit) in even.zip(&cr2.bits) {
        circuit.measure(QubitId(q), bit)?;
    }

    let parity = ParityConditions::fold(&cr1, &cr2)?;
    parity.apply(&mut circuit, QubitId(0), layout.last(), &cr3)?;

    debug!(
        num_qubits = n,
        ops = circuit.len(),
        clbits = circuit.num_clbits(),
        "Built teleportation chain"
    );
    Ok(circuit)
}
