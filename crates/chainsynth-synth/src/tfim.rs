//! Brick-wall Trotter layers for the transverse-field Ising chain.
//!
//! A forward layer runs the even-parity pass of pair interactions, then the
//! odd-parity pass, then `rx(θ)` on every qubit. The mirrored layer undoes it
//! in reverse: `rx(-θ)` on every qubit, the odd pass, then the even pass, each
//! pair using [`mirror`](crate::interaction::mirror).

use chainsynth_ir::{Circuit, ParameterExpression, QubitId};

use crate::error::SynthResult;
use crate::interaction::{add_forward, add_mirror};

/// Which half of the neighbouring pairs a pass covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Pairs `(0,1), (2,3), ...`
    Even,
    /// Pairs `(1,2), (3,4), ...`
    Odd,
}

impl Parity {
    /// Index of the first qubit of the first pair.
    pub fn offset(self) -> u32 {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }
}

/// First qubit of every pair in a pass over an `n`-qubit chain.
///
/// Pairs in one pass never share a qubit.
pub fn pair_starts(n: u32, parity: Parity) -> impl Iterator<Item = u32> {
    (parity.offset()..n.saturating_sub(1)).step_by(2)
}

fn rotation_layer(circuit: &mut Circuit, angle: &ParameterExpression) -> SynthResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    let n = circuit.num_qubits() as u32;
    for q in 0..n {
        circuit.rx(angle.clone(), QubitId(q))?;
    }
    Ok(())
}

/// Append one forward Trotter layer to `circuit`.
pub fn add_trotter_layer(
    circuit: &mut Circuit,
    angle: &ParameterExpression,
    barriers: bool,
) -> SynthResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    let n = circuit.num_qubits() as u32;
    for parity in [Parity::Even, Parity::Odd] {
        for i in pair_starts(n, parity) {
            add_forward(circuit, i)?;
        }
        if barriers {
            circuit.barrier_all()?;
        }
    }
    rotation_layer(circuit, angle)?;
    if barriers {
        circuit.barrier_all()?;
    }
    Ok(())
}

/// Append the mirror of one forward Trotter layer to `circuit`.
pub fn add_mirrored_trotter_layer(
    circuit: &mut Circuit,
    angle: &ParameterExpression,
    barriers: bool,
) -> SynthResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    let n = circuit.num_qubits() as u32;
    rotation_layer(circuit, &angle.negated())?;
    if barriers {
        circuit.barrier_all()?;
    }
    for parity in [Parity::Odd, Parity::Even] {
        for i in pair_starts(n, parity) {
            add_mirror(circuit, i)?;
        }
        if barriers {
            circuit.barrier_all()?;
        }
    }
    Ok(())
}
