//! Pairwise ZZ-type interaction on neighbouring qubits.
//!
//! The interaction on `(i, i+1)` is a basis change on the second qubit around
//! a single CX, preceded by phase gates on both qubits:
//!
//! ```text
//! forward(i):  sdg i, sdg i+1, sy i+1, cx i i+1, sydg i+1
//! mirror(i):   sy i+1, cx i i+1, sydg i+1, s i, s i+1
//! ```
//!
//! The conjugated CX `sydg·cx·sy` is self-inverse, so `mirror(i)` applied
//! after `forward(i)` cancels exactly.

use chainsynth_ir::{Circuit, Gate, Instruction, QubitId, StandardGate};

use crate::error::SynthResult;

/// Number of operations in one interaction.
pub const INTERACTION_LEN: usize = 5;

fn half_y(qubit: QubitId) -> Instruction {
    Instruction::gate(Gate::standard(StandardGate::SY).with_label("√Y"), [qubit])
}

fn half_y_dg(qubit: QubitId) -> Instruction {
    Instruction::gate(Gate::standard(StandardGate::SYdg).with_label("√Y†"), [qubit])
}

/// The forward interaction on `(i, i+1)`.
pub fn forward(i: u32) -> [Instruction; INTERACTION_LEN] {
    let (a, b) = (QubitId(i), QubitId(i + 1));
    [
        Instruction::single_qubit_gate(StandardGate::Sdg, a),
        Instruction::single_qubit_gate(StandardGate::Sdg, b),
        half_y(b),
        Instruction::two_qubit_gate(StandardGate::CX, a, b),
        half_y_dg(b),
    ]
}

/// The inverse of [`forward`] on the same pair.
pub fn mirror(i: u32) -> [Instruction; INTERACTION_LEN] {
    let (a, b) = (QubitId(i), QubitId(i + 1));
    [
        half_y(b),
        Instruction::two_qubit_gate(StandardGate::CX, a, b),
        half_y_dg(b),
        Instruction::single_qubit_gate(StandardGate::S, a),
        Instruction::single_qubit_gate(StandardGate::S, b),
    ]
}

/// Append [`forward`] on `(i, i+1)` to `circuit`.
pub fn add_forward(circuit: &mut Circuit, i: u32) -> SynthResult<()> {
    for inst in forward(i) {
        circuit.append(inst)?;
    }
    Ok(())
}

/// Append [`mirror`] on `(i, i+1)` to `circuit`.
pub fn add_mirror(circuit: &mut Circuit, i: u32) -> SynthResult<()> {
    for inst in mirror(i) {
        circuit.append(inst)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(ops: &[Instruction]) -> Vec<StandardGate> {
        ops.iter()
            .map(|inst| inst.as_gate().unwrap().kind.clone())
            .collect()
    }

    #[test]
    fn test_forward_sequence() {
        let ops = forward(3);
        assert_eq!(
            ops.iter().map(Instruction::name).collect::<Vec<_>>(),
            vec!["sdg", "sdg", "sy", "cx", "sydg"]
        );
        assert_eq!(ops[0].qubits, vec![QubitId(3)]);
        assert_eq!(ops[3].qubits, vec![QubitId(3), QubitId(4)]);
        assert_eq!(ops[2].as_gate().unwrap().label.as_deref(), Some("√Y"));
    }

    #[test]
    fn test_mirror_is_reversed_inverse() {
        let fwd = forward(0);
        let mir = mirror(0);

        let reversed: Vec<StandardGate> = kinds(&fwd).iter().rev().map(StandardGate::inverse).collect();
        assert_eq!(kinds(&mir), reversed);
        // The trailing phase gates commute, so they keep qubit order.
        assert_eq!(mir[3].qubits, vec![QubitId(0)]);
        assert_eq!(mir[4].qubits, vec![QubitId(1)]);
    }

    #[test]
    fn test_add_appends_five_ops() {
        let mut circuit = Circuit::new("pair", 2);
        add_forward(&mut circuit, 0).unwrap();
        add_mirror(&mut circuit, 0).unwrap();
        assert_eq!(circuit.len(), 2 * INTERACTION_LEN);
        assert_eq!(circuit.two_qubit_gate_count(), 2);
    }

    #[test]
    fn test_out_of_range_pair_fails() {
        let mut circuit = Circuit::new("pair", 2);
        assert!(add_forward(&mut circuit, 1).is_err());
    }
}
