//! Parity-conditioned byproduct corrections.
//!
//! Entanglement swapping along the chain leaves Pauli byproducts on the two
//! endpoints. Whether the first qubit needs a phase flip is the parity of one
//! half of the ancilla outcomes; whether the last qubit needs a bit flip is
//! the parity of the other half. The two halves must stay disjoint.

use chainsynth_ir::{Circuit, ClassicalRegister, Condition, Instruction, QubitId, StandardGate};
use rustc_hash::FxHashSet;

use crate::error::{SynthError, SynthResult};

/// The two correction guards of a teleportation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityConditions {
    /// Parity of the control-side register; guards `z` on the first qubit.
    pub control: Condition,
    /// Parity of the target-side register; guards `x` on the last qubit.
    pub target: Condition,
}

impl ParityConditions {
    /// Fold every bit of `control` and every bit of `target`, each in register order.
    ///
    /// Fails if either register is empty or the two share a bit.
    pub fn fold(control: &ClassicalRegister, target: &ClassicalRegister) -> SynthResult<Self> {
        let control_bits: FxHashSet<_> = control.bits.iter().copied().collect();
        if let Some(shared) = target.bits.iter().find(|b| control_bits.contains(b)) {
            return Err(SynthError::config(format!(
                "Registers {} and {} both contain {shared}",
                control.name, target.name
            )));
        }
        Ok(Self {
            control: Condition::parity(control.bits.iter().copied())?,
            target: Condition::parity(target.bits.iter().copied())?,
        })
    }

    /// Attach both corrections, then measure `first` and `last` into `outcome`.
    ///
    /// `outcome` must hold exactly two bits; `first` goes to bit 0.
    pub fn apply(
        &self,
        circuit: &mut Circuit,
        first: QubitId,
        last: QubitId,
        outcome: &ClassicalRegister,
    ) -> SynthResult<()> {
        let [b0, b1] = outcome.bits[..] else {
            return Err(SynthError::config(format!(
                "Outcome register {} must have 2 bits, has {}",
                outcome.name,
                outcome.len()
            )));
        };

        circuit.if_test(
            self.control.clone(),
            vec![Instruction::single_qubit_gate(StandardGate::Z, first)],
        )?;
        circuit.if_test(
            self.target.clone(),
            vec![Instruction::single_qubit_gate(StandardGate::X, last)],
        )?;
        circuit.measure(first, b0)?;
        circuit.measure(last, b1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainsynth_ir::ClbitId;

    fn measured(circuit: &mut Circuit, name: &str, qubits: &[u32]) -> ClassicalRegister {
        #[allow(clippy::cast_possible_truncation)]
        let reg = circuit.add_creg(name, qubits.len() as u32).unwrap();
        for (&q, &b) in qubits.iter().zip(&reg.bits) {
            circuit.measure(QubitId(q), b).unwrap();
        }
        reg
    }

    #[test]
    fn test_fold_reads_each_register() {
        let mut circuit = Circuit::new("chain", 7);
        let cr1 = measured(&mut circuit, "cr1", &[1, 3, 5]);
        let cr2 = measured(&mut circuit, "cr2", &[2, 4]);
        let parity = ParityConditions::fold(&cr1, &cr2).unwrap();
        assert_eq!(parity.control.bits(), cr1.bits);
        assert_eq!(parity.target.bits(), cr2.bits);
    }

    #[test]
    fn test_overlapping_registers_rejected() {
        let shared = ClassicalRegister {
            name: "a".into(),
            bits: vec![ClbitId(0), ClbitId(1)],
        };
        let other = ClassicalRegister {
            name: "b".into(),
            bits: vec![ClbitId(1)],
        };
        assert!(matches!(
            ParityConditions::fold(&shared, &other),
            Err(SynthError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_register_rejected() {
        let full = ClassicalRegister {
            name: "a".into(),
            bits: vec![ClbitId(0)],
        };
        let empty = ClassicalRegister {
            name: "b".into(),
            bits: vec![],
        };
        assert!(matches!(
            ParityConditions::fold(&full, &empty),
            Err(SynthError::Ir(_))
        ));
    }

    #[test]
    fn test_apply_appends_guards_and_final_measures() {
        let mut circuit = Circuit::new("chain", 7);
        let cr1 = measured(&mut circuit, "cr1", &[1, 3, 5]);
        let cr2 = measured(&mut circuit, "cr2", &[2, 4]);
        let cr3 = circuit.add_creg("cr3", 2).unwrap();
        let before = circuit.len();

        let parity = ParityConditions::fold(&cr1, &cr2).unwrap();
        parity.apply(&mut circuit, QubitId(0), QubitId(6), &cr3).unwrap();

        let tail = &circuit.ops()[before..];
        assert_eq!(tail.len(), 4);
        let (guard, body) = tail[0].as_if_test().unwrap();
        assert_eq!(guard, &parity.control);
        assert_eq!(body[0].name(), "z");
        assert_eq!(body[0].qubits, vec![QubitId(0)]);
        let (_, body) = tail[1].as_if_test().unwrap();
        assert_eq!(body[0].name(), "x");
        assert_eq!(body[0].qubits, vec![QubitId(6)]);
        assert_eq!(tail[2].clbits, vec![cr3.bits[0]]);
        assert_eq!(tail[3].qubits, vec![QubitId(6)]);
    }

    #[test]
    fn test_apply_requires_two_outcome_bits() {
        let mut circuit = Circuit::new("chain", 7);
        let cr1 = measured(&mut circuit, "cr1", &[1]);
        let cr2 = measured(&mut circuit, "cr2", &[2]);
        let cr3 = circuit.add_creg("cr3", 3).unwrap();
        let parity = ParityConditions::fold(&cr1, &cr2).unwrap();
        assert!(
            parity
                .apply(&mut circuit, QubitId(0), QubitId(6), &cr3)
                .is_err()
        );
    }
}
