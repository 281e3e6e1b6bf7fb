//! One entry of a circuit program: an operation plus the wires it touches.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::gate::{Gate, StandardGate};
use crate::qubit::{ClbitId, QubitId};

/// What an [`Instruction`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    Gate(Gate),
    /// `qubits[k]` is read out into `clbits[k]`.
    Measure,
    /// Scheduling fence across its qubits; no effect on the state.
    Barrier,
    /// `body` runs as a unit when `condition` evaluates to 1 at run time.
    IfTest {
        condition: Condition,
        body: Vec<Instruction>,
    },
}

/// An operation with its qubit and classical-bit operands.
///
/// For an `IfTest`, `qubits` is the union of the body's qubits and `clbits`
/// the bits the guard reads, so dependency analysis sees both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub qubits: Vec<QubitId>,
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate.into()),
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// `control`/`target` order for `cx`.
    pub fn two_qubit_gate(gate: StandardGate, first: QubitId, second: QubitId) -> Self {
        Self::gate(gate, [first, second])
    }

    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    /// A guarded block over `body`.
    pub fn if_test(condition: Condition, body: Vec<Instruction>) -> Self {
        let mut qubits = Vec::new();
        for q in body.iter().flat_map(|inst| inst.qubits.iter().copied()) {
            if !qubits.contains(&q) {
                qubits.push(q);
            }
        }
        Self {
            clbits: condition.bits(),
            kind: InstructionKind::IfTest { condition, body },
            qubits,
        }
    }

    pub fn is_gate(&self) -> bool {
        self.as_gate().is_some()
    }

    /// Whether this is a `cx` (the only two-qubit gate).
    pub fn is_two_qubit_gate(&self) -> bool {
        self.as_gate().is_some_and(|g| g.num_qubits() == 2)
    }

    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, InstructionKind::Barrier)
    }

    pub fn is_if_test(&self) -> bool {
        self.as_if_test().is_some()
    }

    pub fn as_gate(&self) -> Option<&Gate> {
        if let InstructionKind::Gate(g) = &self.kind {
            Some(g)
        } else {
            None
        }
    }

    /// Guard and body of a conditional block.
    pub fn as_if_test(&self) -> Option<(&Condition, &[Instruction])> {
        if let InstructionKind::IfTest { condition, body } = &self.kind {
            Some((condition, body))
        } else {
            None
        }
    }

    /// Op-count key: the gate mnemonic, `measure`, `barrier` or `if_else`.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Barrier => "barrier",
            InstructionKind::IfTest { .. } => "if_else",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_shapes() {
        let h = Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
        assert!(h.is_gate() && !h.is_two_qubit_gate());
        assert_eq!(h.name(), "h");

        let cx = Instruction::two_qubit_gate(StandardGate::CX, QubitId(2), QubitId(3));
        assert!(cx.is_two_qubit_gate());
        assert_eq!(cx.qubits, vec![QubitId(2), QubitId(3)]);

        let m = Instruction::measure(QubitId(4), ClbitId(1));
        assert!(m.is_measure());
        assert_eq!((m.qubits.len(), m.clbits.len()), (1, 1));

        let fence = Instruction::barrier((0..3).map(QubitId));
        assert!(fence.is_barrier());
        assert_eq!(fence.name(), "barrier");
    }

    #[test]
    fn test_if_test_operands() {
        let cond = Condition::parity([ClbitId(1), ClbitId(3)]).unwrap();
        let inst = Instruction::if_test(
            cond.clone(),
            vec![
                Instruction::single_qubit_gate(StandardGate::Z, QubitId(0)),
                Instruction::single_qubit_gate(StandardGate::X, QubitId(0)),
            ],
        );
        assert!(inst.is_if_test());
        assert_eq!(inst.name(), "if_else");
        assert_eq!(inst.qubits, vec![QubitId(0)]);
        assert_eq!(inst.clbits, vec![ClbitId(1), ClbitId(3)]);

        let (guard, body) = inst.as_if_test().unwrap();
        assert_eq!(guard, &cond);
        assert_eq!(body.len(), 2);
    }
}
