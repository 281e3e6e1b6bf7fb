//! The circuit program and its builder methods.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::condition::Condition;
use crate::dag::CircuitDag;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::parameter::ParameterExpression;
use crate::qubit::{ClassicalRegister, Clbit, ClbitId, QubitId};

/// A quantum circuit.
///
/// The program is an append-only, ordered list of instructions over a fixed
/// qubit register and any number of named classical registers. Every
/// append is validated; nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Size of the qubit register.
    num_qubits: u32,
    /// Classical bits across all registers, indexed by `ClbitId`.
    clbits: Vec<Clbit>,
    /// Classical registers in declaration order.
    cregs: Vec<ClassicalRegister>,
    /// The program.
    ops: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit over `num_qubits` qubits with no classical bits.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            clbits: vec![],
            cregs: vec![],
            ops: vec![],
        }
    }

    /// Add a named classical register of `size` fresh bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> IrResult<ClassicalRegister> {
        let name = name.into();
        if self.cregs.iter().any(|r| r.name == name) {
            return Err(IrError::DuplicateRegister(name));
        }
        let mut bits = Vec::with_capacity(size as usize);
        for i in 0..size {
            #[allow(clippy::cast_possible_truncation)]
            let id = ClbitId(self.clbits.len() as u32);
            self.clbits.push(Clbit::with_register(id, &name, i));
            bits.push(id);
        }
        let register = ClassicalRegister { name, bits };
        self.cregs.push(register.clone());
        Ok(register)
    }

    /// Look up a classical register by name.
    pub fn creg(&self, name: &str) -> Option<&ClassicalRegister> {
        self.cregs.iter().find(|r| r.name == name)
    }

    /// Append an instruction after validating its operands.
    ///
    /// A rejected instruction leaves the circuit unchanged.
    pub fn append(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.check(&instruction)?;
        self.ops.push(instruction);
        Ok(self)
    }

    fn check(&self, inst: &Instruction) -> IrResult<()> {
        let gate = inst.as_gate();
        let context = || gate.map(|g| g.name().to_string());

        if let Some(g) = gate {
            let got = u32::try_from(inst.qubits.len()).unwrap_or(u32::MAX);
            if got != g.num_qubits() {
                return Err(IrError::QubitCountMismatch {
                    gate_name: g.name().to_string(),
                    expected: g.num_qubits(),
                    got,
                });
            }
        }

        if let Some(&qubit) = inst.qubits.iter().find(|q| q.0 >= self.num_qubits) {
            return Err(IrError::QubitNotFound {
                qubit,
                gate_name: context(),
            });
        }
        if let Some(&clbit) = inst.clbits.iter().find(|c| !self.has_clbit(**c)) {
            return Err(IrError::ClbitNotFound {
                clbit,
                gate_name: context(),
            });
        }

        // Barriers and block operand lists may span any qubits; only gates and
        // measurements must touch distinct ones.
        if gate.is_some() || inst.is_measure() {
            let mut seen = FxHashSet::default();
            if let Some(&qubit) = inst.qubits.iter().find(|q| !seen.insert(**q)) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: context(),
                });
            }
        }

        match &inst.kind {
            InstructionKind::Measure if inst.qubits.len() != inst.clbits.len() => {
                Err(IrError::ClbitCountMismatch {
                    qubits: inst.qubits.len(),
                    clbits: inst.clbits.len(),
                })
            }
            InstructionKind::IfTest { condition, body } => {
                if let Some(clbit) = condition.bits().into_iter().find(|c| !self.is_measured(*c)) {
                    return Err(IrError::UnmeasuredClbit { clbit });
                }
                body.iter().try_for_each(|inner| self.check(inner))
            }
            _ => Ok(()),
        }
    }

    fn has_clbit(&self, clbit: ClbitId) -> bool {
        (clbit.0 as usize) < self.clbits.len()
    }

    /// Whether some earlier measurement writes `clbit`.
    pub fn is_measured(&self, clbit: ClbitId) -> bool {
        self.ops
            .iter()
            .any(|inst| inst.is_measure() && inst.clbits.contains(&clbit))
    }

    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Half-Y rotation. Use [`Gate::with_label`] through [`Circuit::gate`]
    /// to attach a display label.
    pub fn sy(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::SY, qubit))
    }

    pub fn sydg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::SYdg, qubit))
    }

    /// X rotation by a literal or symbolic angle.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))
    }

    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Append any gate, labelled or not.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::gate(gate, qubits))
    }

    /// Read `qubit` out into `clbit`.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Instruction::measure(qubit, clbit))
    }

    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.append(Instruction::barrier(qubits))
    }

    /// Barrier across the whole chain.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        self.append(Instruction::barrier((0..self.num_qubits).map(QubitId)))
    }

    /// Attach a block that runs only when `condition` holds.
    pub fn if_test(
        &mut self,
        condition: Condition,
        body: Vec<Instruction>,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::if_test(condition, body))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the circuit.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Classical bits across all registers.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Every classical bit, indexed by [`ClbitId`].
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// Registers in declaration order.
    pub fn cregs(&self) -> &[ClassicalRegister] {
        &self.cregs
    }

    /// The program, in append order.
    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    /// Number of top-level instructions.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Instruction counts by name, conditional bodies included.
    pub fn count_ops(&self) -> BTreeMap<String, usize> {
        fn walk(ops: &[Instruction], counts: &mut BTreeMap<String, usize>) {
            for inst in ops {
                *counts.entry(inst.name().to_string()).or_default() += 1;
                if let Some((_, body)) = inst.as_if_test() {
                    walk(body, counts);
                }
            }
        }
        let mut counts = BTreeMap::new();
        walk(&self.ops, &mut counts);
        counts
    }

    /// Number of top-level two-qubit gates.
    pub fn two_qubit_gate_count(&self) -> usize {
        self.ops.iter().filter(|i| i.is_two_qubit_gate()).count()
    }

    pub fn to_dag(&self) -> CircuitDag {
        CircuitDag::from_circuit(self)
    }

    /// Layers of non-barrier operations.
    pub fn depth(&self) -> usize {
        self.to_dag().depth()
    }

    /// Depth counting only two-qubit gates.
    pub fn two_qubit_depth(&self) -> usize {
        self.to_dag().depth_by(Instruction::is_two_qubit_gate)
    }
}
