//! Chainsynth Circuit Intermediate Representation
//!
//! This crate provides the circuit model every chainsynth builder writes
//! into: an append-only, ordered program over a fixed qubit register and
//! disjoint named classical registers.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] and
//!   [`ClassicalRegister`]
//! - **Gates**: [`StandardGate`], the elementary gate set of the synthesizers
//! - **Parameters**: [`ParameterExpression`] for concrete or symbolic angles
//! - **Conditions**: [`Condition`], XOR folds over measured bits
//! - **Instructions**: [`Instruction`], including conditional blocks
//! - **Circuit**: [`Circuit`], the validated append-only builder
//! - **DAG**: [`CircuitDag`], a derived view for depth analysis
//!
//! # Example: Parity-Guarded Correction
//!
//! ```rust
//! use chainsynth_ir::{Circuit, Condition, Instruction, QubitId, StandardGate};
//!
//! let mut circuit = Circuit::new("guarded", 3);
//! let cr = circuit.add_creg("cr", 2).unwrap();
//!
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure(QubitId(0), cr.bits[0]).unwrap();
//! circuit.measure(QubitId(1), cr.bits[1]).unwrap();
//!
//! let parity = Condition::parity(cr.bits.iter().copied()).unwrap();
//! circuit
//!     .if_test(parity, vec![Instruction::single_qubit_gate(StandardGate::X, QubitId(2))])
//!     .unwrap();
//!
//! assert_eq!(circuit.len(), 5);
//! assert_eq!(circuit.num_clbits(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg` | 1 | Phase gate and its inverse |
//! | `SY`, `SYdg` | 1 | Half-Y rotation and its inverse |
//! | `Rx` | 1 | Rotation about X |
//! | `CX` | 2 | Controlled-NOT (CNOT) |

pub mod circuit;
pub mod condition;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use condition::Condition;
pub use dag::{CircuitDag, DagEdge, NodeIndex, WireId};
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use parameter::ParameterExpression;
pub use qubit::{ClassicalRegister, Clbit, ClbitId, QubitId};
