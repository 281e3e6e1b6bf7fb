//! `OpenQASM` 3 Emitter for Chainsynth
//!
//! Renders circuits as `OpenQASM` 3.0 source for hardware toolchains that
//! take text input.
//!
//! # Supported Features
//!
//! | Feature | Example |
//! |---------|---------|
//! | Version and includes | `OPENQASM 3.0;` |
//! | Qubit register | `qubit[7] q;` |
//! | Named classical registers | `bit[3] cr1;` |
//! | Standard gates | `h q[0];`, `cx q[0], q[1];` |
//! | Half-Y rotations | `sy q[1];` with an inline `gate sy` definition |
//! | Parameterized gates | `rx(pi/2) q[0];`, `rx(-theta) q[0];` |
//! | Measurements | `cr1[0] = measure q[1];` |
//! | Barriers | `barrier q;` |
//! | Parity guards | `if (cr1[0] ^ cr1[1]) { z q[0]; }` |
//!
//! # Example
//!
//! ```rust
//! use chainsynth_ir::{Circuit, QubitId};
//! use chainsynth_qasm3::emit;
//!
//! let mut circuit = Circuit::new("bell", 2);
//! let c = circuit.add_creg("c", 2).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure(QubitId(0), c.bits[0]).unwrap();
//! circuit.measure(QubitId(1), c.bits[1]).unwrap();
//!
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.contains("OPENQASM 3.0;"));
//! assert!(qasm.contains("cx q[0], q[1];"));
//! assert!(qasm.contains("c[0] = measure q[0];"));
//! ```

pub mod emitter;
pub mod error;

pub use emitter::emit;
pub use error::{EmitError, EmitResult};
