//! QASM3 emitter for serializing circuits.

use std::collections::BTreeSet;
use std::f64::consts::PI;

use chainsynth_ir::{
    Circuit, ClbitId, Condition, Instruction, InstructionKind, ParameterExpression, QubitId,
    StandardGate,
};
use rustc_hash::FxHashMap;

use crate::error::{EmitError, EmitResult};

const ANGLE_TOL: f64 = 1e-10;

/// Angles printed as π fractions instead of decimals.
const PI_FRACTIONS: [(f64, &str); 6] = [
    (PI, "pi"),
    (PI / 2.0, "pi/2"),
    (PI / 4.0, "pi/4"),
    (-PI, "-pi"),
    (-PI / 2.0, "-pi/2"),
    (-PI / 4.0, "-pi/4"),
];

/// Names a parameter symbol may not take: the qubit register, built-in
/// constants, emitted gate names and the keywords of the declarations used.
const RESERVED: &[&str] = &[
    "q", "pi", "tau", "euler", "h", "x", "z", "s", "sdg", "sy", "sydg", "rx", "ry", "cx",
    "measure", "barrier", "reset", "gate", "if", "else", "input", "output", "qubit", "bit",
    "float", "int", "uint", "angle", "bool", "const", "include", "def", "return", "U",
    "gphase",
];

/// Emit a circuit as QASM3 source code.
///
/// `sy` and `sydg` are not in `stdgates.inc`; when used they are defined as
/// `ry(±pi/2)`, which matches them up to a global phase. Unbound symbols are
/// declared as `input float[64]` parameters.
pub fn emit(circuit: &Circuit) -> EmitResult<String> {
    let mut emitter = Emitter::new(circuit)?;
    emitter.emit_circuit(circuit)?;
    Ok(emitter.output)
}

/// QASM3 emitter.
struct Emitter {
    output: String,
    indent: usize,
    num_qubits: usize,
    bit_names: FxHashMap<ClbitId, String>,
}

#[allow(clippy::unused_self)]
impl Emitter {
    fn new(circuit: &Circuit) -> EmitResult<Self> {
        let mut bit_names = FxHashMap::default();
        for clbit in circuit.clbits() {
            match (&clbit.register, clbit.index) {
                (Some(reg), Some(idx)) => {
                    bit_names.insert(clbit.id, format!("{reg}[{idx}]"));
                }
                _ => return Err(EmitError::UnregisteredClbit(clbit.id)),
            }
        }
        Ok(Self {
            output: String::new(),
            indent: 0,
            num_qubits: circuit.num_qubits(),
            bit_names,
        })
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> EmitResult<()> {
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        let names = gate_names(circuit.ops());
        let mut defined = false;
        if names.contains("sy") {
            self.writeln("gate sy a { ry(pi/2) a; }");
            defined = true;
        }
        if names.contains("sydg") {
            self.writeln("gate sydg a { ry(-pi/2) a; }");
            defined = true;
        }
        if defined {
            self.writeln("");
        }

        let symbols = symbols(circuit.ops());
        for symbol in &symbols {
            if !is_identifier(symbol) {
                return Err(EmitError::InvalidIdentifier(symbol.clone()));
            }
            if RESERVED.contains(&symbol.as_str()) || circuit.creg(symbol).is_some() {
                return Err(EmitError::ReservedIdentifier(symbol.clone()));
            }
            self.writeln(&format!("input float[64] {symbol};"));
        }
        if !symbols.is_empty() {
            self.writeln("");
        }

        if self.num_qubits > 0 {
            self.writeln(&format!("qubit[{}] q;", self.num_qubits));
        }
        for creg in circuit.cregs() {
            self.writeln(&format!("bit[{}] {};", creg.len(), creg.name));
        }
        if self.num_qubits > 0 || !circuit.cregs().is_empty() {
            self.writeln("");
        }

        for instruction in circuit.ops() {
            self.emit_instruction(instruction)?;
        }
        Ok(())
    }

    fn emit_instruction(&mut self, instruction: &Instruction) -> EmitResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits = self.emit_qubits(&instruction.qubits);
                let params = gate
                    .kind
                    .angle()
                    .into_iter()
                    .map(angle_text)
                    .collect::<EmitResult<Vec<_>>>()?;

                if params.is_empty() {
                    self.writeln(&format!("{} {qubits};", gate.name()));
                } else {
                    self.writeln(&format!("{}({}) {qubits};", gate.name(), params.join(", ")));
                }
            }

            InstructionKind::Measure => {
                for (q, c) in instruction.qubits.iter().zip(&instruction.clbits) {
                    let bit = self.bit_name(*c)?;
                    self.writeln(&format!("{bit} = measure q[{}];", q.0));
                }
            }

            InstructionKind::Barrier => {
                if instruction.qubits.len() == self.num_qubits {
                    self.writeln("barrier q;");
                } else {
                    let qubits = self.emit_qubits(&instruction.qubits);
                    self.writeln(&format!("barrier {qubits};"));
                }
            }

            InstructionKind::IfTest { condition, body } => {
                let guard = self.emit_condition(condition)?;
                self.writeln(&format!("if ({guard}) {{"));
                self.indent += 1;
                for inst in body {
                    self.emit_instruction(inst)?;
                }
                self.indent -= 1;
                self.writeln("}");
            }
        }

        Ok(())
    }

    /// Guards render flat, in fold order: `a ^ b ^ c`.
    fn emit_condition(&self, condition: &Condition) -> EmitResult<String> {
        let bits = condition
            .bits()
            .into_iter()
            .map(|b| self.bit_name(b))
            .collect::<EmitResult<Vec<_>>>()?;
        Ok(bits.join(" ^ "))
    }

    fn bit_name(&self, clbit: ClbitId) -> EmitResult<String> {
        self.bit_names
            .get(&clbit)
            .cloned()
            .ok_or(EmitError::UnregisteredClbit(clbit))
    }

    fn emit_qubits(&self, qubits: &[QubitId]) -> String {
        qubits
            .iter()
            .map(|q| format!("q[{}]", q.0))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn writeln(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.output.push_str("    ");
            }
        }
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn angle_text(angle: &ParameterExpression) -> EmitResult<String> {
    match angle {
        ParameterExpression::Constant(v) if !v.is_finite() => Err(EmitError::NonFiniteAngle(*v)),
        ParameterExpression::Constant(v) => Ok(PI_FRACTIONS
            .iter()
            .find(|(f, _)| (v - f).abs() < ANGLE_TOL)
            .map_or_else(|| format!("{v}"), |(_, text)| (*text).to_string())),
        ParameterExpression::Symbol(name) => Ok(name.clone()),
        ParameterExpression::Neg(inner) => match inner.as_ref() {
            ParameterExpression::Symbol(name) => Ok(format!("-{name}")),
            other => Ok(format!("-({})", angle_text(other)?)),
        },
    }
}

fn gate_names(ops: &[Instruction]) -> BTreeSet<&'static str> {
    let mut names = BTreeSet::new();
    for inst in ops {
        if let Some(gate) = inst.as_gate() {
            names.insert(gate.kind.name());
        }
        if let Some((_, body)) = inst.as_if_test() {
            names.extend(gate_names(body));
        }
    }
    names
}

fn symbols(ops: &[Instruction]) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for inst in ops {
        if let Some(gate) = inst.as_gate() {
            if let Some(angle) = gate.kind.angle() {
                found.extend(angle.symbols());
            }
        }
        if let Some((_, body)) = inst.as_if_test() {
            found.extend(symbols(body));
        }
    }
    found
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bell() -> Circuit {
        let mut circuit = Circuit::new("bell", 2);
        let c = circuit.add_creg("c", 2).unwrap();
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.measure(QubitId(0), c.bits[0]).unwrap();
        circuit.measure(QubitId(1), c.bits[1]).unwrap();
        circuit
    }

    #[test]
    fn test_emit_bell_state() {
        let qasm = emit(&bell()).unwrap();
        assert!(qasm.starts_with("OPENQASM 3.0;\ninclude \"stdgates.inc\";\n"));
        assert!(qasm.contains("qubit[2] q;"));
        assert!(qasm.contains("bit[2] c;"));
        assert!(qasm.contains("h q[0];"));
        assert!(qasm.contains("cx q[0], q[1];"));
        assert!(qasm.contains("c[1] = measure q[1];"));
        assert!(!qasm.contains("gate sy"));
    }

    #[test]
    fn test_emit_half_y_definitions() {
        let mut circuit = Circuit::new("sy", 1);
        circuit.sy(QubitId(0)).unwrap();
        circuit.sydg(QubitId(0)).unwrap();
        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("gate sy a { ry(pi/2) a; }"));
        assert!(qasm.contains("gate sydg a { ry(-pi/2) a; }"));
        assert!(qasm.contains("sy q[0];"));
        assert!(qasm.contains("sydg q[0];"));
    }

    #[test]
    fn test_emit_parameterized() {
        let mut circuit = Circuit::new("rx", 1);
        circuit.rx(PI / 2.0, QubitId(0)).unwrap();
        circuit.rx(-PI / 2.0, QubitId(0)).unwrap();
        circuit.rx(0.25, QubitId(0)).unwrap();
        let theta = ParameterExpression::symbol("theta");
        circuit.rx(theta.clone(), QubitId(0)).unwrap();
        circuit.rx(theta.negated(), QubitId(0)).unwrap();

        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("input float[64] theta;"));
        assert!(qasm.contains("rx(pi/2) q[0];"));
        assert!(qasm.contains("rx(-pi/2) q[0];"));
        assert!(qasm.contains("rx(0.25) q[0];"));
        assert!(qasm.contains("rx(theta) q[0];"));
        assert!(qasm.contains("rx(-theta) q[0];"));
    }

    #[test]
    fn test_emit_parity_guard() {
        let mut circuit = Circuit::new("guard", 3);
        let cr = circuit.add_creg("cr", 2).unwrap();
        circuit.measure(QubitId(1), cr.bits[0]).unwrap();
        circuit.measure(QubitId(2), cr.bits[1]).unwrap();
        let guard = Condition::parity(cr.bits.iter().copied()).unwrap();
        circuit
            .if_test(
                guard,
                vec![Instruction::single_qubit_gate(StandardGate::Z, QubitId(0))],
            )
            .unwrap();

        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("if (cr[0] ^ cr[1]) {\n    z q[0];\n}\n"));
    }

    #[test]
    fn test_emit_barriers() {
        let mut circuit = Circuit::new("barrier", 3);
        circuit.barrier_all().unwrap();
        circuit.barrier([QubitId(0), QubitId(2)]).unwrap();
        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("barrier q;"));
        assert!(qasm.contains("barrier q[0], q[2];"));
    }

    #[test]
    fn test_non_finite_angle() {
        let mut circuit = Circuit::new("nan", 1);
        circuit.rx(f64::INFINITY, QubitId(0)).unwrap();
        assert!(matches!(emit(&circuit), Err(EmitError::NonFiniteAngle(_))));
    }

    #[test]
    fn test_invalid_symbol() {
        let mut circuit = Circuit::new("sym", 1);
        circuit
            .rx(ParameterExpression::symbol("θ 1"), QubitId(0))
            .unwrap();
        assert!(matches!(emit(&circuit), Err(EmitError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_symbol_clashing_with_declared_names() {
        for name in ["q", "pi", "sy", "input"] {
            let mut circuit = Circuit::new("sym", 1);
            circuit
                .rx(ParameterExpression::symbol(name), QubitId(0))
                .unwrap();
            assert!(
                matches!(emit(&circuit), Err(EmitError::ReservedIdentifier(_))),
                "{name}"
            );
        }

        let mut circuit = bell();
        circuit
            .rx(ParameterExpression::symbol("c"), QubitId(0))
            .unwrap();
        assert!(matches!(emit(&circuit), Err(EmitError::ReservedIdentifier(ref n)) if n == "c"));

        let mut circuit = bell();
        circuit
            .rx(ParameterExpression::symbol("theta"), QubitId(0))
            .unwrap();
        assert!(emit(&circuit).is_ok());
    }
}
