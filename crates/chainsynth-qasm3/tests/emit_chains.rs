//! Emission of the built experiment circuits.

use chainsynth_qasm3::emit;
use chainsynth_synth::{TeleportConfig, TrotterConfig, teleport_chain, tfim_family};
use proptest::prelude::*;

#[test]
fn teleport_chain_emits_guards_and_registers() {
    let circuit = teleport_chain(&TeleportConfig::new(7)).unwrap();
    let qasm = emit(&circuit).unwrap();

    assert!(qasm.contains("qubit[7] q;"));
    assert!(qasm.contains("bit[3] cr1;\nbit[2] cr2;\nbit[2] cr3;\n"));
    assert!(qasm.contains("cr1[2] = measure q[5];"));
    assert!(qasm.contains("cr2[1] = measure q[4];"));
    assert!(qasm.contains("if (cr1[0] ^ cr1[1] ^ cr1[2]) {\n    z q[0];\n}\n"));
    assert!(qasm.contains("if (cr2[0] ^ cr2[1]) {\n    x q[6];\n}\n"));
    assert!(qasm.ends_with("cr3[0] = measure q[0];\ncr3[1] = measure q[6];\n"));
    assert_eq!(qasm.matches("barrier q;").count(), 3);
}

#[test]
fn trotter_step_emits_half_y_definitions() {
    let config = TrotterConfig::new(4, 2).with_measured_qubits([1, 2]);
    let family = tfim_family(&config).unwrap();
    let qasm = emit(family.get(1).unwrap()).unwrap();

    assert!(qasm.contains("gate sy a { ry(pi/2) a; }"));
    assert!(qasm.contains("gate sydg a { ry(-pi/2) a; }"));
    assert!(qasm.contains("bit[2] c;"));
    assert!(qasm.contains("rx(pi/2) q[3];"));
    assert!(qasm.contains("rx(-pi/2) q[3];"));
    assert_eq!(qasm.matches(" = measure ").count(), 2);
    assert_eq!(qasm.matches("cx q[").count(), 12);
}

#[test]
fn symbolic_angle_becomes_input() {
    let config = TrotterConfig::new(3, 1)
        .with_angle(chainsynth_ir::ParameterExpression::symbol("theta"))
        .with_measured_qubits([0]);
    let family = tfim_family(&config).unwrap();
    let qasm = emit(family.get(0).unwrap()).unwrap();
    assert!(qasm.contains("input float[64] theta;"));
    assert!(qasm.contains("rx(-theta) q[2];"));
}

proptest! {
    #[test]
    fn every_chain_length_emits_one_line_per_op(half in 3u32..25, barriers in any::<bool>()) {
        let n = 2 * half + 1;
        let circuit = teleport_chain(&TeleportConfig::new(n).with_barriers(barriers)).unwrap();
        let qasm = emit(&circuit).unwrap();

        prop_assert_eq!(qasm.matches(" = measure ").count(), n as usize);
        prop_assert_eq!(qasm.matches("if (").count(), 2);
        let body_lines = qasm.lines().skip_while(|l| !l.starts_with("h q[0]")).count();
        // Each conditional block spans three lines.
        prop_assert_eq!(body_lines, circuit.len() + 2 * 2);
    }
}
