//! End-to-end builder scenarios.

use std::f64::consts::FRAC_PI_2;

use chainsynth_ir::ParameterExpression;
use chainsynth_synth::{
    CircuitFamily, ExperimentConfig, GhzConfig, SynthError, TeleportConfig, TeleportSweep, TrotterConfig,
    ghz_chain, teleport_chain, teleport_sweep, tfim_family,
};

// ---------------------------------------------------------------------------
// Trotter
// ---------------------------------------------------------------------------

#[test]
fn two_qubit_echo_without_barriers() {
    let config = TrotterConfig::new(2, 1)
        .with_angle(FRAC_PI_2)
        .with_measured_qubits([0, 1])
        .with_barriers(false);
    let family = tfim_family(&config).unwrap();
    assert_eq!(family.len(), 1);

    let circuit = &family.as_slice()[0];
    let counts = circuit.count_ops();
    // forward: sdg sdg sy cx sydg rx rx, mirror: rx rx sy cx sydg s s
    assert_eq!(circuit.len(), 16);
    assert_eq!(counts.get("cx"), Some(&2));
    assert_eq!(counts.get("rx"), Some(&4));
    assert_eq!(counts.get("measure"), Some(&2));
    assert_eq!(counts.get("barrier"), None);
}

#[test]
fn reference_experiment_shape() {
    let family = tfim_family(&TrotterConfig::default()).unwrap();
    assert_eq!(family.len(), 10);
    let last = family.get(9).unwrap();
    assert_eq!(last.num_qubits(), 100);
    assert_eq!(last.num_clbits(), 2);
    assert_eq!(last.two_qubit_depth(), 40);
}

#[test]
fn family_serializes_as_array() {
    let config = TrotterConfig::new(3, 2).with_barriers(false);
    let family = tfim_family(&config).unwrap();
    let json = serde_json::to_value(&family).unwrap();
    let circuits = json.as_array().unwrap();
    assert_eq!(circuits.len(), 2);
    assert_eq!(circuits[1]["name"], "tfim_step_02");
}

#[test]
fn symbolic_family_reloads_from_json() {
    let config = TrotterConfig::new(4, 2).with_angle(ParameterExpression::symbol("theta"));
    let family = tfim_family(&config).unwrap();
    let json = serde_json::to_string(&family).unwrap();
    let back: CircuitFamily = serde_json::from_str(&json).unwrap();
    assert_eq!(back, family);
}

// ---------------------------------------------------------------------------
// Teleportation
// ---------------------------------------------------------------------------

#[test]
fn seven_qubit_chain_registers() {
    let circuit = teleport_chain(&TeleportConfig::new(7)).unwrap();
    assert_eq!(circuit.creg("cr1").unwrap().len(), 3);
    assert_eq!(circuit.creg("cr2").unwrap().len(), 2);
    assert_eq!(circuit.creg("cr3").unwrap().len(), 2);
    assert_eq!(circuit.num_clbits(), 7);
    assert_eq!(circuit.count_ops().get("if_else"), Some(&2));
}

#[test]
fn reference_sweep() {
    let family = teleport_sweep(&TeleportSweep::default()).unwrap();
    assert_eq!(family.len(), 18);
    assert_eq!(family.get(17).unwrap().num_qubits(), 41);
}

#[test]
fn short_chain_is_a_configuration_error() {
    let err = teleport_chain(&TeleportConfig::new(5)).unwrap_err();
    assert!(matches!(err, SynthError::Configuration(_)));
    assert!(err.to_string().contains("at least 7"));
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn experiment_file_drives_builders() {
    let yaml = "experiment: ghz\nnum_qubits: 12\n";
    let config: ExperimentConfig = serde_yaml_ng::from_str(yaml).unwrap();
    let ExperimentConfig::Ghz(ghz) = config else {
        panic!("Expected ghz experiment");
    };
    assert_eq!(ghz, GhzConfig::new(12));
    let circuit = ghz_chain(&ghz).unwrap();
    assert_eq!(circuit.num_qubits(), 12);
}

#[test]
fn trotter_file_defaults_missing_fields() {
    let yaml = "experiment: trotter\nnum_qubits: 8\nmeasured_qubits: [3, 4]\n";
    let config: ExperimentConfig = serde_yaml_ng::from_str(yaml).unwrap();
    config.validate().unwrap();
    let ExperimentConfig::Trotter(trotter) = config else {
        panic!("Expected trotter experiment");
    };
    assert_eq!(trotter.steps, 10);
    assert_eq!(trotter.rx_angle.as_f64(), Some(FRAC_PI_2));
}
