//! Experiment configuration.
//!
//! Every builder takes one of these values explicitly; nothing is read from
//! process-wide state. Each config is validated as a whole before the first
//! operation of a build is appended, so a rejected config never yields a
//! partial circuit.
//!
//! Configs load from YAML or JSON; omitted fields take the defaults of the
//! reference experiments.

use std::f64::consts::FRAC_PI_2;
use std::iter::StepBy;
use std::ops::RangeInclusive;

use chainsynth_ir::ParameterExpression;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Smallest chain that still has ancillas on both sides of the split.
pub const MIN_TELEPORT_QUBITS: u32 = 7;

/// Mirrored Trotter experiment on a 1D transverse-field Ising chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrotterConfig {
    /// Length of the chain.
    pub num_qubits: u32,
    /// Number of forward+mirror steps, and so the number of circuits.
    pub steps: u32,
    /// Angle of the transverse-field rotation.
    pub rx_angle: ParameterExpression,
    /// Qubits measured at the end of every snapshot, in register order.
    pub measured_qubits: Vec<u32>,
    /// Insert ordering barriers between parity passes and rotation layers.
    pub layer_barriers: bool,
}

impl Default for TrotterConfig {
    fn default() -> Self {
        Self {
            num_qubits: 100,
            steps: 10,
            rx_angle: ParameterExpression::constant(FRAC_PI_2),
            measured_qubits: vec![49, 50],
            layer_barriers: true,
        }
    }
}

impl TrotterConfig {
    /// Create a config for `num_qubits` and `steps`, measuring the two middle qubits.
    pub fn new(num_qubits: u32, steps: u32) -> Self {
        let mid = num_qubits / 2;
        let measured_qubits = if num_qubits >= 2 {
            vec![mid - 1, mid]
        } else {
            vec![0]
        };
        Self {
            num_qubits,
            steps,
            measured_qubits,
            ..Self::default()
        }
    }

    /// Set the rotation angle.
    #[must_use]
    pub fn with_angle(mut self, angle: impl Into<ParameterExpression>) -> Self {
        self.rx_angle = angle.into();
        self
    }

    /// Set the measured qubits.
    #[must_use]
    pub fn with_measured_qubits(mut self, qubits: impl IntoIterator<Item = u32>) -> Self {
        self.measured_qubits = qubits.into_iter().collect();
        self
    }

    /// Enable or disable ordering barriers.
    #[must_use]
    pub fn with_barriers(mut self, enabled: bool) -> Self {
        self.layer_barriers = enabled;
        self
    }

    /// Check the config before anything is built.
    pub fn validate(&self) -> SynthResult<()> {
        if self.num_qubits == 0 {
            return Err(SynthError::config("Trotter chain needs at least one qubit"));
        }
        if self.steps == 0 {
            return Err(SynthError::config("Trotter step count must be positive"));
        }
        if self.measured_qubits.is_empty() {
            return Err(SynthError::config("At least one qubit must be measured"));
        }
        let mut seen = FxHashSet::default();
        for &q in &self.measured_qubits {
            if q >= self.num_qubits {
                return Err(SynthError::config(format!(
                    "Measured qubit {q} is outside a {}-qubit chain",
                    self.num_qubits
                )));
            }
            if !seen.insert(q) {
                return Err(SynthError::config(format!(
                    "Qubit {q} is measured more than once"
                )));
            }
        }
        if let Some(v) = self.rx_angle.as_f64() {
            if !v.is_finite() {
                return Err(SynthError::config(format!("Rotation angle {v} is not finite")));
            }
        }
        Ok(())
    }
}

/// A single teleportation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleportConfig {
    /// Chain length; odd and at least [`MIN_TELEPORT_QUBITS`].
    pub num_qubits: u32,
    /// Insert barriers between the entangling stages.
    pub barriers: bool,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            num_qubits: MIN_TELEPORT_QUBITS,
            barriers: true,
        }
    }
}

impl TeleportConfig {
    /// Create a config for a chain of `num_qubits`.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            ..Self::default()
        }
    }

    /// Enable or disable stage barriers.
    #[must_use]
    pub fn with_barriers(mut self, enabled: bool) -> Self {
        self.barriers = enabled;
        self
    }

    /// Check the config before anything is built.
    pub fn validate(&self) -> SynthResult<()> {
        validate_chain_length(self.num_qubits)
    }
}

pub(crate) fn validate_chain_length(n: u32) -> SynthResult<()> {
    if n < MIN_TELEPORT_QUBITS {
        return Err(SynthError::config(format!(
            "Teleport chain needs at least {MIN_TELEPORT_QUBITS} qubits, got {n}"
        )));
    }
    if n % 2 == 0 {
        return Err(SynthError::config(format!(
            "Teleport chain length must be odd, got {n}"
        )));
    }
    Ok(())
}

/// A range of teleportation chain lengths, stepping over odd lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleportSweep {
    /// Shortest chain, inclusive.
    pub min_qubits: u32,
    /// Longest chain, inclusive.
    pub max_qubits: u32,
    /// Insert barriers between the entangling stages.
    pub barriers: bool,
}

impl Default for TeleportSweep {
    fn default() -> Self {
        Self {
            min_qubits: MIN_TELEPORT_QUBITS,
            max_qubits: 41,
            barriers: true,
        }
    }
}

impl TeleportSweep {
    /// Sweep every odd length in `min..=max`.
    pub fn new(min_qubits: u32, max_qubits: u32) -> Self {
        Self {
            min_qubits,
            max_qubits,
            ..Self::default()
        }
    }

    /// Enable or disable stage barriers.
    #[must_use]
    pub fn with_barriers(mut self, enabled: bool) -> Self {
        self.barriers = enabled;
        self
    }

    /// Chain lengths in the sweep, ascending.
    pub fn lengths(&self) -> StepBy<RangeInclusive<u32>> {
        (self.min_qubits..=self.max_qubits).step_by(2)
    }

    /// The single-chain config for one length of the sweep.
    pub fn chain(&self, num_qubits: u32) -> TeleportConfig {
        TeleportConfig::new(num_qubits).with_barriers(self.barriers)
    }

    /// Check the config before anything is built.
    pub fn validate(&self) -> SynthResult<()> {
        validate_chain_length(self.min_qubits)?;
        if self.max_qubits < self.min_qubits {
            return Err(SynthError::config(format!(
                "Sweep upper bound {} is below lower bound {}",
                self.max_qubits, self.min_qubits
            )));
        }
        Ok(())
    }
}

/// GHZ coherence chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhzConfig {
    /// Chain length.
    pub num_qubits: u32,
}

impl Default for GhzConfig {
    fn default() -> Self {
        Self { num_qubits: 100 }
    }
}

impl GhzConfig {
    /// Create a config for a chain of `num_qubits`.
    pub fn new(num_qubits: u32) -> Self {
        Self { num_qubits }
    }

    /// Check the config before anything is built.
    pub fn validate(&self) -> SynthResult<()> {
        if self.num_qubits < 2 {
            return Err(SynthError::config(format!(
                "GHZ chain needs at least 2 qubits, got {}",
                self.num_qubits
            )));
        }
        Ok(())
    }
}

/// An experiment description as loaded from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "experiment", rename_all = "snake_case")]
pub enum ExperimentConfig {
    /// Mirrored Trotter family.
    Trotter(TrotterConfig),
    /// Teleportation chains over a range of lengths.
    Teleport(TeleportSweep),
    /// GHZ coherence chain.
    Ghz(GhzConfig),
}

impl ExperimentConfig {
    /// Check the wrapped config.
    pub fn validate(&self) -> SynthResult<()> {
        match self {
            ExperimentConfig::Trotter(c) => c.validate(),
            ExperimentConfig::Teleport(c) => c.validate(),
            ExperimentConfig::Ghz(c) => c.validate(),
        }
    }

    /// Short experiment name.
    pub fn name(&self) -> &'static str {
        match self {
            ExperimentConfig::Trotter(_) => "trotter",
            ExperimentConfig::Teleport(_) => "teleport",
            ExperimentConfig::Ghz(_) => "ghz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trotter_config_is_valid() {
        let config = TrotterConfig::default();
        config.validate().unwrap();
        assert_eq!(config.measured_qubits, vec![49, 50]);
        assert_eq!(config.rx_angle.as_f64(), Some(FRAC_PI_2));
    }

    #[test]
    fn test_new_measures_middle_pair() {
        assert_eq!(TrotterConfig::new(10, 3).measured_qubits, vec![4, 5]);
        assert_eq!(TrotterConfig::new(1, 3).measured_qubits, vec![0]);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let config = TrotterConfig::new(4, 0);
        assert!(matches!(
            config.validate(),
            Err(SynthError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_measurement_set_rejected() {
        let config = TrotterConfig::new(4, 2).with_measured_qubits([]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_measured_qubit_checks() {
        assert!(
            TrotterConfig::new(4, 1)
                .with_measured_qubits([1, 4])
                .validate()
                .is_err()
        );
        assert!(
            TrotterConfig::new(4, 1)
                .with_measured_qubits([2, 2])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let config = TrotterConfig::new(4, 1).with_angle(f64::NAN);
        assert!(config.validate().is_err());
        let symbolic = TrotterConfig::new(4, 1).with_angle(ParameterExpression::symbol("theta"));
        symbolic.validate().unwrap();
    }

    #[test]
    fn test_teleport_lengths() {
        assert!(TeleportConfig::new(7).validate().is_ok());
        assert!(TeleportConfig::new(5).validate().is_err());
        assert!(TeleportConfig::new(8).validate().is_err());
    }

    #[test]
    fn test_sweep_lengths() {
        let sweep = TeleportSweep::new(7, 13);
        sweep.validate().unwrap();
        assert_eq!(sweep.lengths().collect::<Vec<_>>(), vec![7, 9, 11, 13]);
        assert_eq!(TeleportSweep::default().lengths().count(), 18);
        assert!(TeleportSweep::new(9, 7).validate().is_err());
        assert!(TeleportSweep::new(6, 12).validate().is_err());
    }

    #[test]
    fn test_ghz_minimum() {
        assert!(GhzConfig::new(1).validate().is_err());
        assert!(GhzConfig::new(2).validate().is_ok());
    }

    #[test]
    fn test_experiment_from_json() {
        let json = r#"{"experiment": "trotter", "num_qubits": 6, "steps": 2, "rx_angle": {"Constant": 0.25}}"#;
        let config: ExperimentConfig = serde_json::from_str(json).unwrap();
        match &config {
            ExperimentConfig::Trotter(c) => {
                assert_eq!(c.num_qubits, 6);
                assert_eq!(c.steps, 2);
                assert_eq!(c.rx_angle.as_f64(), Some(0.25));
                assert!(c.layer_barriers);
            }
            other => panic!("Expected trotter, got {other:?}"),
        }
        assert_eq!(config.name(), "trotter");
    }

    #[test]
    fn test_experiment_from_yaml() {
        let yaml = "experiment: teleport\nmin_qubits: 7\nmax_qubits: 11\nbarriers: false\n";
        let config: ExperimentConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config,
            ExperimentConfig::Teleport(TeleportSweep::new(7, 11).with_barriers(false))
        );
        config.validate().unwrap();
    }
}
