//! The gate alphabet of the chain experiments.
//!
//! Everything the builders emit is one of nine gates: the Clifford pieces of
//! the ZZ interaction (`s`, `sdg`, `sy`, `sydg`, `cx`), the field rotation
//! `rx`, and the GHZ and teleportation corrections (`h`, `x`, `z`).

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Bit flip.
    X,
    /// Phase flip.
    Z,
    H,
    /// Quarter turn about Z.
    S,
    Sdg,
    /// Square root of Y, `e^{iπ/4}·ry(π/2)`. Squares to Y exactly.
    SY,
    SYdg,
    /// Rotation about X by the given angle.
    Rx(ParameterExpression),
    /// Controlled X, control first.
    CX,
}

impl StandardGate {
    /// Lowercase mnemonic, as used in QASM and in op counts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Z => "z",
            Self::H => "h",
            Self::S => "s",
            Self::Sdg => "sdg",
            Self::SY => "sy",
            Self::SYdg => "sydg",
            Self::Rx(_) => "rx",
            Self::CX => "cx",
        }
    }

    /// Arity of the gate.
    pub fn num_qubits(&self) -> u32 {
        if matches!(self, Self::CX) { 2 } else { 1 }
    }

    /// The gate that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::S => Self::Sdg,
            Self::Sdg => Self::S,
            Self::SY => Self::SYdg,
            Self::SYdg => Self::SY,
            Self::Rx(theta) => Self::Rx(theta.negated()),
            Self::X | Self::Z | Self::H | Self::CX => self.clone(),
        }
    }

    /// Rotation angle, for `rx`.
    pub fn angle(&self) -> Option<&ParameterExpression> {
        match self {
            Self::Rx(theta) => Some(theta),
            _ => None,
        }
    }

    /// Whether the angle is only known once a symbol is bound.
    pub fn is_parameterized(&self) -> bool {
        self.angle().is_some_and(ParameterExpression::is_symbolic)
    }
}

/// A gate as placed in a circuit, with an optional display label.
///
/// The half-Y gates carry `√Y` / `√Y†` so drawings match the usual notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub kind: StandardGate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    pub fn standard(kind: StandardGate) -> Self {
        Self { kind, label: None }
    }

    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(kind: StandardGate) -> Self {
        Self::standard(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_arity_and_parameters() {
        assert_eq!(StandardGate::SY.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);

        assert_eq!(StandardGate::H.angle(), None);
        assert!(!StandardGate::Rx(ParameterExpression::constant(PI)).is_parameterized());
        assert!(StandardGate::Rx(ParameterExpression::symbol("theta")).is_parameterized());
    }

    #[test]
    fn test_inverse_pairs() {
        assert_eq!(StandardGate::S.inverse(), StandardGate::Sdg);
        assert_eq!(StandardGate::SYdg.inverse(), StandardGate::SY);
        assert_eq!(StandardGate::CX.inverse(), StandardGate::CX);
        assert_eq!(
            StandardGate::Rx(ParameterExpression::constant(0.3)).inverse(),
            StandardGate::Rx(ParameterExpression::constant(-0.3))
        );
    }

    #[test]
    fn test_half_y_label() {
        let sy = Gate::from(StandardGate::SY).with_label("√Y");
        assert_eq!(sy.name(), "sy");
        assert_eq!(sy.label.as_deref(), Some("√Y"));
    }

    #[test]
    fn test_serde() {
        let gate = Gate::from(StandardGate::Rx(ParameterExpression::symbol("theta")));
        let json = serde_json::to_string(&gate).unwrap();
        let back: Gate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gate);
        assert_eq!(back.kind.angle(), Some(&ParameterExpression::symbol("theta")));
    }
}
