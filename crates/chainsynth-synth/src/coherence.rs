//! GHZ chain for probing spin coherence over distance.

use chainsynth_ir::{Circuit, QubitId};
use tracing::debug;

use crate::config::GhzConfig;
use crate::error::SynthResult;

/// Build an `N`-qubit GHZ state by a CX ladder and measure every qubit.
///
/// Qubit `i` is measured into bit `i` of register `c`, so ZZ correlators
/// between qubit 0 and qubit `i` can be read off the counts.
pub fn ghz_chain(config: &GhzConfig) -> SynthResult<Circuit> {
    config.validate()?;
    let n = config.num_qubits;

    let mut circuit = Circuit::new(format!("ghz_{n}"), n);
    let c = circuit.add_creg("c", n)?;

    circuit.h(QubitId(0))?;
    for q in 0..n - 1 {
        circuit.cx(QubitId(q), QubitId(q + 1))?;
    }
    for (q, &bit) in (0..n).zip(&c.bits) {
        circuit.measure(QubitId(q), bit)?;
    }

    debug!(num_qubits = n, depth = circuit.depth(), "Built GHZ chain");
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghz_ladder() {
        let circuit = ghz_chain(&GhzConfig::new(5)).unwrap();
        assert_eq!(circuit.two_qubit_gate_count(), 4);
        assert_eq!(circuit.count_ops().get("measure"), Some(&5));
        assert_eq!(circuit.num_clbits(), 5);
        // h, 4 sequential cx, measures in parallel
        assert_eq!(circuit.depth(), 6);
    }

    #[test]
    fn test_ghz_too_short() {
        assert!(ghz_chain(&GhzConfig::new(1)).is_err());
    }
}
