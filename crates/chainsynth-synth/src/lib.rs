//! Chainsynth Circuit Synthesis
//!
//! Builders for the chain experiments. Each takes an explicit, validated
//! configuration and returns owned circuits; nothing is shared between
//! builds.
//!
//! # Overview
//!
//! - **Interactions**: [`interaction::forward`] and [`interaction::mirror`],
//!   the ZZ-type pair interaction and its exact inverse
//! - **Trotter layers**: [`add_trotter_layer`] and
//!   [`add_mirrored_trotter_layer`], brick-wall layers over a 1D chain
//! - **Trotter families**: [`tfim_family`], one echo circuit per step
//! - **Teleportation**: [`teleport_chain`] and [`teleport_sweep`], with
//!   parity-guarded corrections from [`ParityConditions`]
//! - **Coherence**: [`ghz_chain`]
//!
//! # Architecture
//!
//! ```text
//! TrotterConfig ──► tfim_family ──► add_trotter_layer ─────────┐
//!                                   add_mirrored_trotter_layer ┴─► forward / mirror
//!
//! TeleportConfig ─► teleport_chain ─► ParityConditions::fold / apply
//! TeleportSweep ──► teleport_sweep (rayon) ─► teleport_chain
//! ```
//!
//! # Example: Echo Family
//!
//! ```rust
//! use chainsynth_synth::{TrotterConfig, tfim_family};
//!
//! let config = TrotterConfig::new(6, 3)
//!     .with_angle(std::f64::consts::FRAC_PI_2)
//!     .with_barriers(false);
//! let family = tfim_family(&config).unwrap();
//!
//! assert_eq!(family.len(), 3);
//! // Four CX layers per forward+mirror step.
//! assert_eq!(family.get(2).unwrap().two_qubit_depth(), 12);
//! ```
//!
//! # Example: Teleportation Chain
//!
//! ```rust
//! use chainsynth_synth::{TeleportConfig, teleport_chain};
//!
//! let circuit = teleport_chain(&TeleportConfig::new(7)).unwrap();
//! assert_eq!(circuit.num_clbits(), 7);
//! ```

pub mod coherence;
pub mod config;
pub mod error;
pub mod family;
pub mod interaction;
pub mod parity;
pub mod teleport;
pub mod tfim;
pub mod trotter;

pub use coherence::ghz_chain;
pub use config::{
    ExperimentConfig, GhzConfig, MIN_TELEPORT_QUBITS, TeleportConfig, TeleportSweep,
    TrotterConfig,
};
pub use error::{SynthError, SynthResult};
pub use family::CircuitFamily;
pub use parity::ParityConditions;
pub use teleport::{TeleportLayout, teleport_chain, teleport_sweep};
pub use tfim::{Parity, add_mirrored_trotter_layer, add_trotter_layer, pair_starts};
pub use trotter::tfim_family;
