//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod generate;
pub mod ghz;
pub mod teleport;
pub mod trotter;
pub mod version;
