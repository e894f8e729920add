//! Core types for the blochvis single-qubit visualization engine
//!
//! This crate provides the fundamental pieces shared by the rest of the
//! workspace:
//! - [`StandardGate`]: the fixed single-qubit gate catalog
//! - [`BlochVector`]: Bloch-sphere projection of an amplitude pair
//! - [`GateError`]: the engine's single error condition
//!
//! # Example
//! ```
//! use blochvis_core::{BlochVector, StandardGate};
//! use num_complex::Complex64;
//!
//! let gate: StandardGate = "X".parse().unwrap();
//! let matrix = gate.matrix();
//!
//! let zero = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//! let bloch = BlochVector::from_state(&zero);
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//! ```

pub mod bloch;
pub mod error;
pub mod gate;
pub mod matrices;

// Re-exports for convenience
pub use bloch::{BlochAngles, BlochVector};
pub use error::{GateError, Result};
pub use gate::StandardGate;
pub use num_complex::Complex64;
