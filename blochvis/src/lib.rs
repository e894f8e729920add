//! blochvis: single-qubit state evolution and Bloch-sphere projection
//!
//! This facade crate ties the workspace together for consumers:
//! - [`VisualizerEngine`]: the external interface a GUI shell drives
//! - [`Command`]: the fixed wire vocabulary (`X, Y, Z, H, S, T, I, RESET`)
//! - Re-exports of the core types and the frame interpolator
//!
//! The engine maintains one qubit, applies gates from a fixed unitary
//! catalog, projects the amplitude pair to a real 3-vector on the Bloch
//! sphere, and generates interpolated frame sequences so a renderer can
//! animate transitions. Rendering, timing, and event wiring are external
//! collaborators; the engine is synchronous and does no I/O.
//!
//! # Example
//!
//! ```
//! use blochvis::{Command, VisualizerEngine};
//!
//! let mut engine = VisualizerEngine::new();
//! engine.initialize();
//!
//! // Drive the engine the way a gate panel would
//! let command: Command = "H".parse().unwrap();
//! let vector = engine.dispatch(command);
//! assert!((vector.x - 1.0).abs() < 1e-10);
//!
//! // Hand the renderer a frame sequence for the transition
//! for frame in engine.transition(blochvis::DEFAULT_STEPS) {
//!     let _ = (frame.x, frame.y, frame.z);
//! }
//! ```

pub mod command;
pub mod engine;

pub use blochvis_anim::{frames_vec, interpolate, Frames, DEFAULT_STEPS};
pub use blochvis_core::{BlochAngles, BlochVector, Complex64, GateError, StandardGate};
pub use blochvis_state::QubitState;
pub use command::Command;
pub use engine::VisualizerEngine;
