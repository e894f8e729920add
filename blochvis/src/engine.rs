//! The visualization engine facade
//!
//! [`VisualizerEngine`] is the surface a presentation layer talks to: it owns
//! the qubit, resolves incoming gate identifiers, and tracks the vector
//! currently on display so it can hand back an interpolated transition. The
//! engine is synchronous; every call runs to completion before returning.

use crate::command::Command;
use blochvis_anim::{interpolate, Frames};
use blochvis_core::{BlochVector, GateError, StandardGate};
use blochvis_state::QubitState;

/// Engine state shared with a presentation layer
///
/// # Example
///
/// ```
/// use blochvis::VisualizerEngine;
///
/// let mut engine = VisualizerEngine::new();
/// let initial = engine.initialize();
/// assert!((initial.z - 1.0).abs() < 1e-10); // |0⟩, north pole
///
/// let after_h = engine.apply_gate("H").unwrap();
/// assert!((after_h.x - 1.0).abs() < 1e-10); // |+⟩, +x axis
///
/// let frames: Vec<_> = engine.transition(20).collect();
/// assert_eq!(frames.len(), 21);
/// ```
#[derive(Debug, Default)]
pub struct VisualizerEngine {
    qubit: QubitState,
    /// The vector most recently handed to the display; transitions start here
    displayed: Option<BlochVector>,
}

impl VisualizerEngine {
    /// Create an engine with the qubit in |0⟩; nothing is displayed yet
    pub fn new() -> Self {
        Self {
            qubit: QubitState::new(),
            displayed: None,
        }
    }

    /// Set up the initial display: reset to |0⟩, mark it displayed, and
    /// return its projection
    ///
    /// This is the only state change that moves the displayed vector without
    /// going through [`VisualizerEngine::transition`]; startup shows |0⟩
    /// directly, with no animation.
    pub fn initialize(&mut self) -> BlochVector {
        let vector = self.qubit.reset();
        self.displayed = Some(vector);
        vector
    }

    /// Apply a gate by identifier and return the new projection
    ///
    /// Fails with [`GateError::UnknownGate`] for identifiers outside the
    /// catalog; the qubit is untouched on failure. The displayed vector does
    /// not advance until the caller consumes a transition.
    pub fn apply_gate(&mut self, identifier: &str) -> Result<BlochVector, GateError> {
        self.qubit.apply_named(identifier)
    }

    /// Apply a catalog gate directly; never fails
    pub fn apply(&mut self, gate: StandardGate) -> BlochVector {
        self.qubit.apply(gate)
    }

    /// Reset the qubit to |0⟩ and return its projection
    pub fn reset(&mut self) -> BlochVector {
        self.qubit.reset()
    }

    /// Execute a parsed wire command
    pub fn dispatch(&mut self, command: Command) -> BlochVector {
        match command {
            Command::Gate(gate) => self.apply(gate),
            Command::Reset => self.reset(),
        }
    }

    /// Current projection, without mutating the qubit
    pub fn current(&self) -> BlochVector {
        self.qubit.projection()
    }

    /// Read access to the underlying qubit
    pub fn qubit(&self) -> &QubitState {
        &self.qubit
    }

    /// Frames bridging the previously displayed vector to the current one
    ///
    /// Before anything has been displayed, the transition starts at the
    /// current projection itself and holds position. The caller owns delivery
    /// timing; this is purely the mathematical sequence.
    pub fn transition(&mut self, steps: usize) -> Frames {
        let target = self.qubit.projection();
        let start = self.displayed.unwrap_or(target);
        self.displayed = Some(target);
        interpolate(start, target, steps)
    }
}
