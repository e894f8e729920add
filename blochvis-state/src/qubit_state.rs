//! The mutable single-qubit state cell
//!
//! [`QubitState`] owns the amplitude pair `(α, β)` and is the only mutable
//! resource in the engine. Gates evolve it by left-multiplication; reads go
//! through the non-mutating [`QubitState::projection`] path. The type is not
//! shared across threads by the engine; a concurrent caller must wrap it in
//! an exclusive-access cell because [`QubitState::apply`] read-modify-writes
//! the pair non-atomically.

use blochvis_core::{BlochVector, GateError, StandardGate};
use num_complex::Complex64;

/// Tolerance below which the amplitude norm is treated as zero
const NORM_EPSILON: f64 = 1e-10;

/// A single qubit's quantum state
///
/// # Example
///
/// ```
/// use blochvis_state::QubitState;
/// use blochvis_core::StandardGate;
///
/// let mut qubit = QubitState::new();
/// let bloch = qubit.apply(StandardGate::X);
/// assert!((bloch.z + 1.0).abs() < 1e-10); // X|0⟩ = |1⟩, south pole
/// ```
#[derive(Clone, Debug)]
pub struct QubitState {
    /// Coefficients of |0⟩ and |1⟩, kept unit-norm
    amplitudes: [Complex64; 2],
}

impl QubitState {
    /// Create a qubit in the |0⟩ state
    pub fn new() -> Self {
        Self {
            amplitudes: [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        }
    }

    /// Apply a gate from the catalog and return the new projection
    ///
    /// Computes `(α', β') = M · (α, β)`. Applying gate `A` and then gate `B`
    /// therefore evolves the state to `B·A|ψ⟩`, the strict left-multiplication
    /// composition order.
    pub fn apply(&mut self, gate: StandardGate) -> BlochVector {
        let m = gate.matrix();
        let [alpha, beta] = self.amplitudes;

        self.amplitudes = [
            m[0][0] * alpha + m[0][1] * beta,
            m[1][0] * alpha + m[1][1] * beta,
        ];

        // Unitary matrices preserve the norm exactly in real arithmetic;
        // renormalize after each application so float drift cannot accumulate
        // over long gate sequences.
        self.renormalize();

        self.projection()
    }

    /// Resolve a gate identifier and apply it
    ///
    /// The identifier is parsed before the state is touched, so an unknown
    /// gate leaves the qubit exactly as it was.
    pub fn apply_named(&mut self, name: &str) -> Result<BlochVector, GateError> {
        let gate: StandardGate = name.parse()?;
        Ok(self.apply(gate))
    }

    /// Unconditionally return to the |0⟩ state and project it
    pub fn reset(&mut self) -> BlochVector {
        self.amplitudes = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        self.projection()
    }

    /// Project the current state without mutating it
    pub fn projection(&self) -> BlochVector {
        BlochVector::from_state(&self.amplitudes)
    }

    /// The current amplitude pair `[α, β]`
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64; 2] {
        &self.amplitudes
    }

    /// L2 norm of the amplitude pair
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Whether |α|² + |β|² is within `epsilon` of 1
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    fn renormalize(&mut self) {
        let norm = self.norm();
        if norm > NORM_EPSILON {
            let inv = 1.0 / norm;
            for amp in &mut self.amplitudes {
                *amp *= inv;
            }
        }
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::new()
    }
}
