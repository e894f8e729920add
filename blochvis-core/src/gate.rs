//! The fixed single-qubit gate catalog
//!
//! The catalog is a closed enumeration: every variant maps exhaustively to a
//! pre-computed constant matrix in [`crate::matrices`], and parsing rejects
//! anything outside the fixed vocabulary with [`GateError::UnknownGate`].

use crate::error::GateError;
use crate::matrices;
use num_complex::Complex64;
use std::fmt;
use std::str::FromStr;

/// A gate from the fixed single-qubit catalog
///
/// # Example
/// ```
/// use blochvis_core::StandardGate;
///
/// let gate: StandardGate = "H".parse().unwrap();
/// assert_eq!(gate, StandardGate::H);
/// assert!("Q".parse::<StandardGate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardGate {
    /// Identity (do nothing)
    I,
    /// Pauli-X (bit flip, NOT)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard
    H,
    /// S gate (phase gate, √Z)
    S,
    /// T gate (π/8 gate, √S)
    T,
}

impl StandardGate {
    /// Every gate in the catalog, in display order
    pub const ALL: [StandardGate; 7] = [
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::H,
        StandardGate::S,
        StandardGate::T,
        StandardGate::I,
    ];

    /// The 2x2 unitary matrix for this gate
    #[inline]
    pub const fn matrix(&self) -> &'static [[Complex64; 2]; 2] {
        match self {
            StandardGate::I => &matrices::IDENTITY,
            StandardGate::X => &matrices::PAULI_X,
            StandardGate::Y => &matrices::PAULI_Y,
            StandardGate::Z => &matrices::PAULI_Z,
            StandardGate::H => &matrices::HADAMARD,
            StandardGate::S => &matrices::S_GATE,
            StandardGate::T => &matrices::T_GATE,
        }
    }

    /// Short identifier, matching the wire vocabulary
    pub const fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::H => "H",
            StandardGate::S => "S",
            StandardGate::T => "T",
        }
    }

    /// Human-readable label for display panels
    pub const fn description(&self) -> &'static str {
        match self {
            StandardGate::I => "Identity",
            StandardGate::X => "Pauli-X (NOT)",
            StandardGate::Y => "Pauli-Y",
            StandardGate::Z => "Pauli-Z",
            StandardGate::H => "Hadamard",
            StandardGate::S => "Phase Gate",
            StandardGate::T => "T Gate",
        }
    }
}

impl FromStr for StandardGate {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(StandardGate::I),
            "X" => Ok(StandardGate::X),
            "Y" => Ok(StandardGate::Y),
            "Z" => Ok(StandardGate::Z),
            "H" => Ok(StandardGate::H),
            "S" => Ok(StandardGate::S),
            "T" => Ok(StandardGate::T),
            other => Err(GateError::UnknownGate(other.to_string())),
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_gate() {
        for gate in StandardGate::ALL {
            let parsed: StandardGate = gate.name().parse().unwrap();
            assert_eq!(parsed, gate);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = "Q".parse::<StandardGate>().unwrap_err();
        assert_eq!(err, GateError::UnknownGate("Q".to_string()));
        // Lowercase is not part of the vocabulary
        assert!("x".parse::<StandardGate>().is_err());
        assert!("".parse::<StandardGate>().is_err());
    }

    #[test]
    fn test_catalog_matrices_are_unitary() {
        for gate in StandardGate::ALL {
            let m = gate.matrix();
            // U†U = I, entry by entry
            for i in 0..2 {
                for j in 0..2 {
                    let mut entry = Complex64::new(0.0, 0.0);
                    for k in 0..2 {
                        entry += m[k][i].conj() * m[k][j];
                    }
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!(
                        (entry.re - expected).abs() < 1e-10 && entry.im.abs() < 1e-10,
                        "{} is not unitary",
                        gate
                    );
                }
            }
        }
    }
}
