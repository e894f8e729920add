//! Error types for the visualization engine

use thiserror::Error;

/// Errors that can occur when resolving gate identifiers
///
/// The catalog is fixed, so an unknown identifier is the only failure mode
/// in the engine core. The offending identifier is carried verbatim so a UI
/// layer can report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    /// Identifier outside the fixed gate catalog
    #[error("gate '{0}' not recognized")]
    UnknownGate(String),
}

/// Result type for gate resolution
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_gate_message_carries_identifier() {
        let err = GateError::UnknownGate("Q".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("'Q'"));
        assert!(msg.contains("not recognized"));
    }
}
