//! The wire vocabulary accepted from a UI layer
//!
//! The entire contract with any presentation layer is the fixed identifier
//! set `X, Y, Z, H, S, T, I, RESET`. Everything else fails with
//! [`GateError::UnknownGate`].

use blochvis_core::{GateError, StandardGate};
use std::str::FromStr;

/// A parsed control action from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply a catalog gate
    Gate(StandardGate),
    /// Return to |0⟩
    Reset,
}

impl FromStr for Command {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "RESET" {
            Ok(Command::Reset)
        } else {
            s.parse().map(Command::Gate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_command() {
        assert_eq!("RESET".parse::<Command>().unwrap(), Command::Reset);
    }

    #[test]
    fn test_gate_commands() {
        for gate in StandardGate::ALL {
            let cmd: Command = gate.name().parse().unwrap();
            assert_eq!(cmd, Command::Gate(gate));
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        let err = "MEASURE".parse::<Command>().unwrap_err();
        assert_eq!(err, GateError::UnknownGate("MEASURE".to_string()));
        // Vocabulary is case-sensitive
        assert!("reset".parse::<Command>().is_err());
    }
}
