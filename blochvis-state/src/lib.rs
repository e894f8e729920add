//! Qubit state ownership and evolution for blochvis
//!
//! This crate provides [`QubitState`], the single mutable cell in the
//! engine: it owns the `(α, β)` amplitude pair, evolves it by gate
//! application, and exposes a non-mutating projection path for display.

pub mod qubit_state;

pub use qubit_state::QubitState;
