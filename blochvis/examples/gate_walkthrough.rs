//! Gate application walkthrough
//!
//! Drives the engine the way a gate panel would: applies each catalog gate,
//! prints the resulting Bloch vector, and shows the frame sequence a renderer
//! would consume for one transition.
//!
//! Run with: cargo run --example gate_walkthrough -p blochvis

use blochvis::{StandardGate, VisualizerEngine, DEFAULT_STEPS};

fn main() {
    let mut engine = VisualizerEngine::new();

    println!("=== Single-Qubit Bloch Walkthrough ===\n");

    let initial = engine.initialize();
    println!("Initial state |0⟩: {}", initial);

    println!("\n1. One gate at a time from |0⟩:");
    for gate in StandardGate::ALL {
        engine.reset();
        let v = engine.apply(gate);
        let label = match v.special_state() {
            Some(name) => format!("  -> {}", name),
            None => String::new(),
        };
        println!("  {:<2} ({:<14}) {}{}", gate, gate.description(), v, label);
    }

    println!("\n2. A composed sequence (order matters):");
    engine.reset();
    for name in ["H", "S", "H", "T"] {
        match engine.apply_gate(name) {
            Ok(v) => println!("  after {}: {}", name, v),
            Err(e) => println!("  {}", e),
        }
    }

    println!("\n3. Unknown identifiers are rejected without touching state:");
    if let Err(e) = engine.apply_gate("Q") {
        println!("  {}", e);
    }
    println!("  state still: {}", engine.current());

    println!("\n4. Transition frames for the renderer (|0⟩ -> X -> |1⟩):");
    engine.initialize();
    engine.apply_gate("X").unwrap();
    for (k, frame) in engine.transition(DEFAULT_STEPS).enumerate() {
        println!("  frame {:>2}: {}  |r| = {:.3}", k, frame, frame.magnitude());
    }
}
