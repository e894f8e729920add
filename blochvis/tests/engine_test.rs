//! End-to-end tests for the visualization engine

use approx::assert_relative_eq;
use blochvis::{Command, GateError, StandardGate, VisualizerEngine};

const EPSILON: f64 = 1e-9;

#[test]
fn test_initialize_points_north() {
    let mut engine = VisualizerEngine::new();
    let v = engine.initialize();
    assert_relative_eq!(v.x, 0.0, epsilon = EPSILON);
    assert_relative_eq!(v.y, 0.0, epsilon = EPSILON);
    assert_relative_eq!(v.z, 1.0, epsilon = EPSILON);
}

#[test]
fn test_known_gate_values_from_zero() {
    // (gate, expected bloch vector) from the |0⟩ state
    let cases = [
        ("X", (0.0, 0.0, -1.0)),
        ("Y", (0.0, 0.0, -1.0)),
        ("Z", (0.0, 0.0, 1.0)),
        ("H", (1.0, 0.0, 0.0)),
        ("I", (0.0, 0.0, 1.0)),
    ];
    for (name, (x, y, z)) in cases {
        let mut engine = VisualizerEngine::new();
        engine.reset();
        let v = engine.apply_gate(name).unwrap();
        assert_relative_eq!(v.x, x, epsilon = EPSILON);
        assert_relative_eq!(v.y, y, epsilon = EPSILON);
        assert_relative_eq!(v.z, z, epsilon = EPSILON);
    }
}

#[test]
fn test_s_and_t_rotate_the_equator() {
    // H takes |0⟩ to |+⟩; S then walks the equator by 90°, T by 45°
    // (toward −y under the α·β* projection convention).
    let mut engine = VisualizerEngine::new();
    engine.apply_gate("H").unwrap();
    let v = engine.apply_gate("S").unwrap();
    assert_relative_eq!(v.x, 0.0, epsilon = EPSILON);
    assert_relative_eq!(v.y, -1.0, epsilon = EPSILON);

    let mut engine = VisualizerEngine::new();
    engine.apply_gate("H").unwrap();
    let v = engine.apply_gate("T").unwrap();
    let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(v.x, inv_sqrt2, epsilon = EPSILON);
    assert_relative_eq!(v.y, -inv_sqrt2, epsilon = EPSILON);
}

#[test]
fn test_every_gate_keeps_the_state_on_the_sphere() {
    let mut engine = VisualizerEngine::new();
    engine.initialize();
    // A long, varied walk around the sphere
    for name in ["H", "T", "X", "S", "Y", "H", "Z", "T", "S", "H"] {
        let v = engine.apply_gate(name).unwrap();
        assert!(v.is_pure(EPSILON), "left the sphere after {}", name);
    }
}

#[test]
fn test_unknown_gate_is_surfaced_and_state_unchanged() {
    let mut engine = VisualizerEngine::new();
    engine.initialize();
    engine.apply_gate("H").unwrap();
    let before = engine.current();

    let err = engine.apply_gate("Q").unwrap_err();
    assert_eq!(err, GateError::UnknownGate("Q".to_string()));

    let after = engine.current();
    assert_relative_eq!(before.x, after.x, epsilon = EPSILON);
    assert_relative_eq!(before.y, after.y, epsilon = EPSILON);
    assert_relative_eq!(before.z, after.z, epsilon = EPSILON);
}

#[test]
fn test_reset_idempotent_regardless_of_history() {
    let mut engine = VisualizerEngine::new();
    for name in ["H", "T", "Y"] {
        engine.apply_gate(name).unwrap();
    }
    for _ in 0..3 {
        let v = engine.reset();
        assert_relative_eq!(v.z, 1.0, epsilon = EPSILON);
        assert_relative_eq!(v.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(v.y, 0.0, epsilon = EPSILON);
    }
}

#[test]
fn test_non_commuting_gates_produce_different_vectors() {
    // H and X do not commute: X then H lands on |−⟩, H then X on |+⟩.
    let mut engine = VisualizerEngine::new();
    engine.reset();
    engine.apply_gate("X").unwrap();
    let xh = engine.apply_gate("H").unwrap();

    engine.reset();
    engine.apply_gate("H").unwrap();
    let hx = engine.apply_gate("X").unwrap();

    assert_relative_eq!(xh.x, -1.0, epsilon = EPSILON);
    assert_relative_eq!(hx.x, 1.0, epsilon = EPSILON);
}

#[test]
fn test_wire_commands_drive_the_engine() {
    let mut engine = VisualizerEngine::new();
    engine.initialize();

    let v = engine.dispatch("X".parse::<Command>().unwrap());
    assert_relative_eq!(v.z, -1.0, epsilon = EPSILON);

    let v = engine.dispatch("RESET".parse::<Command>().unwrap());
    assert_relative_eq!(v.z, 1.0, epsilon = EPSILON);

    assert_eq!(
        "q".parse::<Command>().unwrap_err(),
        GateError::UnknownGate("q".to_string())
    );
}

#[test]
fn test_transition_bridges_displayed_to_current() {
    let mut engine = VisualizerEngine::new();
    let start = engine.initialize();
    let end = engine.apply_gate("X").unwrap();

    let frames: Vec<_> = engine.transition(10).collect();
    assert_eq!(frames.len(), 11);
    assert_eq!(frames[0], start);
    assert_eq!(frames[10], end);

    // Midpoint of the antipodal chord is the sphere center.
    assert_relative_eq!(frames[5].magnitude(), 0.0, epsilon = EPSILON);

    // A second transition with no state change holds position.
    let frames: Vec<_> = engine.transition(4).collect();
    assert_eq!(frames.len(), 5);
    for frame in frames {
        assert_eq!(frame, end);
    }
}

#[test]
fn test_transition_before_any_display_holds_current() {
    let mut engine = VisualizerEngine::new();
    let frames: Vec<_> = engine.transition(3).collect();
    assert_eq!(frames.len(), 4);
    for frame in frames {
        assert_relative_eq!(frame.z, 1.0, epsilon = EPSILON);
    }
}

#[test]
fn test_direct_gate_application() {
    let mut engine = VisualizerEngine::new();
    engine.initialize();
    let v = engine.apply(StandardGate::H);
    assert_relative_eq!(v.x, 1.0, epsilon = EPSILON);
    assert!(engine.qubit().is_normalized(EPSILON));
}
