//! Bloch projection demo
//!
//! Shows where the common single-qubit states land on the sphere.
//!
//! Run with: cargo run --example projection_demo -p blochvis-core

use blochvis_core::{BlochVector, Complex64};

fn main() {
    let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;

    let states: [(&str, [Complex64; 2]); 4] = [
        (
            "|0⟩",
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        ),
        (
            "|1⟩",
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        ),
        (
            "(|0⟩ + |1⟩)/√2",
            [Complex64::new(inv_sqrt2, 0.0), Complex64::new(inv_sqrt2, 0.0)],
        ),
        (
            "(|0⟩ + i|1⟩)/√2",
            [Complex64::new(inv_sqrt2, 0.0), Complex64::new(0.0, inv_sqrt2)],
        ),
    ];

    for (label, state) in states {
        let bloch = BlochVector::from_state(&state);
        println!("{}:", label);
        println!("{}", bloch.describe());
    }
}
