//! Bloch-sphere projection of single-qubit states
//!
//! Any pure single-qubit state |ψ⟩ = α|0⟩ + β|1⟩ maps to a point on the unit
//! sphere via the Pauli expectation values. The projection here is a total
//! function: a non-normalized amplitude pair yields a mathematically
//! consistent off-sphere vector rather than an error, so callers are
//! responsible for supplying normalized state.
//!
//! # Example
//!
//! ```
//! use blochvis_core::BlochVector;
//! use num_complex::Complex64;
//!
//! // |0⟩ points to the north pole
//! let state = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//! let bloch = BlochVector::from_state(&state);
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//! ```

use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// A point on (or, mid-animation, inside) the Bloch sphere
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlochVector {
    /// X coordinate: +x is |+⟩, -x is |−⟩
    pub x: f64,
    /// Y coordinate: under this projection +y is |−i⟩, -y is |+i⟩
    pub y: f64,
    /// Z coordinate: +z is |0⟩, -z is |1⟩
    pub z: f64,
}

/// Spherical coordinates on the Bloch sphere
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project an amplitude pair `[α, β]` onto the Bloch sphere
    ///
    /// x = 2·Re(α·β*), y = 2·Im(α·β*), z = |α|² − |β|².
    /// For any unit-norm input the result lies on the unit sphere within
    /// floating-point tolerance. Note the y component uses α·β*, which
    /// mirrors the y axis relative to the ⟨σ_y⟩ = 2·Im(α*·β) convention:
    /// (|0⟩ + i|1⟩)/√2 lands at y = −1 here.
    pub fn from_state(state: &[Complex64; 2]) -> Self {
        let alpha = state[0];
        let beta = state[1];

        // The raw Re/Im parts of α·β* range over [-1/2, 1/2]; the factor of
        // two scales them onto the unit sphere.
        let cross = alpha * beta.conj();

        Self {
            x: 2.0 * cross.re,
            y: 2.0 * cross.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Euclidean length of the vector
    ///
    /// 1.0 for pure states; less than 1.0 for interior points such as
    /// interpolated animation frames.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether this vector sits on the unit sphere (magnitude ≈ 1)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Convert to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        // Degenerate near-zero vector: pin to the north pole
        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Name the state if it lies at one of the six cardinal points
    pub fn special_state(&self) -> Option<&'static str> {
        const EPS: f64 = 0.01;
        if (self.z - 1.0).abs() < EPS {
            Some("|0⟩")
        } else if (self.z + 1.0).abs() < EPS {
            Some("|1⟩")
        } else if (self.x - 1.0).abs() < EPS && self.z.abs() < EPS {
            Some("|+⟩")
        } else if (self.x + 1.0).abs() < EPS && self.z.abs() < EPS {
            Some("|−⟩")
        } else if (self.y + 1.0).abs() < EPS && self.z.abs() < EPS {
            Some("|+i⟩")
        } else if (self.y - 1.0).abs() < EPS && self.z.abs() < EPS {
            Some("|−i⟩")
        } else {
            None
        }
    }

    /// Multi-line description of the vector for console display
    pub fn describe(&self) -> String {
        let angles = self.to_angles();
        let mut desc = format!(
            "Bloch Vector: ({:.4}, {:.4}, {:.4})\nMagnitude: {:.4}\nAngles: θ={:.4}, φ={:.4}\n",
            self.x,
            self.y,
            self.z,
            self.magnitude(),
            angles.theta,
            angles.phi
        );
        if let Some(name) = self.special_state() {
            desc.push_str(&format!("State: {}\n", name));
        }
        desc
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates back to a Cartesian Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }

    /// Reconstruct amplitude coefficients `[α, β]` for these angles
    ///
    /// β carries phase −φ so the pair projects back through
    /// [`BlochVector::from_state`] (which uses α·β*) onto this point.
    pub fn to_state(&self) -> [Complex64; 2] {
        let half = self.theta / 2.0;
        [
            Complex64::new(half.cos(), 0.0),
            Complex64::new(half.sin() * self.phi.cos(), -half.sin() * self.phi.sin()),
        ]
    }
}
