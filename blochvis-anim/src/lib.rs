//! Frame interpolation between Bloch vectors
//!
//! Bridges an old projection to a new one with a finite, ordered sequence of
//! linearly-blended frames for animated display. The engine has no notion of
//! waiting: delivery pacing, cancellation, and redraw belong entirely to the
//! presentation layer consuming the frames.
//!
//! Intermediate frames are deliberately **not** renormalized onto the unit
//! sphere. A linear blend between two sphere points passes through the
//! interior chord, so mid-animation frames may have magnitude less than one.
//! The frames are transient display data, not physical states, and the
//! chord path is the documented contract.
//!
//! # Example
//!
//! ```
//! use blochvis_anim::interpolate;
//! use blochvis_core::BlochVector;
//!
//! let north = BlochVector::new(0.0, 0.0, 1.0);
//! let south = BlochVector::new(0.0, 0.0, -1.0);
//!
//! let frames: Vec<_> = interpolate(north, south, 4).collect();
//! assert_eq!(frames.len(), 5);
//! assert_eq!(frames[0], north);
//! assert_eq!(frames[4], south);
//! ```

pub mod interpolate;

pub use interpolate::{frames_vec, interpolate, Frames, DEFAULT_STEPS};
