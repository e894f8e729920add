//! Linear frame sequence generation

use blochvis_core::BlochVector;

/// Default number of interpolation steps for a gate transition
pub const DEFAULT_STEPS: usize = 20;

/// Lazy iterator over the frames of one transition
///
/// Yields `steps + 1` frames indexed `k = 0..=steps`, where frame `k` is the
/// per-coordinate blend `old + (k/steps)·(new − old)`. Frame 0 is exactly the
/// old vector; the final frame is assigned the exact target value rather than
/// a computed blend, so no floating-point residue reaches the display.
#[derive(Clone, Debug)]
pub struct Frames {
    old: BlochVector,
    new: BlochVector,
    steps: usize,
    next_index: usize,
}

/// Interpolate from `old` to `new` over `steps` intervals
///
/// `steps` must be at least 1; 0 is clamped to 1 so the sequence always
/// contains both endpoints. Frame order is significant and preserved.
pub fn interpolate(old: BlochVector, new: BlochVector, steps: usize) -> Frames {
    Frames {
        old,
        new,
        steps: steps.max(1),
        next_index: 0,
    }
}

/// Eagerly collect the frames of one transition
pub fn frames_vec(old: BlochVector, new: BlochVector, steps: usize) -> Vec<BlochVector> {
    interpolate(old, new, steps).collect()
}

impl Iterator for Frames {
    type Item = BlochVector;

    fn next(&mut self) -> Option<BlochVector> {
        let k = self.next_index;
        if k > self.steps {
            return None;
        }
        self.next_index += 1;

        // Endpoints are exact by assignment, not by convergence.
        if k == 0 {
            return Some(self.old);
        }
        if k == self.steps {
            return Some(self.new);
        }

        let t = k as f64 / self.steps as f64;
        Some(BlochVector::new(
            self.old.x + t * (self.new.x - self.old.x),
            self.old.y + t * (self.new.y - self.old.y),
            self.old.z + t * (self.new.z - self.old.z),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps + 1 - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames {}
