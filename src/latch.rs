//! Latching class selection for the multi-class filter.
//!
//! Operates on smoothed per-class confidences.

use num_traits::float::FloatCore;

/// Index and value of the largest element.
///
/// Ties resolve to the lowest index. A NaN anywhere in the slice is returned
/// as the result, at the index of the first NaN; since NaN never exceeds a
/// threshold, a latch holds its class for as long as any confidence is NaN.
/// Returns `None` for an empty slice.
pub fn argmax<T: FloatCore>(values: &[T]) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;

    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            return Some((index, value));
        }

        // Strict comparison keeps the first maximum
        let replace = match best {
            None => true,
            Some((_, current)) => value > current,
        };

        if replace {
            best = Some((index, value));
        }
    }

    best
}

/// Sticky selection: the latched class only moves when some class's
/// confidence rises strictly above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLatch<T = f32> {
    pub threshold: T,
}

impl<T: FloatCore> ConfidenceLatch<T> {
    pub const fn new(threshold: T) -> Self {
        Self { threshold }
    }

    /// Returns the class to report given the current latched class.
    pub fn apply(&self, confidences: &[T], latched: usize) -> usize {
        match argmax(confidences) {
            Some((index, peak)) if peak > self.threshold => index,
            _ => latched,
        }
    }
}
