use num_traits::float::FloatCore;

use crate::state::GripState;

/// Separate opening/closing thresholds to prevent boundary oscillation.
///
/// A closed grip opens only once the signal rises strictly above `upper`,
/// and an open grip closes only once it falls strictly below `lower`.
/// Anywhere inside the band the current state is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisBand<T = f32> {
    pub upper: T,
    pub lower: T,
}

impl<T: FloatCore> HysteresisBand<T> {
    pub const fn new(upper: T, lower: T) -> Self {
        Self { upper, lower }
    }

    /// Center of the band
    pub fn midpoint(&self) -> T {
        (self.upper + self.lower) / (T::one() + T::one())
    }

    pub fn apply(&self, value: T, state: GripState) -> GripState {
        match state {
            GripState::Closed if value > self.upper => GripState::Open,
            GripState::Open if value < self.lower => GripState::Closed,
            _ => state,
        }
    }
}
