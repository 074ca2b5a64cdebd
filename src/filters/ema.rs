use num_traits::float::FloatCore;

/// Exponential Moving Average filter state
///
/// Unlike a lazily seeded EMA, the filter starts from an explicit value so the
/// first sample is blended rather than adopted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaFilter<T = f32> {
    previous: T,
}

impl<T: FloatCore> EmaFilter<T> {
    pub const fn new(initial: T) -> Self {
        Self { previous: initial }
    }

    /// Apply EMA filter: output = alpha * input + (1 - alpha) * previous
    ///
    /// Neither input nor alpha is range checked.
    pub fn apply(&mut self, input: T, alpha: T) -> T {
        let output = alpha * input + (T::one() - alpha) * self.previous;
        self.previous = output;
        output
    }

    /// Current filter output
    pub fn value(&self) -> T {
        self.previous
    }

    /// Overwrite filter state
    pub fn reset(&mut self, value: T) {
        self.previous = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_blends_with_initial() {
        let mut filter = EmaFilter::new(0.5_f32);
        let output = filter.apply(1.0, 0.3);
        // output = 0.3 * 1.0 + 0.7 * 0.5 = 0.65
        assert!((output - 0.65).abs() < 1e-6);
    }

    #[test]
    fn lower_alpha_more_smoothing() {
        let mut filter_low = EmaFilter::new(0.0_f32);
        let mut filter_high = EmaFilter::new(0.0_f32);

        let out_low = filter_low.apply(1.0, 0.1);
        let out_high = filter_high.apply(1.0, 0.9);

        // Higher alpha should respond more to new input
        assert!(out_high > out_low);
    }

    #[test]
    fn unit_alpha_tracks_input() {
        let mut filter = EmaFilter::new(0.5_f64);
        assert_eq!(filter.apply(0.2, 1.0), 0.2);
        assert_eq!(filter.apply(0.9, 1.0), 0.9);
    }

    #[test]
    fn reset_overwrites_state() {
        let mut filter = EmaFilter::new(0.0_f32);
        filter.apply(1.0, 0.3);
        filter.apply(1.0, 0.3);

        filter.reset(0.5);

        assert_eq!(filter.value(), 0.5);
    }
}
