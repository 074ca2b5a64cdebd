use num_traits::AsPrimitive;
use num_traits::float::FloatCore;

use crate::config::{ConfigError, MultiClassConfig};
use crate::filters::VectorEma;
use crate::latch::ConfidenceLatch;

/// A probability vector whose length does not match the filter's class count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLengthError {
    pub expected: usize,
    pub actual: usize,
}

impl core::fmt::Display for InputLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "expected {} class probabilities, got {}",
            self.expected, self.actual
        )
    }
}

impl core::error::Error for InputLengthError {}

/// Smooths a probability vector over `N` grip classes and latches the
/// selected class index.
///
/// The reported class starts at 0 and only changes when some class's smoothed
/// confidence exceeds the threshold. Vectors are not normalized or clamped.
///
/// At least one class is required; a zero-class filter does not build:
///
/// ```compile_fail
/// use grip_latch::MultiClassDecisionFilter;
///
/// let _filter = MultiClassDecisionFilter::<0>::new(0.3, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiClassDecisionFilter<const N: usize, T = f32> {
    alpha: T,
    latch: ConfidenceLatch<T>,
    ema: VectorEma<T, N>,
    state: usize,
}

impl<const N: usize, T> MultiClassDecisionFilter<N, T>
where
    T: FloatCore + 'static,
    usize: AsPrimitive<T>,
{
    const HAS_CLASSES: () = assert!(N > 0, "MultiClassDecisionFilter needs at least one class");

    /// Build a filter without validating its parameters.
    ///
    /// Every class starts at the uniform confidence 1/N.
    pub fn new(alpha: T, threshold: T) -> Self {
        let () = Self::HAS_CLASSES;
        Self {
            alpha,
            latch: ConfidenceLatch::new(threshold),
            ema: VectorEma::new(Self::uniform()),
            state: 0,
        }
    }

    pub fn from_config(config: MultiClassConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.alpha, config.threshold))
    }

    pub fn config(&self) -> MultiClassConfig<T> {
        MultiClassConfig {
            alpha: self.alpha,
            threshold: self.latch.threshold,
        }
    }

    pub fn update(&mut self, input_vector: &[T; N]) -> usize {
        let smoothed = self.ema.apply(input_vector, self.alpha);

        let next = self.latch.apply(smoothed, self.state);
        if next != self.state {
            trace_debug!("grip class {} -> {}", self.state, next);
            self.state = next;
        }

        self.state
    }

    /// Update from a runtime-sized slice, e.g. a classifier output buffer.
    ///
    /// A slice whose length differs from `N` is rejected and leaves the
    /// filter untouched.
    pub fn try_update(&mut self, input_vector: &[T]) -> Result<usize, InputLengthError> {
        let samples: &[T; N] = input_vector.try_into().map_err(|_| {
            trace_warn!(
                "rejected probability vector of length {} (expected {})",
                input_vector.len(),
                N
            );
            InputLengthError {
                expected: N,
                actual: input_vector.len(),
            }
        })?;

        Ok(self.update(samples))
    }

    /// Return to class 0 with uniform confidences.
    pub fn reset(&mut self) {
        self.ema.reset(Self::uniform());
        self.state = 0;
        trace_debug!("multi-class filter reset");
    }

    pub fn state(&self) -> usize {
        self.state
    }

    pub fn smoothed_output(&self) -> &[T; N] {
        self.ema.values()
    }

    pub fn n_classes(&self) -> usize {
        N
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    pub fn threshold(&self) -> T {
        self.latch.threshold
    }

    fn uniform() -> [T; N] {
        let classes: T = N.as_();
        [T::one() / classes; N]
    }
}

impl<const N: usize, T> Default for MultiClassDecisionFilter<N, T>
where
    T: FloatCore + 'static,
    usize: AsPrimitive<T>,
    MultiClassConfig<T>: Default,
{
    fn default() -> Self {
        let config = MultiClassConfig::default();
        Self::new(config.alpha, config.threshold)
    }
}
