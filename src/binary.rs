use num_traits::float::FloatCore;

use crate::config::{BinaryConfig, ConfigError};
use crate::filters::EmaFilter;
use crate::hysteresis::HysteresisBand;
use crate::state::GripState;

/// Smooths a scalar open-probability and debounces it into [`GripState`].
///
/// Each control cycle, [`update`](Self::update) blends the new probability
/// into a running estimate and runs that estimate through a hysteresis band.
/// Inputs are not clamped: values outside [0, 1] are filtered as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryDecisionFilter<T = f32> {
    alpha: T,
    band: HysteresisBand<T>,
    ema: EmaFilter<T>,
    state: GripState,
}

impl<T: FloatCore> BinaryDecisionFilter<T> {
    /// Build a filter without validating its parameters.
    ///
    /// The smoothed estimate starts at the midpoint of the band.
    /// Use [`from_config`](Self::from_config) for checked construction.
    pub fn new(alpha: T, upper_threshold: T, lower_threshold: T) -> Self {
        let band = HysteresisBand::new(upper_threshold, lower_threshold);
        Self {
            alpha,
            band,
            ema: EmaFilter::new(band.midpoint()),
            state: GripState::Closed,
        }
    }

    pub fn from_config(config: BinaryConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.alpha,
            config.upper_threshold,
            config.lower_threshold,
        ))
    }

    pub fn config(&self) -> BinaryConfig<T> {
        BinaryConfig {
            alpha: self.alpha,
            upper_threshold: self.band.upper,
            lower_threshold: self.band.lower,
        }
    }

    pub fn update(&mut self, input_probability: T) -> GripState {
        let smoothed = self.ema.apply(input_probability, self.alpha);

        let next = self.band.apply(smoothed, self.state);
        if next != self.state {
            trace_debug!("grip {} -> {}", self.state, next);
            self.state = next;
        }

        self.state
    }

    /// Return to a closed grip with the estimate at 0.5.
    ///
    /// This is 0.5 regardless of the configured band, so it only matches the
    /// constructed state when the band is centred on 0.5.
    pub fn reset(&mut self) {
        let half = T::one() / (T::one() + T::one());
        self.ema.reset(half);
        self.state = GripState::Closed;
        trace_debug!("binary filter reset");
    }

    pub fn state(&self) -> GripState {
        self.state
    }

    pub fn smoothed_output(&self) -> T {
        self.ema.value()
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    pub fn upper_threshold(&self) -> T {
        self.band.upper
    }

    pub fn lower_threshold(&self) -> T {
        self.band.lower
    }
}

impl<T> Default for BinaryDecisionFilter<T>
where
    T: FloatCore,
    BinaryConfig<T>: Default,
{
    fn default() -> Self {
        let config = BinaryConfig::default();
        Self::new(config.alpha, config.upper_threshold, config.lower_threshold)
    }
}
