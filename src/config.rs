use num_traits::float::FloatCore;

use crate::filters::{GainResponse, classify_gain};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidAlpha,
    ThresholdOutOfRange,
    InvalidThresholdBand,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidAlpha => write!(f, "alpha must be in range (0.0, 2.0)"),
            ConfigError::ThresholdOutOfRange => write!(f, "thresholds must be in range [0.0, 1.0]"),
            ConfigError::InvalidThresholdBand => {
                write!(f, "lower_threshold must be less than upper_threshold")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Configuration for [`BinaryDecisionFilter`](crate::BinaryDecisionFilter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryConfig<T = f32> {
    pub alpha: T,
    pub upper_threshold: T,
    pub lower_threshold: T,
}

/// Configuration for [`MultiClassDecisionFilter`](crate::MultiClassDecisionFilter).
///
/// The class count is not part of the config; it is the filter's const parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiClassConfig<T = f32> {
    pub alpha: T,
    pub threshold: T,
}

impl<T: FloatCore> BinaryConfig<T> {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_alpha(self.alpha)?;

        if !is_unit(self.upper_threshold) || !is_unit(self.lower_threshold) {
            return Err(ConfigError::ThresholdOutOfRange);
        }

        // Equal edges collapse the band into a single cutoff
        if self.lower_threshold >= self.upper_threshold {
            return Err(ConfigError::InvalidThresholdBand);
        }

        Ok(())
    }
}

impl<T: FloatCore> MultiClassConfig<T> {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_alpha(self.alpha)?;

        if !is_unit(self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange);
        }

        Ok(())
    }
}

fn validate_alpha<T: FloatCore>(alpha: T) -> Result<(), ConfigError> {
    match classify_gain(alpha) {
        GainResponse::Unstable => Err(ConfigError::InvalidAlpha),
        GainResponse::Monotonic | GainResponse::Oscillating => Ok(()),
    }
}

// NaN fails both comparisons
fn is_unit<T: FloatCore>(value: T) -> bool {
    value >= T::zero() && value <= T::one()
}

macro_rules! impl_default_config {
    ($($t:ty),*) => {$(
        impl Default for BinaryConfig<$t> {
            fn default() -> Self {
                Self {
                    alpha: 0.3,
                    upper_threshold: 0.9,
                    lower_threshold: 0.1,
                }
            }
        }

        impl Default for MultiClassConfig<$t> {
            fn default() -> Self {
                Self {
                    alpha: 0.3,
                    threshold: 0.9,
                }
            }
        }
    )*};
}

impl_default_config!(f32, f64);
