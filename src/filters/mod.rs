/// Smoothing filters
///
/// One-pole IIR low-pass filters: y[n] = alpha * x[n] + (1 - alpha) * y[n-1].
/// The pole sits at 1 - alpha, so the filter is stable for 0 < alpha < 2.
mod ema;
mod vector_ema;

use num_traits::float::FloatCore;

pub use ema::EmaFilter;
pub use vector_ema::VectorEma;

/// Impulse response character of a smoothing gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GainResponse {
    /// 0 < alpha <= 1: non-negative, monotonically decaying response.
    /// Lower alpha = more smoothing, higher = more responsive
    Monotonic,

    /// 1 < alpha < 2: stable, but the response alternates sign and can overshoot
    Oscillating,

    /// alpha <= 0, alpha >= 2 or NaN
    Unstable,
}

pub fn classify_gain<T: FloatCore>(alpha: T) -> GainResponse {
    let two = T::one() + T::one();

    if alpha > T::zero() && alpha <= T::one() {
        GainResponse::Monotonic
    } else if alpha > T::one() && alpha < two {
        GainResponse::Oscillating
    } else {
        GainResponse::Unstable
    }
}
