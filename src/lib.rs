//! Decision smoothing for prosthetic grip classifiers.
//!
//! A classifier emits a noisy open-probability or class-probability vector
//! every control cycle. The filters here run that stream through a one-pole
//! IIR low-pass and a hysteresis stage so the actuator only changes state on
//! sustained evidence.
//!
//! ```
//! use grip_latch::{BinaryDecisionFilter, GripState, MultiClassDecisionFilter};
//!
//! let mut grip = BinaryDecisionFilter::new(0.3_f32, 0.9, 0.1);
//! assert_eq!(grip.update(1.0), GripState::Closed);
//!
//! let mut class = MultiClassDecisionFilter::<3>::new(1.0, 0.9);
//! assert_eq!(class.update(&[0.0, 0.0, 1.0]), 2);
//! ```

#![no_std]

#[macro_use]
mod trace;

mod config;
mod state;
pub mod filters;
pub mod hysteresis;
pub mod latch;

#[cfg(feature = "binary")]
mod binary;
#[cfg(feature = "multi-class")]
mod multi_class;

pub use config::{BinaryConfig, ConfigError, MultiClassConfig};
pub use state::GripState;
pub use filters::{EmaFilter, GainResponse, VectorEma, classify_gain};
pub use hysteresis::HysteresisBand;
pub use latch::{ConfidenceLatch, argmax};

#[cfg(feature = "binary")]
pub use binary::BinaryDecisionFilter;
#[cfg(feature = "multi-class")]
pub use multi_class::{InputLengthError, MultiClassDecisionFilter};
