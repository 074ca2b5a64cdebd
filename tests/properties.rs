use grip_latch::{GripState, argmax};
use proptest::prelude::*;

#[cfg(feature = "binary")]
use grip_latch::BinaryDecisionFilter;
#[cfg(feature = "multi-class")]
use grip_latch::MultiClassDecisionFilter;

proptest! {
    #[cfg(feature = "binary")]
    #[test]
    fn constant_input_converges_monotonically(p in 0.0f64..=1.0, alpha in 0.05f64..0.99) {
        let mut filter = BinaryDecisionFilter::new(alpha, 0.9, 0.1);
        let mut distance = (filter.smoothed_output() - p).abs();

        for _ in 0..400 {
            filter.update(p);
            let next = (filter.smoothed_output() - p).abs();
            prop_assert!(next <= distance + 1e-12, "distance grew from {} to {}", distance, next);
            distance = next;
        }

        prop_assert!(distance < 1e-6);
    }

    #[cfg(feature = "binary")]
    #[test]
    fn open_state_holds_inside_band(
        alpha in 0.05f64..0.95,
        lower in 0.05f64..0.45,
        upper in 0.55f64..0.95,
        inputs in prop::collection::vec(0.0f64..=1.0, 1..100),
    ) {
        let mut filter = BinaryDecisionFilter::new(alpha, upper, lower);
        while filter.update(1.0) != GripState::Open {}

        // Inputs at or above the lower edge keep the estimate above it
        for p in inputs {
            let p = lower + 0.01 + p * (upper - lower);
            prop_assert_eq!(filter.update(p), GripState::Open);
        }
    }

    #[cfg(feature = "binary")]
    #[test]
    fn closed_state_holds_inside_band(
        alpha in 0.05f64..0.95,
        lower in 0.05f64..0.45,
        upper in 0.55f64..0.95,
        inputs in prop::collection::vec(0.0f64..=1.0, 1..100),
    ) {
        let mut filter = BinaryDecisionFilter::new(alpha, upper, lower);

        for p in inputs {
            let p = lower + p * (upper - lower - 0.01);
            prop_assert_eq!(filter.update(p), GripState::Closed);
        }
    }

    #[cfg(feature = "binary")]
    #[test]
    fn reset_is_history_independent(
        alpha in 0.01f64..1.99,
        inputs in prop::collection::vec(-1.0f64..2.0, 0..50),
    ) {
        let mut filter = BinaryDecisionFilter::new(alpha, 0.8, 0.3);
        for p in inputs {
            filter.update(p);
        }

        filter.reset();

        prop_assert_eq!(filter.smoothed_output(), 0.5);
        prop_assert_eq!(filter.state(), GripState::Closed);
    }

    #[test]
    fn argmax_returns_first_maximum(values in prop::collection::vec(0u8..4, 1..16)) {
        let values: Vec<f32> = values.into_iter().map(|v| v as f32 * 0.25).collect();

        let (index, peak) = argmax(&values).expect("non-empty");

        prop_assert!(values.iter().all(|&v| v <= peak));
        prop_assert!(values[..index].iter().all(|&v| v < peak));
        prop_assert_eq!(values[index], peak);
    }

    #[cfg(feature = "multi-class")]
    #[test]
    fn class_stays_latched_below_threshold(
        first in 0usize..4,
        inputs in prop::collection::vec(prop::array::uniform4(0.0f32..=0.8), 1..50),
    ) {
        let mut filter = MultiClassDecisionFilter::<4>::new(1.0, 0.8);
        let mut onehot = [0.0; 4];
        onehot[first] = 1.0;
        prop_assert_eq!(filter.update(&onehot), first);

        for input in inputs {
            prop_assert_eq!(filter.update(&input), first);
        }
    }
}
