//! Drives both decision filters with a synthetic noisy classifier stream.
//!
//! Run with `RUST_LOG=debug` to see state transitions logged by grip-latch.

use grip_latch::{BinaryDecisionFilter, GripState, MultiClassDecisionFilter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

fn main() {
    env_logger::init();

    println!("=== grip-latch control loop ===\n");

    // Fixed seed keeps runs comparable
    let mut rng = StdRng::seed_from_u64(0x2545_f491);
    let binary_noise = Normal::new(0.0_f32, 0.2).expect("Valid noise parameters");
    let class_noise = Normal::new(0.0_f32, 0.1).expect("Valid noise parameters");

    // Intent: closed for 15 cycles, open for 25, closed again
    println!("1. Binary open/close (alpha=0.3, band 0.1..0.9)");
    let mut grip = BinaryDecisionFilter::<f32>::default();

    println!("   cycle  raw    smoothed  state");
    for cycle in 0..60 {
        let intent = if (15..40).contains(&cycle) { 0.95 } else { 0.05 };
        let raw = intent + binary_noise.sample(&mut rng);

        let state = grip.update(raw);
        let marker = if state == GripState::Open { "OPEN" } else { "" };
        println!(
            "   {:5}  {:5.2}  {:8.3}  {}",
            cycle,
            raw,
            grip.smoothed_output(),
            marker
        );
    }
    println!();

    println!("2. Multi-class grip selection (3 classes, alpha=0.3, threshold=0.7)");
    let mut selector = MultiClassDecisionFilter::<3>::new(0.3, 0.7);

    println!("   cycle  raw                 class");
    for cycle in 0..45 {
        let intended = cycle / 15;
        let mut raw = [0.1_f32; 3];
        raw[intended] = 0.8;
        for p in raw.iter_mut() {
            *p = (*p + class_noise.sample(&mut rng)).max(0.0);
        }
        let sum: f32 = raw.iter().sum();
        raw.iter_mut().for_each(|p| *p /= sum);

        let class = selector.update(&raw);
        println!(
            "   {:5}  [{:.2} {:.2} {:.2}]  {}",
            cycle, raw[0], raw[1], raw[2], class
        );
    }
}
