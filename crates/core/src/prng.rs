//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Every random decision in a dot field (coherence draw, motion angle,
//! initial angular position, radius sampling, recycling jitter) is taken
//! from one owned instance of this generator, so a seed fully determines
//! the stimulus.

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed integer in the closed range [min, max].
    ///
    /// `min` and `max` may be given in either order.
    pub fn next_int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = hi.abs_diff(lo) + 1;
        lo + (self.next_u64() % span) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, the algorithm changed and every recorded
        // stimulus seed is invalidated.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        for _ in 0..3 {
            assert_ne!(rng.next_u64(), 0, "seed=0 guard failed");
        }
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut rng_a = Xorshift64::new(42);
        let mut rng_b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(
                rng_a.next_u64(),
                rng_b.next_u64(),
                "sequences diverged at index {i}"
            );
        }
    }

    #[test]
    fn cloned_generator_continues_identically() {
        let mut rng = Xorshift64::new(7);
        for _ in 0..50 {
            rng.next_u64();
        }
        let mut copy = rng.clone();
        for _ in 0..100 {
            assert_eq!(rng.next_u64(), copy.next_u64());
        }
    }

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&v),
                "next_f64() = {v} out of [0, 1) at iteration {i}"
            );
        }
    }

    #[test]
    fn next_range_stays_within_bounds() {
        let mut rng = Xorshift64::new(9999);
        for _ in 0..10_000 {
            let v = rng.next_range(0.0, 360.0);
            assert!((0.0..360.0).contains(&v), "next_range(0, 360) = {v}");
        }
    }

    #[test]
    fn next_int_inclusive_hits_both_endpoints() {
        let mut rng = Xorshift64::new(31337);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let v = rng.next_int_inclusive(-90, 90);
            assert!((-90..=90).contains(&v), "jitter {v} out of range");
            seen_min |= v == -90;
            seen_max |= v == 90;
        }
        assert!(seen_min && seen_max, "closed range endpoints never drawn");
    }

    #[test]
    fn next_int_inclusive_single_value_range() {
        let mut rng = Xorshift64::new(5);
        for _ in 0..100 {
            assert_eq!(rng.next_int_inclusive(4, 4), 4);
        }
    }

    #[test]
    fn next_int_inclusive_accepts_reversed_bounds() {
        let mut rng = Xorshift64::new(5);
        for _ in 0..1000 {
            let v = rng.next_int_inclusive(3, -3);
            assert!((-3..=3).contains(&v));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v), "next_f64() = {v} for seed {seed}");
                }
            }

            #[test]
            fn next_int_inclusive_in_bounds(
                seed: u64,
                min in -1_000_i64..1_000,
                len in 0_i64..1_000,
            ) {
                let mut rng = Xorshift64::new(seed);
                let max = min + len;
                for _ in 0..100 {
                    let v = rng.next_int_inclusive(min, max);
                    prop_assert!(v >= min && v <= max, "{v} outside [{min}, {max}]");
                }
            }

            #[test]
            fn next_f64_approximate_uniformity(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let idx = (rng.next_f64() * 10.0).min(9.0) as usize;
                    buckets[idx] += 1;
                }
                // Expected ~1000 per bucket; loose bound to avoid flakes.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i} has only {count} for seed {seed}");
                }
            }
        }
    }
}
