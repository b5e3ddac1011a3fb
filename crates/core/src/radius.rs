//! Initial-radius sampling for uniform dot density over a disk.
//!
//! The area of a thin ring at radius `r` grows linearly with `r`, so radii
//! are drawn from `{0, …, R-1}` with `P(r) = r / Σi`. Drawing radii
//! uniformly instead would crowd dots toward the center.

use crate::config::MAX_DOT_AREA_RADIUS;
use crate::error::RdmError;
use crate::prng::Xorshift64;

/// Discrete radius distribution with weight proportional to radius.
#[derive(Debug, Clone)]
pub struct RadiusSampler {
    /// `cumulative[k] = P(r <= k)`; the last entry is 1.
    cumulative: Vec<f64>,
}

impl RadiusSampler {
    /// Builds the distribution for an aperture of `aperture_radius` pixels.
    ///
    /// Returns `RdmError::InvalidConfig` when `aperture_radius <= 1`, where
    /// every weight is zero, or when it exceeds [`MAX_DOT_AREA_RADIUS`].
    pub fn new(aperture_radius: usize) -> Result<Self, RdmError> {
        if aperture_radius <= 1 {
            return Err(RdmError::InvalidConfig(format!(
                "aperture radius must be greater than 1, got {aperture_radius}"
            )));
        }
        if aperture_radius > MAX_DOT_AREA_RADIUS {
            return Err(RdmError::InvalidConfig(format!(
                "aperture radius must be at most {MAX_DOT_AREA_RADIUS}, got {aperture_radius}"
            )));
        }
        let r = aperture_radius as f64;
        let total = r * (r - 1.0) / 2.0;
        let cumulative = (0..aperture_radius)
            .map(|k| {
                let k = k as f64;
                k * (k + 1.0) / 2.0 / total
            })
            .collect();
        Ok(Self { cumulative })
    }

    /// Number of distinct radii, `R`.
    pub fn aperture_radius(&self) -> usize {
        self.cumulative.len()
    }

    /// Probability of drawing `radius`. Zero outside `[0, R)`.
    pub fn probability(&self, radius: usize) -> f64 {
        match radius {
            0 => self.cumulative[0],
            r if r < self.cumulative.len() => self.cumulative[r] - self.cumulative[r - 1],
            _ => 0.0,
        }
    }

    /// Expected radius, `(2R - 1) / 3`.
    pub fn mean(&self) -> f64 {
        (2.0 * self.aperture_radius() as f64 - 1.0) / 3.0
    }

    /// Draws one radius.
    pub fn sample(&self, rng: &mut Xorshift64) -> usize {
        let u = rng.next_f64();
        let idx = self.cumulative.partition_point(|&c| c <= u);
        // Rounding can leave the final entry a hair under 1.
        idx.min(self.cumulative.len() - 1)
    }

    /// Draws `n` independent radii.
    pub fn sample_n(&self, n: usize, rng: &mut Xorshift64) -> Vec<usize> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_radius_of_one_or_less() {
        assert!(matches!(
            RadiusSampler::new(1),
            Err(RdmError::InvalidConfig(_))
        ));
        assert!(matches!(
            RadiusSampler::new(0),
            Err(RdmError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_radius_beyond_limit() {
        assert!(matches!(
            RadiusSampler::new(1_000_000_000),
            Err(RdmError::InvalidConfig(_))
        ));
        assert!(RadiusSampler::new(MAX_DOT_AREA_RADIUS).is_ok());
    }

    #[test]
    fn radius_two_always_draws_one() {
        let sampler = RadiusSampler::new(2).unwrap();
        let mut rng = Xorshift64::new(1);
        assert!(sampler.sample_n(1000, &mut rng).iter().all(|&r| r == 1));
    }

    #[test]
    fn probabilities_are_proportional_to_radius() {
        let sampler = RadiusSampler::new(10).unwrap();
        let total: f64 = (0..10).map(|i| i as f64).sum();
        for r in 0..10 {
            let expected = r as f64 / total;
            assert!(
                (sampler.probability(r) - expected).abs() < 1e-12,
                "P({r}) = {}, expected {expected}",
                sampler.probability(r)
            );
        }
        assert_eq!(sampler.probability(10), 0.0);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let sampler = RadiusSampler::new(216).unwrap();
        let sum: f64 = (0..216).map(|r| sampler.probability(r)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_radius_is_never_drawn() {
        let sampler = RadiusSampler::new(50).unwrap();
        let mut rng = Xorshift64::new(99);
        assert!(sampler.sample_n(10_000, &mut rng).iter().all(|&r| r > 0));
    }

    #[test]
    fn samples_stay_below_aperture() {
        let sampler = RadiusSampler::new(37).unwrap();
        let mut rng = Xorshift64::new(2024);
        assert!(sampler.sample_n(10_000, &mut rng).iter().all(|&r| r < 37));
    }

    #[test]
    fn empirical_mean_is_about_two_thirds_of_radius() {
        let aperture = 256;
        let sampler = RadiusSampler::new(aperture).unwrap();
        let mut rng = Xorshift64::new(42);
        let n = 50_000;
        let mean = sampler.sample_n(n, &mut rng).iter().sum::<usize>() as f64 / n as f64;
        // Standard deviation of the distribution is ~R/sqrt(18) ≈ 60, so the
        // standard error over 50k draws is ~0.27 pixels.
        assert!(
            (mean - sampler.mean()).abs() < 2.0,
            "mean {mean}, expected {}",
            sampler.mean()
        );
        assert!((sampler.mean() - 2.0 * aperture as f64 / 3.0).abs() < 1.0);
    }

    #[test]
    fn outer_half_holds_three_quarters_of_dots() {
        // Uniform area density: the annulus r >= R/2 covers 3/4 of the disk.
        let sampler = RadiusSampler::new(200).unwrap();
        let mut rng = Xorshift64::new(8);
        let draws = sampler.sample_n(40_000, &mut rng);
        let outer = draws.iter().filter(|&&r| r >= 100).count() as f64 / draws.len() as f64;
        assert!((outer - 0.75).abs() < 0.02, "outer fraction {outer}");
    }

    #[test]
    fn same_seed_same_radii() {
        let sampler = RadiusSampler::new(100).unwrap();
        let a = sampler.sample_n(500, &mut Xorshift64::new(3));
        let b = sampler.sample_n(500, &mut Xorshift64::new(3));
        assert_eq!(a, b);
    }
}
