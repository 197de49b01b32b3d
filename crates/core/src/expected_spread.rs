//! Expected spread rate through a random two-fuel mosaic
//!
//! Finney (2003) estimates the spread rate across a landscape of randomly
//! placed fuel patches as the mean over sampled landscapes of the fastest
//! path through them. The default sampler builds each landscape as a grid of
//! unit cells and finds the minimum travel time row by row, letting the fire
//! move sideways up to `laterals` cells per row at the elliptical flank rate.
//!
//! # References
//! - Finney, M.A. (2003). "Calculation of fire spread rates across random landscapes."
//!   International Journal of Wildland Fire, 12, 167-174.

use crate::physics::fire_shape;
use crate::SMIDGEN;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inputs of one expected-rate estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadSample {
    /// Spread rate in each fuel (any rate units; the result has the same units)
    pub ros: [f64; 2],
    /// Coverage of the first fuel (fraction); the second covers the rest
    pub cover0: f64,
    /// Fire length-to-width ratio
    pub lw_ratio: f64,
    /// Number of landscapes sampled
    pub samples: usize,
    /// Rows the fire must cross
    pub depth: usize,
    /// Largest sideways step per row
    pub laterals: usize,
}

/// Estimator behind the two-dimensional fuel blend
pub trait ExpectedSpreadSampler: Send + Sync {
    fn expected_rate(&self, sample: &SpreadSample) -> f64;
}

/// Seeded Monte Carlo estimator
///
/// Every call reseeds, so identical inputs give identical rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinneySampler {
    pub seed: u64,
}

impl Default for FinneySampler {
    fn default() -> Self {
        Self { seed: 0x00B3_4A7E }
    }
}

impl FinneySampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ExpectedSpreadSampler for FinneySampler {
    fn expected_rate(&self, sample: &SpreadSample) -> f64 {
        if sample.ros[0] < SMIDGEN && sample.ros[1] < SMIDGEN {
            return 0.0;
        }
        let samples = sample.samples.max(1);
        let depth = sample.depth.max(1);
        let cols = (2 * sample.laterals + 1).max(depth);
        let e = fire_shape::eccentricity(sample.lw_ratio);

        // rate[fuel][step] for each sideways step 0..=laterals
        let rates: Vec<Vec<f64>> = sample
            .ros
            .iter()
            .map(|&ros| {
                (0..=sample.laterals)
                    .map(|dc| {
                        let beta = (dc as f64).atan().to_degrees();
                        fire_shape::spread_at_beta(ros, e, beta)
                    })
                    .collect()
            })
            .collect();
        let travel = |fuel: usize, dc: usize| {
            let rate = rates[fuel][dc];
            if rate < SMIDGEN {
                f64::INFINITY
            } else {
                (dc as f64).hypot(1.0) / rate
            }
        };

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut fuel = vec![0_usize; cols];
        let mut time = vec![0.0; cols];
        let mut next = vec![0.0; cols];
        let mut total = 0.0;
        for _ in 0..samples {
            for r in 0..depth {
                for f in &mut fuel {
                    *f = usize::from(rng.random::<f64>() >= sample.cover0);
                }
                if r == 0 {
                    for c in 0..cols {
                        time[c] = travel(fuel[c], 0);
                    }
                    continue;
                }
                for c in 0..cols {
                    let mut best = f64::INFINITY;
                    for dc in 0..=sample.laterals {
                        let left = (c + cols - dc % cols) % cols;
                        let right = (c + dc) % cols;
                        let step = travel(fuel[c], dc);
                        best = best.min(time[left] + step).min(time[right] + step);
                    }
                    next[c] = best;
                }
                std::mem::swap(&mut time, &mut next);
            }
            let fastest = time.iter().copied().fold(f64::INFINITY, f64::min);
            if fastest.is_finite() && fastest > 0.0 {
                total += depth as f64 / fastest;
            }
        }
        total / samples as f64
    }
}
