#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::data::Sample;
use crate::traits::SuffStat;

/// Gaussian sufficient statistic.
///
/// Holds the number of observations, their running mean, and the running
/// sum of squared deviations from that mean (Welford's update).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct GaussianSuffStat {
    /// Number of observations
    n: usize,
    /// Mean of `x`
    mean: f64,
    /// Sum of squared deviations from the mean
    sx: f64,
}

impl GaussianSuffStat {
    #[inline]
    pub fn new() -> Self {
        GaussianSuffStat {
            n: 0,
            mean: 0.0,
            sx: 0.0,
        }
    }

    /// Get the number of observations
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the sample mean
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sum of `(x - mean)^2`
    #[inline]
    pub fn sum_sq_dev(&self) -> f64 {
        self.sx
    }
}

impl Default for GaussianSuffStat {
    fn default() -> Self {
        GaussianSuffStat::new()
    }
}

impl From<&Sample> for GaussianSuffStat {
    fn from(sample: &Sample) -> Self {
        let mut stat = GaussianSuffStat::new();
        stat.observe_many(sample.as_slice());
        stat
    }
}

impl SuffStat<f64> for GaussianSuffStat {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, x: &f64) {
        let xf = *x;

        self.n += 1;

        let mean_xn =
            (xf - self.mean).mul_add((self.n as f64).recip(), self.mean);
        self.sx = (xf - self.mean).mul_add(xf - mean_xn, self.sx);
        self.mean = mean_xn;
    }
}
