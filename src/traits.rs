//! Trait definitions
use std::io::BufRead;
use std::path::Path;

use rand::Rng;

use crate::data::{Sample, SampleError};

/// A distribution that can be converted to and from a plain parameter set
pub trait Parameterized: Sized {
    type Parameters;

    /// Emit the current parameters
    fn emit_params(&self) -> Self::Parameters;

    /// Build a distribution from parameters without validating them
    fn from_params(params: Self::Parameters) -> Self;
}

/// Shared contract of every distribution family.
///
/// A distribution always reports a mean and a standard deviation. It may
/// also hold a [`Sample`] of observations which, once loaded, can be used to
/// re-estimate its parameters with [`Distribution::refresh_from_sample`].
///
/// # Example
///
/// ```
/// use gausbin::prelude::*;
///
/// let mut gauss = Gaussian::standard();
/// gauss.load_sample("1.0\n2.0\n3.0".as_bytes()).unwrap();
///
/// let params = gauss.refresh_from_sample().unwrap();
/// assert_eq!(params.mu, 2.0);
/// assert_eq!(gauss.mean(), 2.0);
/// assert_eq!(gauss.stdev(), 1.0);
/// ```
pub trait Distribution: Parameterized {
    type Error: std::error::Error;

    /// The central tendency of the distribution
    fn mean(&self) -> f64;

    /// The spread of the distribution. Never negative.
    fn stdev(&self) -> f64;

    /// The square of the standard deviation
    fn variance(&self) -> f64 {
        let stdev = self.stdev();
        stdev * stdev
    }

    /// The observations currently held by the distribution
    fn observations(&self) -> &Sample;

    /// Replace the held observations
    fn set_observations(&mut self, sample: Sample);

    /// Parse newline-delimited numbers from `reader` and hold them as the
    /// distribution's observations.
    ///
    /// On failure the previously held observations are left untouched.
    fn load_sample<R: BufRead>(
        &mut self,
        reader: R,
    ) -> Result<&Sample, SampleError> {
        let sample = Sample::from_reader(reader)?;
        self.set_observations(sample);
        Ok(self.observations())
    }

    /// Same as [`Distribution::load_sample`], reading from the file at
    /// `path`.
    fn load_sample_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<&Sample, SampleError> {
        let sample = Sample::from_path(path)?;
        self.set_observations(sample);
        Ok(self.observations())
    }

    /// Overwrite the parameters with estimates computed from the held
    /// observations and return them.
    fn refresh_from_sample(&mut self) -> Result<Self::Parameters, Self::Error>;
}

/// Density (or mass) evaluation for datum type `X`
pub trait HasDensity<X>: Distribution {
    /// Log of the probability density/mass at `x`
    fn ln_f(&self, x: &X) -> Result<f64, Self::Error>;

    /// Probability density/mass at `x`
    fn f(&self, x: &X) -> Result<f64, Self::Error> {
        self.ln_f(x).map(f64::exp)
    }
}

/// Marker for densities over continuous values
pub trait ContinuousDistr<X>: HasDensity<X> {
    /// The value of the Probability Density Function (PDF) at `x`
    fn pdf(&self, x: &X) -> Result<f64, Self::Error> {
        self.f(x)
    }

    /// The value of the log Probability Density Function (PDF) at `x`
    fn ln_pdf(&self, x: &X) -> Result<f64, Self::Error> {
        self.ln_f(x)
    }
}

/// Marker for mass functions over discrete values
pub trait DiscreteDistr<X>: HasDensity<X> {
    /// The value of the Probability Mass Function (PMF) at `x`
    fn pmf(&self, x: &X) -> Result<f64, Self::Error> {
        self.f(x)
    }

    /// The value of the log Probability Mass Function (PMF) at `x`
    fn ln_pmf(&self, x: &X) -> Result<f64, Self::Error> {
        self.ln_f(x)
    }
}

/// Cumulative distribution function
pub trait Cdf<X>: HasDensity<X> {
    /// The value of the Cumulative Density Function at `x`
    fn cdf(&self, x: &X) -> f64;

    /// Survival function
    fn sf(&self, x: &X) -> f64 {
        1.0 - self.cdf(x)
    }
}

/// Trait identifying the support of the distribution
pub trait Support<X> {
    /// Returns `true` if `x` is in the support
    fn supports(&self, x: &X) -> bool;
}

/// Random draws from a distribution
pub trait Sampleable<X> {
    /// Single draw
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// Is a [sufficient statistic](https://en.wikipedia.org/wiki/Sufficient_statistic)
/// for a distribution.
pub trait SuffStat<X> {
    /// Returns the number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x` into the statistic
    fn observe(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }
}
