//! Gaussian/Normal distribution over x in (-∞, ∞)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use log::debug;
use rand::Rng;
use rand_distr::StandardNormal;
use special::Error as _;
use std::f64::consts::SQRT_2;
use std::fmt;
use std::ops::Add;

use crate::consts::{DEFAULT_PDF_SPACES, HALF_LN_2PI};
use crate::data::{GaussianSuffStat, Sample};
use crate::impl_display;
use crate::traits::{
    Cdf, ContinuousDistr, Distribution, HasDensity, Parameterized, Sampleable,
    Support,
};

/// Gaussian / [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution),
/// N(μ, σ) over real values.
///
/// `σ = 0` is allowed and describes a point mass at μ. Its density is
/// undefined, so evaluating it returns [`GaussianError::Degenerate`].
///
/// # Examples
///
/// Estimate the parameters from data
///
/// ```
/// use gausbin::prelude::*;
///
/// let mut gauss = Gaussian::default();
/// gauss.load_sample("2\n4\n4\n4\n5\n5\n7\n9".as_bytes()).unwrap();
///
/// // population standard deviation
/// let params = gauss.refresh_from_sample_with(false).unwrap();
/// assert!((params.mu - 5.0).abs() < 1E-12);
/// assert!((params.sigma - 2.0).abs() < 1E-12);
/// ```
///
/// Sum of two independent Gaussians
///
/// ```
/// # use gausbin::prelude::*;
/// let sum = Gaussian::new(1.0, 3.0).unwrap() + Gaussian::new(2.0, 4.0).unwrap();
/// assert_eq!(sum.mu(), 3.0);
/// assert_eq!(sum.sigma(), 5.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(try_from = "GaussianParameters"))]
#[cfg_attr(feature = "serde1", serde(into = "GaussianParameters"))]
pub struct Gaussian {
    /// Mean
    mu: f64,
    /// Standard deviation
    sigma: f64,
    /// Loaded observations
    observations: Sample,
}

impl PartialEq for Gaussian {
    fn eq(&self, other: &Gaussian) -> bool {
        self.mu == other.mu && self.sigma == other.sigma
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GaussianParameters {
    pub mu: f64,
    pub sigma: f64,
}

impl TryFrom<GaussianParameters> for Gaussian {
    type Error = GaussianError;

    fn try_from(params: GaussianParameters) -> Result<Self, Self::Error> {
        Gaussian::new(params.mu, params.sigma)
    }
}

impl From<Gaussian> for GaussianParameters {
    fn from(gauss: Gaussian) -> Self {
        gauss.emit_params()
    }
}

impl Parameterized for Gaussian {
    type Parameters = GaussianParameters;

    fn emit_params(&self) -> Self::Parameters {
        Self::Parameters {
            mu: self.mu(),
            sigma: self.sigma(),
        }
    }

    fn from_params(params: Self::Parameters) -> Self {
        Self::new_unchecked(params.mu, params.sigma)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GaussianError {
    /// The mu parameter is infinite or NaN
    MuNotFinite { mu: f64 },
    /// The sigma parameter is less than zero
    SigmaNegative { sigma: f64 },
    /// The sigma parameter is infinite or NaN
    SigmaNotFinite { sigma: f64 },
    /// Estimation was attempted without any observations
    EmptySample,
    /// Too few observations for the requested estimator
    InsufficientData { n: usize, required: usize },
    /// The density of a zero-width Gaussian was requested
    Degenerate { mu: f64 },
}

fn check_mu(mu: f64) -> Result<f64, GaussianError> {
    if mu.is_finite() {
        Ok(mu)
    } else {
        Err(GaussianError::MuNotFinite { mu })
    }
}

fn check_sigma(sigma: f64) -> Result<f64, GaussianError> {
    if sigma < 0.0 {
        Err(GaussianError::SigmaNegative { sigma })
    } else if !sigma.is_finite() {
        Err(GaussianError::SigmaNotFinite { sigma })
    } else {
        Ok(sigma)
    }
}

impl Gaussian {
    /// Create a new Gaussian distribution
    ///
    /// # Arguments
    /// - mu: mean
    /// - sigma: standard deviation
    pub fn new(mu: f64, sigma: f64) -> Result<Self, GaussianError> {
        let mu = check_mu(mu)?;
        let sigma = check_sigma(sigma)?;
        Ok(Gaussian::new_unchecked(mu, sigma))
    }

    /// Creates a new Gaussian without checking whether the parameters are
    /// valid.
    #[inline]
    #[must_use]
    pub fn new_unchecked(mu: f64, sigma: f64) -> Self {
        Gaussian {
            mu,
            sigma,
            observations: Sample::default(),
        }
    }

    /// Standard normal
    ///
    /// # Example
    ///
    /// ```rust
    /// # use gausbin::dist::Gaussian;
    /// let gauss = Gaussian::standard();
    ///
    /// assert_eq!(gauss, Gaussian::new(0.0, 1.0).unwrap());
    /// ```
    #[inline]
    #[must_use]
    pub fn standard() -> Self {
        Gaussian::new_unchecked(0.0, 1.0)
    }

    /// Get mu parameter
    #[inline]
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Set the value of mu
    ///
    /// # Example
    ///
    /// ```rust
    /// # use gausbin::dist::Gaussian;
    /// let mut gauss = Gaussian::new(2.0, 1.5).unwrap();
    /// assert!(gauss.set_mu(1.3).is_ok());
    /// assert!(gauss.set_mu(f64::INFINITY).is_err());
    /// assert!(gauss.set_mu(f64::NAN).is_err());
    /// assert_eq!(gauss.mu(), 1.3);
    /// ```
    #[inline]
    pub fn set_mu(&mut self, mu: f64) -> Result<(), GaussianError> {
        let mu = check_mu(mu)?;
        self.set_mu_unchecked(mu);
        Ok(())
    }

    /// Set the value of mu without input validation
    #[inline]
    pub fn set_mu_unchecked(&mut self, mu: f64) {
        self.mu = mu;
    }

    /// Get sigma parameter
    #[inline]
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Set the value of sigma
    ///
    /// # Example
    ///
    /// ```rust
    /// # use gausbin::dist::Gaussian;
    /// let mut gauss = Gaussian::standard();
    /// assert!(gauss.set_sigma(2.3).is_ok());
    /// assert!(gauss.set_sigma(0.0).is_ok());
    /// assert!(gauss.set_sigma(-1.0).is_err());
    /// assert!(gauss.set_sigma(f64::INFINITY).is_err());
    /// assert!(gauss.set_sigma(f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn set_sigma(&mut self, sigma: f64) -> Result<(), GaussianError> {
        let sigma = check_sigma(sigma)?;
        self.set_sigma_unchecked(sigma);
        Ok(())
    }

    /// Set the value of sigma without input validation
    #[inline]
    pub fn set_sigma_unchecked(&mut self, sigma: f64) {
        self.sigma = sigma;
    }

    fn suffstat(&self) -> Result<GaussianSuffStat, GaussianError> {
        if self.observations.is_empty() {
            Err(GaussianError::EmptySample)
        } else {
            Ok(GaussianSuffStat::from(&self.observations))
        }
    }

    /// Arithmetic mean of the loaded observations.
    ///
    /// Fails with [`GaussianError::MuNotFinite`] if the running mean
    /// overflows.
    pub fn estimate_mean(&self) -> Result<f64, GaussianError> {
        self.suffstat().and_then(|stat| check_mu(stat.mean()))
    }

    /// Standard deviation of the loaded observations.
    ///
    /// With `use_sample_correction` the sum of squared deviations is divided
    /// by `n - 1` (Bessel's correction), which needs at least two
    /// observations. Otherwise it is divided by `n`. An estimate that
    /// overflows is a [`GaussianError::SigmaNotFinite`].
    pub fn estimate_stdev(
        &self,
        use_sample_correction: bool,
    ) -> Result<f64, GaussianError> {
        let stat = self.suffstat()?;
        let n = stat.n();
        let denom = if use_sample_correction {
            if n < 2 {
                return Err(GaussianError::InsufficientData { n, required: 2 });
            }
            (n - 1) as f64
        } else {
            n as f64
        };
        check_sigma((stat.sum_sq_dev() / denom).sqrt())
    }

    /// Overwrite mu and sigma with estimates from the loaded observations.
    ///
    /// Nothing is changed if either estimate fails.
    pub fn refresh_from_sample_with(
        &mut self,
        use_sample_correction: bool,
    ) -> Result<GaussianParameters, GaussianError> {
        let mu = self.estimate_mean()?;
        let sigma = self.estimate_stdev(use_sample_correction)?;
        debug!(
            "gaussian re-estimated from {} observations: mu = {}, sigma = {}",
            self.observations.len(),
            mu,
            sigma
        );
        self.mu = mu;
        self.sigma = sigma;
        Ok(self.emit_params())
    }

    /// Distribution of the sum of two independent Gaussians.
    ///
    /// The result holds no observations.
    #[must_use]
    pub fn combine(&self, other: &Gaussian) -> Gaussian {
        Gaussian::new_unchecked(self.mu + other.mu, self.sigma.hypot(other.sigma))
    }

    /// Points to draw the density over the range of the loaded observations.
    ///
    /// Produces `n_spaces` (default
    /// [`DEFAULT_PDF_SPACES`](crate::consts::DEFAULT_PDF_SPACES)) evenly
    /// spaced `x` starting at the smallest observation, with step
    /// `(max - min) / n_spaces`, paired with the density at each.
    pub fn pdf_points(
        &self,
        n_spaces: Option<usize>,
    ) -> Result<(Vec<f64>, Vec<f64>), GaussianError> {
        let n_spaces = n_spaces.unwrap_or(DEFAULT_PDF_SPACES);
        let (min, max) = self
            .observations
            .min()
            .zip(self.observations.max())
            .ok_or(GaussianError::EmptySample)?;

        let interval = (max - min) / n_spaces as f64;
        let xs: Vec<f64> = (0..n_spaces)
            .map(|ix| interval.mul_add(ix as f64, min))
            .collect();
        let ys = xs
            .iter()
            .map(|x| self.pdf(x))
            .collect::<Result<Vec<f64>, _>>()?;

        Ok((xs, ys))
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Gaussian::standard()
    }
}

impl From<&Gaussian> for String {
    fn from(gauss: &Gaussian) -> String {
        format!("mean {:?}, standard deviation {:?}", gauss.mu, gauss.sigma)
    }
}

impl_display!(Gaussian);

impl Add for Gaussian {
    type Output = Gaussian;

    fn add(self, other: Gaussian) -> Gaussian {
        self.combine(&other)
    }
}

impl<'a> Add<&'a Gaussian> for &'a Gaussian {
    type Output = Gaussian;

    fn add(self, other: &'a Gaussian) -> Gaussian {
        self.combine(other)
    }
}

impl Distribution for Gaussian {
    type Error = GaussianError;

    fn mean(&self) -> f64 {
        self.mu
    }

    fn stdev(&self) -> f64 {
        self.sigma
    }

    fn observations(&self) -> &Sample {
        &self.observations
    }

    fn set_observations(&mut self, sample: Sample) {
        self.observations = sample;
    }

    fn refresh_from_sample(&mut self) -> Result<GaussianParameters, GaussianError> {
        self.refresh_from_sample_with(true)
    }
}

macro_rules! impl_traits {
    ($kind:ty) => {
        impl HasDensity<$kind> for Gaussian {
            fn ln_f(&self, x: &$kind) -> Result<f64, GaussianError> {
                if self.sigma == 0.0 {
                    return Err(GaussianError::Degenerate { mu: self.mu });
                }
                let k = (f64::from(*x) - self.mu) / self.sigma;
                Ok((0.5 * k).mul_add(-k, -self.sigma.ln()) - HALF_LN_2PI)
            }
        }

        impl ContinuousDistr<$kind> for Gaussian {}

        impl Support<$kind> for Gaussian {
            fn supports(&self, x: &$kind) -> bool {
                x.is_finite()
            }
        }

        impl Cdf<$kind> for Gaussian {
            fn cdf(&self, x: &$kind) -> f64 {
                let xf = f64::from(*x);
                if self.sigma == 0.0 {
                    return if xf < self.mu { 0.0 } else { 1.0 };
                }
                let errf = ((xf - self.mu) / (self.sigma * SQRT_2)).error();
                0.5 * (1.0 + errf)
            }
        }

        impl Sampleable<$kind> for Gaussian {
            fn draw<R: Rng>(&self, rng: &mut R) -> $kind {
                let z: f64 = rng.sample(StandardNormal);
                self.sigma.mul_add(z, self.mu) as $kind
            }
        }
    };
}

impl_traits!(f32);
impl_traits!(f64);

impl std::error::Error for GaussianError {}

impl fmt::Display for GaussianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MuNotFinite { mu } => write!(f, "non-finite mu: {mu}"),
            Self::SigmaNegative { sigma } => {
                write!(f, "sigma ({sigma}) must not be negative")
            }
            Self::SigmaNotFinite { sigma } => {
                write!(f, "non-finite sigma: {sigma}")
            }
            Self::EmptySample => {
                write!(f, "cannot estimate from an empty sample")
            }
            Self::InsufficientData { n, required } => write!(
                f,
                "estimator needs at least {required} observations, got {n}"
            ),
            Self::Degenerate { mu } => write!(
                f,
                "density of a Gaussian with zero sigma (point mass at {mu}) \
                 is undefined"
            ),
        }
    }
}
