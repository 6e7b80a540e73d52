//! Binomial distribution
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use log::debug;
use rand::Rng;
use std::f64;
use std::fmt;
use std::ops::Add;

use crate::data::{BernoulliSuffStat, Sample};
use crate::impl_display;
use crate::misc::ln_binom;
use crate::traits::*;

/// [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
/// of the number of successes in *n* trials with success probability *p*
///
/// The mean (`np`) and standard deviation (`sqrt(np(1-p))`) are always
/// computed from `n` and `p`, so they cannot drift out of sync.
///
/// # Examples
///
/// ```
/// use gausbin::prelude::*;
///
/// let binom = Binomial::new(4, 0.5).unwrap();
/// let f = binom.pmf(&2_u32).unwrap();
///
/// assert!((f - 0.375).abs() < 1E-12);
/// ```
///
/// Values outside the support of [0, n] are an error
///
/// ```
/// # use gausbin::prelude::*;
/// let binom = Binomial::new(4, 0.5).unwrap();
/// assert!(binom.pmf(&5_u32).is_err());
/// assert!(binom.pmf(&-1_i32).is_err());
/// ```
///
/// Two binomials with the same *p* add up
///
/// ```
/// # use gausbin::prelude::*;
/// let a = Binomial::new(5, 0.3).unwrap();
/// let b = Binomial::new(3, 0.3).unwrap();
/// assert_eq!((a + b).unwrap().n(), 8);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(try_from = "BinomialParameters"))]
#[cfg_attr(feature = "serde1", serde(into = "BinomialParameters"))]
pub struct Binomial {
    /// Total number of trials
    n: u64,
    /// Probability of a success
    p: f64,
    /// Loaded observations
    observations: Sample,
}

impl PartialEq for Binomial {
    fn eq(&self, other: &Binomial) -> bool {
        self.n == other.n && self.p == other.p
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct BinomialParameters {
    pub n: u64,
    pub p: f64,
}

impl TryFrom<BinomialParameters> for Binomial {
    type Error = BinomialError;

    fn try_from(params: BinomialParameters) -> Result<Self, Self::Error> {
        Binomial::new(params.n, params.p)
    }
}

impl From<Binomial> for BinomialParameters {
    fn from(binom: Binomial) -> Self {
        binom.emit_params()
    }
}

impl Parameterized for Binomial {
    type Parameters = BinomialParameters;

    fn emit_params(&self) -> Self::Parameters {
        Self::Parameters {
            n: self.n(),
            p: self.p(),
        }
    }

    fn from_params(params: Self::Parameters) -> Self {
        Self::new_unchecked(params.n, params.p)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BinomialError {
    /// Bernoulli p is less than zero
    PLessThanZero { p: f64 },
    /// Bernoulli p is greater than one
    PGreaterThanOne { p: f64 },
    /// Bernoulli p is infinite or NaN
    PNotFinite { p: f64 },
    /// Estimation was attempted without any observations
    EmptySample,
    /// An observation other than 0 or 1 was found at `index`
    NonBinaryDatum { index: usize, value: f64 },
    /// The mass function was evaluated outside of [0, n]
    KOutOfRange { k: i128, n: u64 },
    /// Only binomials with equal p can be added
    IncompatibleP { p: f64, other: f64 },
    /// The combined number of trials does not fit in a `u64`
    TrialCountOverflow { n: u64, other: u64 },
}

fn check_p(p: f64) -> Result<f64, BinomialError> {
    if !p.is_finite() {
        Err(BinomialError::PNotFinite { p })
    } else if p > 1.0 {
        Err(BinomialError::PGreaterThanOne { p })
    } else if p < 0.0 {
        Err(BinomialError::PLessThanZero { p })
    } else {
        Ok(p)
    }
}

impl Binomial {
    /// Create a new Binomial distribution
    ///
    /// # Arguments
    ///
    /// - n: the total number of trials
    /// - p: the pobability of success
    pub fn new(n: u64, p: f64) -> Result<Self, BinomialError> {
        check_p(p).map(|p| Binomial::new_unchecked(n, p))
    }

    /// Creates a new Binomial without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(n: u64, p: f64) -> Self {
        Binomial {
            n,
            p,
            observations: Sample::default(),
        }
    }

    /// A Binomial distribution with a 50% chance of success
    ///
    /// # Example
    ///
    /// ```rust
    /// # use gausbin::dist::Binomial;
    /// let binom = Binomial::uniform(11);
    /// assert_eq!(binom.p(), 0.5);
    /// ```
    #[inline]
    pub fn uniform(n: u64) -> Self {
        Binomial::new_unchecked(n, 0.5)
    }

    /// Get the number of trials
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Set the number of trials
    #[inline]
    pub fn set_n(&mut self, n: u64) {
        self.n = n
    }

    /// Get the probability of success
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Set p, the probability of success.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use gausbin::dist::Binomial;
    /// let mut binom = Binomial::new(10, 0.2).unwrap();
    /// assert!(binom.set_p(0.0).is_ok());
    /// assert!(binom.set_p(1.0).is_ok());
    /// assert!(binom.set_p(-1.0).is_err());
    /// assert!(binom.set_p(1.1).is_err());
    /// assert!(binom.set_p(f64::NAN).is_err());
    /// assert_eq!(binom.p(), 1.0);
    /// ```
    #[inline]
    pub fn set_p(&mut self, p: f64) -> Result<(), BinomialError> {
        let p = check_p(p)?;
        self.set_p_unchecked(p);
        Ok(())
    }

    /// Set p without input validation
    #[inline]
    pub fn set_p_unchecked(&mut self, p: f64) {
        self.p = p;
    }

    /// The complement of `p`, i.e. `(1 - p)`.
    #[inline]
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }

    /// Mean, `n * p`
    #[inline]
    pub fn derive_mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    /// Standard deviation, `sqrt(n * p * (1 - p))`.
    ///
    /// Fails if `p` is outside of [0, 1], which can only happen through the
    /// `_unchecked` constructors and setters.
    pub fn derive_stdev(&self) -> Result<f64, BinomialError> {
        let p = check_p(self.p)?;
        Ok((self.n as f64 * p * (1.0 - p)).sqrt())
    }

    /// Estimate `p` and `n` from loaded 0/1 observations and overwrite them.
    ///
    /// `n` becomes the number of observations and `p` the fraction that are
    /// `1`. Every observation must be exactly `0` or `1`; otherwise nothing
    /// is changed.
    ///
    /// # Example
    ///
    /// ```
    /// use gausbin::prelude::*;
    ///
    /// let mut binom = Binomial::default();
    /// binom.load_sample("1\n1\n0\n1\n0".as_bytes()).unwrap();
    ///
    /// let (p, n) = binom.estimate_from_sample().unwrap();
    /// assert!((p - 0.6).abs() < 1E-12);
    /// assert_eq!(n, 5);
    /// ```
    pub fn estimate_from_sample(&mut self) -> Result<(f64, u64), BinomialError> {
        let mut stat = BernoulliSuffStat::new();
        for (index, &value) in self.observations.iter().enumerate() {
            let success = if value == 1.0 {
                true
            } else if value == 0.0 {
                false
            } else {
                return Err(BinomialError::NonBinaryDatum { index, value });
            };
            stat.observe(&success);
        }

        let p = stat.success_rate().ok_or(BinomialError::EmptySample)?;
        let n = stat.n() as u64;
        debug!(
            "binomial re-estimated from {} trials with {} successes: p = {}",
            n,
            stat.k(),
            p
        );
        self.p = p;
        self.n = n;
        Ok((p, n))
    }

    /// Distribution of the total successes of two independent binomials
    /// with the same `p`.
    ///
    /// `p` is compared exactly. The result holds no observations.
    pub fn combine(&self, other: &Binomial) -> Result<Binomial, BinomialError> {
        if self.p != other.p {
            return Err(BinomialError::IncompatibleP {
                p: self.p,
                other: other.p,
            });
        }
        self.n
            .checked_add(other.n)
            .map(|n| Binomial::new_unchecked(n, self.p))
            .ok_or(BinomialError::TrialCountOverflow {
                n: self.n,
                other: other.n,
            })
    }

    /// Every `k` in `[0, n]` paired with its probability mass.
    pub fn pmf_points(&self) -> Result<(Vec<u64>, Vec<f64>), BinomialError> {
        let ks: Vec<u64> = (0..=self.n).collect();
        let ps = ks
            .iter()
            .map(|k| self.pmf(k))
            .collect::<Result<Vec<f64>, _>>()?;
        Ok((ks, ps))
    }

    // Caller guarantees `k <= n` and a valid `p`
    fn ln_pmf_unchecked(&self, k: u64) -> f64 {
        // p^0 and q^0 are exactly 1, but 0 * ln(0) is NaN
        if self.p == 0.0 {
            return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if self.p == 1.0 {
            return if k == self.n { 0.0 } else { f64::NEG_INFINITY };
        }

        let nf = self.n as f64;
        let kf = k as f64;
        self.q().ln().mul_add(
            nf - kf,
            self.p.ln().mul_add(kf, ln_binom(nf, kf)),
        )
    }
}

impl Default for Binomial {
    fn default() -> Self {
        Binomial::new_unchecked(1, 1.0)
    }
}

impl From<&Binomial> for String {
    fn from(b: &Binomial) -> String {
        format!(
            "mean {:?}, standard deviation {:?}, p {:?}, n {}",
            b.mean(),
            b.stdev(),
            b.p,
            b.n
        )
    }
}

impl_display!(Binomial);

impl Add for Binomial {
    type Output = Result<Binomial, BinomialError>;

    fn add(self, other: Binomial) -> Self::Output {
        self.combine(&other)
    }
}

impl<'a> Add<&'a Binomial> for &'a Binomial {
    type Output = Result<Binomial, BinomialError>;

    fn add(self, other: &'a Binomial) -> Self::Output {
        self.combine(other)
    }
}

impl Distribution for Binomial {
    type Error = BinomialError;

    fn mean(&self) -> f64 {
        self.derive_mean()
    }

    fn stdev(&self) -> f64 {
        self.derive_stdev().unwrap_or(f64::NAN)
    }

    fn observations(&self) -> &Sample {
        &self.observations
    }

    fn set_observations(&mut self, sample: Sample) {
        self.observations = sample;
    }

    fn refresh_from_sample(&mut self) -> Result<BinomialParameters, BinomialError> {
        self.estimate_from_sample()?;
        Ok(self.emit_params())
    }
}

macro_rules! impl_int_traits {
    ($kind:ty) => {
        impl HasDensity<$kind> for Binomial {
            fn ln_f(&self, k: &$kind) -> Result<f64, BinomialError> {
                check_p(self.p)?;
                if !self.supports(k) {
                    return Err(BinomialError::KOutOfRange {
                        k: *k as i128,
                        n: self.n,
                    });
                }
                Ok(self.ln_pmf_unchecked(*k as u64))
            }
        }

        impl Sampleable<$kind> for Binomial {
            /// # Panics
            ///
            /// If `p` is outside of [0, 1]
            fn draw<R: Rng>(&self, rng: &mut R) -> $kind {
                let b = rand_distr::Binomial::new(self.n, self.p)
                    .expect("binomial p outside of [0, 1]");
                rng.sample(b) as $kind
            }
        }

        impl Support<$kind> for Binomial {
            #[allow(unused_comparisons)]
            fn supports(&self, k: &$kind) -> bool {
                *k >= 0 && (*k as u64) <= self.n
            }
        }

        impl DiscreteDistr<$kind> for Binomial {}

        impl Cdf<$kind> for Binomial {
            #[allow(unused_comparisons)]
            fn cdf(&self, k: &$kind) -> f64 {
                if *k < 0 {
                    return 0.0;
                }
                let upper = (*k as u64).min(self.n);
                let total: f64 = (0..=upper)
                    .map(|x| self.ln_pmf_unchecked(x).exp())
                    .sum();
                total.min(1.0)
            }
        }
    };
}

impl_int_traits!(u8);
impl_int_traits!(u16);
impl_int_traits!(u32);
impl_int_traits!(u64);
impl_int_traits!(usize);

impl_int_traits!(i8);
impl_int_traits!(i16);
impl_int_traits!(i32);
impl_int_traits!(i64);

impl std::error::Error for BinomialError {}

impl fmt::Display for BinomialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PLessThanZero { p } => {
                write!(f, "p ({}) was less than zero", p)
            }
            Self::PGreaterThanOne { p } => {
                write!(f, "p ({}) was greater than one", p)
            }
            Self::PNotFinite { p } => write!(f, "p ({}) was non-finite", p),
            Self::EmptySample => {
                write!(f, "cannot estimate from an empty sample")
            }
            Self::NonBinaryDatum { index, value } => write!(
                f,
                "observation {} is {}, expected 0 or 1",
                index, value
            ),
            Self::KOutOfRange { k, n } => {
                write!(f, "k ({}) is outside of [0, {}]", k, n)
            }
            Self::IncompatibleP { p, other } => write!(
                f,
                "cannot add binomials with different p ({} and {})",
                p, other
            ),
            Self::TrialCountOverflow { n, other } => write!(
                f,
                "combined number of trials ({} + {}) overflows",
                n, other
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    const TOL: f64 = 1E-12;

    use crate::test_basic_impls;
    test_basic_impls!(Binomial::uniform(10));

    fn with_data(xs: Vec<f64>) -> Binomial {
        let mut binom = Binomial::default();
        binom.set_observations(Sample::new(xs).unwrap());
        binom
    }

    #[test]
    fn new() {
        let binom = Binomial::new(10, 0.6).unwrap();
        assert_eq!(binom.n, 10);
        assert::close(binom.p, 0.6, TOL);
    }

    #[test]
    fn new_accepts_zero_trials() {
        let binom = Binomial::new(0, 0.3).unwrap();
        assert_eq!(binom.mean(), 0.0);
        assert_eq!(binom.stdev(), 0.0);
    }

    #[test]
    fn new_should_reject_low_p() {
        assert!(Binomial::new(10, -0.1).is_err());
        assert!(Binomial::new(10, -1.0).is_err());
    }

    #[test]
    fn new_should_reject_high_p() {
        assert!(Binomial::new(10, 1.1).is_err());
        assert!(Binomial::new(10, 200.0).is_err());
    }

    #[test]
    fn default_is_one_sure_trial() {
        let binom = Binomial::default();
        assert_eq!(binom.n(), 1);
        assert_eq!(binom.p(), 1.0);
        assert_eq!(binom.mean(), 1.0);
        assert_eq!(binom.stdev(), 0.0);
    }

    #[test]
    fn derived_mean_and_stdev() {
        let binom = Binomial::new(21, 0.21).unwrap();
        assert::close(binom.derive_mean(), 4.41, TOL);
        assert::close(binom.derive_stdev().unwrap(), 3.4839_f64.sqrt(), TOL);
        assert::close(binom.variance(), 3.4839, TOL);
    }

    #[test]
    fn derived_stats_follow_parameter_changes() {
        let mut binom = Binomial::new(10, 0.5).unwrap();
        binom.set_n(20);
        binom.set_p(0.25).unwrap();
        assert::close(binom.mean(), 5.0, TOL);
        assert::close(binom.stdev(), 3.75_f64.sqrt(), TOL);
    }

    #[test]
    fn derive_stdev_rejects_invalid_p() {
        let binom = Binomial::new_unchecked(4, 1.5);
        assert_eq!(
            binom.derive_stdev(),
            Err(BinomialError::PGreaterThanOne { p: 1.5 })
        );
        assert!(binom.stdev().is_nan());
    }

    #[test]
    fn pmf_of_fair_coin() {
        let binom = Binomial::new(4, 0.5).unwrap();
        assert::close(binom.pmf(&2_u64).unwrap(), 0.375, TOL);
    }

    #[test]
    fn ln_pmf() {
        let binom = Binomial::new(10, 0.6).unwrap();
        let xs: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let known_values = vec![
            -9.162_907_318_741_55,
            -6.454_857_117_639_339,
            -4.545_314_612_754_902,
            -3.159_020_251_635_010_5,
            -2.193_939_355_591_423_3,
            -1.606_152_690_689_303_8,
            -1.383_009_139_375_095,
            -1.537_159_819_202_353_5,
            -2.112_523_964_105_916_4,
            -3.211_136_252_774_024_6,
            -5.108_256_237_659_907,
        ];
        let generated_values: Vec<f64> =
            xs.iter().map(|x| binom.ln_pmf(x).unwrap()).collect();
        assert::close(known_values, generated_values, TOL);
    }

    #[test]
    fn pmf_at_p_zero_and_one() {
        let never = Binomial::new(3, 0.0).unwrap();
        assert_eq!(never.pmf(&0_u8).unwrap(), 1.0);
        assert_eq!(never.pmf(&2_u8).unwrap(), 0.0);

        let always = Binomial::new(3, 1.0).unwrap();
        assert_eq!(always.pmf(&3_u8).unwrap(), 1.0);
        assert_eq!(always.pmf(&1_u8).unwrap(), 0.0);
    }

    #[test]
    fn pmf_outside_support_is_an_error() {
        let binom = Binomial::new(4, 0.5).unwrap();
        assert_eq!(
            binom.pmf(&5_u32),
            Err(BinomialError::KOutOfRange { k: 5, n: 4 })
        );
        assert_eq!(
            binom.pmf(&-1_i64),
            Err(BinomialError::KOutOfRange { k: -1, n: 4 })
        );
    }

    #[test]
    fn pmf_with_invalid_p_is_an_error() {
        let binom = Binomial::new_unchecked(4, -0.5);
        assert_eq!(
            binom.pmf(&1_u32),
            Err(BinomialError::PLessThanZero { p: -0.5 })
        );
    }

    #[test]
    fn pmf_stays_finite_for_large_n() {
        let binom = Binomial::new(1000, 0.5).unwrap();
        let f = binom.pmf(&500_u32).unwrap();
        assert!(f.is_finite());
        assert::close(f, 0.025_225_018_178_360_804, 1E-10);
    }

    #[test]
    fn pmf_sums_to_one() {
        let binom = Binomial::new(30, 0.37).unwrap();
        let (_, ps) = binom.pmf_points().unwrap();
        assert::close(ps.iter().sum::<f64>(), 1.0, 1E-10);
    }

    #[test]
    fn pmf_points_cover_support() {
        let binom = Binomial::new(3, 0.5).unwrap();
        let (ks, ps) = binom.pmf_points().unwrap();
        assert_eq!(ks, vec![0, 1, 2, 3]);
        assert::close(ps, vec![0.125, 0.375, 0.375, 0.125], TOL);
    }

    #[test]
    fn cdf() {
        let binom = Binomial::new(10, 0.6).unwrap();
        let xs: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let known_values = vec![
            0.000_104_857_600_000_000_06,
            0.001_677_721_600_000_000_5,
            0.012_294_553_600_000_008,
            0.054_761_881_600_000_02,
            0.166_238_617_6,
            0.366_896_742_400_000_03,
            0.617_719_398_399_999_9,
            0.832_710_246_4,
            0.953_642_598_4,
            0.993_953_382_4,
            1.0,
        ];
        let generated_values: Vec<f64> =
            xs.iter().map(|x| binom.cdf(x)).collect();
        assert::close(known_values, generated_values, TOL);
    }

    #[test]
    fn cdf_outside_support() {
        let binom = Binomial::new(10, 0.6).unwrap();
        assert_eq!(binom.cdf(&-3_i32), 0.0);
        assert::close(binom.cdf(&42_i32), 1.0, TOL);
    }

    #[test]
    fn support() {
        let binom = Binomial::new(10, 0.6).unwrap();
        assert!((0..=10).all(|x: i32| binom.supports(&x)));
        assert!(!binom.supports(&-1_i32));
        assert!(!binom.supports(&11_u32));
    }

    #[test]
    fn estimate_from_sample() {
        let mut binom = with_data(vec![1.0, 1.0, 0.0, 1.0, 0.0]);
        let (p, n) = binom.estimate_from_sample().unwrap();
        assert::close(p, 0.6, TOL);
        assert_eq!(n, 5);
        assert_eq!(binom, Binomial::new(5, 0.6).unwrap());
        assert::close(binom.mean(), 3.0, TOL);
        assert::close(binom.stdev(), 1.2_f64.sqrt(), TOL);
    }

    #[test]
    fn estimate_from_empty_sample() {
        let mut binom = Binomial::default();
        assert_eq!(binom.estimate_from_sample(), Err(BinomialError::EmptySample));
        assert_eq!(binom.refresh_from_sample(), Err(BinomialError::EmptySample));
    }

    #[test]
    fn estimate_rejects_non_binary_data() {
        let mut binom = with_data(vec![1.0, 0.0, 2.0, 1.0]);
        assert_eq!(
            binom.estimate_from_sample(),
            Err(BinomialError::NonBinaryDatum {
                index: 2,
                value: 2.0
            })
        );
        // untouched
        assert_eq!(binom, Binomial::default());
    }

    #[test]
    fn refresh_from_sample_returns_parameters() {
        let mut binom = with_data(vec![0.0, 0.0, 0.0, 1.0]);
        let params = binom.refresh_from_sample().unwrap();
        assert_eq!(params, BinomialParameters { n: 4, p: 0.25 });
    }

    #[test]
    fn combine_sums_trials() {
        let a = Binomial::new(5, 0.3).unwrap();
        let b = Binomial::new(7, 0.3).unwrap();
        let c = a.combine(&b).unwrap();
        assert_eq!(c, Binomial::new(12, 0.3).unwrap());
        assert!(c.observations().is_empty());
    }

    #[test]
    fn combine_rejects_different_p() {
        let a = Binomial::new(5, 0.3).unwrap();
        let b = Binomial::new(3, 0.4).unwrap();
        assert_eq!(
            &a + &b,
            Err(BinomialError::IncompatibleP { p: 0.3, other: 0.4 })
        );
    }

    #[test]
    fn combine_is_associative_in_n() {
        let a = Binomial::new(2, 0.7).unwrap();
        let b = Binomial::new(9, 0.7).unwrap();
        let c = Binomial::new(4, 0.7).unwrap();
        let left = (&(&a + &b).unwrap() + &c).unwrap();
        let right = (&a + &(&b + &c).unwrap()).unwrap();
        assert_eq!(left.n(), 15);
        assert_eq!(left, right);
    }

    #[test]
    fn combine_rejects_trial_count_overflow() {
        let a = Binomial::new(u64::MAX, 0.5).unwrap();
        let b = Binomial::new(1, 0.5).unwrap();
        assert_eq!(
            a.combine(&b),
            Err(BinomialError::TrialCountOverflow {
                n: u64::MAX,
                other: 1
            })
        );
        assert_eq!(a + Binomial::uniform(0), Ok(Binomial::uniform(u64::MAX)));
    }

    #[test]
    fn params_round_trip() {
        let binom = Binomial::new(12, 0.125).unwrap();
        let params = binom.emit_params();
        assert_eq!(params, BinomialParameters { n: 12, p: 0.125 });
        assert_eq!(Binomial::from_params(params), binom);
    }

    #[test]
    fn display() {
        let binom = Binomial::new(4, 0.5).unwrap();
        assert_eq!(
            binom.to_string(),
            "mean 2.0, standard deviation 1.0, p 0.5, n 4"
        );
    }

    #[test]
    fn draws_stay_in_support() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let binom = Binomial::new(5, 0.6).unwrap();
        let xs: Vec<u32> = binom.sample(1000, &mut rng);
        assert!(xs.iter().all(|x| binom.supports(x)));
        let mean = xs.iter().map(|&x| f64::from(x)).sum::<f64>() / 1000.0;
        assert::close(mean, 3.0, 0.2);
    }

    #[cfg(feature = "serde1")]
    crate::test_serde_params!(Binomial::new(7, 0.35).unwrap(), Binomial);
}
