//! Observations read from newline-delimited numeric text
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::misc::vec_to_string;

/// An ordered sequence of finite observations.
///
/// # Example
///
/// ```
/// use gausbin::data::Sample;
///
/// let sample: Sample = "1.5\n-2\n3e1\n".parse().unwrap();
/// assert_eq!(sample.as_slice(), &[1.5, -2.0, 30.0]);
/// ```
///
/// Parsing is all or nothing
///
/// ```
/// # use gausbin::data::{Sample, SampleError};
/// let err = "1.5\nabc\n3".parse::<Sample>().unwrap_err();
/// assert!(matches!(err, SampleError::Format { line: 2, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(transparent))]
pub struct Sample {
    xs: Vec<f64>,
}

#[derive(Debug)]
pub enum SampleError {
    /// The source could not be read
    Io(io::Error),
    /// A line (1-based) could not be parsed as a number
    Format { line: usize, content: String },
    /// The observation at a (0-based) position is NaN or infinite
    NonFinite { index: usize, value: f64 },
}

impl Sample {
    /// Create a sample from observations, rejecting NaN and infinities
    pub fn new(xs: Vec<f64>) -> Result<Self, SampleError> {
        match xs.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(SampleError::NonFinite {
                index,
                value: xs[index],
            }),
            None => Ok(Sample { xs }),
        }
    }

    /// Read one number per line from `reader`.
    ///
    /// Surrounding whitespace on each line is ignored and a trailing newline
    /// is optional. Any other line that does not parse fails the whole read.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SampleError> {
        let mut xs = Vec::new();
        for (ix, line) in reader.lines().enumerate() {
            let line = line.map_err(SampleError::Io)?;
            let content = line.trim();
            let x = content.parse::<f64>().map_err(|_| SampleError::Format {
                line: ix + 1,
                content: content.to_owned(),
            })?;
            if !x.is_finite() {
                return Err(SampleError::NonFinite {
                    index: ix,
                    value: x,
                });
            }
            trace!("line {}: {}", ix + 1, x);
            xs.push(x);
        }
        debug!("loaded sample of {} observations", xs.len());
        Ok(Sample { xs })
    }

    /// Read one number per line from the file at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let path = path.as_ref();
        debug!("reading sample from {}", path.display());
        let file = File::open(path).map_err(SampleError::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of observations
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The observations in load order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.xs.iter()
    }

    /// Smallest observation, `None` if empty
    pub fn min(&self) -> Option<f64> {
        self.xs.iter().copied().reduce(f64::min)
    }

    /// Largest observation, `None` if empty
    pub fn max(&self) -> Option<f64> {
        self.xs.iter().copied().reduce(f64::max)
    }

    /// Distinct values with the number of times each occurs, in ascending
    /// order of value.
    ///
    /// # Example
    ///
    /// ```
    /// # use gausbin::data::Sample;
    /// let sample: Sample = "1\n0\n1\n1".parse().unwrap();
    /// assert_eq!(sample.value_counts(), vec![(0.0, 1), (1.0, 3)]);
    /// ```
    pub fn value_counts(&self) -> Vec<(f64, usize)> {
        self.xs
            .iter()
            .copied()
            .sorted_by(f64::total_cmp)
            .dedup_with_count()
            .map(|(count, x)| (x, count))
            .collect()
    }

    /// Bin the observations into `bins` equal-width bins spanning
    /// `[min, max]`.
    ///
    /// When every observation is identical the range is widened to
    /// `[x - 0.5, x + 0.5]`. Returns `None` if the sample is empty or `bins`
    /// is zero.
    pub fn histogram(&self, bins: usize) -> Option<Histogram> {
        let (min, max) = self.min().zip(self.max())?;
        if bins == 0 {
            return None;
        }

        let (lower, upper) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let nbins = bins as f64;
        // scale before subtracting so extreme ranges stay finite
        let width = upper / nbins - lower / nbins;

        let edges: Vec<f64> = (0..=bins)
            .map(|ix| width.mul_add(ix as f64, lower))
            .collect();

        let mut counts = vec![0_usize; bins];
        self.xs.iter().for_each(|&x| {
            // the last bin is closed on the right
            let frac = (x / nbins - lower / nbins) / width;
            let ix = ((frac * nbins).floor() as usize).min(bins - 1);
            counts[ix] += 1;
        });

        Some(Histogram { edges, counts })
    }
}

impl From<&Sample> for String {
    fn from(sample: &Sample) -> String {
        if sample.is_empty() {
            String::from("Sample([])")
        } else {
            format!("Sample({})", vec_to_string(&sample.xs, 8))
        }
    }
}

crate::impl_display!(Sample);

impl FromStr for Sample {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = SampleError;

    fn try_from(xs: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(xs)
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.xs
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.xs.iter()
    }
}

/// Equal-width binning of a [`Sample`]
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Number of observations in each bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Counts normalized so that the area under the histogram is one
    pub fn densities(&self) -> Vec<f64> {
        let total: usize = self.counts.iter().sum();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = total as f64;
        self.counts
            .iter()
            .zip(self.edges.iter().tuple_windows())
            .map(|(&count, (lower, upper))| {
                count as f64 / (total * (upper - lower))
            })
            .collect()
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read sample: {err}"),
            Self::Format { line, content } => {
                write!(f, "line {line} is not a number: '{content}'")
            }
            Self::NonFinite { index, value } => {
                write!(f, "observation {index} is not finite: {value}")
            }
        }
    }
}
