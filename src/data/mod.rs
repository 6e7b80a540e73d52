//! Data utilities
mod sample;
mod stat;

pub use self::sample::{Histogram, Sample, SampleError};
pub use self::stat::{BernoulliSuffStat, GaussianSuffStat};
