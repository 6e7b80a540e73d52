//! Probability distributions
pub mod binomial;
pub mod gaussian;

pub use self::binomial::{Binomial, BinomialError, BinomialParameters};
pub use self::gaussian::{Gaussian, GaussianError, GaussianParameters};
