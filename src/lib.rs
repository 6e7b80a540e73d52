//! Gaussian and Binomial distributions with method-of-moments estimation.
//!
//! Both families share the [`Distribution`](traits::Distribution) contract:
//! they report a mean and standard deviation, hold an optional sample of
//! observations loaded from newline-delimited text, and can re-estimate their
//! parameters from that sample. Density (or mass) evaluation goes through
//! [`HasDensity`](traits::HasDensity).
//!
//! # Example
//!
//! ```
//! use gausbin::prelude::*;
//!
//! let mut binom = Binomial::default();
//! binom.load_sample("1\n1\n0\n1\n0\n".as_bytes()).unwrap();
//!
//! let (p, n) = binom.estimate_from_sample().unwrap();
//! assert_eq!(n, 5);
//! assert!((p - 0.6).abs() < 1E-12);
//!
//! let gauss = Gaussian::standard() + Gaussian::standard();
//! assert!((gauss.sigma() - 2.0_f64.sqrt()).abs() < 1E-12);
//! ```
pub mod consts;
pub mod data;
pub mod dist;
pub mod misc;
pub mod prelude;
pub mod traits;


/// Implements `Display` for a type in terms of its `From<&T> for String`
/// impl.
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
