mod bernoulli;
mod gaussian;

pub use bernoulli::BernoulliSuffStat;
pub use gaussian::GaussianSuffStat;
