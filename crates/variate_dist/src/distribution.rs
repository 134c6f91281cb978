//! The common contract implemented by every distribution family.

use crate::sampler::Sampler;

/// Selects which end of a mode plateau to report.
///
/// Families with a single peak return the same value for both bounds. The
/// uniform family has no peak at all and reports its support bounds instead,
/// a documented convention kept for callers that always want a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeBound {
    /// The smallest modal value.
    Lower,
    /// The largest modal value.
    Upper,
}

/// A univariate continuous probability distribution.
///
/// Implementations expose their support, moments, order statistics and the
/// density/cumulative functions as total functions over all of `f64`:
/// outside the support `pdf` is zero and `cdf` clamps to 0 or 1.
///
/// Drawing variates is delegated to a per-distribution [`Sampler`] value
/// created by [`sampler`](Distribution::sampler), keeping the distribution
/// itself immutable.
///
/// # Examples
/// ```
/// use variate_dist::{Distribution, Exponential};
///
/// let dist = Exponential::new(3.0).unwrap();
/// assert_eq!(dist.mean(), 1.0 / 3.0);
/// assert_eq!(dist.cdf(-1.0), 0.0);
/// assert_eq!(dist.ccdf(0.0), 1.0);
/// ```
pub trait Distribution {
    /// The sampler type drawing variates of this distribution.
    type Sampler: Sampler;

    /// Infimum of the support.
    fn min(&self) -> f64;

    /// Supremum of the support.
    fn max(&self) -> f64;

    /// The support as a `(min, max)` pair.
    fn range(&self) -> (f64, f64) {
        (self.min(), self.max())
    }

    /// Expected value.
    fn mean(&self) -> f64;

    /// Variance.
    fn variance(&self) -> f64;

    /// The 50% quantile.
    fn median(&self) -> f64;

    /// A modal value, disambiguated by `bound` when the mode is not unique.
    fn mode(&self, bound: ModeBound) -> f64;

    /// Probability density at `x`; zero outside the support.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative probability at `x`, clamped to `[0, 1]` outside the
    /// support.
    fn cdf(&self, x: f64) -> f64;

    /// Complementary cumulative probability, `1 - cdf(x)`.
    fn ccdf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Creates a fresh sampler for this distribution.
    fn sampler(&self) -> Self::Sampler;
}
