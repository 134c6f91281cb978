//! The exponential family.

use variate_rng::{InvalidParameter, UnitRandom};

use crate::distribution::{Distribution, ModeBound};
use crate::sampler::Sampler;

/// An exponential distribution with rate `lambda`.
///
/// # Examples
/// ```
/// use variate_dist::{Distribution, Exponential};
///
/// let dist = Exponential::new(3.0).unwrap();
/// assert_eq!(dist.mean(), 1.0 / 3.0);
/// assert_eq!(dist.variance(), 1.0 / 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates an exponential distribution with the given rate.
    ///
    /// # Arguments
    /// * `lambda` - Rate parameter, must be positive
    pub fn new(lambda: f64) -> Result<Self, InvalidParameter> {
        if lambda <= 0.0 {
            return Err(InvalidParameter::NotPositive {
                name: "lambda",
                value: lambda,
            });
        }
        Ok(Self { lambda })
    }

    /// The standard exponential distribution with rate one.
    pub fn standard() -> Self {
        Self { lambda: 1.0 }
    }

    /// The rate parameter.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution for Exponential {
    type Sampler = ExponentialSampler;

    fn min(&self) -> f64 {
        0.0
    }

    fn max(&self) -> f64 {
        f64::INFINITY
    }

    fn mean(&self) -> f64 {
        1.0 / self.lambda
    }

    fn variance(&self) -> f64 {
        1.0 / (self.lambda * self.lambda)
    }

    fn median(&self) -> f64 {
        std::f64::consts::LN_2 / self.lambda
    }

    fn mode(&self, _bound: ModeBound) -> f64 {
        0.0
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            1.0 - (-self.lambda * x).exp()
        }
    }

    fn sampler(&self) -> ExponentialSampler {
        ExponentialSampler {
            lambda: self.lambda,
        }
    }
}

/// Inverse transform sampler for the exponential family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSampler {
    lambda: f64,
}

impl Sampler for ExponentialSampler {
    fn sample<R: UnitRandom + ?Sized>(&mut self, source: &mut R) -> f64 {
        // 1 - u keeps the argument of ln away from zero for u in [0, 1).
        -(1.0 - source.next_unit()).ln() / self.lambda
    }
}
